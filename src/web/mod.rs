//! Web API module for brandmark.
//!
//! This module provides a JSON API over icon and logo generation, color
//! checks, palette export and per-session suggestions, for a browser
//! frontend running next to the server.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/icons` - Render an icon
//! - `POST /api/logos` - Generate a simple logo
//! - `GET /api/colors/contrast?a=&b=` - Contrast ratio of two colors
//! - `GET /api/colors/accessibility?color=` - Accessibility score
//! - `GET /api/colors/harmonies?color=` - Harmony schemes
//! - `POST /api/palettes/export` - Export a palette as text
//! - `GET /api/icon-styles` - List icon style tokens
//! - `GET /api/fonts?style=` - List font pairings
//! - `POST /api/sessions` - Start a session
//! - `POST /api/sessions/{id}/icons` - Next unused icon style, rendered
//! - `POST /api/sessions/{id}/fonts?style=` - Next unused font pairing
//! - `DELETE /api/sessions/{id}` - End a session
//! - `GET /api/config` - Current configuration

pub mod sessions;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::branding::{APP_DISPLAY_NAME, APP_VERSION};
use crate::color::{color_accessibility_score, color_contrast_ratio, color_harmonies};
use crate::config::Config;
use crate::error::BrandError;
use crate::export::{export_palette, suggested_filename, PaletteFormat};
use crate::fonts::{FontCatalog, FontPairing};
use crate::icon::{generate_icon, render_icon, svg_data_url, IconOptions};
use crate::logo::{generate_simple_logo_seeded, random_simple_logo, LogoTemplate};
use crate::models::{
    AccessibilityLevel, ColorTriple, Harmony, IconStyle, LogoConfig, LogoStyle, NamedColor,
    RgbColor,
};

pub use sessions::SessionManager;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Font pairing catalog (immutable after load)
    fonts: Arc<FontCatalog>,
    /// Live sessions
    sessions: Arc<SessionManager>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let fonts = FontCatalog::load()?;
        Ok(Self {
            config: Arc::new(config),
            fonts: Arc::new(fonts),
            sessions: Arc::new(SessionManager::new()),
        })
    }

    /// Returns the session store.
    #[must_use]
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
}

/// Icon generation request. Omitted fields use the configured defaults.
#[derive(Debug, Deserialize)]
pub struct IconRequest {
    /// Brand name.
    pub brand_name: String,
    /// Style token.
    pub style: Option<String>,
    /// Foreground color as hex.
    pub color: Option<String>,
    /// Background color as hex.
    pub background_color: Option<String>,
}

/// Rendered icon.
#[derive(Debug, Serialize)]
pub struct IconResponse {
    /// Style token used.
    pub style: String,
    /// SVG markup.
    pub svg: String,
    /// Base64 data URL of the SVG.
    pub data_url: String,
}

/// Simple logo request.
#[derive(Debug, Deserialize)]
pub struct LogoRequest {
    /// Brand name.
    pub brand_name: String,
    /// Free-form style label.
    pub style: Option<String>,
    /// Industry caption.
    #[serde(default)]
    pub industry: String,
    /// Seed for reproducible output.
    pub seed: Option<u64>,
}

/// Generated logo.
#[derive(Debug, Serialize)]
pub struct LogoResponse {
    /// Base64 data URL of the SVG.
    pub data_url: String,
    /// Template drawn.
    pub template: LogoTemplate,
    /// Style family used.
    pub style: LogoStyle,
    /// Palette used.
    pub palette: ColorTriple,
}

/// Query for the contrast endpoint.
#[derive(Debug, Deserialize)]
pub struct ContrastQuery {
    /// First color.
    pub a: String,
    /// Second color.
    pub b: String,
}

/// Contrast ratio response.
#[derive(Debug, Serialize)]
pub struct ContrastResponse {
    /// First color, normalized.
    pub a: RgbColor,
    /// Second color, normalized.
    pub b: RgbColor,
    /// Contrast ratio, two decimals.
    pub ratio: f64,
    /// Tier for `ratio`.
    pub level: AccessibilityLevel,
}

/// Query naming a single color.
#[derive(Debug, Deserialize)]
pub struct ColorQuery {
    /// Color as hex.
    pub color: String,
}

/// Accessibility score response.
#[derive(Debug, Serialize)]
pub struct AccessibilityResponse {
    /// Color, normalized.
    pub color: RgbColor,
    /// Best contrast against white or black.
    pub score: f64,
    /// Tier for `score`.
    pub level: AccessibilityLevel,
}

/// Harmony list response.
#[derive(Debug, Serialize)]
pub struct HarmoniesResponse {
    /// Base color, normalized.
    pub base: RgbColor,
    /// Complementary, triadic and split-complementary schemes.
    pub harmonies: Vec<Harmony>,
}

/// A palette entry as sent by the client.
#[derive(Debug, Deserialize)]
pub struct PaletteColorInput {
    /// Display label.
    pub name: String,
    /// Color as hex.
    pub hex: String,
}

/// Palette export request.
#[derive(Debug, Deserialize)]
pub struct PaletteExportRequest {
    /// Palette name used for the suggested filename.
    #[serde(default)]
    pub name: String,
    /// Palette entries.
    pub colors: Vec<PaletteColorInput>,
    /// css, scss or figma; defaults to the configured format.
    pub format: Option<String>,
}

/// Exported palette text.
#[derive(Debug, Serialize)]
pub struct PaletteExportResponse {
    /// Format used.
    pub format: PaletteFormat,
    /// Exported text.
    pub content: String,
    /// Download filename.
    pub suggested_filename: String,
}

/// One icon style in the catalog.
#[derive(Debug, Serialize)]
pub struct IconStyleInfo {
    /// Full token.
    pub token: String,
    /// Category prefix.
    pub category: String,
    /// Substyle.
    pub sub_style: String,
}

/// Icon style list response.
#[derive(Debug, Serialize)]
pub struct IconStyleListResponse {
    /// All renderable styles.
    pub styles: Vec<IconStyleInfo>,
}

/// Query with an optional style label.
#[derive(Debug, Deserialize)]
pub struct StyleQuery {
    /// Free-form style label.
    pub style: Option<String>,
}

/// Font pairing list response.
#[derive(Debug, Serialize)]
pub struct FontListResponse {
    /// Matching pairings.
    pub pairings: Vec<FontPairing>,
}

/// New session response.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Session id.
    pub id: String,
}

/// Request for the next session icon.
#[derive(Debug, Deserialize)]
pub struct SessionIconRequest {
    /// Brand name.
    pub brand_name: String,
    /// Foreground color as hex.
    pub color: Option<String>,
    /// Background color as hex.
    pub background_color: Option<String>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Maps core errors to 400 responses.
fn bad_request(err: BrandError) -> (StatusCode, Json<ApiError>) {
    let error = match &err {
        BrandError::InvalidColorFormat { .. } => "Invalid color format",
        BrandError::UnsupportedFormat(_) => "Unsupported export format",
    };
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::with_details(error, err.to_string())),
    )
}

fn session_not_found(id: &str) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(format!("Session not found: {id}"))),
    )
}

/// Parses an optional color, falling back to `default`.
fn color_or(input: Option<&str>, default: RgbColor) -> Result<RgbColor, BrandError> {
    input.map_or(Ok(default), RgbColor::from_hex)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        name: APP_DISPLAY_NAME.to_string(),
        version: APP_VERSION.to_string(),
    })
}

/// POST /api/icons - Render an icon.
async fn create_icon(
    State(state): State<AppState>,
    Json(request): Json<IconRequest>,
) -> Result<Json<IconResponse>, (StatusCode, Json<ApiError>)> {
    let defaults = &state.config.icon;
    let options = IconOptions::with_style(
        request.style.unwrap_or_else(|| defaults.style.clone()),
    )
    .color(color_or(request.color.as_deref(), defaults.color).map_err(bad_request)?)
    .background_color(
        color_or(request.background_color.as_deref(), defaults.background_color)
            .map_err(bad_request)?,
    );

    let svg = generate_icon(&request.brand_name, &options);
    Ok(Json(IconResponse {
        style: options.style,
        data_url: svg_data_url(&svg),
        svg,
    }))
}

/// POST /api/logos - Generate a simple logo.
async fn create_logo(
    State(state): State<AppState>,
    Json(request): Json<LogoRequest>,
) -> Json<LogoResponse> {
    let style = request
        .style
        .unwrap_or_else(|| state.config.logo.style.name().to_string());
    let config = LogoConfig::new(request.brand_name, style, request.industry);

    let logo = match request.seed {
        Some(seed) => generate_simple_logo_seeded(&config, seed),
        None => random_simple_logo(&config),
    };

    Json(LogoResponse {
        data_url: logo.to_data_url(),
        template: logo.template,
        style: logo.style,
        palette: logo.palette,
    })
}

/// GET /api/colors/contrast - Contrast ratio of two colors.
async fn get_contrast(
    Query(query): Query<ContrastQuery>,
) -> Result<Json<ContrastResponse>, (StatusCode, Json<ApiError>)> {
    let a = RgbColor::from_hex(&query.a).map_err(bad_request)?;
    let b = RgbColor::from_hex(&query.b).map_err(bad_request)?;
    let ratio = color_contrast_ratio(a, b);

    Ok(Json(ContrastResponse {
        a,
        b,
        ratio,
        level: AccessibilityLevel::from_ratio(ratio),
    }))
}

/// GET /api/colors/accessibility - Best contrast against white or black.
async fn get_accessibility(
    Query(query): Query<ColorQuery>,
) -> Result<Json<AccessibilityResponse>, (StatusCode, Json<ApiError>)> {
    let color = RgbColor::from_hex(&query.color).map_err(bad_request)?;
    let result = color_accessibility_score(color);

    Ok(Json(AccessibilityResponse {
        color,
        score: result.score,
        level: result.level,
    }))
}

/// GET /api/colors/harmonies - Harmony schemes for a base color.
async fn get_harmonies(
    Query(query): Query<ColorQuery>,
) -> Result<Json<HarmoniesResponse>, (StatusCode, Json<ApiError>)> {
    let base = RgbColor::from_hex(&query.color).map_err(bad_request)?;

    Ok(Json(HarmoniesResponse {
        base,
        harmonies: color_harmonies(base),
    }))
}

/// POST /api/palettes/export - Export a palette as text.
async fn export_palette_handler(
    State(state): State<AppState>,
    Json(request): Json<PaletteExportRequest>,
) -> Result<Json<PaletteExportResponse>, (StatusCode, Json<ApiError>)> {
    let format: PaletteFormat = match &request.format {
        Some(format) => format.parse().map_err(bad_request)?,
        None => state.config.export_format().map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details(
                    "Invalid configured export format",
                    format!("{e:#}"),
                )),
            )
        })?,
    };

    let colors = request
        .colors
        .iter()
        .map(|c| NamedColor::parse(c.name.clone(), &c.hex))
        .collect::<Result<Vec<_>, _>>()
        .map_err(bad_request)?;

    let date = chrono::Local::now().date_naive();
    Ok(Json(PaletteExportResponse {
        format,
        content: export_palette(&colors, format),
        suggested_filename: suggested_filename(&request.name, format, date),
    }))
}

/// GET /api/icon-styles - List icon style tokens.
async fn list_icon_styles() -> Json<IconStyleListResponse> {
    let styles = IconStyle::all()
        .into_iter()
        .map(|style| IconStyleInfo {
            token: style.token(),
            category: style.category().name().to_string(),
            sub_style: style.sub_style().to_string(),
        })
        .collect();

    Json(IconStyleListResponse { styles })
}

/// GET /api/fonts - List font pairings, optionally for one style family.
async fn list_fonts(
    State(state): State<AppState>,
    Query(query): Query<StyleQuery>,
) -> Json<FontListResponse> {
    let pairings = match &query.style {
        Some(label) => state
            .fonts
            .pairings_for(LogoStyle::from_label(label))
            .cloned()
            .collect(),
        None => state.fonts.all().to_vec(),
    };

    Json(FontListResponse { pairings })
}

/// POST /api/sessions - Start a session.
async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionResponse>) {
    let id = state.sessions.create();
    (StatusCode::CREATED, Json(SessionResponse { id }))
}

/// DELETE /api/sessions/{id} - Reset and drop a session.
async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ApiError>)> {
    if state.sessions.remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(&id))
    }
}

/// POST /api/sessions/{id}/icons - Render the next style the session has
/// not seen.
async fn next_session_icon(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SessionIconRequest>,
) -> Result<Json<IconResponse>, (StatusCode, Json<ApiError>)> {
    let defaults = &state.config.icon;
    let color = color_or(request.color.as_deref(), defaults.color).map_err(bad_request)?;
    let background = color_or(request.background_color.as_deref(), defaults.background_color)
        .map_err(bad_request)?;

    let style = state
        .sessions
        .with_session(&id, |assets| assets.next_icon_style())
        .ok_or_else(|| session_not_found(&id))?;

    let svg = render_icon(&request.brand_name, Some(style), color, background);
    Ok(Json(IconResponse {
        style: style.token(),
        data_url: svg_data_url(&svg),
        svg,
    }))
}

/// POST /api/sessions/{id}/fonts - Suggest the next unused font pairing.
async fn next_session_fonts(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<StyleQuery>,
) -> Result<Json<FontPairing>, (StatusCode, Json<ApiError>)> {
    let style = query
        .style
        .as_deref()
        .map_or(state.config.logo.style, LogoStyle::from_label);

    let pairing = state
        .sessions
        .with_session(&id, |assets| state.fonts.suggest_pairing(style, assets).cloned())
        .ok_or_else(|| session_not_found(&id))?;

    pairing.map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::new(format!("No font pairings for style: {style}"))),
        )
    })
}

/// GET /api/config - Get current configuration.
async fn get_config(State(state): State<AppState>) -> Json<Config> {
    Json(state.config.as_ref().clone())
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // The server runs next to a local frontend; any origin may call it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Generation endpoints
        .route("/api/icons", post(create_icon))
        .route("/api/logos", post(create_logo))
        // Color endpoints
        .route("/api/colors/contrast", get(get_contrast))
        .route("/api/colors/accessibility", get(get_accessibility))
        .route("/api/colors/harmonies", get(get_harmonies))
        // Export endpoint
        .route("/api/palettes/export", post(export_palette_handler))
        // Catalog endpoints
        .route("/api/icon-styles", get(list_icon_styles))
        .route("/api/fonts", get(list_fonts))
        // Session endpoints
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/{id}", axum::routing::delete(delete_session))
        .route("/api/sessions/{id}/icons", post(next_session_icon))
        .route("/api/sessions/{id}/fonts", post(next_session_fonts))
        // Config endpoint
        .route("/api/config", get(get_config))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the font catalog fails to load or the address cannot
/// be bound.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    let app = create_router(state);

    info!("Starting {} web server on {}", APP_DISPLAY_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_mapping() {
        let (status, Json(body)) = bad_request(BrandError::invalid_color("#12", "too short"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid color format");
        assert!(body.details.unwrap().contains("#12"));

        let (status, Json(body)) = bad_request(BrandError::UnsupportedFormat("pdf".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Unsupported export format");
    }

    #[test]
    fn test_color_or() {
        assert_eq!(color_or(None, RgbColor::WHITE).unwrap(), RgbColor::WHITE);
        assert_eq!(
            color_or(Some("#000000"), RgbColor::WHITE).unwrap(),
            RgbColor::BLACK
        );
        assert!(color_or(Some("black"), RgbColor::WHITE).is_err());
    }
}
