//! Deterministic SVG icon synthesis.
//!
//! [`generate_icon`] turns a brand name and a style token into a complete SVG
//! document on a fixed 100x100 canvas. The background rectangle is always the
//! first element; the style then adds its foreground. Unknown style tokens
//! produce the background alone, so the generator never fails.

mod abstract_pattern;
mod geometric;
mod initials;
mod modern;

pub(crate) use initials::initial;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::debug;

use crate::models::{IconStyle, RgbColor};

/// Side length of the icon canvas, in user units.
pub const CANVAS_SIZE: f64 = 100.0;

/// Center of the icon canvas.
pub(crate) const CENTER: f64 = CANVAS_SIZE / 2.0;

/// Id of the gradient definition used by gradient styles.
pub(crate) const GRADIENT_ID: &str = "icon-gradient";

/// Options for [`generate_icon`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconOptions {
    /// Style token, e.g. `geometric-hexagon`.
    pub style: String,
    /// Foreground color.
    pub color: RgbColor,
    /// Background rectangle color.
    pub background_color: RgbColor,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            style: IconStyle::DEFAULT_TOKEN.to_string(),
            color: RgbColor::BLACK,
            background_color: RgbColor::WHITE,
        }
    }
}

impl IconOptions {
    /// Options with the given style token and default colors.
    #[must_use]
    pub fn with_style(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            ..Self::default()
        }
    }

    /// Sets the foreground color.
    pub fn color(mut self, color: RgbColor) -> Self {
        self.color = color;
        self
    }

    /// Sets the background color.
    pub fn background_color(mut self, color: RgbColor) -> Self {
        self.background_color = color;
        self
    }
}

/// Colors shared by every renderer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Paint {
    pub fg: RgbColor,
    pub bg: RgbColor,
}

/// Renders an icon for `brand_name` as a standalone SVG document.
///
/// # Examples
///
/// ```
/// use brandmark::icon::{generate_icon, IconOptions};
///
/// let svg = generate_icon("Acme", &IconOptions::with_style("geometric-circle"));
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("<circle"));
/// ```
#[must_use]
pub fn generate_icon(brand_name: &str, options: &IconOptions) -> String {
    let style = IconStyle::parse(&options.style);
    if style.is_none() {
        debug!(style = %options.style, "unrecognized icon style, rendering background only");
    }
    render_icon(brand_name, style, options.color, options.background_color)
}

/// Renders an icon for an already parsed style. `None` renders the
/// background only.
#[must_use]
pub fn render_icon(
    brand_name: &str,
    style: Option<IconStyle>,
    color: RgbColor,
    background_color: RgbColor,
) -> String {
    let paint = Paint {
        fg: color,
        bg: background_color,
    };

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}">"#,
        size = num(CANVAS_SIZE)
    );
    svg.push('\n');
    let _ = writeln!(
        svg,
        r#"  <rect width="{size}" height="{size}" fill="{bg}"/>"#,
        size = num(CANVAS_SIZE),
        bg = paint.bg
    );

    match style {
        Some(IconStyle::Initials(s)) => initials::render(s, brand_name, paint, &mut svg),
        Some(IconStyle::Geometric(s)) => geometric::render(s, paint, &mut svg),
        Some(IconStyle::Abstract(s)) => abstract_pattern::render(s, paint, &mut svg),
        Some(IconStyle::Modern(s)) => modern::render(s, paint, &mut svg),
        None => {}
    }

    svg.push_str("</svg>\n");
    svg
}

/// Wraps SVG markup as a `data:image/svg+xml;base64,...` URL.
#[must_use]
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// Writes a two-stop diagonal gradient from `color` to a translucent `color`.
pub(crate) fn write_diagonal_gradient(svg: &mut String, color: RgbColor) {
    let _ = writeln!(
        svg,
        r#"  <defs><linearGradient id="{GRADIENT_ID}" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="{color}"/><stop offset="1" stop-color="{color}" stop-opacity="0.4"/></linearGradient></defs>"#
    );
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
pub(crate) fn num(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Escapes text for use in SVG element content and attribute values.
#[must_use]
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AbstractPattern, GeometricShape, InitialsStyle, ModernStyle};

    const FOREGROUND_TAGS: [&str; 7] = [
        "<circle", "<polygon", "<polyline", "<path", "<line", "<text", "<defs",
    ];

    fn options(style: &str) -> IconOptions {
        IconOptions::with_style(style).color(RgbColor::new(0x11, 0x22, 0x33))
    }

    #[test]
    fn test_document_shape() {
        let svg = generate_icon("Acme", &IconOptions::default());
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_background_is_first_element() {
        for style in IconStyle::all() {
            let opts = IconOptions::with_style(style.token())
                .background_color(RgbColor::new(0xAB, 0xCD, 0xEF));
            let svg = generate_icon("Acme", &opts);
            let second_line = svg.lines().nth(1).unwrap();
            assert_eq!(
                second_line,
                r##"  <rect width="100" height="100" fill="#ABCDEF"/>"##,
                "style {style}"
            );
        }
    }

    #[test]
    fn test_unknown_style_renders_background_only() {
        for token in ["unknown-thing", "geometric-star", "decorative-leaf", ""] {
            let svg = generate_icon("Acme", &IconOptions::with_style(token));
            assert_eq!(svg.matches("<rect").count(), 1, "token {token:?}");
            for tag in FOREGROUND_TAGS {
                assert!(!svg.contains(tag), "token {token:?} drew {tag}");
            }
        }
    }

    #[test]
    fn test_hexagon_has_six_points() {
        let svg = generate_icon("Acme", &options("geometric-hexagon"));
        assert_eq!(svg.matches("<polygon").count(), 1);

        let start = svg.find("points=\"").unwrap() + "points=\"".len();
        let end = start + svg[start..].find('"').unwrap();
        let pairs: Vec<&str> = svg[start..end].split_whitespace().collect();
        assert_eq!(pairs.len(), 6);
        assert!(pairs.iter().all(|p| p.split(',').count() == 2));
        assert!(svg.contains("fill=\"#112233\""));
    }

    /// Elements each style must draw after the background rect.
    fn signature(style: IconStyle) -> &'static [&'static str] {
        match style {
            IconStyle::Initials(InitialsStyle::Simple) => {
                &[r##"<rect x="10" y="10" width="80" height="80" fill="#112233"/>"##, ">A</text>"]
            }
            IconStyle::Initials(InitialsStyle::Rounded) => {
                &[r##"width="80" height="80" rx="16" fill="#112233"/>"##, ">A</text>"]
            }
            IconStyle::Initials(InitialsStyle::Gradient) => {
                &["<linearGradient", r##"rx="16" fill="url(#"##, ">A</text>"]
            }
            IconStyle::Geometric(GeometricShape::Circle) => &[r##"<circle cx="50" cy="50" r="30""##],
            IconStyle::Geometric(GeometricShape::Square) => {
                &[r##"<rect x="20" y="20" width="60" height="60" fill="#112233"/>"##]
            }
            IconStyle::Geometric(
                GeometricShape::Hexagon | GeometricShape::Triangle | GeometricShape::Diamond,
            ) => &[r##"<polygon points=""##],
            IconStyle::Abstract(AbstractPattern::Waves) => &[r##"<path d="M 0 50 C"##],
            IconStyle::Abstract(AbstractPattern::Dots) => &["<circle"],
            IconStyle::Abstract(AbstractPattern::Mesh) => &["<line"],
            IconStyle::Abstract(AbstractPattern::Swirl) => &["<polyline"],
            IconStyle::Modern(ModernStyle::Minimal) => &[r##"fill="#112233"/>"##, "<circle"],
            IconStyle::Modern(ModernStyle::Tech) => &[r##"fill="none" stroke="#112233""##, "<circle"],
            IconStyle::Modern(ModernStyle::Gradient) => &["<linearGradient", r##"fill="url(#"##],
        }
    }

    #[test]
    fn test_every_known_style_draws_its_shape() {
        for style in IconStyle::all() {
            let svg = generate_icon("Acme", &options(&style.token()));
            let body: String = svg.lines().skip(2).collect::<Vec<_>>().join("\n");
            for element in signature(style) {
                assert!(body.contains(element), "style {style} is missing {element}");
            }
        }
    }

    #[test]
    fn test_deterministic_output() {
        for style in IconStyle::all() {
            let opts = options(&style.token());
            assert_eq!(generate_icon("Acme", &opts), generate_icon("Acme", &opts));
        }
    }

    #[test]
    fn test_data_url() {
        let url = svg_data_url("<svg/>");
        assert_eq!(url, "data:image/svg+xml;base64,PHN2Zy8+");
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(50.0), "50");
        assert_eq!(num(25.980_762), "25.98");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(0.0), "0");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("A&B <Co> \"q\" 'x'"), "A&amp;B &lt;Co&gt; &quot;q&quot; &apos;x&apos;");
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let opts: IconOptions = serde_json::from_str(r##"{"color":"#112233"}"##).unwrap();
        assert_eq!(opts.style, "initials-simple");
        assert_eq!(opts.color, RgbColor::new(0x11, 0x22, 0x33));
        assert_eq!(opts.background_color, RgbColor::WHITE);

        assert!(serde_json::from_str::<IconOptions>(r#"{"color":"black"}"#).is_err());
    }

    #[test]
    fn test_options_use_snake_case_like_the_api() {
        let opts: IconOptions =
            serde_json::from_str(r##"{"style":"modern-tech","background_color":"#102030"}"##)
                .unwrap();
        assert_eq!(opts.background_color, RgbColor::new(0x10, 0x20, 0x30));

        let json = serde_json::to_value(IconOptions::default()).unwrap();
        assert_eq!(json["background_color"], "#FFFFFF");
        assert!(json.get("backgroundColor").is_none());
    }
}
