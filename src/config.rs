//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the defaults used by
//! the CLI and the web server, in TOML format with platform-specific
//! directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::export::PaletteFormat;
use crate::models::{IconStyle, LogoStyle, RgbColor};

/// Default icon appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Style token used when none is given (e.g., "geometric-hexagon")
    pub style: String,
    /// Foreground color
    pub color: RgbColor,
    /// Background color
    pub background_color: RgbColor,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            style: IconStyle::DEFAULT_TOKEN.to_string(),
            color: RgbColor::BLACK,
            background_color: RgbColor::WHITE,
        }
    }
}

/// Default logo style family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogoDefaults {
    /// Family used when a request carries no style label
    pub style: LogoStyle,
}

/// Palette export defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when none is given ("css", "scss" or "figma")
    pub format: String,
    /// Directory export files are written to
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: PaletteFormat::Css.name().to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Web server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - `$BRANDMARK_CONFIG_DIR/config.toml` when the variable is set
/// - Linux: `~/.config/brandmark/config.toml`
/// - macOS: `~/Library/Application Support/brandmark/config.toml`
/// - Windows: `%APPDATA%\brandmark\config.toml`
///
/// Missing sections and keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Icon defaults
    pub icon: IconConfig,
    /// Logo defaults
    pub logo: LogoDefaults,
    /// Palette export defaults
    pub export: ExportConfig,
    /// Web server settings
    pub server: ServerConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path, honoring `BRANDMARK_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `icon.style` names an implemented style
    /// - `export.format` is "css", "scss" or "figma"
    /// - `server.port` is not 0
    pub fn validate(&self) -> Result<()> {
        if IconStyle::parse(&self.icon.style).is_none() {
            anyhow::bail!("Unknown default icon style: {}", self.icon.style);
        }

        self.export_format()?;

        if self.server.port == 0 {
            anyhow::bail!("Server port must be between 1 and 65535");
        }

        Ok(())
    }

    /// The default export format, parsed.
    pub fn export_format(&self) -> Result<PaletteFormat> {
        self.export
            .format
            .parse()
            .context("Invalid default export format")
    }

    /// `host:port` for the web server.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
