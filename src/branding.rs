//! Application identity.
//!
//! Centralizes the names and paths the binaries and config layer use, so a
//! rename only touches this file.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "Brandmark";

/// The binary/executable name (lowercase, no spaces).
///
/// Used in help text, command examples and the config directory name.
pub const APP_BINARY_NAME: &str = "brandmark";

/// The web server binary name.
pub const WEB_BINARY_NAME: &str = "brandmark-web";

/// The directory name for application data (config).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "brandmark";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "BRANDMARK_CONFIG_DIR";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "Brand icons, logos, palettes and color accessibility checks";

/// Version string reported by the binaries and the health endpoint.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
