//! CLI command handlers for brandmark.
//!
//! This module provides headless, scriptable access to icon and logo
//! generation, color checks and palette export.

pub mod color;
pub mod common;
pub mod config;
pub mod icon;
pub mod logo;
pub mod palette;
pub mod styles;

// Re-export types used by main.rs and tests
pub use color::{AccessibilityArgs, ContrastArgs, HarmonyArgs};
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use icon::IconArgs;
pub use logo::LogoArgs;
pub use palette::PaletteArgs;
pub use styles::{FontsArgs, StylesArgs};
