//! Data models for colors, icon styles and logo requests.
//!
//! This module contains the plain data structures used throughout the crate.
//! Models are independent of rendering and of the CLI/web surfaces.

pub mod harmony;
pub mod icon_style;
pub mod logo;
pub mod named_color;
pub mod rgb;

// Re-export all model types
pub use harmony::{AccessibilityLevel, AccessibilityResult, Harmony};
pub use icon_style::{
    split_style_token, AbstractPattern, GeometricShape, IconCategory, IconStyle, InitialsStyle,
    ModernStyle,
};
pub use logo::{ColorTriple, LogoConfig, LogoStyle};
pub use named_color::NamedColor;
pub use rgb::RgbColor;
