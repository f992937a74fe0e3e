//! Error types for the brand-mark core.
//!
//! The core only fails on malformed input data. Unknown icon style tokens are
//! deliberately not represented here: the icon synthesizer renders a
//! background-only icon for them instead.

use thiserror::Error;

/// Errors produced by the color, icon, logo and export functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrandError {
    /// A color string was not a 6-digit hex color.
    #[error("Invalid color format '{input}': {reason}")]
    InvalidColorFormat {
        /// The rejected input, as given
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// A palette export format other than `css`, `scss` or `figma`.
    #[error("Unsupported export format '{0}'. Supported formats: css, scss, figma")]
    UnsupportedFormat(String),
}

impl BrandError {
    pub(crate) fn invalid_color(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias for core operations.
pub type BrandResult<T> = Result<T, BrandError>;
