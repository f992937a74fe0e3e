//! Named palette colors.

use serde::{Deserialize, Serialize};

use super::RgbColor;
use crate::error::BrandResult;

/// A color in a working palette, with a display label.
///
/// The label is free text and need not be unique. The hex value is validated
/// on construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    /// The color value, serialized as `#RRGGBB`.
    pub hex: RgbColor,
    /// Display label (e.g., "Brand Red").
    pub name: String,
}

impl NamedColor {
    /// Creates a named color from an already parsed value.
    #[must_use]
    pub fn new(name: impl Into<String>, hex: RgbColor) -> Self {
        Self {
            hex,
            name: name.into(),
        }
    }

    /// Creates a named color from a hex string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorFormat` if `hex` is not a 6-digit hex color.
    pub fn parse(name: impl Into<String>, hex: &str) -> BrandResult<Self> {
        Ok(Self::new(name, RgbColor::from_hex(hex)?))
    }
}
