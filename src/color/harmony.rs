//! Hue-rotation color harmonies.

use tracing::debug;

use crate::error::BrandResult;
use crate::models::{Harmony, RgbColor};

/// Scheme names and hue offsets, in output order.
const SCHEMES: [(&str, &[f64]); 3] = [
    ("Complementary", &[180.0]),
    ("Triadic", &[120.0, 240.0]),
    ("Split Complementary", &[150.0, 210.0]),
];

/// Shifts the hue of a hex color by `degrees` (modulo 360) and returns the
/// resulting hex color. Saturation and lightness are kept.
///
/// # Examples
///
/// ```
/// use brandmark::color::hue_rotate;
///
/// assert_eq!(hue_rotate("#FF0000", 180.0).unwrap(), "#00FFFF");
/// ```
///
/// # Errors
///
/// Returns `InvalidColorFormat` for malformed hex input.
pub fn hue_rotate(hex: &str, degrees: f64) -> BrandResult<String> {
    Ok(RgbColor::from_hex(hex)?.rotate_hue(degrees).to_hex())
}

/// The three fixed harmonies of an already parsed base color.
#[must_use]
pub fn color_harmonies(base: RgbColor) -> Vec<Harmony> {
    SCHEMES
        .iter()
        .map(|(name, offsets)| {
            let mut colors = Vec::with_capacity(offsets.len() + 1);
            colors.push(base);
            colors.extend(offsets.iter().map(|&deg| base.rotate_hue(deg)));
            Harmony {
                name: (*name).to_string(),
                colors,
            }
        })
        .collect()
}

/// Derives the Complementary, Triadic and Split Complementary schemes of a
/// hex color, in that order. The base color is the first entry of each.
///
/// # Errors
///
/// Returns `InvalidColorFormat` for malformed hex input.
pub fn harmonies(hex: &str) -> BrandResult<Vec<Harmony>> {
    let base = RgbColor::from_hex(hex)?;
    debug!(base = %base, "generating color harmonies");
    Ok(color_harmonies(base))
}
