//! WCAG 2.1 relative luminance and contrast scoring.
//!
//! - Luminance: sRGB channels linearized, then weighted
//!   `0.2126 R + 0.7152 G + 0.0722 B` (ITU-R BT.709)
//! - Contrast: `(L_lighter + 0.05) / (L_darker + 0.05)`, in [1.0, 21.0]
//! - Accessibility: best contrast against pure white or pure black, graded
//!   with the normal-text thresholds (AAA >= 7.0, AA >= 4.5)

use crate::error::BrandResult;
use crate::models::{AccessibilityLevel, AccessibilityResult, RgbColor};

/// Converts one sRGB channel (0.0-1.0) to linear light.
#[must_use]
pub fn srgb_to_linear(channel: f64) -> f64 {
    if channel <= 0.039_28 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, 0.0 (black) to 1.0 (white).
#[must_use]
pub fn relative_luminance(color: RgbColor) -> f64 {
    let (r, g, b) = color.to_unit();
    0.2126f64.mul_add(
        srgb_to_linear(r),
        0.7152f64.mul_add(srgb_to_linear(g), 0.0722 * srgb_to_linear(b)),
    )
}

/// Unrounded contrast ratio between two colors. Argument order does not matter.
#[must_use]
pub fn raw_contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio rounded to two decimals (half-up).
#[must_use]
pub fn color_contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    round2(raw_contrast_ratio(a, b))
}

/// Accessibility score of an already parsed color.
#[must_use]
pub fn color_accessibility_score(color: RgbColor) -> AccessibilityResult {
    let on_white = color_contrast_ratio(color, RgbColor::WHITE);
    let on_black = color_contrast_ratio(color, RgbColor::BLACK);
    let score = on_white.max(on_black);

    AccessibilityResult {
        score,
        level: AccessibilityLevel::from_ratio(score),
    }
}

/// Relative luminance of a hex color.
///
/// # Errors
///
/// Returns `InvalidColorFormat` for malformed hex input.
pub fn luminance(hex: &str) -> BrandResult<f64> {
    Ok(relative_luminance(RgbColor::from_hex(hex)?))
}

/// WCAG contrast ratio between two hex colors, rounded to two decimals.
///
/// # Examples
///
/// ```
/// use brandmark::color::contrast_ratio;
///
/// assert_eq!(contrast_ratio("#000000", "#FFFFFF").unwrap(), 21.0);
/// assert_eq!(contrast_ratio("#777777", "#777777").unwrap(), 1.0);
/// ```
///
/// # Errors
///
/// Returns `InvalidColorFormat` if either input is malformed.
pub fn contrast_ratio(a: &str, b: &str) -> BrandResult<f64> {
    Ok(color_contrast_ratio(
        RgbColor::from_hex(a)?,
        RgbColor::from_hex(b)?,
    ))
}

/// Scores a hex color against white and black and grades the better result.
///
/// # Errors
///
/// Returns `InvalidColorFormat` for malformed hex input.
pub fn accessibility_score(hex: &str) -> BrandResult<AccessibilityResult> {
    Ok(color_accessibility_score(RgbColor::from_hex(hex)?))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
