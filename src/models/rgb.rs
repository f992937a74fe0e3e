//! RGB color handling with strict hex parsing, HSL conversion and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{BrandError, BrandResult};

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Serializes to and from a `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure white, the light reference for contrast scoring.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Pure black, the dark reference for contrast scoring.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Accepts "#RRGGBB" and "RRGGBB" in either case; surrounding whitespace is
    /// ignored. Shorthand ("#FFF"), alpha ("#RRGGBBAA") and named colors are
    /// rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandmark::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// assert!(RgbColor::from_hex("#FFF").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BrandError::InvalidColorFormat`] if the string is not exactly
    /// six hex digits after the optional `#`.
    pub fn from_hex(input: &str) -> BrandResult<Self> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 {
            return Err(BrandError::invalid_color(
                input,
                "expected 6 hex digits (RRGGBB)",
            ));
        }

        // from_str_radix tolerates a leading '+', so check the digits first
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(BrandError::invalid_color(input, "contains non-hex characters"));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| BrandError::invalid_color(input, e.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use brandmark::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels normalized to 0.0-1.0.
    #[must_use]
    pub fn to_unit(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Converts the RGB color to HSL (Hue, Saturation, Lightness).
    ///
    /// # Returns
    ///
    /// A tuple `(h, s, l)` where:
    /// - `h` (Hue): 0.0-360.0 degrees (0.0 for grayscale)
    /// - `s` (Saturation): 0.0-1.0
    /// - `l` (Lightness): 0.0-1.0
    ///
    /// # Examples
    ///
    /// ```
    /// use brandmark::models::RgbColor;
    ///
    /// let (h, s, l) = RgbColor::new(0, 255, 255).to_hsl();
    /// assert!((h - 180.0).abs() < 0.01);
    /// assert!((s - 1.0).abs() < 0.01);
    /// assert!((l - 0.5).abs() < 0.01);
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_unit();

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return (0.0, 0.0, l);
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());

        let h = if max == r {
            60.0 * (((g - b) / delta).rem_euclid(6.0))
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        (h.rem_euclid(360.0), s, l)
    }

    /// Creates an `RgbColor` from HSL.
    ///
    /// Hue wraps modulo 360 (so -30.0 and 330.0 are the same hue); saturation
    /// and lightness are clamped to 0.0-1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandmark::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hsl(120.0, 1.0, 0.5), RgbColor::new(0, 255, 0));
    /// assert_eq!(RgbColor::from_hsl(-120.0, 1.0, 0.5), RgbColor::new(0, 0, 255));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self {
            r: ((r + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            g: ((g + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            b: ((b + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Returns this color with its hue shifted by `degrees`, keeping saturation
    /// and lightness.
    #[must_use]
    pub fn rotate_hue(&self, degrees: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h + degrees, s, l)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Default for RgbColor {
    /// Default color is black (#000000), the default icon foreground.
    fn default() -> Self {
        Self::BLACK
    }
}

impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("  #FFFFFF  ").unwrap();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("+F+F+F").is_err());
        assert!(RgbColor::from_hex("#ÿÿÿ").is_err());
    }

    #[test]
    fn test_from_hex_error_kind() {
        let err = RgbColor::from_hex("red").unwrap_err();
        assert!(matches!(
            err,
            BrandError::InvalidColorFormat { ref input, .. } if input == "red"
        ));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_hsl_primary_colors() {
        let (h, s, l) = RgbColor::new(255, 0, 0).to_hsl();
        assert!(h.abs() < 0.01);
        assert!((s - 1.0).abs() < 0.01);
        assert!((l - 0.5).abs() < 0.01);

        let (h, _, _) = RgbColor::new(0, 255, 0).to_hsl();
        assert!((h - 120.0).abs() < 0.01);

        let (h, _, _) = RgbColor::new(0, 0, 255).to_hsl();
        assert!((h - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_hsl_grayscale() {
        let (h, s, l) = RgbColor::new(128, 128, 128).to_hsl();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((l - 0.502).abs() < 0.01);

        assert_eq!(RgbColor::from_hsl(200.0, 0.0, 1.0), RgbColor::WHITE);
        assert_eq!(RgbColor::from_hsl(200.0, 0.0, 0.0), RgbColor::BLACK);
    }

    #[test]
    fn test_hsl_roundtrip_within_one_step() {
        let colors = [
            RgbColor::new(255, 255, 0),
            RgbColor::new(128, 64, 192),
            RgbColor::new(200, 100, 50),
            RgbColor::new(17, 34, 51),
        ];

        for color in colors {
            let (h, s, l) = color.to_hsl();
            let converted = RgbColor::from_hsl(h, s, l);
            assert!((i16::from(color.r) - i16::from(converted.r)).abs() <= 1);
            assert!((i16::from(color.g) - i16::from(converted.g)).abs() <= 1);
            assert!((i16::from(color.b) - i16::from(converted.b)).abs() <= 1);
        }
    }

    #[test]
    fn test_rotate_hue() {
        let red = RgbColor::new(255, 0, 0);
        assert_eq!(red.rotate_hue(180.0), RgbColor::new(0, 255, 255));
        assert_eq!(red.rotate_hue(120.0), RgbColor::new(0, 255, 0));
        assert_eq!(red.rotate_hue(360.0), red);
        assert_eq!(red.rotate_hue(-120.0), RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&RgbColor::new(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#FF0000\"");

        let parsed: RgbColor = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(parsed, RgbColor::new(0, 255, 0));

        assert!(serde_json::from_str::<RgbColor>("\"#XYZXYZ\"").is_err());
    }
}
