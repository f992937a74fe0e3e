//! Logo request and style family types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// Input to the simple logo generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoConfig {
    /// Brand name rendered in the logo.
    pub brand_name: String,
    /// Free-form style label (e.g., "Modern & Clean", "bold").
    #[serde(default)]
    pub style: String,
    /// Industry label, shown as a caption by some templates.
    #[serde(default)]
    pub industry: String,
}

impl LogoConfig {
    /// Creates a logo request.
    #[must_use]
    pub fn new(
        brand_name: impl Into<String>,
        style: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        Self {
            brand_name: brand_name.into(),
            style: style.into(),
            industry: industry.into(),
        }
    }
}

/// Primary, secondary and accent colors of one logo palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTriple {
    /// Main brand color
    pub primary: RgbColor,
    /// Gradient partner of the primary color
    pub secondary: RgbColor,
    /// Highlight color
    pub accent: RgbColor,
}

impl ColorTriple {
    const fn rgb(primary: u32, secondary: u32, accent: u32) -> Self {
        Self {
            primary: unpack(primary),
            secondary: unpack(secondary),
            accent: unpack(accent),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn unpack(rgb: u32) -> RgbColor {
    RgbColor::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Canonical logo style family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogoStyle {
    /// Cool blues and violets
    #[default]
    Modern,
    /// Deep navy, burgundy and gold
    Classic,
    /// Near-monochrome grays
    Minimal,
    /// Saturated reds, oranges and magentas
    Bold,
}

const MODERN_PALETTES: [ColorTriple; 3] = [
    ColorTriple::rgb(0x3B82F6, 0x8B5CF6, 0x06B6D4),
    ColorTriple::rgb(0x6366F1, 0xEC4899, 0x14B8A6),
    ColorTriple::rgb(0x0EA5E9, 0x22D3EE, 0xA855F7),
];

const CLASSIC_PALETTES: [ColorTriple; 3] = [
    ColorTriple::rgb(0x1E3A5F, 0x2C5282, 0xC9A227),
    ColorTriple::rgb(0x7F1D1D, 0x991B1B, 0xD4AF37),
    ColorTriple::rgb(0x14532D, 0x166534, 0xB8860B),
];

const MINIMAL_PALETTES: [ColorTriple; 3] = [
    ColorTriple::rgb(0x111827, 0x374151, 0x9CA3AF),
    ColorTriple::rgb(0x18181B, 0x52525B, 0xA1A1AA),
    ColorTriple::rgb(0x1F2937, 0x4B5563, 0x3B82F6),
];

const BOLD_PALETTES: [ColorTriple; 3] = [
    ColorTriple::rgb(0xEF4444, 0xF97316, 0xFACC15),
    ColorTriple::rgb(0xDB2777, 0x9333EA, 0xF59E0B),
    ColorTriple::rgb(0xF43F5E, 0xE11D48, 0x10B981),
];

impl LogoStyle {
    /// All families in catalog order.
    pub const ALL: [Self; 4] = [Self::Modern, Self::Classic, Self::Minimal, Self::Bold];

    /// Lowercase family name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Minimal => "minimal",
            Self::Bold => "bold",
        }
    }

    /// Maps a free-form style label to a family.
    ///
    /// Matching is by keyword, case-insensitive; unrecognized labels map to
    /// `Modern`.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandmark::models::LogoStyle;
    ///
    /// assert_eq!(LogoStyle::from_label("Elegant & Timeless"), LogoStyle::Classic);
    /// assert_eq!(LogoStyle::from_label("Clean"), LogoStyle::Minimal);
    /// assert_eq!(LogoStyle::from_label("whatever"), LogoStyle::Modern);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        const KEYWORDS: [(LogoStyle, &[&str]); 4] = [
            (LogoStyle::Classic, &["classic", "elegant", "traditional", "luxury", "timeless"]),
            (LogoStyle::Minimal, &["minimal", "simple", "clean"]),
            (LogoStyle::Bold, &["bold", "playful", "vibrant", "fun", "energetic"]),
            (LogoStyle::Modern, &["modern", "tech", "futuristic", "sleek"]),
        ];

        let label = label.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| label.contains(w)))
            .map_or(Self::Modern, |(style, _)| *style)
    }

    /// The three predefined palettes of this family.
    #[must_use]
    pub const fn palettes(&self) -> &'static [ColorTriple; 3] {
        match self {
            Self::Modern => &MODERN_PALETTES,
            Self::Classic => &CLASSIC_PALETTES,
            Self::Minimal => &MINIMAL_PALETTES,
            Self::Bold => &BOLD_PALETTES,
        }
    }
}

impl fmt::Display for LogoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_keywords() {
        assert_eq!(LogoStyle::from_label("modern"), LogoStyle::Modern);
        assert_eq!(LogoStyle::from_label("CLASSIC"), LogoStyle::Classic);
        assert_eq!(LogoStyle::from_label("minimal"), LogoStyle::Minimal);
        assert_eq!(LogoStyle::from_label("Bold and Playful"), LogoStyle::Bold);
        assert_eq!(LogoStyle::from_label(""), LogoStyle::Modern);
    }

    #[test]
    fn test_palette_unpacking() {
        let first = LogoStyle::Modern.palettes()[0];
        assert_eq!(first.primary.to_hex(), "#3B82F6");
        assert_eq!(first.secondary.to_hex(), "#8B5CF6");
        assert_eq!(first.accent.to_hex(), "#06B6D4");
    }

    #[test]
    fn test_every_family_has_three_palettes() {
        for style in LogoStyle::ALL {
            assert_eq!(style.palettes().len(), 3);
        }
    }

    #[test]
    fn test_logo_config_defaults_when_deserializing() {
        let config: LogoConfig = serde_json::from_str(r#"{"brand_name":"Acme"}"#).unwrap();
        assert_eq!(config.brand_name, "Acme");
        assert!(config.style.is_empty());
        assert!(config.industry.is_empty());
    }
}
