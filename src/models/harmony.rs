//! Color harmony and accessibility result types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// A named color scheme derived from a base color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harmony {
    /// Scheme label (e.g., "Complementary").
    pub name: String,
    /// Ordered colors, base color first.
    pub colors: Vec<RgbColor>,
}

/// WCAG 2.1 conformance tier for normal-size text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessibilityLevel {
    /// Contrast ratio of at least 7.0
    #[serde(rename = "AAA")]
    Aaa,
    /// Contrast ratio of at least 4.5
    #[serde(rename = "AA")]
    Aa,
    /// Below 4.5
    Fail,
}

impl AccessibilityLevel {
    /// Classifies a contrast ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else {
            Self::Fail
        }
    }

    /// Label as shown to users.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::Fail => "Fail",
        }
    }
}

impl fmt::Display for AccessibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best contrast of a color against pure white or pure black.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityResult {
    /// Contrast ratio, 1.0-21.0, rounded to two decimals.
    pub score: f64,
    /// Tier for `score`.
    pub level: AccessibilityLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(AccessibilityLevel::from_ratio(21.0), AccessibilityLevel::Aaa);
        assert_eq!(AccessibilityLevel::from_ratio(7.0), AccessibilityLevel::Aaa);
        assert_eq!(AccessibilityLevel::from_ratio(6.99), AccessibilityLevel::Aa);
        assert_eq!(AccessibilityLevel::from_ratio(4.5), AccessibilityLevel::Aa);
        assert_eq!(AccessibilityLevel::from_ratio(4.49), AccessibilityLevel::Fail);
        assert_eq!(AccessibilityLevel::from_ratio(1.0), AccessibilityLevel::Fail);
    }

    #[test]
    fn test_level_serializes_as_label() {
        let result = AccessibilityResult {
            score: 21.0,
            level: AccessibilityLevel::Aaa,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["level"], "AAA");
        assert_eq!(json["score"], 21.0);
    }
}
