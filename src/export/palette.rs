//! Palette export to CSS custom properties, SCSS variables and Figma JSON.
//!
//! The exporter only produces text; writing it to disk or offering it as a
//! download is left to the caller.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{BrandError, BrandResult};
use crate::models::NamedColor;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Text format produced by [`export_palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteFormat {
    /// `:root { --color-<slug>: #RRGGBB; }`
    Css,
    /// `$<slug>: #RRGGBB;` lines
    Scss,
    /// Pretty-printed JSON array of `{name, color}`
    Figma,
}

impl PaletteFormat {
    /// All formats, in display order.
    pub const ALL: [Self; 3] = [Self::Css, Self::Scss, Self::Figma];

    /// Format name as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Figma => "figma",
        }
    }

    /// File extension for exported files.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Figma => "json",
        }
    }
}

impl fmt::Display for PaletteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteFormat {
    type Err = BrandError;

    /// Accepts exactly `css`, `scss` or `figma`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| BrandError::UnsupportedFormat(s.to_string()))
    }
}

#[derive(Serialize)]
struct FigmaColor<'a> {
    name: &'a str,
    color: String,
}

/// Serializes `colors` in the given format.
///
/// # Examples
///
/// ```
/// use brandmark::export::{export_palette, PaletteFormat};
/// use brandmark::models::NamedColor;
///
/// let colors = vec![NamedColor::parse("Brand Red", "#FF0000").unwrap()];
/// let css = export_palette(&colors, PaletteFormat::Css);
/// assert!(css.contains("--color-brand-red: #FF0000;"));
/// ```
#[must_use]
pub fn export_palette(colors: &[NamedColor], format: PaletteFormat) -> String {
    let mut output = String::new();
    match format {
        PaletteFormat::Css => {
            output.push_str(":root {\n");
            for color in colors {
                let _ = writeln!(output, "  --color-{}: {};", slugify(&color.name), color.hex);
            }
            output.push_str("}\n");
        }
        PaletteFormat::Scss => {
            for color in colors {
                let _ = writeln!(output, "${}: {};", slugify(&color.name), color.hex);
            }
        }
        PaletteFormat::Figma => {
            let entries: Vec<FigmaColor<'_>> = colors
                .iter()
                .map(|c| FigmaColor {
                    name: &c.name,
                    color: c.hex.to_hex(),
                })
                .collect();
            // A Vec of string pairs cannot fail to serialize
            output = serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string());
            output.push('\n');
        }
    }
    output
}

/// Parses `format` and exports `colors` in it.
///
/// # Errors
///
/// Returns `UnsupportedFormat` for anything other than `css`, `scss` or
/// `figma`.
pub fn export_palette_as(colors: &[NamedColor], format: &str) -> BrandResult<String> {
    Ok(export_palette(colors, format.parse()?))
}

/// Lowercases a color name and collapses whitespace runs into single hyphens.
#[must_use]
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(name.trim(), "-")
        .to_lowercase()
}

/// Download filename for a palette export, e.g.
/// `acme_palette_2024-03-01.css`.
#[must_use]
pub fn suggested_filename(palette_name: &str, format: PaletteFormat, date: NaiveDate) -> String {
    let stem = slugify(palette_name);
    let stem = if stem.is_empty() { "brand" } else { stem.as_str() };
    format!(
        "{stem}_palette_{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}
