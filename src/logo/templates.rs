//! The four simple logo templates.

// Allow intentional casts when sizing text by character count
#![allow(clippy::cast_precision_loss)]

use serde::Serialize;
use std::fmt::Write as _;

use crate::icon::{escape_xml, initial};
use crate::models::{ColorTriple, LogoConfig};

const SIZE: u32 = 200;
const GRADIENT_ID: &str = "logo-gradient";
const FONT_STACK: &str = "Helvetica, Arial, sans-serif";

/// Average glyph width as a fraction of the font size.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Layout drawn by the simple logo generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoTemplate {
    /// Gradient rounded rectangle with the name inside
    GradientBadge,
    /// Gradient ring around the initial, name underneath
    GradientRing,
    /// Name over a thin accent rule, industry caption below
    MinimalRule,
    /// Gradient triangle with the name in white
    GradientTriangle,
}

impl LogoTemplate {
    /// All templates; the generator draws uniformly from this list.
    pub const ALL: [Self; 4] = [
        Self::GradientBadge,
        Self::GradientRing,
        Self::MinimalRule,
        Self::GradientTriangle,
    ];

    /// Snake-case template name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GradientBadge => "gradient_badge",
            Self::GradientRing => "gradient_ring",
            Self::MinimalRule => "minimal_rule",
            Self::GradientTriangle => "gradient_triangle",
        }
    }

    /// Renders the template as an SVG document.
    #[must_use]
    pub fn render(&self, config: &LogoConfig, palette: ColorTriple) -> String {
        let name = config.brand_name.trim();
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {SIZE} {SIZE}" width="{SIZE}" height="{SIZE}">"#
        );

        match self {
            Self::GradientBadge => {
                gradient(&mut svg, palette);
                let _ = writeln!(
                    svg,
                    r#"  <rect x="20" y="50" width="160" height="100" rx="20" fill="url(#{GRADIENT_ID})"/>"#
                );
                text(&mut svg, name, 100, fit_font_size(name, 140.0, 32.0), "#FFFFFF", "700");
            }
            Self::GradientRing => {
                gradient(&mut svg, palette);
                let _ = writeln!(
                    svg,
                    r#"  <circle cx="100" cy="80" r="45" fill="none" stroke="url(#{GRADIENT_ID})" stroke-width="10"/>"#
                );
                if let Some(letter) = initial(name) {
                    text(&mut svg, &letter, 80, 40.0, &palette.accent.to_hex(), "700");
                }
                text(&mut svg, name, 160, fit_font_size(name, 180.0, 24.0), &palette.primary.to_hex(), "600");
            }
            Self::MinimalRule => {
                text(&mut svg, name, 90, fit_font_size(name, 170.0, 30.0), &palette.primary.to_hex(), "300");
                let _ = writeln!(
                    svg,
                    r#"  <line x1="50" y1="112" x2="150" y2="112" stroke="{}" stroke-width="2"/>"#,
                    palette.accent
                );
                let industry = config.industry.trim().to_uppercase();
                if !industry.is_empty() {
                    text(&mut svg, &industry, 132, 11.0, &palette.secondary.to_hex(), "400");
                }
            }
            Self::GradientTriangle => {
                gradient(&mut svg, palette);
                let _ = writeln!(
                    svg,
                    r#"  <polygon points="100,25 180,165 20,165" fill="url(#{GRADIENT_ID})"/>"#
                );
                text(&mut svg, name, 135, fit_font_size(name, 100.0, 24.0), "#FFFFFF", "700");
            }
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn gradient(svg: &mut String, palette: ColorTriple) {
    let _ = writeln!(
        svg,
        r#"  <defs><linearGradient id="{GRADIENT_ID}" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="{}"/><stop offset="1" stop-color="{}"/></linearGradient></defs>"#,
        palette.primary, palette.secondary
    );
}

fn text(svg: &mut String, content: &str, y: u32, font_size: f64, fill: &str, weight: &str) {
    if content.is_empty() {
        return;
    }
    let _ = writeln!(
        svg,
        r#"  <text x="100" y="{y}" text-anchor="middle" dominant-baseline="central" font-family="{FONT_STACK}" font-size="{font_size:.0}" font-weight="{weight}" fill="{fill}">{}</text>"#,
        escape_xml(content)
    );
}

/// Largest font size, up to `max_size`, at which `text` fits in `max_width`.
fn fit_font_size(text: &str, max_width: f64, max_size: f64) -> f64 {
    let chars = text.chars().count().max(1) as f64;
    (max_width / (chars * GLYPH_WIDTH_RATIO)).clamp(10.0, max_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LogoStyle, RgbColor};

    fn palette() -> ColorTriple {
        LogoStyle::Bold.palettes()[0]
    }

    #[test]
    fn test_every_template_renders_name() {
        let config = LogoConfig::new("Acme & Co", "bold", "Retail");
        for template in LogoTemplate::ALL {
            let svg = template.render(&config, palette());
            assert!(svg.starts_with("<svg"), "{}", template.name());
            assert!(svg.contains("Acme &amp; Co"), "{}", template.name());
            assert!(svg.trim_end().ends_with("</svg>"));
        }
    }

    #[test]
    fn test_triangle_text_is_white() {
        let svg = LogoTemplate::GradientTriangle.render(&LogoConfig::new("Acme", "", ""), palette());
        assert!(svg.contains("<polygon"));
        assert!(svg.contains(r##"fill="#FFFFFF">Acme</text>"##));
    }

    #[test]
    fn test_minimal_rule_caption() {
        let svg = LogoTemplate::MinimalRule.render(&LogoConfig::new("Acme", "", "Coffee Shop"), palette());
        assert!(svg.contains(">COFFEE SHOP</text>"));
        assert!(svg.contains(&format!("stroke=\"{}\"", palette().accent)));

        let bare = LogoTemplate::MinimalRule.render(&LogoConfig::new("Acme", "", ""), palette());
        assert_eq!(bare.matches("<text").count(), 1);
    }

    #[test]
    fn test_ring_shows_initial() {
        let svg = LogoTemplate::GradientRing.render(&LogoConfig::new("zeta", "", ""), palette());
        assert!(svg.contains(">Z</text>"));
        assert!(svg.contains(">zeta</text>"));
    }

    #[test]
    fn test_fit_font_size() {
        assert!((fit_font_size("Ab", 140.0, 32.0) - 32.0).abs() < f64::EPSILON);
        assert!((fit_font_size("Brandmarks", 140.0, 32.0) - 140.0 / 6.0).abs() < 1e-9);
        assert!((fit_font_size(&"x".repeat(500), 140.0, 32.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gradient_uses_primary_and_secondary() {
        let p = ColorTriple {
            primary: RgbColor::new(1, 2, 3),
            secondary: RgbColor::new(4, 5, 6),
            accent: RgbColor::new(7, 8, 9),
        };
        let svg = LogoTemplate::GradientBadge.render(&LogoConfig::new("Acme", "", ""), p);
        assert!(svg.contains(r##"stop-color="#010203""##));
        assert!(svg.contains(r##"stop-color="#040506""##));
    }
}
