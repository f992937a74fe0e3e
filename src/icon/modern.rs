//! Flat square-and-circle compositions.

use std::fmt::Write as _;

use super::{num, write_diagonal_gradient, Paint, CENTER, GRADIENT_ID};
use crate::models::ModernStyle;

const SQUARE_SIZE: f64 = 60.0;
const KNOCKOUT_RADIUS: f64 = 15.0;
const TECH_DOT_RADIUS: f64 = 12.0;
const OUTLINE_WIDTH: f64 = 4.0;

pub(super) fn render(style: ModernStyle, paint: Paint, svg: &mut String) {
    let origin = num(CENTER - SQUARE_SIZE / 2.0);
    let size = num(SQUARE_SIZE);
    let c = num(CENTER);
    let fg = paint.fg;

    match style {
        ModernStyle::Minimal => {
            let _ = writeln!(
                svg,
                r#"  <rect x="{origin}" y="{origin}" width="{size}" height="{size}" fill="{fg}"/>"#
            );
            let _ = writeln!(
                svg,
                r#"  <circle cx="{c}" cy="{c}" r="{}" fill="{}"/>"#,
                num(KNOCKOUT_RADIUS),
                paint.bg,
            );
        }
        ModernStyle::Tech => {
            let _ = writeln!(
                svg,
                r#"  <rect x="{origin}" y="{origin}" width="{size}" height="{size}" fill="none" stroke="{fg}" stroke-width="{}"/>"#,
                num(OUTLINE_WIDTH),
            );
            let _ = writeln!(
                svg,
                r#"  <circle cx="{c}" cy="{c}" r="{}" fill="{fg}"/>"#,
                num(TECH_DOT_RADIUS),
            );
        }
        ModernStyle::Gradient => {
            write_diagonal_gradient(svg, fg);
            let _ = writeln!(
                svg,
                r#"  <rect x="{origin}" y="{origin}" width="{size}" height="{size}" fill="url(#{GRADIENT_ID})"/>"#
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::icon::{generate_icon, IconOptions};
    use crate::models::RgbColor;

    fn icon(style: &str) -> String {
        let opts = IconOptions::with_style(style)
            .color(RgbColor::new(0x10, 0x20, 0x30))
            .background_color(RgbColor::new(0xF0, 0xF0, 0xF0));
        generate_icon("Acme", &opts)
    }

    #[test]
    fn test_minimal_knockout_uses_background() {
        let svg = icon("modern-minimal");
        assert!(svg.contains(r##"<rect x="20" y="20" width="60" height="60" fill="#102030"/>"##));
        assert!(svg.contains(r##"<circle cx="50" cy="50" r="15" fill="#F0F0F0"/>"##));
    }

    #[test]
    fn test_tech_outline() {
        let svg = icon("modern-tech");
        assert!(svg.contains(r##"fill="none" stroke="#102030" stroke-width="4""##));
        assert!(svg.contains(r##"<circle cx="50" cy="50" r="12" fill="#102030"/>"##));
    }

    #[test]
    fn test_gradient_square() {
        let svg = icon("modern-gradient");
        assert!(svg.contains(r#"x1="0" y1="0" x2="1" y2="1""#));
        assert!(svg.contains("fill=\"url(#icon-gradient)\""));
    }

    #[test]
    fn test_unknown_modern_substyle() {
        let svg = icon("modern-brutalist");
        assert_eq!(svg.matches("<rect").count(), 1);
        assert!(!svg.contains("<circle"));
    }
}
