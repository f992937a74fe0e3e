//! First-letter icons.

use std::fmt::Write as _;

use super::{
    escape_xml, num, write_diagonal_gradient, Paint, CANVAS_SIZE, CENTER, GRADIENT_ID,
};
use crate::models::InitialsStyle;

const INSET: f64 = 10.0;
const CORNER_RADIUS: f64 = 16.0;
const FONT_SIZE: f64 = 48.0;

/// Uppercased first character of the brand name, ignoring leading whitespace.
pub(crate) fn initial(brand_name: &str) -> Option<String> {
    brand_name
        .trim_start()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
}

pub(super) fn render(style: InitialsStyle, brand_name: &str, paint: Paint, svg: &mut String) {
    let side = CANVAS_SIZE - 2.0 * INSET;

    let fill = match style {
        InitialsStyle::Gradient => {
            write_diagonal_gradient(svg, paint.fg);
            format!("url(#{GRADIENT_ID})")
        }
        InitialsStyle::Simple | InitialsStyle::Rounded => paint.fg.to_hex(),
    };

    let corner = match style {
        InitialsStyle::Simple => String::new(),
        InitialsStyle::Rounded | InitialsStyle::Gradient => {
            format!(r#" rx="{}""#, num(CORNER_RADIUS))
        }
    };

    let _ = writeln!(
        svg,
        r#"  <rect x="{inset}" y="{inset}" width="{side}" height="{side}"{corner} fill="{fill}"/>"#,
        inset = num(INSET),
        side = num(side),
    );

    if let Some(letter) = initial(brand_name) {
        let _ = writeln!(
            svg,
            r#"  <text x="{c}" y="{c}" text-anchor="middle" dominant-baseline="central" font-family="Helvetica, Arial, sans-serif" font-size="{size}" font-weight="700" fill="{bg}">{letter}</text>"#,
            c = num(CENTER),
            size = num(FONT_SIZE),
            bg = paint.bg,
            letter = escape_xml(&letter),
        );
    }
}
