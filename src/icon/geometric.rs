//! Single centered shapes.

use std::f64::consts::PI;
use std::fmt::Write as _;

use super::{num, Paint, CENTER};
use crate::models::GeometricShape;

/// Edge length (or diameter) of every shape.
const SHAPE_SIZE: f64 = 60.0;

/// Height factor of an equilateral triangle, sqrt(3) / 2 truncated.
const TRIANGLE_HEIGHT_FACTOR: f64 = 0.866;

pub(super) fn render(shape: GeometricShape, paint: Paint, svg: &mut String) {
    let fg = paint.fg;
    let half = SHAPE_SIZE / 2.0;

    match shape {
        GeometricShape::Circle => {
            let _ = writeln!(
                svg,
                r#"  <circle cx="{c}" cy="{c}" r="{r}" fill="{fg}"/>"#,
                c = num(CENTER),
                r = num(half),
            );
        }
        GeometricShape::Square => {
            let _ = writeln!(
                svg,
                r#"  <rect x="{o}" y="{o}" width="{s}" height="{s}" fill="{fg}"/>"#,
                o = num(CENTER - half),
                s = num(SHAPE_SIZE),
            );
        }
        GeometricShape::Hexagon => polygon(svg, &hexagon_points(half), paint),
        GeometricShape::Triangle => polygon(svg, &triangle_points(), paint),
        GeometricShape::Diamond => polygon(svg, &diamond_points(half), paint),
    }
}

fn polygon(svg: &mut String, points: &[(f64, f64)], paint: Paint) {
    let points = points
        .iter()
        .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(svg, r#"  <polygon points="{points}" fill="{}"/>"#, paint.fg);
}

/// Six vertices at 60 degree steps, starting on the positive x axis.
fn hexagon_points(radius: f64) -> Vec<(f64, f64)> {
    (0..6)
        .map(|i| {
            let angle = f64::from(i) * PI / 3.0;
            (
                radius.mul_add(angle.cos(), CENTER),
                radius.mul_add(angle.sin(), CENTER),
            )
        })
        .collect()
}

/// Apex-up equilateral triangle centered on its bounding box.
fn triangle_points() -> Vec<(f64, f64)> {
    let half_height = SHAPE_SIZE * TRIANGLE_HEIGHT_FACTOR / 2.0;
    let half_base = SHAPE_SIZE / 2.0;
    vec![
        (CENTER, CENTER - half_height),
        (CENTER + half_base, CENTER + half_height),
        (CENTER - half_base, CENTER + half_height),
    ]
}

/// Midpoints of the edges of the bounding square: top, right, bottom, left.
fn diamond_points(half: f64) -> Vec<(f64, f64)> {
    vec![
        (CENTER, CENTER - half),
        (CENTER + half, CENTER),
        (CENTER, CENTER + half),
        (CENTER - half, CENTER),
    ]
}
