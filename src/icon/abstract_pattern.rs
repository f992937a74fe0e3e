//! Procedural patterns: waves, dot grid, line mesh and spiral.

use std::fmt::Write as _;

use super::{num, Paint, CANVAS_SIZE, CENTER};
use crate::models::AbstractPattern;

const DOT_GRID: u32 = 5;
const DOT_RADIUS: f64 = 4.0;
const MESH_GRID: u32 = 4;
const MESH_OPACITY: f64 = 0.5;
const SWIRL_STEP_DEGREES: u32 = 5;
const SWIRL_TURNS: u32 = 2;
const SWIRL_MAX_RADIUS: f64 = 40.0;
const STROKE_WIDTH: f64 = 4.0;

pub(super) fn render(pattern: AbstractPattern, paint: Paint, svg: &mut String) {
    match pattern {
        AbstractPattern::Waves => waves(paint, svg),
        AbstractPattern::Dots => dots(paint, svg),
        AbstractPattern::Mesh => mesh(paint, svg),
        AbstractPattern::Swirl => swirl(paint, svg),
    }
}

/// One cubic Bezier from the left edge to the right edge.
fn waves(paint: Paint, svg: &mut String) {
    let _ = writeln!(
        svg,
        r#"  <path d="M 0 50 C 25 20, 75 80, 100 50" fill="none" stroke="{}" stroke-width="{}"/>"#,
        paint.fg,
        num(STROKE_WIDTH),
    );
}

/// Evenly spaced dots, one per grid cell center.
fn dots(paint: Paint, svg: &mut String) {
    let cell = CANVAS_SIZE / f64::from(DOT_GRID);
    for row in 0..DOT_GRID {
        for col in 0..DOT_GRID {
            let _ = writeln!(
                svg,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                num(cell.mul_add(f64::from(col), cell / 2.0)),
                num(cell.mul_add(f64::from(row), cell / 2.0)),
                num(DOT_RADIUS),
                paint.fg,
            );
        }
    }
}

/// Both diagonals of every grid cell, drawn translucent.
fn mesh(paint: Paint, svg: &mut String) {
    let cell = CANVAS_SIZE / f64::from(MESH_GRID);
    for row in 0..MESH_GRID {
        for col in 0..MESH_GRID {
            let x0 = cell * f64::from(col);
            let y0 = cell * f64::from(row);
            let (x1, y1) = (x0 + cell, y0 + cell);
            for (ax, ay, bx, by) in [(x0, y0, x1, y1), (x1, y0, x0, y1)] {
                let _ = writeln!(
                    svg,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1" stroke-opacity="{}"/>"#,
                    num(ax),
                    num(ay),
                    num(bx),
                    num(by),
                    paint.fg,
                    num(MESH_OPACITY),
                );
            }
        }
    }
}

/// Archimedean spiral sampled every few degrees; the radius grows linearly
/// with the angle and reaches its maximum at the end of the last turn.
fn swirl(paint: Paint, svg: &mut String) {
    let _ = writeln!(
        svg,
        r#"  <polyline points="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
        swirl_points()
            .iter()
            .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
            .collect::<Vec<_>>()
            .join(" "),
        paint.fg,
        num(STROKE_WIDTH / 2.0),
    );
}

fn swirl_points() -> Vec<(f64, f64)> {
    let total_degrees = 360 * SWIRL_TURNS;
    let growth = SWIRL_MAX_RADIUS / f64::from(total_degrees).to_radians();

    (0..=total_degrees)
        .step_by(SWIRL_STEP_DEGREES as usize)
        .map(|deg| {
            let angle = f64::from(deg).to_radians();
            let radius = growth * angle;
            (
                radius.mul_add(angle.cos(), CENTER),
                radius.mul_add(angle.sin(), CENTER),
            )
        })
        .collect()
}
