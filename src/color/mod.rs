//! Color science utilities: contrast scoring and harmony generation.
//!
//! Every function comes in two flavors: one taking hex strings (validating
//! them) and one taking already parsed [`RgbColor`](crate::models::RgbColor)
//! values.

pub mod contrast;
pub mod harmony;

pub use contrast::{
    accessibility_score, color_accessibility_score, color_contrast_ratio, contrast_ratio,
    luminance, relative_luminance,
};
pub use harmony::{color_harmonies, harmonies, hue_rotate};
