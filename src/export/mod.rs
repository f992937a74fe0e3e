//! Export functionality for brand palettes.
//!
//! Turns a working palette into downloadable text: CSS custom properties,
//! SCSS variables, or a Figma-style JSON color list.

pub mod palette;

pub use palette::{export_palette, export_palette_as, slugify, suggested_filename, PaletteFormat};
