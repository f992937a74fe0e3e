//! Brandmark Library
//!
//! This library provides brand asset generation: deterministic SVG icons,
//! randomized simple logos, WCAG contrast scoring, color harmonies, palette
//! export and font pairing suggestions. The `web` feature adds an HTTP API
//! over the same operations.

// Module declarations
pub mod branding;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod fonts;
pub mod icon;
pub mod logo;
pub mod models;
pub mod session;

#[cfg(feature = "web")]
pub mod web;

pub use error::{BrandError, BrandResult};
