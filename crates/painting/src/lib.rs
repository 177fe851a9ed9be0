//! Painting primitives for procedural icon rendering
//!
//! This crate provides:
//! - [`surface`] - CPU 8-bit RGBA surface with `image` export
//! - [`shapes`] - Ellipse, line and polygon rasterization
//! - [`types`] - Colors, points, bounding boxes and blend modes

pub mod constants;
pub mod shapes;
pub mod surface;
pub mod types;

pub use constants::*;
pub use surface::*;
pub use types::*;
