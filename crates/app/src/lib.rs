//! sakura-icons - procedural browser-extension icons
//!
//! Renders a cherry-blossom motif with a magnifier (large sizes) or a warning
//! badge (small sizes) and writes one PNG per configured size:
//! - [`layout`] - Geometry derived from the icon size
//! - [`composer`] - Layered rendering onto a [`painting::CpuSurface`]
//! - [`output`] - PNG encoding and the output directory
//! - [`manifest`] - Pointing `manifest.json` at the generated icons

pub mod composer;
pub mod error;
pub mod layout;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod palette;

pub use composer::{compose_icon, render_layout};
pub use error::IconError;
pub use layout::IconLayout;
pub use output::{generate_icons, GeneratedIcon};
