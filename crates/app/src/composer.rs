//! Icon composition
//!
//! Renders an [`IconLayout`] onto a fresh transparent surface, one layer at a
//! time in a fixed order. Every layer replaces the pixels it covers, so the
//! translucent petals keep their own alpha instead of blending with the disc
//! underneath.

use painting::{BlendMode, CpuSurface, Region};
use tracing::debug;

use crate::layout::IconLayout;
use crate::palette::{DARK_GRAY, GOLD, HOT_PINK, LIGHT_PINK, ORANGE_RED, PETAL_WHITE, WHITE};

const MODE: BlendMode = BlendMode::Replace;

/// Render the icon for `size` pixels
pub fn compose_icon(size: u32) -> CpuSurface {
    render_layout(&IconLayout::for_size(size))
}

/// Render a precomputed layout
pub fn render_layout(layout: &IconLayout) -> CpuSurface {
    debug!("compose_icon: size={}", layout.size);

    let mut surface = CpuSurface::square(layout.size);

    let region = surface.fill_ellipse(layout.background, LIGHT_PINK, MODE);
    log_layer("background", region);

    let region = surface.fill_ellipse(layout.inner, HOT_PINK, MODE);
    log_layer("inner disc", region);

    if let Some(flower) = &layout.flower {
        for (i, petal) in flower.petals.iter().enumerate() {
            let region = surface.fill_ellipse(*petal, PETAL_WHITE, MODE);
            debug!("  petal {}: {:?}", i, region);
        }

        let region = surface.fill_ellipse(flower.center_disc, GOLD, MODE);
        log_layer("center disc", region);
    }

    if let Some(magnifier) = &layout.magnifier {
        let region =
            surface.outline_ellipse(magnifier.glass_bbox(), DARK_GRAY, magnifier.glass_width, MODE);
        log_layer("magnifier glass", region);

        let region = surface.draw_line(
            magnifier.handle_start,
            magnifier.handle_end,
            DARK_GRAY,
            magnifier.handle_width,
            MODE,
        );
        log_layer("magnifier handle", region);
    }

    if let Some(warning) = &layout.warning {
        let region = surface.fill_polygon(&warning.triangle, ORANGE_RED, MODE);
        log_layer("warning badge", region);

        if let Some(mark) = &warning.exclamation {
            let region = surface.draw_line(mark.top, mark.bottom, WHITE, mark.width, MODE);
            log_layer("exclamation mark", region);
        }
    }

    surface
}

fn log_layer(name: &str, region: Option<Region>) {
    match region {
        Some(r) => debug!(
            "  {}: x={}, y={}, {}x{}",
            name, r.x, r.y, r.width, r.height
        ),
        None => debug!("  {}: nothing drawn", name),
    }
}
