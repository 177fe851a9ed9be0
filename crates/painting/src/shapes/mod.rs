//! Shape rasterization onto a [`CpuSurface`]
//!
//! Every primitive samples pixel (x, y) at the integer point (x, y), paints
//! covered pixels with the requested [`BlendMode`](crate::types::BlendMode)
//! and returns the region it touched. Degenerate geometry (inverted boxes,
//! zero widths, fewer than three polygon vertices) draws nothing.

mod ellipse;
mod line;
mod polygon;

pub use ellipse::ellipse_contains;
pub use polygon::polygon_contains;

use crate::types::Region;

/// Running bounds of the pixels painted by one drawing call
#[derive(Debug, Default)]
pub(crate) struct Coverage {
    bounds: Option<(u32, u32, u32, u32)>,
}

impl Coverage {
    pub(crate) fn add(&mut self, x: u32, y: u32) {
        self.bounds = Some(match self.bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    pub(crate) fn region(&self) -> Option<Region> {
        self.bounds.map(|(x0, y0, x1, y1)| Region {
            x: x0,
            y: y0,
            width: x1 - x0 + 1,
            height: y1 - y0 + 1,
        })
    }
}

/// Clamp the inclusive span `lo..=hi` to the pixel range `0..limit`
/// Returns None if nothing remains
pub(crate) fn clip_span(lo: i32, hi: i32, limit: u32) -> Option<(u32, u32)> {
    if limit == 0 || hi < 0 || lo > hi {
        return None;
    }
    let lo = lo.max(0) as u32;
    let hi = (hi as u32).min(limit - 1);
    (lo <= hi).then_some((lo, hi))
}
