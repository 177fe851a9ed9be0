//! Thick straight line segments

use tracing::debug;

use super::{clip_span, Coverage};
use crate::surface::CpuSurface;
use crate::types::{BlendMode, Point, Region, Rgba};

impl CpuSurface {
    /// Draw a straight segment from `start` to `end` with flat caps
    ///
    /// A pixel is covered when its projection falls on the segment and its
    /// signed distance from the segment lies in `[-width/2, width/2)`. The
    /// half-open band keeps even widths at exactly `width` pixels across an
    /// axis-aligned stroke. A zero-length segment stamps a `width`-sided square.
    pub fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        color: Rgba,
        width: u32,
        mode: BlendMode,
    ) -> Option<Region> {
        debug!(
            "CpuSurface::draw_line: start={:?}, end={:?}, color={:?}, width={}",
            start, end, color, width
        );

        if width == 0 {
            debug!("  -> skipped: zero width");
            return None;
        }

        let half = width as f32 / 2.0;
        let reach = half.ceil() as i32;
        let (x_min, x_max) = clip_span(
            start.x.min(end.x) - reach,
            start.x.max(end.x) + reach,
            self.width,
        )?;
        let (y_min, y_max) = clip_span(
            start.y.min(end.y) - reach,
            start.y.max(end.y) + reach,
            self.height,
        )?;

        let dx = (end.x - start.x) as f32;
        let dy = (end.y - start.y) as f32;
        let length_sq = dx * dx + dy * dy;
        let length = length_sq.sqrt();
        let in_band = |d: f32| d >= -half && d < half;

        let mut coverage = Coverage::default();
        for py in y_min..=y_max {
            for px in x_min..=x_max {
                let rx = px as f32 - start.x as f32;
                let ry = py as f32 - start.y as f32;

                let covered = if length_sq == 0.0 {
                    in_band(rx) && in_band(ry)
                } else {
                    let t = (rx * dx + ry * dy) / length_sq;
                    let signed_distance = (dx * ry - dy * rx) / length;
                    (0.0..=1.0).contains(&t) && in_band(signed_distance)
                };

                if covered {
                    self.paint_pixel(px, py, color, mode);
                    coverage.add(px, py);
                }
            }
        }

        coverage.region()
    }
}
