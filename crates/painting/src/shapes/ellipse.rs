//! Filled and outlined ellipses

use tracing::debug;

use super::{clip_span, Coverage};
use crate::surface::CpuSurface;
use crate::types::{BlendMode, BoundingBox, Region, Rgba};

impl CpuSurface {
    /// Fill the ellipse inscribed in an inclusive bounding box
    /// Returns the touched region, or None if nothing was painted
    pub fn fill_ellipse(
        &mut self,
        bbox: BoundingBox,
        color: Rgba,
        mode: BlendMode,
    ) -> Option<Region> {
        debug!("CpuSurface::fill_ellipse: bbox={:?}, color={:?}", bbox, color);

        if bbox.is_empty() {
            debug!("  -> skipped: empty bounding box");
            return None;
        }

        self.paint_ellipse_band(bbox, None, color, mode)
    }

    /// Stroke the outline of the ellipse inscribed in `bbox`
    ///
    /// The stroke covers `width` pixels inward from the box edge: a pixel is
    /// painted when it lies inside the outer ellipse but outside the ellipse
    /// of the box shrunk by `width` on every side.
    pub fn outline_ellipse(
        &mut self,
        bbox: BoundingBox,
        color: Rgba,
        width: u32,
        mode: BlendMode,
    ) -> Option<Region> {
        debug!(
            "CpuSurface::outline_ellipse: bbox={:?}, color={:?}, width={}",
            bbox, color, width
        );

        if bbox.is_empty() || width == 0 {
            debug!("  -> skipped: empty bounding box or zero width");
            return None;
        }

        let inner = bbox.shrink(width as i32);
        let hole = (!inner.is_empty()).then_some(inner);
        self.paint_ellipse_band(bbox, hole, color, mode)
    }

    fn paint_ellipse_band(
        &mut self,
        outer: BoundingBox,
        hole: Option<BoundingBox>,
        color: Rgba,
        mode: BlendMode,
    ) -> Option<Region> {
        let (x_min, x_max) = clip_span(outer.x0, outer.x1, self.width)?;
        let (y_min, y_max) = clip_span(outer.y0, outer.y1, self.height)?;

        let mut coverage = Coverage::default();
        for py in y_min..=y_max {
            for px in x_min..=x_max {
                let (x, y) = (px as i32, py as i32);
                if !ellipse_contains(&outer, x, y) {
                    continue;
                }
                if hole.is_some_and(|inner| ellipse_contains(&inner, x, y)) {
                    continue;
                }
                self.paint_pixel(px, py, color, mode);
                coverage.add(px, py);
            }
        }

        coverage.region()
    }
}

/// Whether pixel (x, y) lies inside the ellipse inscribed in `bbox`
#[inline]
pub fn ellipse_contains(bbox: &BoundingBox, x: i32, y: i32) -> bool {
    let (cx, cy) = bbox.center();
    let (rx, ry) = bbox.semi_axes();
    let nx = (x as f32 - cx) / rx;
    let ny = (y as f32 - cy) / ry;
    nx * nx + ny * ny <= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    const RED: Rgba = [255, 0, 0, 255];

    fn painted(surface: &CpuSurface) -> usize {
        surface.pixels().iter().filter(|p| p[3] != 0).count()
    }

    #[test]
    fn test_fill_ellipse_full_canvas() {
        let mut surface = CpuSurface::square(16);
        let region = surface
            .fill_ellipse(BoundingBox::inset_square(16, 0), RED, BlendMode::Replace)
            .unwrap();

        assert_eq!(
            region,
            Region {
                x: 0,
                y: 0,
                width: 16,
                height: 16
            }
        );
        // Middle row spans the whole width, corners stay transparent
        assert_eq!(surface.get_pixel(0, 8), Some(RED));
        assert_eq!(surface.get_pixel(15, 7), Some(RED));
        assert_eq!(surface.get_pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(surface.get_pixel(15, 15), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_fill_ellipse_single_pixel_box() {
        let mut surface = CpuSurface::square(4);
        surface.fill_ellipse(BoundingBox::new(2, 1, 2, 1), RED, BlendMode::Replace);
        assert_eq!(painted(&surface), 1);
        assert_eq!(surface.get_pixel(2, 1), Some(RED));
    }

    #[test]
    fn test_fill_ellipse_inverted_box_draws_nothing() {
        let mut surface = CpuSurface::square(8);
        let region = surface.fill_ellipse(BoundingBox::new(5, 5, 4, 6), RED, BlendMode::Replace);
        assert!(region.is_none());
        assert_eq!(painted(&surface), 0);
    }

    #[test]
    fn test_fill_ellipse_clipped_to_surface() {
        let mut surface = CpuSurface::square(8);
        let region = surface
            .fill_ellipse(
                BoundingBox::around(Point::new(0, 0), 3),
                RED,
                BlendMode::Replace,
            )
            .unwrap();
        assert_eq!(region.x, 0);
        assert_eq!(region.y, 0);
        assert!(region.width <= 4 && region.height <= 4);
        assert_eq!(surface.get_pixel(0, 0), Some(RED));
    }

    #[test]
    fn test_outline_ellipse_leaves_center_untouched() {
        let mut surface = CpuSurface::square(48);
        let bbox = BoundingBox::around(Point::new(33, 33), 8);
        surface.outline_ellipse(bbox, RED, 2, BlendMode::Replace);

        assert_eq!(surface.get_pixel(33, 33), Some([0, 0, 0, 0]));
        assert_eq!(surface.get_pixel(33, 25), Some(RED));
        assert_eq!(surface.get_pixel(25, 33), Some(RED));
        assert_eq!(surface.get_pixel(41, 33), Some(RED));
        assert_eq!(surface.get_pixel(33, 41), Some(RED));
        // Three pixels in from the edge is past a 2-pixel stroke
        assert_eq!(surface.get_pixel(33, 28), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_outline_wider_than_radius_fills() {
        let mut surface_outline = CpuSurface::square(10);
        let mut surface_fill = CpuSurface::square(10);
        let bbox = BoundingBox::new(2, 2, 6, 6);

        surface_outline.outline_ellipse(bbox, RED, 5, BlendMode::Replace);
        surface_fill.fill_ellipse(bbox, RED, BlendMode::Replace);
        assert_eq!(surface_outline, surface_fill);
    }

    #[test]
    fn test_fill_ellipse_over_blends_with_background() {
        let mut surface = CpuSurface::square(8);
        surface.clear([255, 255, 255, 255]);
        surface.fill_ellipse(BoundingBox::new(0, 0, 7, 7), [0, 0, 0, 128], BlendMode::Over);

        let center = surface.get_pixel(4, 4).unwrap();
        assert_eq!(center[3], 255);
        assert!((center[0] as i32 - 127).abs() <= 1);
        // Corners are outside the ellipse and keep the background
        assert_eq!(surface.get_pixel(0, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_outline_zero_width_draws_nothing() {
        let mut surface = CpuSurface::square(10);
        let region =
            surface.outline_ellipse(BoundingBox::new(1, 1, 8, 8), RED, 0, BlendMode::Replace);
        assert!(region.is_none());
        assert_eq!(painted(&surface), 0);
    }
}
