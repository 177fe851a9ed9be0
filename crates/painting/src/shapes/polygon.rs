//! Filled polygons

use tracing::debug;

use super::{clip_span, Coverage};
use crate::constants::EDGE_TOLERANCE;
use crate::surface::CpuSurface;
use crate::types::{BlendMode, Point, Region, Rgba};

impl CpuSurface {
    /// Fill a polygon given its vertices in order
    ///
    /// Interior pixels follow the even-odd rule. Pixels within
    /// [`EDGE_TOLERANCE`] of an edge are painted too, so the outline is part
    /// of the fill.
    pub fn fill_polygon(&mut self, vertices: &[Point], color: Rgba, mode: BlendMode) -> Option<Region> {
        debug!(
            "CpuSurface::fill_polygon: vertices={:?}, color={:?}",
            vertices, color
        );

        if vertices.len() < 3 {
            debug!("  -> skipped: fewer than 3 vertices");
            return None;
        }

        let x_lo = vertices.iter().map(|p| p.x).min()?;
        let x_hi = vertices.iter().map(|p| p.x).max()?;
        let y_lo = vertices.iter().map(|p| p.y).min()?;
        let y_hi = vertices.iter().map(|p| p.y).max()?;
        let (x_min, x_max) = clip_span(x_lo, x_hi, self.width)?;
        let (y_min, y_max) = clip_span(y_lo, y_hi, self.height)?;

        let mut coverage = Coverage::default();
        for py in y_min..=y_max {
            for px in x_min..=x_max {
                let (x, y) = (px as f32, py as f32);
                if polygon_contains(vertices, x, y) || near_edge(vertices, x, y) {
                    self.paint_pixel(px, py, color, mode);
                    coverage.add(px, py);
                }
            }
        }

        coverage.region()
    }
}

/// Even-odd point-in-polygon test
pub fn polygon_contains(vertices: &[Point], x: f32, y: f32) -> bool {
    if vertices.is_empty() {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (xi, yi) = (vertices[i].x as f32, vertices[i].y as f32);
        let (xj, yj) = (vertices[j].x as f32, vertices[j].y as f32);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

fn near_edge(vertices: &[Point], x: f32, y: f32) -> bool {
    let n = vertices.len();
    (0..n).any(|i| distance_to_segment(vertices[i], vertices[(i + 1) % n], x, y) <= EDGE_TOLERANCE)
}

fn distance_to_segment(a: Point, b: Point, x: f32, y: f32) -> f32 {
    let (ax, ay) = (a.x as f32, a.y as f32);
    let (dx, dy) = (b.x as f32 - ax, b.y as f32 - ay);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((x - ax) * dx + (y - ay) * dy) / length_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (ax + t * dx, ay + t * dy);
    ((x - cx).powi(2) + (y - cy).powi(2)).sqrt()
}
