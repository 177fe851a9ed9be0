/// Distance in pixels within which a pixel counts as lying on a polygon edge.
pub const EDGE_TOLERANCE: f32 = 0.5;

/// Fully transparent black, the initial value of every surface pixel.
pub const TRANSPARENT: crate::types::Rgba = [0, 0, 0, 0];
