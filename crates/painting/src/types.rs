/// A straight-alpha RGBA color, one byte per channel
pub type Rgba = [u8; 4];

/// How a shape's color is combined with the pixels it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Write the color verbatim, alpha included
    #[default]
    Replace,
    /// Source-over compositing onto the existing pixel
    Over,
}

/// An integer pixel coordinate. Pixel (x, y) is sampled at exactly this point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by (dx, dy)
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Inclusive pixel bounding box `[x0, y0, x1, y1]`
///
/// Both corners belong to the box, so its width is `x1 - x0 + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BoundingBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box inset by `padding` from each edge of a `size`-pixel square
    pub const fn inset_square(size: i32, padding: i32) -> Self {
        Self::new(padding, padding, size - padding - 1, size - padding - 1)
    }

    /// Box of a circle with the given center and radius
    pub const fn around(center: Point, radius: i32) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    /// Box shrunk by `amount` on every side
    pub const fn shrink(self, amount: i32) -> Self {
        Self::new(
            self.x0 + amount,
            self.y0 + amount,
            self.x1 - amount,
            self.y1 - amount,
        )
    }

    /// True when the box covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Geometric center in pixel coordinates
    pub fn center(&self) -> (f32, f32) {
        (
            (self.x0 + self.x1) as f32 / 2.0,
            (self.y0 + self.y1) as f32 / 2.0,
        )
    }

    /// Semi-axes of the ellipse inscribed in this box
    pub fn semi_axes(&self) -> (f32, f32) {
        (
            (self.x1 - self.x0 + 1) as f32 / 2.0,
            (self.y1 - self.y0 + 1) as f32 / 2.0,
        )
    }
}

/// Region of the surface touched by a drawing call (x, y, width, height)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}
