//! Icon geometry derived from the target size
//!
//! All measurements are integer fractions of the size (floor division).
//! Layers whose size threshold is not met are `None`.

use painting::{BoundingBox, Point};

/// Smallest size that gets petals and the center disc
pub const FLOWER_MIN_SIZE: u32 = 32;
/// Smallest size that gets the magnifier
pub const MAGNIFIER_MIN_SIZE: u32 = 48;
/// Largest size that gets the warning badge
pub const WARNING_MAX_SIZE: u32 = 32;
/// Smallest size whose warning badge carries an exclamation mark
pub const EXCLAMATION_MIN_SIZE: u32 = 24;

pub const PETAL_COUNT: usize = 5;

/// Petal centers sit at this fraction of the petal size from the icon center
const PETAL_OFFSET: f64 = 0.6;
/// Handle starts at this fraction of the glass radius along the diagonal
const HANDLE_OFFSET: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLayout {
    pub size: u32,
    pub center: Point,
    pub background: BoundingBox,
    pub inner: BoundingBox,
    pub flower: Option<Flower>,
    pub magnifier: Option<Magnifier>,
    pub warning: Option<Warning>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flower {
    /// Petal circles, clockwise from the top
    pub petals: [BoundingBox; PETAL_COUNT],
    pub center_disc: BoundingBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnifier {
    pub glass_center: Point,
    pub glass_radius: i32,
    pub glass_width: u32,
    pub handle_start: Point,
    pub handle_end: Point,
    pub handle_width: u32,
}

impl Magnifier {
    pub fn glass_bbox(&self) -> BoundingBox {
        BoundingBox::around(self.glass_center, self.glass_radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Warning {
    /// Apex, bottom-left, bottom-right
    pub triangle: [Point; 3],
    pub exclamation: Option<Exclamation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exclamation {
    pub top: Point,
    pub bottom: Point,
    pub width: u32,
}

impl IconLayout {
    /// Compute the layout for a square icon of `size` pixels
    pub fn for_size(size: u32) -> Self {
        let s = size as i32;
        let center = Point::new(s / 2, s / 2);

        let padding = if size >= FLOWER_MIN_SIZE { s / 16 } else { 0 };

        Self {
            size,
            center,
            background: BoundingBox::inset_square(s, padding),
            inner: BoundingBox::inset_square(s, s / 8),
            flower: (size >= FLOWER_MIN_SIZE).then(|| Flower::new(s, center)),
            magnifier: (size >= MAGNIFIER_MIN_SIZE).then(|| Magnifier::new(s, center)),
            warning: (size <= WARNING_MAX_SIZE).then(|| Warning::new(size, center)),
        }
    }
}

impl Flower {
    fn new(s: i32, center: Point) -> Self {
        let petal_size = s / 4;
        let petal_radius = petal_size / 2;
        let reach = petal_size as f64 * PETAL_OFFSET;

        let petals = std::array::from_fn(|i| {
            let angle = (i as f64 * 72.0 - 90.0).to_radians();
            let petal_center = center.offset(
                (reach * angle.cos()) as i32,
                (reach * angle.sin()) as i32,
            );
            BoundingBox::around(petal_center, petal_radius)
        });

        Self {
            petals,
            center_disc: BoundingBox::around(center, s / 10),
        }
    }
}

impl Magnifier {
    fn new(s: i32, center: Point) -> Self {
        let glass_center = center.offset(s / 5, s / 5);
        let glass_radius = s / 6;

        let handle_length = s / 5;
        let start_offset = (glass_radius as f64 * HANDLE_OFFSET) as i32;
        let handle_start = glass_center.offset(start_offset, start_offset);
        let handle_end = handle_start.offset(handle_length / 2, handle_length / 2);

        Self {
            glass_center,
            glass_radius,
            glass_width: (s / 32).max(2) as u32,
            handle_start,
            handle_end,
            handle_width: (s / 24).max(2) as u32,
        }
    }
}

impl Warning {
    fn new(size: u32, center: Point) -> Self {
        let s = size as i32;
        let warning_size = s / 3;
        let half = warning_size / 2;

        let triangle = [
            center.offset(0, -half),
            center.offset(-half, half),
            center.offset(half, half),
        ];

        let exclamation = (size >= EXCLAMATION_MIN_SIZE).then(|| Exclamation {
            top: center.offset(0, -(warning_size / 4)),
            bottom: center.offset(0, warning_size / 8),
            width: (s / 16).max(1) as u32,
        });

        Self {
            triangle,
            exclamation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_icon_layers() {
        let layout = IconLayout::for_size(16);
        assert_eq!(layout.background, BoundingBox::new(0, 0, 15, 15));
        assert_eq!(layout.inner, BoundingBox::new(2, 2, 13, 13));
        assert!(layout.flower.is_none());
        assert!(layout.magnifier.is_none());

        let warning = layout.warning.unwrap();
        assert_eq!(
            warning.triangle,
            [Point::new(8, 6), Point::new(6, 10), Point::new(10, 10)]
        );
        assert!(warning.exclamation.is_none());
    }

    #[test]
    fn test_size_32_has_flower_and_warning() {
        let layout = IconLayout::for_size(32);
        assert_eq!(layout.background, BoundingBox::new(2, 2, 29, 29));
        assert!(layout.flower.is_some());
        assert!(layout.magnifier.is_none());

        let warning = layout.warning.unwrap();
        let exclamation = warning.exclamation.unwrap();
        assert_eq!(exclamation.top, Point::new(16, 14));
        assert_eq!(exclamation.bottom, Point::new(16, 17));
        assert_eq!(exclamation.width, 2);
    }

    #[test]
    fn test_petal_placement() {
        let flower = IconLayout::for_size(128).flower.unwrap();

        // petal_size = 32, reach = 19.2, petal_radius = 16
        assert_eq!(flower.petals[0], BoundingBox::around(Point::new(64, 45), 16));
        assert_eq!(flower.petals[1], BoundingBox::around(Point::new(82, 59), 16));
        assert_eq!(flower.petals[2], BoundingBox::around(Point::new(75, 79), 16));
        assert_eq!(flower.petals[3], BoundingBox::around(Point::new(53, 79), 16));
        assert_eq!(flower.petals[4], BoundingBox::around(Point::new(46, 59), 16));
        assert_eq!(flower.center_disc, BoundingBox::around(Point::new(64, 64), 12));
    }

    #[test]
    fn test_magnifier_at_48() {
        let magnifier = IconLayout::for_size(48).magnifier.unwrap();
        assert_eq!(magnifier.glass_center, Point::new(33, 33));
        assert_eq!(magnifier.glass_radius, 8);
        assert_eq!(magnifier.glass_width, 2);
        assert_eq!(magnifier.glass_bbox(), BoundingBox::new(25, 25, 41, 41));
        assert_eq!(magnifier.handle_start, Point::new(38, 38));
        assert_eq!(magnifier.handle_end, Point::new(42, 42));
        assert_eq!(magnifier.handle_width, 2);
    }

    #[test]
    fn test_large_icon_has_no_warning() {
        let layout = IconLayout::for_size(128);
        assert!(layout.warning.is_none());

        let magnifier = layout.magnifier.unwrap();
        assert_eq!(magnifier.glass_center, Point::new(89, 89));
        assert_eq!(magnifier.glass_radius, 21);
        assert_eq!(magnifier.glass_width, 4);
        assert_eq!(magnifier.handle_width, 5);
    }

    #[test]
    fn test_unusual_sizes_do_not_panic() {
        for size in [0, 1, 2, 7, 24, 33, 47, 64, 256, 1024] {
            let layout = IconLayout::for_size(size);
            assert_eq!(layout.size, size);
        }
    }
}
