//! Fixed icon colors

use painting::Rgba;

pub const LIGHT_PINK: Rgba = [255, 182, 193, 255];
pub const HOT_PINK: Rgba = [255, 105, 180, 255];
/// Petals are written with their alpha intact, not composited
pub const PETAL_WHITE: Rgba = [255, 255, 255, 200];
pub const GOLD: Rgba = [255, 215, 0, 255];
pub const DARK_GRAY: Rgba = [70, 70, 70, 255];
pub const ORANGE_RED: Rgba = [255, 69, 0, 255];
pub const WHITE: Rgba = [255, 255, 255, 255];
