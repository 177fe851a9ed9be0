//! CPU surface for painting - 8-bit RGBA storage

use image::RgbaImage;
use thiserror::Error;

use crate::constants::TRANSPARENT;
use crate::types::{BlendMode, Rgba};

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Pixel buffer of {len} bytes does not match a {width}x{height} RGBA image")]
    BufferMismatch { width: u32, height: u32, len: usize },
}

/// An 8-bit RGBA CPU surface for painting
/// Stores pixels as [u8; 4] in straight (non-premultiplied) alpha
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major order, each pixel is [r, g, b, a]
    pixels: Vec<Rgba>,
}

impl CpuSurface {
    /// Create a new surface with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; pixel_count],
        }
    }

    /// Create a square surface
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// Clear the surface to a solid color
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color;
        }
    }

    /// Blend a color onto an existing pixel using straight-alpha source-over
    /// Formula: out_a = src_a + dst_a * (1 - src_a)
    ///          out_c = (src_c * src_a + dst_c * dst_a * (1 - src_a)) / out_a
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        let dst = self.pixels[index];

        let src_alpha = color[3] as f32 / 255.0;
        let dst_alpha = dst[3] as f32 / 255.0;
        let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

        if out_alpha <= 0.0 {
            self.pixels[index] = TRANSPARENT;
            return;
        }

        let channel = |src: u8, dst: u8| -> u8 {
            let value = (src as f32 * src_alpha + dst as f32 * dst_alpha * (1.0 - src_alpha))
                / out_alpha;
            value.round().clamp(0.0, 255.0) as u8
        };

        self.pixels[index] = [
            channel(color[0], dst[0]),
            channel(color[1], dst[1]),
            channel(color[2], dst[2]),
            (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
        ];
    }

    /// Paint a pixel using the given blend mode
    #[inline]
    pub fn paint_pixel(&mut self, x: u32, y: u32, color: Rgba, mode: BlendMode) {
        match mode {
            BlendMode::Replace => self.set_pixel(x, y, color),
            BlendMode::Over => self.blend_pixel(x, y, color),
        }
    }

    /// Get raw pixel data as bytes in RGBA order
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get direct access to pixel data
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Copy the surface into an `image` buffer ready for encoding
    pub fn to_rgba_image(&self) -> Result<RgbaImage, SurfaceError> {
        let bytes = self.as_bytes().to_vec();
        let len = bytes.len();
        RgbaImage::from_raw(self.width, self.height, bytes).ok_or(SurfaceError::BufferMismatch {
            width: self.width,
            height: self.height,
            len,
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}
