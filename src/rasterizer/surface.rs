//! Pixel surface for software rendering

use std::path::Path;

use super::types::{Color, Rect};
use crate::Result;

/// True when integer pixel (x, y) lies in [0, width) x [0, height).
///
/// Every rasterizer guards its writes with this one predicate.
pub fn in_bounds(x: i64, y: i64, width: u32, height: u32) -> bool {
    x >= 0 && y >= 0 && x < width as i64 && y < height as i64
}

/// Row-major RGBA8 pixel buffer with a clip rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    width: u32,
    height: u32,
    clip: Rect,
}

impl Surface {
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "surface must not be empty");
        Self {
            pixels: vec![0; width as usize * height as usize * 4],
            width,
            height,
            clip: Rect::of_size(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Clip rectangle used by the draw functions (whole surface by default)
    pub fn clip_area(&self) -> Rect {
        self.clip
    }

    pub fn set_clip_area(&mut self, clip: Rect) {
        self.clip = clip;
    }

    pub fn reset_clip_area(&mut self) {
        self.clip = Rect::of_size(self.width, self.height);
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        in_bounds(x, y, self.width, self.height)
    }

    /// Zero every byte (transparent black)
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    pub fn fill(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} surface",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Write one pixel. The caller keeps (x, y) inside the surface.
    pub fn set_pixel_srgb(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let idx = self.index(x, y);
        Color::new(self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2])
    }

    /// True if any channel of the pixel is non-zero
    pub fn is_lit(&self, x: u32, y: u32) -> bool {
        let idx = self.index(x, y);
        self.pixels[idx..idx + 4].iter().any(|&b| b != 0)
    }

    /// Raw RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// Copy into an `image` buffer (for encoding or display)
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let idx = self.index(x, y);
            image::Rgba([
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ])
        })
    }

    /// Encode as PNG
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        log::info!("saved {}x{} surface to {}", self.width, self.height, path.display());
        Ok(())
    }
}
