//! RGBA images and blitting them onto a surface

use std::path::Path;

use super::math::Vec2;
use super::surface::Surface;
use super::types::Rgba;
use crate::{Error, Result};

/// Decoded image, row-major RGBA8
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRgba {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
}

impl ImageRgba {
    /// Wrap raw RGBA bytes. Fails if the length is not `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(Error::ImageSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { width, height, pixels })
    }

    /// Load an image file (PNG, JPEG or BMP)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();
        log::info!("loaded image {} ({}x{})", path.display(), width, height);
        Self::from_rgba8(width, height, img.into_raw())
    }

    /// Decode an image from memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        Self::from_rgba8(width, height, img.into_raw())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Rgba::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        )
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

/// Overlap of an image centered at some position with the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlitRegion {
    /// Surface columns [x0, x1) and rows [y0, y1)
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
    /// Image pixel that lands on (x0, y0)
    image_x0: u32,
    image_y0: u32,
}

fn blit_region(surface: &Surface, image: &ImageRgba, position: Vec2) -> Option<BlitRegion> {
    let start_x = (position.x - image.width as f32 / 2.0).floor() as i64;
    let start_y = (position.y - image.height as f32 / 2.0).floor() as i64;

    let x0 = start_x.max(0);
    let y0 = start_y.max(0);
    let x1 = (surface.width() as i64).min(start_x + image.width as i64);
    let y1 = (surface.height() as i64).min(start_y + image.height as i64);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }

    Some(BlitRegion {
        x0: x0 as u32,
        y0: y0 as u32,
        x1: x1 as u32,
        y1: y1 as u32,
        image_x0: (x0 - start_x) as u32,
        image_y0: (y0 - start_y) as u32,
    })
}

fn blit_with<F>(surface: &mut Surface, image: &ImageRgba, position: Vec2, mut keep: F)
where
    F: FnMut(Rgba) -> bool,
{
    let Some(r) = blit_region(surface, image, position) else {
        return;
    };
    for (y, image_y) in (r.y0..r.y1).zip(r.image_y0..) {
        for (x, image_x) in (r.x0..r.x1).zip(r.image_x0..) {
            let px = image.pixel(image_x, image_y);
            if keep(px) {
                surface.set_pixel_srgb(x, y, px.rgb());
            }
        }
    }
}

/// Blit centered on `position`, skipping pixels with alpha below 128
pub fn blit_masked(surface: &mut Surface, image: &ImageRgba, position: Vec2) {
    blit_with(surface, image, position, |px| px.a >= 128);
}

/// Blit centered on `position`, writing every pixel opaque
pub fn blit_solid(surface: &mut Surface, image: &ImageRgba, position: Vec2) {
    blit_with(surface, image, position, |_| true);
}

/// Blit centered on `position` by copying whole rows of bytes.
/// Alpha is copied as stored in the image.
pub fn blit_memcpy(surface: &mut Surface, image: &ImageRgba, position: Vec2) {
    let Some(r) = blit_region(surface, image, position) else {
        return;
    };
    let surface_stride = surface.stride();
    let image_stride = image.width as usize * 4;
    let row_bytes = (r.x1 - r.x0) as usize * 4;
    let dst = surface.as_bytes_mut();

    for (y, image_y) in (r.y0..r.y1).zip(r.image_y0..) {
        let d = y as usize * surface_stride + r.x0 as usize * 4;
        let s = image_y as usize * image_stride + r.image_x0 as usize * 4;
        dst[d..d + row_bytes].copy_from_slice(&image.pixels[s..s + row_bytes]);
    }
}
