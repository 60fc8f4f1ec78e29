//! Core types for the rasterizer: colors and the clip rectangle

use serde::{Serialize, Deserialize};
use super::math::Barycentric;

/// sRGB-encoded color, 8 bits per channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Bytes as stored in a surface (opaque alpha)
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Decode to linear light
    pub fn to_linear(self) -> ColorF {
        ColorF {
            r: srgb_to_linear(self.r),
            g: srgb_to_linear(self.g),
            b: srgb_to_linear(self.b),
        }
    }
}

/// sRGB color with alpha, as read from images
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(self) -> Color {
        Color::new(self.r, self.g, self.b)
    }
}

/// Linear-light color, one float per channel (nominally 0.0-1.0)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorF {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorF {
    pub const BLACK: ColorF = ColorF { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: ColorF = ColorF { r: 1.0, g: 1.0, b: 1.0 };
    pub const RED: ColorF = ColorF { r: 1.0, g: 0.0, b: 0.0 };
    pub const GREEN: ColorF = ColorF { r: 0.0, g: 1.0, b: 0.0 };
    pub const BLUE: ColorF = ColorF { r: 0.0, g: 0.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Barycentric-weighted sum of three vertex colors
    pub fn interpolate(bc: &Barycentric, c0: ColorF, c1: ColorF, c2: ColorF) -> ColorF {
        ColorF {
            r: bc.blend(c0.r, c1.r, c2.r),
            g: bc.blend(c0.g, c1.g, c2.g),
            b: bc.blend(c0.b, c1.b, c2.b),
        }
    }

    /// Encode to 8-bit sRGB (channels are clamped to 0.0-1.0 first)
    pub fn to_srgb(self) -> Color {
        Color {
            r: linear_to_srgb(self.r),
            g: linear_to_srgb(self.g),
            b: linear_to_srgb(self.b),
        }
    }
}

/// sRGB transfer function for one channel
pub fn linear_to_srgb(c: f32) -> u8 {
    // NaN maps to 0
    let c = if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) };
    let encoded = if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    (encoded * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Inverse of [`linear_to_srgb`]
pub fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Axis-aligned clip rectangle.
///
/// Bounds are treated as pixel indices: the last included column is
/// `x + width - 1` and the last included row is `y + height - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Panics if `width` or `height` is not positive.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "clip rectangle must have positive size, got {}x{}",
            width,
            height
        );
        Self { x, y, width, height }
    }

    /// Shrink to whole pixels: columns `floor(x)..floor(x + width)` and the
    /// same for rows. `None` when no whole pixel remains.
    ///
    /// Lines and fills both clip against this, so a fractional rectangle
    /// bounds them identically.
    pub fn snapped(&self) -> Option<Rect> {
        let (x0, y0) = (self.x.floor(), self.y.floor());
        let (x1, y1) = ((self.x + self.width).floor(), (self.y + self.height).floor());
        if x1 > x0 && y1 > y0 {
            Some(Self { x: x0, y: y0, width: x1 - x0, height: y1 - y0 })
        } else {
            None
        }
    }

    /// Rectangle covering a whole `width` x `height` surface
    pub fn of_size(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    pub fn xmin(&self) -> f32 {
        self.x
    }

    pub fn ymin(&self) -> f32 {
        self.y
    }

    /// Last included column
    pub fn xmax(&self) -> f32 {
        self.x + self.width - 1.0
    }

    /// Last included row
    pub fn ymax(&self) -> f32 {
        self.y + self.height - 1.0
    }
}
