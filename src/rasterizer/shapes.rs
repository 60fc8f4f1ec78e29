//! Utility shapes built on the line and triangle rasterizers

use super::line::draw_line;
use super::math::Vec2;
use super::surface::Surface;
use super::triangle::BoundingBox;
use super::types::Color;

/// Outline of a triangle (three clipped lines)
pub fn draw_triangle_wireframe(surface: &mut Surface, p0: Vec2, p1: Vec2, p2: Vec2, color: Color) {
    draw_line(surface, p0, p1, color);
    draw_line(surface, p1, p2, color);
    draw_line(surface, p2, p0, color);
}

/// Fill every pixel whose center lies in [min, max)
pub fn draw_rectangle_solid(surface: &mut Surface, min: Vec2, max: Vec2, color: Color) {
    let (lo, hi) = corners(min, max);
    let bbox = BoundingBox {
        xmin: (lo.x - 0.5).ceil() as i64,
        xmax: (hi.x - 0.5).ceil() as i64 - 1,
        ymin: (lo.y - 0.5).ceil() as i64,
        ymax: (hi.y - 0.5).ceil() as i64 - 1,
    }
    .clamped_to(surface);
    if bbox.is_empty() {
        return;
    }

    for y in bbox.ymin..=bbox.ymax {
        for x in bbox.xmin..=bbox.xmax {
            surface.set_pixel_srgb(x as u32, y as u32, color);
        }
    }
}

/// Outline through the four corners
pub fn draw_rectangle_outline(surface: &mut Surface, min: Vec2, max: Vec2, color: Color) {
    let (lo, hi) = corners(min, max);
    let top_right = Vec2::new(hi.x, lo.y);
    let bottom_left = Vec2::new(lo.x, hi.y);
    draw_line(surface, lo, top_right, color);
    draw_line(surface, top_right, hi, color);
    draw_line(surface, hi, bottom_left, color);
    draw_line(surface, bottom_left, lo, color);
}

/// Normalize two opposite corners into (min, max)
fn corners(a: Vec2, b: Vec2) -> (Vec2, Vec2) {
    (
        Vec2::new(a.x.min(b.x), a.y.min(b.y)),
        Vec2::new(a.x.max(b.x), a.y.max(b.y)),
    )
}
