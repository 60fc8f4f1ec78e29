//! Triangle rasterization with barycentric coordinates

use super::math::{barycentric_with_area, signed_area, Barycentric, Vec2};
use super::surface::Surface;
use super::types::{Color, ColorF, Rect};

/// Inclusive integer pixel bounds. Empty when `xmax < xmin` or `ymax < ymin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub xmin: i64,
    pub xmax: i64,
    pub ymin: i64,
    pub ymax: i64,
}

impl BoundingBox {
    /// Pixels whose centers can fall inside the triangle
    pub fn of_triangle(p0: Vec2, p1: Vec2, p2: Vec2) -> Self {
        let xmin = p0.x.min(p1.x).min(p2.x);
        let xmax = p0.x.max(p1.x).max(p2.x);
        let ymin = p0.y.min(p1.y).min(p2.y);
        let ymax = p0.y.max(p1.y).max(p2.y);
        Self {
            xmin: xmin.floor() as i64,
            xmax: (xmax.ceil() as i64).saturating_sub(1),
            ymin: ymin.floor() as i64,
            ymax: (ymax.ceil() as i64).saturating_sub(1),
        }
    }

    /// Pixel bounds of a clip rectangle, matching [`Rect::snapped`]
    pub fn of_rect(rect: &Rect) -> Self {
        Self {
            xmin: rect.x.floor() as i64,
            xmax: ((rect.x + rect.width).floor() as i64).saturating_sub(1),
            ymin: rect.y.floor() as i64,
            ymax: ((rect.y + rect.height).floor() as i64).saturating_sub(1),
        }
    }

    pub fn intersect(&self, other: &BoundingBox) -> Self {
        Self {
            xmin: self.xmin.max(other.xmin),
            xmax: self.xmax.min(other.xmax),
            ymin: self.ymin.max(other.ymin),
            ymax: self.ymax.min(other.ymax),
        }
    }

    /// Restrict to the surface's clip area and to the surface itself
    pub fn clamped_to(&self, surface: &Surface) -> Self {
        let whole = Self {
            xmin: 0,
            xmax: surface.width() as i64 - 1,
            ymin: 0,
            ymax: surface.height() as i64 - 1,
        };
        self.intersect(&Self::of_rect(&surface.clip_area()))
            .intersect(&whole)
    }

    pub fn is_empty(&self) -> bool {
        self.xmax < self.xmin || self.ymax < self.ymin
    }
}

/// Walk the clamped bounding box and call `shade` for every pixel center
/// inside the triangle.
///
/// Vertices are sorted (by y, then x) before any arithmetic, so every
/// ordering of the same three points evaluates the same expressions and
/// lights the same pixels. `shade` also receives the sorted order as
/// indices into `points`, so per-vertex data can follow its vertex.
fn fill_triangle<F>(surface: &mut Surface, points: [Vec2; 3], mut shade: F)
where
    F: FnMut(&Barycentric, [usize; 3]) -> Color,
{
    let mut order = [0usize, 1, 2];
    order.sort_by(|&i, &j| {
        let (a, b) = (points[i], points[j]);
        a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x))
    });
    let [a, b, c] = order.map(|i| points[i]);

    let area = signed_area(a, b, c);
    if area == 0.0 || !area.is_finite() {
        log::debug!("skipping degenerate triangle {:?}", points);
        return;
    }

    let bbox = BoundingBox::of_triangle(a, b, c).clamped_to(surface);
    if bbox.is_empty() {
        return;
    }

    for y in bbox.ymin..=bbox.ymax {
        for x in bbox.xmin..=bbox.xmax {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let bc = barycentric_with_area(p, a, b, c, area);
            if bc.is_inside() {
                let color = shade(&bc, order);
                surface.set_pixel_srgb(x as u32, y as u32, color);
            }
        }
    }
}

/// Fill a triangle, interpolating linear vertex colors and writing sRGB
pub fn draw_triangle_interpolated(
    surface: &mut Surface,
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    c0: ColorF,
    c1: ColorF,
    c2: ColorF,
) {
    let colors = [c0, c1, c2];
    fill_triangle(surface, [p0, p1, p2], |bc, order| {
        let [ca, cb, cc] = order.map(|i| colors[i]);
        ColorF::interpolate(bc, ca, cb, cc).to_srgb()
    });
}

/// Fill a triangle with one flat color
pub fn draw_triangle_solid(surface: &mut Surface, p0: Vec2, p1: Vec2, p2: Vec2, color: Color) {
    fill_triangle(surface, [p0, p1, p2], |_, _| color);
}
