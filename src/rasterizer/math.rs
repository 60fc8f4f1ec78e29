//! 2D vector math for the rasterizer
//!
//! Everything here is pure: vectors, the 2D cross product, signed area and
//! barycentric coordinates.

use std::ops::{Add, Mul, Neg, Sub};
use serde::{Serialize, Deserialize};

/// 2D vector / point in surface pixel space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 2D cross product (z component of the 3D cross product)
    pub fn cross(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    pub fn scale(self, s: f32) -> Vec2 {
        Vec2 {
            x: self.x * s,
            y: self.y * s,
        }
    }

    /// Total order on (x, y), used to put endpoints and vertices in a
    /// canonical order before any arithmetic happens on them.
    pub fn lexicographic_cmp(&self, other: &Vec2) -> std::cmp::Ordering {
        self.x.total_cmp(&other.x).then(self.y.total_cmp(&other.y))
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        self.scale(s)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2 { x: -self.x, y: -self.y }
    }
}

/// Free-function form of [`Vec2::cross`]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.cross(b)
}

/// Twice the signed area of triangle (a, b, c).
/// Positive for one winding, negative for the other, zero when collinear.
pub fn signed_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).cross(c - a)
}

/// Barycentric weights of a point relative to a triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Barycentric {
    /// Inside or on the boundary: all three weights non-negative
    pub fn is_inside(&self) -> bool {
        self.alpha >= 0.0 && self.beta >= 0.0 && self.gamma >= 0.0
    }

    /// Weighted sum of three per-vertex values
    pub fn blend(&self, a: f32, b: f32, c: f32) -> f32 {
        self.alpha * a + self.beta * b + self.gamma * c
    }
}

/// Barycentric coordinates of `p` in triangle (a, b, c).
/// Returns `None` for a degenerate (zero-area) triangle.
pub fn barycentric(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> Option<Barycentric> {
    let area = signed_area(a, b, c);
    if area == 0.0 || !area.is_finite() {
        return None;
    }
    Some(barycentric_with_area(p, a, b, c, area))
}

/// Same as [`barycentric`] with the signed area already known.
///
/// Each weight is a sub-triangle area divided by the (possibly negative)
/// full area, so the signs come out right for either winding.
pub(crate) fn barycentric_with_area(p: Vec2, a: Vec2, b: Vec2, c: Vec2, area: f32) -> Barycentric {
    let area_pbc = (b - p).cross(c - p);
    let area_pca = (c - p).cross(a - p);
    let area_pab = (a - p).cross(b - p);
    Barycentric {
        alpha: area_pbc / area,
        beta: area_pca / area,
        gamma: area_pab / area,
    }
}

/// Point-in-triangle test (boundary counts as inside)
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    barycentric(p, a, b, c).is_some_and(|bc| bc.is_inside())
}
