//! Minimal 2D software rasterizer
//!
//! Features:
//! - Cohen–Sutherland line clipping against a clip rectangle
//! - Bresenham lines, identical in both directions
//! - Barycentric triangle fill with linear color interpolation
//! - Image blitting (masked, solid, row copy)

mod blit;
mod clip;
mod line;
mod math;
mod shapes;
mod surface;
mod triangle;
mod types;

pub use blit::*;
pub use clip::*;
pub use line::*;
pub use math::*;
pub use shapes::*;
pub use surface::*;
pub use triangle::*;
pub use types::*;
