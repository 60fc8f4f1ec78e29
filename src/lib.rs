//! draw2d: a minimal software rasterizer
//!
//! Draws clipped lines and filled triangles into an in-memory RGBA surface:
//! - Cohen–Sutherland clipping against a rectangular viewport
//! - Bresenham lines that are identical when drawn in either direction
//! - Barycentric triangles with per-vertex linear colors
//!
//! Scenes can be described in RON and rendered headless or in a window.

pub mod bench;
mod error;
pub mod rasterizer;
pub mod scene;

pub use error::{Error, Result};
