//! Scene descriptions: a surface size plus an ordered list of shapes
//!
//! Scenes are stored as RON so they can be written by hand and rendered
//! either headless (PNG) or in the viewer.

mod io;

pub use io::*;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::rasterizer::{
    blit_masked, blit_memcpy, blit_solid, draw_line, draw_polyline, draw_rectangle_outline,
    draw_rectangle_solid, draw_triangle_interpolated, draw_triangle_solid,
    draw_triangle_wireframe, Color, ColorF, ImageRgba, Rect, Surface, Vec2,
};
use crate::{Error, Result};

/// How an image shape is copied onto the surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlitMode {
    /// Skip pixels with alpha below 128
    #[default]
    Masked,
    /// Write every pixel
    Solid,
    /// Copy rows of raw bytes, alpha included
    Copy,
}

/// One drawable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line {
        begin: Vec2,
        end: Vec2,
        color: Color,
    },
    Polyline {
        points: Vec<Vec2>,
        color: Color,
    },
    /// Interpolated fill, colors in linear space
    Triangle {
        points: [Vec2; 3],
        colors: [ColorF; 3],
    },
    SolidTriangle {
        points: [Vec2; 3],
        color: Color,
    },
    Wireframe {
        points: [Vec2; 3],
        color: Color,
    },
    Rectangle {
        min: Vec2,
        max: Vec2,
        color: Color,
        #[serde(default)]
        filled: bool,
    },
    /// Image file centered on `position`; relative paths resolve against the
    /// scene's directory
    Image {
        path: PathBuf,
        position: Vec2,
        #[serde(default)]
        mode: BlitMode,
    },
}

/// A renderable scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub clear: Color,
    /// Clip rectangle; the whole surface when absent
    #[serde(default)]
    pub clip: Option<Rect>,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            clear: Color::BLACK,
            clip: None,
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    /// Render onto a fresh surface
    pub fn render(&self, base_dir: &Path) -> Result<Surface> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::EmptySurface {
                width: self.width,
                height: self.height,
            });
        }
        let mut surface = Surface::new(self.width, self.height);
        self.draw(&mut surface, base_dir)?;
        Ok(surface)
    }

    /// Clear `surface` and draw every shape in order.
    /// Only image shapes can fail (decode or IO errors).
    pub fn draw(&self, surface: &mut Surface, base_dir: &Path) -> Result<()> {
        surface.fill(self.clear);
        match self.clip {
            Some(clip) if clip.width > 0.0 && clip.height > 0.0 => surface.set_clip_area(clip),
            Some(clip) => {
                log::warn!("ignoring empty clip rectangle {:?}", clip);
                surface.reset_clip_area();
            }
            None => surface.reset_clip_area(),
        }

        for shape in &self.shapes {
            match shape {
                Shape::Line { begin, end, color } => draw_line(surface, *begin, *end, *color),
                Shape::Polyline { points, color } => draw_polyline(surface, points, *color),
                Shape::Triangle { points: [p0, p1, p2], colors: [c0, c1, c2] } => {
                    draw_triangle_interpolated(surface, *p0, *p1, *p2, *c0, *c1, *c2)
                }
                Shape::SolidTriangle { points: [p0, p1, p2], color } => {
                    draw_triangle_solid(surface, *p0, *p1, *p2, *color)
                }
                Shape::Wireframe { points: [p0, p1, p2], color } => {
                    draw_triangle_wireframe(surface, *p0, *p1, *p2, *color)
                }
                Shape::Rectangle { min, max, color, filled } => {
                    if *filled {
                        draw_rectangle_solid(surface, *min, *max, *color)
                    } else {
                        draw_rectangle_outline(surface, *min, *max, *color)
                    }
                }
                Shape::Image { path, position, mode } => {
                    let image = ImageRgba::load(base_dir.join(path))?;
                    match mode {
                        BlitMode::Masked => blit_masked(surface, &image, *position),
                        BlitMode::Solid => blit_solid(surface, &image, *position),
                        BlitMode::Copy => blit_memcpy(surface, &image, *position),
                    }
                }
            }
        }

        log::debug!("drew {} shapes on {}x{}", self.shapes.len(), self.width, self.height);
        Ok(())
    }

    /// Built-in showcase: a line fan, a clipped polyline, interpolated
    /// triangles and a clip-rectangle frame
    pub fn demo(width: u32, height: u32) -> Self {
        let w = width as f32;
        let h = height as f32;
        let center = Vec2::new(w * 0.5, h * 0.5);
        let mut scene = Scene::new(width, height);
        scene.clear = Color::new(30, 30, 35);

        // Spokes that run well past the edges to exercise clipping
        let spokes = 24;
        for i in 0..spokes {
            let angle = i as f32 / spokes as f32 * std::f32::consts::TAU;
            let reach = w.max(h);
            let end = center + Vec2::new(angle.cos(), angle.sin()) * reach;
            let shade = (64 + (i * 191) / spokes) as u8;
            scene.push(Shape::Line {
                begin: center,
                end,
                color: Color::new(shade, shade, 255),
            });
        }

        scene.push(Shape::Triangle {
            points: [
                Vec2::new(w * 0.1, h * 0.8),
                Vec2::new(w * 0.45, h * 0.1),
                Vec2::new(w * 0.5, h * 0.9),
            ],
            colors: [ColorF::RED, ColorF::GREEN, ColorF::BLUE],
        });
        // Straddles the right edge
        scene.push(Shape::Triangle {
            points: [
                Vec2::new(w * 0.6, h * 0.2),
                Vec2::new(w * 1.3, h * 0.5),
                Vec2::new(w * 0.7, h * 0.95),
            ],
            colors: [ColorF::new(1.0, 1.0, 0.0), ColorF::new(0.0, 1.0, 1.0), ColorF::new(1.0, 0.0, 1.0)],
        });

        let zigzag = (0..=16)
            .map(|i| {
                let x = -w * 0.1 + i as f32 * w * 0.075;
                let y = if i % 2 == 0 { h * 0.05 } else { h * 0.15 };
                Vec2::new(x, y)
            })
            .collect();
        scene.push(Shape::Polyline { points: zigzag, color: Color::WHITE });

        scene.push(Shape::Wireframe {
            points: [
                Vec2::new(w * 0.6, h * 0.2),
                Vec2::new(w * 1.3, h * 0.5),
                Vec2::new(w * 0.7, h * 0.95),
            ],
            color: Color::WHITE,
        });
        scene.push(Shape::Rectangle {
            min: Vec2::new(2.0, 2.0),
            max: Vec2::new(w - 3.0, h - 3.0),
            color: Color::new(255, 200, 0),
            filled: false,
        });
        scene
    }
}
