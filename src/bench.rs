//! Line drawing benchmark cases
//!
//! Mirrors the three questions worth timing for a line rasterizer: how cost
//! grows with length, whether slope matters, and what clipping costs.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::rasterizer::{draw_line, Color, Surface, Vec2};

/// One line to draw repeatedly
#[derive(Debug, Clone, PartialEq)]
pub struct BenchCase {
    pub name: String,
    pub begin: Vec2,
    pub end: Vec2,
}

impl BenchCase {
    pub fn new(name: impl Into<String>, begin: Vec2, end: Vec2) -> Self {
        Self {
            name: name.into(),
            begin,
            end,
        }
    }
}

/// Result of running one case
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub name: String,
    pub iterations: u32,
    pub total: Duration,
}

impl BenchResult {
    pub fn per_iteration(&self) -> Duration {
        self.total / self.iterations.max(1)
    }
}

/// Length, slope and clipping scenarios for a `width` x `height` surface
pub fn standard_cases(width: u32, height: u32) -> Vec<BenchCase> {
    let origin = Vec2::ZERO;
    let mut cases = Vec::new();

    for len in [50.0, 750.0, 1000.0] {
        cases.push(BenchCase::new(format!("length/{}", len), origin, Vec2::new(len, len)));
    }

    cases.push(BenchCase::new("slope/shallow", origin, Vec2::new(1000.0, 10.0)));
    cases.push(BenchCase::new("slope/steep", origin, Vec2::new(10.0, 1000.0)));
    cases.push(BenchCase::new("slope/diagonal", origin, Vec2::new(500.0, 500.0)));

    // Same length in all three, so only the clipping outcome differs
    let (w, h) = (width as f32, height as f32);
    cases.push(BenchCase::new(
        "clip/outside",
        Vec2::new(-400.0, -300.0),
        Vec2::new(-10.0, -10.0),
    ));
    cases.push(BenchCase::new(
        "clip/partial",
        Vec2::new(-200.0, h * 0.25),
        Vec2::new(190.0, h * 0.25 + 290.0),
    ));
    cases.push(BenchCase::new(
        "clip/inside",
        Vec2::new(w * 0.1, h * 0.1),
        Vec2::new(w * 0.1 + 390.0, h * 0.1 + 290.0),
    ));
    cases
}

/// Draw `case` `iterations` times on `surface` and time it
pub fn run_case(surface: &mut Surface, case: &BenchCase, iterations: u32) -> BenchResult {
    surface.clear();
    let start = Instant::now();
    for _ in 0..iterations {
        draw_line(
            surface,
            black_box(case.begin),
            black_box(case.end),
            Color::WHITE,
        );
        black_box(surface.as_bytes());
    }
    let total = start.elapsed();
    log::debug!("{}: {} iterations in {:?}", case.name, iterations, total);
    BenchResult {
        name: case.name.clone(),
        iterations,
        total,
    }
}
