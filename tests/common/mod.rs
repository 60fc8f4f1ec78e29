//! Pixel-counting helpers shared by the scenario tests

#![allow(dead_code)]

use draw2d::rasterizer::Surface;

pub fn is_lit(surface: &Surface, x: i64, y: i64) -> bool {
    surface.contains(x, y) && surface.is_lit(x as u32, y as u32)
}

pub fn lit_pixels(surface: &Surface) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            if surface.is_lit(x, y) {
                out.push((x, y));
            }
        }
    }
    out
}

/// Largest number of lit pixels in any single row
pub fn max_row_pixel_count(surface: &Surface) -> usize {
    (0..surface.height())
        .map(|y| (0..surface.width()).filter(|&x| surface.is_lit(x, y)).count())
        .max()
        .unwrap_or(0)
}

/// Largest number of lit pixels in any single column
pub fn max_col_pixel_count(surface: &Surface) -> usize {
    (0..surface.width())
        .map(|x| (0..surface.height()).filter(|&y| surface.is_lit(x, y)).count())
        .max()
        .unwrap_or(0)
}

/// Histogram of lit pixels by number of lit 8-neighbours:
/// `counts[n]` is how many lit pixels have exactly `n` lit neighbours.
pub fn count_pixel_neighbours(surface: &Surface) -> [usize; 9] {
    let mut counts = [0; 9];
    for (x, y) in lit_pixels(surface) {
        let (x, y) = (x as i64, y as i64);
        let mut n = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx, dy) != (0, 0) && is_lit(surface, x + dx, y + dy) {
                    n += 1;
                }
            }
        }
        counts[n] += 1;
    }
    counts
}

/// Asserts the lit pixels form one simple open path: two endpoints with a
/// single neighbour, everything else with exactly two.
pub fn assert_simple_path(surface: &Surface) {
    let counts = count_pixel_neighbours(surface);
    let total: usize = counts.iter().sum();
    if total <= 1 {
        return;
    }
    assert_eq!(counts[0], 0, "isolated pixels: {:?}", counts);
    assert_eq!(counts[1], 2, "expected two endpoints: {:?}", counts);
    assert!(counts[3..].iter().all(|&c| c == 0), "branching pixels: {:?}", counts);
}

/// Asserts every lit pixel can reach every other through 8-neighbours
pub fn assert_connected(surface: &Surface) {
    let pixels = lit_pixels(surface);
    let Some(&start) = pixels.first() else {
        return;
    };
    let mut seen = std::collections::HashSet::new();
    let mut stack = vec![start];
    seen.insert(start);
    while let Some((x, y)) = stack.pop() {
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                if is_lit(surface, nx, ny) && seen.insert((nx as u32, ny as u32)) {
                    stack.push((nx as u32, ny as u32));
                }
            }
        }
    }
    assert_eq!(seen.len(), pixels.len(), "lit pixels are not connected");
}
