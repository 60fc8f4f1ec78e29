//! Line drawing: clipping front-ends and the Bresenham rasterizer

use super::clip::{clip_segment, Segment};
use super::math::Vec2;
use super::surface::{in_bounds, Surface};
use super::types::{Color, Rect};

/// Round a coordinate to its pixel index (half away from zero)
#[inline]
pub fn to_pixel(v: f32) -> i64 {
    v.round() as i64
}

/// Draw a line clipped to the surface's clip area
pub fn draw_line(surface: &mut Surface, begin: Vec2, end: Vec2, color: Color) {
    let clip = surface.clip_area();
    draw_line_in_rect(surface, &clip, begin, end, color);
}

/// Draw a line clipped to an explicit rectangle
pub fn draw_line_in_rect(surface: &mut Surface, rect: &Rect, begin: Vec2, end: Vec2, color: Color) {
    let Some(rect) = rect.snapped() else {
        log::debug!("clip rectangle {:?} holds no whole pixel", rect);
        return;
    };
    // Clip in canonical order so A->B and B->A see identical arithmetic
    let segment = Segment::new(begin, end).canonical();
    match clip_segment(&rect, segment) {
        Some(visible) => draw_clipped_line(surface, visible.begin, visible.end, color),
        None => log::debug!("line {:?} -> {:?} clipped away", begin, end),
    }
}

/// Rasterize a segment that has already been clipped.
///
/// Endpoints are rounded to pixels and walked with Bresenham's error
/// accumulator along the major axis. Both endpoint pixels are always lit.
/// Pixels that fall outside the surface are skipped.
pub fn draw_clipped_line(surface: &mut Surface, begin: Vec2, end: Vec2, color: Color) {
    let (width, height) = (surface.width(), surface.height());
    let mut plot = |x: i64, y: i64| {
        if in_bounds(x, y, width, height) {
            surface.set_pixel_srgb(x as u32, y as u32, color);
        }
    };

    let mut p0 = (to_pixel(begin.x), to_pixel(begin.y));
    let mut p1 = (to_pixel(end.x), to_pixel(end.y));
    if p0 > p1 {
        std::mem::swap(&mut p0, &mut p1);
    }
    let (mut x, mut y) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };

    plot(x, y);

    if dx >= dy {
        let mut err = dx / 2;
        while x != x1 {
            x += sx;
            err -= dy;
            if err < 0 {
                y += sy;
                err += dx;
            }
            plot(x, y);
        }
    } else {
        let mut err = dy / 2;
        while y != y1 {
            y += sy;
            err -= dx;
            if err < 0 {
                x += sx;
                err += dy;
            }
            plot(x, y);
        }
    }
}

/// Draw consecutive segments through `points`
pub fn draw_polyline(surface: &mut Surface, points: &[Vec2], color: Color) {
    for pair in points.windows(2) {
        draw_line(surface, pair[0], pair[1], color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(surface: &Surface) -> Vec<(u32, u32)> {
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

    #[test]
    fn test_to_pixel_rounds_half_away_from_zero() {
        assert_eq!(to_pixel(2.5), 3);
        assert_eq!(to_pixel(2.49), 2);
        assert_eq!(to_pixel(-2.5), -3);
        assert_eq!(to_pixel(-0.4), 0);
    }

    #[test]
    fn test_single_pixel() {
        let mut s = Surface::new(8, 8);
        draw_line(&mut s, Vec2::new(3.0, 4.0), Vec2::new(3.0, 4.0), Color::WHITE);
        assert_eq!(lit(&s), vec![(3, 4)]);
    }

    #[test]
    fn test_short_shallow_line() {
        let mut s = Surface::new(8, 8);
        draw_line(&mut s, Vec2::new(0.0, 0.0), Vec2::new(4.0, 2.0), Color::WHITE);
        assert_eq!(lit(&s), vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
    }

    #[test]
    fn test_short_steep_line_reversed() {
        let mut a = Surface::new(8, 8);
        let mut b = Surface::new(8, 8);
        draw_line(&mut a, Vec2::new(1.0, 0.0), Vec2::new(3.0, 5.0), Color::WHITE);
        draw_line(&mut b, Vec2::new(3.0, 5.0), Vec2::new(1.0, 0.0), Color::WHITE);
        assert_eq!(a, b);
        assert_eq!(lit(&a).len(), 6);
    }

    #[test]
    fn test_clipped_line_stays_inside_rect() {
        let mut s = Surface::new(32, 32);
        let rect = Rect::new(8.0, 8.0, 8.0, 8.0);
        draw_line_in_rect(&mut s, &rect, Vec2::new(0.0, 12.0), Vec2::new(31.0, 12.0), Color::WHITE);
        let pixels = lit(&s);
        assert_eq!(pixels.len(), 8);
        assert!(pixels.iter().all(|&(x, y)| (8..16).contains(&x) && y == 12));
    }

    #[test]
    fn test_fractional_rect_matches_triangle_bounds() {
        let rect = Rect::new(10.0, 10.0, 10.6, 10.0);
        let mut s = Surface::new(32, 32);
        draw_line_in_rect(&mut s, &rect, Vec2::new(0.0, 15.0), Vec2::new(31.0, 15.0), Color::WHITE);
        let xs: Vec<u32> = lit(&s).iter().map(|&(x, _)| x).collect();
        assert_eq!(xs, (10..=19).collect::<Vec<_>>());

        let mut t = Surface::new(32, 32);
        t.set_clip_area(rect);
        crate::rasterizer::draw_triangle_solid(
            &mut t,
            Vec2::new(0.0, 0.0),
            Vec2::new(64.0, 0.0),
            Vec2::new(0.0, 64.0),
            Color::WHITE,
        );
        let tx = lit(&t).iter().map(|&(x, _)| x).max();
        assert_eq!(tx, xs.last().copied());
    }

    #[test]
    fn test_rejected_line_draws_nothing() {
        let mut s = Surface::new(16, 16);
        draw_line(&mut s, Vec2::new(-20.0, -5.0), Vec2::new(-1.0, 30.0), Color::WHITE);
        assert!(lit(&s).is_empty());
    }

    #[test]
    fn test_unclipped_rasterizer_skips_offsurface_pixels() {
        let mut s = Surface::new(4, 4);
        draw_clipped_line(&mut s, Vec2::new(-3.0, 1.0), Vec2::new(6.0, 1.0), Color::WHITE);
        assert_eq!(lit(&s), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_polyline_shares_joints() {
        let mut s = Surface::new(16, 16);
        let pts = [Vec2::new(1.0, 1.0), Vec2::new(8.0, 1.0), Vec2::new(8.0, 9.0)];
        draw_polyline(&mut s, &pts, Color::WHITE);
        assert!(s.is_lit(8, 1));
        assert_eq!(lit(&s).len(), 8 + 8);
    }
}
