//! Triangle fill scenarios on a 320x240 surface

mod common;

use common::*;
use draw2d::rasterizer::{draw_triangle_interpolated, Color, ColorF, Rect, Surface, Vec2};

const RED: ColorF = ColorF::RED;

fn surface() -> Surface {
    Surface::new(320, 240)
}

fn fill(surface: &mut Surface, p: [(f32, f32); 3], c: [ColorF; 3]) {
    draw_triangle_interpolated(
        surface,
        Vec2::new(p[0].0, p[0].1),
        Vec2::new(p[1].0, p[1].1),
        Vec2::new(p[2].0, p[2].1),
        c[0],
        c[1],
        c[2],
    );
}

fn reddest_and_palest(surface: &Surface) -> (Color, Color) {
    let lit: Vec<Color> = lit_pixels(surface)
        .into_iter()
        .map(|(x, y)| surface.pixel(x, y))
        .collect();
    let max = *lit.iter().max_by_key(|c| c.r).unwrap();
    let min = *lit.iter().min_by_key(|c| c.r).unwrap();
    (max, min)
}

#[test_log::test]
fn clockwise_and_counter_clockwise_match() {
    let mut cw = surface();
    let mut ccw = surface();
    fill(&mut cw, [(60.0, 200.0), (280.0, 40.0), (300.0, 220.0)], [RED; 3]);
    fill(&mut ccw, [(60.0, 200.0), (300.0, 220.0), (280.0, 40.0)], [RED; 3]);
    assert!(!lit_pixels(&cw).is_empty());
    assert!(cw.as_bytes() == ccw.as_bytes());
}

#[test]
fn winding_does_not_change_interpolated_colors() {
    let p = [(12.25, 220.5), (300.75, 18.0), (160.0, 230.125)];
    let c = [ColorF::RED, ColorF::GREEN, ColorF::BLUE];
    let mut a = surface();
    let mut b = surface();
    fill(&mut a, p, c);
    fill(&mut b, [p[0], p[2], p[1]], [c[0], c[2], c[1]]);
    assert!(a.as_bytes() == b.as_bytes());
}

#[test]
fn one_vertex_inside_two_outside() {
    let mut s = surface();
    fill(&mut s, [(160.0, 120.0), (-100.0, 200.0), (400.0, 300.0)], [RED; 3]);
    let (max, min) = reddest_and_palest(&s);
    assert_eq!(max, Color::RED);
    assert_eq!(min, Color::RED);
}

#[test]
fn two_vertices_inside_one_outside() {
    let mut s = surface();
    fill(&mut s, [(80.0, 60.0), (240.0, 180.0), (400.0, 300.0)], [RED; 3]);
    // Collinear: nothing to draw
    assert!(lit_pixels(&s).is_empty());

    fill(&mut s, [(80.0, 60.0), (240.0, 100.0), (400.0, 300.0)], [RED; 3]);
    let (max, min) = reddest_and_palest(&s);
    assert_eq!(max, Color::RED);
    assert_eq!(min, Color::RED);
}

#[test]
fn degenerate_triangles_draw_nothing() {
    let mut s = surface();
    fill(&mut s, [(10.0, 10.0), (10.0, 10.0), (50.0, 80.0)], [RED; 3]);
    fill(&mut s, [(10.0, 10.0), (20.0, 20.0), (30.0, 30.0)], [RED; 3]);
    fill(&mut s, [(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)], [RED; 3]);
    assert!(lit_pixels(&s).is_empty());
}

#[test]
fn triangle_off_surface_draws_nothing() {
    let mut s = surface();
    fill(&mut s, [(-50.0, -50.0), (-10.0, -60.0), (-30.0, -5.0)], [RED; 3]);
    fill(&mut s, [(330.0, 10.0), (400.0, 10.0), (350.0, 90.0)], [RED; 3]);
    assert!(lit_pixels(&s).is_empty());
}

#[test]
fn straddling_triangle_stays_in_clip_rect() {
    let mut s = surface();
    s.set_clip_area(Rect::new(40.0, 30.0, 200.0, 150.0));
    fill(&mut s, [(0.0, 0.0), (319.0, 20.0), (100.0, 239.0)], [RED; 3]);
    let pixels = lit_pixels(&s);
    assert!(!pixels.is_empty());
    assert!(pixels
        .iter()
        .all(|&(x, y)| (40..240).contains(&x) && (30..180).contains(&y)));
    // The clip corner near the top-left vertex is covered
    assert!(s.is_lit(40, 30));
}

#[test]
fn huge_triangle_covers_whole_surface() {
    let mut s = surface();
    fill(&mut s, [(-1000.0, -1000.0), (5000.0, -1000.0), (-1000.0, 5000.0)], [RED; 3]);
    assert_eq!(lit_pixels(&s).len(), 320 * 240);
}

#[test]
fn interpolation_reaches_each_vertex_color() {
    let mut s = surface();
    fill(
        &mut s,
        [(0.0, 0.0), (320.0, 0.0), (0.0, 240.0)],
        [ColorF::RED, ColorF::GREEN, ColorF::BLUE],
    );
    let corner = s.pixel(0, 0);
    assert!(corner.r > 250 && corner.g < 60 && corner.b < 60, "{:?}", corner);
    // Midpoint of the red-green edge is an even linear mix
    let mid = s.pixel(159, 0);
    assert!(mid.r.abs_diff(mid.g) < 8, "{:?}", mid);
    assert!(mid.r > 180, "linear 0.5 encodes bright in sRGB: {:?}", mid);
}

#[test]
fn adjacent_triangles_leave_no_gap() {
    let mut s = surface();
    let (a, b, c, d) = ((20.0, 20.0), (300.0, 30.0), (280.0, 220.0), (30.0, 200.0));
    fill(&mut s, [a, b, c], [RED; 3]);
    fill(&mut s, [a, c, d], [RED; 3]);
    // Every pixel center on the shared diagonal belongs to the quad
    for x in 30..270 {
        let t = (x as f32 + 0.5 - 20.0) / 260.0;
        let y = (20.0 + t * 200.0 - 0.5).round() as u32;
        assert!(s.is_lit(x, y), "gap at ({}, {})", x, y);
    }
}
