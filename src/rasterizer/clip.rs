//! Cohen–Sutherland line clipping against a [`Rect`]

use bitflags::bitflags;

use super::math::Vec2;
use super::types::Rect;

bitflags! {
    /// Which sides of the clip rectangle a point lies beyond
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OutCode: u8 {
        const LEFT   = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const TOP    = 0b1000;
    }
}

impl OutCode {
    pub const INSIDE: OutCode = OutCode::empty();

    /// Classify `p` against the inclusive pixel bounds of `rect`
    pub fn of(p: Vec2, rect: &Rect) -> OutCode {
        let mut code = OutCode::INSIDE;
        if p.x < rect.xmin() {
            code |= OutCode::LEFT;
        } else if p.x > rect.xmax() {
            code |= OutCode::RIGHT;
        }
        if p.y < rect.ymin() {
            code |= OutCode::BOTTOM;
        } else if p.y > rect.ymax() {
            code |= OutCode::TOP;
        }
        code
    }
}

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub begin: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(begin: Vec2, end: Vec2) -> Self {
        Self { begin, end }
    }

    pub fn is_finite(&self) -> bool {
        [self.begin.x, self.begin.y, self.end.x, self.end.y]
            .iter()
            .all(|v| v.is_finite())
    }

    pub fn is_degenerate(&self) -> bool {
        self.begin == self.end
    }

    /// Same segment with endpoints in lexicographic (x, y) order
    pub fn canonical(self) -> Segment {
        if self.begin.lexicographic_cmp(&self.end).is_gt() {
            Segment::new(self.end, self.begin)
        } else {
            self
        }
    }
}

/// Each endpoint crosses at most four boundaries
const MAX_CLIP_STEPS: usize = 8;

/// Clip `segment` to `rect`. Returns `None` when no part of it is visible.
pub fn clip_segment(rect: &Rect, segment: Segment) -> Option<Segment> {
    if !segment.is_finite() {
        log::debug!("rejecting non-finite segment {:?}", segment);
        return None;
    }
    let Segment { mut begin, mut end } = segment;
    let mut code0 = OutCode::of(begin, rect);
    let mut code1 = OutCode::of(end, rect);

    for _ in 0..=MAX_CLIP_STEPS {
        if code0.is_empty() && code1.is_empty() {
            return Some(Segment { begin, end });
        }
        if code0.intersects(code1) {
            return None;
        }

        // First endpoint wins when both are outside
        let code_out = if !code0.is_empty() { code0 } else { code1 };
        let d = end - begin;

        // TOP > BOTTOM > RIGHT > LEFT. The AND test above guarantees the
        // other endpoint is on the far side of the chosen boundary, so the
        // divisor is never zero.
        let p = if code_out.contains(OutCode::TOP) {
            let y = rect.ymax();
            Vec2::new(begin.x + d.x * (y - begin.y) / d.y, y)
        } else if code_out.contains(OutCode::BOTTOM) {
            let y = rect.ymin();
            Vec2::new(begin.x + d.x * (y - begin.y) / d.y, y)
        } else if code_out.contains(OutCode::RIGHT) {
            let x = rect.xmax();
            Vec2::new(x, begin.y + d.y * (x - begin.x) / d.x)
        } else {
            let x = rect.xmin();
            Vec2::new(x, begin.y + d.y * (x - begin.x) / d.x)
        };

        if code_out == code0 {
            begin = p;
            code0 = OutCode::of(begin, rect);
        } else {
            end = p;
            code1 = OutCode::of(end, rect);
        }
    }

    log::debug!(
        "clipping did not converge for {:?} against {:?}, rejecting",
        segment,
        rect
    );
    None
}

/// In-place form of [`clip_segment`].
///
/// Returns true if part of the segment is visible, in which case `begin`
/// and `end` now hold the visible sub-segment. On false they are untouched.
pub fn clip_line(rect: &Rect, begin: &mut Vec2, end: &mut Vec2) -> bool {
    match clip_segment(rect, Segment::new(*begin, *end)) {
        Some(clipped) => {
            *begin = clipped.begin;
            *end = clipped.end;
            true
        }
        None => false,
    }
}
