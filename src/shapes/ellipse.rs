//! Axis-aligned ellipses inscribed in a rectangle.
//!
//! Pixels are tested with the implicit ellipse equation on doubled offsets
//! from the centre, so every computation stays in integers. The centre
//! row(s) and column(s) are always inside, which makes the ellipse touch all
//! four sides of its rectangle.

use std::collections::HashSet;
use std::fmt;

use super::{fill_label, Points, Shape, Transform};
use crate::error::Result;
use crate::geometry::{IntRect, IntVector2, ReflectionAxis, RotationAngle};

/// An ellipse filling the given rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ellipse {
    rect: IntRect,
    filled: bool,
}

impl Ellipse {
    pub fn new(a: IntVector2, b: IntVector2, filled: bool) -> Self {
        Self::from_rect(IntRect::new(a, b), filled)
    }

    pub fn from_rect(rect: IntRect, filled: bool) -> Self {
        Self { rect, filled }
    }

    pub fn rect(&self) -> IntRect {
        self.rect
    }

    pub fn with_filled(&self, filled: bool) -> Self {
        Self { filled, ..*self }
    }

    /// True if `p` lies in the solid ellipse.
    pub fn is_inside(&self, p: IntVector2) -> bool {
        if !self.rect.contains(p) {
            return false;
        }
        let (w, h) = (i64::from(self.rect.width()), i64::from(self.rect.height()));
        if w <= 2 || h <= 2 {
            return true;
        }
        let offset = p * 2 - self.rect.center2();
        let (dx, dy) = (i64::from(offset.x), i64::from(offset.y));
        if w == 3 && h == 3 {
            // A plus rather than a solid square.
            return dx == 0 || dy == 0;
        }
        // The equation alone drops the tips of the two centre rows once an
        // even height h is outgrown by a width w with w * w > h * h * (2w - 1),
        // about 2h^2 (32 for h = 4). Transposed for the centre columns.
        if dx.abs() <= 1 || dy.abs() <= 1 {
            return true;
        }
        dx * dx * h * h + dy * dy * w * w <= w * w * h * h
    }

    /// True if `p` is inside but has a 4-neighbour outside.
    pub fn is_border(&self, p: IntVector2) -> bool {
        self.is_inside(p)
            && [
                IntVector2::UP,
                IntVector2::RIGHT,
                IntVector2::DOWN,
                IntVector2::LEFT,
            ]
            .iter()
            .any(|&d| !self.is_inside(p + d))
    }

    fn border_walk(&self) -> BorderWalk<'_> {
        BorderWalk::new(self)
    }
}

/// Walks the border clockwise from the leftmost pixel of the bottom row.
///
/// At each pixel it probes 45 degrees anticlockwise of its heading, straight
/// ahead, then 45 degrees clockwise, turning 90 degrees clockwise when all
/// three fail. It never steps straight back except to leave a one-pixel-wide
/// dead end, and yields each pixel the first time it is reached.
struct BorderWalk<'a> {
    ellipse: &'a Ellipse,
    start: IntVector2,
    current: IntVector2,
    previous: Option<IntVector2>,
    heading: usize,
    seen: HashSet<IntVector2>,
    steps: usize,
    max_steps: usize,
    started: bool,
    done: bool,
}

impl<'a> BorderWalk<'a> {
    fn new(ellipse: &'a Ellipse) -> Self {
        let rect = ellipse.rect;
        // The centre column is always inside, so the bottom row is never empty.
        let start = rect
            .x_range()
            .map(|x| IntVector2::new(x, rect.min_y()))
            .find(|&p| ellipse.is_inside(p))
            .unwrap_or(rect.bottom_left());
        let max_steps = 4 * (rect.width() + rect.height()) as usize + 8;
        Self {
            ellipse,
            start,
            current: start,
            previous: None,
            heading: 6,
            seen: HashSet::new(),
            steps: 0,
            max_steps,
            started: false,
            done: false,
        }
    }

    /// Next border pixel in the walk, or `None` if boxed in on every side.
    fn probe(&mut self) -> Option<IntVector2> {
        for _ in 0..4 {
            for turn in [7, 0, 1] {
                let heading = (self.heading + turn) % 8;
                let q = self.current + IntVector2::KING_MOVES[heading];
                if Some(q) != self.previous && self.ellipse.is_border(q) {
                    self.heading = heading;
                    return Some(q);
                }
            }
            self.heading = (self.heading + 2) % 8;
        }
        None
    }
}

impl Iterator for BorderWalk<'_> {
    type Item = IntVector2;

    fn next(&mut self) -> Option<IntVector2> {
        if !self.started {
            self.started = true;
            self.seen.insert(self.start);
            return Some(self.start);
        }
        while !self.done {
            let next = match (self.probe(), self.previous) {
                (Some(q), _) => q,
                (None, Some(back)) => {
                    // Dead end: retreat the way we came.
                    let retreat = back - self.current;
                    if let Some(heading) =
                        IntVector2::KING_MOVES.iter().position(|&m| m == retreat)
                    {
                        self.heading = heading;
                    }
                    back
                }
                (None, None) => {
                    self.done = true;
                    break;
                }
            };
            self.previous = Some(self.current);
            self.current = next;
            if next == self.start {
                tracing::trace!(steps = self.steps, rect = %self.ellipse.rect, "ellipse border walk closed");
                self.done = true;
                break;
            }
            self.steps += 1;
            assert!(
                self.steps <= self.max_steps,
                "ellipse border walk exceeded {} steps in {}",
                self.max_steps,
                self.ellipse.rect
            );
            if self.seen.insert(next) {
                return Some(next);
            }
        }
        None
    }
}

impl Shape for Ellipse {
    fn bounding_rect(&self) -> IntRect {
        self.rect
    }

    fn is_filled(&self) -> bool {
        self.filled
    }

    fn contains(&self, p: IntVector2) -> bool {
        if self.filled {
            self.is_inside(p)
        } else {
            self.is_border(p)
        }
    }

    fn points(&self) -> Points<'_> {
        if self.filled {
            Box::new(self.rect.points().filter(move |&p| self.is_inside(p)))
        } else {
            Box::new(self.border_walk())
        }
    }
}

impl Transform for Ellipse {
    fn translate(&self, offset: IntVector2) -> Self {
        Self::from_rect(self.rect.translate(offset), self.filled)
    }

    fn rotate(&self, angle: RotationAngle) -> Result<Self> {
        Ok(Self::from_rect(self.rect.rotate(angle), self.filled))
    }

    fn reflect(&self, axis: ReflectionAxis) -> Result<Self> {
        Ok(Self::from_rect(self.rect.reflect(axis), self.filled))
    }
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ellipse {}, {}", self.rect, fill_label(self.filled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i32, y: i32) -> IntVector2 {
        IntVector2::new(x, y)
    }

    fn sized(w: i32, h: i32, filled: bool) -> Ellipse {
        Ellipse::from_rect(IntRect::from_size(IntVector2::ZERO, w, h), filled)
    }

    #[test]
    fn test_small_ellipses_fill_their_rect() {
        let e = sized(2, 5, true);
        assert_eq!(e.points().count(), 10);
        let e = sized(6, 1, false);
        assert_eq!(e.points().count(), 6);
    }

    #[test]
    fn test_three_by_three_is_a_plus() {
        let e = sized(3, 3, true);
        let points: HashSet<_> = e.points().collect();
        let plus: HashSet<_> = [v(1, 0), v(0, 1), v(1, 1), v(2, 1), v(1, 2)].into();
        assert_eq!(points, plus);
        assert_eq!(sized(3, 3, false).points().count(), 4);
    }

    #[test]
    fn test_walk_visits_every_border_pixel_once() {
        for w in 1..30 {
            for h in 1..30 {
                let e = sized(w, h, false);
                let walked: Vec<_> = e.points().collect();
                let unique: HashSet<_> = walked.iter().copied().collect();
                assert_eq!(walked.len(), unique.len(), "duplicates in {w}x{h}");
                let border: HashSet<_> = e.rect.points().filter(|&p| e.is_border(p)).collect();
                assert_eq!(unique, border, "border mismatch in {w}x{h}");
            }
        }
    }

    #[test]
    fn test_walk_starts_bottom_left_and_goes_clockwise() {
        let e = sized(7, 5, false);
        let points: Vec<_> = e.points().take(3).collect();
        assert_eq!(points, vec![v(1, 0), v(0, 1), v(0, 2)]);
    }

    #[test]
    fn test_thin_ellipse_with_dead_ends() {
        let e = sized(3, 12, false);
        let points: Vec<_> = e.points().collect();
        assert_eq!(points.len(), 20);
    }

    #[test]
    fn test_touches_every_side() {
        for (w, h) in [(4, 9), (10, 6), (12, 3), (5, 5)] {
            let e = sized(w, h, true);
            let bounds = IntRect::bounding_points(e.points()).unwrap();
            assert_eq!(bounds, e.rect, "{w}x{h}");
        }
    }

    #[test]
    fn test_long_flat_ellipse_keeps_its_tips() {
        // 39^2 * 4^2 + 40^2 > 40^2 * 4^2, so only the centre-row rule keeps these.
        let e = sized(40, 4, true);
        for p in [v(0, 1), v(0, 2), v(39, 1), v(39, 2)] {
            assert!(e.contains(p), "{p}");
        }
        assert!(!e.contains(v(0, 0)));
        let tall = sized(4, 40, false);
        assert!(tall.contains(v(1, 0)) && tall.contains(v(2, 39)));
    }

    #[test]
    fn test_filled_contains_center_not_corners() {
        let e = sized(9, 7, true);
        assert!(e.contains(v(4, 3)));
        assert!(!e.contains(v(0, 0)));
        assert!(!e.contains(v(8, 6)));
        let outline = e.with_filled(false);
        assert!(!outline.contains(v(4, 3)));
    }
}
