//! Diamonds (rhombi) inscribed in a rectangle.
//!
//! The four edges are lines reflected into each quadrant of the rectangle.
//! Neighbouring edges overlap by one block at the left/right (or top/bottom)
//! vertices, so a diamond whose edges are perfect lines keeps equal blocks
//! all the way round.

use std::fmt;

use super::{fill_label, Points, Shape, Transform};
use crate::error::Result;
use crate::geometry::{IntRect, IntVector2, ReflectionAxis, RotationAngle};
use crate::raster::Line;

const UPPER_LEFT: usize = 0;
const UPPER_RIGHT: usize = 1;
const LOWER_RIGHT: usize = 2;
const LOWER_LEFT: usize = 3;

/// A filled or outlined diamond touching the middle of each side of its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Diamond {
    rect: IntRect,
    filled: bool,
    /// Upper-left, upper-right, lower-right, lower-left.
    edges: [Line; 4],
}

impl Diamond {
    pub fn new(a: IntVector2, b: IntVector2, filled: bool) -> Self {
        Self::from_rect(IntRect::new(a, b), filled)
    }

    pub fn from_rect(rect: IntRect, filled: bool) -> Self {
        Self {
            rect,
            filled,
            edges: edges_for(rect),
        }
    }

    pub fn rect(&self) -> IntRect {
        self.rect
    }

    pub fn with_filled(&self, filled: bool) -> Self {
        Self { filled, ..*self }
    }

    /// Upper-left, upper-right, lower-right and lower-left edges.
    pub fn edges(&self) -> &[Line; 4] {
        &self.edges
    }

    /// Horizontal span of the solid diamond in row `y`.
    fn row_span(&self, y: i32) -> Option<(i32, i32)> {
        if !self.rect.y_range().contains(&y) {
            return None;
        }
        let left = [UPPER_LEFT, LOWER_LEFT]
            .iter()
            .filter_map(|&i| self.edges[i].min_x(y).ok())
            .min()?;
        let right = [UPPER_RIGHT, LOWER_RIGHT]
            .iter()
            .filter_map(|&i| self.edges[i].max_x(y).ok())
            .max()?;
        Some((left, right))
    }

    fn outline(&self) -> impl Iterator<Item = IntVector2> + '_ {
        self.edges.iter().enumerate().flat_map(move |(k, edge)| {
            let earlier = &self.edges[..k];
            edge.iter()
                .filter(move |&p| !earlier.iter().any(|e| e.contains(p)))
        })
    }

    fn solid(&self) -> impl Iterator<Item = IntVector2> + '_ {
        self.rect.y_range().flat_map(move |y| {
            let (left, right) = self.row_span(y).unwrap_or((1, 0));
            (left..=right).map(move |x| IntVector2::new(x, y))
        })
    }
}

/// Length of the final block of a shallow line `major` pixels wide and `minor` tall.
fn final_block_len(major: i32, minor: i32) -> i32 {
    let line = Line::new(IntVector2::ZERO, IntVector2::new(major - 1, minor - 1));
    line.index_range_at_y(minor - 1)
        .map_or(major, |range| range.count() as i32)
}

/// Pixel extents of one edge: `(width, height)`.
///
/// The short axis gets half the rectangle. The long axis gets the shortest
/// extent whose two mirrored edges, overlapping by their final block, span the
/// rectangle exactly.
fn edge_extents(width: i32, height: i32) -> (i32, i32) {
    let fit = |long: i32, short: i32| {
        let half = (short + 1) / 2;
        let extent = ((long + 1) / 2..=long)
            .find(|&e| 2 * e - final_block_len(e, half) == long)
            .unwrap_or((long + 1) / 2);
        (extent, half)
    };
    if width >= height {
        fit(width, height)
    } else {
        let (eh, ew) = fit(height, width);
        (ew, eh)
    }
}

fn edges_for(rect: IntRect) -> [Line; 4] {
    let (width, height) = (rect.width(), rect.height());
    let (ew, eh) = edge_extents(width, height);
    tracing::debug!(%rect, edge_width = ew, edge_height = eh, "diamond edge extents");

    let (x0, y0, x1, y1) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());
    let v = IntVector2::new;
    let left_low = v(x0, y0 + eh - 1);
    let left_high = v(x0, y1 - eh + 1);
    let right_low = v(x1, y0 + eh - 1);
    let right_high = v(x1, y1 - eh + 1);
    let bottom_left = v(x0 + ew - 1, y0);
    let bottom_right = v(x1 - ew + 1, y0);
    let top_left = v(x0 + ew - 1, y1);
    let top_right = v(x1 - ew + 1, y1);

    // Edges leave the vertices on the long axis, so a quarter turn maps
    // edges onto edges with the same direction.
    if width >= height {
        [
            Line::new(left_high, top_left),
            Line::new(right_high, top_right),
            Line::new(right_low, bottom_right),
            Line::new(left_low, bottom_left),
        ]
    } else {
        [
            Line::new(top_left, left_high),
            Line::new(top_right, right_high),
            Line::new(bottom_right, right_low),
            Line::new(bottom_left, left_low),
        ]
    }
}

impl Shape for Diamond {
    fn bounding_rect(&self) -> IntRect {
        self.rect
    }

    fn is_filled(&self) -> bool {
        self.filled
    }

    fn contains(&self, p: IntVector2) -> bool {
        if self.filled {
            self.row_span(p.y)
                .is_some_and(|(left, right)| (left..=right).contains(&p.x))
        } else {
            self.rect.contains(p) && self.edges.iter().any(|e| e.contains(p))
        }
    }

    fn points(&self) -> Points<'_> {
        if self.filled {
            Box::new(self.solid())
        } else {
            Box::new(self.outline())
        }
    }
}

impl Transform for Diamond {
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

impl fmt::Display for Diamond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Diamond {}, {}", self.rect, fill_label(self.filled))
    }
}
