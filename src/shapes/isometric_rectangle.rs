//! Isometric (2:1) rectangles defined by two opposite corners.
//!
//! The outline is made of 2:1 lines. Given two corners, the other two are
//! inferred from integer arithmetic alone: with `dx` and `dy` the absolute
//! corner deltas, the given corners are the left and right ones when
//! `2 * dy < dx`, the top and bottom ones when `2 * dy > dx`, and the shape
//! collapses to a thick 2:1 line when `2 * dy == dx`.
//!
//! Each column of the shape is a single run of pixels between a lower and an
//! upper bound. Both bounds are computed in a canonical frame anchored at the
//! leftmost corner and mirrored when the other corner lies below it, which
//! keeps the shape identical under swapping the corners, a half turn, or a
//! flip about either axis.
//!
//! Every edge steps one row per two columns. Where an edge's pairs start is
//! its phase, picked from `(dx + 2 * dy) % 4` so that no corner ends up as a
//! flat run of four:
//!
//! | residue | `LeftRight` layout     | `TopBottom` layout     |
//! |---------|------------------------|------------------------|
//! | 0       | 2-wide sides, 1 at top | 1 at top and bottom    |
//! | 1       | 2-wide sides, 2 at top | 3 at top and bottom    |
//! | 2       | 1 at sides, 1 at top   | 1 at top and bottom    |
//! | 3       | 1 at sides, 2 at top   | 1 at top and bottom    |
//!
//! A straight line always has residue 0. The lower border is always the upper
//! border turned through a half turn.

use std::fmt;

use super::{fill_label, Points, Shape, Transform};
use crate::error::{Result, ShapeError};
use crate::geometry::{IntRect, IntVector2, ReflectionAxis, RotationAngle};
use crate::raster::{Line, Path};

/// How the two defining corners sit on the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerLayout {
    /// The corners are the leftmost and rightmost points.
    LeftRight,
    /// The corners are the highest and lowest points.
    TopBottom,
    /// The corners lie on a single 2:1 line.
    StraightLine,
}

/// The four corners of an isometric rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsometricCorners {
    pub left: IntVector2,
    pub top: IntVector2,
    pub right: IntVector2,
    pub bottom: IntVector2,
}

/// An isometric rectangle between two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsometricRectangle {
    start: IntVector2,
    end: IntVector2,
    filled: bool,
    /// Leftmost corner (lowest on ties); the canonical origin.
    anchor: IntVector2,
    dx: i32,
    dy: i32,
    /// The other corner is below the anchor.
    flipped: bool,
    layout: CornerLayout,
    /// 1 when every edge starts with a single pixel at its corner, else 0.
    phase: i32,
    /// Canonical column range, relative to the anchor.
    first_column: i32,
    last_column: i32,
    bounds: IntRect,
}

impl IsometricRectangle {
    pub fn new(start: IntVector2, end: IntVector2, filled: bool) -> Self {
        let (anchor, other) = if start <= end { (start, end) } else { (end, start) };
        let dx = other.x - anchor.x;
        let rise = other.y - anchor.y;
        let dy = rise.abs();

        let layout = match (2 * dy).cmp(&dx) {
            std::cmp::Ordering::Less => CornerLayout::LeftRight,
            std::cmp::Ordering::Equal => CornerLayout::StraightLine,
            std::cmp::Ordering::Greater => CornerLayout::TopBottom,
        };
        tracing::trace!(%start, %end, ?layout, "isometric corner layout");

        let residue = (dx + 2 * dy).rem_euclid(4);
        let phase = match layout {
            CornerLayout::TopBottom => i32::from(residue != 1),
            _ => residue / 2,
        };

        let (first_column, last_column) = match layout {
            CornerLayout::TopBottom => {
                // Widest reach past the corners that keeps every column non-empty.
                let reach = if dx % 2 == 0 {
                    2 * (dy - dx / 2).div_euclid(2) + 1 - phase
                } else {
                    dy - (dx - 1) / 2 - phase
                };
                (-reach, dx + reach)
            }
            _ => (0, dx),
        };

        let mut shape = Self {
            start,
            end,
            filled,
            anchor,
            dx,
            dy,
            flipped: rise < 0,
            layout,
            phase,
            first_column,
            last_column,
            bounds: IntRect::point(anchor),
        };
        shape.bounds = shape.compute_bounds();
        shape
    }

    pub fn start(&self) -> IntVector2 {
        self.start
    }

    pub fn end(&self) -> IntVector2 {
        self.end
    }

    pub fn layout(&self) -> CornerLayout {
        self.layout
    }

    pub fn with_filled(&self, filled: bool) -> Self {
        Self { filled, ..*self }
    }

    pub fn with_start(&self, start: IntVector2) -> Self {
        Self::new(start, self.end, self.filled)
    }

    pub fn with_end(&self, end: IntVector2) -> Self {
        Self::new(self.start, end, self.filled)
    }

    /// Leftmost and rightmost columns.
    pub fn x_span(&self) -> (i32, i32) {
        (
            self.anchor.x + self.first_column,
            self.anchor.x + self.last_column,
        )
    }

    fn columns(&self) -> std::ops::RangeInclusive<i32> {
        let (first, last) = self.x_span();
        first..=last
    }

    /// Rows climbed by an edge `run` columns away from its corner.
    fn rise(&self, run: i32) -> i32 {
        (run + self.phase).div_euclid(2)
    }

    fn canonical_lower(&self, c: i32) -> i32 {
        match self.layout {
            CornerLayout::TopBottom => self.rise(c.abs()),
            _ => (-self.rise(c)).max(self.dy - self.rise(self.dx - c)),
        }
    }

    fn canonical_upper(&self, c: i32) -> i32 {
        match self.layout {
            CornerLayout::TopBottom => self.dy - self.rise((c - self.dx).abs()),
            _ => self.rise(c).min(self.dy + self.rise(self.dx - c)),
        }
    }

    /// Lowest and highest pixel of column `x`, if the shape reaches it.
    pub fn column(&self, x: i32) -> Option<(i32, i32)> {
        let c = x - self.anchor.x;
        if c < self.first_column || c > self.last_column {
            return None;
        }
        let (a, b) = (self.canonical_lower(c), self.canonical_upper(c));
        // On the thick-line boundary the two bounds can cross over.
        let (lo, hi) = (a.min(b), a.max(b));
        Some(if self.flipped {
            (self.anchor.y - hi, self.anchor.y - lo)
        } else {
            (self.anchor.y + lo, self.anchor.y + hi)
        })
    }

    fn column_or_err(&self, x: i32) -> Result<(i32, i32)> {
        self.column(x).ok_or_else(|| {
            let (first, last) = self.x_span();
            ShapeError::out_of_range("x", x, first, last)
        })
    }

    /// Lowest y of the shape in column `x`.
    pub fn lower_y(&self, x: i32) -> Result<i32> {
        Ok(self.column_or_err(x)?.0)
    }

    /// Highest y of the shape in column `x`.
    pub fn upper_y(&self, x: i32) -> Result<i32> {
        Ok(self.column_or_err(x)?.1)
    }

    fn column_bounds(&self) -> impl DoubleEndedIterator<Item = (i32, i32, i32)> + '_ {
        self.columns()
            .filter_map(move |x| self.column(x).map(|(lo, hi)| (x, lo, hi)))
    }

    fn compute_bounds(&self) -> IntRect {
        let (first, last) = self.x_span();
        let (lo, hi) = self
            .column_bounds()
            .fold((i32::MAX, i32::MIN), |(lo, hi), (_, a, b)| (lo.min(a), hi.max(b)));
        IntRect::new(IntVector2::new(first, lo), IntVector2::new(last, hi))
    }

    /// The bottom half of the outline, left to right.
    pub fn lower_border(&self) -> Path {
        path_through(self.column_bounds().map(|(x, lo, _)| IntVector2::new(x, lo)))
    }

    /// The top half of the outline, left to right.
    pub fn upper_border(&self) -> Path {
        path_through(self.column_bounds().map(|(x, _, hi)| IntVector2::new(x, hi)))
    }

    /// The given corners plus the two inferred ones.
    ///
    /// An inferred corner on a flat run is its leftmost pixel at the top and
    /// its rightmost pixel at the bottom, so the corners rotate with the shape.
    pub fn corners(&self) -> IsometricCorners {
        let (first, last) = self.x_span();
        let other = if self.anchor == self.start { self.end } else { self.start };
        match self.layout {
            CornerLayout::TopBottom => {
                let (top, bottom) = if self.flipped {
                    (self.anchor, other)
                } else {
                    (other, self.anchor)
                };
                let (_, left_hi) = self.column(first).unwrap_or((0, 0));
                let (right_lo, _) = self.column(last).unwrap_or((0, 0));
                IsometricCorners {
                    left: IntVector2::new(first, left_hi),
                    top,
                    right: IntVector2::new(last, right_lo),
                    bottom,
                }
            }
            CornerLayout::LeftRight | CornerLayout::StraightLine => {
                let top = self
                    .column_bounds()
                    .map(|(x, _, hi)| IntVector2::new(x, hi))
                    .reduce(|best, p| if p.y > best.y { p } else { best })
                    .unwrap_or(self.anchor);
                let bottom = self
                    .column_bounds()
                    .map(|(x, lo, _)| IntVector2::new(x, lo))
                    .reduce(|best, p| if p.y <= best.y { p } else { best })
                    .unwrap_or(self.anchor);
                IsometricCorners {
                    left: self.anchor,
                    top,
                    right: other,
                    bottom,
                }
            }
        }
    }

    fn outline(&self) -> impl Iterator<Item = IntVector2> + '_ {
        let upper = self
            .column_bounds()
            .map(|(x, _, hi)| IntVector2::new(x, hi));
        let lower = self
            .column_bounds()
            .rev()
            .filter(|&(_, lo, hi)| lo != hi)
            .map(|(x, lo, _)| IntVector2::new(x, lo));
        upper.chain(lower)
    }

    fn solid(&self) -> impl Iterator<Item = IntVector2> + '_ {
        self.column_bounds()
            .flat_map(|(x, lo, hi)| (lo..=hi).map(move |y| IntVector2::new(x, y)))
    }

    fn unsupported(&self, transform: impl fmt::Display) -> ShapeError {
        ShapeError::UnsupportedTransform {
            shape: "IsometricRectangle",
            transform: transform.to_string(),
        }
    }
}

/// A path through consecutive king-adjacent points, one line per straight run.
pub(crate) fn path_through<I>(points: I) -> Path
where
    I: IntoIterator<Item = IntVector2>,
{
    let points: Vec<IntVector2> = points.into_iter().collect();
    let mut corners: Vec<IntVector2> = Vec::new();
    for (i, &p) in points.iter().enumerate() {
        let keep = i == 0
            || i + 1 == points.len()
            || p - points[i - 1] != points[i + 1] - p;
        if keep {
            corners.push(p);
        }
    }
    let lines = match corners.as_slice() {
        [] => vec![Line::point(IntVector2::ZERO)],
        [p] => vec![Line::point(*p)],
        _ => corners.windows(2).map(|w| Line::new(w[0], w[1])).collect(),
    };
    Path::from_connected(lines)
}

impl Shape for IsometricRectangle {
    fn bounding_rect(&self) -> IntRect {
        self.bounds
    }

    fn is_filled(&self) -> bool {
        self.filled
    }

    fn contains(&self, p: IntVector2) -> bool {
        match self.column(p.x) {
            Some((lo, hi)) if self.filled => (lo..=hi).contains(&p.y),
            Some((lo, hi)) => p.y == lo || p.y == hi,
            None => false,
        }
    }

    fn points(&self) -> Points<'_> {
        if self.filled {
            Box::new(self.solid())
        } else {
            Box::new(self.outline())
        }
    }

    fn count(&self) -> usize {
        self.column_bounds()
            .map(|(_, lo, hi)| {
                let height = (hi - lo + 1) as usize;
                if self.filled {
                    height
                } else {
                    height.min(2)
                }
            })
            .sum()
    }
}

impl Transform for IsometricRectangle {
    fn translate(&self, offset: IntVector2) -> Self {
        Self::new(self.start + offset, self.end + offset, self.filled)
    }

    fn rotate(&self, angle: RotationAngle) -> Result<Self> {
        match angle {
            RotationAngle::Zero => Ok(*self),
            RotationAngle::OneEighty => Ok(Self::new(
                self.start.rotate(angle),
                self.end.rotate(angle),
                self.filled,
            )),
            _ => Err(self.unsupported(angle)),
        }
    }

    fn reflect(&self, axis: ReflectionAxis) -> Result<Self> {
        if axis.swaps_axes() {
            return Err(self.unsupported(axis));
        }
        Ok(Self::new(
            self.start.reflect(axis),
            self.end.reflect(axis),
            self.filled,
        ))
    }
}

impl fmt::Display for IsometricRectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IsometricRectangle {} to {}, {}",
            self.start,
            self.end,
            fill_label(self.filled)
        )
    }
}
