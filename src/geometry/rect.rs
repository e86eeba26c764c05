//! Axis-aligned integer rectangles.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use super::{IntVector2, ReflectionAxis, RotationAngle};
use crate::error::{Result, ShapeError};

/// An axis-aligned rectangle of pixels, inclusive of both corners.
///
/// Always normalized so that `min` is the bottom-left pixel and `max` the
/// top-right one; it therefore contains at least one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IntRect {
    min: IntVector2,
    max: IntVector2,
}

impl IntRect {
    /// Rectangle spanned by two opposite corners, in any order.
    pub fn new(a: IntVector2, b: IntVector2) -> Self {
        Self {
            min: a.component_min(b),
            max: a.component_max(b),
        }
    }

    /// Rectangle with bottom-left `origin` and the given size (clamped to at least 1x1).
    pub fn from_size(origin: IntVector2, width: i32, height: i32) -> Self {
        Self::new(
            origin,
            origin + IntVector2::new(width.max(1) - 1, height.max(1) - 1),
        )
    }

    /// Single-pixel rectangle.
    pub fn point(p: IntVector2) -> Self {
        Self { min: p, max: p }
    }

    /// Smallest rectangle containing every rectangle in `rects`.
    pub fn bounding_rect<I>(rects: I) -> Result<Self>
    where
        I: IntoIterator<Item = IntRect>,
    {
        rects
            .into_iter()
            .reduce(|acc, r| acc.union(&r))
            .ok_or(ShapeError::EmptyInput { what: "bounding rect" })
    }

    /// Smallest rectangle containing every point in `points`.
    pub fn bounding_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = IntVector2>,
    {
        Self::bounding_rect(points.into_iter().map(Self::point))
    }

    pub fn min(&self) -> IntVector2 {
        self.min
    }

    pub fn max(&self) -> IntVector2 {
        self.max
    }

    pub fn min_x(&self) -> i32 {
        self.min.x
    }

    pub fn min_y(&self) -> i32 {
        self.min.y
    }

    pub fn max_x(&self) -> i32 {
        self.max.x
    }

    pub fn max_y(&self) -> i32 {
        self.max.y
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x + 1
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y + 1
    }

    pub fn size(&self) -> IntVector2 {
        IntVector2::new(self.width(), self.height())
    }

    /// Number of pixels in the rectangle.
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub fn bottom_left(&self) -> IntVector2 {
        self.min
    }

    pub fn bottom_right(&self) -> IntVector2 {
        IntVector2::new(self.max.x, self.min.y)
    }

    pub fn top_left(&self) -> IntVector2 {
        IntVector2::new(self.min.x, self.max.y)
    }

    pub fn top_right(&self) -> IntVector2 {
        self.max
    }

    pub fn x_range(&self) -> RangeInclusive<i32> {
        self.min.x..=self.max.x
    }

    pub fn y_range(&self) -> RangeInclusive<i32> {
        self.min.y..=self.max.y
    }

    /// Twice the centre, so odd sizes stay exact.
    pub fn center2(&self) -> IntVector2 {
        self.min + self.max
    }

    pub fn contains(&self, p: IntVector2) -> bool {
        self.x_range().contains(&p.x) && self.y_range().contains(&p.y)
    }

    pub fn contains_rect(&self, other: &IntRect) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    pub fn union(&self, other: &IntRect) -> Self {
        Self {
            min: self.min.component_min(other.min),
            max: self.max.component_max(other.max),
        }
    }

    /// Overlap of two rectangles, if they share a pixel.
    pub fn intersection(&self, other: &IntRect) -> Option<Self> {
        let min = self.min.component_max(other.min);
        let max = self.max.component_min(other.max);
        (min.x <= max.x && min.y <= max.y).then_some(Self { min, max })
    }

    pub fn translate(&self, offset: IntVector2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    pub fn rotate(&self, angle: RotationAngle) -> Self {
        Self::new(self.min.rotate(angle), self.max.rotate(angle))
    }

    pub fn reflect(&self, axis: ReflectionAxis) -> Self {
        Self::new(self.min.reflect(axis), self.max.reflect(axis))
    }

    /// Every pixel, row by row from the bottom-left.
    pub fn points(&self) -> impl Iterator<Item = IntVector2> + '_ {
        self.y_range()
            .flat_map(move |y| self.x_range().map(move |x| IntVector2::new(x, y)))
    }
}

impl fmt::Display for IntRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} ({}x{})", self.min, self.max, self.width(), self.height())
    }
}
