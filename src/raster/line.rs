//! Pixel-perfect line rasterization.
//!
//! A [`Line`] is split into blocks of pixels along its dominant axis, one
//! block per row (or column) of the minor axis. Block sizes differ by at most
//! one, and are exactly equal whenever the pixel extents divide evenly. Every
//! pixel is computed in O(1) from its index, with ties broken towards the
//! nearer endpoint so that swapping the endpoints moves at most the middle
//! pixel.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use crate::error::{Result, ShapeError};
use crate::geometry::{IntRect, IntVector2, ReflectionAxis, RotationAngle};

/// A rasterized segment from `start` to `end`, both included.
///
/// Endpoint order matters: reversing a line can move the middle pixel of an
/// odd-length line by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    start: IntVector2,
    end: IntVector2,
    /// More horizontal than vertical (ties count as horizontal).
    horizontal: bool,
    /// Pixel extent along the dominant axis, which is also the pixel count.
    major_len: i64,
    /// Pixel extent along the other axis.
    minor_len: i64,
    step: IntVector2,
}

impl Line {
    pub fn new(start: IntVector2, end: IntVector2) -> Self {
        let delta = end - start;
        let horizontal = delta.x.abs() >= delta.y.abs();
        let (major, minor) = if horizontal {
            (delta.x, delta.y)
        } else {
            (delta.y, delta.x)
        };
        Self {
            start,
            end,
            horizontal,
            major_len: i64::from(major).abs() + 1,
            minor_len: i64::from(minor).abs() + 1,
            step: delta.sign(),
        }
    }

    /// A single-pixel line.
    pub fn point(p: IntVector2) -> Self {
        Self::new(p, p)
    }

    pub fn start(&self) -> IntVector2 {
        self.start
    }

    pub fn end(&self) -> IntVector2 {
        self.end
    }

    /// True when the line is at least as wide as it is tall.
    pub fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    /// Number of pixels: the Chebyshev distance between the endpoints plus one.
    pub fn count(&self) -> usize {
        self.major_len as usize
    }

    /// True if the line is made of equal-sized blocks.
    pub fn is_perfect(&self) -> bool {
        self.major_len % self.minor_len == 0
    }

    /// Same endpoints, opposite direction.
    pub fn reverse(&self) -> Self {
        Self::new(self.end, self.start)
    }

    pub fn bounding_rect(&self) -> IntRect {
        IntRect::new(self.start, self.end)
    }

    pub fn with_start(&self, start: IntVector2) -> Self {
        Self::new(start, self.end)
    }

    pub fn with_end(&self, end: IntVector2) -> Self {
        Self::new(self.start, end)
    }

    /// Offset along the minor axis of the pixel at index `i`.
    ///
    /// Samples the segment joining the outer corners of the endpoint pixels at
    /// the centre of step `i`: `floor((2i + 1) * minor / (2 * major))`. An
    /// exact hit on a pixel boundary rounds towards the start up to and
    /// including the middle step, and towards the end after it.
    fn minor_offset(&self, i: i64) -> i64 {
        let numerator = (2 * i + 1) * self.minor_len;
        let denominator = 2 * self.major_len;
        let q = numerator / denominator;
        if numerator % denominator == 0 && 2 * i + 1 <= self.major_len {
            q - 1
        } else {
            q
        }
    }

    /// Smallest index whose minor offset is at least `m`.
    fn first_index_at_least(&self, m: i64) -> i64 {
        if m <= 0 {
            return 0;
        }
        if m >= self.minor_len {
            return self.major_len;
        }
        // Solve (2i + 1) * minor >= 2 * major * m, then correct for ties.
        let numerator = 2 * self.major_len * m - self.minor_len;
        let denominator = 2 * self.minor_len;
        let mut i = div_ceil(numerator, denominator).max(0);
        while i < self.major_len && self.minor_offset(i) < m {
            i += 1;
        }
        i
    }

    fn pixel(&self, i: i64) -> IntVector2 {
        let minor = self.minor_offset(i);
        let (dx, dy) = if self.horizontal { (i, minor) } else { (minor, i) };
        IntVector2::new(
            self.start.x + self.step.x * dx as i32,
            self.start.y + self.step.y * dy as i32,
        )
    }

    /// The `i`-th pixel counting from `start`, if `i < count()`.
    pub fn get(&self, i: usize) -> Option<IntVector2> {
        (i < self.count()).then(|| self.pixel(i as i64))
    }

    /// The `i`-th pixel counting from `start`.
    pub fn point_at(&self, i: usize) -> Result<IntVector2> {
        self.get(i).ok_or_else(|| {
            ShapeError::out_of_range("line index", i as i64, 0, self.major_len - 1)
        })
    }

    fn major_coord(&self, p: IntVector2) -> i32 {
        if self.horizontal {
            p.x
        } else {
            p.y
        }
    }

    fn major_step(&self) -> i32 {
        if self.horizontal {
            self.step.x
        } else {
            self.step.y
        }
    }

    fn minor_coord(&self, p: IntVector2) -> i32 {
        if self.horizontal {
            p.y
        } else {
            p.x
        }
    }

    fn minor_step(&self) -> i32 {
        if self.horizontal {
            self.step.y
        } else {
            self.step.x
        }
    }

    /// Index of the single pixel whose dominant coordinate is `c`.
    fn index_at_major(&self, c: i32) -> Option<i64> {
        let offset = i64::from(c) - i64::from(self.major_coord(self.start));
        let i = if self.major_step() == 0 {
            offset
        } else {
            offset * i64::from(self.major_step())
        };
        (0..self.major_len).contains(&i).then_some(i)
    }

    /// Indices of the block of pixels whose minor coordinate is `c`.
    fn index_range_at_minor(&self, c: i32) -> Option<RangeInclusive<usize>> {
        let offset = i64::from(c) - i64::from(self.minor_coord(self.start));
        let m = if self.minor_step() == 0 {
            offset
        } else {
            offset * i64::from(self.minor_step())
        };
        if !(0..self.minor_len).contains(&m) {
            return None;
        }
        let first = self.first_index_at_least(m);
        let last = self.first_index_at_least(m + 1) - 1;
        Some(first as usize..=last as usize)
    }

    fn x_range_error(&self, x: i32) -> ShapeError {
        let rect = self.bounding_rect();
        ShapeError::out_of_range("x", x, rect.min_x(), rect.max_x())
    }

    fn y_range_error(&self, y: i32) -> ShapeError {
        let rect = self.bounding_rect();
        ShapeError::out_of_range("y", y, rect.min_y(), rect.max_y())
    }

    /// Indices of the pixels in column `x`, in traversal order.
    pub fn index_range_at_x(&self, x: i32) -> Result<RangeInclusive<usize>> {
        let range = if self.horizontal {
            self.index_at_major(x).map(|i| i as usize..=i as usize)
        } else {
            self.index_range_at_minor(x)
        };
        range.ok_or_else(|| self.x_range_error(x))
    }

    /// Indices of the pixels in row `y`, in traversal order.
    pub fn index_range_at_y(&self, y: i32) -> Result<RangeInclusive<usize>> {
        let range = if self.horizontal {
            self.index_range_at_minor(y)
        } else {
            self.index_at_major(y).map(|i| i as usize..=i as usize)
        };
        range.ok_or_else(|| self.y_range_error(y))
    }

    fn ends_of(&self, range: RangeInclusive<usize>) -> (IntVector2, IntVector2) {
        (self.pixel(*range.start() as i64), self.pixel(*range.end() as i64))
    }

    /// Smallest x among the pixels in row `y`.
    pub fn min_x(&self, y: i32) -> Result<i32> {
        let (a, b) = self.ends_of(self.index_range_at_y(y)?);
        Ok(a.x.min(b.x))
    }

    /// Largest x among the pixels in row `y`.
    pub fn max_x(&self, y: i32) -> Result<i32> {
        let (a, b) = self.ends_of(self.index_range_at_y(y)?);
        Ok(a.x.max(b.x))
    }

    /// Smallest y among the pixels in column `x`.
    pub fn min_y(&self, x: i32) -> Result<i32> {
        let (a, b) = self.ends_of(self.index_range_at_x(x)?);
        Ok(a.y.min(b.y))
    }

    /// Largest y among the pixels in column `x`.
    pub fn max_y(&self, x: i32) -> Result<i32> {
        let (a, b) = self.ends_of(self.index_range_at_x(x)?);
        Ok(a.y.max(b.y))
    }

    /// Index of `p` in the line, if the line passes through it.
    pub fn index_of(&self, p: IntVector2) -> Option<usize> {
        let i = self.index_at_major(self.major_coord(p))?;
        (self.pixel(i) == p).then_some(i as usize)
    }

    pub fn contains(&self, p: IntVector2) -> bool {
        self.index_of(p).is_some()
    }

    /// True if the line has pixels in row `p.y` and all of them are right of `p`.
    pub fn point_is_to_left(&self, p: IntVector2) -> bool {
        self.min_x(p.y).is_ok_and(|x| p.x < x)
    }

    /// True if the line has pixels in row `p.y` and all of them are left of `p`.
    pub fn point_is_to_right(&self, p: IntVector2) -> bool {
        self.max_x(p.y).is_ok_and(|x| p.x > x)
    }

    /// True if the line has pixels in column `p.x` and all of them are below `p`.
    pub fn point_is_above(&self, p: IntVector2) -> bool {
        self.max_y(p.x).is_ok_and(|y| p.y > y)
    }

    /// True if the line has pixels in column `p.x` and all of them are above `p`.
    pub fn point_is_below(&self, p: IntVector2) -> bool {
        self.min_y(p.x).is_ok_and(|y| p.y < y)
    }

    pub fn iter(&self) -> LineIter {
        LineIter {
            line: *self,
            front: 0,
            back: self.major_len,
        }
    }

    pub fn translate(&self, offset: IntVector2) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    /// Rasterization commutes with rotation, so only the endpoints move.
    pub fn rotate(&self, angle: RotationAngle) -> Self {
        Self::new(self.start.rotate(angle), self.end.rotate(angle))
    }

    pub fn reflect(&self, axis: ReflectionAxis) -> Self {
        Self::new(self.start.reflect(axis), self.end.reflect(axis))
    }
}

fn div_ceil(a: i64, b: i64) -> i64 {
    let q = a.div_euclid(b);
    if a.rem_euclid(b) == 0 {
        q
    } else {
        q + 1
    }
}

/// Iterator over the pixels of a [`Line`], from `start` to `end`.
#[derive(Debug, Clone)]
pub struct LineIter {
    line: Line,
    front: i64,
    back: i64,
}

impl Iterator for LineIter {
    type Item = IntVector2;

    fn next(&mut self) -> Option<IntVector2> {
        if self.front >= self.back {
            return None;
        }
        let p = self.line.pixel(self.front);
        self.front += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.back - self.front).max(0) as usize;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for LineIter {
    fn next_back(&mut self) -> Option<IntVector2> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.line.pixel(self.back))
    }
}

impl ExactSizeIterator for LineIter {}

impl FusedIterator for LineIter {}

impl IntoIterator for &Line {
    type Item = IntVector2;
    type IntoIter = LineIter;

    fn into_iter(self) -> LineIter {
        self.iter()
    }
}
