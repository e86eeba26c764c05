//! Axis-aligned rectangles.

use std::fmt;

use super::{fill_label, Points, Shape, Transform};
use crate::error::Result;
use crate::geometry::{IntRect, IntVector2, ReflectionAxis, RotationAngle};

/// A filled or outlined axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    rect: IntRect,
    filled: bool,
}

impl Rectangle {
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

    fn on_border(&self, p: IntVector2) -> bool {
        let r = &self.rect;
        p.x == r.min_x() || p.x == r.max_x() || p.y == r.min_y() || p.y == r.max_y()
    }

    /// Perimeter clockwise from the bottom-left: up the left side, along the
    /// top, down the right side, then back along the bottom.
    fn border(&self) -> impl Iterator<Item = IntVector2> {
        let r = self.rect;
        let (x0, y0, x1, y1) = (r.min_x(), r.min_y(), r.max_x(), r.max_y());
        let wide = x1 > x0;
        let tall = y1 > y0;

        let left = (y0..=y1).map(move |y| IntVector2::new(x0, y));
        let top = (x0 + 1..=x1).map(move |x| IntVector2::new(x, y1));
        let right = (y0..y1)
            .rev()
            .filter(move |_| wide)
            .map(move |y| IntVector2::new(x1, y));
        let bottom = (x0 + 1..x1)
            .rev()
            .filter(move |_| tall)
            .map(move |x| IntVector2::new(x, y0));
        left.chain(top).chain(right).chain(bottom)
    }
}

impl Shape for Rectangle {
    fn bounding_rect(&self) -> IntRect {
        self.rect
    }

    fn is_filled(&self) -> bool {
        self.filled
    }

    fn contains(&self, p: IntVector2) -> bool {
        self.rect.contains(p) && (self.filled || self.on_border(p))
    }

    fn points(&self) -> Points<'_> {
        if self.filled {
            Box::new(self.rect.points())
        } else {
            Box::new(self.border())
        }
    }

    fn count(&self) -> usize {
        let (w, h) = (self.rect.width() as usize, self.rect.height() as usize);
        if self.filled || w <= 2 || h <= 2 {
            w * h
        } else {
            2 * (w + h) - 4
        }
    }
}

impl Transform for Rectangle {
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

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle {}, {}", self.rect, fill_label(self.filled))
    }
}
