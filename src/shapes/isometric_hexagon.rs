//! Isometric hexagons: 2:1 diagonals top and bottom, vertical sides left and right.

use std::fmt;

use super::{fill_label, Points, Shape, Transform};
use crate::error::{Result, ShapeError};
use crate::geometry::{IntRect, IntVector2, ReflectionAxis, RotationAngle};

/// A hexagon fitted into a target rectangle.
///
/// The height is always kept. A rectangle too wide for its height to hold two
/// pixels of vertical side is narrowed symmetrically, so [`rect`](Self::rect)
/// can be narrower than [`target_rect`](Self::target_rect).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsometricHexagon {
    target: IntRect,
    rect: IntRect,
    filled: bool,
    steps: i32,
}

impl IsometricHexagon {
    pub fn new(a: IntVector2, b: IntVector2, filled: bool) -> Self {
        Self::from_rect(IntRect::new(a, b), filled)
    }

    pub fn from_rect(target: IntRect, filled: bool) -> Self {
        let (width, height) = (target.width(), target.height());
        let max_steps = ((height - 2) / 2).max(0);
        let widest = 4 * max_steps + 4;
        let rect = if width > widest {
            let narrowed = if (widest - width) % 2 == 0 {
                widest
            } else {
                widest - 1
            };
            let cut = (width - narrowed) / 2;
            tracing::debug!(%target, width = narrowed, "narrowed isometric hexagon");
            IntRect::new(
                IntVector2::new(target.min_x() + cut, target.min_y()),
                IntVector2::new(target.max_x() - cut, target.max_y()),
            )
        } else {
            target
        };
        Self {
            target,
            rect,
            filled,
            steps: ((rect.width() - 1) / 2) / 2,
        }
    }

    /// The rectangle the hexagon was asked to fill.
    pub fn target_rect(&self) -> IntRect {
        self.target
    }

    /// The rectangle the hexagon actually fills.
    pub fn rect(&self) -> IntRect {
        self.rect
    }

    /// Rows climbed by each diagonal before the flat top.
    pub fn steps(&self) -> i32 {
        self.steps
    }

    pub fn with_filled(&self, filled: bool) -> Self {
        Self { filled, ..*self }
    }

    /// Lowest and highest pixel of column `x`, if the hexagon reaches it.
    pub fn column(&self, x: i32) -> Option<(i32, i32)> {
        if !self.rect.x_range().contains(&x) {
            return None;
        }
        let rise = (x - self.rect.min_x()).min(self.rect.max_x() - x) / 2;
        Some((
            self.rect.min_y() + self.steps - rise,
            self.rect.max_y() - self.steps + rise,
        ))
    }

    fn bounds_at(&self, x: i32) -> (i32, i32) {
        self.column(x).unwrap_or((1, 0))
    }

    fn outline(&self) -> impl Iterator<Item = IntVector2> + '_ {
        let (x0, x1) = (self.rect.min_x(), self.rect.max_x());
        let v = IntVector2::new;
        let (lo, hi) = self.bounds_at(x0);
        let left = (lo..=hi).map(move |y| v(x0, y));
        let top = (x0 + 1..=x1).map(move |x| v(x, self.bounds_at(x).1));
        let (lo, hi) = self.bounds_at(x1);
        let right = (lo..hi).rev().filter(move |_| x1 != x0).map(move |y| v(x1, y));
        let bottom = (x0 + 1..x1).rev().filter_map(move |x| {
            let (lo, hi) = self.bounds_at(x);
            (lo != hi).then(|| v(x, lo))
        });
        left.chain(top).chain(right).chain(bottom)
    }

    fn solid(&self) -> impl Iterator<Item = IntVector2> + '_ {
        self.rect.x_range().flat_map(move |x| {
            let (lo, hi) = self.bounds_at(x);
            (lo..=hi).map(move |y| IntVector2::new(x, y))
        })
    }

    fn unsupported(&self, transform: impl fmt::Display) -> ShapeError {
        ShapeError::UnsupportedTransform {
            shape: "IsometricHexagon",
            transform: transform.to_string(),
        }
    }
}

impl Shape for IsometricHexagon {
    fn bounding_rect(&self) -> IntRect {
        self.rect
    }

    fn is_filled(&self) -> bool {
        self.filled
    }

    fn contains(&self, p: IntVector2) -> bool {
        let Some((lo, hi)) = self.column(p.x) else {
            return false;
        };
        if !(lo..=hi).contains(&p.y) {
            return false;
        }
        self.filled
            || p.y == lo
            || p.y == hi
            || p.x == self.rect.min_x()
            || p.x == self.rect.max_x()
    }

    fn points(&self) -> Points<'_> {
        if self.filled {
            Box::new(self.solid())
        } else {
            Box::new(self.outline())
        }
    }
}

impl Transform for IsometricHexagon {
    fn translate(&self, offset: IntVector2) -> Self {
        Self::from_rect(self.target.translate(offset), self.filled)
    }

    fn rotate(&self, angle: RotationAngle) -> Result<Self> {
        if angle.swaps_axes() {
            return Err(self.unsupported(angle));
        }
        Ok(Self::from_rect(self.target.rotate(angle), self.filled))
    }

    fn reflect(&self, axis: ReflectionAxis) -> Result<Self> {
        if axis.swaps_axes() {
            return Err(self.unsupported(axis));
        }
        Ok(Self::from_rect(self.target.reflect(axis), self.filled))
    }
}

impl fmt::Display for IsometricHexagon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IsometricHexagon {}, {}",
            self.rect,
            fill_label(self.filled)
        )
    }
}
