//! Right triangles with the right angle at a corner of their rectangle.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::{fill_label, Points, Shape, Transform};
use crate::error::{Result, ShapeError};
use crate::geometry::{IntRect, IntVector2, ReflectionAxis, RotationAngle};
use crate::raster::{Line, Path};

/// Which corner of the bounding rectangle holds the right angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RightAngleCorner {
    #[default]
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl RightAngleCorner {
    pub fn of(self, rect: &IntRect) -> IntVector2 {
        match self {
            RightAngleCorner::BottomLeft => rect.bottom_left(),
            RightAngleCorner::BottomRight => rect.bottom_right(),
            RightAngleCorner::TopLeft => rect.top_left(),
            RightAngleCorner::TopRight => rect.top_right(),
        }
    }

    fn is_left(self) -> bool {
        matches!(self, RightAngleCorner::BottomLeft | RightAngleCorner::TopLeft)
    }

    fn is_bottom(self) -> bool {
        matches!(self, RightAngleCorner::BottomLeft | RightAngleCorner::BottomRight)
    }

    fn from_sides(left: bool, bottom: bool) -> Self {
        match (left, bottom) {
            (true, true) => RightAngleCorner::BottomLeft,
            (false, true) => RightAngleCorner::BottomRight,
            (true, false) => RightAngleCorner::TopLeft,
            (false, false) => RightAngleCorner::TopRight,
        }
    }

    /// Where this corner ends up after rotating the rectangle anticlockwise.
    pub fn rotate(self, angle: RotationAngle) -> Self {
        (0..angle.quarter_turns()).fold(self, |corner, _| match corner {
            RightAngleCorner::BottomLeft => RightAngleCorner::BottomRight,
            RightAngleCorner::BottomRight => RightAngleCorner::TopRight,
            RightAngleCorner::TopRight => RightAngleCorner::TopLeft,
            RightAngleCorner::TopLeft => RightAngleCorner::BottomLeft,
        })
    }

    /// Where this corner ends up after reflecting the rectangle.
    pub fn reflect(self, axis: ReflectionAxis) -> Self {
        let (left, bottom) = (self.is_left(), self.is_bottom());
        match axis {
            ReflectionAxis::Vertical => Self::from_sides(!left, bottom),
            ReflectionAxis::Horizontal => Self::from_sides(left, !bottom),
            // Swapping x and y keeps the corners where left and bottom agree.
            ReflectionAxis::Diagonal => Self::from_sides(bottom, left),
            ReflectionAxis::AntiDiagonal => Self::from_sides(!bottom, !left),
        }
    }
}

impl fmt::Display for RightAngleCorner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RightAngleCorner::BottomLeft => "bottom-left",
            RightAngleCorner::BottomRight => "bottom-right",
            RightAngleCorner::TopLeft => "top-left",
            RightAngleCorner::TopRight => "top-right",
        };
        f.write_str(name)
    }
}

impl FromStr for RightAngleCorner {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "bottom-left" | "bl" => Ok(RightAngleCorner::BottomLeft),
            "bottom-right" | "br" => Ok(RightAngleCorner::BottomRight),
            "top-left" | "tl" => Ok(RightAngleCorner::TopLeft),
            "top-right" | "tr" => Ok(RightAngleCorner::TopRight),
            _ => Err(ShapeError::UnknownVariant {
                kind: "right-angle corner",
                value: s.to_string(),
                help: Some("Use bottom-left, bottom-right, top-left or top-right".to_string()),
            }),
        }
    }
}

/// A right triangle whose legs run along two sides of its rectangle.
///
/// The hypotenuse starts and ends one pixel short of the far ends of the
/// legs, so the tips stay single pixels. It is drawn from the end of the
/// longer leg (the horizontal one on a square) so that rotating or reflecting
/// the triangle transforms its pixels exactly. Only the longer leg gives up a
/// pixel when the shorter side is 2, and neither does when it is 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RightTriangle {
    rect: IntRect,
    right_angle: RightAngleCorner,
    filled: bool,
    /// Longer leg, hypotenuse, shorter leg.
    border: Path,
}

impl RightTriangle {
    pub fn new(a: IntVector2, b: IntVector2, right_angle: RightAngleCorner, filled: bool) -> Self {
        Self::from_rect(IntRect::new(a, b), right_angle, filled)
    }

    pub fn from_rect(rect: IntRect, right_angle: RightAngleCorner, filled: bool) -> Self {
        Self {
            rect,
            right_angle,
            filled,
            border: border_for(&rect, right_angle),
        }
    }

    pub fn rect(&self) -> IntRect {
        self.rect
    }

    pub fn right_angle(&self) -> RightAngleCorner {
        self.right_angle
    }

    pub fn with_filled(&self, filled: bool) -> Self {
        Self {
            filled,
            ..self.clone()
        }
    }

    pub fn with_right_angle(&self, right_angle: RightAngleCorner) -> Self {
        Self::from_rect(self.rect, right_angle, self.filled)
    }

    /// The closed outline, starting and ending at the right angle.
    pub fn border(&self) -> &Path {
        &self.border
    }

    pub fn hypotenuse(&self) -> Line {
        self.border.lines()[1]
    }

    /// True if the triangle is thick enough to have pixels off its border.
    fn has_interior(&self) -> bool {
        self.rect.width() > 2 && self.rect.height() > 2
    }

    fn outline(&self) -> impl Iterator<Item = IntVector2> + '_ {
        // The hypotenuse's end blocks run along the legs.
        let mut seen = HashSet::new();
        self.border.iter().filter(move |&p| seen.insert(p))
    }
}

fn border_for(rect: &IntRect, right_angle: RightAngleCorner) -> Path {
    let corner = right_angle.of(rect);
    let (step_x, step_y) = (
        if right_angle.is_left() { 1 } else { -1 },
        if right_angle.is_bottom() { 1 } else { -1 },
    );
    let across = IntVector2::new(
        if right_angle.is_left() { rect.max_x() } else { rect.min_x() },
        corner.y,
    );
    let up = IntVector2::new(
        corner.x,
        if right_angle.is_bottom() { rect.max_y() } else { rect.min_y() },
    );
    // One pixel back along each leg, towards the right angle.
    let across_inset = across - IntVector2::new(step_x, 0);
    let up_inset = up - IntVector2::new(0, step_y);

    let wide = rect.width() >= rect.height();
    let (hypotenuse_start, hypotenuse_end) = match (rect.width().min(rect.height()), wide) {
        // A single row or column: the legs already cover everything.
        (1, true) => (across, up),
        (1, false) => (up, across),
        // The short leg is too short to give up a pixel.
        (2, true) => (across_inset, up),
        (2, false) => (up_inset, across),
        (_, true) => (across_inset, up_inset),
        (_, false) => (up_inset, across_inset),
    };
    let (long, short) = if wide { (across, up) } else { (up, across) };
    Path::from_connected(vec![
        Line::new(corner, long),
        Line::new(hypotenuse_start, hypotenuse_end),
        Line::new(short, corner),
    ])
}

impl Shape for RightTriangle {
    fn bounding_rect(&self) -> IntRect {
        self.rect
    }

    fn is_filled(&self) -> bool {
        self.filled
    }

    fn contains(&self, p: IntVector2) -> bool {
        if !self.rect.contains(p) {
            return false;
        }
        if self.border.contains(p) {
            return true;
        }
        self.filled
            && self.has_interior()
            && matches!(self.border.winding_number(p), Ok(w) if w != 0)
    }

    fn points(&self) -> Points<'_> {
        if self.filled {
            Box::new(self.rect.points().filter(move |&p| self.contains(p)))
        } else {
            Box::new(self.outline())
        }
    }
}

impl Transform for RightTriangle {
    fn translate(&self, offset: IntVector2) -> Self {
        Self::from_rect(self.rect.translate(offset), self.right_angle, self.filled)
    }

    fn rotate(&self, angle: RotationAngle) -> Result<Self> {
        Ok(Self::from_rect(
            self.rect.rotate(angle),
            self.right_angle.rotate(angle),
            self.filled,
        ))
    }

    fn reflect(&self, axis: ReflectionAxis) -> Result<Self> {
        Ok(Self::from_rect(
            self.rect.reflect(axis),
            self.right_angle.reflect(axis),
            self.filled,
        ))
    }
}

impl fmt::Display for RightTriangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RightTriangle {}, right angle {}, {}",
            self.rect,
            self.right_angle,
            fill_label(self.filled)
        )
    }
}
