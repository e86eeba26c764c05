//! Integer 2D vector.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use serde::Serialize;

use super::{ReflectionAxis, RotationAngle};
use crate::error::{Result, ShapeError};

/// A pixel coordinate or offset. The y axis points up.
///
/// Ordering is lexicographic: by x, then by y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct IntVector2 {
    pub x: i32,
    pub y: i32,
}

impl IntVector2 {
    pub const ZERO: Self = Self::new(0, 0);
    pub const UP: Self = Self::new(0, 1);
    pub const DOWN: Self = Self::new(0, -1);
    pub const LEFT: Self = Self::new(-1, 0);
    pub const RIGHT: Self = Self::new(1, 0);
    pub const UP_RIGHT: Self = Self::new(1, 1);
    pub const DOWN_RIGHT: Self = Self::new(1, -1);
    pub const DOWN_LEFT: Self = Self::new(-1, -1);
    pub const UP_LEFT: Self = Self::new(-1, 1);

    /// The eight king moves, clockwise starting from up.
    pub const KING_MOVES: [Self; 8] = [
        Self::UP,
        Self::UP_RIGHT,
        Self::RIGHT,
        Self::DOWN_RIGHT,
        Self::DOWN,
        Self::DOWN_LEFT,
        Self::LEFT,
        Self::UP_LEFT,
    ];

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Componentwise sign, each component in `-1..=1`.
    pub fn sign(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    pub fn component_min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn component_max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Chebyshev length: `max(|x|, |y|)`.
    pub fn sup_norm(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }

    /// Chebyshev distance to `other`.
    pub fn sup_dist(self, other: Self) -> i32 {
        (self - other).sup_norm()
    }

    /// True if `other` is this point or one of its 8 neighbours.
    pub fn is_adjacent(self, other: Self) -> bool {
        self.sup_dist(other) <= 1
    }

    /// Rotate anticlockwise about the origin.
    pub fn rotate(self, angle: RotationAngle) -> Self {
        match angle {
            RotationAngle::Zero => self,
            RotationAngle::Ninety => Self::new(-self.y, self.x),
            RotationAngle::OneEighty => Self::new(-self.x, -self.y),
            RotationAngle::TwoSeventy => Self::new(self.y, -self.x),
        }
    }

    /// Reflect across an axis through the origin.
    pub fn reflect(self, axis: ReflectionAxis) -> Self {
        match axis {
            ReflectionAxis::Vertical => Self::new(-self.x, self.y),
            ReflectionAxis::Horizontal => Self::new(self.x, -self.y),
            ReflectionAxis::Diagonal => Self::new(self.y, self.x),
            ReflectionAxis::AntiDiagonal => Self::new(-self.y, -self.x),
        }
    }

    /// Swap the components.
    pub fn transpose(self) -> Self {
        Self::new(self.y, self.x)
    }
}

impl Add for IntVector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for IntVector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for IntVector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for IntVector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for IntVector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i32> for IntVector2 {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(i32, i32)> for IntVector2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for IntVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for IntVector2 {
    type Err = ShapeError;

    /// Parse `x,y`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let invalid = || ShapeError::Parse {
            message: format!("Invalid point: {}", s),
            help: Some("Write points as x,y (for example 3,-2)".to_string()),
        };
        let (x, y) = inner.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = IntVector2::new(3, -2);
        let b = IntVector2::new(-1, 5);
        assert_eq!(a + b, IntVector2::new(2, 3));
        assert_eq!(a - b, IntVector2::new(4, -7));
        assert_eq!(-a, IntVector2::new(-3, 2));
        assert_eq!(a * 3, IntVector2::new(9, -6));
        assert_eq!(b.sign(), IntVector2::new(-1, 1));
    }

    #[test]
    fn test_sup_distance() {
        let a = IntVector2::new(0, 0);
        assert_eq!(a.sup_dist(IntVector2::new(3, -7)), 7);
        assert!(a.is_adjacent(IntVector2::new(-1, 1)));
        assert!(!a.is_adjacent(IntVector2::new(2, 0)));
    }

    #[test]
    fn test_component_min_max() {
        let a = IntVector2::new(1, 8);
        let b = IntVector2::new(4, -2);
        assert_eq!(a.component_min(b), IntVector2::new(1, -2));
        assert_eq!(a.component_max(b), IntVector2::new(4, 8));
    }

    #[test]
    fn test_rotate_is_anticlockwise() {
        let p = IntVector2::new(2, 1);
        assert_eq!(p.rotate(RotationAngle::Ninety), IntVector2::new(-1, 2));
        assert_eq!(p.rotate(RotationAngle::OneEighty), IntVector2::new(-2, -1));
        assert_eq!(p.rotate(RotationAngle::TwoSeventy), IntVector2::new(1, -2));
        for angle in RotationAngle::ALL {
            assert_eq!(p.rotate(angle).rotate(angle.inverse()), p);
        }
    }

    #[test]
    fn test_reflections_are_involutions() {
        let p = IntVector2::new(5, -3);
        for axis in ReflectionAxis::ALL {
            assert_eq!(p.reflect(axis).reflect(axis), p);
        }
        assert_eq!(p.reflect(ReflectionAxis::AntiDiagonal), IntVector2::new(3, -5));
    }

    #[test]
    fn test_ordering_is_x_then_y() {
        let mut points = vec![
            IntVector2::new(1, 0),
            IntVector2::new(0, 5),
            IntVector2::new(0, -1),
        ];
        points.sort();
        assert_eq!(
            points,
            vec![IntVector2::new(0, -1), IntVector2::new(0, 5), IntVector2::new(1, 0)]
        );
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("3,-2".parse::<IntVector2>().unwrap(), IntVector2::new(3, -2));
        assert_eq!("( 4 , 7 )".parse::<IntVector2>().unwrap(), IntVector2::new(4, 7));
        assert!("4".parse::<IntVector2>().is_err());
        assert_eq!(IntVector2::new(-1, 2).to_string(), "(-1, 2)");
    }
}
