//! Quadrantal rotations and axis reflections.
//!
//! Both act on integer points about the origin, so composing them with a
//! translation covers every symmetry of the pixel grid.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ShapeError};

/// Anticlockwise rotation by a multiple of 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationAngle {
    #[default]
    Zero,
    Ninety,
    OneEighty,
    TwoSeventy,
}

impl RotationAngle {
    pub const ALL: [RotationAngle; 4] = [
        RotationAngle::Zero,
        RotationAngle::Ninety,
        RotationAngle::OneEighty,
        RotationAngle::TwoSeventy,
    ];

    /// Build from degrees; any multiple of 90 (negative means clockwise).
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        if degrees % 90 != 0 {
            return Err(ShapeError::UnknownVariant {
                kind: "rotation angle",
                value: degrees.to_string(),
                help: Some("Rotations must be a multiple of 90 degrees".to_string()),
            });
        }
        Ok(Self::from_quarter_turns(degrees / 90))
    }

    fn from_quarter_turns(turns: i32) -> Self {
        match turns.rem_euclid(4) {
            0 => RotationAngle::Zero,
            1 => RotationAngle::Ninety,
            2 => RotationAngle::OneEighty,
            _ => RotationAngle::TwoSeventy,
        }
    }

    /// Number of anticlockwise quarter turns, in `0..4`.
    pub fn quarter_turns(self) -> i32 {
        match self {
            RotationAngle::Zero => 0,
            RotationAngle::Ninety => 1,
            RotationAngle::OneEighty => 2,
            RotationAngle::TwoSeventy => 3,
        }
    }

    pub fn degrees(self) -> i32 {
        self.quarter_turns() * 90
    }

    /// The rotation that undoes this one.
    pub fn inverse(self) -> Self {
        Self::from_quarter_turns(-self.quarter_turns())
    }

    /// This rotation followed by `other`.
    pub fn then(self, other: RotationAngle) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }

    /// True for 90 and 270, which swap the x and y axes.
    pub fn swaps_axes(self) -> bool {
        matches!(self, RotationAngle::Ninety | RotationAngle::TwoSeventy)
    }
}

impl fmt::Display for RotationAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} degrees", self.degrees())
    }
}

impl FromStr for RotationAngle {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_end_matches("deg").trim_end_matches('°');
        let degrees = trimmed.parse::<i32>().map_err(|_| ShapeError::UnknownVariant {
            kind: "rotation angle",
            value: s.to_string(),
            help: Some("Use 0, 90, 180 or 270".to_string()),
        })?;
        Self::from_degrees(degrees)
    }
}

/// Reflection across one of the four axes through the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectionAxis {
    /// The y axis: `(x, y) -> (-x, y)`.
    Vertical,
    /// The x axis: `(x, y) -> (x, -y)`.
    Horizontal,
    /// The line `y = x`: `(x, y) -> (y, x)`.
    Diagonal,
    /// The line `y = -x`: `(x, y) -> (-y, -x)`.
    AntiDiagonal,
}

impl ReflectionAxis {
    pub const ALL: [ReflectionAxis; 4] = [
        ReflectionAxis::Vertical,
        ReflectionAxis::Horizontal,
        ReflectionAxis::Diagonal,
        ReflectionAxis::AntiDiagonal,
    ];

    pub fn swaps_axes(self) -> bool {
        matches!(self, ReflectionAxis::Diagonal | ReflectionAxis::AntiDiagonal)
    }
}

impl fmt::Display for ReflectionAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReflectionAxis::Vertical => "vertical",
            ReflectionAxis::Horizontal => "horizontal",
            ReflectionAxis::Diagonal => "diagonal",
            ReflectionAxis::AntiDiagonal => "anti-diagonal",
        };
        write!(f, "{} reflection", name)
    }
}

impl FromStr for ReflectionAxis {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" | "v" | "y" => Ok(ReflectionAxis::Vertical),
            "horizontal" | "h" | "x" => Ok(ReflectionAxis::Horizontal),
            "diagonal" | "d" => Ok(ReflectionAxis::Diagonal),
            "anti-diagonal" | "antidiagonal" | "a" => Ok(ReflectionAxis::AntiDiagonal),
            _ => Err(ShapeError::UnknownVariant {
                kind: "reflection axis",
                value: s.to_string(),
                help: Some("Use vertical, horizontal, diagonal or anti-diagonal".to_string()),
            }),
        }
    }
}
