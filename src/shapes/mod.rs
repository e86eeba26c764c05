//! Shapes built on the raster primitives.
//!
//! Every shape exposes the same capabilities through [`Shape`]: a bounding
//! rectangle, a containment test and a lazy, restartable pixel sequence.
//! [`AnyShape`] closes the set of shape kinds for code that needs to match on
//! them.

mod diamond;
mod ellipse;
mod isometric_cuboid;
mod isometric_hexagon;
mod isometric_rectangle;
mod rectangle;
mod right_triangle;

use std::fmt;
use std::str::FromStr;

pub use diamond::Diamond;
pub use ellipse::Ellipse;
pub use isometric_cuboid::IsometricCuboid;
pub use isometric_hexagon::IsometricHexagon;
pub use isometric_rectangle::{CornerLayout, IsometricCorners, IsometricRectangle};
pub use rectangle::Rectangle;
pub use right_triangle::{RightAngleCorner, RightTriangle};

use crate::error::{Result, ShapeError};
use crate::geometry::{IntRect, IntVector2, ReflectionAxis, RotationAngle};
use crate::raster::{Line, Path};

/// Boxed pixel sequence returned by [`Shape::points`].
pub type Points<'a> = Box<dyn Iterator<Item = IntVector2> + 'a>;

/// Common capabilities of everything that can be drawn.
pub trait Shape {
    /// Smallest rectangle containing every pixel of the shape.
    fn bounding_rect(&self) -> IntRect;

    /// True if the interior is drawn as well as the outline.
    fn is_filled(&self) -> bool;

    fn contains(&self, p: IntVector2) -> bool;

    /// Every pixel of the shape, each exactly once unless documented otherwise.
    fn points(&self) -> Points<'_>;

    fn count(&self) -> usize {
        self.points().count()
    }
}

/// Geometric transforms that produce a shape of the same kind.
///
/// Rotations and reflections are about the origin. Shapes that cannot
/// represent a transformed copy of themselves return
/// [`ShapeError::UnsupportedTransform`].
pub trait Transform: Sized {
    fn translate(&self, offset: IntVector2) -> Self;

    fn rotate(&self, angle: RotationAngle) -> Result<Self>;

    fn reflect(&self, axis: ReflectionAxis) -> Result<Self>;
}

impl Shape for Line {
    fn bounding_rect(&self) -> IntRect {
        Line::bounding_rect(self)
    }

    fn is_filled(&self) -> bool {
        false
    }

    fn contains(&self, p: IntVector2) -> bool {
        Line::contains(self, p)
    }

    fn points(&self) -> Points<'_> {
        Box::new(self.iter())
    }

    fn count(&self) -> usize {
        Line::count(self)
    }
}

impl Transform for Line {
    fn translate(&self, offset: IntVector2) -> Self {
        Line::translate(self, offset)
    }

    fn rotate(&self, angle: RotationAngle) -> Result<Self> {
        Ok(Line::rotate(self, angle))
    }

    fn reflect(&self, axis: ReflectionAxis) -> Result<Self> {
        Ok(Line::reflect(self, axis))
    }
}

/// Paths may revisit pixels; [`Shape::points`] yields one entry per visit.
impl Shape for Path {
    fn bounding_rect(&self) -> IntRect {
        Path::bounding_rect(self)
    }

    fn is_filled(&self) -> bool {
        false
    }

    fn contains(&self, p: IntVector2) -> bool {
        Path::contains(self, p)
    }

    fn points(&self) -> Points<'_> {
        Box::new(self.iter())
    }

    fn count(&self) -> usize {
        Path::count(self)
    }
}

impl Transform for Path {
    fn translate(&self, offset: IntVector2) -> Self {
        Path::translate(self, offset)
    }

    fn rotate(&self, angle: RotationAngle) -> Result<Self> {
        Ok(Path::rotate(self, angle))
    }

    fn reflect(&self, axis: ReflectionAxis) -> Result<Self> {
        Ok(Path::reflect(self, axis))
    }
}

/// The kinds of shape in [`AnyShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Diamond,
    RightTriangle,
    IsometricRectangle,
    IsometricCuboid,
    IsometricHexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Rectangle,
        ShapeKind::Ellipse,
        ShapeKind::Diamond,
        ShapeKind::RightTriangle,
        ShapeKind::IsometricRectangle,
        ShapeKind::IsometricCuboid,
        ShapeKind::IsometricHexagon,
    ];

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Diamond => "diamond",
            ShapeKind::RightTriangle => "right-triangle",
            ShapeKind::IsometricRectangle => "iso-rectangle",
            ShapeKind::IsometricCuboid => "iso-cuboid",
            ShapeKind::IsometricHexagon => "iso-hexagon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let kind = match normalized.as_str() {
            "rectangle" | "rect" => ShapeKind::Rectangle,
            "ellipse" | "circle" => ShapeKind::Ellipse,
            "diamond" | "rhombus" => ShapeKind::Diamond,
            "right-triangle" | "triangle" => ShapeKind::RightTriangle,
            "iso-rectangle" | "isometric-rectangle" => ShapeKind::IsometricRectangle,
            "iso-cuboid" | "isometric-cuboid" | "cuboid" => ShapeKind::IsometricCuboid,
            "iso-hexagon" | "isometric-hexagon" | "hexagon" => ShapeKind::IsometricHexagon,
            _ => {
                let names: Vec<&str> = ShapeKind::ALL.iter().map(|k| k.name()).collect();
                return Err(ShapeError::UnknownVariant {
                    kind: "shape kind",
                    value: s.to_string(),
                    help: Some(format!("Expected one of: {}", names.join(", "))),
                });
            }
        };
        Ok(kind)
    }
}

/// Any one of the shape kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyShape {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Diamond(Diamond),
    RightTriangle(RightTriangle),
    IsometricRectangle(IsometricRectangle),
    IsometricCuboid(IsometricCuboid),
    IsometricHexagon(IsometricHexagon),
}

macro_rules! dispatch {
    ($value:expr, $shape:ident => $body:expr) => {
        match $value {
            AnyShape::Rectangle($shape) => $body,
            AnyShape::Ellipse($shape) => $body,
            AnyShape::Diamond($shape) => $body,
            AnyShape::RightTriangle($shape) => $body,
            AnyShape::IsometricRectangle($shape) => $body,
            AnyShape::IsometricCuboid($shape) => $body,
            AnyShape::IsometricHexagon($shape) => $body,
        }
    };
}

macro_rules! dispatch_wrap {
    ($value:expr, $shape:ident => $body:expr) => {
        match $value {
            AnyShape::Rectangle($shape) => AnyShape::Rectangle($body),
            AnyShape::Ellipse($shape) => AnyShape::Ellipse($body),
            AnyShape::Diamond($shape) => AnyShape::Diamond($body),
            AnyShape::RightTriangle($shape) => AnyShape::RightTriangle($body),
            AnyShape::IsometricRectangle($shape) => AnyShape::IsometricRectangle($body),
            AnyShape::IsometricCuboid($shape) => AnyShape::IsometricCuboid($body),
            AnyShape::IsometricHexagon($shape) => AnyShape::IsometricHexagon($body),
        }
    };
}

impl AnyShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            AnyShape::Rectangle(_) => ShapeKind::Rectangle,
            AnyShape::Ellipse(_) => ShapeKind::Ellipse,
            AnyShape::Diamond(_) => ShapeKind::Diamond,
            AnyShape::RightTriangle(_) => ShapeKind::RightTriangle,
            AnyShape::IsometricRectangle(_) => ShapeKind::IsometricRectangle,
            AnyShape::IsometricCuboid(_) => ShapeKind::IsometricCuboid,
            AnyShape::IsometricHexagon(_) => ShapeKind::IsometricHexagon,
        }
    }
}

impl Shape for AnyShape {
    fn bounding_rect(&self) -> IntRect {
        dispatch!(self, s => s.bounding_rect())
    }

    fn is_filled(&self) -> bool {
        dispatch!(self, s => s.is_filled())
    }

    fn contains(&self, p: IntVector2) -> bool {
        dispatch!(self, s => s.contains(p))
    }

    fn points(&self) -> Points<'_> {
        dispatch!(self, s => s.points())
    }

    fn count(&self) -> usize {
        dispatch!(self, s => s.count())
    }
}

impl Transform for AnyShape {
    fn translate(&self, offset: IntVector2) -> Self {
        dispatch_wrap!(self, s => s.translate(offset))
    }

    fn rotate(&self, angle: RotationAngle) -> Result<Self> {
        Ok(dispatch_wrap!(self, s => s.rotate(angle)?))
    }

    fn reflect(&self, axis: ReflectionAxis) -> Result<Self> {
        Ok(dispatch_wrap!(self, s => s.reflect(axis)?))
    }
}

impl fmt::Display for AnyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, s => fmt::Display::fmt(s, f))
    }
}

macro_rules! impl_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for AnyShape {
                fn from(shape: $variant) -> Self {
                    AnyShape::$variant(shape)
                }
            }
        )*
    };
}

impl_from!(
    Rectangle,
    Ellipse,
    Diamond,
    RightTriangle,
    IsometricRectangle,
    IsometricCuboid,
    IsometricHexagon
);

/// Format the `filled`/`outline` suffix shared by shape `Display` impls.
pub(crate) fn fill_label(filled: bool) -> &'static str {
    if filled {
        "filled"
    } else {
        "outline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i32, y: i32) -> IntVector2 {
        IntVector2::new(x, y)
    }

    #[test]
    fn test_parse_shape_kind() {
        assert_eq!("rect".parse::<ShapeKind>().unwrap(), ShapeKind::Rectangle);
        assert_eq!("Iso_Cuboid".parse::<ShapeKind>().unwrap(), ShapeKind::IsometricCuboid);
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_unknown_kind_lists_names() {
        let err = "star".parse::<ShapeKind>().unwrap_err();
        match err {
            ShapeError::UnknownVariant { kind, value, help } => {
                assert_eq!(kind, "shape kind");
                assert_eq!(value, "star");
                assert!(help.unwrap().contains("iso-hexagon"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_any_shape_delegates() {
        let shape: AnyShape = Rectangle::new(v(0, 0), v(2, 2), false).into();
        assert_eq!(shape.kind(), ShapeKind::Rectangle);
        assert_eq!(shape.count(), 8);
        assert!(!shape.contains(v(1, 1)));
        assert_eq!(shape.bounding_rect(), IntRect::new(v(0, 0), v(2, 2)));

        let moved = shape.translate(v(1, 1));
        assert!(moved.contains(v(3, 3)));
    }

    #[test]
    fn test_any_shape_propagates_unsupported_transform() {
        let shape: AnyShape = IsometricRectangle::new(v(0, 0), v(8, 2), false).into();
        assert!(matches!(
            shape.rotate(RotationAngle::Ninety),
            Err(ShapeError::UnsupportedTransform { .. })
        ));
        assert!(shape.rotate(RotationAngle::OneEighty).is_ok());
    }

    #[test]
    fn test_line_and_path_are_shapes() {
        let line = Line::new(v(0, 0), v(4, 2));
        assert_eq!(Shape::count(&line), 5);
        let path = Path::from_points([v(0, 0), v(2, 0), v(2, 2)]).unwrap();
        assert_eq!(Shape::points(&path).count(), 5);
        assert!(!Shape::is_filled(&path));
    }
}
