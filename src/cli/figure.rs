//! Shared arguments describing the figure a command works on.

use std::fmt;

use clap::Args;

use crate::error::{Result, ShapeError};
use crate::geometry::{IntRect, IntVector2, ReflectionAxis, RotationAngle};
use crate::raster::{Line, Path};
use crate::shapes::{
    AnyShape, Diamond, Ellipse, IsometricCuboid, IsometricHexagon, IsometricRectangle, Points,
    Rectangle, RightAngleCorner, RightTriangle, Shape, ShapeKind, Transform,
};

/// What to rasterize and how to place it.
#[derive(Args, Debug, Clone)]
pub struct FigureArgs {
    /// `line`, `path`, or a shape kind (rectangle, ellipse, diamond, right-triangle,
    /// iso-rectangle, iso-cuboid, iso-hexagon)
    pub kind: String,

    /// First point or corner, as `x,y`
    #[arg(long, default_value = "0,0", allow_hyphen_values = true)]
    pub from: IntVector2,

    /// Last point or opposite corner, as `x,y`
    #[arg(long, allow_hyphen_values = true)]
    pub to: IntVector2,

    /// Intermediate points of a path (repeatable)
    #[arg(long, allow_hyphen_values = true)]
    pub via: Vec<IntVector2>,

    /// Fill the interior as well as the outline
    #[arg(long)]
    pub filled: bool,

    /// Corner holding a right triangle's right angle
    #[arg(long, default_value = "bottom-left")]
    pub right_angle: RightAngleCorner,

    /// Height of an isometric cuboid, in pixels
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    pub height: i32,

    /// Draw the hidden edges of an isometric cuboid
    #[arg(long)]
    pub back_edges: bool,

    /// Rotate anticlockwise about the origin (0, 90, 180 or 270)
    #[arg(long)]
    pub rotate: Option<RotationAngle>,

    /// Reflect about an axis through the origin (vertical, horizontal, diagonal, anti-diagonal)
    #[arg(long)]
    pub reflect: Option<ReflectionAxis>,
}

/// A line, a path, or one of the shape kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Figure {
    Line(Line),
    Path(Path),
    Shape(AnyShape),
}

impl FigureArgs {
    /// Build the figure, then apply the rotation and reflection in that order.
    pub fn build(&self) -> Result<Figure> {
        if !self.via.is_empty() && self.kind != "path" {
            return Err(ShapeError::InvalidParameter {
                message: format!("--via only applies to paths, not {}", self.kind),
                help: Some("Use `path` to draw through intermediate points".to_string()),
            });
        }
        let figure = match self.kind.as_str() {
            "line" => Figure::Line(Line::new(self.from, self.to)),
            "path" => {
                let points = std::iter::once(self.from)
                    .chain(self.via.iter().copied())
                    .chain(std::iter::once(self.to));
                Figure::Path(Path::from_points(points)?)
            }
            other => Figure::Shape(self.shape(other.parse()?)?),
        };
        tracing::debug!(%figure, "built figure");

        let figure = match self.rotate {
            Some(angle) => figure.rotate(angle)?,
            None => figure,
        };
        match self.reflect {
            Some(axis) => figure.reflect(axis),
            None => Ok(figure),
        }
    }

    fn shape(&self, kind: ShapeKind) -> Result<AnyShape> {
        let (a, b, filled) = (self.from, self.to, self.filled);
        Ok(match kind {
            ShapeKind::Rectangle => Rectangle::new(a, b, filled).into(),
            ShapeKind::Ellipse => Ellipse::new(a, b, filled).into(),
            ShapeKind::Diamond => Diamond::new(a, b, filled).into(),
            ShapeKind::RightTriangle => RightTriangle::new(a, b, self.right_angle, filled).into(),
            ShapeKind::IsometricRectangle => IsometricRectangle::new(a, b, filled).into(),
            ShapeKind::IsometricCuboid => {
                IsometricCuboid::new(a, b, self.height, filled, self.back_edges)?.into()
            }
            ShapeKind::IsometricHexagon => IsometricHexagon::new(a, b, filled).into(),
        })
    }
}

impl Figure {
    /// Short name used in status output.
    pub fn name(&self) -> &'static str {
        match self {
            Figure::Line(_) => "line",
            Figure::Path(_) => "path",
            Figure::Shape(shape) => shape.kind().name(),
        }
    }
}

impl Shape for Figure {
    fn bounding_rect(&self) -> IntRect {
        match self {
            Figure::Line(line) => line.bounding_rect(),
            Figure::Path(path) => path.bounding_rect(),
            Figure::Shape(shape) => shape.bounding_rect(),
        }
    }

    fn is_filled(&self) -> bool {
        match self {
            Figure::Shape(shape) => shape.is_filled(),
            _ => false,
        }
    }

    fn contains(&self, p: IntVector2) -> bool {
        match self {
            Figure::Line(line) => line.contains(p),
            Figure::Path(path) => path.contains(p),
            Figure::Shape(shape) => shape.contains(p),
        }
    }

    fn points(&self) -> Points<'_> {
        match self {
            Figure::Line(line) => Shape::points(line),
            Figure::Path(path) => Shape::points(path),
            Figure::Shape(shape) => shape.points(),
        }
    }
}

impl Transform for Figure {
    fn translate(&self, offset: IntVector2) -> Self {
        match self {
            Figure::Line(line) => Figure::Line(line.translate(offset)),
            Figure::Path(path) => Figure::Path(path.translate(offset)),
            Figure::Shape(shape) => Figure::Shape(shape.translate(offset)),
        }
    }

    fn rotate(&self, angle: RotationAngle) -> Result<Self> {
        Ok(match self {
            Figure::Line(line) => Figure::Line(line.rotate(angle)),
            Figure::Path(path) => Figure::Path(path.rotate(angle)),
            Figure::Shape(shape) => Figure::Shape(shape.rotate(angle)?),
        })
    }

    fn reflect(&self, axis: ReflectionAxis) -> Result<Self> {
        Ok(match self {
            Figure::Line(line) => Figure::Line(line.reflect(axis)),
            Figure::Path(path) => Figure::Path(path.reflect(axis)),
            Figure::Shape(shape) => Figure::Shape(shape.reflect(axis)?),
        })
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Line(line) => write!(f, "Line {} to {}", line.start(), line.end()),
            Figure::Path(path) => write!(
                f,
                "Path of {} lines from {} to {}",
                path.lines().len(),
                path.start(),
                path.end()
            ),
            Figure::Shape(shape) => fmt::Display::fmt(shape, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        figure: FigureArgs,
    }

    fn parse(args: &[&str]) -> FigureArgs {
        let argv = std::iter::once("pxshape").chain(args.iter().copied());
        Harness::try_parse_from(argv).unwrap().figure
    }

    #[test]
    fn test_builds_each_kind() {
        for kind in ShapeKind::ALL {
            let args = parse(&[kind.name(), "--to", "9,5"]);
            let figure = args.build().unwrap();
            assert_eq!(figure.name(), kind.name());
        }
        let line = parse(&["line", "--from", "-2,-1", "--to", "4,2"]).build().unwrap();
        assert_eq!(line, Figure::Line(Line::new(IntVector2::new(-2, -1), IntVector2::new(4, 2))));
    }

    #[test]
    fn test_path_through_via_points() {
        let args = parse(&["path", "--to", "0,4", "--via", "4,0", "--via", "4,4"]);
        let Figure::Path(path) = args.build().unwrap() else {
            panic!("expected a path");
        };
        assert_eq!(path.lines().len(), 3);
        assert_eq!(path.end(), IntVector2::new(0, 4));
    }

    #[test]
    fn test_via_rejected_for_shapes() {
        let args = parse(&["rectangle", "--to", "3,3", "--via", "1,1"]);
        assert!(matches!(args.build(), Err(ShapeError::InvalidParameter { .. })));
    }

    #[test]
    fn test_transforms_are_applied() {
        let args = parse(&["rect", "--to", "3,1", "--rotate", "90", "--reflect", "vertical"]);
        let figure = args.build().unwrap();
        // (3,1) -> rotate 90 -> (-1,3) -> reflect x -> (1,3)
        assert_eq!(
            figure.bounding_rect(),
            IntRect::new(IntVector2::new(0, 0), IntVector2::new(1, 3))
        );
    }

    #[test]
    fn test_unknown_kind_and_bad_height() {
        assert!(matches!(
            parse(&["star", "--to", "3,3"]).build(),
            Err(ShapeError::UnknownVariant { .. })
        ));
        assert!(matches!(
            parse(&["iso-cuboid", "--to", "8,0", "--height", "-2"]).build(),
            Err(ShapeError::InvalidParameter { .. })
        ));
    }
}
