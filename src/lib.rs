//! pxshape - Pixel-perfect rasterization for pixel art
//!
//! Turns lines, paths and shapes defined by integer points into exact sets of
//! pixels. Every shape offers a bounding rectangle, a containment test and a
//! lazy pixel sequence, and can be translated, rotated and reflected.
//!
//! Coordinates have y pointing up and rotations are anticlockwise.

pub mod cli;
pub mod error;
pub mod geometry;
pub mod output;
pub mod raster;
pub mod render;
pub mod shapes;

pub use error::{Result, ShapeError};
pub use geometry::{IntRect, IntVector2, ReflectionAxis, RotationAngle};
pub use raster::{Line, LineIter, Path, PathIter};
pub use render::{write_png, Canvas, Colour};
pub use shapes::{
    AnyShape, CornerLayout, Diamond, Ellipse, IsometricCorners, IsometricCuboid, IsometricHexagon,
    IsometricRectangle, Rectangle, RightAngleCorner, RightTriangle, Shape, ShapeKind, Transform,
};
