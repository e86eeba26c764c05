//! Integer geometry primitives.
//!
//! Coordinates address pixel centres with the y axis pointing up, so the
//! bottom-left pixel of a rectangle is its minimum corner.

mod rect;
mod transform;
mod vector;

pub use rect::IntRect;
pub use transform::{ReflectionAxis, RotationAngle};
pub use vector::IntVector2;
