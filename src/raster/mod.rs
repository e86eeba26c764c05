//! Rasterization of lines and paths.

mod line;
mod path;

pub use line::{Line, LineIter};
pub use path::{Path, PathIter};
