//! Turning shapes into pixels you can look at.
//!
//! A [`Canvas`] clips shapes to a rectangle and keeps one colour per pixel.
//! Canvases can be dumped as ASCII art or written out as scaled PNGs.

mod canvas;
mod colour;
mod png;

pub use canvas::Canvas;
pub use colour::Colour;
pub use png::{to_image, write_png};
