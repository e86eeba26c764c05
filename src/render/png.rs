//! PNG previews of canvases.
//!
//! Each canvas pixel becomes a `scale` x `scale` block, so small pixel art
//! stays crisp when enlarged.

use std::path::Path;

use image::{ImageBuffer, RgbaImage};

use crate::error::{Result, ShapeError};

use super::Canvas;

/// Render a canvas to an image, scaled by nearest neighbour.
///
/// A scale of 0 is treated as 1.
pub fn to_image(canvas: &Canvas, scale: u32) -> RgbaImage {
    let scale = scale.max(1);
    let width = canvas.width() as u32 * scale;
    let height = canvas.height() as u32 * scale;

    let mut img: RgbaImage = ImageBuffer::new(width, height);
    for (y, row) in canvas.rows().iter().enumerate() {
        for (x, &colour) in row.iter().enumerate() {
            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(x as u32 * scale + sx, y as u32 * scale + sy, colour.into());
                }
            }
        }
    }
    img
}

/// Write a canvas to a PNG file.
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    to_image(canvas, scale).save(path).map_err(|e| ShapeError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;
    tracing::debug!(path = %path.display(), scale, "wrote png");
    Ok(())
}
