//! A clipped pixel grid that shapes are drawn into.

use crate::geometry::{IntRect, IntVector2};
use crate::shapes::Shape;

use super::Colour;

/// A grid of colours covering a fixed rectangle of the plane.
///
/// Points outside the rectangle are clipped. Rows are stored bottom to top,
/// matching the y-up coordinate system; [`rows`](Self::rows) and
/// [`to_ascii`](Self::to_ascii) present them top to bottom for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    rect: IntRect,
    paper: Colour,
    pixels: Vec<Colour>,
}

impl Canvas {
    /// Blank canvas over `rect`, filled with `paper`.
    pub fn new(rect: IntRect, paper: Colour) -> Self {
        Self {
            rect,
            paper,
            pixels: vec![paper; rect.area()],
        }
    }

    /// Blank canvas just large enough for `shape`.
    pub fn fitting<S: Shape + ?Sized>(shape: &S, paper: Colour) -> Self {
        Self::new(shape.bounding_rect(), paper)
    }

    pub fn rect(&self) -> IntRect {
        self.rect
    }

    pub fn paper(&self) -> Colour {
        self.paper
    }

    pub fn width(&self) -> usize {
        self.rect.width() as usize
    }

    pub fn height(&self) -> usize {
        self.rect.height() as usize
    }

    fn index(&self, p: IntVector2) -> Option<usize> {
        if !self.rect.contains(p) {
            return None;
        }
        let offset = p - self.rect.min();
        Some(offset.y as usize * self.width() + offset.x as usize)
    }

    pub fn get(&self, p: IntVector2) -> Option<Colour> {
        self.index(p).map(|i| self.pixels[i])
    }

    /// Set one pixel; returns false if `p` is clipped.
    pub fn set(&mut self, p: IntVector2, colour: Colour) -> bool {
        match self.index(p) {
            Some(i) => {
                self.pixels[i] = colour;
                true
            }
            None => false,
        }
    }

    /// Paint every point of `shape` that lands on the canvas.
    ///
    /// Returns the number of points written. Points a shape visits twice
    /// (a self-crossing path) are counted twice.
    pub fn draw<S: Shape + ?Sized>(&mut self, shape: &S, colour: Colour) -> usize {
        let mut written = 0;
        for p in shape.points() {
            if self.set(p, colour) {
                written += 1;
            }
        }
        tracing::trace!(written, rect = %self.rect, "drew shape");
        written
    }

    /// Paint the shape's points back to the paper colour.
    pub fn erase<S: Shape + ?Sized>(&mut self, shape: &S) -> usize {
        let paper = self.paper;
        self.draw(shape, paper)
    }

    /// Number of pixels that differ from the paper.
    pub fn inked(&self) -> usize {
        self.pixels.iter().filter(|&&c| c != self.paper).count()
    }

    /// Rows of colours, top row first.
    pub fn rows(&self) -> Vec<Vec<Colour>> {
        let width = self.width().max(1);
        self.pixels
            .chunks(width)
            .rev()
            .map(|row| row.to_vec())
            .collect()
    }

    /// `#` for inked pixels and `.` for paper, top row first, rows joined by newlines.
    pub fn to_ascii(&self) -> String {
        self.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| if c == self.paper { '.' } else { '#' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
