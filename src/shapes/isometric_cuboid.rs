//! Isometric boxes: a bottom face, a raised copy of it and the vertical edges between them.

use std::collections::HashSet;
use std::fmt;

use super::{fill_label, IsometricRectangle, Points, Shape, Transform};
use crate::error::{Result, ShapeError};
use crate::geometry::{IntRect, IntVector2, ReflectionAxis, RotationAngle};
use crate::raster::Line;

/// An isometric cuboid standing on an isometric rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsometricCuboid {
    bottom_face: IsometricRectangle,
    top_face: IsometricRectangle,
    height: i32,
    filled: bool,
    show_back_edges: bool,
    vertical_edges: Vec<Line>,
}

impl IsometricCuboid {
    /// Cuboid on the base between `start` and `end`, raised by `height` pixels.
    pub fn new(
        start: IntVector2,
        end: IntVector2,
        height: i32,
        filled: bool,
        show_back_edges: bool,
    ) -> Result<Self> {
        if height < 0 {
            return Err(ShapeError::InvalidParameter {
                message: format!("cuboid height {} is negative", height),
                help: Some("Heights count pixels upwards from the base and must be 0 or more".to_string()),
            });
        }
        let bottom_face = IsometricRectangle::new(start, end, false);
        let top_face = bottom_face.translate(IntVector2::new(0, height));
        let vertical_edges = vertical_edges(&bottom_face, height, show_back_edges);
        tracing::debug!(
            %start,
            %end,
            height,
            edges = vertical_edges.len(),
            "assembled isometric cuboid"
        );
        Ok(Self {
            bottom_face,
            top_face,
            height,
            filled,
            show_back_edges,
            vertical_edges,
        })
    }

    pub fn bottom_face(&self) -> &IsometricRectangle {
        &self.bottom_face
    }

    pub fn top_face(&self) -> &IsometricRectangle {
        &self.top_face
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn shows_back_edges(&self) -> bool {
        self.show_back_edges
    }

    /// The vertical edges: left, right, front, then back if shown.
    ///
    /// That makes three, or four with back edges, except on a one-column base
    /// where the two sides coincide.
    pub fn vertical_edges(&self) -> &[Line] {
        &self.vertical_edges
    }

    pub fn with_filled(&self, filled: bool) -> Self {
        Self {
            filled,
            ..self.clone()
        }
    }

    pub fn with_height(&self, height: i32) -> Result<Self> {
        Self::new(
            self.bottom_face.start(),
            self.bottom_face.end(),
            height,
            self.filled,
            self.show_back_edges,
        )
    }

    pub fn with_back_edges(&self, show_back_edges: bool) -> Self {
        Self {
            show_back_edges,
            vertical_edges: vertical_edges(&self.bottom_face, self.height, show_back_edges),
            ..self.clone()
        }
    }

    /// Span of the solid cuboid in column `x`.
    fn column(&self, x: i32) -> Option<(i32, i32)> {
        self.bottom_face
            .column(x)
            .map(|(lo, hi)| (lo, hi + self.height))
    }

    fn bottom_edge_contains(&self, p: IntVector2) -> bool {
        if self.show_back_edges {
            self.bottom_face.contains(p)
        } else {
            self.bottom_face.lower_y(p.x).is_ok_and(|y| y == p.y)
        }
    }

    fn wireframe(&self) -> impl Iterator<Item = IntVector2> + '_ {
        let bottom: Points<'_> = if self.show_back_edges {
            self.bottom_face.points()
        } else {
            let (first, last) = self.bottom_face.x_span();
            Box::new((first..=last).filter_map(move |x| {
                self.bottom_face
                    .lower_y(x)
                    .ok()
                    .map(|y| IntVector2::new(x, y))
            }))
        };
        let edges = self.vertical_edges.iter().flat_map(Line::iter);
        let mut seen = HashSet::new();
        bottom
            .chain(self.top_face.points())
            .chain(edges)
            .filter(move |&p| seen.insert(p))
    }

    fn solid(&self) -> impl Iterator<Item = IntVector2> + '_ {
        let (first, last) = self.bottom_face.x_span();
        (first..=last).flat_map(move |x| {
            let (lo, hi) = self.column(x).unwrap_or((1, 0));
            (lo..=hi).map(move |y| IntVector2::new(x, y))
        })
    }

    fn unsupported(&self, transform: impl fmt::Display) -> ShapeError {
        ShapeError::UnsupportedTransform {
            shape: "IsometricCuboid",
            transform: transform.to_string(),
        }
    }
}

/// Column of the edge standing on the first run of `face` at its extreme row.
///
/// The front edge takes the left middle of an even run and the back edge the
/// right middle, so the two swap places under a half turn.
fn edge_column<F>(face: &IsometricRectangle, row: F, front: bool) -> Option<i32>
where
    F: Fn(i32) -> Option<i32>,
{
    let (first, last) = face.x_span();
    let rows: Vec<(i32, i32)> = (first..=last)
        .filter_map(|x| row(x).map(|y| (x, y)))
        .collect();
    let ys = rows.iter().map(|&(_, y)| y);
    let target = if front { ys.min()? } else { ys.max()? };
    let mut run = rows
        .iter()
        .skip_while(|&&(_, y)| y != target)
        .take_while(|&&(_, y)| y == target);
    let (start, _) = *run.next()?;
    let len = 1 + run.count() as i32;
    Some(if front { start + (len - 1) / 2 } else { start + len / 2 })
}

/// Left and right sides, the front edge, then the back edge if shown.
fn vertical_edges(face: &IsometricRectangle, height: i32, show_back_edges: bool) -> Vec<Line> {
    let (first, last) = face.x_span();
    let mut edges = Vec::new();
    for x in [first, last] {
        if let Some((lo, hi)) = face.column(x) {
            edges.push(Line::new(
                IntVector2::new(x, lo),
                IntVector2::new(x, hi + height),
            ));
        }
        if first == last {
            break;
        }
    }
    if let Some(x) = edge_column(face, |x| face.lower_y(x).ok(), true) {
        if let Ok(lo) = face.lower_y(x) {
            edges.push(Line::new(IntVector2::new(x, lo), IntVector2::new(x, lo + height)));
        }
    }
    if show_back_edges {
        if let Some(x) = edge_column(face, |x| face.upper_y(x).ok(), false) {
            if let Ok(hi) = face.upper_y(x) {
                edges.push(Line::new(IntVector2::new(x, hi), IntVector2::new(x, hi + height)));
            }
        }
    }
    edges
}

impl Shape for IsometricCuboid {
    fn bounding_rect(&self) -> IntRect {
        self.bottom_face
            .bounding_rect()
            .union(&self.top_face.bounding_rect())
    }

    fn is_filled(&self) -> bool {
        self.filled
    }

    fn contains(&self, p: IntVector2) -> bool {
        if self.filled {
            return self
                .column(p.x)
                .is_some_and(|(lo, hi)| (lo..=hi).contains(&p.y));
        }
        self.bottom_edge_contains(p)
            || self.top_face.contains(p)
            || self.vertical_edges.iter().any(|e| e.contains(p))
    }

    fn points(&self) -> Points<'_> {
        if self.filled {
            Box::new(self.solid())
        } else {
            Box::new(self.wireframe())
        }
    }
}

impl Transform for IsometricCuboid {
    fn translate(&self, offset: IntVector2) -> Self {
        let bottom = self.bottom_face.translate(offset);
        Self {
            bottom_face: bottom,
            top_face: self.top_face.translate(offset),
            vertical_edges: self
                .vertical_edges
                .iter()
                .map(|e| e.translate(offset))
                .collect(),
            ..self.clone()
        }
    }

    /// Only the identity keeps the faces horizontal.
    fn rotate(&self, angle: RotationAngle) -> Result<Self> {
        match angle {
            RotationAngle::Zero => Ok(self.clone()),
            _ => Err(self.unsupported(angle)),
        }
    }

    /// Only a left-right flip keeps the cuboid standing on its base.
    ///
    /// The faces mirror exactly. A front or back edge on an even run lands on
    /// the same side of its run as before, one column off the mirror image.
    fn reflect(&self, axis: ReflectionAxis) -> Result<Self> {
        match axis {
            ReflectionAxis::Vertical => Self::new(
                self.bottom_face.start().reflect(axis),
                self.bottom_face.end().reflect(axis),
                self.height,
                self.filled,
                self.show_back_edges,
            ),
            _ => Err(self.unsupported(axis)),
        }
    }
}

impl fmt::Display for IsometricCuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IsometricCuboid {} to {}, height {}, {}{}",
            self.bottom_face.start(),
            self.bottom_face.end(),
            self.height,
            fill_label(self.filled),
            if self.show_back_edges { " with back edges" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i32, y: i32) -> IntVector2 {
        IntVector2::new(x, y)
    }

    #[test]
    fn test_negative_height_is_rejected() {
        let err = IsometricCuboid::new(v(0, 0), v(7, 0), -1, false, false).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidParameter { .. }));
    }

    #[test]
    fn test_wireframe_counts() {
        let cuboid = IsometricCuboid::new(v(0, 0), v(7, 0), 3, false, false).unwrap();
        assert_eq!(cuboid.points().count(), 28);
        assert_eq!(cuboid.vertical_edges().len(), 3);

        let with_back = cuboid.with_back_edges(true);
        assert_eq!(with_back.points().count(), 36);
        assert_eq!(with_back.vertical_edges().len(), 4);

        let solid = cuboid.with_filled(true);
        assert_eq!(solid.points().count(), 48);
    }

    #[test]
    fn test_one_edge_per_corner_run() {
        // The bottom and top corners are two-pixel runs.
        let cuboid = IsometricCuboid::new(v(0, 0), v(7, 0), 3, false, true).unwrap();
        assert_eq!(
            cuboid.vertical_edges(),
            &[
                Line::new(v(0, 0), v(0, 3)),
                Line::new(v(7, 0), v(7, 3)),
                Line::new(v(3, -2), v(3, 1)),
                Line::new(v(4, 2), v(4, 5)),
            ]
        );
    }

    #[test]
    fn test_edge_counts_across_bases() {
        for dx in 1..=16 {
            for dy in -8..=8 {
                for back in [false, true] {
                    let cuboid = IsometricCuboid::new(v(0, 0), v(dx, dy), 3, false, back).unwrap();
                    let expected = if back { 4 } else { 3 };
                    assert_eq!(cuboid.vertical_edges().len(), expected, "{cuboid}");
                }
            }
        }
    }

    #[test]
    fn test_top_bottom_base() {
        let cuboid = IsometricCuboid::new(v(0, 0), v(2, 6), 2, false, false).unwrap();
        assert_eq!(cuboid.points().count(), 36);
        // Left, right and a single front edge under the bottom vertex.
        assert_eq!(cuboid.vertical_edges().len(), 3);
        assert_eq!(cuboid.vertical_edges()[2], Line::new(v(0, 0), v(0, 2)));
    }

    #[test]
    fn test_points_are_unique_and_contained() {
        for back in [false, true] {
            for filled in [false, true] {
                let cuboid = IsometricCuboid::new(v(3, 1), v(-6, 4), 5, filled, back).unwrap();
                let points: Vec<_> = cuboid.points().collect();
                let unique: HashSet<_> = points.iter().copied().collect();
                assert_eq!(points.len(), unique.len());
                for p in &points {
                    assert!(cuboid.contains(*p), "{p}");
                }
                let rect = cuboid.bounding_rect();
                let contained = rect.points().filter(|&p| cuboid.contains(p)).count();
                assert_eq!(contained, points.len());
            }
        }
    }

    #[test]
    fn test_hidden_back_edges_are_not_contained() {
        let cuboid = IsometricCuboid::new(v(0, 0), v(7, 0), 3, false, false).unwrap();
        // Top of the bottom face is hidden behind the box.
        assert!(!cuboid.contains(v(2, 1)));
        assert!(cuboid.with_back_edges(true).contains(v(2, 1)));
    }

    #[test]
    fn test_flat_cuboid_is_its_face() {
        let cuboid = IsometricCuboid::new(v(0, 0), v(9, 2), 0, true, false).unwrap();
        let face = IsometricRectangle::new(v(0, 0), v(9, 2), true);
        assert_eq!(
            cuboid.points().collect::<HashSet<_>>(),
            face.points().collect::<HashSet<_>>()
        );
    }

    #[test]
    fn test_transforms() {
        // Single-pixel corner runs, so the edges mirror exactly too.
        let cuboid = IsometricCuboid::new(v(0, 0), v(10, 2), 4, false, true).unwrap();
        let moved = cuboid.translate(v(2, 3));
        let expected: HashSet<_> = cuboid.points().map(|p| p + v(2, 3)).collect();
        assert_eq!(moved.points().collect::<HashSet<_>>(), expected);

        let mirrored = cuboid.reflect(ReflectionAxis::Vertical).unwrap();
        let expected: HashSet<_> = cuboid
            .points()
            .map(|p| p.reflect(ReflectionAxis::Vertical))
            .collect();
        assert_eq!(mirrored.points().collect::<HashSet<_>>(), expected);

        assert!(cuboid.rotate(RotationAngle::OneEighty).is_err());
        assert!(cuboid.reflect(ReflectionAxis::Horizontal).is_err());
    }
}
