//! Connected sequences of lines.
//!
//! A [`Path`] chains [`Line`]s end to start. Consecutive lines may share
//! their junction pixel or meet diagonally; either way every pixel is
//! enumerated once per visit. Loops (paths ending next to where they began)
//! support winding-number containment tests.

use std::collections::{HashMap, HashSet};
use std::iter::FusedIterator;

use super::{Line, LineIter};
use crate::error::{Result, ShapeError};
use crate::geometry::{IntRect, IntVector2, ReflectionAxis, RotationAngle};

/// An ordered, connected sequence of one or more lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    lines: Vec<Line>,
}

impl Path {
    /// Join consecutive points with lines. A single point gives a one-pixel path.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = IntVector2>,
    {
        let points: Vec<IntVector2> = points.into_iter().collect();
        let lines = match points.as_slice() {
            [] => return Err(ShapeError::EmptyInput { what: "path" }),
            [p] => vec![Line::point(*p)],
            _ => points.windows(2).map(|w| Line::new(w[0], w[1])).collect(),
        };
        Ok(Self { lines })
    }

    /// Build from lines that already meet end to start.
    pub fn from_lines<I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = Line>,
    {
        let lines: Vec<Line> = lines.into_iter().collect();
        if lines.is_empty() {
            return Err(ShapeError::EmptyInput { what: "path" });
        }
        for (index, pair) in lines.windows(2).enumerate() {
            if !pair[0].end().is_adjacent(pair[1].start()) {
                return Err(ShapeError::Disconnected {
                    index,
                    end: pair[0].end(),
                    start: pair[1].start(),
                });
            }
        }
        Ok(Self { lines })
    }

    /// Wrap lines that meet end to start by construction.
    pub(crate) fn from_connected(lines: Vec<Line>) -> Self {
        debug_assert!(!lines.is_empty());
        debug_assert!(lines.windows(2).all(|w| w[0].end().is_adjacent(w[1].start())));
        Self { lines }
    }

    /// Join paths end to start, under the same adjacency rule as [`Path::from_lines`].
    pub fn concat<I>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = Path>,
    {
        Self::from_lines(paths.into_iter().flat_map(|p| p.lines))
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn start(&self) -> IntVector2 {
        self.lines[0].start()
    }

    pub fn end(&self) -> IntVector2 {
        self.lines[self.lines.len() - 1].end()
    }

    /// True if the path ends within one pixel of its start.
    pub fn is_loop(&self) -> bool {
        self.start().is_adjacent(self.end())
    }

    /// True if line `k` starts on the pixel line `k - 1` ended on.
    fn shares_junction(&self, k: usize) -> bool {
        k > 0 && self.lines[k - 1].end() == self.lines[k].start()
    }

    fn raw_count(&self) -> usize {
        (0..self.lines.len())
            .map(|k| self.lines[k].count() - usize::from(self.shares_junction(k)))
            .sum()
    }

    /// True if enumeration drops the final pixel because it repeats the first.
    fn drops_closing_pixel(&self) -> bool {
        self.start() == self.end() && self.raw_count() > 1
    }

    /// Number of pixels enumerated, counting repeat visits.
    pub fn count(&self) -> usize {
        self.raw_count() - usize::from(self.drops_closing_pixel())
    }

    fn count_where<F, G>(&self, touches: F, pixels_in: G, on_axis: impl Fn(IntVector2) -> bool) -> usize
    where
        F: Fn(&Line) -> bool,
        G: Fn(&Line) -> usize,
    {
        let mut total = 0;
        for (k, line) in self.lines.iter().enumerate() {
            if !touches(line) {
                continue;
            }
            total += pixels_in(line);
            if self.shares_junction(k) && on_axis(line.start()) {
                total -= 1;
            }
        }
        if self.drops_closing_pixel() && on_axis(self.end()) {
            total -= 1;
        }
        total
    }

    /// Number of enumerated pixels in column `x`.
    pub fn count_on_x(&self, x: i32) -> usize {
        self.count_where(
            |line| line.bounding_rect().x_range().contains(&x),
            |line| line.index_range_at_x(x).map_or(0, |r| r.count()),
            |p| p.x == x,
        )
    }

    /// Number of enumerated pixels in row `y`.
    pub fn count_on_y(&self, y: i32) -> usize {
        self.count_where(
            |line| line.bounding_rect().y_range().contains(&y),
            |line| line.index_range_at_y(y).map_or(0, |r| r.count()),
            |p| p.y == y,
        )
    }

    fn extreme<F>(&self, query: F, reduce: fn(i32, i32) -> i32, err: ShapeError) -> Result<i32>
    where
        F: Fn(&Line) -> Result<i32>,
    {
        self.lines
            .iter()
            .filter_map(|line| query(line).ok())
            .reduce(reduce)
            .ok_or(err)
    }

    fn x_range_error(&self, x: i32) -> ShapeError {
        let rect = self.bounding_rect();
        ShapeError::out_of_range("x", x, rect.min_x(), rect.max_x())
    }

    fn y_range_error(&self, y: i32) -> ShapeError {
        let rect = self.bounding_rect();
        ShapeError::out_of_range("y", y, rect.min_y(), rect.max_y())
    }

    /// Smallest x of any pixel in row `y`.
    pub fn min_x(&self, y: i32) -> Result<i32> {
        self.extreme(|l| l.min_x(y), i32::min, self.y_range_error(y))
    }

    /// Largest x of any pixel in row `y`.
    pub fn max_x(&self, y: i32) -> Result<i32> {
        self.extreme(|l| l.max_x(y), i32::max, self.y_range_error(y))
    }

    /// Smallest y of any pixel in column `x`.
    pub fn min_y(&self, x: i32) -> Result<i32> {
        self.extreme(|l| l.min_y(x), i32::min, self.x_range_error(x))
    }

    /// Largest y of any pixel in column `x`.
    pub fn max_y(&self, x: i32) -> Result<i32> {
        self.extreme(|l| l.max_y(x), i32::max, self.x_range_error(x))
    }

    pub fn bounding_rect(&self) -> IntRect {
        self.lines
            .iter()
            .skip(1)
            .fold(self.lines[0].bounding_rect(), |acc, l| acc.union(&l.bounding_rect()))
    }

    pub fn contains(&self, p: IntVector2) -> bool {
        self.lines.iter().any(|l| l.contains(p))
    }

    pub fn iter(&self) -> PathIter<'_> {
        PathIter {
            lines: &self.lines,
            next_line: 1,
            current: self.lines[0].iter(),
            previous: None,
            remaining: self.count(),
        }
    }

    /// True if enumeration visits some pixel more than once.
    pub fn self_intersects(&self) -> bool {
        let mut seen = HashSet::new();
        self.iter().any(|p| !seen.insert(p))
    }

    /// True if the path is a loop whose revisits never cross.
    ///
    /// A pixel visited twice is a crossing when the neighbours of one visit
    /// separate the neighbours of the other around that pixel. Visits that
    /// share a neighbour run alongside each other and are not crossings.
    pub fn is_simple_polygon(&self) -> bool {
        if !self.is_loop() {
            return false;
        }
        let points: Vec<IntVector2> = self.iter().collect();
        let n = points.len();
        if n < 3 {
            return !self.self_intersects();
        }

        let mut visits: HashMap<IntVector2, Vec<(usize, usize)>> = HashMap::new();
        for i in 0..n {
            let p = points[i];
            let before = direction_index(points[(i + n - 1) % n] - p);
            let after = direction_index(points[(i + 1) % n] - p);
            if let (Some(before), Some(after)) = (before, after) {
                visits.entry(p).or_default().push((before, after));
            }
        }

        visits.values().filter(|v| v.len() > 1).all(|v| {
            v.iter().enumerate().all(|(i, &a)| {
                v[i + 1..].iter().all(|&b| !visits_cross(a, b))
            })
        })
    }

    /// Net anticlockwise turns of the loop around `p`.
    ///
    /// The loop is treated as the polygon through its pixel centres, and
    /// counted against a ray running left from `p`. An edge crosses the ray
    /// when it spans `[p.y, p.y + 1)` in its direction of travel, which merges
    /// horizontal runs and ignores local extrema without special cases.
    pub fn winding_number(&self, p: IntVector2) -> Result<i32> {
        if !self.is_loop() {
            return Err(ShapeError::NotALoop);
        }
        if self.contains(p) {
            return Err(ShapeError::PointOnPath { point: p });
        }

        let mut winding = 0;
        for line in &self.lines {
            winding += line_crossing(line, p);
        }
        for pair in self.lines.windows(2) {
            if pair[0].end() != pair[1].start() {
                winding += edge_crossing(pair[0].end(), pair[1].start(), p);
            }
        }
        if self.end() != self.start() {
            winding += edge_crossing(self.end(), self.start(), p);
        }
        Ok(winding)
    }

    /// Lines in the opposite order, each reversed.
    pub fn reverse(&self) -> Self {
        Self {
            lines: self.lines.iter().rev().map(Line::reverse).collect(),
        }
    }

    pub fn translate(&self, offset: IntVector2) -> Self {
        self.map_lines(|l| l.translate(offset))
    }

    pub fn rotate(&self, angle: RotationAngle) -> Self {
        self.map_lines(|l| l.rotate(angle))
    }

    pub fn reflect(&self, axis: ReflectionAxis) -> Self {
        self.map_lines(|l| l.reflect(axis))
    }

    fn map_lines(&self, f: impl Fn(&Line) -> Line) -> Self {
        Self {
            lines: self.lines.iter().map(f).collect(),
        }
    }
}

/// Crossing of the leftward ray from `p` by the edges inside one line.
///
/// Edges within a line step by at most one row, so the only crossing is the
/// edge leaving row `p.y`: after the last pixel on that row when going up,
/// and into the first pixel on it when going down.
fn line_crossing(line: &Line, p: IntVector2) -> i32 {
    let (start, end) = (line.start(), line.end());
    if start.y == end.y {
        return 0;
    }
    let upward = end.y > start.y;
    let (low, high) = if upward { (start.y, end.y) } else { (end.y, start.y) };
    if p.y < low || p.y >= high {
        return 0;
    }
    let Ok(range) = line.index_range_at_y(p.y) else {
        return 0;
    };
    let index = if upward { *range.end() } else { *range.start() };
    match line.get(index) {
        Some(q) if q.x < p.x => {
            if upward {
                -1
            } else {
                1
            }
        }
        _ => 0,
    }
}

/// Crossing of the leftward ray from `p` by the single king-move edge `a -> b`.
fn edge_crossing(a: IntVector2, b: IntVector2, p: IntVector2) -> i32 {
    if a.y <= p.y && p.y < b.y {
        if a.x < p.x {
            return -1;
        }
    } else if b.y <= p.y && p.y < a.y && b.x < p.x {
        return 1;
    }
    0
}

/// Position of a king move in [`IntVector2::KING_MOVES`].
fn direction_index(d: IntVector2) -> Option<usize> {
    IntVector2::KING_MOVES.iter().position(|&m| m == d)
}

/// True if the direction pairs `a` and `b` alternate around the compass.
fn visits_cross(a: (usize, usize), b: (usize, usize)) -> bool {
    let shared = [a.0, a.1].iter().any(|d| *d == b.0 || *d == b.1);
    if shared {
        return false;
    }
    // Strictly between a.0 and a.1 going clockwise.
    let between = |d: usize| {
        let span = (a.1 + 8 - a.0) % 8;
        let offset = (d + 8 - a.0) % 8;
        offset > 0 && offset < span
    };
    between(b.0) != between(b.1)
}

/// Iterator over the pixels of a [`Path`].
///
/// Junction pixels shared by consecutive lines appear once, and a loop that
/// returns to its first pixel does not repeat it.
#[derive(Debug, Clone)]
pub struct PathIter<'a> {
    lines: &'a [Line],
    next_line: usize,
    current: LineIter,
    previous: Option<IntVector2>,
    remaining: usize,
}

impl Iterator for PathIter<'_> {
    type Item = IntVector2;

    fn next(&mut self) -> Option<IntVector2> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            match self.current.next() {
                Some(p) if Some(p) == self.previous => continue,
                Some(p) => {
                    self.previous = Some(p);
                    self.remaining -= 1;
                    return Some(p);
                }
                None => {
                    let line = self.lines.get(self.next_line)?;
                    self.current = line.iter();
                    self.next_line += 1;
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PathIter<'_> {}

impl FusedIterator for PathIter<'_> {}

impl<'a> IntoIterator for &'a Path {
    type Item = IntVector2;
    type IntoIter = PathIter<'a>;

    fn into_iter(self) -> PathIter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i32, y: i32) -> IntVector2 {
        IntVector2::new(x, y)
    }

    fn square() -> Path {
        Path::from_points([v(0, 0), v(3, 0), v(3, 3), v(0, 3), v(0, 0)]).unwrap()
    }

    #[test]
    fn test_from_points_single() {
        let path = Path::from_points([v(2, 2)]).unwrap();
        assert_eq!(path.iter().collect::<Vec<_>>(), vec![v(2, 2)]);
        assert!(path.is_loop());
        assert_eq!(path.count(), 1);
    }

    #[test]
    fn test_from_points_empty() {
        let err = Path::from_points(Vec::new()).unwrap_err();
        assert_eq!(err, ShapeError::EmptyInput { what: "path" });
    }

    #[test]
    fn test_from_lines_rejects_gap() {
        let err = Path::from_lines([
            Line::new(v(0, 0), v(3, 0)),
            Line::new(v(4, 1), v(6, 1)),
            Line::new(v(8, 1), v(9, 1)),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ShapeError::Disconnected {
                index: 1,
                end: v(6, 1),
                start: v(8, 1)
            }
        );
    }

    #[test]
    fn test_junctions_enumerate_once() {
        let path = Path::from_points([v(0, 0), v(2, 0), v(2, 2)]).unwrap();
        let points: Vec<_> = path.iter().collect();
        assert_eq!(points, vec![v(0, 0), v(1, 0), v(2, 0), v(2, 1), v(2, 2)]);
        assert_eq!(path.count(), 5);
    }

    #[test]
    fn test_diagonal_junction_keeps_both_pixels() {
        let path = Path::from_lines([
            Line::new(v(0, 0), v(2, 0)),
            Line::new(v(3, 1), v(3, 2)),
        ])
        .unwrap();
        assert_eq!(path.count(), 5);
        assert_eq!(path.iter().len(), 5);
    }

    #[test]
    fn test_loop_does_not_repeat_start() {
        let path = square();
        let points: Vec<_> = path.iter().collect();
        assert_eq!(points.len(), 12);
        assert_eq!(path.count(), 12);
        assert_eq!(points[0], v(0, 0));
        assert_eq!(points[11], v(0, 1));
        assert!(!path.self_intersects());
    }

    #[test]
    fn test_count_on_axis() {
        let path = square();
        assert_eq!(path.count_on_x(0), 4);
        assert_eq!(path.count_on_x(1), 2);
        assert_eq!(path.count_on_y(3), 4);
        assert_eq!(path.count_on_y(7), 0);
        for x in -1..5 {
            let expected = path.iter().filter(|p| p.x == x).count();
            assert_eq!(path.count_on_x(x), expected);
        }
    }

    #[test]
    fn test_extents() {
        let path = Path::from_points([v(0, 0), v(6, 2), v(2, 4)]).unwrap();
        assert_eq!(path.min_x(2).unwrap(), 5);
        assert_eq!(path.max_x(2).unwrap(), 6);
        assert_eq!(path.max_y(4).unwrap(), 3);
        assert_eq!(path.min_y(4).unwrap(), 1);
        assert!(path.min_x(5).is_err());
    }

    #[test]
    fn test_concat() {
        let a = Path::from_points([v(0, 0), v(2, 0)]).unwrap();
        let b = Path::from_points([v(3, 0), v(3, 2)]).unwrap();
        let joined = Path::concat([a.clone(), b]).unwrap();
        assert_eq!(joined.lines().len(), 2);
        assert_eq!(joined.end(), v(3, 2));

        let far = Path::from_points([v(9, 9)]).unwrap();
        assert!(Path::concat([a, far]).is_err());
    }

    #[test]
    fn test_winding_sign() {
        let anticlockwise = square();
        assert_eq!(anticlockwise.winding_number(v(1, 1)).unwrap(), 1);
        assert_eq!(anticlockwise.reverse().winding_number(v(2, 1)).unwrap(), -1);
        assert_eq!(anticlockwise.winding_number(v(5, 1)).unwrap(), 0);
        assert_eq!(anticlockwise.winding_number(v(-2, 2)).unwrap(), 0);
    }

    #[test]
    fn test_winding_preconditions() {
        let open = Path::from_points([v(0, 0), v(5, 0)]).unwrap();
        assert_eq!(open.winding_number(v(1, 1)), Err(ShapeError::NotALoop));
        assert_eq!(
            square().winding_number(v(3, 2)),
            Err(ShapeError::PointOnPath { point: v(3, 2) })
        );
    }

    #[test]
    fn test_winding_twice_around() {
        let twice = Path::from_points([
            v(0, 0),
            v(6, 0),
            v(6, 6),
            v(0, 6),
            v(0, 1),
            v(5, 1),
            v(5, 5),
            v(1, 5),
            v(1, 0),
        ])
        .unwrap();
        assert!(twice.is_loop());
        assert_eq!(twice.winding_number(v(3, 3)).unwrap(), 2);
    }

    #[test]
    fn test_self_intersection() {
        let figure_eight =
            Path::from_points([v(0, 0), v(4, 4), v(4, 0), v(0, 4), v(0, 1)]).unwrap();
        assert!(figure_eight.is_loop());
        assert!(figure_eight.self_intersects());
        assert!(!figure_eight.is_simple_polygon());
        assert!(square().is_simple_polygon());
    }

    #[test]
    fn test_touching_loop_is_simple() {
        // Two squares meeting corner to corner at (3, 3).
        let touching = Path::from_points([
            v(0, 0),
            v(3, 0),
            v(3, 3),
            v(6, 3),
            v(6, 6),
            v(3, 6),
            v(3, 3),
            v(0, 3),
            v(0, 1),
        ])
        .unwrap();
        assert!(touching.self_intersects());
        assert!(touching.is_simple_polygon());
    }

    #[test]
    fn test_crossing_plus_is_not_simple() {
        let crossing = Path::from_points([
            v(0, 0),
            v(3, 0),
            v(3, 6),
            v(6, 6),
            v(6, 3),
            v(0, 3),
            v(0, 1),
        ])
        .unwrap();
        assert!(!crossing.is_simple_polygon());
    }

    #[test]
    fn test_open_path_is_not_a_polygon() {
        let open = Path::from_points([v(0, 0), v(5, 0)]).unwrap();
        assert!(!open.is_simple_polygon());
    }

    #[test]
    fn test_transforms_map_every_line() {
        let path = square().translate(v(2, -1));
        assert_eq!(path.start(), v(2, -1));
        let rotated = square().rotate(RotationAngle::Ninety);
        let expected: HashSet<_> = square().iter().map(|p| p.rotate(RotationAngle::Ninety)).collect();
        assert_eq!(rotated.iter().collect::<HashSet<_>>(), expected);
        let reflected = square().reflect(ReflectionAxis::Vertical);
        assert_eq!(reflected.bounding_rect(), IntRect::new(v(-3, 0), v(0, 3)));
    }
}
