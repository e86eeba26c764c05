//! Property tests for lines, paths and shapes.

use std::collections::HashSet;

use proptest::prelude::*;
use pxshape::{
    AnyShape, Diamond, Ellipse, IntRect, IntVector2, IsometricCuboid, IsometricHexagon,
    IsometricRectangle, Line, Path, Rectangle, ReflectionAxis, RightAngleCorner, RightTriangle,
    RotationAngle, Shape, ShapeError, Transform,
};

fn point() -> impl Strategy<Value = IntVector2> {
    (-40..=40, -40..=40).prop_map(|(x, y)| IntVector2::new(x, y))
}

fn small_point() -> impl Strategy<Value = IntVector2> {
    (-12..=12, -12..=12).prop_map(|(x, y)| IntVector2::new(x, y))
}

fn corner() -> impl Strategy<Value = RightAngleCorner> {
    prop_oneof![
        Just(RightAngleCorner::BottomLeft),
        Just(RightAngleCorner::BottomRight),
        Just(RightAngleCorner::TopLeft),
        Just(RightAngleCorner::TopRight),
    ]
}

fn rotation() -> impl Strategy<Value = RotationAngle> {
    prop::sample::select(RotationAngle::ALL.to_vec())
}

fn reflection() -> impl Strategy<Value = ReflectionAxis> {
    prop::sample::select(ReflectionAxis::ALL.to_vec())
}

fn any_shape() -> impl Strategy<Value = AnyShape> {
    (small_point(), small_point(), any::<bool>(), corner(), 0..6i32, any::<bool>()).prop_flat_map(
        |(a, b, filled, right_angle, height, back)| {
            let mut shapes: Vec<AnyShape> = vec![
                Rectangle::new(a, b, filled).into(),
                Ellipse::new(a, b, filled).into(),
                Diamond::new(a, b, filled).into(),
                RightTriangle::new(a, b, right_angle, filled).into(),
                IsometricRectangle::new(a, b, filled).into(),
                IsometricHexagon::new(a, b, filled).into(),
            ];
            if let Ok(cuboid) = IsometricCuboid::new(a, b, height, filled, back) {
                shapes.push(cuboid.into());
            }
            prop::sample::select(shapes)
        },
    )
}

fn point_set<S: Shape>(shape: &S) -> HashSet<IntVector2> {
    shape.points().collect()
}

proptest! {
    #[test]
    fn line_length_and_endpoints(a in point(), b in point()) {
        let line = Line::new(a, b);
        prop_assert_eq!(line.count(), a.sup_dist(b) as usize + 1);
        prop_assert_eq!(line.iter().next(), Some(a));
        prop_assert_eq!(line.iter().last(), Some(b));
        prop_assert_eq!(line.get(line.count() - 1), Some(b));
        prop_assert_eq!(line.get(line.count()), None);
    }

    #[test]
    fn line_steps_are_king_moves(a in point(), b in point()) {
        let points: Vec<_> = Line::new(a, b).iter().collect();
        for pair in points.windows(2) {
            prop_assert!(pair[0].is_adjacent(pair[1]));
            prop_assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn line_random_access_matches_iteration(a in point(), b in point()) {
        let line = Line::new(a, b);
        for (i, p) in line.iter().enumerate() {
            prop_assert_eq!(line.point_at(i).unwrap(), p);
            prop_assert_eq!(line.index_of(p), Some(i));
            prop_assert!(line.contains(p));
        }
        let backwards: Vec<_> = line.iter().rev().collect();
        let mut forwards: Vec<_> = line.iter().collect();
        forwards.reverse();
        prop_assert_eq!(backwards, forwards);
    }

    #[test]
    fn reversed_line_differs_in_at_most_one_pixel(a in point(), b in point()) {
        let forward: HashSet<_> = Line::new(a, b).iter().collect();
        let backward: HashSet<_> = Line::new(b, a).iter().collect();
        let only_forward: Vec<_> = forward.difference(&backward).collect();
        prop_assert!(only_forward.len() <= 1);
        for p in only_forward {
            prop_assert!(*p != a && *p != b);
        }
        prop_assert_eq!(Line::new(a, b).reverse(), Line::new(b, a));
    }

    #[test]
    fn perfect_lines_have_equal_blocks(start in point(), blocks in 1..8i32, len in 1..6i32, flip in any::<bool>()) {
        // `blocks` rows of `len` pixels each.
        let end = start + IntVector2::new(blocks * len - 1, blocks - 1);
        let line = Line::new(start, if flip { start - (end - start) } else { end });
        prop_assert!(line.is_perfect());
        let mut runs: Vec<usize> = Vec::new();
        let mut last_y = None;
        for p in line.iter() {
            if last_y == Some(p.y) {
                *runs.last_mut().unwrap() += 1;
            } else {
                runs.push(1);
                last_y = Some(p.y);
            }
        }
        prop_assert_eq!(runs, vec![len as usize; blocks as usize]);
    }

    #[test]
    fn paths_reject_gaps(a in small_point(), b in small_point(), c in small_point(), d in small_point()) {
        let result = Path::from_lines([Line::new(a, b), Line::new(c, d)]);
        if b.sup_dist(c) > 1 {
            let is_disconnected = matches!(result, Err(ShapeError::Disconnected { index: 0, .. }));
            prop_assert!(is_disconnected);
        } else {
            prop_assert!(result.is_ok());
        }
    }

    #[test]
    fn paths_stay_connected(points in prop::collection::vec(small_point(), 1..8)) {
        let path = Path::from_points(points.clone()).unwrap();
        let visited: Vec<_> = path.iter().collect();
        prop_assert_eq!(visited.len(), path.count());
        for pair in visited.windows(2) {
            prop_assert!(pair[0].is_adjacent(pair[1]));
        }
        prop_assert_eq!(path.start(), points[0]);
        prop_assert_eq!(path.end(), points[points.len() - 1]);
    }

    #[test]
    fn enumeration_and_containment_agree(shape in any_shape()) {
        let points: Vec<_> = shape.points().collect();
        let unique: HashSet<_> = points.iter().copied().collect();
        prop_assert_eq!(points.len(), unique.len(), "{} repeats pixels", shape);
        prop_assert_eq!(shape.count(), points.len());

        let rect = shape.bounding_rect();
        for p in &points {
            prop_assert!(shape.contains(*p));
            prop_assert!(rect.contains(*p));
        }
        let contained: HashSet<_> = rect.points().filter(|&p| shape.contains(p)).collect();
        prop_assert_eq!(&contained, &unique, "{}", shape);

        let outside = IntRect::new(rect.min() - IntVector2::new(2, 2), rect.max() + IntVector2::new(2, 2));
        for p in outside.points().filter(|&p| !rect.contains(p)) {
            prop_assert!(!shape.contains(p));
        }
        if !points.is_empty() {
            prop_assert_eq!(IntRect::bounding_points(points).unwrap(), rect);
        }
    }

    #[test]
    fn half_turns_round_trip(shape in any_shape()) {
        // Cuboids only support the identity rotation.
        prop_assume!(!matches!(shape, AnyShape::IsometricCuboid(_)));
        let turned = shape.rotate(RotationAngle::OneEighty).unwrap();
        let back = turned.rotate(RotationAngle::OneEighty).unwrap();
        prop_assert_eq!(point_set(&back), point_set(&shape));
        let expected: HashSet<_> = shape.points().map(|p| p.rotate(RotationAngle::OneEighty)).collect();
        prop_assert_eq!(point_set(&turned), expected);
    }

    #[test]
    fn transforms_move_every_pixel(a in small_point(), b in small_point(), filled in any::<bool>(), corner in corner(), angle in rotation(), axis in reflection()) {
        let shapes: Vec<AnyShape> = vec![
            Rectangle::new(a, b, filled).into(),
            Ellipse::new(a, b, filled).into(),
            Diamond::new(a, b, filled).into(),
            RightTriangle::new(a, b, corner, filled).into(),
        ];
        for shape in shapes {
            let rotated: HashSet<_> = shape.points().map(|p| p.rotate(angle)).collect();
            prop_assert_eq!(point_set(&shape.rotate(angle).unwrap()), rotated, "{} by {}", shape, angle);
            let reflected: HashSet<_> = shape.points().map(|p| p.reflect(axis)).collect();
            prop_assert_eq!(point_set(&shape.reflect(axis).unwrap()), reflected, "{} in {}", shape, axis);
        }
    }

    #[test]
    fn isometric_rectangles_ignore_corner_order(a in small_point(), b in small_point(), filled in any::<bool>()) {
        let forward = IsometricRectangle::new(a, b, filled);
        let backward = IsometricRectangle::new(b, a, filled);
        prop_assert_eq!(point_set(&forward), point_set(&backward));
        prop_assert_eq!(forward.corners(), backward.corners());
        prop_assert_eq!(forward.count(), forward.points().count());
    }
}

#[test]
fn test_ten_by_ten_diamond_is_four_fold_symmetric() {
    let diamond = Diamond::from_rect(IntRect::new(IntVector2::ZERO, IntVector2::new(9, 9)), false);
    let points = point_set(&diamond);
    assert_eq!(points.len(), 20);
    let quadrant = |left: bool, bottom: bool| {
        points
            .iter()
            .filter(|p| (p.x <= 4) == left && (p.y <= 4) == bottom)
            .count()
    };
    assert_eq!(
        [quadrant(true, true), quadrant(false, true), quadrant(true, false), quadrant(false, false)],
        [5, 5, 5, 5]
    );
    // Each edge has 5 pixels.
    for edge in diamond.edges() {
        assert_eq!(edge.count(), 5);
    }
}

#[test]
fn test_degenerate_isometric_rectangle_is_one_pixel() {
    for filled in [false, true] {
        let shape = IsometricRectangle::new(IntVector2::new(3, -2), IntVector2::new(3, -2), filled);
        assert_eq!(shape.count(), 1);
        assert!(shape.contains(IntVector2::new(3, -2)));
    }
}
