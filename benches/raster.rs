//! Benchmarks for rasterization.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pxshape::{
    Canvas, Colour, Diamond, Ellipse, IntRect, IntVector2, IsometricCuboid, IsometricRectangle,
    Line, Path, RightAngleCorner, RightTriangle, Shape,
};

fn v(x: i32, y: i32) -> IntVector2 {
    IntVector2::new(x, y)
}

// -- Line and path benchmarks --

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");

    let line = Line::new(v(0, 0), v(997, 331));

    group.bench_function("iterate_long_line", |b| {
        b.iter(|| black_box(&line).iter().count())
    });

    group.bench_function("random_access", |b| {
        b.iter(|| (0..line.count()).step_by(7).filter_map(|i| line.get(black_box(i))).count())
    });

    group.bench_function("row_extent", |b| {
        b.iter(|| (0..=331).filter_map(|y| line.min_x(black_box(y)).ok()).sum::<i32>())
    });

    group.finish();
}

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("paths");

    let star = Path::from_points([
        v(0, -80),
        v(50, 70),
        v(-80, -30),
        v(80, -30),
        v(-50, 70),
        v(0, -80),
    ])
    .unwrap();
    let probes: Vec<IntVector2> = IntRect::new(v(-80, -80), v(80, 70))
        .points()
        .step_by(13)
        .filter(|&p| !star.contains(p))
        .collect();

    group.bench_function("winding_number", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter(|&&p| star.winding_number(black_box(p)).is_ok_and(|w| w != 0))
                .count()
        })
    });

    group.bench_function("self_intersects", |b| {
        b.iter(|| black_box(&star).self_intersects())
    });

    group.finish();
}

// -- Shape benchmarks --

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");

    let rect = IntRect::from_size(IntVector2::ZERO, 120, 80);
    let ellipse = Ellipse::from_rect(rect, false);
    let diamond = Diamond::from_rect(rect, true);
    let triangle = RightTriangle::from_rect(rect, RightAngleCorner::BottomLeft, true);
    let iso = IsometricRectangle::new(v(0, 0), v(60, 50), true);
    let cuboid = IsometricCuboid::new(v(0, 0), v(40, 10), 30, false, true).unwrap();

    group.bench_function("ellipse_border_walk", |b| {
        b.iter(|| black_box(&ellipse).points().count())
    });

    group.bench_function("diamond_filled", |b| {
        b.iter(|| black_box(&diamond).points().count())
    });

    group.bench_function("right_triangle_filled", |b| {
        b.iter(|| black_box(&triangle).points().count())
    });

    group.bench_function("isometric_rectangle_filled", |b| {
        b.iter(|| black_box(&iso).points().count())
    });

    group.bench_function("isometric_cuboid_wireframe", |b| {
        b.iter(|| black_box(&cuboid).points().count())
    });

    group.bench_function("draw_to_canvas", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(rect, Colour::WHITE);
            canvas.draw(black_box(&ellipse), Colour::BLACK)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_lines, bench_paths, bench_shapes);
criterion_main!(benches);
