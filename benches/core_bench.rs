use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use pixel_shape_editor::core::raster;
use pixel_shape_editor::{Color, PixelPool, Shape, ShapeGeometry};
use std::hint::black_box;

fn bench_rasterization(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterization");

    for &extent in &[10.0f32, 100.0, 1000.0] {
        group.bench_with_input(BenchmarkId::new("line", extent), &extent, |b, &e| {
            b.iter(|| raster::line(black_box(Vec2::ZERO), black_box(Vec2::new(e, e * 0.37))))
        });

        let radius = extent as i32;
        group.bench_with_input(BenchmarkId::new("circle", extent), &radius, |b, &r| {
            b.iter(|| raster::circle(black_box(Vec2::ZERO), black_box(r)))
        });
        group.bench_with_input(BenchmarkId::new("ellipse", extent), &radius, |b, &r| {
            b.iter(|| raster::ellipse(black_box(Vec2::ZERO), black_box(r), black_box(r / 2 + 1)))
        });

        group.bench_with_input(BenchmarkId::new("hermite", extent), &extent, |b, &e| {
            b.iter(|| {
                raster::hermite(
                    black_box(Vec2::ZERO),
                    black_box(Vec2::new(e, 0.0)),
                    black_box(Vec2::new(0.0, e)),
                    black_box(Vec2::new(0.0, -e)),
                )
            })
        });
        group.bench_with_input(BenchmarkId::new("bezier", extent), &extent, |b, &e| {
            b.iter(|| {
                raster::bezier(
                    black_box(Vec2::ZERO),
                    black_box(Vec2::new(e * 0.25, e)),
                    black_box(Vec2::new(e * 0.75, e)),
                    black_box(Vec2::new(e, 0.0)),
                )
            })
        });
    }

    group.finish();
}

fn bench_rotation(c: &mut Criterion) {
    let mut pool = PixelPool::new();
    let mut shape = Shape::new(
        ShapeGeometry::Ellipse {
            center: Vec2::ZERO,
            radius_x: 200,
            radius_y: 80,
        },
        Color::BLACK,
    );
    shape.draw(&mut pool);

    let mut angle = 0.0f32;
    c.bench_function("rotate_ellipse_200x80", |b| {
        b.iter(|| {
            angle = (angle + 7.5) % 360.0;
            shape.set_rotation(black_box(angle), &mut pool);
            black_box(shape.points().len())
        })
    });
}

criterion_group!(core_benches, bench_rasterization, bench_rotation);
criterion_main!(core_benches);
