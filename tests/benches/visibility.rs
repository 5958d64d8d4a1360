extern crate sightline;
extern crate sightline_tests;
#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use sightline::math::point;
use sightline::{is_point_in_polygon, sanitize_segments, VisibilityOptions, VisibilitySweep};
use sightline_tests::*;

static PILLARS_PER_SIDE: [u32; 4] = [2, 4, 8, 16];

fn sweep(c: &mut Criterion) {
    let mut g = c.benchmark_group("visibility");
    for &n in &PILLARS_PER_SIDE {
        let walls = pillar_room(n);
        let observer = point(0.2, 0.3);
        let mut sweep = VisibilitySweep::new();
        let mut polygon = Vec::new();

        g.bench_with_input(BenchmarkId::new("pillars", n), &walls, |b, walls| {
            b.iter(|| {
                sweep
                    .compute(observer, walls, &VisibilityOptions::DEFAULT, &mut polygon)
                    .unwrap();
                std::hint::black_box(&polygon);
            })
        });
    }
}

fn viewport(c: &mut Criterion) {
    let walls = pillar_room(16);
    let options = VisibilityOptions::viewport(point(-10.0, -8.0), point(10.0, 8.0));
    let mut sweep = VisibilitySweep::new();
    let mut polygon = Vec::new();

    c.bench_function("viewport", |b| {
        b.iter(|| {
            sweep
                .compute(point(0.2, 0.3), &walls, &options, &mut polygon)
                .unwrap();
            std::hint::black_box(&polygon);
        })
    });
}

fn sanitize(c: &mut Criterion) {
    let mut g = c.benchmark_group("sanitize");
    for &count in &[50, 200] {
        let walls = random_walls(1, count, 100.0);
        g.bench_with_input(BenchmarkId::new("random", count), &walls, |b, walls| {
            b.iter(|| std::hint::black_box(sanitize_segments(walls)))
        });
    }
}

fn hit_test(c: &mut Criterion) {
    let walls = pillar_room(8);
    let polygon = sightline::compute_visibility_polygon(point(0.2, 0.3), &walls);
    let probes = random_points(2, 1000, 12.0);

    c.bench_function("hit test", |b| {
        b.iter(|| {
            let mut inside = 0;
            for p in &probes {
                if is_point_in_polygon(*p, &polygon) {
                    inside += 1;
                }
            }
            std::hint::black_box(inside);
        })
    });
}

criterion_group!(visibility, sweep, viewport, sanitize, hit_test);
criterion_main!(visibility);
