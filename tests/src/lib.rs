//! Scenes shared by the integration tests and the benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sightline::math::{point, vector, LineSegment, Point};

/// The walls of a square room centered on the origin.
pub fn room(half_size: f64) -> Vec<LineSegment> {
    let h = half_size;
    sightline::polygons_to_segments(&[[
        point(-h, -h),
        point(h, -h),
        point(h, h),
        point(-h, h),
    ]])
}

/// A grid of square pillars, `columns * rows` of them, `spacing` apart and with sides of
/// length `size`. The first pillar's lower-left corner is at `origin`.
pub fn pillars(
    origin: Point,
    columns: u32,
    rows: u32,
    spacing: f64,
    size: f64,
) -> Vec<LineSegment> {
    let mut squares = Vec::new();
    for y in 0..rows {
        for x in 0..columns {
            let min = origin + vector(x as f64, y as f64) * spacing;
            squares.push([
                min,
                min + vector(size, 0.0),
                min + vector(size, size),
                min + vector(0.0, size),
            ]);
        }
    }

    sightline::polygons_to_segments(&squares)
}

/// A room with a grid of pillars in it. Pillars are 1 unit wide and 3 units apart.
pub fn pillar_room(pillars_per_side: u32) -> Vec<LineSegment> {
    let half_size = pillars_per_side as f64 * 1.5 + 1.0;
    let origin = point(-half_size + 1.5, -half_size + 1.5);

    let mut walls = room(half_size);
    walls.extend(pillars(origin, pillars_per_side, pillars_per_side, 3.0, 1.0));

    walls
}

/// `count` short walls with random positions and orientations within `[-extent, extent]`.
///
/// The walls may cross each other.
pub fn random_walls(seed: u64, count: usize, extent: f64) -> Vec<LineSegment> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut walls = Vec::with_capacity(count);
    for _ in 0..count {
        let from = point(
            rng.gen_range(-extent..extent),
            rng.gen_range(-extent..extent),
        );
        let angle: f64 = rng.gen_range(0.0..std::f64::consts::PI * 2.0);
        let length: f64 = rng.gen_range(0.1..extent * 0.2);
        walls.push(LineSegment {
            from,
            to: from + vector(angle.cos(), angle.sin()) * length,
        });
    }

    walls
}

/// Random points within `[-extent, extent]`.
pub fn random_points(seed: u64, count: usize, extent: f64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            point(
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            )
        })
        .collect()
}

/// Whether the straight path from `a` to `b` stays at least `clearance` away from every
/// wall, in which case visibility between them doesn't depend on rounding.
pub fn has_clear_line_of_sight(
    a: Point,
    b: Point,
    walls: &[LineSegment],
    clearance: f64,
) -> bool {
    let sight = LineSegment { from: a, to: b };
    let sq_clearance = clearance * clearance;
    for wall in walls {
        if sight.intersects(wall)
            || sight.square_distance_to_point(wall.from) < sq_clearance
            || sight.square_distance_to_point(wall.to) < sq_clearance
            || wall.square_distance_to_point(b) < sq_clearance
        {
            return false;
        }
    }

    true
}

/// Whether the straight path from `a` to `b` crosses a wall away from the wall's
/// endpoints and from `b`.
pub fn is_clearly_blocked(a: Point, b: Point, walls: &[LineSegment], clearance: f64) -> bool {
    let sight = LineSegment { from: a, to: b };
    let sq_clearance = clearance * clearance;
    walls.iter().any(|wall| {
        sight.intersects(wall)
            && sight.square_distance_to_point(wall.from) >= sq_clearance
            && sight.square_distance_to_point(wall.to) >= sq_clearance
            && wall.square_distance_to_point(b) >= sq_clearance
    })
}
