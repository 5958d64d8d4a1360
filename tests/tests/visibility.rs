use sightline::geom::Scale;
use sightline::math::{point, Box2D, LineSegment, Point};
use sightline::{
    compute_visibility_polygon, compute_visibility_polygon_in_viewport, is_point_in_polygon,
    sanitize_segments, VisibilityOptions, VisibilitySweep,
};
use sightline_tests::*;

const CLEARANCE: f64 = 1e-3;

fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
    LineSegment {
        from: point(x1, y1),
        to: point(x2, y2),
    }
}

/// Checks the polygon against a brute-force line of sight test, for the probes where the
/// answer doesn't depend on rounding.
fn check_probes(
    observer: Point,
    walls: &[LineSegment],
    polygon: &[Point],
    probes: &[Point],
) -> usize {
    let mut checked = 0;
    for &probe in probes {
        if has_clear_line_of_sight(observer, probe, walls, CLEARANCE) {
            assert!(
                is_point_in_polygon(probe, polygon),
                "{:?} should be visible from {:?}",
                probe,
                observer
            );
            checked += 1;
        } else if is_clearly_blocked(observer, probe, walls, CLEARANCE) {
            assert!(
                !is_point_in_polygon(probe, polygon),
                "{:?} should be hidden from {:?}",
                probe,
                observer
            );
            checked += 1;
        }
    }

    checked
}

fn is_near_a_wall(p: Point, walls: &[LineSegment]) -> bool {
    walls
        .iter()
        .any(|w| w.square_distance_to_point(p) < CLEARANCE * CLEARANCE)
}

#[test]
fn unit_square_containment() {
    let square = [
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ];

    assert!(is_point_in_polygon(point(0.5, 0.5), &square));
    assert!(!is_point_in_polygon(point(5.0, 5.0), &square));
    assert!(is_point_in_polygon(point(0.5, 0.0), &square));
}

#[test]
fn empty_room() {
    let polygon = compute_visibility_polygon(point(0.0, 0.0), &[]);

    assert_eq!(
        polygon,
        vec![
            point(1.0, 1.0),
            point(-1.0, 1.0),
            point(-1.0, -1.0),
            point(1.0, -1.0),
        ]
    );
}

#[test]
fn single_wall() {
    let mut walls = room(100.0);
    walls.push(segment(5.0, -1.0, 5.0, 1.0));

    let polygon = compute_visibility_polygon(point(0.0, 0.0), &walls);

    assert!(is_point_in_polygon(point(3.0, 0.0), &polygon));
    assert!(!is_point_in_polygon(point(10.0, 0.0), &polygon));
    assert!(is_point_in_polygon(point(10.0, 5.0), &polygon));
}

#[test]
fn pillar_room_matches_line_of_sight() {
    let walls = pillar_room(4);
    let observers = random_points(1, 20, 6.5);
    let probes = random_points(2, 200, 6.9);

    let mut sweep = VisibilitySweep::new();
    let mut polygon = Vec::new();
    let mut checked = 0;
    for &observer in &observers {
        if is_near_a_wall(observer, &walls) {
            continue;
        }

        sweep
            .compute(observer, &walls, &VisibilityOptions::DEFAULT, &mut polygon)
            .unwrap();
        checked += check_probes(observer, &walls, &polygon, &probes);
    }

    assert!(checked > 1000, "only {} probes checked", checked);
}

#[test]
fn crossing_walls_match_line_of_sight() {
    let mut walls = room(12.0);
    walls.extend(random_walls(3, 20, 10.0));
    let observers = random_points(4, 10, 10.0);
    let probes = random_points(5, 200, 11.5);
    let options = VisibilityOptions::DEFAULT.with_intersections_broken(true);

    let mut sweep = VisibilitySweep::new();
    let mut polygon = Vec::new();
    let mut checked = 0;
    for &observer in &observers {
        if is_near_a_wall(observer, &walls) {
            continue;
        }

        sweep.compute(observer, &walls, &options, &mut polygon).unwrap();
        checked += check_probes(observer, &walls, &polygon, &probes);
    }

    assert!(checked > 500, "only {} probes checked", checked);
}

#[test]
fn viewport_enclosing_everything() {
    let walls = pillar_room(3);
    let observer = point(0.2, 0.3);
    let probes = random_points(6, 200, 5.4);

    let unbounded = compute_visibility_polygon(observer, &walls);
    let clipped = compute_visibility_polygon_in_viewport(
        observer,
        &walls,
        point(-100.0, -100.0),
        point(100.0, 100.0),
    );

    for &probe in &probes {
        if is_near_a_wall(probe, &walls) {
            continue;
        }
        assert_eq!(
            is_point_in_polygon(probe, &unbounded),
            is_point_in_polygon(probe, &clipped),
            "{:?}",
            probe
        );
    }
}

#[test]
fn viewport_bounds_the_polygon() {
    let walls = pillar_room(3);
    let observer = point(0.2, 0.3);
    let viewport = Box2D {
        min: point(-2.0, -2.0),
        max: point(3.0, 2.0),
    };

    let polygon =
        compute_visibility_polygon_in_viewport(observer, &walls, viewport.min, viewport.max);

    assert!(!polygon.is_empty());
    for p in &polygon {
        assert!(p.x >= viewport.min.x - 1e-5 && p.x <= viewport.max.x + 1e-5);
        assert!(p.y >= viewport.min.y - 1e-5 && p.y <= viewport.max.y + 1e-5);
    }

    assert!(is_point_in_polygon(point(1.0, 0.0), &polygon));
    assert!(!is_point_in_polygon(point(4.0, 0.0), &polygon));
}

#[test]
fn scale_invariance() {
    let walls = pillar_room(2);
    let observer = point(0.3, 0.2);
    let polygon = compute_visibility_polygon(observer, &walls);

    for &k in &[0.25, 4.0] {
        let scale = Scale::new(k);
        let scaled_walls: Vec<LineSegment> =
            walls.iter().map(|s| s.transformed(&scale)).collect();
        let scaled_observer = scale.transform_point(observer);

        let scaled = compute_visibility_polygon(scaled_observer, &scaled_walls);

        assert_eq!(scaled.len(), polygon.len());
        for (a, b) in scaled.iter().zip(polygon.iter()) {
            assert!((a.x - b.x * k).abs() < 1e-9 * k, "{:?} {:?}", a, b);
            assert!((a.y - b.y * k).abs() < 1e-9 * k, "{:?} {:?}", a, b);
        }
    }
}

#[test]
fn determinism() {
    let mut walls = room(12.0);
    walls.extend(sanitize_segments(&random_walls(7, 40, 10.0)));

    let a = compute_visibility_polygon(point(0.1, -0.2), &walls);
    let b = compute_visibility_polygon(point(0.1, -0.2), &walls);

    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn sanitized_grid() {
    // A "#" shape: each line is crossed twice.
    let walls = [
        segment(0.0, 1.0, 3.0, 1.0),
        segment(0.0, 2.0, 3.0, 2.0),
        segment(1.0, 0.0, 1.0, 3.0),
        segment(2.0, 0.0, 2.0, 3.0),
    ];

    let sanitized = sanitize_segments(&walls);
    assert_eq!(sanitized.len(), 12);

    for (i, a) in sanitized.iter().enumerate() {
        assert_eq!(a.length(), 1.0);
        for b in &sanitized[i + 1..] {
            assert!(!a.intersects(b), "{:?} crosses {:?}", a, b);
        }
    }

    // The observer in the middle cell only sees that cell.
    let polygon = compute_visibility_polygon(point(1.5, 1.4), &sanitized);
    assert!(is_point_in_polygon(point(1.2, 1.8), &polygon));
    assert!(!is_point_in_polygon(point(0.5, 1.5), &polygon));
    assert!(!is_point_in_polygon(point(2.5, 2.5), &polygon));
}

#[test]
fn reused_sweep_matches_free_function() {
    let walls = pillar_room(3);
    let mut sweep = VisibilitySweep::new();
    let mut polygon = Vec::new();

    for &observer in &[point(0.2, 0.3), point(-3.3, 4.1), point(5.0, -0.7)] {
        sweep
            .compute(observer, &walls, &VisibilityOptions::DEFAULT, &mut polygon)
            .unwrap();
        assert_eq!(polygon, compute_visibility_polygon(observer, &walls));
    }
}
