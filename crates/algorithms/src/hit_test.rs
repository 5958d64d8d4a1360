//! Determine whether a point is inside a polygon.

use crate::geom::utils::{fuzzy_eq_point, turn_angle};
use crate::geom::{point, LineSegment, Point, Polygon, Scalar};

/// Returns whether the point is inside the polygon, borders included.
///
/// The test casts a segment from a point that is guaranteed to be outside of the
/// polygon to `p` and counts the edges it crosses (even-odd rule). When the segment
/// goes exactly through a vertex, the crossing is only counted for the edge that
/// continues on one side of it, so that a vertex shared by two edges counts once
/// or not at all. Edges that are collinear with the segment don't count.
///
/// An empty polygon contains nothing.
pub fn hit_test_polygon<S: Scalar>(p: Point<S>, polygon: Polygon<S>) -> bool {
    let min = match polygon.min_coordinate() {
        Some(min) => min,
        None => {
            return false;
        }
    };

    let exterior = point(min - S::ONE, min - S::ONE);
    let ray = LineSegment {
        from: exterior,
        to: p,
    };

    let mut crossings = 0;
    for edge in polygon.edges() {
        if !ray.crosses_or_touches(&edge) {
            continue;
        }

        let intersection = match ray.line_intersection_point(&edge) {
            Some(intersection) => intersection,
            None => {
                // Collinear with the ray. The neighboring edges decide whether the
                // ray crosses the boundary there, through the vertex rule below.
                if edge.crosses_or_touches(&LineSegment { from: p, to: p }) {
                    return true;
                }
                continue;
            }
        };

        if fuzzy_eq_point(p, intersection) {
            return true;
        }

        if fuzzy_eq_point(intersection, edge.from) {
            if turn_angle(p, exterior, edge.to) < S::HALF_TURN {
                crossings += 1;
            }
        } else if fuzzy_eq_point(intersection, edge.to) {
            if turn_angle(p, exterior, edge.from) < S::HALF_TURN {
                crossings += 1;
            }
        } else {
            crossings += 1;
        }
    }

    crossings % 2 != 0
}

/// Same as `hit_test_polygon` with the polygon given as a slice of points.
#[inline]
pub fn hit_test_points<S: Scalar>(p: Point<S>, points: &[Point<S>]) -> bool {
    hit_test_polygon(p, Polygon::new(points))
}

#[test]
fn test_hit_test() {
    let square = [
        point(0.0f64, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ];

    assert!(hit_test_points(point(0.5, 0.5), &square));
    assert!(!hit_test_points(point(5.0, 5.0), &square));
    assert!(!hit_test_points(point(-1.0, 0.5), &square));
    assert!(!hit_test_points(point(2.0, 0.5), &square));
    assert!(!hit_test_points(point(0.5, -0.5), &square));
    assert!(!hit_test_points(point(0.5, 1.5), &square));

    // Borders are inside.
    assert!(hit_test_points(point(0.5, 0.0), &square));
    assert!(hit_test_points(point(1.0, 0.5), &square));
    assert!(hit_test_points(point(1.0, 1.0), &square));
}

#[test]
fn winding_does_not_matter() {
    let cw = [
        point(0.0f64, 0.0),
        point(0.0, 1.0),
        point(1.0, 1.0),
        point(1.0, 0.0),
    ];

    assert!(hit_test_points(point(0.5, 0.5), &cw));
    assert!(hit_test_points(point(0.25, 0.75), &cw));
    assert!(!hit_test_points(point(1.5, 0.75), &cw));
}

#[test]
fn concave_polygon() {
    // A "U" shape opening upwards.
    let u = [
        point(0.0f64, 0.0),
        point(3.0, 0.0),
        point(3.0, 3.0),
        point(2.0, 3.0),
        point(2.0, 1.0),
        point(1.0, 1.0),
        point(1.0, 3.0),
        point(0.0, 3.0),
    ];

    assert!(hit_test_points(point(0.5, 2.0), &u));
    assert!(hit_test_points(point(2.5, 2.0), &u));
    assert!(hit_test_points(point(1.5, 0.5), &u));
    assert!(!hit_test_points(point(1.5, 2.0), &u));
    assert!(!hit_test_points(point(4.0, 2.0), &u));
}

#[test]
fn ray_through_vertex() {
    // The test segment starts at (-1, -1).
    let diamond = [
        point(2.0f64, 0.0),
        point(4.0, 2.0),
        point(2.0, 4.0),
        point(0.0, 2.0),
    ];

    assert!(hit_test_points(point(2.0, 2.0), &diamond));
    assert!(!hit_test_points(point(5.0, 5.0), &diamond));
    assert!(hit_test_points(point(2.5, 2.5), &diamond));
    // Grazes the bottom vertex.
    assert!(!hit_test_points(point(3.5, 0.5), &diamond));

    // Enters the square through its corner.
    let square = [
        point(0.0f64, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ];
    assert!(hit_test_points(point(0.25, 0.25), &square));
    // Leaves it through the opposite one.
    assert!(!hit_test_points(point(2.0, 2.0), &square));
}

#[test]
fn empty_polygon() {
    let empty: [Point<f64>; 0] = [];
    assert!(!hit_test_points(point(0.0, 0.0), &empty));
}

#[test]
fn edge_along_the_test_segment() {
    // The test segment starts at (-8, -8) and runs along the edge (0, -4) -> (2, -3).
    let star = [
        point(3.0f64, 0.0),
        point(6.0, 4.0),
        point(-1.0, 7.0),
        point(-1.0, 1.0),
        point(-7.0, 1.0),
        point(-1.0, -2.0),
        point(0.0, -4.0),
        point(2.0, -3.0),
    ];

    assert!(!hit_test_points(point(4.0, -2.0), &star));
    assert!(!hit_test_points(point(8.0, 0.0), &star));
    assert!(hit_test_points(point(1.0, -3.5), &star));
    assert!(hit_test_points(point(0.0, 0.0), &star));

    // Here the boundary goes from one side of the test segment to the other along the
    // collinear edge (0, 0) -> (2, 2).
    let step = [
        point(0.0f64, 0.0),
        point(2.0, 2.0),
        point(6.0, 2.0),
        point(6.0, 6.0),
        point(-2.0, 6.0),
    ];

    assert!(hit_test_points(point(4.0, 4.0), &step));
    assert!(hit_test_points(point(1.0, 1.0), &step));
    assert!(!hit_test_points(point(7.0, 7.0), &step));
}
