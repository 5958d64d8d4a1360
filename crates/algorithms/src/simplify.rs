//! Clean up the vertices of a polygon.
//!
//! The visibility sweep can emit vertices that are equal within epsilon, or vertices
//! that lie in the middle of a straight boundary (for example where the frame is split
//! by a segment endpoint sitting exactly on it). These functions remove them in place.

use alloc::vec::Vec;

use crate::geom::utils::fuzzy_eq_point;
use crate::geom::{Line, Point, Scalar};

/// Removes consecutive vertices that are equal within epsilon, including the last one
/// when it equals the first one.
pub fn dedup_points<S: Scalar>(points: &mut Vec<Point<S>>) {
    points.dedup_by(|a, b| fuzzy_eq_point(*a, *b));

    while points.len() > 1 {
        let last = points[points.len() - 1];
        if !fuzzy_eq_point(last, points[0]) {
            break;
        }
        points.pop();
    }
}

/// Removes duplicate vertices and vertices that are within `tolerance` of the line
/// going through their neighbours.
///
/// Polygons with fewer than three vertices left are not modified further.
pub fn remove_collinear<S: Scalar>(points: &mut Vec<Point<S>>, tolerance: S) {
    dedup_points(points);

    let mut i = 0;
    while points.len() > 3 && i < points.len() {
        let len = points.len();
        let prev = points[(i + len - 1) % len];
        let current = points[i];
        let next = points[(i + 1) % len];

        let line = Line {
            point: prev,
            vector: next - prev,
        };

        if line.distance_to_point(&current) <= tolerance && between(prev, current, next) {
            points.remove(i);
            // The previous vertex may have become removable.
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }
}

// Whether b lies between a and c along the a -> c direction.
fn between<S: Scalar>(a: Point<S>, b: Point<S>, c: Point<S>) -> bool {
    let v = c - a;
    let t = (b - a).dot(v);

    t >= S::ZERO && t <= v.square_length()
}

#[cfg(test)]
use crate::geom::point;

#[cfg(test)]
use alloc::vec;

#[test]
fn dedup() {
    let mut points = vec![
        point(0.0f64, 0.0),
        point(1.0, 0.0),
        point(1.0 + 1e-9, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
        point(0.0, 1e-9),
    ];

    dedup_points(&mut points);

    assert_eq!(
        points,
        vec![
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(1.0, 1.0),
            point(0.0, 1.0),
        ]
    );

    let mut single = vec![point(3.0f64, 3.0), point(3.0, 3.0)];
    dedup_points(&mut single);
    assert_eq!(single, vec![point(3.0, 3.0)]);
}

#[test]
fn collinear() {
    let mut points = vec![
        point(0.0f64, 0.0),
        point(1.0, 0.0),
        point(2.0, 0.0),
        point(2.0, 1.0),
        point(2.0, 2.0),
        point(0.0, 2.0),
        point(0.0, 1.0),
    ];

    remove_collinear(&mut points, 1e-7);

    assert_eq!(
        points,
        vec![
            point(0.0, 0.0),
            point(2.0, 0.0),
            point(2.0, 2.0),
            point(0.0, 2.0),
        ]
    );
}

#[test]
fn spikes_are_kept() {
    // (3, 0) is on the line going through its neighbours but not between them.
    let mut points = vec![
        point(0.0f64, 0.0),
        point(2.0, 0.0),
        point(3.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
    ];

    remove_collinear(&mut points, 1e-7);

    assert!(points.contains(&point(3.0, 0.0)));
}
