//! Angle, distance and comparison helpers shared by the visibility crates.

use crate::scalar::Scalar;
use crate::Point;

/// Which side of a directed line a point lies on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Returns the orientation of the triangle `a, b, c`.
///
/// The test is exact: no epsilon is involved, so that the segment intersection
/// predicates built on it are symmetric.
#[inline]
pub fn orientation<S: Scalar>(a: Point<S>, b: Point<S>, c: Point<S>) -> Orientation {
    let lhs = (c.x - a.x) * (b.y - a.y);
    let rhs = (b.x - a.x) * (c.y - a.y);
    if lhs < rhs {
        Orientation::CounterClockwise
    } else if lhs > rhs {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Angle in degrees of the vector going from `origin` to `p`, as given by `atan2`.
///
/// The result lies in `[-180, 180]`.
#[inline]
pub fn polar_angle<S: Scalar>(origin: Point<S>, p: Point<S>) -> S {
    S::atan2(p.y - origin.y, p.x - origin.x) * S::HALF_TURN / S::PI()
}

/// The angle at `b` when turning from the direction `a -> b` to the direction `b -> c`,
/// wrapped into `[0, 360]`.
///
/// A value below 180 degrees means `c` lies on one side of the line `ab`, above 180 on the
/// other side.
#[inline]
pub fn turn_angle<S: Scalar>(a: Point<S>, b: Point<S>, c: Point<S>) -> S {
    let mut angle = polar_angle(a, b) - polar_angle(b, c);
    if angle < S::ZERO {
        angle += S::FULL_TURN;
    }
    if angle > S::FULL_TURN {
        angle -= S::FULL_TURN;
    }

    angle
}

/// Squared euclidean distance.
///
/// Only used for ordering, so the square root is skipped.
#[inline]
pub fn square_distance<S: Scalar>(a: Point<S>, b: Point<S>) -> S {
    (a - b).square_length()
}

/// Returns true if both coordinates differ by less than `S::EPSILON`.
#[inline]
pub fn fuzzy_eq_point<S: Scalar>(a: Point<S>, b: Point<S>) -> bool {
    S::abs(a.x - b.x) < S::EPSILON && S::abs(a.y - b.y) < S::EPSILON
}

#[inline]
pub fn min_max<S: Scalar>(a: S, b: S) -> (S, S) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
use crate::point;

#[test]
fn polar_angle_quadrants() {
    let o = point(1.0f64, 1.0);
    assert_eq!(polar_angle(o, point(2.0, 1.0)), 0.0);
    assert!((polar_angle(o, point(1.0, 2.0)) - 90.0).abs() < 1e-12);
    assert!((polar_angle(o, point(0.0, 1.0)) - 180.0).abs() < 1e-12);
    assert!((polar_angle(o, point(1.0, 0.0)) + 90.0).abs() < 1e-12);
    assert!((polar_angle(o, point(0.0, 0.0)) + 135.0).abs() < 1e-12);
}

#[test]
fn turn_angle_sides() {
    // Going right along the x axis then turning left (counter-clockwise in a y-up frame).
    let left = turn_angle(point(0.0f64, 0.0), point(1.0, 0.0), point(1.0, 1.0));
    // Same but turning right.
    let right = turn_angle(point(0.0f64, 0.0), point(1.0, 0.0), point(1.0, -1.0));

    assert!((left - 270.0).abs() < 1e-9);
    assert!((right - 90.0).abs() < 1e-9);

    // Going straight.
    let straight = turn_angle(point(0.0f64, 0.0), point(1.0, 0.0), point(2.0, 0.0));
    assert!(straight.abs() < 1e-9 || (straight - 360.0).abs() < 1e-9);
}

#[test]
fn fuzzy_equality() {
    let a = point(10.0f64, -3.0);
    assert!(fuzzy_eq_point(a, point(10.0 + 5e-8, -3.0 - 5e-8)));
    assert!(!fuzzy_eq_point(a, point(10.0 + 2e-7, -3.0)));
    assert!(!fuzzy_eq_point(a, point(10.0, -3.0 + 2e-7)));
}

#[test]
fn orientation_signs() {
    let a = point(0.0f64, 0.0);
    let b = point(1.0, 0.0);
    assert_eq!(orientation(a, b, point(0.5, 1.0)), Orientation::CounterClockwise);
    assert_eq!(orientation(a, b, point(0.5, -1.0)), Orientation::Clockwise);
    assert_eq!(orientation(a, b, point(7.0, 0.0)), Orientation::Collinear);
}
