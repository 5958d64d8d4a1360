use crate::scalar::Scalar;
use crate::traits::Transformation;
use crate::utils::{min_max, orientation, Orientation};
use crate::{point, Box2D, Point, Vector};

/// A directed line segment.
///
/// The direction matters to the visibility sweep: the endpoints are processed
/// as `from` first and `to` second.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    /// Return the smallest rectangle containing this segment.
    #[inline]
    pub fn bounding_box(&self) -> Box2D<S> {
        let (min_x, max_x) = min_max(self.from.x, self.to.x);
        let (min_y, max_y) = min_max(self.from.y, self.to.y);

        Box2D {
            min: point(min_x, min_y),
            max: point(max_x, max_y),
        }
    }

    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    /// Returns the line containing this segment.
    #[inline]
    pub fn to_line(&self) -> Line<S> {
        Line {
            point: self.from,
            vector: self.to - self.from,
        }
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> S {
        self.to_vector().length()
    }

    /// Computes the squared length of this segment.
    #[inline]
    pub fn square_length(&self) -> S {
        self.to_vector().square_length()
    }

    /// Applies the transform to this segment and returns the results.
    #[inline]
    pub fn transformed<T: Transformation<S>>(&self, transform: &T) -> Self {
        LineSegment {
            from: transform.transform_point(self.from),
            to: transform.transform_point(self.to),
        }
    }

    /// Computes the intersection (if any) between this segment and another one.
    ///
    /// Segments sharing an endpoint and parallel segments are not considered
    /// intersecting.
    ///
    /// The result is provided in the form of the `t` parameter of each
    /// segment. To get the intersection point, sample one of the segments
    /// at the corresponding value.
    #[allow(clippy::suspicious_operation_groupings)]
    pub fn intersection_t(&self, other: &Self) -> Option<(S, S)> {
        if self.to == other.to
            || self.from == other.from
            || self.from == other.to
            || self.to == other.from
        {
            return None;
        }

        let v1 = self.to_vector();
        let v2 = other.to_vector();

        let v1_cross_v2 = v1.cross(v2);

        if v1_cross_v2 == S::ZERO {
            // The segments are parallel
            return None;
        }

        let sign_v1_cross_v2 = S::signum(v1_cross_v2);
        let abs_v1_cross_v2 = S::abs(v1_cross_v2);

        let v3 = other.from - self.from;

        // t and u should be divided by v1_cross_v2, but we postpone that to not lose precision.
        // We have to respect the sign of v1_cross_v2 (and therefore t and u) so we apply it now and
        // will use the absolute value of v1_cross_v2 afterwards.
        let t = v3.cross(v2) * sign_v1_cross_v2;
        let u = v3.cross(v1) * sign_v1_cross_v2;

        if t < S::ZERO || t > abs_v1_cross_v2 || u < S::ZERO || u > abs_v1_cross_v2 {
            return None;
        }

        Some((t / abs_v1_cross_v2, u / abs_v1_cross_v2))
    }

    #[inline]
    pub fn intersection(&self, other: &Self) -> Option<Point<S>> {
        self.intersection_t(other).map(|(t, _)| self.sample(t))
    }

    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersection_t(other).is_some()
    }

    /// Inclusive intersection test.
    ///
    /// Unlike [`intersects`](#method.intersects), segments that touch (at an endpoint
    /// or anywhere along their length) or overlap are reported as intersecting.
    /// The test only relies on exact orientation signs.
    pub fn crosses_or_touches(&self, other: &Self) -> bool {
        let d1 = orientation(other.from, other.to, self.from);
        let d2 = orientation(other.from, other.to, self.to);
        let d3 = orientation(self.from, self.to, other.from);
        let d4 = orientation(self.from, self.to, other.to);

        (opposite(d1, d2) && opposite(d3, d4))
            || (d1 == Orientation::Collinear && other.bounds_contain(self.from))
            || (d2 == Orientation::Collinear && other.bounds_contain(self.to))
            || (d3 == Orientation::Collinear && self.bounds_contain(other.from))
            || (d4 == Orientation::Collinear && self.bounds_contain(other.to))
    }

    /// Intersection of the infinite lines supporting this segment and another one.
    ///
    /// The result lies on this segment's line but not necessarily between its endpoints.
    /// Returns `None` if the lines are parallel or nearly so.
    #[inline]
    pub fn line_intersection_point(&self, other: &Self) -> Option<Point<S>> {
        self.to_line().intersection(&other.to_line())
    }

    /// Computes the squared distance between this segment and a point.
    #[inline]
    pub fn square_distance_to_point(&self, p: Point<S>) -> S {
        (self.closest_point(p) - p).square_length()
    }

    /// Computes the closest point on this segment to `p`.
    #[inline]
    pub fn closest_point(&self, p: Point<S>) -> Point<S> {
        let v1 = self.to - self.from;
        let v2 = p - self.from;
        let len = v1.dot(v1);
        if len == S::ZERO {
            return self.from;
        }
        let t = S::min(S::max(v2.dot(v1) / len, S::ZERO), S::ONE);

        self.from + v1 * t
    }

    // Whether p is inside the axis-aligned bounds of the segment, borders included.
    #[inline]
    fn bounds_contain(&self, p: Point<S>) -> bool {
        let (a, b) = (self.from, self.to);
        (a.x <= p.x || b.x <= p.x)
            && (p.x <= a.x || p.x <= b.x)
            && (a.y <= p.y || b.y <= p.y)
            && (p.y <= a.y || p.y <= b.y)
    }
}

#[inline]
fn opposite(a: Orientation, b: Orientation) -> bool {
    matches!(
        (a, b),
        (Orientation::Clockwise, Orientation::CounterClockwise)
            | (Orientation::CounterClockwise, Orientation::Clockwise)
    )
}

/// An infinite line defined by a point and a vector.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Line<S> {
    pub point: Point<S>,
    pub vector: Vector<S>,
}

impl<S: Scalar> Line<S> {
    /// Intersection between two lines.
    ///
    /// The point is computed parametrically along `self`. Returns `None` when the
    /// sine of the angle between the two lines is within `S::EPSILON` of zero, which
    /// doesn't depend on the length of the direction vectors.
    pub fn intersection(&self, other: &Self) -> Option<Point<S>> {
        let det = self.vector.cross(other.vector);
        if S::abs(det) <= S::EPSILON * self.vector.length() * other.vector.length() {
            // The lines are very close to parallel
            return None;
        }

        let t = (other.point - self.point).cross(other.vector) / det;

        Some(self.point + self.vector * t)
    }

    pub fn distance_to_point(&self, p: &Point<S>) -> S {
        S::abs(self.signed_distance_to_point(p))
    }

    pub fn signed_distance_to_point(&self, p: &Point<S>) -> S {
        let v = *p - self.point;
        self.vector.cross(v) / self.vector.length()
    }

    /// Returned the squared distance to a point.
    ///
    /// Can be useful to avoid a square root when comparing against a
    /// distance that can be squared instead.
    pub fn square_distance_to_point(&self, p: Point<S>) -> S {
        let v = p - self.point;
        let c = self.vector.cross(v);
        (c * c) / self.vector.square_length()
    }
}

#[cfg(test)]
fn fuzzy_eq_f32(a: f32, b: f32, epsilon: f32) -> bool {
    f32::abs(a - b) <= epsilon
}

#[cfg(test)]
fn fuzzy_eq_point_f32(a: Point<f32>, b: Point<f32>, epsilon: f32) -> bool {
    fuzzy_eq_f32(a.x, b.x, epsilon) && fuzzy_eq_f32(a.y, b.y, epsilon)
}

#[test]
fn intersection_rotated() {
    use core::f32::consts::PI;
    let epsilon = 0.0001;
    let count: u32 = 100;

    for i in 0..count {
        for j in 0..count {
            if i % (count / 2) == j % (count / 2) {
                // avoid the colinear case.
                continue;
            }

            let angle1 = i as f32 / (count as f32) * 2.0 * PI;
            let angle2 = j as f32 / (count as f32) * 2.0 * PI;

            let l1 = LineSegment {
                from: point(10.0 * angle1.cos(), 10.0 * angle1.sin()),
                to: point(-10.0 * angle1.cos(), -10.0 * angle1.sin()),
            };

            let l2 = LineSegment {
                from: point(10.0 * angle2.cos(), 10.0 * angle2.sin()),
                to: point(-10.0 * angle2.cos(), -10.0 * angle2.sin()),
            };

            assert!(l1.intersects(&l2));
            assert!(l1.crosses_or_touches(&l2));

            assert!(fuzzy_eq_point_f32(
                l1.sample(l1.intersection_t(&l2).unwrap().0),
                point(0.0, 0.0),
                epsilon
            ));

            assert!(fuzzy_eq_point_f32(
                l1.line_intersection_point(&l2).unwrap(),
                point(0.0, 0.0),
                epsilon
            ));
        }
    }
}

#[test]
fn intersection_touching() {
    let l1 = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 10.0),
    };

    let l2 = LineSegment {
        from: point(10.0, 10.0),
        to: point(10.0, 0.0),
    };

    assert!(!l1.intersects(&l2));
    assert!(l1.intersection(&l2).is_none());

    // The inclusive test reports the shared endpoint.
    assert!(l1.crosses_or_touches(&l2));
    assert!(l2.crosses_or_touches(&l1));
}

#[test]
fn touching_in_the_middle() {
    // T-junction: l2 ends on the interior of l1.
    let l1 = LineSegment {
        from: point(0.0f64, 0.0),
        to: point(10.0, 0.0),
    };
    let l2 = LineSegment {
        from: point(5.0f64, 5.0),
        to: point(5.0, 0.0),
    };

    assert!(l1.crosses_or_touches(&l2));
    assert!(l2.crosses_or_touches(&l1));
    assert_eq!(l1.line_intersection_point(&l2), Some(point(5.0, 0.0)));
}

#[test]
fn disjoint_segments() {
    let l1 = LineSegment {
        from: point(0.0f64, 0.0),
        to: point(10.0, 0.0),
    };
    let l2 = LineSegment {
        from: point(5.0f64, 5.0),
        to: point(5.0, 0.5),
    };
    let l3 = LineSegment {
        from: point(11.0f64, 0.0),
        to: point(20.0, 0.0),
    };

    assert!(!l1.crosses_or_touches(&l2));
    // Collinear but not overlapping.
    assert!(!l1.crosses_or_touches(&l3));
    // The supporting lines still meet.
    assert_eq!(l1.line_intersection_point(&l2), Some(point(5.0, 0.0)));
}

#[test]
fn intersection_overlap() {
    // Overlapping segments don't have a well defined intersection point. The exclusive
    // test ignores them while the inclusive one reports them.

    let l1 = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    };

    let l2 = LineSegment {
        from: point(5.0, 00.0),
        to: point(15.0, 0.0),
    };

    assert!(!l1.intersects(&l2));
    assert!(l1.intersection(&l2).is_none());
    assert!(l1.crosses_or_touches(&l2));
    assert!(l1.line_intersection_point(&l2).is_none());
}

#[test]
fn intersection_on_endpoint() {
    let l1 = LineSegment {
        from: point(0.0, 0.0),
        to: point(0.0, 10.0),
    };

    let l2 = LineSegment {
        from: point(0.0, 5.0),
        to: point(10.0, 5.0),
    };

    assert_eq!(l1.intersection_t(&l2), Some((0.5, 0.0)));
    assert_eq!(l2.intersection_t(&l1), Some((0.0, 0.5)));

    let l3 = LineSegment {
        from: point(10.0, 5.0),
        to: point(0.0, 5.0),
    };

    assert_eq!(l1.intersection_t(&l3), Some((0.5, 1.0)));
    assert_eq!(l3.intersection_t(&l1), Some((1.0, 0.5)));
}

#[test]
fn nearly_parallel_lines() {
    use crate::vector;

    let l1 = Line {
        point: point(0.0f64, 0.0),
        vector: vector(1.0, 0.0),
    };
    let l2 = Line {
        point: point(0.0f64, 1.0),
        vector: vector(1.0, 1e-9),
    };
    let l3 = Line {
        point: point(3.0f64, 1.0),
        vector: vector(0.0, -2.0),
    };

    assert!(l1.intersection(&l2).is_none());
    assert_eq!(l1.intersection(&l3), Some(point(3.0, 0.0)));
    assert_eq!(l3.intersection(&l1), Some(point(3.0, 0.0)));
}

#[test]
fn parallelism_does_not_depend_on_scale() {
    use crate::vector;

    for &k in &[1e-6, 1e-4, 1.0, 1e4] {
        let l1 = Line {
            point: point(-k, 0.0f64),
            vector: vector(2.0 * k, 0.0),
        };
        let l2 = Line {
            point: point(0.0f64, -k),
            vector: vector(0.0, 2.0 * k),
        };
        let l3 = Line {
            point: point(0.0f64, k),
            vector: vector(2.0 * k, 1e-9 * k),
        };

        let inter = l1.intersection(&l2).unwrap();
        assert!(inter.x.abs() <= 1e-12 * k && inter.y.abs() <= 1e-12 * k);
        assert!(l1.intersection(&l3).is_none());

        let a = LineSegment {
            from: point(-k, -k),
            to: point(k, k),
        };
        let b = LineSegment {
            from: point(-k, k),
            to: point(k, -k),
        };
        assert!(a.line_intersection_point(&b).is_some());
    }
}

#[test]
fn bounding_box() {
    let l1 = LineSegment {
        from: point(1.0, 5.0),
        to: point(5.0, 7.0),
    };
    let r1 = Box2D {
        min: point(1.0, 5.0),
        max: point(5.0, 7.0),
    };

    let l2 = LineSegment {
        from: point(5.0, 5.0),
        to: point(1.0, 1.0),
    };
    let r2 = Box2D {
        min: point(1.0, 1.0),
        max: point(5.0, 5.0),
    };

    let l3 = LineSegment {
        from: point(3.0, 3.0),
        to: point(1.0, 5.0),
    };
    let r3 = Box2D {
        min: point(1.0, 3.0),
        max: point(3.0, 5.0),
    };

    let cases = [(l1, r1), (l2, r2), (l3, r3)];
    for &(ls, r) in &cases {
        assert_eq!(ls.bounding_box(), r);
    }
}

#[test]
fn distance_to_point() {
    use crate::vector;

    let l1 = Line {
        point: point(2.0f64, 3.0),
        vector: vector(-1.5, 0.0),
    };

    assert!((l1.signed_distance_to_point(&point(1.1, 4.0)) + 1.0).abs() < 1e-9);
    assert!((l1.signed_distance_to_point(&point(2.3, 2.0)) - 1.0).abs() < 1e-9);
    assert!((l1.square_distance_to_point(point(2.3, 2.0)) - 1.0).abs() < 1e-9);

    let s = LineSegment {
        from: point(0.0f64, 0.0),
        to: point(4.0, 0.0),
    };
    assert_eq!(s.square_distance_to_point(point(2.0, 3.0)), 9.0);
    assert_eq!(s.square_distance_to_point(point(6.0, 0.0)), 4.0);
}
