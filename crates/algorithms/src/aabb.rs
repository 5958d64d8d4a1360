//! Bounding rectangle computation for point sets and segment lists.

use crate::geom::{point, Box2D, LineSegment, Point, Scalar};

/// Computes the smallest axis-aligned rectangle that contains the points.
///
/// Returns an empty rectangle at the origin if there is no point.
pub fn bounding_box<S, Iter>(points: Iter) -> Box2D<S>
where
    S: Scalar,
    Iter: IntoIterator<Item = Point<S>>,
{
    let mut min = point(S::MAX, S::MAX);
    let mut max = point(S::MIN, S::MIN);
    for p in points {
        min = Point::min(min, p);
        max = Point::max(max, p);
    }

    // Return an empty rectangle by default if there was no point.
    if min == point(S::MAX, S::MAX) {
        return Box2D::zero();
    }

    Box2D { min, max }
}

/// Computes the smallest axis-aligned rectangle that contains all of the segments.
pub fn segments_bounding_box<S: Scalar>(segments: &[LineSegment<S>]) -> Box2D<S> {
    bounding_box(segments.iter().flat_map(|s| [s.from, s.to]))
}

#[test]
fn simple_bounding_box() {
    let points = [
        point(-10.0f64, -3.0),
        point(0.0, -12.0),
        point(3.0, 4.0),
        point(5.0, 3.0),
    ];

    assert_eq!(
        bounding_box(points.iter().cloned()),
        Box2D {
            min: point(-10.0, -12.0),
            max: point(5.0, 4.0)
        },
    );

    let segments = [
        LineSegment {
            from: point(0.0f64, 0.0),
            to: point(-1.0, 2.0),
        },
        LineSegment {
            from: point(3.0, -4.0),
            to: point(1.0, -1.0),
        },
    ];

    assert_eq!(
        segments_bounding_box(&segments),
        Box2D {
            min: point(-1.0, -4.0),
            max: point(3.0, 2.0)
        },
    );

    assert_eq!(segments_bounding_box::<f64>(&[]), Box2D::zero());
}
