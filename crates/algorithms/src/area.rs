//! Compute the area of a polygon.

use crate::geom::{vector, Polygon, Scalar};

/// Compute the signed area of a polygon with the shoelace formula.
///
/// The result is positive when the vertices go counter-clockwise in a y-up
/// coordinate system. Self-intersecting polygons get the sum of the signed areas of
/// their loops.
pub fn signed_area<S: Scalar>(polygon: Polygon<S>) -> S {
    let first = match polygon.points.first() {
        Some(first) => *first,
        None => {
            return S::ZERO;
        }
    };

    let mut double_area = S::ZERO;
    let mut v0 = vector(S::ZERO, S::ZERO);
    for p in &polygon.points[1..] {
        let v1 = *p - first;
        double_area += v0.cross(v1);
        v0 = v1;
    }

    double_area * S::HALF
}

#[test]
fn polygon_signed_area() {
    use crate::geom::point;

    let ccw = [
        point(0.0f64, 0.0),
        point(2.0, 0.0),
        point(2.0, 2.0),
        point(0.0, 2.0),
    ];
    let cw = [
        point(0.0f64, 0.0),
        point(0.0, 2.0),
        point(2.0, 2.0),
        point(2.0, 0.0),
    ];
    let triangle = [point(0.0f64, 0.0), point(4.0, 0.0), point(0.0, 3.0)];

    assert_eq!(signed_area(Polygon::new(&ccw)), 4.0);
    assert_eq!(signed_area(Polygon::new(&cw)), -4.0);
    assert_eq!(signed_area(Polygon::new(&triangle)), 6.0);
    assert_eq!(signed_area(Polygon::new(&ccw[..2])), 0.0);
    assert_eq!(signed_area::<f64>(Polygon::new(&[])), 0.0);
}
