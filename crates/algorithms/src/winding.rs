// Compute the winding of a polygon.

use crate::area::signed_area;
use crate::geom::{Polygon, Scalar};

/// The direction of a polygon's vertices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Winding {
    /// Counter-clockwise in a y-up coordinate system.
    Positive,
    /// Clockwise in a y-up coordinate system.
    Negative,
}

/// Compute the winding of a polygon.
///
/// The polygon is expected to have no self-intersections, otherwise the result
/// is unspecified.
///
/// Returns `None` if the area of the polygon is zero.
pub fn compute_winding<S: Scalar>(polygon: Polygon<S>) -> Option<Winding> {
    let area = signed_area(polygon);
    if area > S::ZERO {
        Some(Winding::Positive)
    } else if area < S::ZERO {
        Some(Winding::Negative)
    } else {
        None
    }
}

#[test]
fn polygon_winding() {
    use crate::geom::point;

    let ccw = [
        point(0.0f64, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ];
    let cw = [
        point(0.0f64, 0.0),
        point(0.0, 1.0),
        point(1.0, 1.0),
        point(1.0, 0.0),
    ];
    let flat = [point(0.0f64, 0.0), point(1.0, 0.0), point(2.0, 0.0)];

    assert_eq!(compute_winding(Polygon::new(&ccw)), Some(Winding::Positive));
    assert_eq!(compute_winding(Polygon::new(&cw)), Some(Winding::Negative));
    assert_eq!(compute_winding(Polygon::new(&flat)), None);
}
