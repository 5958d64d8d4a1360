//! Read-only polygon views.

use crate::scalar::Scalar;
use crate::{LineSegment, Point};

/// A closed polygon borrowing its vertices.
///
/// The last vertex is implicitly connected to the first one, the point list must not
/// repeat the first vertex at the end.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Polygon<'l, S> {
    pub points: &'l [Point<S>],
}

impl<'l, S: Scalar> Polygon<'l, S> {
    #[inline]
    pub fn new(points: &'l [Point<S>]) -> Self {
        Polygon { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the edges, including the closing one.
    pub fn edges(&self) -> Edges<'l, S> {
        Edges {
            points: self.points,
            idx: 0,
        }
    }

    /// The smallest coordinate over both axes, or `None` for an empty polygon.
    pub fn min_coordinate(&self) -> Option<S> {
        let mut iter = self.points.iter();
        let first = iter.next()?;
        let mut min = S::min(first.x, first.y);
        for p in iter {
            min = S::min(min, S::min(p.x, p.y));
        }

        Some(min)
    }
}

impl<'l, S> From<&'l [Point<S>]> for Polygon<'l, S> {
    fn from(points: &'l [Point<S>]) -> Self {
        Polygon { points }
    }
}

/// Iterator over the edges of a [`Polygon`].
///
/// Yields `points[i] -> points[(i + 1) % len]` for every vertex.
#[derive(Clone)]
pub struct Edges<'l, S> {
    points: &'l [Point<S>],
    idx: usize,
}

impl<'l, S: Scalar> Iterator for Edges<'l, S> {
    type Item = LineSegment<S>;

    fn next(&mut self) -> Option<LineSegment<S>> {
        let len = self.points.len();
        if self.idx >= len {
            return None;
        }

        let from = self.points[self.idx];
        let to = self.points[(self.idx + 1) % len];
        self.idx += 1;

        Some(LineSegment { from, to })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.points.len() - self.idx;
        (n, Some(n))
    }
}

#[test]
fn polygon_edges() {
    use crate::point;

    let pts = [
        point(0.0f64, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
    ];
    let poly = Polygon::new(&pts);

    let mut edges = poly.edges();
    assert_eq!(edges.size_hint(), (3, Some(3)));
    assert_eq!(edges.next().map(|e| e.to), Some(point(1.0, 0.0)));
    assert_eq!(edges.next().map(|e| e.to), Some(point(1.0, 1.0)));
    let closing = edges.next().unwrap();
    assert_eq!(closing.from, point(1.0, 1.0));
    assert_eq!(closing.to, point(0.0, 0.0));
    assert!(edges.next().is_none());

    assert_eq!(poly.min_coordinate(), Some(0.0));
}

#[test]
fn empty_polygon() {
    let pts: [Point<f64>; 0] = [];
    let poly = Polygon::new(&pts);

    assert!(poly.is_empty());
    assert_eq!(poly.edges().count(), 0);
    assert_eq!(poly.min_coordinate(), None);
}
