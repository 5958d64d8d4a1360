//! Prepare occluder segments for the sweep.

use crate::geom::utils::{fuzzy_eq_point, square_distance};
use crate::geom::Polygon;
use crate::math::{LineSegment, Point};

use alloc::vec::Vec;
use core::cmp::Ordering;

/// Splits the segments wherever they cross or touch each other.
///
/// Every segment is cut at each point where it meets another segment, except at its own
/// endpoints. After this, no two segments of the output properly cross each other, which
/// is what the visibility sweep expects.
///
/// The cost is quadratic in the number of segments.
pub fn break_intersections(segments: &[LineSegment]) -> Vec<LineSegment> {
    let mut output = Vec::with_capacity(segments.len());
    let mut split_points = Vec::new();

    for (i, segment) in segments.iter().enumerate() {
        split_points.clear();
        for (j, other) in segments.iter().enumerate() {
            if i == j || !segment.crosses_or_touches(other) {
                continue;
            }

            // Parallel segments don't split each other.
            let intersection = match segment.line_intersection_point(other) {
                Some(p) => p,
                None => {
                    continue;
                }
            };

            if fuzzy_eq_point(intersection, segment.from)
                || fuzzy_eq_point(intersection, segment.to)
            {
                continue;
            }

            split_points.push(intersection);
        }

        split_segment(segment, &mut split_points, &mut output);
    }

    output
}

/// Converts closed polygons into occluder segments.
///
/// Each vertex is connected to the next one, and the last vertex to the first one.
pub fn polygons_to_segments<P: AsRef<[Point]>>(polygons: &[P]) -> Vec<LineSegment> {
    let mut output = Vec::new();
    for polygon in polygons {
        output.extend(Polygon::new(polygon.as_ref()).edges());
    }

    output
}

/// Cuts `segment` at each of the split points, appending the pieces to `output` in order
/// from `segment.from` to `segment.to`.
///
/// The split points are expected to be on the segment. They are sorted in place, and the
/// ones that are equal within epsilon to the previous one are ignored.
pub(crate) fn split_segment(
    segment: &LineSegment,
    split_points: &mut [Point],
    output: &mut Vec<LineSegment>,
) {
    let origin = segment.from;
    split_points.sort_by(|a, b| {
        square_distance(*a, origin)
            .partial_cmp(&square_distance(*b, origin))
            .unwrap_or(Ordering::Equal)
    });

    let mut start = segment.from;
    for &p in split_points.iter() {
        if fuzzy_eq_point(p, start) {
            continue;
        }
        output.push(LineSegment { from: start, to: p });
        start = p;
    }

    output.push(LineSegment {
        from: start,
        to: segment.to,
    });
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
    LineSegment {
        from: point(x1, y1),
        to: point(x2, y2),
    }
}

#[test]
fn cross() {
    let input = [segment(-1.0, -1.0, 1.0, 1.0), segment(-1.0, 1.0, 1.0, -1.0)];
    let output = break_intersections(&input);

    assert_eq!(
        output,
        &[
            segment(-1.0, -1.0, 0.0, 0.0),
            segment(0.0, 0.0, 1.0, 1.0),
            segment(-1.0, 1.0, 0.0, 0.0),
            segment(0.0, 0.0, 1.0, -1.0),
        ][..]
    );

    for (i, a) in output.iter().enumerate() {
        for b in &output[i + 1..] {
            assert!(!a.intersects(b), "{:?} crosses {:?}", a, b);
        }
    }
}

#[test]
fn small_cross() {
    let k = 1e-4;
    let input = [segment(-k, -k, k, k), segment(-k, k, k, -k)];
    let output = break_intersections(&input);

    assert_eq!(output.len(), 4);
    for s in &output {
        let center = if s.from == input[0].from || s.from == input[1].from {
            s.to
        } else {
            s.from
        };
        assert!(center.x.abs() < 1e-12 && center.y.abs() < 1e-12);
    }
}

#[test]
fn several_crossings_are_ordered() {
    let input = [
        segment(0.0, 0.0, 8.0, 0.0),
        segment(6.0, -1.0, 6.0, 1.0),
        segment(2.0, -1.0, 2.0, 1.0),
    ];
    let output = break_intersections(&input);

    assert_eq!(
        &output[..3],
        &[
            segment(0.0, 0.0, 2.0, 0.0),
            segment(2.0, 0.0, 6.0, 0.0),
            segment(6.0, 0.0, 8.0, 0.0),
        ][..]
    );
    assert_eq!(output.len(), 7);
}

#[test]
fn shared_endpoints_are_kept() {
    // An L shape: the segments touch at their endpoints only.
    let input = [segment(0.0, 0.0, 5.0, 0.0), segment(5.0, 0.0, 5.0, 5.0)];
    assert_eq!(break_intersections(&input), &input[..]);

    // A T junction: only the bar is split.
    let input = [segment(0.0, 0.0, 10.0, 0.0), segment(5.0, 0.0, 5.0, 5.0)];
    assert_eq!(
        break_intersections(&input),
        &[
            segment(0.0, 0.0, 5.0, 0.0),
            segment(5.0, 0.0, 10.0, 0.0),
            segment(5.0, 0.0, 5.0, 5.0),
        ][..]
    );
}

#[test]
fn concurrent_segments() {
    // Three segments going through the origin split each other once.
    let input = [
        segment(-1.0, 0.0, 1.0, 0.0),
        segment(0.0, -1.0, 0.0, 1.0),
        segment(-1.0, -1.0, 1.0, 1.0),
    ];
    let output = break_intersections(&input);

    assert_eq!(output.len(), 6);
    for s in &output {
        assert!(s.from == point(0.0, 0.0) || s.to == point(0.0, 0.0));
    }
}

#[test]
fn polygons() {
    let square = [
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ];
    let triangle = alloc::vec![point(5.0, 5.0), point(6.0, 5.0), point(5.0, 6.0)];

    let segments = polygons_to_segments(&[&square[..], &triangle[..]]);
    assert_eq!(segments.len(), 7);
    assert_eq!(segments[3], segment(0.0, 1.0, 0.0, 0.0));
    assert_eq!(segments[6], segment(5.0, 6.0, 5.0, 5.0));

    let empty: [Vec<Point>; 0] = [];
    assert!(polygons_to_segments(&empty).is_empty());
}
