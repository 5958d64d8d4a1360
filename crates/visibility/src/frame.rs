//! Bound the scene with rectangular frames.
//!
//! The sweep needs every ray leaving the observer to hit a segment, otherwise the
//! polygon would be unbounded. A rectangle around the whole scene guarantees it.
//! Viewports work the same way with a rectangle that also clips the occluders.

use crate::algorithms::aabb::bounding_box;
use crate::geom::utils::fuzzy_eq_point;
use crate::math::{point, vector, Box2D, LineSegment, Point, EPSILON};
use crate::sanitize::split_segment;

use alloc::vec::Vec;
use core::iter::once;

/// The four edges of a rectangle, in the order bottom, right, top, left.
///
/// Each edge starts where the previous one ends.
pub fn frame_edges(rect: &Box2D) -> [LineSegment; 4] {
    let bottom_right = point(rect.max.x, rect.min.y);
    let top_left = point(rect.min.x, rect.max.y);

    [
        LineSegment {
            from: rect.min,
            to: bottom_right,
        },
        LineSegment {
            from: bottom_right,
            to: rect.max,
        },
        LineSegment {
            from: rect.max,
            to: top_left,
        },
        LineSegment {
            from: top_left,
            to: rect.min,
        },
    ]
}

/// The smallest rectangle containing the observer and every segment endpoint, expanded by
/// `margin` in each direction.
pub fn scene_bounds(observer: Point, segments: &[LineSegment], margin: f64) -> Box2D {
    let points = once(observer).chain(segments.iter().flat_map(|s| [s.from, s.to]));
    let bounds = bounding_box(points);

    bounds.inflate(margin, margin)
}

/// Appends the edges of the rectangle that bounds the scene.
///
/// With no other occluder, the visibility polygon is this rectangle.
pub fn add_scene_frame(observer: Point, segments: &mut Vec<LineSegment>, margin: f64) {
    let bounds = scene_bounds(observer, segments, margin);
    segments.extend_from_slice(&frame_edges(&bounds));
}

/// Clips the segments to the viewport, appending the pieces that are inside of it to
/// `output`.
///
/// Segments that are entirely on the outer side of one of the viewport's edges are
/// dropped. The others are split where they cross the viewport's border, and only the
/// pieces with both endpoints in the viewport (within epsilon) are kept. Zero-length
/// pieces are dropped.
pub fn clip_to_viewport(
    segments: &[LineSegment],
    viewport: &Box2D,
    output: &mut Vec<LineSegment>,
) {
    let border = frame_edges(viewport);
    let mut split_points = Vec::new();
    let mut pieces = Vec::new();

    for segment in segments {
        if is_outside(segment, viewport) {
            continue;
        }

        split_points.clear();
        for edge in &border {
            if !segment.crosses_or_touches(edge) {
                continue;
            }

            let intersection = match segment.line_intersection_point(edge) {
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

        pieces.clear();
        split_segment(segment, &mut split_points, &mut pieces);

        for piece in &pieces {
            if contains_fuzzy(viewport, piece.from)
                && contains_fuzzy(viewport, piece.to)
                && !fuzzy_eq_point(piece.from, piece.to)
            {
                output.push(*piece);
            }
        }
    }
}

/// Appends the viewport's border, pushed slightly outwards so that the clipped segments
/// touching the border stay in front of it.
pub fn add_viewport_frame(viewport: &Box2D, output: &mut Vec<LineSegment>) {
    let inflated = viewport.inflate(EPSILON * 10.0, EPSILON * 10.0);
    output.extend_from_slice(&frame_edges(&inflated));
}

/// Whether both endpoints of the segment are beyond the same edge of the rectangle.
fn is_outside(segment: &LineSegment, rect: &Box2D) -> bool {
    let (a, b) = (segment.from, segment.to);

    (a.x < rect.min.x && b.x < rect.min.x)
        || (a.y < rect.min.y && b.y < rect.min.y)
        || (a.x > rect.max.x && b.x > rect.max.x)
        || (a.y > rect.max.y && b.y > rect.max.y)
}

fn contains_fuzzy(rect: &Box2D, p: Point) -> bool {
    let eps = vector(EPSILON, EPSILON);
    let min = rect.min - eps;
    let max = rect.max + eps;

    p.x >= min.x && p.y >= min.y && p.x <= max.x && p.y <= max.y
}

#[cfg(test)]
fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
    LineSegment {
        from: point(x1, y1),
        to: point(x2, y2),
    }
}

#[test]
fn edges_are_chained() {
    let rect = Box2D {
        min: point(-1.0, -2.0),
        max: point(3.0, 4.0),
    };
    let edges = frame_edges(&rect);

    assert_eq!(edges[0], segment(-1.0, -2.0, 3.0, -2.0));
    assert_eq!(edges[1], segment(3.0, -2.0, 3.0, 4.0));
    assert_eq!(edges[2], segment(3.0, 4.0, -1.0, 4.0));
    assert_eq!(edges[3], segment(-1.0, 4.0, -1.0, -2.0));
    for i in 0..4 {
        assert_eq!(edges[i].to, edges[(i + 1) % 4].from);
    }
}

#[test]
fn scene_frame() {
    let segments = [segment(2.0, 3.0, 4.0, -5.0)];

    assert_eq!(
        scene_bounds(point(0.0, 0.0), &segments, 1.0),
        Box2D {
            min: point(-1.0, -6.0),
            max: point(5.0, 4.0),
        }
    );

    // The observer alone.
    let mut framed = Vec::new();
    add_scene_frame(point(0.0, 0.0), &mut framed, 1.0);
    assert_eq!(framed.len(), 4);
    assert_eq!(framed[0], segment(-1.0, -1.0, 1.0, -1.0));
}

#[test]
fn clipping() {
    let viewport = Box2D {
        min: point(0.0, 0.0),
        max: point(10.0, 10.0),
    };

    let segments = [
        // Inside.
        segment(1.0, 1.0, 2.0, 2.0),
        // Entirely on the left.
        segment(-5.0, 0.0, -1.0, 20.0),
        // Crosses the right edge.
        segment(5.0, 5.0, 15.0, 5.0),
        // Goes through the whole viewport.
        segment(-5.0, 3.0, 15.0, 3.0),
        // Outside, but not on the outer side of a single edge.
        segment(-5.0, 8.0, 5.0, 18.0),
    ];

    let mut output = Vec::new();
    clip_to_viewport(&segments, &viewport, &mut output);

    assert_eq!(
        output,
        &[
            segment(1.0, 1.0, 2.0, 2.0),
            segment(5.0, 5.0, 10.0, 5.0),
            segment(0.0, 3.0, 10.0, 3.0),
        ][..]
    );
}

#[test]
fn clipping_drops_degenerate_pieces() {
    let viewport = Box2D {
        min: point(0.0, 0.0),
        max: point(10.0, 10.0),
    };

    // Only touches the viewport's corner.
    let segments = [segment(-5.0, 5.0, 5.0, -5.0)];

    let mut output = Vec::new();
    clip_to_viewport(&segments, &viewport, &mut output);

    assert!(output.is_empty());
}

#[test]
fn viewport_frame() {
    let viewport = Box2D {
        min: point(0.0, 0.0),
        max: point(10.0, 10.0),
    };

    let mut output = Vec::new();
    add_viewport_frame(&viewport, &mut output);

    assert_eq!(output.len(), 4);
    assert!(output[0].from.x < 0.0 && output[0].from.y < 0.0);
    assert!(output[1].to.x > 10.0 && output[1].to.y > 10.0);
}
