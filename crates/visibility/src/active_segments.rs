//! The segments crossed by the sweep's current ray, ordered by distance to the observer.

use crate::geom::utils::{fuzzy_eq_point, square_distance, turn_angle};
use crate::math::{Line, LineSegment, Point};

use alloc::vec::Vec;

const INACTIVE: usize = usize::MAX;

/// A binary min-heap of segment indices with a reverse lookup from segment index to heap
/// slot.
///
/// The order of two segments depends on the ray they are compared along, which moves
/// with the sweep. The heap is only valid for rays between the events that last modified
/// it, which is enough because the order of non-crossing segments along a ray doesn't
/// change between two events.
pub(crate) struct ActiveSegments {
    heap: Vec<usize>,
    slots: Vec<usize>,
}

impl ActiveSegments {
    pub fn new() -> Self {
        ActiveSegments {
            heap: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// Empties the heap and prepares the reverse lookup for `segment_count` segments.
    pub fn reset(&mut self, segment_count: usize) {
        self.heap.clear();
        self.slots.clear();
        self.slots.resize(segment_count, INACTIVE);
    }

    /// The segment closest to the observer.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.heap.first().cloned()
    }

    #[inline]
    pub fn is_active(&self, segment: usize) -> bool {
        self.slots[segment] != INACTIVE
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Adds a segment, ordering it along the ray from `observer` towards `destination`.
    ///
    /// Segments that are parallel to the ray are not added.
    pub fn insert(
        &mut self,
        segments: &[LineSegment],
        segment: usize,
        observer: Point,
        destination: Point,
    ) {
        if ray_intersection(&segments[segment], observer, destination).is_none() {
            return;
        }

        let slot = self.heap.len();
        self.heap.push(segment);
        self.slots[segment] = slot;

        self.sift_up(segments, slot, observer, destination);
    }

    /// Removes an active segment.
    ///
    /// The last segment of the heap takes its slot and is then moved up or down along
    /// the ray from `observer` towards `destination`.
    pub fn remove(
        &mut self,
        segments: &[LineSegment],
        segment: usize,
        observer: Point,
        destination: Point,
    ) {
        let slot = self.slots[segment];
        if slot == INACTIVE {
            return;
        }
        self.slots[segment] = INACTIVE;

        let last = match self.heap.pop() {
            Some(last) => last,
            None => {
                return;
            }
        };

        if slot == self.heap.len() {
            return;
        }

        self.heap[slot] = last;
        self.slots[last] = slot;

        if slot != 0 {
            let parent = (slot - 1) / 2;
            let a = &segments[self.heap[slot]];
            let b = &segments[self.heap[parent]];
            if less_than(a, b, observer, destination) {
                self.sift_up(segments, slot, observer, destination);
                return;
            }
        }

        self.sift_down(segments, slot, observer, destination);
    }

    fn sift_up(
        &mut self,
        segments: &[LineSegment],
        mut slot: usize,
        observer: Point,
        destination: Point,
    ) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            let a = &segments[self.heap[slot]];
            let b = &segments[self.heap[parent]];
            if !less_than(a, b, observer, destination) {
                break;
            }

            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(
        &mut self,
        segments: &[LineSegment],
        mut slot: usize,
        observer: Point,
        destination: Point,
    ) {
        let len = self.heap.len();
        loop {
            let left = slot * 2 + 1;
            let right = left + 1;
            let less = |a: usize, b: usize| {
                less_than(
                    &segments[self.heap[a]],
                    &segments[self.heap[b]],
                    observer,
                    destination,
                )
            };

            let next = if left < len && less(left, slot) && (right == len || less(left, right)) {
                left
            } else if right < len && less(right, slot) {
                right
            } else {
                break;
            };

            self.swap(slot, next);
            slot = next;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a]] = a;
        self.slots[self.heap[b]] = b;
    }

    #[cfg(test)]
    pub fn segments(&self) -> &[usize] {
        &self.heap
    }
}

/// The intersection of the segment's supporting line with the line going through the
/// observer and the destination.
///
/// Returns `None` if the lines are parallel, or if the destination is the observer.
#[inline]
pub(crate) fn ray_intersection(
    segment: &LineSegment,
    observer: Point,
    destination: Point,
) -> Option<Point> {
    let ray = Line {
        point: observer,
        vector: destination - observer,
    };

    segment.to_line().intersection(&ray)
}

/// Whether segment `a` is closer to the observer than segment `b` along the ray towards
/// `destination`.
///
/// When both segments cross the ray at the same point (typically because they share an
/// endpoint), the one that extends towards the observer's side of the ray the sweep is
/// moving to is considered closer.
///
/// Segments that are parallel to the ray don't block it: the comparison answers `false`
/// if either of them is.
pub(crate) fn less_than(
    a: &LineSegment,
    b: &LineSegment,
    observer: Point,
    destination: Point,
) -> bool {
    let (inter_a, inter_b) = match (
        ray_intersection(a, observer, destination),
        ray_intersection(b, observer, destination),
    ) {
        (Some(ia), Some(ib)) => (ia, ib),
        _ => {
            return false;
        }
    };

    if !fuzzy_eq_point(inter_a, inter_b) {
        return square_distance(inter_a, observer) < square_distance(inter_b, observer);
    }

    let angle_a = turn_angle(far_end(a, inter_a), inter_a, observer);
    let angle_b = turn_angle(far_end(b, inter_b), inter_b, observer);

    if angle_a < 180.0 {
        angle_b > 180.0 || angle_b < angle_a
    } else {
        angle_a < angle_b
    }
}

// The endpoint of the segment that is not at the intersection point.
#[inline]
fn far_end(segment: &LineSegment, intersection: Point) -> Point {
    if fuzzy_eq_point(intersection, segment.from) {
        segment.to
    } else {
        segment.from
    }
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
fn closest_first() {
    let segments = [
        segment(5.0, -1.0, 5.0, 1.0),
        segment(2.0, -1.0, 2.0, 1.0),
        segment(9.0, -1.0, 9.0, 1.0),
        segment(3.0, -1.0, 3.0, 1.0),
    ];
    let observer = point(0.0, 0.0);
    let ray = point(1.0, 0.0);

    let mut active = ActiveSegments::new();
    active.reset(segments.len());
    for i in 0..segments.len() {
        active.insert(&segments, i, observer, ray);
    }

    assert_eq!(active.len(), 4);
    assert_eq!(active.first(), Some(1));

    active.remove(&segments, 1, observer, ray);
    assert_eq!(active.first(), Some(3));
    assert!(!active.is_active(1));

    active.remove(&segments, 3, observer, ray);
    assert_eq!(active.first(), Some(0));

    active.remove(&segments, 2, observer, ray);
    assert_eq!(active.first(), Some(0));
    assert_eq!(active.len(), 1);

    active.remove(&segments, 0, observer, ray);
    assert_eq!(active.first(), None);
}

#[test]
fn slots_follow_the_heap() {
    let segments: Vec<LineSegment> = (0..20)
        .map(|i| {
            let x = 1.0 + ((i * 7) % 20) as f64;
            segment(x, -1.0, x, 1.0)
        })
        .collect();
    let observer = point(0.0, 0.0);
    let ray = point(1.0, 0.0);

    let mut active = ActiveSegments::new();
    active.reset(segments.len());
    for i in 0..segments.len() {
        active.insert(&segments, i, observer, ray);
    }

    for i in (0..segments.len()).step_by(3) {
        active.remove(&segments, i, observer, ray);
    }

    for (slot, &s) in active.segments().iter().enumerate() {
        assert_eq!(active.slots[s], slot);
    }

    // Popping the first segment repeatedly yields increasing distances.
    let mut previous = 0.0;
    while let Some(first) = active.first() {
        let x = segments[first].from.x;
        assert!(x > previous);
        previous = x;
        active.remove(&segments, first, observer, ray);
    }
}

#[test]
fn parallel_segments_are_not_inserted() {
    let segments = [segment(1.0, 0.0, 5.0, 0.0), segment(1.0, 1.0, 5.0, 1.0)];
    let observer = point(0.0, 0.0);

    let mut active = ActiveSegments::new();
    active.reset(segments.len());
    active.insert(&segments, 0, observer, point(1.0, 0.0));
    active.insert(&segments, 1, observer, point(1.0, 0.0));

    assert_eq!(active.len(), 0);
    assert!(!active.is_active(0));
    assert!(!less_than(&segments[0], &segments[1], observer, point(1.0, 0.0)));
}

#[test]
fn tie_break_on_shared_endpoint() {
    // Both segments touch the ray at (5, 0). `a` goes up and `b` goes down and away.
    let a = segment(5.0, 0.0, 5.0, 5.0);
    let b = segment(5.0, 0.0, 10.0, -5.0);
    let observer = point(0.0, 0.0);
    let destination = point(5.0, 0.0);

    assert!(less_than(&a, &b, observer, destination));
    assert!(!less_than(&b, &a, observer, destination));
}
