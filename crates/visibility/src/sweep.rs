use crate::active_segments::{ray_intersection, ActiveSegments};
use crate::algorithms::simplify::dedup_points;
use crate::error::{UnsupportedParameter, VisibilityError, VisibilityResult};
use crate::frame::{add_scene_frame, add_viewport_frame, clip_to_viewport};
use crate::geom::utils::{fuzzy_eq_point, polar_angle};
use crate::math::{vector, Box2D, LineSegment, Point, EPSILON};
use crate::sanitize::break_intersections;
use crate::VisibilityOptions;

use alloc::vec::Vec;
use core::cmp::Ordering;
use num_traits::Float;

#[cfg(all(debug_assertions, feature = "std"))]
macro_rules! sweep_log {
    ($obj:ident, $fmt:expr) => (
        if $obj.log {
            log::trace!($fmt);
        }
    );
    ($obj:ident, $fmt:expr, $($arg:tt)*) => (
        if $obj.log {
            log::trace!($fmt, $($arg)*);
        }
    );
}

#[cfg(not(all(debug_assertions, feature = "std")))]
macro_rules! sweep_log {
    ($obj:ident, $fmt:expr) => {};
    ($obj:ident, $fmt:expr, $($arg:tt)*) => {};
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Endpoint {
    From,
    To,
}

#[derive(Copy, Clone, Debug)]
struct SweepEvent {
    segment: usize,
    endpoint: Endpoint,
    /// Angle of the observer as seen from the endpoint, in degrees.
    angle: f64,
}

/// Computes visibility polygons.
///
/// ## Overview
///
/// The sweep appends a frame around the occluders, sorts every segment endpoint by angle
/// around the observer and visits them in order while keeping track of the segment that
/// is closest to the observer along the current ray. The polygon gets new vertices
/// every time that closest segment changes:
///
/// - When the closest segment ends, the polygon follows it to its endpoint, then jumps
///   to the segment behind it.
/// - When a new segment starts in front of the closest one, the polygon jumps from the
///   closest segment to the new one.
///
/// Endpoints whose angles are within epsilon of each other are processed as a single
/// group.
///
/// The resulting polygon starts in the positive x direction from the observer.
///
/// ## Reusing allocations
///
/// A `VisibilitySweep` holds the working memory of the algorithm. It does not carry any
/// state from a computation to the next, but keeping it around avoids reallocating
/// that memory when computing many polygons.
///
/// ## Examples
///
/// ```
/// use sightline_visibility::{VisibilitySweep, VisibilityOptions};
/// use sightline_visibility::math::{point, LineSegment};
///
/// let walls = [
///     LineSegment { from: point(5.0, -1.0), to: point(5.0, 1.0) },
/// ];
///
/// let mut sweep = VisibilitySweep::new();
/// let mut polygon = Vec::new();
///
/// for observer in &[point(0.0, 0.0), point(1.0, 3.0)] {
///     sweep.compute(*observer, &walls, &VisibilityOptions::DEFAULT, &mut polygon).unwrap();
///     assert!(polygon.len() >= 4);
/// }
/// ```
pub struct VisibilitySweep {
    segments: Vec<LineSegment>,
    events: Vec<SweepEvent>,
    active: ActiveSegments,
    log: bool,
}

impl Default for VisibilitySweep {
    fn default() -> Self {
        Self::new()
    }
}

impl VisibilitySweep {
    /// Constructor.
    pub fn new() -> Self {
        #[cfg(all(debug_assertions, feature = "std"))]
        let log = std::env::var("SIGHTLINE_FORCE_LOGGING").is_ok();
        #[cfg(not(all(debug_assertions, feature = "std")))]
        let log = false;

        VisibilitySweep {
            segments: Vec::new(),
            events: Vec::new(),
            active: ActiveSegments::new(),
            log,
        }
    }

    /// Computes the visibility polygon of `observer` among the occluding `segments`.
    ///
    /// The content of `output` is replaced with the vertices of the polygon, ordered by
    /// angle around the observer. If the parameters are rejected, `output` is left empty.
    pub fn compute(
        &mut self,
        observer: Point,
        segments: &[LineSegment],
        options: &VisibilityOptions,
        output: &mut Vec<Point>,
    ) -> VisibilityResult {
        output.clear();

        if let Err(e) = validate(observer, segments, options) {
            sweep_log!(self, "Visibility sweep rejected its parameters: {}.", e);
            return Err(e);
        }

        let sanitized;
        let occluders = if options.break_intersections {
            sanitized = break_intersections(segments);
            &sanitized[..]
        } else {
            segments
        };

        self.segments.clear();
        match options.viewport {
            Some(viewport) => {
                clip_to_viewport(occluders, &viewport, &mut self.segments);
                add_viewport_frame(&viewport, &mut self.segments);
            }
            None => {
                self.segments.extend_from_slice(occluders);
            }
        }
        add_scene_frame(observer, &mut self.segments, options.frame_margin);

        sweep_log!(
            self,
            "Visibility sweep from {:?} among {} segments (frames included).",
            observer,
            self.segments.len()
        );

        self.init_events(observer);
        self.activate_initial_segments(observer);
        self.sweep(observer, output);

        if options.simplify {
            dedup_points(output);
        }

        sweep_log!(self, "Visibility polygon: {:?}", output);

        Ok(())
    }

    /// Enable/disable some verbose logging during the sweep, for
    /// debugging purposes.
    pub fn set_logging(&mut self, is_enabled: bool) {
        #[cfg(all(debug_assertions, feature = "std"))]
        let forced = std::env::var("SIGHTLINE_FORCE_LOGGING").is_ok();

        #[cfg(not(all(debug_assertions, feature = "std")))]
        let forced = false;

        self.log = is_enabled || forced;
    }

    fn init_events(&mut self, observer: Point) {
        self.events.clear();
        self.events.reserve(self.segments.len() * 2);
        for (i, segment) in self.segments.iter().enumerate() {
            self.events.push(SweepEvent {
                segment: i,
                endpoint: Endpoint::From,
                angle: polar_angle(segment.from, observer),
            });
            self.events.push(SweepEvent {
                segment: i,
                endpoint: Endpoint::To,
                angle: polar_angle(segment.to, observer),
            });
        }

        // Stable, so that endpoints with equal angles stay in segment order.
        self.events
            .sort_by(|a, b| a.angle.partial_cmp(&b.angle).unwrap_or(Ordering::Equal));
    }

    /// Inserts the segments that cross the ray going from the observer in the positive x
    /// direction, where the sweep starts.
    fn activate_initial_segments(&mut self, observer: Point) {
        self.active.reset(self.segments.len());

        let start = observer + vector(1.0, 0.0);
        for i in 0..self.segments.len() {
            if crosses_start_ray(&self.segments[i], observer) {
                self.active.insert(&self.segments, i, observer, start);
            }
        }

        sweep_log!(self, "{} segments active at the start.", self.active.len());
    }

    #[cfg_attr(feature = "profiling", inline(never))]
    fn sweep(&mut self, observer: Point, output: &mut Vec<Point>) {
        let mut i = 0;
        while i < self.events.len() {
            let group_start = i;
            let group_angle = self.events[group_start].angle;
            let mut vertex = self.event_position(&self.events[group_start]);
            let before = self.active.first();
            let mut extend = false;
            let mut shorten = false;

            loop {
                let event = self.events[i];
                if self.active.is_active(event.segment) {
                    if Some(event.segment) == before {
                        extend = true;
                        vertex = self.event_position(&event);
                    }
                    self.active
                        .remove(&self.segments, event.segment, observer, vertex);
                } else {
                    self.active
                        .insert(&self.segments, event.segment, observer, vertex);
                    if self.active.first() != before {
                        shorten = true;
                    }
                }

                i += 1;
                if i == self.events.len() || self.events[i].angle >= group_angle + EPSILON {
                    break;
                }
            }

            let first = self.active.first();
            if extend {
                sweep_log!(self, " - extend at {:?} (closest: {:?})", vertex, first);
                output.push(vertex);
                if let Some(p) = self.crossing(first, observer, vertex) {
                    if !fuzzy_eq_point(p, vertex) {
                        output.push(p);
                    }
                }
            } else if shorten {
                sweep_log!(self, " - shorten at {:?} ({:?} -> {:?})", vertex, before, first);
                if let Some(p) = self.crossing(before, observer, vertex) {
                    output.push(p);
                }
                if let Some(p) = self.crossing(first, observer, vertex) {
                    output.push(p);
                }
            }
        }
    }

    #[inline]
    fn event_position(&self, event: &SweepEvent) -> Point {
        let segment = &self.segments[event.segment];
        match event.endpoint {
            Endpoint::From => segment.from,
            Endpoint::To => segment.to,
        }
    }

    // Where the ray towards `destination` crosses the segment's line.
    #[inline]
    fn crossing(
        &self,
        segment: Option<usize>,
        observer: Point,
        destination: Point,
    ) -> Option<Point> {
        let segment = &self.segments[segment?];
        ray_intersection(segment, observer, destination)
    }
}

/// Whether the segment crosses the ray leaving the observer in the positive x direction.
///
/// The test compares the angles of the observer as seen from each endpoint: the segment
/// crosses the ray when one endpoint sees the observer from above, the other from below,
/// and the angular span between them is more than half a turn.
fn crosses_start_ray(segment: &LineSegment, observer: Point) -> bool {
    let a1 = polar_angle(segment.from, observer);
    let a2 = polar_angle(segment.to, observer);

    (a1 > -180.0 && a1 <= 0.0 && a2 <= 180.0 && a2 >= 0.0 && a2 - a1 > 180.0)
        || (a2 > -180.0 && a2 <= 0.0 && a1 <= 180.0 && a1 >= 0.0 && a1 - a2 > 180.0)
}

fn validate(
    observer: Point,
    segments: &[LineSegment],
    options: &VisibilityOptions,
) -> Result<(), VisibilityError> {
    if !is_finite(observer) {
        return Err(UnsupportedParameter::ObserverIsNaN.into());
    }

    for (i, segment) in segments.iter().enumerate() {
        if !is_finite(segment.from) || !is_finite(segment.to) {
            return Err(UnsupportedParameter::SegmentIsNaN(i).into());
        }
    }

    if !Float::is_finite(options.frame_margin) {
        return Err(UnsupportedParameter::MarginIsNaN.into());
    }

    if options.frame_margin < 0.0 {
        return Err(UnsupportedParameter::NegativeMargin.into());
    }

    if let Some(viewport) = options.viewport {
        if !is_valid_viewport(&viewport) {
            return Err(VisibilityError::InvalidViewport {
                min: viewport.min,
                max: viewport.max,
            });
        }
    }

    Ok(())
}

#[inline]
fn is_finite(p: Point) -> bool {
    Float::is_finite(p.x) && Float::is_finite(p.y)
}

fn is_valid_viewport(viewport: &Box2D) -> bool {
    is_finite(viewport.min)
        && is_finite(viewport.max)
        && viewport.min.x <= viewport.max.x
        && viewport.min.y <= viewport.max.y
}

#[test]
fn start_ray() {
    use crate::math::point;

    let observer = point(0.0, 0.0);
    let segment = |x1, y1, x2, y2| LineSegment {
        from: point(x1, y1),
        to: point(x2, y2),
    };

    // Cross the positive x axis, in both directions.
    assert!(crosses_start_ray(&segment(5.0, -1.0, 5.0, 1.0), observer));
    assert!(crosses_start_ray(&segment(3.0, 5.0, 3.0, -5.0), observer));
    assert!(crosses_start_ray(&segment(3.0, -5.0, 3.0, 5.0), observer));

    // Cross the negative x axis.
    assert!(!crosses_start_ray(&segment(-5.0, 1.0, -5.0, -1.0), observer));
    assert!(!crosses_start_ray(&segment(-3.0, 5.0, -3.0, -5.0), observer));

    // An endpoint on the ray sees the observer at 180 degrees.
    assert!(crosses_start_ray(&segment(3.0, 0.0, 3.0, 5.0), observer));
    assert!(!crosses_start_ray(&segment(4.0, -5.0, 4.0, 0.0), observer));

    // Going through the observer: exactly half a turn.
    assert!(!crosses_start_ray(&segment(-5.0, 0.0, 5.0, 0.0), observer));

    // Not crossing the x axis at all.
    assert!(!crosses_start_ray(&segment(1.0, 1.0, 5.0, 2.0), observer));
}
