#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]
#![no_std]

//! Visibility polygons among 2D occluding segments.
//!
//! This crate is reexported in [sightline](https://docs.rs/sightline/).
//!
//! # Overview
//!
//! Given an observer position and a set of opaque line segments, the
//! [`VisibilitySweep`] computes the polygon made of every point that can be seen from
//! the observer. The result is ordered by increasing angle around the observer, starting
//! from the positive x direction.
//!
//! The algorithm is a radial sweep:
//!
//! - A rectangular frame slightly larger than the scene is appended to the
//!   segments so that the polygon is always bounded.
//! - Both endpoints of every segment are sorted by angle around the observer.
//! - The sweep visits the endpoints in that order, while maintaining a binary heap of
//!   the segments crossed by the current ray, sorted by distance to the observer.
//! - Every time the closest segment changes, the polygon gets one or two new vertices.
//!
//! The complexity is `O(n log n)` for `n` segments.
//!
//! # Robustness
//!
//! Segments are expected not to cross each other. Crossings can be split beforehand with
//! [`sanitize_segments`] (or by setting [`VisibilityOptions::break_intersections`]).
//!
//! Degenerate inputs such as zero-length segments, duplicate points, collinear
//! segments or an observer placed on a segment don't cause failures. They can however
//! produce vertices that are equal within epsilon; [`VisibilityOptions::simplify`]
//! removes those.
//!
//! # Viewports
//!
//! When a viewport rectangle is provided, segments are clipped against it and its border
//! is added as an occluder, so that the resulting polygon does not extend beyond it
//! (unless the observer itself is outside of the viewport).
//!
//! # Examples
//!
//! ```
//! use sightline_visibility::{compute_visibility_polygon, polygons_to_segments};
//! use sightline_visibility::math::{point, LineSegment};
//!
//! let room = [
//!     point(-10.0, -10.0),
//!     point(10.0, -10.0),
//!     point(10.0, 10.0),
//!     point(-10.0, 10.0),
//! ];
//! let mut segments = polygons_to_segments(&[&room[..]]);
//! segments.push(LineSegment { from: point(5.0, -1.0), to: point(5.0, 1.0) });
//!
//! let polygon = compute_visibility_polygon(point(0.0, 0.0), &segments);
//! assert!(sightline_visibility::is_point_in_polygon(point(3.0, 0.0), &polygon));
//! assert!(!sightline_visibility::is_point_in_polygon(point(8.0, 0.0), &polygon));
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use sightline_algorithms as algorithms;
pub use sightline_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod active_segments;
mod error;
pub mod frame;
pub mod sanitize;
mod sweep;


#[doc(inline)]
pub use crate::error::*;

#[doc(inline)]
pub use crate::sweep::*;

#[doc(inline)]
pub use crate::sanitize::{break_intersections as sanitize_segments, polygons_to_segments};

use crate::math::{Box2D, LineSegment, Point};
use alloc::vec::Vec;

pub mod math {
    //! The f64 geometry types used throughout this crate.

    pub use crate::geom::{point, vector};

    /// Alias for `euclid::default::Point2D<f64>`.
    pub type Point = crate::geom::Point<f64>;
    /// Alias for `euclid::default::Vector2D<f64>`.
    pub type Vector = crate::geom::Vector<f64>;
    /// Alias for `euclid::default::Box2D<f64>`.
    pub type Box2D = crate::geom::Box2D<f64>;
    pub type LineSegment = crate::geom::LineSegment<f64>;
    pub type Line = crate::geom::Line<f64>;

    /// The tolerance shared by every fuzzy comparison of the sweep.
    pub const EPSILON: f64 = <f64 as crate::geom::Scalar>::EPSILON;
}

/// Parameters for the visibility sweep.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct VisibilityOptions {
    /// Clip the occluders to this rectangle, and use its border as an occluder.
    ///
    /// Default value: `None`.
    pub viewport: Option<Box2D>,

    /// Distance between the bounding box of the scene (observer included) and the frame
    /// that is added around it.
    ///
    /// Must be finite and positive or zero.
    /// Default value: `VisibilityOptions::DEFAULT_FRAME_MARGIN`.
    pub frame_margin: f64,

    /// Split segments at their intersections before running the sweep.
    ///
    /// The sweep expects segments that don't cross each other. Splitting them has a
    /// quadratic cost in the number of segments.
    ///
    /// Default value: `false`.
    pub break_intersections: bool,

    /// Remove consecutive vertices of the output that are equal within epsilon.
    ///
    /// Default value: `false`.
    pub simplify: bool,
}

impl VisibilityOptions {
    pub const DEFAULT_FRAME_MARGIN: f64 = 1.0;

    pub const DEFAULT: Self = VisibilityOptions {
        viewport: None,
        frame_margin: Self::DEFAULT_FRAME_MARGIN,
        break_intersections: false,
        simplify: false,
    };

    /// Default options with a viewport.
    #[inline]
    pub fn viewport(min: Point, max: Point) -> Self {
        Self::DEFAULT.with_viewport(Box2D { min, max })
    }

    #[inline]
    pub const fn with_viewport(mut self, viewport: Box2D) -> Self {
        self.viewport = Some(viewport);
        self
    }

    #[inline]
    pub const fn with_frame_margin(mut self, margin: f64) -> Self {
        self.frame_margin = margin;
        self
    }

    #[inline]
    pub const fn with_intersections_broken(mut self, enabled: bool) -> Self {
        self.break_intersections = enabled;
        self
    }

    #[inline]
    pub const fn with_simplification(mut self, enabled: bool) -> Self {
        self.simplify = enabled;
        self
    }
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Computes the visibility polygon of `observer` among the occluding `segments`.
///
/// The segments must not cross each other, see [`sanitize_segments`].
///
/// Never fails: if a coordinate is not a finite number, a warning is logged and
/// the returned polygon is empty.
pub fn compute_visibility_polygon(observer: Point, segments: &[LineSegment]) -> Vec<Point> {
    compute_with_options(observer, segments, &VisibilityOptions::DEFAULT)
}

/// Computes the visibility polygon of `observer` among the occluding `segments`, clipped
/// to the rectangle between `viewport_min` and `viewport_max`.
///
/// Never fails: if a parameter is invalid, a warning is logged and the returned polygon
/// is empty.
pub fn compute_visibility_polygon_in_viewport(
    observer: Point,
    segments: &[LineSegment],
    viewport_min: Point,
    viewport_max: Point,
) -> Vec<Point> {
    compute_with_options(
        observer,
        segments,
        &VisibilityOptions::viewport(viewport_min, viewport_max),
    )
}

/// Returns whether `point` is inside or on the border of `polygon`.
///
/// The polygon is implicitly closed and may be concave. An empty polygon contains
/// nothing.
#[inline]
pub fn is_point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    algorithms::hit_test::hit_test_points(point, polygon)
}

fn compute_with_options(
    observer: Point,
    segments: &[LineSegment],
    options: &VisibilityOptions,
) -> Vec<Point> {
    let mut output = Vec::new();
    let mut sweep = VisibilitySweep::new();
    if let Err(e) = sweep.compute(observer, segments, options, &mut output) {
        log::warn!("Could not compute the visibility polygon: {}", e);
    }

    output
}

#[test]
fn options_builder() {
    use crate::math::point;

    let options = VisibilityOptions::DEFAULT
        .with_frame_margin(5.0)
        .with_simplification(true);

    assert_eq!(options.frame_margin, 5.0);
    assert!(options.simplify);
    assert!(!options.break_intersections);
    assert_eq!(options.viewport, None);
    assert_eq!(VisibilityOptions::default(), VisibilityOptions::DEFAULT);

    let options = VisibilityOptions::viewport(point(0.0, 0.0), point(10.0, 5.0));
    assert_eq!(
        options.viewport,
        Some(Box2D {
            min: point(0.0, 0.0),
            max: point(10.0, 5.0)
        })
    );
}
