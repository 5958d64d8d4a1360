#![deny(bare_trait_objects)]

//! 2D visibility polygons.
//!
//! Given an observer and a set of opaque line segments, compute the region that the
//! observer can see, test points against that region, and prepare segment soups so that
//! they can be used as occluders.
//!
//! This crate reexports the following sub-crates:
//!
//! - [sightline_visibility](https://docs.rs/sightline_visibility/) (as `visibility`): the
//!   radial sweep computing visibility polygons, and the segment preparation helpers.
//! - [sightline_algorithms](https://docs.rs/sightline_algorithms/) (as `algorithms`):
//!   point-in-polygon test, bounding boxes, winding and simplification of polygons.
//! - [sightline_geom](https://docs.rs/sightline_geom/) (as `geom`): the underlying
//!   geometric primitives.
//!
//! # Example
//!
//! ```
//! use sightline::math::{point, LineSegment};
//!
//! // A square room.
//! let room = [
//!     point(0.0, 0.0),
//!     point(10.0, 0.0),
//!     point(10.0, 10.0),
//!     point(0.0, 10.0),
//! ];
//! let mut walls = sightline::polygons_to_segments(&[room]);
//! // A pillar in the middle of it.
//! walls.push(LineSegment { from: point(4.0, 5.0), to: point(6.0, 5.0) });
//!
//! let visible = sightline::compute_visibility_polygon(point(5.0, 2.0), &walls);
//!
//! assert!(sightline::is_point_in_polygon(point(1.0, 8.0), &visible));
//! assert!(!sightline::is_point_in_polygon(point(5.0, 8.0), &visible));
//! ```

pub extern crate sightline_algorithms;
pub extern crate sightline_visibility;

pub use sightline_algorithms as algorithms;
pub use sightline_visibility as visibility;
pub use visibility::geom;

pub use visibility::math;

pub use visibility::{
    compute_visibility_polygon, compute_visibility_polygon_in_viewport, is_point_in_polygon,
    polygons_to_segments, sanitize_segments, VisibilityError, VisibilityOptions,
    VisibilityResult, VisibilitySweep,
};
