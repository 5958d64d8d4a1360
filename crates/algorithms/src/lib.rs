#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]
#![no_std]

//! Polygon queries used alongside the visibility sweep.
//!
//! This crate is reexported in [sightline](https://docs.rs/sightline/).

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

pub extern crate sightline_geom as geom;

pub mod aabb;
pub mod area;
pub mod hit_test;
pub mod simplify;
pub mod winding;

pub use crate::geom::euclid;

pub mod math {
    //! f64 aliases for the geometry types.

    pub use crate::geom::{point, vector};

    pub type Point = crate::geom::Point<f64>;
    pub type Vector = crate::geom::Vector<f64>;
    pub type Box2D = crate::geom::Box2D<f64>;
}
