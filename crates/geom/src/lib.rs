#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Simple 2D geometric primitives on top of euclid.
//!
//! This crate is reexported in [sightline](https://docs.rs/sightline/).
//!
//! # Overview.
//!
//! This crate implements the maths the visibility sweep is built on:
//!
//! - directed line segments and infinite lines,
//! - line/line and segment/segment intersections,
//! - polar angles and turn angles measured in degrees,
//! - fuzzy point equality,
//! - read-only polygon views.
//!
//! # Epsilon
//!
//! All of the fuzzy comparisons in this crate and in the crates built on top of it go
//! through a single constant, [`Scalar::EPSILON`]. Using the same value for angle grouping,
//! point equality and parallelism tests keeps tie-breaking consistent: two points that
//! compare equal when deciding whether a ray hits a segment endpoint also compare equal
//! when the sweep merges its vertices.
//!
//! For `f64` the epsilon is `1e-7`, which is the precision the visibility sweep is tuned for.

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod line;
pub mod polygon;
pub mod utils;

#[doc(inline)]
pub use crate::line::{Line, LineSegment};
#[doc(inline)]
pub use crate::polygon::Polygon;
#[doc(inline)]
pub use crate::utils::Orientation;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;

        /// Half a turn, in degrees.
        const HALF_TURN: Self;
        /// A full turn, in degrees.
        const FULL_TURN: Self;

        const MIN: Self;
        const MAX: Self;

        /// The tolerance used by every fuzzy comparison.
        ///
        /// Epsilon constants are usually not a good way to deal with float precision,
        /// but the visibility sweep relies on all of its components agreeing on when two
        /// values are "the same", which a single constant guarantees.
        const EPSILON: Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;

        const HALF_TURN: Self = 180.0;
        const FULL_TURN: Self = 360.0;

        const MIN: Self = f32::MIN;
        const MAX: Self = f32::MAX;

        const EPSILON: Self = 1e-4;
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;

        const HALF_TURN: Self = 180.0;
        const FULL_TURN: Self = 360.0;

        const MIN: Self = f64::MIN;
        const MAX: Self = f64::MAX;

        const EPSILON: Self = 1e-7;
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Alias for `euclid::default::Box2D`
pub use euclid::default::Box2D;

/// Alias for `euclid::default::Scale`
pub use euclid::default::Scale;

/// Alias for `euclid::default::Transform2D`
pub type Transform<S> = euclid::default::Transform2D<S>;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

pub mod traits {
    use crate::{Point, Scalar, Scale, Transform, Vector};

    pub trait Transformation<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S>;
        fn transform_vector(&self, v: Vector<S>) -> Vector<S>;
    }

    impl<S: Scalar> Transformation<S> for Transform<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            self.transform_point(p)
        }

        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            self.transform_vector(v)
        }
    }

    impl<S: Scalar> Transformation<S> for Scale<S> {
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            (*self).transform_point(p)
        }

        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            (*self).transform_vector(v)
        }
    }

    // Automatically implement Transformation for all &Transformation.
    impl<'l, S: Scalar, T: Transformation<S>> Transformation<S> for &'l T {
        #[inline]
        fn transform_point(&self, p: Point<S>) -> Point<S> {
            (*self).transform_point(p)
        }

        #[inline]
        fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
            (*self).transform_vector(v)
        }
    }
}
