use crate::math::Point;

use thiserror::Error;

/// The visibility sweep's result type.
pub type VisibilityResult = Result<(), VisibilityError>;

/// The visibility sweep's error enumeration.
///
/// Degenerate geometry (parallel or overlapping segments, duplicate points, an observer
/// sitting on a segment) is not an error. Only parameters that cannot produce a
/// meaningful polygon are rejected.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum VisibilityError {
    #[error("Unsupported parameter: {0}")]
    UnsupportedParameter(#[from] UnsupportedParameter),
    #[error("Invalid viewport: min {min:?} is greater than max {max:?}")]
    InvalidViewport { min: Point, max: Point },
}

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnsupportedParameter {
    #[error("Observer position is not a finite number")]
    ObserverIsNaN,
    #[error("Segment {0} has a coordinate that is not a finite number")]
    SegmentIsNaN(usize),
    #[error("Frame margin is not a finite number")]
    MarginIsNaN,
    #[error("Frame margin is negative")]
    NegativeMargin,
}

#[test]
fn error_messages() {
    use std::string::ToString;

    let e: VisibilityError = UnsupportedParameter::SegmentIsNaN(3).into();
    assert_eq!(
        e.to_string(),
        "Unsupported parameter: Segment 3 has a coordinate that is not a finite number"
    );

    let e = VisibilityError::InvalidViewport {
        min: crate::math::point(1.0, 0.0),
        max: crate::math::point(0.0, 1.0),
    };
    assert!(e.to_string().starts_with("Invalid viewport"));
}
