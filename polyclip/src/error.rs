//! Error type for every fallible polyclip entry point.
//!
//! Only configuration/range problems are errors. Degenerate or self intersecting geometry is valid
//! input and never produces an error.

/// Result alias used by polyclip's fallible operations.
pub type Result<T> = std::result::Result<T, ClipperError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClipperError {
    #[error("coordinate ({x}, {y}) is outside the supported range of +/-{max}", max = crate::MAX_COORD)]
    CoordinateOutOfRange { x: i64, y: i64 },

    #[error("coordinate ({x}, {y}) cannot be scaled by {scale} into the integer domain")]
    ScaledCoordinateOutOfRange { x: f64, y: f64, scale: f64 },

    #[error("precision {0} is outside the supported range 0..={max}", max = crate::MAX_PRECISION)]
    PrecisionOutOfRange(u32),

    #[error("offset delta {0} is not a finite value in the integer domain")]
    InvalidOffsetDelta(f64),
}
