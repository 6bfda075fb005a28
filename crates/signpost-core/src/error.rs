//! Error types for geometry validation.
//!
//! Placement inputs are plain geometric values supplied by the host. Malformed
//! values are rejected eagerly with a [`GeometryError`] instead of producing a
//! degenerate layout.

use thiserror::Error;

/// A violated precondition on geometric input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{what} contains a non-finite coordinate")]
    NonFinite { what: &'static str },

    #[error("{what} must not be negative (got {value})")]
    Negative { what: &'static str, value: f32 },

    #[error("arrow height must be positive (got {0})")]
    NonPositiveArrow(f32),

    #[error("maximum width ratio must be in (0, 1] (got {0})")]
    InvalidRatio(f32),
}

/// Checks that a scalar is finite and non-negative.
pub(crate) fn check_non_negative(what: &'static str, value: f32) -> Result<(), GeometryError> {
    if !value.is_finite() {
        return Err(GeometryError::NonFinite { what });
    }
    if value < 0.0 {
        return Err(GeometryError::Negative { what, value });
    }
    Ok(())
}
