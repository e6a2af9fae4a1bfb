//! Error types for curve operations.
//!
//! Covers curve construction, interpolation, and lookup failures for both
//! discount and credit curves.

use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// Not enough data points to construct the curve.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// Tenors are not monotonically increasing.
    #[error("Non-monotonic tenors at index {index}: {prev:.4} >= {current:.4}")]
    NonMonotonicTenors {
        /// Index where monotonicity violation occurred.
        index: usize,
        /// Previous tenor value.
        prev: f64,
        /// Current tenor value.
        current: f64,
    },

    /// Invalid value (NaN, Inf, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why the value is invalid.
        reason: String,
    },

    /// A required curve is not present in the environment.
    #[error("Curve not found: {name}")]
    CurveNotFound {
        /// Name/identifier of the missing curve.
        name: String,
    },
}

impl CurveError {
    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }

    /// Creates a non-monotonic tenors error.
    #[must_use]
    pub fn non_monotonic_tenors(index: usize, prev: f64, current: f64) -> Self {
        Self::NonMonotonicTenors {
            index,
            prev,
            current,
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// Creates a curve not found error.
    #[must_use]
    pub fn curve_not_found(name: impl Into<String>) -> Self {
        Self::CurveNotFound { name: name.into() }
    }
}
