//! Error types for analytics operations.

use oasis_core::types::Date;
use thiserror::Error;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur during quote conversion and valuation.
#[derive(Error, Debug, Clone)]
pub enum AnalyticsError {
    /// Malformed or non-finite input, or missing instrument configuration.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what's invalid.
        reason: String,
    },

    /// The valuation date does not precede the workout date.
    #[error("Valuation date {valuation} is past the workout date {workout}")]
    TemporalViolation {
        /// The valuation date of the request.
        valuation: Date,
        /// The offending workout date.
        workout: Date,
    },

    /// The requested measure is not defined for this instrument.
    #[error("Unsupported combination: {reason}")]
    UnsupportedCombination {
        /// Why the measure/instrument pairing is rejected.
        reason: String,
    },

    /// The root search for a measure did not converge.
    #[error("Calibration of {measure} failed after {iterations} iterations (residual: {residual:.2e})")]
    CalibrationFailed {
        /// The measure being calibrated.
        measure: String,
        /// Iterations consumed before giving up.
        iterations: u32,
        /// Residual at the best point found.
        residual: f64,
    },

    /// A curve required by the measure is absent from the curve set.
    #[error("Missing curve: {name}")]
    MissingCurve {
        /// The curve role ("govvie", "credit").
        name: String,
    },

    /// Math library error.
    #[error("Math error: {0}")]
    Math(#[from] oasis_math::MathError),

    /// Curve library error.
    #[error("Curve error: {0}")]
    Curve(#[from] oasis_curves::CurveError),

    /// Bond library error.
    #[error("Bond error: {0}")]
    Bond(#[from] oasis_bonds::BondError),

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] oasis_core::CoreError),
}

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a temporal violation error.
    #[must_use]
    pub fn temporal_violation(valuation: Date, workout: Date) -> Self {
        Self::TemporalViolation { valuation, workout }
    }

    /// Creates an unsupported combination error.
    #[must_use]
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::UnsupportedCombination {
            reason: reason.into(),
        }
    }

    /// Creates a calibration failure error.
    #[must_use]
    pub fn calibration_failed(measure: impl Into<String>, iterations: u32, residual: f64) -> Self {
        Self::CalibrationFailed {
            measure: measure.into(),
            iterations,
            residual,
        }
    }

    /// Creates a missing curve error.
    #[must_use]
    pub fn missing_curve(name: impl Into<String>) -> Self {
        Self::MissingCurve { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = AnalyticsError::invalid_input("price is not finite");
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid input"));
        assert!(msg.contains("price is not finite"));
    }

    #[test]
    fn test_temporal_violation_display() {
        let valuation = Date::from_ymd(2025, 6, 15).unwrap();
        let workout = Date::from_ymd(2025, 6, 1).unwrap();
        let err = AnalyticsError::temporal_violation(valuation, workout);
        let msg = format!("{}", err);
        assert!(msg.contains("2025-06-15"));
        assert!(msg.contains("2025-06-01"));
    }

    #[test]
    fn test_calibration_failed_display() {
        let err = AnalyticsError::calibration_failed("ZSpread", 100, 1.5e-3);
        let msg = format!("{}", err);
        assert!(msg.contains("ZSpread"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn test_curve_error_lifts() {
        let curve_err = oasis_curves::CurveError::curve_not_found("govvie");
        let err: AnalyticsError = curve_err.into();
        assert!(matches!(err, AnalyticsError::Curve(_)));
    }

    #[test]
    fn test_math_error_lifts() {
        let math_err = oasis_math::MathError::convergence_failed(50, 1e-3);
        let err: AnalyticsError = math_err.into();
        assert!(matches!(err, AnalyticsError::Math(_)));
    }
}
