//! Root searches that invert pricing functions.
//!
//! Every `from_price` direction that has no closed form funnels through
//! [`calibrate`]: a Newton search seeded at zero with a bracketing Brent
//! fallback, standard tolerances.

use oasis_math::solvers::hybrid_numerical;
use oasis_math::{MathError, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult};

/// How a credit calibration re-curves the hazard inputs per candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurveMode {
    /// Bump the existing credit curve's spread level in parallel.
    ParallelShift,
    /// Replace the credit curve with a flat hazard at the candidate level.
    Flat,
}

/// Solves `objective(x) = target` for the measure named `measure`.
///
/// Pricing errors inside the objective surface as non-finite residuals so
/// the solver routes around points outside the pricing domain; a search
/// that still fails maps to [`AnalyticsError::CalibrationFailed`].
pub(crate) fn calibrate<F>(measure: &str, objective: F, target: f64) -> AnalyticsResult<f64>
where
    F: Fn(f64) -> AnalyticsResult<f64>,
{
    if !target.is_finite() {
        return Err(AnalyticsError::invalid_input(format!(
            "{measure} calibration target {target} is not finite"
        )));
    }

    let config = SolverConfig::default();
    let residual = |x: f64| match objective(x) {
        Ok(value) => value - target,
        Err(_) => f64::NAN,
    };

    match hybrid_numerical(residual, 0.0, None, &config) {
        Ok(result) => Ok(result.root),
        Err(MathError::ConvergenceFailed {
            iterations,
            residual,
        }) => Err(AnalyticsError::calibration_failed(
            measure, iterations, residual,
        )),
        Err(_) => Err(AnalyticsError::calibration_failed(
            measure,
            config.max_iterations,
            f64::NAN,
        )),
    }
}
