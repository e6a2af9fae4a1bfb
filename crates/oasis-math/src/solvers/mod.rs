//! Root-finding algorithms for calibration.
//!
//! The calibrator inverts a monotone price function `f(x) = price(x) − target`
//! to recover a yield or spread. The policy implemented by [`hybrid`] is:
//! Newton-Raphson seeded by the caller, with divergence monitoring; on
//! failure, a bracket found by exponential expansion around the seed, then
//! Brent. Non-convergence after both stages is an error, never a default.

mod brent;
mod hybrid;
mod newton;

pub use brent::brent;
pub use hybrid::{hybrid, hybrid_numerical};
pub use newton::{newton_raphson, newton_raphson_numerical};

/// Default convergence tolerance for root-finding.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence tolerance on the residual.
    pub tolerance: f64,
    /// Maximum number of iterations before giving up.
    pub max_iterations: u32,
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Returns a configuration with the given tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns a configuration with the given iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Result of a successful root-finding run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Iterations used.
    pub iterations: u32,
    /// Residual at the root.
    pub residual: f64,
}
