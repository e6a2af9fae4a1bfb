//! # Oasis Math
//!
//! Scalar root-finding for the Oasis fixed income analytics library.
//!
//! The calibration layer inverts price functions that have no closed-form
//! inverse (price→yield, price→Z-spread, price→credit basis). This crate
//! provides the solver policy those calibrations rely on:
//!
//! - [`solvers::newton_raphson`]: fast quadratic convergence with a derivative
//! - [`solvers::brent`]: reliable bracketing when a derivative is unavailable
//! - [`solvers::hybrid`]: Newton first, automatic bracket search + Brent fallback
//!
//! ## Example
//!
//! ```rust
//! use oasis_math::solvers::{hybrid_numerical, SolverConfig};
//!
//! // Find the root of x^2 - 2
//! let f = |x: f64| x * x - 2.0;
//! let result = hybrid_numerical(f, 1.0, None, &SolverConfig::default()).unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

pub use error::{MathError, MathResult};
pub use solvers::{SolverConfig, SolverResult};
