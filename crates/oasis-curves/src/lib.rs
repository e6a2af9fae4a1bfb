//! # Oasis Curves
//!
//! Discount and credit curve abstractions for the Oasis fixed income
//! analytics library.
//!
//! This crate provides:
//!
//! - **Traits**: [`Curve`] for discounting and rate estimation,
//!   [`CreditCurve`] for survival probabilities and recovery
//! - **Curves**: [`FlatCurve`], interpolated [`ZeroCurve`], and hazard-based
//!   survival curves
//! - **Overlays**: [`ShiftedCurve`] and [`ShiftedHazardCurve`] wrappers for
//!   spread overlays and parallel bumps
//! - **Environment**: [`CurveSet`] bundling the curves a pricing call needs
//!
//! ## Conventions
//!
//! All curves measure time as ACT/365 Fixed year fractions from their
//! reference date and quote zero rates with continuous compounding.
//! Discount factors at or before the reference date are 1.0.
//!
//! ## Example
//!
//! ```rust
//! use oasis_core::Date;
//! use oasis_curves::prelude::*;
//!
//! let reference = Date::from_ymd(2025, 1, 15).unwrap();
//! let discount = FlatCurve::new(reference, 0.04).unwrap();
//! let credit = FlatHazardCurve::from_spread(reference, 0.0150, 0.4).unwrap();
//!
//! let curves = CurveSet::new(&discount).with_credit(&credit);
//! let df = curves.discount().discount_factor(1.0).unwrap();
//! let q = curves.credit().unwrap().survival_probability(1.0).unwrap();
//! assert!(df < 1.0 && q < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::cast_possible_truncation)]

pub mod curves;
pub mod error;
pub mod set;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curves::{
        FlatCurve, FlatHazardCurve, HazardCurve, HazardCurveBuilder, ShiftedCurve,
        ShiftedHazardCurve, ZeroCurve, ZeroCurveBuilder,
    };
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::set::CurveSet;
    pub use crate::traits::{CreditCurve, Curve, RateMeasure};
}

// Re-export commonly used types at crate root
pub use curves::{
    FlatCurve, FlatHazardCurve, HazardCurve, HazardCurveBuilder, ShiftedCurve, ShiftedHazardCurve,
    ZeroCurve, ZeroCurveBuilder,
};
pub use error::{CurveError, CurveResult};
pub use set::CurveSet;
pub use traits::{CreditCurve, Curve, RateMeasure};
