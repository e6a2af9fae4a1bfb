//! Curve shifting utilities.
//!
//! [`ShiftedCurve`] wraps an existing curve and applies a constant spread
//! to its continuously compounded rates. The wrapper borrows its base, so
//! shifting is allocation-free; spread solvers construct one per objective
//! evaluation and risk bumps construct one per side.
//!
//! # Example
//!
//! ```rust
//! use oasis_core::Date;
//! use oasis_curves::{Curve, FlatCurve, ShiftedCurve};
//!
//! let reference = Date::from_ymd(2025, 1, 1).unwrap();
//! let base = FlatCurve::new(reference, 0.05).unwrap();
//!
//! // +50bp parallel shift
//! let shifted = ShiftedCurve::new(&base, 0.0050);
//!
//! let base_df = base.discount_factor(1.0).unwrap();
//! let shifted_df = shifted.discount_factor(1.0).unwrap();
//! assert!(shifted_df < base_df);
//! ```

use oasis_core::Date;

use crate::error::CurveResult;
use crate::traits::Curve;

/// A curve wrapper that applies a constant spread to all rates.
///
/// The spread is applied to the continuous zero rate:
/// `r_shifted = r_base + spread`
///
/// Which results in discount factors:
/// `DF_shifted(t) = DF_base(t) * exp(-spread * t)`
pub struct ShiftedCurve<'a, C: Curve + ?Sized> {
    base: &'a C,
    spread: f64,
}

impl<'a, C: Curve + ?Sized> ShiftedCurve<'a, C> {
    /// Creates a new shifted curve.
    ///
    /// # Arguments
    ///
    /// * `base` - The underlying curve
    /// * `spread` - The spread to add (as decimal, e.g. 0.01 for 100bp)
    pub fn new(base: &'a C, spread: f64) -> Self {
        Self { base, spread }
    }

    /// Returns the spread applied to this curve.
    pub fn spread(&self) -> f64 {
        self.spread
    }
}

impl<C: Curve + ?Sized> Curve for ShiftedCurve<'_, C> {
    fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        let base_df = self.base.discount_factor(t)?;

        if t <= 0.0 {
            return Ok(base_df);
        }

        let adjustment = (-self.spread * t).exp();
        Ok(base_df * adjustment)
    }

    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        let base_rate = self.base.zero_rate(t)?;
        Ok(base_rate + self.spread)
    }

    fn reference_date(&self) -> Date {
        self.base.reference_date()
    }

    fn max_date(&self) -> Date {
        self.base.max_date()
    }
}
