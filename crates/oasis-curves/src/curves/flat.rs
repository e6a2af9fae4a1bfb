//! Flat curve implementation.
//!
//! A [`FlatCurve`] applies a single continuously compounded rate at every
//! tenor. Flat curves are the workhorse for tests and for flat re-curving
//! conversions, where a pricing measure is defined as the level of a flat
//! curve that reproduces a target price.

use oasis_core::Date;

use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

/// A curve with a single continuously compounded rate at all tenors.
///
/// # Example
///
/// ```rust
/// use oasis_core::Date;
/// use oasis_curves::{Curve, FlatCurve};
///
/// let reference = Date::from_ymd(2025, 1, 15).unwrap();
/// let curve = FlatCurve::new(reference, 0.05).unwrap();
///
/// let df = curve.discount_factor(2.0).unwrap();
/// assert!((df - (-0.10f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FlatCurve {
    reference_date: Date,
    rate: f64,
}

impl FlatCurve {
    /// Creates a flat curve at the given continuously compounded rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate is not finite.
    pub fn new(reference_date: Date, rate: f64) -> CurveResult<Self> {
        if !rate.is_finite() {
            return Err(CurveError::invalid_value("flat curve rate must be finite"));
        }
        Ok(Self {
            reference_date,
            rate,
        })
    }

    /// Returns the curve's rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Curve for FlatCurve {
    fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }
        Ok((-self.rate * t).exp())
    }

    fn zero_rate(&self, _t: f64) -> CurveResult<f64> {
        Ok(self.rate)
    }

    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn max_date(&self) -> Date {
        self.reference_date
            .add_years(100)
            .unwrap_or(self.reference_date)
    }
}
