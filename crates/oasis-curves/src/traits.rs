//! Core traits for discount and credit curve operations.
//!
//! This module defines the [`Curve`] trait that all discount curve
//! implementations satisfy, and the [`CreditCurve`] trait for survival
//! curves used in defaultable pricing. Both traits work internally in
//! year fractions from the reference date and provide date-based
//! convenience methods on top.

use oasis_core::Date;

use crate::error::{CurveError, CurveResult};

/// Rate measures that a curve can estimate at a date.
///
/// Used by spread conversions that compare a bond yield against a
/// curve-implied rate, and by floating rate projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateMeasure {
    /// Continuously compounded zero rate from the reference date.
    Zero,
    /// Simply compounded forward rate over a tenor starting at the date.
    Forward {
        /// Tenor of the forward period in months.
        months: i32,
    },
    /// Par rate of a spot-starting swap with semiannual payments
    /// maturing at the date.
    SwapRate,
}

/// The core trait for discount curves.
///
/// A curve provides the fundamental operations needed for discounting
/// cash flows and estimating rates. All curve types in the library
/// implement this trait, enabling generic pricing and risk calculations
/// over `&dyn Curve`.
///
/// # Required Methods
///
/// Implementations must provide:
/// - [`discount_factor`](Curve::discount_factor): The primary method for discounting
/// - [`reference_date`](Curve::reference_date): The curve's valuation date
/// - [`max_date`](Curve::max_date): The last date with market data
///
/// # Derived Methods
///
/// The trait provides default implementations for zero rates, forward
/// rates, date-based lookups, and [`estimate_rate`](Curve::estimate_rate).
pub trait Curve: Send + Sync {
    /// Returns the discount factor from the reference date to time `t`.
    ///
    /// The discount factor represents the present value of $1 received
    /// at time `t` years from the reference date. Returns 1.0 for t ≤ 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve data cannot produce a valid factor.
    fn discount_factor(&self, t: f64) -> CurveResult<f64>;

    /// Returns the curve's reference (valuation) date.
    ///
    /// All times are measured from this date. A time of 1.0 represents
    /// one year from the reference date.
    fn reference_date(&self) -> Date;

    /// Returns the maximum date for which market data is available.
    ///
    /// Beyond this date the curve extrapolates flat.
    fn max_date(&self) -> Date;

    /// Returns the continuously compounded zero rate at time `t`.
    ///
    /// # Default Implementation
    ///
    /// Computes `-ln(DF(t)) / t` from the discount factor. Concrete
    /// curves that store rates directly override this with an exact
    /// lookup.
    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Err(CurveError::invalid_value(
                "zero rate requires a positive time",
            ));
        }
        let df = self.discount_factor(t)?;
        if df <= 0.0 {
            return Err(CurveError::invalid_value(
                "non-positive discount factor in zero rate",
            ));
        }
        Ok(-df.ln() / t)
    }

    /// Returns the simply compounded forward rate between times `t1` and `t2`.
    ///
    /// This is the rate that can be locked in today for a deposit starting
    /// at `t1` and maturing at `t2`.
    ///
    /// # Formula
    ///
    /// `F(t1, t2) = (DF(t1) / DF(t2) - 1) / (t2 - t1)`
    fn forward_rate(&self, t1: f64, t2: f64) -> CurveResult<f64> {
        if t2 <= t1 {
            return Ok(0.0);
        }

        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;

        if df2 <= 0.0 {
            return Ok(0.0);
        }

        let tau = t2 - t1;
        Ok((df1 / df2 - 1.0) / tau)
    }

    /// Returns the year fraction from the reference date to the given date.
    ///
    /// Uses ACT/365 Fixed convention, the time axis for all curves.
    fn year_fraction(&self, date: Date) -> f64 {
        let ref_date = self.reference_date();
        ref_date.days_between(&date) as f64 / 365.0
    }

    /// Returns the discount factor for a specific date.
    fn discount_factor_at(&self, date: Date) -> CurveResult<f64> {
        let t = self.year_fraction(date);
        self.discount_factor(t)
    }

    /// Returns the continuously compounded zero rate for a specific date.
    fn zero_rate_at(&self, date: Date) -> CurveResult<f64> {
        let t = self.year_fraction(date);
        self.zero_rate(t)
    }

    /// Returns the simply compounded forward rate between two dates.
    fn forward_rate_between(&self, start: Date, end: Date) -> CurveResult<f64> {
        let t1 = self.year_fraction(start);
        let t2 = self.year_fraction(end);
        self.forward_rate(t1, t2)
    }

    /// Estimates a named rate measure at a date.
    ///
    /// - [`RateMeasure::Zero`]: the zero rate to the date
    /// - [`RateMeasure::Forward`]: the forward rate over the tenor
    ///   starting at the date
    /// - [`RateMeasure::SwapRate`]: the par rate of a spot-starting
    ///   semiannual swap maturing at the date
    ///
    /// # Errors
    ///
    /// Returns an error if the date falls on or before the reference
    /// date for measures that require a positive horizon.
    fn estimate_rate(&self, measure: RateMeasure, date: Date) -> CurveResult<f64> {
        match measure {
            RateMeasure::Zero => self.zero_rate_at(date),
            RateMeasure::Forward { months } => {
                let end = date
                    .add_months(months)
                    .map_err(|e| CurveError::invalid_value(e.to_string()))?;
                self.forward_rate_between(date, end)
            }
            RateMeasure::SwapRate => {
                let reference = self.reference_date();
                if date <= reference {
                    return Err(CurveError::invalid_value(
                        "swap rate requires a maturity after the reference date",
                    ));
                }

                // Semiannual payment grid rolled back from maturity,
                // with a front stub against the reference date.
                let mut grid = Vec::new();
                let mut k = 0;
                loop {
                    let d = date
                        .add_months(-6 * k)
                        .map_err(|e| CurveError::invalid_value(e.to_string()))?;
                    if d <= reference {
                        break;
                    }
                    grid.push(d);
                    k += 1;
                }
                grid.reverse();

                let mut annuity = 0.0;
                let mut prev = reference;
                for d in grid {
                    let accrual = prev.days_between(&d) as f64 / 365.0;
                    annuity += accrual * self.discount_factor_at(d)?;
                    prev = d;
                }
                if annuity <= 0.0 {
                    return Err(CurveError::invalid_value(
                        "non-positive annuity in swap rate",
                    ));
                }

                let df_end = self.discount_factor_at(date)?;
                Ok((1.0 - df_end) / annuity)
            }
        }
    }
}

/// The core trait for credit (survival) curves.
///
/// A credit curve provides survival probabilities and recovery
/// assumptions for defaultable pricing. Survival probabilities are
/// cumulative from the reference date; the probability of default
/// within a period is the difference of survival probabilities at its
/// endpoints.
pub trait CreditCurve: Send + Sync {
    /// Returns the probability of surviving from the reference date to
    /// time `t`. Returns 1.0 for t ≤ 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve data cannot produce a valid
    /// probability.
    fn survival_probability(&self, t: f64) -> CurveResult<f64>;

    /// Returns the assumed recovery rate, as a fraction of face, for a
    /// default at time `t`.
    fn recovery(&self, t: f64) -> CurveResult<f64>;

    /// Returns the curve's reference (valuation) date.
    fn reference_date(&self) -> Date;

    /// Returns the year fraction from the reference date to the given date.
    ///
    /// Uses ACT/365 Fixed convention, matching [`Curve::year_fraction`].
    fn year_fraction(&self, date: Date) -> f64 {
        let ref_date = self.reference_date();
        ref_date.days_between(&date) as f64 / 365.0
    }

    /// Returns the survival probability for a specific date.
    fn survival_probability_at(&self, date: Date) -> CurveResult<f64> {
        let t = self.year_fraction(date);
        self.survival_probability(t)
    }

    /// Returns the recovery rate for a default at a specific date.
    fn recovery_at(&self, date: Date) -> CurveResult<f64> {
        let t = self.year_fraction(date);
        self.recovery(t)
    }

    /// Returns the probability of default between two dates.
    ///
    /// Computed as the difference of survival probabilities, floored at
    /// zero to absorb rounding at period boundaries.
    fn default_probability_between(&self, start: Date, end: Date) -> CurveResult<f64> {
        let q1 = self.survival_probability_at(start)?;
        let q2 = self.survival_probability_at(end)?;
        Ok((q1 - q2).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// A minimal curve implementing only the required methods, so the
    /// trait defaults are what gets exercised here.
    struct TestCurve {
        rate: f64,
        reference: Date,
    }

    impl Curve for TestCurve {
        fn discount_factor(&self, t: f64) -> CurveResult<f64> {
            if t <= 0.0 {
                return Ok(1.0);
            }
            Ok((-self.rate * t).exp())
        }

        fn reference_date(&self) -> Date {
            self.reference
        }

        fn max_date(&self) -> Date {
            self.reference.add_years(50).unwrap_or(self.reference)
        }
    }

    fn date(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    fn test_curve(rate: f64) -> TestCurve {
        TestCurve {
            rate,
            reference: date(2025, 1, 15),
        }
    }

    #[test]
    fn test_zero_rate_from_discount_factor() {
        let curve = test_curve(0.04);
        let r = curve.zero_rate(3.0).unwrap();
        assert_relative_eq!(r, 0.04, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate_rejects_non_positive_time() {
        let curve = test_curve(0.04);
        assert!(curve.zero_rate(0.0).is_err());
        assert!(curve.zero_rate(-1.0).is_err());
    }

    #[test]
    fn test_forward_rate_flat_curve() {
        let curve = test_curve(0.05);
        let fwd = curve.forward_rate(1.0, 2.0).unwrap();
        // Simply compounded forward over a continuously compounded flat curve
        let expected = (0.05_f64).exp_m1();
        assert_relative_eq!(fwd, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_rate_degenerate_interval() {
        let curve = test_curve(0.05);
        assert_eq!(curve.forward_rate(2.0, 2.0).unwrap(), 0.0);
        assert_eq!(curve.forward_rate(2.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_year_fraction_act365() {
        let curve = test_curve(0.05);
        let yf = curve.year_fraction(date(2026, 1, 15));
        assert_relative_eq!(yf, 365.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_estimate_rate_zero() {
        let curve = test_curve(0.03);
        let r = curve
            .estimate_rate(RateMeasure::Zero, date(2030, 1, 15))
            .unwrap();
        assert_relative_eq!(r, 0.03, epsilon = 1e-12);
    }

    #[test]
    fn test_estimate_rate_forward_tenor() {
        let curve = test_curve(0.03);
        let r = curve
            .estimate_rate(RateMeasure::Forward { months: 3 }, date(2025, 7, 15))
            .unwrap();
        // Quarterly simple forward on a 3% continuous curve
        assert!(r > 0.03 && r < 0.0305);
    }

    #[test]
    fn test_estimate_rate_swap_rate_flat_curve() {
        let curve = test_curve(0.05);
        let s = curve
            .estimate_rate(RateMeasure::SwapRate, date(2030, 1, 15))
            .unwrap();
        // Par rate with semiannual simple accrual on a flat continuous curve
        let expected = 2.0 * (0.025_f64).exp_m1();
        assert_relative_eq!(s, expected, epsilon = 1e-3);
    }

    #[test]
    fn test_estimate_rate_swap_rate_requires_future_maturity() {
        let curve = test_curve(0.05);
        let err = curve.estimate_rate(RateMeasure::SwapRate, date(2025, 1, 15));
        assert!(err.is_err());
    }

    struct TestCreditCurve {
        hazard: f64,
        reference: Date,
    }

    impl CreditCurve for TestCreditCurve {
        fn survival_probability(&self, t: f64) -> CurveResult<f64> {
            if t <= 0.0 {
                return Ok(1.0);
            }
            Ok((-self.hazard * t).exp())
        }

        fn recovery(&self, _t: f64) -> CurveResult<f64> {
            Ok(0.4)
        }

        fn reference_date(&self) -> Date {
            self.reference
        }
    }

    #[test]
    fn test_default_probability_between() {
        let curve = TestCreditCurve {
            hazard: 0.02,
            reference: date(2025, 1, 15),
        };
        let p = curve
            .default_probability_between(date(2026, 1, 15), date(2027, 1, 15))
            .unwrap();
        let expected = (-0.02_f64).exp() - (-0.04_f64).exp();
        assert_relative_eq!(p, expected, epsilon = 1e-10);
    }

    #[test]
    fn test_default_probability_floors_at_zero() {
        let curve = TestCreditCurve {
            hazard: 0.02,
            reference: date(2025, 1, 15),
        };
        // Reversed dates produce a negative difference, floored to zero
        let p = curve
            .default_probability_between(date(2027, 1, 15), date(2026, 1, 15))
            .unwrap();
        assert_eq!(p, 0.0);
    }
}
