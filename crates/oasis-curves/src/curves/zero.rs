//! Zero rate curve implementation.
//!
//! A [`ZeroCurve`] stores continuously compounded zero rates at pillar
//! dates and interpolates linearly in the rate dimension. Extrapolation
//! is flat on both ends: queries before the first pillar use the first
//! rate, queries beyond the last pillar use the last rate.
//!
//! # Example
//!
//! ```rust
//! use oasis_core::Date;
//! use oasis_curves::{Curve, ZeroCurveBuilder};
//!
//! let reference = Date::from_ymd(2025, 1, 15).unwrap();
//! let curve = ZeroCurveBuilder::new(reference)
//!     .add_rate(Date::from_ymd(2026, 1, 15).unwrap(), 0.040)
//!     .add_rate(Date::from_ymd(2030, 1, 15).unwrap(), 0.045)
//!     .build()
//!     .unwrap();
//!
//! // Midway between pillars the rate interpolates linearly
//! let r = curve.zero_rate(3.0).unwrap();
//! assert!(r > 0.040 && r < 0.045);
//! ```

use oasis_core::Date;

use crate::error::{CurveError, CurveResult};
use crate::traits::Curve;

/// A curve of linearly interpolated continuously compounded zero rates.
#[derive(Debug, Clone)]
pub struct ZeroCurve {
    reference_date: Date,
    max_date: Date,
    times: Vec<f64>,
    rates: Vec<f64>,
}

impl ZeroCurve {
    /// Returns the interpolated zero rate at time `t`.
    ///
    /// Flat extrapolation applies outside the pillar range.
    fn rate_at(&self, t: f64) -> f64 {
        let n = self.times.len();
        if t <= self.times[0] {
            return self.rates[0];
        }
        if t >= self.times[n - 1] {
            return self.rates[n - 1];
        }

        let idx = self.times.partition_point(|&x| x < t);
        let t0 = self.times[idx - 1];
        let t1 = self.times[idx];
        let r0 = self.rates[idx - 1];
        let r1 = self.rates[idx];

        let w = (t - t0) / (t1 - t0);
        r0 + w * (r1 - r0)
    }

    /// Returns the number of pillars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if the curve has no pillars.
    ///
    /// Construction requires at least one pillar, so this is always
    /// false for a built curve.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

impl Curve for ZeroCurve {
    fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }
        Ok((-self.rate_at(t) * t).exp())
    }

    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        Ok(self.rate_at(t.max(0.0)))
    }

    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn max_date(&self) -> Date {
        self.max_date
    }
}

/// Builder for [`ZeroCurve`].
///
/// Pillars may be added in any order; `build` sorts them by date and
/// validates the result.
#[derive(Debug, Clone)]
pub struct ZeroCurveBuilder {
    reference_date: Date,
    pillars: Vec<(Date, f64)>,
}

impl ZeroCurveBuilder {
    /// Creates a new builder anchored at the reference date.
    #[must_use]
    pub fn new(reference_date: Date) -> Self {
        Self {
            reference_date,
            pillars: Vec::new(),
        }
    }

    /// Adds a zero rate pillar at a date.
    #[must_use]
    pub fn add_rate(mut self, date: Date, rate: f64) -> Self {
        self.pillars.push((date, rate));
        self
    }

    /// Builds the curve.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No pillars were added
    /// - Any pillar is on or before the reference date
    /// - Two pillars share a date
    /// - Any rate is not finite
    pub fn build(mut self) -> CurveResult<ZeroCurve> {
        if self.pillars.is_empty() {
            return Err(CurveError::insufficient_points(1, 0));
        }

        self.pillars.sort_by_key(|(date, _)| *date);

        let mut times = Vec::with_capacity(self.pillars.len());
        let mut rates = Vec::with_capacity(self.pillars.len());

        for (i, (date, rate)) in self.pillars.iter().enumerate() {
            if !rate.is_finite() {
                return Err(CurveError::invalid_value(format!(
                    "zero rate at {} must be finite",
                    date
                )));
            }
            let t = self.reference_date.days_between(date) as f64 / 365.0;
            if t <= 0.0 {
                return Err(CurveError::invalid_value(format!(
                    "pillar {} is not after the reference date {}",
                    date, self.reference_date
                )));
            }
            if let Some(&prev) = times.last() {
                if t <= prev {
                    return Err(CurveError::non_monotonic_tenors(i, prev, t));
                }
            }
            times.push(t);
            rates.push(*rate);
        }

        let max_date = self.pillars[self.pillars.len() - 1].0;

        Ok(ZeroCurve {
            reference_date: self.reference_date,
            max_date,
            times,
            rates,
        })
    }
}
