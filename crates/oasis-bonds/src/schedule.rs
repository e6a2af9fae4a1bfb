//! Coupon schedule generation.
//!
//! Schedules roll backward from maturity by the coupon frequency,
//! producing unadjusted period boundaries. Business-day calendars are
//! out of scope at this layer: pay dates coincide with accrual end
//! dates.
//!
//! # Example
//!
//! ```rust
//! use oasis_bonds::schedule::CouponSchedule;
//! use oasis_core::types::{Date, Frequency};
//!
//! let schedule = CouponSchedule::generate(
//!     Date::from_ymd(2025, 1, 15).unwrap(),
//!     Date::from_ymd(2030, 1, 15).unwrap(),
//!     Frequency::SemiAnnual,
//!     None,
//! )
//! .unwrap();
//! assert_eq!(schedule.len(), 10);
//! ```

use oasis_core::daycounts::DayCount;
use oasis_core::types::{Date, Frequency};

use crate::error::{BondError, BondResult};

/// A single coupon accrual period.
///
/// The pay date coincides with the accrual end in this unadjusted
/// model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CouponPeriod {
    /// Accrual start (inclusive).
    pub start: Date,
    /// Accrual end (exclusive).
    pub end: Date,
    /// Payment date.
    pub pay: Date,
}

/// A sub-period slice used when integrating default losses across a
/// coupon period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureSlice {
    /// Slice start (inclusive).
    pub start: Date,
    /// Slice end (exclusive).
    pub end: Date,
    /// Day-count fraction accrued from the period start to the slice
    /// midpoint.
    pub fraction: f64,
}

impl CouponPeriod {
    /// Creates a period whose pay date is the accrual end.
    #[must_use]
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            start,
            end,
            pay: end,
        }
    }

    /// Returns true if `date` accrues in this period (start inclusive,
    /// end exclusive).
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date < self.end
    }

    /// Calendar days in the period.
    #[must_use]
    pub fn length_days(&self) -> i64 {
        self.start.days_between(&self.end)
    }

    /// Day-count fraction for the full period.
    #[must_use]
    pub fn full_fraction(&self, day_count: &impl DayCount) -> f64 {
        day_count.year_fraction(self.start, self.end)
    }

    /// Day-count fraction accrued from the period start to `to`.
    ///
    /// Zero at or before the start; capped at the full period fraction.
    #[must_use]
    pub fn accrual_fraction(&self, day_count: &impl DayCount, to: Date) -> f64 {
        if to <= self.start {
            return 0.0;
        }
        day_count.year_fraction(self.start, to.min(self.end))
    }

    /// Decomposes the period into loss-quadrature slices of at most
    /// `step_days` calendar days.
    ///
    /// `truncate` clips the decomposition short of the period end (a
    /// workout date inside the period). Each slice carries the accrual
    /// fraction to its midpoint for accrued-on-default interest.
    #[must_use]
    pub fn loss_quadrature(
        &self,
        day_count: &impl DayCount,
        step_days: i64,
        truncate: Option<Date>,
    ) -> Vec<QuadratureSlice> {
        let step = step_days.max(1);
        let end = truncate.map_or(self.end, |t| t.min(self.end));
        if end <= self.start {
            return Vec::new();
        }

        let capacity = (self.start.days_between(&end) / step + 1) as usize;
        let mut slices = Vec::with_capacity(capacity);
        let mut cursor = self.start;
        while cursor < end {
            let slice_end = cursor.add_days(step).min(end);
            let mid = cursor.add_days(cursor.days_between(&slice_end) / 2);
            slices.push(QuadratureSlice {
                start: cursor,
                end: slice_end,
                fraction: self.accrual_fraction(day_count, mid),
            });
            cursor = slice_end;
        }
        slices
    }
}

/// An ordered list of coupon periods from dated date to maturity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponSchedule {
    periods: Vec<CouponPeriod>,
}

impl CouponSchedule {
    /// Generates a schedule by rolling backward from maturity.
    ///
    /// Each boundary is computed as a whole-month offset from maturity,
    /// so month-end clamping never drifts across periods. When the roll
    /// does not land on the dated date the first period is a short
    /// front stub; `first_coupon` overrides the first boundary instead,
    /// absorbing a long or short first period.
    ///
    /// `Frequency::Zero` produces the single period dated-to-maturity.
    ///
    /// # Errors
    ///
    /// Returns an error if maturity is not after the dated date, or if
    /// `first_coupon` is outside (dated, maturity) or combined with a
    /// zero frequency.
    pub fn generate(
        dated: Date,
        maturity: Date,
        frequency: Frequency,
        first_coupon: Option<Date>,
    ) -> BondResult<Self> {
        if maturity <= dated {
            return Err(BondError::invalid_schedule(format!(
                "maturity {maturity} must be after dated date {dated}"
            )));
        }

        if frequency.is_zero() {
            if first_coupon.is_some() {
                return Err(BondError::invalid_schedule(
                    "zero-frequency schedule does not take a first coupon date",
                ));
            }
            return Ok(Self {
                periods: vec![CouponPeriod::new(dated, maturity)],
            });
        }

        if let Some(fc) = first_coupon {
            if fc <= dated || fc >= maturity {
                return Err(BondError::invalid_schedule(format!(
                    "first coupon date {fc} must lie strictly between dated date \
                     {dated} and maturity {maturity}"
                )));
            }
        }

        let months = frequency.months_per_period() as i32;
        let floor = first_coupon.unwrap_or(dated);

        let mut boundaries = vec![maturity];
        let mut offset = months;
        loop {
            let rolled = maturity.add_months(-offset)?;
            if rolled <= floor {
                break;
            }
            boundaries.push(rolled);
            offset += months;
        }
        if let Some(fc) = first_coupon {
            boundaries.push(fc);
        }
        boundaries.push(dated);
        boundaries.reverse();

        let periods = boundaries
            .windows(2)
            .map(|w| CouponPeriod::new(w[0], w[1]))
            .collect();

        Ok(Self { periods })
    }

    /// Returns the periods in schedule order.
    #[must_use]
    pub fn periods(&self) -> &[CouponPeriod] {
        &self.periods
    }

    /// Returns the period accruing on `date`, if any.
    #[must_use]
    pub fn period_containing(&self, date: Date) -> Option<&CouponPeriod> {
        self.periods.iter().find(|p| p.contains(date))
    }

    /// Number of coupon periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns true if the schedule has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use oasis_core::daycounts::{ActActIsda, Thirty360US};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_regular_semiannual_schedule() {
        let schedule = CouponSchedule::generate(
            date(2025, 1, 15),
            date(2030, 1, 15),
            Frequency::SemiAnnual,
            None,
        )
        .unwrap();

        assert_eq!(schedule.len(), 10);
        let first = schedule.periods()[0];
        assert_eq!(first.start, date(2025, 1, 15));
        assert_eq!(first.end, date(2025, 7, 15));
        assert_eq!(first.pay, first.end);
        let last = schedule.periods()[9];
        assert_eq!(last.end, date(2030, 1, 15));
    }

    #[test]
    fn test_short_front_stub() {
        let schedule = CouponSchedule::generate(
            date(2025, 3, 1),
            date(2030, 1, 15),
            Frequency::SemiAnnual,
            None,
        )
        .unwrap();

        let first = schedule.periods()[0];
        assert_eq!(first.start, date(2025, 3, 1));
        assert_eq!(first.end, date(2025, 7, 15));
        // Regular afterwards
        assert_eq!(schedule.periods()[1].end, date(2026, 1, 15));
    }

    #[test]
    fn test_long_first_period_via_first_coupon() {
        let schedule = CouponSchedule::generate(
            date(2025, 5, 1),
            date(2030, 1, 15),
            Frequency::SemiAnnual,
            Some(date(2026, 1, 15)),
        )
        .unwrap();

        let first = schedule.periods()[0];
        assert_eq!(first.start, date(2025, 5, 1));
        assert_eq!(first.end, date(2026, 1, 15));
        assert_eq!(schedule.periods()[1].end, date(2026, 7, 15));
    }

    #[test]
    fn test_month_end_roll_does_not_drift() {
        let schedule = CouponSchedule::generate(
            date(2025, 5, 31),
            date(2030, 5, 31),
            Frequency::SemiAnnual,
            None,
        )
        .unwrap();

        // Interior boundaries clamp to Nov 30 but May boundaries stay
        // on the 31st.
        assert_eq!(schedule.periods()[0].end, date(2025, 11, 30));
        assert_eq!(schedule.periods()[1].end, date(2026, 5, 31));
        assert_eq!(schedule.periods()[2].end, date(2026, 11, 30));
    }

    #[test]
    fn test_zero_frequency_single_period() {
        let schedule = CouponSchedule::generate(
            date(2025, 1, 15),
            date(2030, 1, 15),
            Frequency::Zero,
            None,
        )
        .unwrap();

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.periods()[0].start, date(2025, 1, 15));
        assert_eq!(schedule.periods()[0].end, date(2030, 1, 15));
    }

    #[test]
    fn test_generate_rejects_bad_inputs() {
        assert!(CouponSchedule::generate(
            date(2030, 1, 15),
            date(2025, 1, 15),
            Frequency::SemiAnnual,
            None,
        )
        .is_err());

        assert!(CouponSchedule::generate(
            date(2025, 1, 15),
            date(2030, 1, 15),
            Frequency::SemiAnnual,
            Some(date(2024, 7, 15)),
        )
        .is_err());

        assert!(CouponSchedule::generate(
            date(2025, 1, 15),
            date(2030, 1, 15),
            Frequency::Zero,
            Some(date(2025, 7, 15)),
        )
        .is_err());
    }

    #[test]
    fn test_period_containing() {
        let schedule = CouponSchedule::generate(
            date(2025, 1, 15),
            date(2030, 1, 15),
            Frequency::SemiAnnual,
            None,
        )
        .unwrap();

        let period = schedule.period_containing(date(2025, 3, 1)).unwrap();
        assert_eq!(period.start, date(2025, 1, 15));
        // A boundary date belongs to the period it starts
        let period = schedule.period_containing(date(2025, 7, 15)).unwrap();
        assert_eq!(period.start, date(2025, 7, 15));
        assert!(schedule.period_containing(date(2030, 1, 15)).is_none());
    }

    #[test]
    fn test_accrual_fraction_caps_and_floors() {
        let period = CouponPeriod::new(date(2025, 1, 15), date(2025, 7, 15));
        let dc = Thirty360US;

        assert_relative_eq!(period.accrual_fraction(&dc, date(2025, 1, 1)), 0.0);
        assert_relative_eq!(period.accrual_fraction(&dc, date(2025, 4, 15)), 0.25);
        assert_relative_eq!(
            period.accrual_fraction(&dc, date(2026, 1, 1)),
            period.full_fraction(&dc)
        );
    }

    #[test]
    fn test_loss_quadrature_covers_period() {
        let period = CouponPeriod::new(date(2025, 1, 15), date(2025, 7, 15));
        let slices = period.loss_quadrature(&ActActIsda, 30, None);

        assert_eq!(slices.first().map(|s| s.start), Some(period.start));
        assert_eq!(slices.last().map(|s| s.end), Some(period.end));
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(pair[0].fraction < pair[1].fraction);
        }
        assert!(slices.iter().all(|s| s.start.days_between(&s.end) <= 30));
    }

    #[test]
    fn test_loss_quadrature_truncates() {
        let period = CouponPeriod::new(date(2025, 1, 15), date(2025, 7, 15));
        let workout = date(2025, 3, 1);
        let slices = period.loss_quadrature(&ActActIsda, 7, Some(workout));

        assert_eq!(slices.last().map(|s| s.end), Some(workout));

        let before = period.loss_quadrature(&ActActIsda, 7, Some(date(2025, 1, 1)));
        assert!(before.is_empty());
    }

    #[test]
    fn test_loss_quadrature_daily_step() {
        let period = CouponPeriod::new(date(2025, 1, 15), date(2025, 1, 20));
        let slices = period.loss_quadrature(&ActActIsda, 1, None);
        assert_eq!(slices.len(), 5);
    }
}
