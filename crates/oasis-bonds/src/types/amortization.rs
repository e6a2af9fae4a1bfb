//! Outstanding-notional schedules and amortization attribution.
//!
//! Amortizing and sinking-fund bonds repay principal over life. The
//! [`NotionalSetting`] tracks the outstanding factor after each repayment
//! step and carries the [`AmortizationAttribution`] policy deciding which
//! factor a coupon period accrues on when a step falls inside it.

use oasis_core::Date;
use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};

/// Which outstanding factor a coupon period uses when an amortization
/// step falls inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AmortizationAttribution {
    /// The step applies from the period start: coupons accrue on the
    /// post-step factor.
    PeriodStart,
    /// The step applies only at the period end: coupons accrue on the
    /// pre-step factor.
    #[default]
    PeriodEnd,
    /// The factor is time-weighted across the period.
    ProRata,
}

/// A step in the outstanding-notional factor schedule.
///
/// The factor is the fraction of original face outstanding *after* the
/// step date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotionalStep {
    /// Date the repayment takes effect.
    pub date: Date,
    /// Outstanding factor after the step, in (0, 1].
    pub factor: f64,
}

impl NotionalStep {
    /// Creates a new notional step.
    #[must_use]
    pub fn new(date: Date, factor: f64) -> Self {
        Self { date, factor }
    }
}

/// Outstanding-notional configuration for an instrument.
///
/// A bullet bond has no steps: the factor is 1.0 for the whole life.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotionalSetting {
    steps: Vec<NotionalStep>,
    attribution: AmortizationAttribution,
}

impl NotionalSetting {
    /// Creates a bullet setting: no amortization.
    #[must_use]
    pub fn bullet() -> Self {
        Self::default()
    }

    /// Creates an amortizing setting from factor steps.
    ///
    /// Steps are sorted by date.
    ///
    /// # Errors
    ///
    /// Returns an error if any factor is outside (0, 1], is not finite,
    /// or the factors do not decrease as dates advance.
    pub fn new(
        mut steps: Vec<NotionalStep>,
        attribution: AmortizationAttribution,
    ) -> BondResult<Self> {
        steps.sort_by_key(|s| s.date);

        let mut prev = 1.0;
        for step in &steps {
            if !step.factor.is_finite() || step.factor <= 0.0 || step.factor > 1.0 {
                return Err(BondError::invalid_spec(format!(
                    "notional factor {} at {} must be in (0, 1]",
                    step.factor, step.date
                )));
            }
            if step.factor > prev {
                return Err(BondError::invalid_spec(format!(
                    "notional factor {} at {} exceeds the prior factor {}",
                    step.factor, step.date, prev
                )));
            }
            prev = step.factor;
        }

        Ok(Self { steps, attribution })
    }

    /// Returns the attribution policy.
    #[must_use]
    pub fn attribution(&self) -> AmortizationAttribution {
        self.attribution
    }

    /// Returns the factor steps, sorted by date.
    #[must_use]
    pub fn steps(&self) -> &[NotionalStep] {
        &self.steps
    }

    /// Returns true if no amortization is scheduled.
    #[must_use]
    pub fn is_bullet(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the outstanding factor as of a date.
    ///
    /// Steps take effect on their date; before the first step the factor
    /// is 1.0.
    #[must_use]
    pub fn factor_as_of(&self, date: Date) -> f64 {
        self.steps
            .iter()
            .rev()
            .find(|s| s.date <= date)
            .map_or(1.0, |s| s.factor)
    }

    /// Returns the principal factor repaid between two dates.
    ///
    /// Computed as the drop in outstanding factor from `start` to `end`;
    /// zero when the dates are out of order.
    #[must_use]
    pub fn step_between(&self, start: Date, end: Date) -> f64 {
        (self.factor_as_of(start) - self.factor_as_of(end)).max(0.0)
    }

    /// Returns the factor a coupon period accrues on under the
    /// attribution policy.
    ///
    /// A step on the period start date is already part of the starting
    /// factor; a step on the period end date belongs to this period.
    #[must_use]
    pub fn coupon_base(&self, start: Date, end: Date) -> f64 {
        match self.attribution {
            AmortizationAttribution::PeriodEnd => self.factor_as_of(start),
            AmortizationAttribution::PeriodStart => self.factor_as_of(end),
            AmortizationAttribution::ProRata => self.time_weighted_factor(start, end),
        }
    }

    /// Time-weighted average outstanding factor over [start, end).
    fn time_weighted_factor(&self, start: Date, end: Date) -> f64 {
        let total = start.days_between(&end);
        if total <= 0 {
            return self.factor_as_of(start);
        }

        let mut weighted = 0.0;
        let mut factor = self.factor_as_of(start);
        let mut cursor = start;
        for step in &self.steps {
            if step.date <= start {
                continue;
            }
            if step.date > end {
                break;
            }
            weighted += factor * cursor.days_between(&step.date) as f64;
            factor = step.factor;
            cursor = step.date;
        }
        weighted += factor * cursor.days_between(&end) as f64;

        weighted / total as f64
    }
}
