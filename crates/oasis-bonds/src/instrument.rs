//! The bond instrument and its builder.

use oasis_core::daycounts::DayCountConvention;
use oasis_core::types::{Date, Frequency};

use crate::error::{BondError, BondResult};
use crate::schedule::{CouponPeriod, CouponSchedule};
use crate::types::{
    CouponBasis, CreditSetting, ExerciseKind, ExerciseSchedule, NotionalSetting,
    RecoveryAssumption,
};

/// A bullet, amortizing, callable or puttable bond, fixed or floating
/// rate.
///
/// Construction goes through [`BondBuilder`], which validates the
/// configuration and generates the coupon schedule up front, so a
/// `Bond` in hand always carries a consistent schedule.
#[derive(Debug, Clone)]
pub struct Bond {
    coupon: CouponBasis,
    frequency: Frequency,
    day_count: DayCountConvention,
    issue_date: Date,
    maturity: Date,
    first_coupon_date: Option<Date>,
    calls: Option<ExerciseSchedule>,
    puts: Option<ExerciseSchedule>,
    notional: NotionalSetting,
    credit: Option<CreditSetting>,
    settlement_days: u32,
    schedule: CouponSchedule,
}

impl Bond {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> BondBuilder {
        BondBuilder::new()
    }

    /// Returns the coupon basis.
    #[must_use]
    pub fn coupon(&self) -> &CouponBasis {
        &self.coupon
    }

    /// Returns the payment frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the day count convention.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Returns the issue date (accrual start).
    #[must_use]
    pub fn issue_date(&self) -> Date {
        self.issue_date
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Returns the first coupon date override, if any.
    #[must_use]
    pub fn first_coupon_date(&self) -> Option<Date> {
        self.first_coupon_date
    }

    /// Returns the call schedule, if any.
    #[must_use]
    pub fn calls(&self) -> Option<&ExerciseSchedule> {
        self.calls.as_ref()
    }

    /// Returns the put schedule, if any.
    #[must_use]
    pub fn puts(&self) -> Option<&ExerciseSchedule> {
        self.puts.as_ref()
    }

    /// Returns the outstanding-notional configuration.
    #[must_use]
    pub fn notional(&self) -> &NotionalSetting {
        &self.notional
    }

    /// Returns the credit configuration, if any.
    #[must_use]
    pub fn credit(&self) -> Option<&CreditSetting> {
        self.credit.as_ref()
    }

    /// Returns the settlement lag in calendar days.
    #[must_use]
    pub fn settlement_days(&self) -> u32 {
        self.settlement_days
    }

    /// Returns the coupon schedule.
    #[must_use]
    pub fn schedule(&self) -> &CouponSchedule {
        &self.schedule
    }

    /// Returns true for floating rate instruments.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        self.coupon.is_floating()
    }

    /// Returns true when a call or put schedule is present.
    #[must_use]
    pub fn has_embedded_options(&self) -> bool {
        self.calls.is_some() || self.puts.is_some()
    }

    /// Cash settlement date for a valuation date.
    #[must_use]
    pub fn settlement_date(&self, valuation: Date) -> Date {
        valuation.add_days(i64::from(self.settlement_days))
    }

    /// Returns the period accruing on `settlement`, if any.
    #[must_use]
    pub fn current_period(&self, settlement: Date) -> Option<&CouponPeriod> {
        self.schedule.period_containing(settlement)
    }

    /// Day-count fraction accrued in the period containing `settlement`.
    ///
    /// Zero outside the schedule and on coupon dates (a coupon date
    /// starts its own period).
    #[must_use]
    pub fn accrued_fraction(&self, settlement: Date) -> f64 {
        self.current_period(settlement)
            .map_or(0.0, |p| p.accrual_fraction(&self.day_count, settlement))
    }
}

/// Builder for [`Bond`].
#[derive(Debug, Clone, Default)]
pub struct BondBuilder {
    coupon: Option<CouponBasis>,
    frequency: Option<Frequency>,
    day_count: Option<DayCountConvention>,
    issue_date: Option<Date>,
    maturity: Option<Date>,
    first_coupon_date: Option<Date>,
    calls: Option<ExerciseSchedule>,
    puts: Option<ExerciseSchedule>,
    notional: Option<NotionalSetting>,
    credit: Option<CreditSetting>,
    settlement_days: Option<u32>,
}

impl BondBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a fixed coupon rate as a decimal (0.05 for 5%).
    #[must_use]
    pub fn coupon_rate(mut self, rate: f64) -> Self {
        self.coupon = Some(CouponBasis::Fixed { rate });
        self
    }

    /// Sets the coupon basis directly (fixed or floating).
    #[must_use]
    pub fn coupon(mut self, basis: CouponBasis) -> Self {
        self.coupon = Some(basis);
        self
    }

    /// Sets the payment frequency.
    #[must_use]
    pub fn frequency(mut self, freq: Frequency) -> Self {
        self.frequency = Some(freq);
        self
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn day_count(mut self, dc: DayCountConvention) -> Self {
        self.day_count = Some(dc);
        self
    }

    /// Sets the issue date (accrual start).
    #[must_use]
    pub fn issue_date(mut self, date: Date) -> Self {
        self.issue_date = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity(mut self, date: Date) -> Self {
        self.maturity = Some(date);
        self
    }

    /// Sets the first coupon date (odd first period).
    #[must_use]
    pub fn first_coupon_date(mut self, date: Date) -> Self {
        self.first_coupon_date = Some(date);
        self
    }

    /// Sets the call schedule.
    #[must_use]
    pub fn calls(mut self, schedule: ExerciseSchedule) -> Self {
        self.calls = Some(schedule);
        self
    }

    /// Sets the put schedule.
    #[must_use]
    pub fn puts(mut self, schedule: ExerciseSchedule) -> Self {
        self.puts = Some(schedule);
        self
    }

    /// Sets the outstanding-notional configuration.
    #[must_use]
    pub fn notional(mut self, setting: NotionalSetting) -> Self {
        self.notional = Some(setting);
        self
    }

    /// Sets the credit configuration.
    #[must_use]
    pub fn credit(mut self, setting: CreditSetting) -> Self {
        self.credit = Some(setting);
        self
    }

    /// Sets the settlement lag in calendar days (T+n).
    #[must_use]
    pub fn settlement_days(mut self, days: u32) -> Self {
        self.settlement_days = Some(days);
        self
    }

    /// Builds the [`Bond`], generating its coupon schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or any value is
    /// inconsistent (maturity not after issue, floater without periodic
    /// coupons, out-of-range recovery or exercise dates).
    pub fn build(self) -> BondResult<Bond> {
        let coupon = self.coupon.ok_or_else(|| BondError::missing_field("coupon"))?;
        let issue_date = self
            .issue_date
            .ok_or_else(|| BondError::missing_field("issue_date"))?;
        let maturity = self
            .maturity
            .ok_or_else(|| BondError::missing_field("maturity"))?;

        if maturity <= issue_date {
            return Err(BondError::invalid_spec("maturity must be after issue_date"));
        }

        let frequency = self.frequency.unwrap_or_default();
        validate_coupon(&coupon, frequency)?;

        if let Some(CreditSetting {
            recovery: RecoveryAssumption::Fixed(recovery),
            ..
        }) = self.credit
        {
            if !recovery.is_finite() || !(0.0..1.0).contains(&recovery) {
                return Err(BondError::invalid_spec(format!(
                    "fixed recovery {recovery} must be in [0, 1)"
                )));
            }
        }

        if let Some(ref calls) = self.calls {
            validate_exercises(calls, ExerciseKind::Call, issue_date, maturity)?;
        }
        if let Some(ref puts) = self.puts {
            validate_exercises(puts, ExerciseKind::Put, issue_date, maturity)?;
        }

        let schedule =
            CouponSchedule::generate(issue_date, maturity, frequency, self.first_coupon_date)?;

        Ok(Bond {
            coupon,
            frequency,
            day_count: self.day_count.unwrap_or_default(),
            issue_date,
            maturity,
            first_coupon_date: self.first_coupon_date,
            calls: self.calls,
            puts: self.puts,
            notional: self.notional.unwrap_or_default(),
            credit: self.credit,
            settlement_days: self.settlement_days.unwrap_or(1),
            schedule,
        })
    }
}

fn validate_coupon(coupon: &CouponBasis, frequency: Frequency) -> BondResult<()> {
    match coupon {
        CouponBasis::Fixed { rate } => {
            if !rate.is_finite() || *rate < 0.0 {
                return Err(BondError::invalid_spec(format!(
                    "coupon rate {rate} must be finite and non-negative"
                )));
            }
        }
        CouponBasis::Floating(setting) => {
            if frequency.is_zero() {
                return Err(BondError::invalid_spec(
                    "floating rate instruments require periodic coupons",
                ));
            }
            if setting.index_tenor_months <= 0 {
                return Err(BondError::invalid_spec(format!(
                    "index tenor {} months must be positive",
                    setting.index_tenor_months
                )));
            }
            if !setting.quoted_margin.is_finite() {
                return Err(BondError::invalid_spec("quoted margin must be finite"));
            }
            if let Some(fixing) = setting.current_fixing {
                if !fixing.is_finite() {
                    return Err(BondError::invalid_spec("current fixing must be finite"));
                }
            }
        }
    }
    Ok(())
}

fn validate_exercises(
    schedule: &ExerciseSchedule,
    expected: ExerciseKind,
    issue_date: Date,
    maturity: Date,
) -> BondResult<()> {
    if schedule.kind() != expected {
        return Err(BondError::invalid_spec(format!(
            "{:?} schedule supplied where {expected:?} expected",
            schedule.kind()
        )));
    }
    for entry in schedule.entries() {
        if entry.date <= issue_date || entry.date > maturity {
            return Err(BondError::invalid_spec(format!(
                "exercise date {} outside (issue, maturity]",
                entry.date
            )));
        }
        if !entry.factor.is_finite() || entry.factor <= 0.0 {
            return Err(BondError::invalid_spec(format!(
                "exercise factor {} at {} must be positive",
                entry.factor, entry.date
            )));
        }
    }
    Ok(())
}
