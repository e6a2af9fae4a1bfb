//! Default-time integration for credit-contingent values.
//!
//! Each coupon period is decomposed into short slices; within a slice the
//! default is assumed to land at the slice end, with accrued interest taken
//! to the slice midpoint. Slice probabilities come straight off the hazard
//! curve, so the decomposition converges as the step shrinks.

use oasis_bonds::{CouponPeriod, CreditSetting, NotionalSetting, RecoveryAssumption};
use oasis_core::daycounts::DayCount;
use oasis_core::types::Date;
use oasis_curves::{CreditCurve, Curve};

use crate::error::AnalyticsResult;

/// Default-contingent values accumulated over one period, per unit of
/// original face, undiscounted from settlement.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LossIntegrals {
    pub default_loss_pv: f64,
    pub accrued_on_default_pv: f64,
    pub recovery_pv: f64,
    pub expected_recovery: f64,
}

impl LossIntegrals {
    pub(crate) fn add(&mut self, other: &LossIntegrals) {
        self.default_loss_pv += other.default_loss_pv;
        self.accrued_on_default_pv += other.accrued_on_default_pv;
        self.recovery_pv += other.recovery_pv;
        self.expected_recovery += other.expected_recovery;
    }
}

/// Integrates default losses over one coupon period.
///
/// `rate` and `coupon_base` feed the accrued-on-default leg; outstanding
/// notional for loss and recovery is read off the amortization schedule at
/// each slice. Slices that close on or before settlement carry no default
/// risk for the holder and are skipped.
#[allow(clippy::too_many_arguments)]
pub(crate) fn integrate_period_losses(
    curve: &dyn Curve,
    credit: &dyn CreditCurve,
    setting: &CreditSetting,
    notional: &NotionalSetting,
    period: &CouponPeriod,
    day_count: &impl DayCount,
    rate: f64,
    coupon_base: f64,
    settlement: Date,
    truncate: Option<Date>,
    step_days: i64,
) -> AnalyticsResult<LossIntegrals> {
    let mut totals = LossIntegrals::default();

    for slice in period.loss_quadrature(day_count, step_days, truncate) {
        if slice.end <= settlement {
            continue;
        }
        // The holder is only exposed from settlement onward.
        let window_start = slice.start.max(settlement);
        let dp = credit.default_probability_between(window_start, slice.end)?;
        if dp <= 0.0 {
            continue;
        }

        let recovery = match setting.recovery {
            RecoveryAssumption::CurveImplied => credit.recovery_at(slice.end)?,
            RecoveryAssumption::Fixed(fixed) => fixed,
        };
        let outstanding = notional.factor_as_of(slice.start);
        let pay = slice
            .end
            .add_days(i64::from(setting.default_pay_lag_days));
        let df = curve.discount_factor_at(pay)?;

        totals.default_loss_pv += dp * (1.0 - recovery) * outstanding * df;
        totals.recovery_pv += dp * recovery * outstanding * df;
        totals.expected_recovery += dp * recovery * outstanding;
        if setting.accrue_on_default {
            totals.accrued_on_default_pv += dp * rate * slice.fraction * coupon_base * df;
        }
    }

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use oasis_core::daycounts::Act365Fixed;
    use oasis_curves::{FlatCurve, FlatHazardCurve};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_zero_hazard_integrates_to_zero() {
        let reference = date(2025, 1, 15);
        let curve = FlatCurve::new(reference, 0.03).unwrap();
        let credit = FlatHazardCurve::new(reference, 0.0, 0.4).unwrap();
        let period = CouponPeriod::new(date(2025, 1, 15), date(2025, 7, 15));
        let totals = integrate_period_losses(
            &curve,
            &credit,
            &CreditSetting::new(),
            &NotionalSetting::bullet(),
            &period,
            &Act365Fixed,
            0.05,
            1.0,
            date(2025, 1, 16),
            None,
            7,
        )
        .unwrap();
        assert_eq!(totals.default_loss_pv, 0.0);
        assert_eq!(totals.recovery_pv, 0.0);
        assert_eq!(totals.expected_recovery, 0.0);
        assert_eq!(totals.accrued_on_default_pv, 0.0);
    }

    #[test]
    fn test_expected_recovery_matches_flat_hazard() {
        let reference = date(2025, 1, 15);
        let curve = FlatCurve::new(reference, 0.0).unwrap();
        let credit = FlatHazardCurve::new(reference, 0.02, 0.4).unwrap();
        let period = CouponPeriod::new(date(2025, 1, 15), date(2026, 1, 15));
        let totals = integrate_period_losses(
            &curve,
            &credit,
            &CreditSetting::new(),
            &NotionalSetting::bullet(),
            &period,
            &Act365Fixed,
            0.05,
            1.0,
            reference,
            None,
            1,
        )
        .unwrap();
        // Sum of marginal probabilities telescopes to the total.
        let total_dp = 1.0 - (-0.02f64).exp();
        assert_relative_eq!(totals.expected_recovery, 0.4 * total_dp, epsilon = 1e-12);
        // Zero rates: loss + recovery legs sum to total default probability.
        assert_relative_eq!(
            totals.default_loss_pv + totals.recovery_pv,
            total_dp,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_accrue_on_default_toggle() {
        let reference = date(2025, 1, 15);
        let curve = FlatCurve::new(reference, 0.03).unwrap();
        let credit = FlatHazardCurve::new(reference, 0.02, 0.4).unwrap();
        let period = CouponPeriod::new(date(2025, 1, 15), date(2025, 7, 15));
        let on = integrate_period_losses(
            &curve,
            &credit,
            &CreditSetting::new(),
            &NotionalSetting::bullet(),
            &period,
            &Act365Fixed,
            0.05,
            1.0,
            reference,
            None,
            7,
        )
        .unwrap();
        let off = integrate_period_losses(
            &curve,
            &credit,
            &CreditSetting::new().with_accrue_on_default(false),
            &NotionalSetting::bullet(),
            &period,
            &Act365Fixed,
            0.05,
            1.0,
            reference,
            None,
            7,
        )
        .unwrap();
        assert!(on.accrued_on_default_pv > 0.0);
        assert_eq!(off.accrued_on_default_pv, 0.0);
        assert_relative_eq!(on.default_loss_pv, off.default_loss_pv, epsilon = 1e-15);
    }

    #[test]
    fn test_slices_before_settlement_skipped() {
        let reference = date(2025, 1, 15);
        let curve = FlatCurve::new(reference, 0.0).unwrap();
        let credit = FlatHazardCurve::new(reference, 0.02, 0.0).unwrap();
        let period = CouponPeriod::new(date(2025, 1, 15), date(2026, 1, 15));
        // Settle half way through: only the back half contributes.
        let totals = integrate_period_losses(
            &curve,
            &credit,
            &CreditSetting::new().with_accrue_on_default(false),
            &NotionalSetting::bullet(),
            &period,
            &Act365Fixed,
            0.05,
            1.0,
            date(2025, 7, 15),
            None,
            1,
        )
        .unwrap();
        let survival_settle = credit
            .survival_probability_at(date(2025, 7, 15))
            .unwrap();
        let survival_end = credit.survival_probability_at(date(2026, 1, 15)).unwrap();
        assert_relative_eq!(
            totals.default_loss_pv,
            survival_settle - survival_end,
            epsilon = 1e-12
        );
    }
}
