//! The cashflow pricing engine.
//!
//! One pass values the coupon stream, amortization principal, redemption,
//! and (when a credit curve backs the run) the default-contingent legs to a
//! single workout scenario. Everything above this module is a choice of
//! discount basis plus a root search around the same pass.
//!
//! Prices are quoted per 100 of current face and normalized so the
//! settlement date discounts to one.

mod discount;
mod integrate;
mod measures;

pub use discount::DiscountBasis;
pub use measures::{BondCouponMeasures, BondWorkoutMeasures, CreditMeasures};

use oasis_bonds::{CouponBasis, CouponPeriod, RecoveryAssumption};
use oasis_curves::{CreditCurve, Curve, RateMeasure, ShiftedCurve};

use crate::context::PricingContext;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::workout::Workout;

use discount::Discounter;
use integrate::{integrate_period_losses, LossIntegrals};

/// Which curve in the set backs a curve-basis pricing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveSelect {
    /// The funding/discount curve.
    Funding,
    /// The government benchmark curve.
    Govvie,
}

/// Values the instrument to `workout` on the given discount basis.
///
/// Periods paying on or before the valuation date are skipped; the period
/// containing the workout date is truncated at it. Credit legs are only
/// valued on a curve basis, since a yield prices default risk implicitly.
pub fn workout_measures(
    ctx: &PricingContext<'_>,
    basis: DiscountBasis<'_>,
    workout: Workout,
) -> AnalyticsResult<BondWorkoutMeasures> {
    validate_workout(ctx, workout)?;

    let bond = ctx.bond();
    let settlement = ctx.settlement();
    let day_count = bond.day_count();
    let notional = bond.notional();
    let outstanding_settle = notional.factor_as_of(settlement);

    let risky_pair: Option<(&dyn Curve, &dyn CreditCurve)> = match basis {
        DiscountBasis::Curve(curve) if ctx.curves().has_credit() => {
            Some((curve, ctx.curves().credit()?))
        }
        _ => None,
    };
    let credit_setting = bond.credit().copied().unwrap_or_default();

    let mut discounter = Discounter::new(basis, bond.frequency(), ctx.yield_dcf(), settlement);
    let settle_df = discounter.at_date(settlement)?;
    if settle_df <= 0.0 || !settle_df.is_finite() {
        return Err(AnalyticsError::invalid_input(format!(
            "settlement discount factor {settle_df} is not usable"
        )));
    }

    let mut coupon_pv = 0.0;
    let mut principal_pv = 0.0;
    let mut annuity = 0.0;
    let mut risky_coupon_pv = 0.0;
    let mut risky_principal_pv = 0.0;
    let mut risky_annuity = 0.0;
    let mut losses = LossIntegrals::default();

    for period in bond.schedule().periods() {
        if period.pay <= ctx.valuation() {
            continue;
        }
        if period.start >= workout.date {
            break;
        }

        let truncated = workout.date < period.end;
        let effective_end = if truncated { workout.date } else { period.end };
        let pay = if truncated { workout.date } else { period.pay };

        let fraction = period.accrual_fraction(&day_count, effective_end);
        let rate = period_rate(ctx, period)?;
        let base = notional.coupon_base(period.start, effective_end);
        let remaining = (fraction - period.accrual_fraction(&day_count, settlement)).max(0.0);
        let df = discounter.advance(remaining, pay)?;

        let coupon = rate * fraction * base;
        let principal = notional.step_between(period.start, effective_end);
        coupon_pv += coupon * df;
        principal_pv += principal * df;
        annuity += fraction * base * df;

        if let Some((curve, credit)) = risky_pair {
            let survival = credit.survival_probability_at(pay)?;
            risky_coupon_pv += coupon * df * survival;
            risky_principal_pv += principal * df * survival;
            risky_annuity += fraction * base * df * survival;

            let truncate = truncated.then_some(workout.date);
            let period_losses = integrate_period_losses(
                curve,
                credit,
                &credit_setting,
                notional,
                period,
                &day_count,
                rate,
                base,
                settlement,
                truncate,
                ctx.loss_step_days(),
            )?;
            losses.add(&period_losses);
        }

        if truncated {
            break;
        }
    }

    let redemption = workout.factor * notional.factor_as_of(workout.date);
    let redemption_df = discounter.at_date(workout.date)?;
    let redemption_pv = redemption * redemption_df;

    let accrued = accrued_interest(ctx)?;
    let scale = 100.0 / (settle_df * outstanding_settle);

    let dirty_price = (coupon_pv + principal_pv + redemption_pv) * scale;
    let mut result = BondWorkoutMeasures {
        coupons: BondCouponMeasures {
            coupon_pv: coupon_pv * scale,
            principal_pv: principal_pv * scale,
            annuity: annuity * scale,
            accrued,
            credit: None,
        },
        redemption_pv: redemption_pv * scale,
        risky_redemption_pv: None,
        dirty_price,
        clean_price: dirty_price - accrued,
        risky_dirty_price: None,
        risky_clean_price: None,
        loss_on_instant_default: None,
        workout,
    };

    if let Some((_, credit)) = risky_pair {
        let survival_workout = credit.survival_probability_at(workout.date)?;
        let risky_redemption_pv = redemption_pv * survival_workout;
        let recovery_settle = match credit_setting.recovery {
            RecoveryAssumption::CurveImplied => credit.recovery_at(settlement)?,
            RecoveryAssumption::Fixed(fixed) => fixed,
        };

        let risky_dirty = (risky_coupon_pv
            + risky_principal_pv
            + risky_redemption_pv
            + losses.recovery_pv
            + losses.accrued_on_default_pv)
            * scale;

        result.coupons.credit = Some(CreditMeasures {
            coupon_pv: risky_coupon_pv * scale,
            principal_pv: risky_principal_pv * scale,
            annuity: risky_annuity * scale,
            default_loss_pv: losses.default_loss_pv * scale,
            accrued_on_default_pv: losses.accrued_on_default_pv * scale,
            recovery_pv: losses.recovery_pv * scale,
            expected_recovery: losses.expected_recovery * 100.0 / outstanding_settle,
            default_exposure: 100.0 * (1.0 - recovery_settle),
        });
        result.risky_redemption_pv = Some(risky_redemption_pv * scale);
        result.risky_dirty_price = Some(risky_dirty);
        result.risky_clean_price = Some(risky_dirty - accrued);

        // Immediate default leaves the holder the recovery claim on face
        // plus, when configured, the coupon accrued so far.
        let instant_claim = 100.0 * recovery_settle
            + if credit_setting.accrue_on_default {
                accrued
            } else {
                0.0
            };
        result.loss_on_instant_default = Some(risky_dirty - instant_claim);
    }

    Ok(result)
}

/// Clean price at a flat yield, to the given workout.
pub fn price_from_yield(
    ctx: &PricingContext<'_>,
    rate: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    if !rate.is_finite() {
        return Err(AnalyticsError::invalid_input(format!(
            "yield {rate} is not finite"
        )));
    }
    let result = workout_measures(ctx, DiscountBasis::Yield { rate }, workout)?;
    Ok(result.clean_price)
}

/// Riskless clean price on a curve with an additive zero spread, to the
/// given workout.
///
/// The spread measures that use this (Z-spread, OAS) absorb all credit into
/// the spread itself, so any credit curve in the set is ignored here.
pub fn price_on_curve(
    ctx: &PricingContext<'_>,
    spread: f64,
    select: CurveSelect,
    workout: Workout,
) -> AnalyticsResult<f64> {
    if !spread.is_finite() {
        return Err(AnalyticsError::invalid_input(format!(
            "spread {spread} is not finite"
        )));
    }
    let base = match select {
        CurveSelect::Funding => ctx.curves().discount(),
        CurveSelect::Govvie => ctx.govvie()?,
    };
    let shifted = ShiftedCurve::new(base, spread);
    let result = workout_measures(ctx, DiscountBasis::Curve(&shifted), workout)?;
    Ok(result.clean_price)
}

/// Interest accrued from the current period start through settlement, per
/// 100 of current face.
pub fn accrued_interest(ctx: &PricingContext<'_>) -> AnalyticsResult<f64> {
    let settlement = ctx.settlement();
    let Some(period) = ctx.bond().current_period(settlement) else {
        return Ok(0.0);
    };
    let rate = period_rate(ctx, period)?;
    let day_count = ctx.bond().day_count();
    Ok(100.0 * rate * period.accrual_fraction(&day_count, settlement))
}

/// The coupon rate a period pays.
///
/// Floating periods project the index forward rate off the funding curve
/// at the period start (clamped to the curve reference); a known fixing
/// overrides the projection for the period containing settlement.
fn period_rate(ctx: &PricingContext<'_>, period: &CouponPeriod) -> AnalyticsResult<f64> {
    match ctx.bond().coupon() {
        CouponBasis::Fixed { rate } => Ok(*rate),
        CouponBasis::Floating(floater) => {
            if period.contains(ctx.settlement()) {
                if let Some(fixing) = floater.current_fixing {
                    return Ok(fixing + floater.quoted_margin);
                }
            }
            let curve = ctx.curves().discount();
            let projection_date = period.start.max(curve.reference_date());
            let index = curve.estimate_rate(
                RateMeasure::Forward {
                    months: floater.index_tenor_months,
                },
                projection_date,
            )?;
            Ok(index + floater.quoted_margin)
        }
    }
}

fn validate_workout(ctx: &PricingContext<'_>, workout: Workout) -> AnalyticsResult<()> {
    if !workout.factor.is_finite() || workout.factor <= 0.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "workout factor {} must be finite and positive",
            workout.factor
        )));
    }
    if workout.date > ctx.bond().maturity() {
        return Err(AnalyticsError::invalid_input(format!(
            "workout date {} is past maturity {}",
            workout.date,
            ctx.bond().maturity()
        )));
    }
    // A workout may trail the valuation date by at most the snip tolerance.
    let floor = ctx.valuation().add_days(-i64::from(ctx.snip_days()));
    if workout.date < floor {
        return Err(AnalyticsError::temporal_violation(
            ctx.valuation(),
            workout.date,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use oasis_bonds::{
        AmortizationAttribution, Bond, BondBuilder, CouponBasis, CreditSetting, FloaterSetting,
        NotionalSetting, NotionalStep,
    };
    use oasis_core::types::{Date, Frequency};
    use oasis_curves::{CurveSet, FlatCurve, FlatHazardCurve};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn bullet(coupon: f64, issue: Date, maturity: Date) -> Bond {
        BondBuilder::new()
            .coupon_rate(coupon)
            .issue_date(issue)
            .maturity(maturity)
            .settlement_days(0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_par_bond_prices_at_par() {
        let bond = bullet(0.05, date(2025, 6, 15), date(2030, 6, 15));
        let curve = FlatCurve::new(date(2025, 6, 15), 0.03).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2025, 6, 15));
        let price = price_from_yield(&ctx, 0.05, Workout::at_maturity(&bond)).unwrap();
        assert_relative_eq!(price, 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_price_decreases_in_yield() {
        let bond = bullet(0.05, date(2025, 6, 15), date(2035, 6, 15));
        let curve = FlatCurve::new(date(2025, 6, 15), 0.03).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2026, 2, 10));
        let workout = Workout::at_maturity(&bond);
        let low = price_from_yield(&ctx, 0.04, workout).unwrap();
        let mid = price_from_yield(&ctx, 0.05, workout).unwrap();
        let high = price_from_yield(&ctx, 0.06, workout).unwrap();
        assert!(low > mid);
        assert!(mid > high);
    }

    #[test]
    fn test_zero_coupon_yield_price() {
        let bond = BondBuilder::new()
            .coupon_rate(0.0)
            .frequency(Frequency::Zero)
            .issue_date(date(2025, 6, 15))
            .maturity(date(2030, 6, 15))
            .settlement_days(0)
            .build()
            .unwrap();
        let curve = FlatCurve::new(date(2025, 6, 15), 0.03).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2025, 6, 15));
        // 30/360 over exactly five years compounds annually.
        let price = price_from_yield(&ctx, 0.05, Workout::at_maturity(&bond)).unwrap();
        assert_relative_eq!(price, 100.0 * 1.05f64.powi(-5), epsilon = 1e-10);
    }

    #[test]
    fn test_zero_coupon_on_flat_curve() {
        let reference = date(2025, 6, 15);
        let maturity = date(2030, 6, 15);
        let bond = BondBuilder::new()
            .coupon_rate(0.0)
            .frequency(Frequency::Zero)
            .issue_date(reference)
            .maturity(maturity)
            .settlement_days(0)
            .build()
            .unwrap();
        let curve = FlatCurve::new(reference, 0.03).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), reference);
        let price = price_on_curve(&ctx, 0.0, CurveSelect::Funding, Workout::at_maturity(&bond))
            .unwrap();
        let t = reference.days_between(&maturity) as f64 / 365.0;
        assert_relative_eq!(price, 100.0 * (-0.03 * t).exp(), epsilon = 1e-10);
    }

    #[test]
    fn test_curve_spread_lowers_price() {
        let bond = bullet(0.05, date(2025, 6, 15), date(2032, 6, 15));
        let curve = FlatCurve::new(date(2025, 6, 15), 0.03).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2025, 6, 16));
        let workout = Workout::at_maturity(&bond);
        let base = price_on_curve(&ctx, 0.0, CurveSelect::Funding, workout).unwrap();
        let shifted = price_on_curve(&ctx, 0.02, CurveSelect::Funding, workout).unwrap();
        assert!(shifted < base);
    }

    #[test]
    fn test_govvie_select_requires_curve() {
        let bond = bullet(0.05, date(2025, 6, 15), date(2030, 6, 15));
        let curve = FlatCurve::new(date(2025, 6, 15), 0.03).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2025, 6, 16));
        let err = price_on_curve(&ctx, 0.0, CurveSelect::Govvie, Workout::at_maturity(&bond))
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::MissingCurve { .. }));
    }

    #[test]
    fn test_zero_hazard_credit_matches_riskless() {
        let reference = date(2025, 6, 15);
        let bond = BondBuilder::new()
            .coupon_rate(0.05)
            .issue_date(reference)
            .maturity(date(2030, 6, 15))
            .settlement_days(0)
            .credit(CreditSetting::new())
            .build()
            .unwrap();
        let curve = FlatCurve::new(reference, 0.03).unwrap();
        let credit = FlatHazardCurve::new(reference, 0.0, 0.4).unwrap();
        let curves = CurveSet::new(&curve).with_credit(&credit);
        let ctx = PricingContext::new(&bond, curves, reference);
        let result =
            workout_measures(&ctx, DiscountBasis::Curve(&curve), Workout::at_maturity(&bond))
                .unwrap();
        let risky_clean = result.risky_clean_price.unwrap();
        assert_relative_eq!(risky_clean, result.clean_price, epsilon = 1e-10);
        assert_eq!(result.coupons.credit.unwrap().default_loss_pv, 0.0);
    }

    #[test]
    fn test_hazard_lowers_price() {
        let reference = date(2025, 6, 15);
        let bond = BondBuilder::new()
            .coupon_rate(0.05)
            .issue_date(reference)
            .maturity(date(2030, 6, 15))
            .settlement_days(0)
            .credit(CreditSetting::new())
            .build()
            .unwrap();
        let curve = FlatCurve::new(reference, 0.03).unwrap();
        let credit = FlatHazardCurve::new(reference, 0.02, 0.4).unwrap();
        let curves = CurveSet::new(&curve).with_credit(&credit);
        let ctx = PricingContext::new(&bond, curves, reference);
        let result =
            workout_measures(&ctx, DiscountBasis::Curve(&curve), Workout::at_maturity(&bond))
                .unwrap();
        assert!(result.risky_clean_price.unwrap() < result.clean_price);
        let credit_measures = result.coupons.credit.unwrap();
        assert!(credit_measures.default_loss_pv > 0.0);
        assert!(credit_measures.recovery_pv > 0.0);
        assert_relative_eq!(credit_measures.default_exposure, 60.0, epsilon = 1e-12);
    }

    #[test]
    fn test_call_workout_truncates_stream() {
        let bond = bullet(0.05, date(2025, 6, 15), date(2035, 6, 15));
        let curve = FlatCurve::new(date(2025, 6, 15), 0.03).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2025, 6, 15));
        let to_maturity = price_from_yield(&ctx, 0.05, Workout::at_maturity(&bond)).unwrap();
        let to_call =
            price_from_yield(&ctx, 0.05, Workout::new(date(2028, 6, 15), 1.02)).unwrap();
        assert_relative_eq!(to_maturity, 100.0, epsilon = 1e-10);
        // Same coupons to the call, plus a 2-point redemption premium.
        assert!(to_call > 100.0);
        assert!(to_call < 102.0);
    }

    #[test]
    fn test_workout_past_maturity_rejected() {
        let bond = bullet(0.05, date(2025, 6, 15), date(2030, 6, 15));
        let curve = FlatCurve::new(date(2025, 6, 15), 0.03).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2025, 6, 16));
        let err = price_from_yield(&ctx, 0.05, Workout::new(date(2031, 1, 1), 1.0)).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput { .. }));
    }

    #[test]
    fn test_stale_workout_is_temporal_violation() {
        let bond = bullet(0.05, date(2020, 6, 15), date(2030, 6, 15));
        let curve = FlatCurve::new(date(2026, 6, 15), 0.03).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2026, 6, 15));
        let err = price_from_yield(&ctx, 0.05, Workout::new(date(2026, 6, 10), 1.0)).unwrap_err();
        assert!(matches!(err, AnalyticsError::TemporalViolation { .. }));
    }

    #[test]
    fn test_workout_within_snip_tolerance_allowed() {
        let bond = bullet(0.05, date(2020, 6, 15), date(2030, 6, 15));
        let curve = FlatCurve::new(date(2026, 6, 15), 0.03).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2026, 6, 15));
        // One day stale sits exactly on the default tolerance.
        let result = workout_measures(
            &ctx,
            DiscountBasis::Yield { rate: 0.05 },
            Workout::new(date(2026, 6, 14), 1.0),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_attribution_policy_orders_prices() {
        let issue = date(2025, 6, 15);
        let maturity = date(2030, 6, 15);
        let step = vec![NotionalStep::new(date(2027, 9, 15), 0.5)];
        let build = |attribution| {
            BondBuilder::new()
                .coupon_rate(0.05)
                .issue_date(issue)
                .maturity(maturity)
                .settlement_days(0)
                .notional(NotionalSetting::new(step.clone(), attribution).unwrap())
                .build()
                .unwrap()
        };
        let curve = FlatCurve::new(issue, 0.03).unwrap();
        let price = |bond: &Bond| {
            let ctx = PricingContext::new(bond, CurveSet::new(&curve), issue);
            price_from_yield(&ctx, 0.05, Workout::at_maturity(bond)).unwrap()
        };
        let period_end = price(&build(AmortizationAttribution::PeriodEnd));
        let pro_rata = price(&build(AmortizationAttribution::ProRata));
        let period_start = price(&build(AmortizationAttribution::PeriodStart));
        // Earlier attribution shrinks the coupon base for the step period.
        assert!(period_end > pro_rata);
        assert!(pro_rata > period_start);
    }

    #[test]
    fn test_attribution_policy_is_inert_for_bullets() {
        let issue = date(2025, 6, 15);
        let curve = FlatCurve::new(issue, 0.03).unwrap();
        let price = |attribution| {
            let bond = BondBuilder::new()
                .coupon_rate(0.05)
                .issue_date(issue)
                .maturity(date(2030, 6, 15))
                .settlement_days(0)
                .notional(NotionalSetting::new(Vec::new(), attribution).unwrap())
                .build()
                .unwrap();
            let ctx = PricingContext::new(&bond, CurveSet::new(&curve), issue);
            price_from_yield(&ctx, 0.05, Workout::at_maturity(&bond)).unwrap()
        };
        let period_end = price(AmortizationAttribution::PeriodEnd);
        let pro_rata = price(AmortizationAttribution::ProRata);
        let period_start = price(AmortizationAttribution::PeriodStart);
        assert_relative_eq!(period_end, pro_rata, epsilon = 1e-14);
        assert_relative_eq!(pro_rata, period_start, epsilon = 1e-14);
    }

    #[test]
    fn test_amortizing_principal_returns_par() {
        let issue = date(2025, 6, 15);
        let maturity = date(2030, 6, 15);
        let steps = vec![
            NotionalStep::new(date(2027, 6, 15), 0.75),
            NotionalStep::new(date(2028, 6, 15), 0.5),
        ];
        let bond = BondBuilder::new()
            .coupon_rate(0.0)
            .issue_date(issue)
            .maturity(maturity)
            .settlement_days(0)
            .notional(NotionalSetting::new(steps, AmortizationAttribution::PeriodEnd).unwrap())
            .build()
            .unwrap();
        let curve = FlatCurve::new(issue, 0.03).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), issue);
        // At a zero yield every repaid unit comes back undiscounted.
        let price = price_from_yield(&ctx, 0.0, Workout::at_maturity(&bond)).unwrap();
        assert_relative_eq!(price, 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_accrued_interest_thirty_360() {
        let bond = BondBuilder::new()
            .coupon_rate(0.05)
            .issue_date(date(2025, 6, 15))
            .maturity(date(2030, 6, 15))
            .build()
            .unwrap();
        let curve = FlatCurve::new(date(2025, 9, 14), 0.03).unwrap();
        // T+1 settles 90 days (30/360) into the period.
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2025, 9, 14));
        assert_relative_eq!(accrued_interest(&ctx).unwrap(), 1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_floater_accrued_uses_fixing() {
        let coupon = CouponBasis::Floating(FloaterSetting::new(6, 0.01).with_current_fixing(0.03));
        let bond = BondBuilder::new()
            .coupon(coupon)
            .issue_date(date(2025, 6, 15))
            .maturity(date(2030, 6, 15))
            .build()
            .unwrap();
        let curve = FlatCurve::new(date(2025, 9, 14), 0.05).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2025, 9, 14));
        // Fixing plus margin, not the projected curve rate.
        assert_relative_eq!(accrued_interest(&ctx).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_floater_price_increases_in_margin() {
        let build = |margin| {
            BondBuilder::new()
                .coupon(CouponBasis::Floating(FloaterSetting::new(6, margin)))
                .issue_date(date(2025, 6, 15))
                .maturity(date(2030, 6, 15))
                .settlement_days(0)
                .build()
                .unwrap()
        };
        let curve = FlatCurve::new(date(2025, 6, 15), 0.03).unwrap();
        let narrow = build(0.005);
        let wide = build(0.02);
        let workout = Workout::new(date(2030, 6, 15), 1.0);
        let narrow_px = {
            let ctx = PricingContext::new(&narrow, CurveSet::new(&curve), date(2025, 6, 15));
            price_on_curve(&ctx, 0.0, CurveSelect::Funding, workout).unwrap()
        };
        let wide_px = {
            let ctx = PricingContext::new(&wide, CurveSet::new(&curve), date(2025, 6, 15));
            price_on_curve(&ctx, 0.0, CurveSelect::Funding, workout).unwrap()
        };
        assert!(wide_px > narrow_px);
    }
}
