//! Credit spread measures quoted by recurving the hazard curve.
//!
//! Credit basis bumps the existing curve in parallel; PECS replaces it with
//! a flat curve at the quoted spread. Both price through the risky engine
//! and calibrate the from-price direction, and both need a credit curve in
//! the set plus a credit setting on the instrument.

use oasis_bonds::RecoveryAssumption;
use oasis_curves::{CreditCurve, FlatHazardCurve, ShiftedHazardCurve};

use crate::calibrate::{self, RecurveMode};
use crate::context::PricingContext;
use crate::engine::{self, DiscountBasis};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::workout::Workout;

fn require_credit_setting(ctx: &PricingContext<'_>) -> AnalyticsResult<()> {
    if ctx.bond().credit().is_none() {
        return Err(AnalyticsError::invalid_input(
            "credit measures require a credit setting on the instrument",
        ));
    }
    Ok(())
}

fn model_price_with_overlay(
    ctx: &PricingContext<'_>,
    overlay: &dyn CreditCurve,
    workout: Workout,
) -> AnalyticsResult<f64> {
    let curves = ctx.curves().with_credit(overlay);
    let recurved = ctx.with_curves(curves);
    let result = engine::workout_measures(
        &recurved,
        DiscountBasis::Curve(recurved.curves().discount()),
        workout,
    )?;
    Ok(result.model_clean_price())
}

/// Clean model price with the credit curve rebuilt at `spread` under the
/// given recurve mode.
pub(crate) fn price_with_recurve(
    ctx: &PricingContext<'_>,
    mode: RecurveMode,
    spread: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    let base = ctx.credit()?;
    match mode {
        RecurveMode::ParallelShift => {
            let shifted = ShiftedHazardCurve::new(base, spread);
            model_price_with_overlay(ctx, &shifted, workout)
        }
        RecurveMode::Flat => {
            let setting = ctx.bond().credit().copied().unwrap_or_default();
            let recovery = match setting.recovery {
                RecoveryAssumption::Fixed(fixed) => fixed,
                RecoveryAssumption::CurveImplied => base.recovery_at(ctx.settlement())?,
            };
            let flat = FlatHazardCurve::from_spread(base.reference_date(), spread, recovery)?;
            model_price_with_overlay(ctx, &flat, workout)
        }
    }
}

pub(crate) fn credit_basis_from_price(
    ctx: &PricingContext<'_>,
    price: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    require_credit_setting(ctx)?;
    ctx.credit()?;
    calibrate::calibrate(
        "CreditBasis",
        |spread| price_with_recurve(ctx, RecurveMode::ParallelShift, spread, workout),
        price,
    )
}

pub(crate) fn price_from_credit_basis(
    ctx: &PricingContext<'_>,
    value: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    require_credit_setting(ctx)?;
    price_with_recurve(ctx, RecurveMode::ParallelShift, value, workout)
}

pub(crate) fn pecs_from_price(
    ctx: &PricingContext<'_>,
    price: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    require_credit_setting(ctx)?;
    ctx.credit()?;
    calibrate::calibrate(
        "PECS",
        |spread| price_with_recurve(ctx, RecurveMode::Flat, spread, workout),
        price,
    )
}

pub(crate) fn price_from_pecs(
    ctx: &PricingContext<'_>,
    value: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    require_credit_setting(ctx)?;
    price_with_recurve(ctx, RecurveMode::Flat, value, workout)
}
