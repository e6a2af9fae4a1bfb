//! Bond basis: market yield less the yield implied by curve pricing.
//!
//! The model leg discounts on the funding curve, with the credit overlay
//! applied when the curve set carries one. Yield spread is quoted on the
//! same definition, so both measure names share these conversions.

use crate::context::PricingContext;
use crate::conversions::price_yield;
use crate::engine::{self, DiscountBasis};
use crate::error::AnalyticsResult;
use crate::workout::Workout;

/// Yield the curve-model price solves back to, through the same
/// yield-discounting machinery the market leg uses.
fn curve_implied_yield(ctx: &PricingContext<'_>, workout: Workout) -> AnalyticsResult<f64> {
    let result = engine::workout_measures(
        ctx,
        DiscountBasis::Curve(ctx.curves().discount()),
        workout,
    )?;
    price_yield::yield_from_price(ctx, result.model_clean_price(), workout)
}

pub(crate) fn bond_basis_from_price(
    ctx: &PricingContext<'_>,
    price: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    let market = price_yield::yield_from_price(ctx, price, workout)?;
    Ok(market - curve_implied_yield(ctx, workout)?)
}

pub(crate) fn price_from_bond_basis(
    ctx: &PricingContext<'_>,
    value: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    let y = value + curve_implied_yield(ctx, workout)?;
    engine::price_from_yield(ctx, y, workout)
}
