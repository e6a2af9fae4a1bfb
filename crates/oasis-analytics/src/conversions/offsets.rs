//! Closed-form additive spread measures over the yield pivot.
//!
//! Each measure here is `yield − benchmark`, where the benchmark rate is
//! read off a curve and does not depend on the instrument's price. Both
//! conversion directions are closed form once the yield pivot is in hand.

use oasis_bonds::CouponBasis;
use oasis_curves::RateMeasure;

use crate::context::PricingContext;
use crate::conversions::price_yield;
use crate::engine;
use crate::error::AnalyticsResult;
use crate::workout::Workout;

/// On-the-run benchmark tenor grid, in years.
const TSY_BENCHMARK_TENORS: [f64; 9] = [0.5, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0, 20.0, 30.0];

// ---------------------------------------------------------------------------
// ISpread: yield less the funding-curve swap rate at the workout date.
// ---------------------------------------------------------------------------

fn ispread_benchmark(ctx: &PricingContext<'_>, workout: Workout) -> AnalyticsResult<f64> {
    Ok(ctx
        .curves()
        .discount()
        .estimate_rate(RateMeasure::SwapRate, workout.date)?)
}

pub(crate) fn ispread_from_price(
    ctx: &PricingContext<'_>,
    price: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    let y = price_yield::yield_from_price(ctx, price, workout)?;
    Ok(y - ispread_benchmark(ctx, workout)?)
}

pub(crate) fn price_from_ispread(
    ctx: &PricingContext<'_>,
    value: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    let y = value + ispread_benchmark(ctx, workout)?;
    engine::price_from_yield(ctx, y, workout)
}

// ---------------------------------------------------------------------------
// GSpread: yield less the govvie zero rate at the workout date.
// ---------------------------------------------------------------------------

fn gspread_benchmark(ctx: &PricingContext<'_>, workout: Workout) -> AnalyticsResult<f64> {
    Ok(ctx
        .govvie()?
        .estimate_rate(RateMeasure::Zero, workout.date)?)
}

pub(crate) fn gspread_from_price(
    ctx: &PricingContext<'_>,
    price: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    let y = price_yield::yield_from_price(ctx, price, workout)?;
    Ok(y - gspread_benchmark(ctx, workout)?)
}

pub(crate) fn price_from_gspread(
    ctx: &PricingContext<'_>,
    value: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    let y = value + gspread_benchmark(ctx, workout)?;
    engine::price_from_yield(ctx, y, workout)
}

// ---------------------------------------------------------------------------
// TSYspread: yield less the govvie zero at the nearest benchmark tenor.
// ---------------------------------------------------------------------------

fn nearest_tenor(horizon_years: f64) -> f64 {
    TSY_BENCHMARK_TENORS
        .iter()
        .copied()
        .min_by(|a, b| {
            (a - horizon_years)
                .abs()
                .total_cmp(&(b - horizon_years).abs())
        })
        .unwrap_or(TSY_BENCHMARK_TENORS[0])
}

fn tsy_benchmark(ctx: &PricingContext<'_>, workout: Workout) -> AnalyticsResult<f64> {
    let govvie = ctx.govvie()?;
    let horizon = ctx.valuation().days_between(&workout.date) as f64 / 365.0;
    let tenor = nearest_tenor(horizon);
    let months = (tenor * 12.0).round() as i32;
    let benchmark_date = ctx.valuation().add_months(months)?;
    Ok(govvie.estimate_rate(RateMeasure::Zero, benchmark_date)?)
}

pub(crate) fn tsyspread_from_price(
    ctx: &PricingContext<'_>,
    price: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    let y = price_yield::yield_from_price(ctx, price, workout)?;
    Ok(y - tsy_benchmark(ctx, workout)?)
}

pub(crate) fn price_from_tsyspread(
    ctx: &PricingContext<'_>,
    value: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    let y = value + tsy_benchmark(ctx, workout)?;
    engine::price_from_yield(ctx, y, workout)
}

// ---------------------------------------------------------------------------
// DiscountMargin: yield less the reference index estimated at settlement.
// Fixed-coupon instruments have no index, so the margin degenerates to the
// yield itself.
// ---------------------------------------------------------------------------

fn index_rate_at_settlement(ctx: &PricingContext<'_>) -> AnalyticsResult<f64> {
    match ctx.bond().coupon() {
        CouponBasis::Floating(floater) => Ok(ctx.curves().discount().estimate_rate(
            RateMeasure::Forward {
                months: floater.index_tenor_months,
            },
            ctx.settlement(),
        )?),
        CouponBasis::Fixed { .. } => Ok(0.0),
    }
}

pub(crate) fn discount_margin_from_price(
    ctx: &PricingContext<'_>,
    price: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    let y = price_yield::yield_from_price(ctx, price, workout)?;
    Ok(y - index_rate_at_settlement(ctx)?)
}

pub(crate) fn price_from_discount_margin(
    ctx: &PricingContext<'_>,
    value: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    let y = value + index_rate_at_settlement(ctx)?;
    engine::price_from_yield(ctx, y, workout)
}
