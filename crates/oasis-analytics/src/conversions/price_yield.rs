//! The price/yield conversion pair, the pivot every other measure rides on.

use crate::calibrate::calibrate;
use crate::context::PricingContext;
use crate::engine;
use crate::error::AnalyticsResult;
use crate::workout::Workout;

pub(crate) fn price_from_yield(
    ctx: &PricingContext<'_>,
    value: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    engine::price_from_yield(ctx, value, workout)
}

pub(crate) fn yield_from_price(
    ctx: &PricingContext<'_>,
    price: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    calibrate(
        "Yield",
        |y| engine::price_from_yield(ctx, y, workout),
        price,
    )
}
