//! Finite-difference risk measures around the yield pivot.
//!
//! Every measure here is a central difference of the pricing engine, not an
//! analytic formula, so it stays valid for amortizers, floaters, and
//! truncated workouts without special cases.

use serde::{Deserialize, Serialize};

use crate::context::PricingContext;
use crate::conversions::price_yield;
use crate::engine;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::workout::Workout;

/// Yield bump for the duration and convexity differences, one basis point.
const YIELD_BUMP: f64 = 1e-4;
/// Price bump for the yield01 difference, one cent.
const PRICE_BUMP: f64 = 0.01;

/// First- and second-order sensitivities at a quoted price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMeasures {
    /// Relative dirty-price change per unit of yield.
    pub modified_duration: f64,
    /// Modified duration grossed up by one compounding period.
    pub macaulay_duration: f64,
    /// Second-order relative dirty-price sensitivity to yield.
    pub convexity: f64,
    /// Dirty-price gain, per 100 face, for a one basis point yield drop.
    pub dv01: f64,
    /// Yield rise for a one cent price drop.
    pub yield01: f64,
}

/// Computes the risk measures at a clean price and workout.
pub fn risk_measures(
    ctx: &PricingContext<'_>,
    clean_price: f64,
    workout: Workout,
) -> AnalyticsResult<RiskMeasures> {
    let y = price_yield::yield_from_price(ctx, clean_price, workout)?;
    let dirty = clean_price + engine::accrued_interest(ctx)?;
    if dirty <= 0.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "dirty price {dirty} must be positive for risk measures"
        )));
    }

    // Clean bumps carry the same accrued, so the differences are dirty
    // differences.
    let at_lower_yield = engine::price_from_yield(ctx, y - YIELD_BUMP, workout)?;
    let at_higher_yield = engine::price_from_yield(ctx, y + YIELD_BUMP, workout)?;

    let modified_duration = (at_lower_yield - at_higher_yield) / (2.0 * dirty * YIELD_BUMP);
    let convexity = (at_lower_yield + at_higher_yield - 2.0 * clean_price)
        / (dirty * YIELD_BUMP * YIELD_BUMP);
    let periods = ctx.bond().frequency().compounding_per_year();
    let macaulay_duration = modified_duration * (1.0 + y / periods);
    let dv01 = modified_duration * dirty / 10_000.0;

    let yield_low = price_yield::yield_from_price(ctx, clean_price - PRICE_BUMP, workout)?;
    let yield_high = price_yield::yield_from_price(ctx, clean_price + PRICE_BUMP, workout)?;
    let yield01 = (yield_low - yield_high) / 2.0;

    Ok(RiskMeasures {
        modified_duration,
        macaulay_duration,
        convexity,
        dv01,
        yield01,
    })
}
