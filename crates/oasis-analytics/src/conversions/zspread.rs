//! Z-spread and OAS: calibrated parallel shifts over a discount curve.
//!
//! Both measures discount the fixed cashflows on a shifted curve; OAS runs
//! the identical computation against the govvie curve instead of the
//! funding curve.

use crate::calibrate::calibrate;
use crate::context::PricingContext;
use crate::engine::{self, CurveSelect};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::workout::Workout;

/// Exact rejection condition quoted by upstream consumers; keep verbatim.
const FLOATER_REJECTION: &str = "Z Spread Calculation turned off for floaters";

fn reject_floaters(ctx: &PricingContext<'_>) -> AnalyticsResult<()> {
    if ctx.bond().is_floating() {
        return Err(AnalyticsError::unsupported(FLOATER_REJECTION));
    }
    Ok(())
}

pub(crate) fn price_from_zspread(
    ctx: &PricingContext<'_>,
    value: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    reject_floaters(ctx)?;
    engine::price_on_curve(ctx, value, CurveSelect::Funding, workout)
}

pub(crate) fn zspread_from_price(
    ctx: &PricingContext<'_>,
    price: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    reject_floaters(ctx)?;
    calibrate(
        "ZSpread",
        |z| engine::price_on_curve(ctx, z, CurveSelect::Funding, workout),
        price,
    )
}

pub(crate) fn price_from_oas(
    ctx: &PricingContext<'_>,
    value: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    reject_floaters(ctx)?;
    ctx.govvie()?;
    engine::price_on_curve(ctx, value, CurveSelect::Govvie, workout)
}

pub(crate) fn oas_from_price(
    ctx: &PricingContext<'_>,
    price: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    reject_floaters(ctx)?;
    ctx.govvie()?;
    calibrate(
        "OAS",
        |s| engine::price_on_curve(ctx, s, CurveSelect::Govvie, workout),
        price,
    )
}
