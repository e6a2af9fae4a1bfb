//! The top-level valuation entry point.
//!
//! [`value`] turns a market quote into the full measure map. Calibration
//! mode pivots off the quoted level, fair-value mode off the curves; either
//! way the conversion table fills everything the curve set supports, and
//! anything that fails is omitted rather than failing the call.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::PricingContext;
use crate::conversions::{self, MeasureKind, WorkoutMode};
use crate::engine::{self, DiscountBasis};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::quotes::MarketQuote;
use crate::workout::{self, Workout};

/// Where the pivot price comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValuationMode {
    /// Pivot off the quoted price, or the quoted yield when no price is
    /// contributed. Contributed fields override converted values.
    Calibration,
    /// Pivot off the curve-model price, ignoring contributed levels.
    FairValue,
}

/// Values an instrument against a quote.
///
/// The resolved workout governs every conversion, so option-bearing
/// instruments are quoted to their optimal exercise. Measures the curve set
/// cannot support are omitted with a debug log.
pub fn value(
    ctx: &PricingContext<'_>,
    quote: &MarketQuote,
    mode: ValuationMode,
) -> AnalyticsResult<BTreeMap<MeasureKind, f64>> {
    let pivot = match mode {
        ValuationMode::Calibration => calibration_pivot(ctx, quote)?,
        ValuationMode::FairValue => model_pivot(ctx)?,
    };

    let info = workout::resolve_workout(ctx, pivot)?;
    let mut measures = BTreeMap::new();
    measures.insert(MeasureKind::Price, pivot);
    measures.insert(MeasureKind::Yield, info.yield_value);
    for kind in MeasureKind::ALL {
        if measures.contains_key(&kind) {
            continue;
        }
        match conversions::measure_from_price(
            ctx,
            kind,
            pivot,
            WorkoutMode::Explicit(info.workout),
        ) {
            Ok(converted) => {
                measures.insert(kind, converted);
            }
            Err(e) => debug!("{kind} omitted: {}", e),
        }
    }

    if mode == ValuationMode::Calibration {
        for (kind, field) in &quote.fields {
            if let Some(level) = field.mid_or_calculated().and_then(|d| d.to_f64()) {
                measures.insert(*kind, level);
            }
        }
    }

    Ok(measures)
}

fn calibration_pivot(ctx: &PricingContext<'_>, quote: &MarketQuote) -> AnalyticsResult<f64> {
    if let Some(price) = quoted_level(quote, MeasureKind::Price) {
        return Ok(price);
    }
    if let Some(rate) = quoted_level(quote, MeasureKind::Yield) {
        return conversions::price_from_measure(
            ctx,
            MeasureKind::Yield,
            rate,
            WorkoutMode::Maturity,
        );
    }
    Err(AnalyticsError::invalid_input(format!(
        "quote for {} carries neither a price nor a yield to pivot from",
        quote.instrument_id
    )))
}

fn model_pivot(ctx: &PricingContext<'_>) -> AnalyticsResult<f64> {
    let result = engine::workout_measures(
        ctx,
        DiscountBasis::Curve(ctx.curves().discount()),
        Workout::at_maturity(ctx.bond()),
    )?;
    Ok(result.model_clean_price())
}

fn quoted_level(quote: &MarketQuote, kind: MeasureKind) -> Option<f64> {
    quote.mid_or_calculated(kind).and_then(|d| d.to_f64())
}
