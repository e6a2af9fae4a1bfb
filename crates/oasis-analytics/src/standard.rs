//! The standard measure bundle quoted off one price.
//!
//! One call resolves the governing workout, then fills every measure the
//! supplied curves can support. Measures that cannot be computed with the
//! curves at hand (no govvie, no credit curve, a floater restriction) are
//! skipped with a debug log rather than failing the bundle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::PricingContext;
use crate::conversions::{self, MeasureKind, WorkoutMode};
use crate::engine;
use crate::error::AnalyticsResult;
use crate::risk::{self, RiskMeasures};
use crate::workout::{self, WorkoutInfo};

/// Everything the desk quotes for one instrument at one price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardMeasures {
    /// The input clean price.
    pub price: f64,
    /// Accrued interest at settlement, per 100 of current face.
    pub accrued: f64,
    /// The workout the price resolves to.
    pub workout: WorkoutInfo,
    /// Every measure that solved, keyed by kind.
    pub measures: BTreeMap<MeasureKind, f64>,
    /// Finite-difference risk, when the yield solve supports it.
    pub risk: Option<RiskMeasures>,
}

/// Computes the standard bundle at a clean price.
pub fn standard_measures(
    ctx: &PricingContext<'_>,
    clean_price: f64,
) -> AnalyticsResult<StandardMeasures> {
    let info = workout::resolve_workout(ctx, clean_price)?;
    let accrued = engine::accrued_interest(ctx)?;

    let mut measures = BTreeMap::new();
    measures.insert(MeasureKind::Price, clean_price);
    measures.insert(MeasureKind::Yield, info.yield_value);
    for kind in MeasureKind::ALL {
        if measures.contains_key(&kind) {
            continue;
        }
        match conversions::measure_from_price(
            ctx,
            kind,
            clean_price,
            WorkoutMode::Explicit(info.workout),
        ) {
            Ok(value) => {
                measures.insert(kind, value);
            }
            Err(e) => debug!("{kind} skipped: {}", e),
        }
    }

    let risk = match risk::risk_measures(ctx, clean_price, info.workout) {
        Ok(risk) => Some(risk),
        Err(e) => {
            debug!("risk measures skipped: {}", e);
            None
        }
    };

    Ok(StandardMeasures {
        price: clean_price,
        accrued,
        workout: info,
        measures,
        risk,
    })
}
