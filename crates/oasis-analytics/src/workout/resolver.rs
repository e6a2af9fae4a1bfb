//! Selects the workout a rational holder should price to.
//!
//! Every eligible exercise date is tried as a redemption scenario at the
//! quoted price. An issuer calls when that cuts the holder's yield below
//! the yield to maturity; a holder puts when that lifts it above. When both
//! sides would act, the earlier date wins, a call on equal dates.

use tracing::debug;

use oasis_bonds::ExerciseSchedule;

use crate::context::PricingContext;
use crate::conversions::price_yield;
use crate::error::AnalyticsResult;
use crate::workout::{Workout, WorkoutInfo, WorkoutType};

/// Resolves the governing workout for a clean price.
///
/// Candidates that fail to solve are dropped with a debug log; if the
/// maturity yield itself fails but an exercise candidate solved, the
/// candidate stands. The maturity error propagates only when nothing
/// solved at all.
pub fn resolve_workout(
    ctx: &PricingContext<'_>,
    clean_price: f64,
) -> AnalyticsResult<WorkoutInfo> {
    let bond = ctx.bond();
    let maturity = Workout::at_maturity(bond);
    let maturity_yield = price_yield::yield_from_price(ctx, clean_price, maturity);

    let best_call = best_exercise(ctx, bond.calls(), clean_price, YieldSide::Low);
    let best_put = best_exercise(ctx, bond.puts(), clean_price, YieldSide::High);

    match maturity_yield {
        Ok(ytm) => {
            let call = best_call.filter(|(_, y)| *y < ytm);
            let put = best_put.filter(|(_, y)| *y > ytm);
            Ok(match earlier_of(call, put) {
                Some(info) => info,
                None => WorkoutInfo {
                    workout: maturity,
                    workout_type: WorkoutType::Maturity,
                    yield_value: ytm,
                },
            })
        }
        Err(err) => match earlier_of(best_call, best_put) {
            Some(info) => {
                debug!("maturity workout failed to solve, using exercise: {}", err);
                Ok(info)
            }
            None => Err(err),
        },
    }
}

/// Yield to the resolved workout, the number a worst-quote convention
/// reports.
pub fn exercise_yield_from_price(
    ctx: &PricingContext<'_>,
    clean_price: f64,
) -> AnalyticsResult<f64> {
    Ok(resolve_workout(ctx, clean_price)?.yield_value)
}

#[derive(Clone, Copy)]
enum YieldSide {
    /// Issuer's pick: the candidate cutting the holder's yield the most.
    Low,
    /// Holder's pick: the candidate lifting the yield the most.
    High,
}

fn best_exercise(
    ctx: &PricingContext<'_>,
    schedule: Option<&ExerciseSchedule>,
    clean_price: f64,
    side: YieldSide,
) -> Option<(Workout, f64)> {
    let schedule = schedule?;
    let mut best: Option<(Workout, f64)> = None;
    for entry in schedule.eligible_entries(ctx.valuation(), ctx.snip_days()) {
        let workout = Workout::new(entry.date, entry.factor);
        match price_yield::yield_from_price(ctx, clean_price, workout) {
            Ok(candidate) => {
                let better = match best {
                    None => true,
                    Some((_, incumbent)) => match side {
                        YieldSide::Low => candidate < incumbent,
                        YieldSide::High => candidate > incumbent,
                    },
                };
                if better {
                    best = Some((workout, candidate));
                }
            }
            Err(e) => {
                debug!("exercise candidate {} dropped: {}", entry.date, e);
            }
        }
    }
    best
}

fn earlier_of(
    call: Option<(Workout, f64)>,
    put: Option<(Workout, f64)>,
) -> Option<WorkoutInfo> {
    let wrap = |(workout, yield_value): (Workout, f64), workout_type| WorkoutInfo {
        workout,
        workout_type,
        yield_value,
    };
    match (call, put) {
        (Some(c), Some(p)) if p.0.date < c.0.date => Some(wrap(p, WorkoutType::Put)),
        (Some(c), _) => Some(wrap(c, WorkoutType::Call)),
        (None, Some(p)) => Some(wrap(p, WorkoutType::Put)),
        (None, None) => None,
    }
}
