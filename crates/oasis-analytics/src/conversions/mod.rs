//! Bidirectional quote conversions, pivoting through price.
//!
//! Every quoting convention is registered as one `(to_price, from_price)`
//! pair in a static table. A cross-measure conversion is therefore always
//! two hops: source measure to price, price to target measure. No measure
//! converts directly to another.

mod asw;
mod basis;
mod credit;
mod offsets;
pub(crate) mod price_yield;
mod zspread;

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::context::PricingContext;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::workout::{self, Workout};

/// A quoting convention the conversion table understands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MeasureKind {
    /// Clean price per 100 of current face.
    Price,
    /// Yield to the workout.
    Yield,
    /// Market yield less the curve-implied yield.
    BondBasis,
    /// Parallel bump to the credit curve matching the price.
    CreditBasis,
    /// Flat credit spread matching the price.
    Pecs,
    /// Additive zero spread on the funding curve.
    ZSpread,
    /// Yield less the funding swap rate at the workout date.
    ISpread,
    /// Yield less the govvie zero at the workout date.
    GSpread,
    /// Additive zero spread on the govvie curve.
    Oas,
    /// Yield less the reference index rate at settlement.
    DiscountMargin,
    /// Par-par asset swap spread.
    Asw,
    /// Yield less the govvie zero at the nearest benchmark tenor.
    TsySpread,
    /// Quoted alias of the bond basis.
    YieldSpread,
}

impl MeasureKind {
    /// Every measure, in table order.
    pub const ALL: [Self; 13] = [
        Self::Price,
        Self::Yield,
        Self::BondBasis,
        Self::CreditBasis,
        Self::Pecs,
        Self::ZSpread,
        Self::ISpread,
        Self::GSpread,
        Self::Oas,
        Self::DiscountMargin,
        Self::Asw,
        Self::TsySpread,
        Self::YieldSpread,
    ];

    /// The conventional quote name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Price => "Price",
            Self::Yield => "Yield",
            Self::BondBasis => "BondBasis",
            Self::CreditBasis => "CreditBasis",
            Self::Pecs => "PECS",
            Self::ZSpread => "ZSpread",
            Self::ISpread => "ISpread",
            Self::GSpread => "GSpread",
            Self::Oas => "OAS",
            Self::DiscountMargin => "DiscountMargin",
            Self::Asw => "ASW",
            Self::TsySpread => "TSYSpread",
            Self::YieldSpread => "YieldSpread",
        }
    }

    /// Parses a quote name, ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the workout scenario is chosen for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WorkoutMode {
    /// Run to final maturity at par.
    Maturity,
    /// Run to the given scenario.
    Explicit(Workout),
    /// Resolve the scenario from the price being converted.
    OptimalExercise,
}

/// One direction of a registered conversion.
pub type ConvertFn = fn(&PricingContext<'_>, f64, Workout) -> AnalyticsResult<f64>;

/// A measure's two conversion directions.
#[derive(Clone, Copy)]
pub struct Conversion {
    /// Measure value to clean price.
    pub to_price: ConvertFn,
    /// Clean price to measure value.
    pub from_price: ConvertFn,
}

fn price_identity(
    _ctx: &PricingContext<'_>,
    value: f64,
    _workout: Workout,
) -> AnalyticsResult<f64> {
    Ok(value)
}

static CONVERSIONS: Lazy<BTreeMap<MeasureKind, Conversion>> = Lazy::new(|| {
    BTreeMap::from([
        (
            MeasureKind::Price,
            Conversion {
                to_price: price_identity,
                from_price: price_identity,
            },
        ),
        (
            MeasureKind::Yield,
            Conversion {
                to_price: price_yield::price_from_yield,
                from_price: price_yield::yield_from_price,
            },
        ),
        (
            MeasureKind::BondBasis,
            Conversion {
                to_price: basis::price_from_bond_basis,
                from_price: basis::bond_basis_from_price,
            },
        ),
        (
            MeasureKind::CreditBasis,
            Conversion {
                to_price: credit::price_from_credit_basis,
                from_price: credit::credit_basis_from_price,
            },
        ),
        (
            MeasureKind::Pecs,
            Conversion {
                to_price: credit::price_from_pecs,
                from_price: credit::pecs_from_price,
            },
        ),
        (
            MeasureKind::ZSpread,
            Conversion {
                to_price: zspread::price_from_zspread,
                from_price: zspread::zspread_from_price,
            },
        ),
        (
            MeasureKind::ISpread,
            Conversion {
                to_price: offsets::price_from_ispread,
                from_price: offsets::ispread_from_price,
            },
        ),
        (
            MeasureKind::GSpread,
            Conversion {
                to_price: offsets::price_from_gspread,
                from_price: offsets::gspread_from_price,
            },
        ),
        (
            MeasureKind::Oas,
            Conversion {
                to_price: zspread::price_from_oas,
                from_price: zspread::oas_from_price,
            },
        ),
        (
            MeasureKind::DiscountMargin,
            Conversion {
                to_price: offsets::price_from_discount_margin,
                from_price: offsets::discount_margin_from_price,
            },
        ),
        (
            MeasureKind::Asw,
            Conversion {
                to_price: asw::price_from_asw,
                from_price: asw::asw_from_price,
            },
        ),
        (
            MeasureKind::TsySpread,
            Conversion {
                to_price: offsets::price_from_tsyspread,
                from_price: offsets::tsyspread_from_price,
            },
        ),
        // YieldSpread is quoted separately but defined as the bond basis.
        (
            MeasureKind::YieldSpread,
            Conversion {
                to_price: basis::price_from_bond_basis,
                from_price: basis::bond_basis_from_price,
            },
        ),
    ])
});

fn conversion(kind: MeasureKind) -> AnalyticsResult<Conversion> {
    CONVERSIONS.get(&kind).copied().ok_or_else(|| {
        AnalyticsError::unsupported(format!("no conversion registered for {kind}"))
    })
}

fn ensure_finite(kind: MeasureKind, value: f64) -> AnalyticsResult<()> {
    if !value.is_finite() {
        return Err(AnalyticsError::invalid_input(format!(
            "{kind} value {value} is not finite"
        )));
    }
    Ok(())
}

/// Converts a clean price into the given measure.
///
/// Under [`WorkoutMode::OptimalExercise`] the governing workout is resolved
/// from the price itself; a yield request then short-circuits to the
/// resolving yield.
pub fn measure_from_price(
    ctx: &PricingContext<'_>,
    kind: MeasureKind,
    price: f64,
    mode: WorkoutMode,
) -> AnalyticsResult<f64> {
    ensure_finite(MeasureKind::Price, price)?;
    if kind == MeasureKind::Price {
        return Ok(price);
    }
    let workout = match mode {
        WorkoutMode::Maturity => Workout::at_maturity(ctx.bond()),
        WorkoutMode::Explicit(workout) => workout,
        WorkoutMode::OptimalExercise => {
            if ctx.bond().has_embedded_options() {
                let info = workout::resolve_workout(ctx, price)?;
                if kind == MeasureKind::Yield {
                    return Ok(info.yield_value);
                }
                info.workout
            } else {
                Workout::at_maturity(ctx.bond())
            }
        }
    };
    (conversion(kind)?.from_price)(ctx, price, workout)
}

/// Converts a measure value into a clean price.
///
/// [`WorkoutMode::OptimalExercise`] is rejected for option-bearing
/// instruments here: without a price there is nothing to resolve the
/// exercise decision against.
pub fn price_from_measure(
    ctx: &PricingContext<'_>,
    kind: MeasureKind,
    value: f64,
    mode: WorkoutMode,
) -> AnalyticsResult<f64> {
    ensure_finite(kind, value)?;
    if kind == MeasureKind::Price {
        return Ok(value);
    }
    let workout = match mode {
        WorkoutMode::Maturity => Workout::at_maturity(ctx.bond()),
        WorkoutMode::Explicit(workout) => workout,
        WorkoutMode::OptimalExercise => {
            if ctx.bond().has_embedded_options() {
                return Err(AnalyticsError::unsupported(
                    "optimal exercise cannot be resolved from a non-price quote on an \
                     option-bearing instrument",
                ));
            }
            Workout::at_maturity(ctx.bond())
        }
    };
    (conversion(kind)?.to_price)(ctx, value, workout)
}

/// Converts between any two measures through the price pivot.
pub fn convert(
    ctx: &PricingContext<'_>,
    from: MeasureKind,
    to: MeasureKind,
    value: f64,
    mode: WorkoutMode,
) -> AnalyticsResult<f64> {
    if from == to {
        ensure_finite(from, value)?;
        return Ok(value);
    }
    let price = price_from_measure(ctx, from, value, mode)?;
    measure_from_price(ctx, to, price, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use oasis_bonds::{Bond, BondBuilder, ExerciseEntry, ExerciseKind, ExerciseSchedule};
    use oasis_core::types::Date;
    use oasis_curves::{CurveSet, FlatCurve};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn bullet() -> Bond {
        BondBuilder::new()
            .coupon_rate(0.05)
            .issue_date(date(2025, 6, 15))
            .maturity(date(2030, 6, 15))
            .settlement_days(0)
            .build()
            .unwrap()
    }

    fn callable() -> Bond {
        BondBuilder::new()
            .coupon_rate(0.05)
            .issue_date(date(2025, 6, 15))
            .maturity(date(2030, 6, 15))
            .settlement_days(0)
            .calls(
                ExerciseSchedule::new(ExerciseKind::Call)
                    .with_entry(ExerciseEntry::new(date(2027, 6, 15), 1.0)),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_table_registers_every_measure() {
        assert_eq!(CONVERSIONS.len(), MeasureKind::ALL.len());
        for kind in MeasureKind::ALL {
            assert!(CONVERSIONS.contains_key(&kind), "{kind} missing");
        }
    }

    #[test]
    fn test_names_round_trip() {
        for kind in MeasureKind::ALL {
            assert_eq!(MeasureKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(MeasureKind::from_name("zspread"), Some(MeasureKind::ZSpread));
        assert_eq!(MeasureKind::from_name("pecs"), Some(MeasureKind::Pecs));
        assert_eq!(MeasureKind::from_name("cds"), None);
    }

    #[test]
    fn test_price_is_the_identity() {
        let bond = bullet();
        let curve = FlatCurve::new(date(2025, 6, 15), 0.04).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2026, 1, 8));
        let out =
            measure_from_price(&ctx, MeasureKind::Price, 98.5, WorkoutMode::Maturity).unwrap();
        assert_eq!(out, 98.5);
        let out =
            price_from_measure(&ctx, MeasureKind::Price, 98.5, WorkoutMode::Maturity).unwrap();
        assert_eq!(out, 98.5);
    }

    #[test]
    fn test_same_measure_conversion_is_identity() {
        let bond = bullet();
        let curve = FlatCurve::new(date(2025, 6, 15), 0.04).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2026, 1, 8));
        let out = convert(
            &ctx,
            MeasureKind::Yield,
            MeasureKind::Yield,
            0.052,
            WorkoutMode::Maturity,
        )
        .unwrap();
        assert_eq!(out, 0.052);
    }

    #[test]
    fn test_cross_measure_pivots_through_price() {
        let bond = bullet();
        let curve = FlatCurve::new(date(2025, 6, 15), 0.04).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2026, 1, 8));
        let via_convert = convert(
            &ctx,
            MeasureKind::Yield,
            MeasureKind::ZSpread,
            0.052,
            WorkoutMode::Maturity,
        )
        .unwrap();
        let price =
            price_from_measure(&ctx, MeasureKind::Yield, 0.052, WorkoutMode::Maturity).unwrap();
        let direct =
            measure_from_price(&ctx, MeasureKind::ZSpread, price, WorkoutMode::Maturity).unwrap();
        assert_relative_eq!(via_convert, direct, epsilon = 1e-12);
    }

    #[test]
    fn test_yield_spread_quotes_the_bond_basis() {
        let bond = bullet();
        let curve = FlatCurve::new(date(2025, 6, 15), 0.04).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2026, 1, 8));
        let basis =
            measure_from_price(&ctx, MeasureKind::BondBasis, 97.0, WorkoutMode::Maturity).unwrap();
        let spread = measure_from_price(&ctx, MeasureKind::YieldSpread, 97.0, WorkoutMode::Maturity)
            .unwrap();
        assert_relative_eq!(basis, spread, epsilon = 1e-12);
    }

    #[test]
    fn test_optimal_exercise_from_quote_rejected_on_callable() {
        let bond = callable();
        let curve = FlatCurve::new(date(2025, 6, 15), 0.04).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2026, 1, 8));
        let err = price_from_measure(
            &ctx,
            MeasureKind::Yield,
            0.05,
            WorkoutMode::OptimalExercise,
        )
        .unwrap_err();
        assert!(matches!(err, AnalyticsError::UnsupportedCombination { .. }));
    }

    #[test]
    fn test_optimal_exercise_on_option_free_means_maturity() {
        let bond = bullet();
        let curve = FlatCurve::new(date(2025, 6, 15), 0.04).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2026, 1, 8));
        let optimal = price_from_measure(
            &ctx,
            MeasureKind::Yield,
            0.05,
            WorkoutMode::OptimalExercise,
        )
        .unwrap();
        let maturity =
            price_from_measure(&ctx, MeasureKind::Yield, 0.05, WorkoutMode::Maturity).unwrap();
        assert_relative_eq!(optimal, maturity, epsilon = 1e-12);
    }

    #[test]
    fn test_optimal_exercise_yield_uses_the_resolved_workout() {
        let bond = callable();
        let curve = FlatCurve::new(date(2025, 6, 15), 0.04).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2026, 1, 8));
        let resolved = workout::resolve_workout(&ctx, 108.0).unwrap();
        let quoted =
            measure_from_price(&ctx, MeasureKind::Yield, 108.0, WorkoutMode::OptimalExercise)
                .unwrap();
        assert_relative_eq!(quoted, resolved.yield_value, epsilon = 1e-12);
    }

    #[test]
    fn test_non_finite_quote_rejected() {
        let bond = bullet();
        let curve = FlatCurve::new(date(2025, 6, 15), 0.04).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2026, 1, 8));
        let err = price_from_measure(
            &ctx,
            MeasureKind::Yield,
            f64::NAN,
            WorkoutMode::Maturity,
        )
        .unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput { .. }));
        let err =
            measure_from_price(&ctx, MeasureKind::Yield, f64::NAN, WorkoutMode::Maturity)
                .unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidInput { .. }));
    }
}
