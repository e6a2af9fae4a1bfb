//! Par-par asset swap spread.
//!
//! The buyer funds the bond at par and swaps its coupons; the spread is the
//! running payment that makes the package fair, so it is the par shortfall
//! of the dirty price spread over the funding-curve annuity. Closed form in
//! both directions.

use crate::context::PricingContext;
use crate::engine::{self, DiscountBasis};
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::workout::Workout;

fn annuity_and_accrued(
    ctx: &PricingContext<'_>,
    workout: Workout,
) -> AnalyticsResult<(f64, f64)> {
    let result = engine::workout_measures(
        ctx,
        DiscountBasis::Curve(ctx.curves().discount()),
        workout,
    )?;
    let annuity = result.coupons.annuity;
    if annuity <= 0.0 {
        return Err(AnalyticsError::unsupported(
            "asset swap spread is undefined with no coupon annuity to the workout",
        ));
    }
    Ok((annuity, result.coupons.accrued))
}

pub(crate) fn asw_from_price(
    ctx: &PricingContext<'_>,
    price: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    let (annuity, accrued) = annuity_and_accrued(ctx, workout)?;
    let dirty = price + accrued;
    Ok((100.0 * workout.factor - dirty) / annuity)
}

pub(crate) fn price_from_asw(
    ctx: &PricingContext<'_>,
    value: f64,
    workout: Workout,
) -> AnalyticsResult<f64> {
    let (annuity, accrued) = annuity_and_accrued(ctx, workout)?;
    let dirty = 100.0 * workout.factor - value * annuity;
    Ok(dirty - accrued)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use oasis_bonds::{Bond, BondBuilder};
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

    #[test]
    fn test_par_dirty_price_has_zero_spread() {
        let bond = bullet();
        let curve = FlatCurve::new(date(2025, 6, 15), 0.04).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2025, 6, 15));
        let asw = asw_from_price(&ctx, 100.0, Workout::at_maturity(&bond)).unwrap();
        assert_relative_eq!(asw, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_discount_price_widens_the_spread() {
        let bond = bullet();
        let curve = FlatCurve::new(date(2025, 6, 15), 0.04).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2026, 1, 8));
        let workout = Workout::at_maturity(&bond);
        let cheap = asw_from_price(&ctx, 95.0, workout).unwrap();
        let rich = asw_from_price(&ctx, 101.0, workout).unwrap();
        assert!(cheap > 0.0);
        assert!(cheap > rich);
    }

    #[test]
    fn test_round_trip_is_exact() {
        let bond = bullet();
        let curve = FlatCurve::new(date(2025, 6, 15), 0.04).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2026, 1, 8));
        let workout = Workout::at_maturity(&bond);
        let price = price_from_asw(&ctx, 0.0125, workout).unwrap();
        let asw = asw_from_price(&ctx, price, workout).unwrap();
        assert_relative_eq!(asw, 0.0125, epsilon = 1e-12);
    }

    #[test]
    fn test_same_day_workout_has_no_annuity() {
        let bond = bullet();
        let curve = FlatCurve::new(date(2025, 6, 15), 0.04).unwrap();
        let ctx = PricingContext::new(&bond, CurveSet::new(&curve), date(2025, 6, 15));
        let err =
            asw_from_price(&ctx, 100.0, Workout::new(date(2025, 6, 15), 1.0)).unwrap_err();
        assert!(matches!(err, AnalyticsError::UnsupportedCombination { .. }));
    }
}
