//! Present-value aggregates produced by a single pricing pass.
//!
//! All price-like figures are quoted per 100 of current face (outstanding
//! notional at settlement) and are normalized so the settlement date carries
//! a discount factor of one.

use crate::workout::Workout;

/// Credit-dependent aggregates, populated when a credit curve backs the run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CreditMeasures {
    /// Survival-weighted coupon present value.
    pub coupon_pv: f64,
    /// Survival-weighted amortization principal present value.
    pub principal_pv: f64,
    /// Survival-weighted annuity: PV of a 100% running coupon to workout.
    pub annuity: f64,
    /// PV of par losses on default, net of recovery.
    pub default_loss_pv: f64,
    /// PV of coupon accrued but unpaid at default.
    pub accrued_on_default_pv: f64,
    /// PV of recovery proceeds on default.
    pub recovery_pv: f64,
    /// Expected recovery proceeds, undiscounted.
    pub expected_recovery: f64,
    /// Par loss if the issuer defaulted at settlement: 100 less recovery.
    pub default_exposure: f64,
}

/// Coupon-stream aggregates over the periods between settlement and workout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BondCouponMeasures {
    /// Riskless coupon present value.
    pub coupon_pv: f64,
    /// Riskless amortization principal present value.
    pub principal_pv: f64,
    /// Riskless annuity: PV of a 100% running coupon to workout.
    pub annuity: f64,
    /// Interest accrued from the period start through settlement.
    pub accrued: f64,
    /// Credit-dependent aggregates; `None` when no credit curve is in play.
    pub credit: Option<CreditMeasures>,
}

/// Full valuation of an instrument to a single workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondWorkoutMeasures {
    /// Coupon-stream aggregates.
    pub coupons: BondCouponMeasures,
    /// Riskless redemption present value at the workout.
    pub redemption_pv: f64,
    /// Survival-weighted redemption present value.
    pub risky_redemption_pv: Option<f64>,
    /// Riskless price including accrued.
    pub dirty_price: f64,
    /// Riskless price excluding accrued.
    pub clean_price: f64,
    /// Credit-adjusted price including accrued.
    pub risky_dirty_price: Option<f64>,
    /// Credit-adjusted price excluding accrued.
    pub risky_clean_price: Option<f64>,
    /// Mark-to-market loss if the issuer defaulted at settlement.
    pub loss_on_instant_default: Option<f64>,
    /// The workout the valuation ran to.
    pub workout: Workout,
}

impl BondWorkoutMeasures {
    /// The model clean price: credit-adjusted when a credit curve was
    /// supplied, riskless otherwise.
    #[must_use]
    pub fn model_clean_price(&self) -> f64 {
        self.risky_clean_price.unwrap_or(self.clean_price)
    }

    /// The model dirty price on the same basis as [`Self::model_clean_price`].
    #[must_use]
    pub fn model_dirty_price(&self) -> f64 {
        self.risky_dirty_price.unwrap_or(self.dirty_price)
    }
}
