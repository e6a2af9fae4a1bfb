//! Credit assumptions attached to a defaultable instrument.

use serde::{Deserialize, Serialize};

/// Where the recovery rate for default-loss integration comes from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum RecoveryAssumption {
    /// Use the credit curve's recovery at the default date.
    #[default]
    CurveImplied,
    /// Fixed override, as a fraction of face in [0, 1).
    Fixed(f64),
}

/// Credit configuration for the cashflow engine.
///
/// Read-only input: controls how default losses and recoveries are
/// integrated when a credit curve is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditSetting {
    /// Recovery assumption.
    pub recovery: RecoveryAssumption,
    /// Days between a default and the recovery payment.
    pub default_pay_lag_days: u32,
    /// Whether accrued coupon to the default date is paid on default.
    pub accrue_on_default: bool,
}

impl Default for CreditSetting {
    fn default() -> Self {
        Self {
            recovery: RecoveryAssumption::CurveImplied,
            default_pay_lag_days: 0,
            accrue_on_default: true,
        }
    }
}

impl CreditSetting {
    /// Creates the default setting: curve-implied recovery, no payment
    /// lag, accrued paid on default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the recovery rate.
    #[must_use]
    pub fn with_fixed_recovery(mut self, recovery: f64) -> Self {
        self.recovery = RecoveryAssumption::Fixed(recovery);
        self
    }

    /// Sets the default payment lag in days.
    #[must_use]
    pub fn with_default_pay_lag_days(mut self, days: u32) -> Self {
        self.default_pay_lag_days = days;
        self
    }

    /// Sets whether accrued coupon is paid on default.
    #[must_use]
    pub fn with_accrue_on_default(mut self, accrue: bool) -> Self {
        self.accrue_on_default = accrue;
        self
    }
}
