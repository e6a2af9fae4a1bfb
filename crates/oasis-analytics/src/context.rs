//! Shared request state for pricing and conversion calls.
//!
//! A [`PricingContext`] bundles the instrument, the curve set, and the
//! valuation conventions so conversion routines take one argument instead
//! of six. Contexts are cheap to clone and borrow everything they hold.

use oasis_bonds::Bond;
use oasis_core::types::Date;
use oasis_curves::{CreditCurve, Curve, CurveSet};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Day-count basis used when discounting at a flat yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YieldDcf {
    /// Cumulative coupon-accrual fractions from settlement, compounded per
    /// coupon period. The street convention for fixed-coupon bonds.
    #[default]
    CouponAccrual,
    /// Act/Act ISDA year fractions from settlement to each pay date.
    ActActYearFraction,
}

/// Everything a conversion needs to price one instrument on one date.
///
/// Settlement defaults to the instrument's settlement lag applied to the
/// valuation date; override it with [`PricingContext::with_settlement`] for
/// non-standard settles.
#[derive(Debug, Clone)]
pub struct PricingContext<'a> {
    bond: &'a Bond,
    curves: CurveSet<'a>,
    valuation: Date,
    settlement: Date,
    snip_days: u32,
    loss_step_days: i64,
    yield_dcf: YieldDcf,
}

impl<'a> PricingContext<'a> {
    /// Creates a context for pricing `bond` on `valuation`.
    #[must_use]
    pub fn new(bond: &'a Bond, curves: CurveSet<'a>, valuation: Date) -> Self {
        Self {
            bond,
            curves,
            valuation,
            settlement: bond.settlement_date(valuation),
            snip_days: 1,
            loss_step_days: 1,
            yield_dcf: YieldDcf::default(),
        }
    }

    /// Overrides the derived settlement date.
    #[must_use]
    pub fn with_settlement(mut self, settlement: Date) -> Self {
        self.settlement = settlement;
        self
    }

    /// Overrides the exercise lookback tolerance in days.
    #[must_use]
    pub fn with_snip_days(mut self, snip_days: u32) -> Self {
        self.snip_days = snip_days;
        self
    }

    /// Overrides the default-loss integration step in days.
    #[must_use]
    pub fn with_loss_step_days(mut self, loss_step_days: i64) -> Self {
        self.loss_step_days = loss_step_days;
        self
    }

    /// Overrides the yield discounting day-count basis.
    #[must_use]
    pub fn with_yield_dcf(mut self, yield_dcf: YieldDcf) -> Self {
        self.yield_dcf = yield_dcf;
        self
    }

    /// Rebinds the context to a different curve set.
    ///
    /// Used by the credit measures, which price on an overlaid hazard curve
    /// that lives shorter than the original set.
    #[must_use]
    pub fn with_curves<'b>(&self, curves: CurveSet<'b>) -> PricingContext<'b>
    where
        'a: 'b,
    {
        PricingContext {
            bond: self.bond,
            curves,
            valuation: self.valuation,
            settlement: self.settlement,
            snip_days: self.snip_days,
            loss_step_days: self.loss_step_days,
            yield_dcf: self.yield_dcf,
        }
    }

    /// The instrument being priced.
    #[must_use]
    pub fn bond(&self) -> &'a Bond {
        self.bond
    }

    /// The curve set backing the request.
    #[must_use]
    pub fn curves(&self) -> &CurveSet<'a> {
        &self.curves
    }

    /// The valuation date.
    #[must_use]
    pub fn valuation(&self) -> Date {
        self.valuation
    }

    /// The cash settlement date.
    #[must_use]
    pub fn settlement(&self) -> Date {
        self.settlement
    }

    /// The government benchmark curve.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::MissingCurve`] when the set has none.
    pub fn govvie(&self) -> AnalyticsResult<&'a dyn Curve> {
        self.curves
            .govvie()
            .map_err(|_| AnalyticsError::missing_curve("govvie"))
    }

    /// The credit curve.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::MissingCurve`] when the set has none.
    pub fn credit(&self) -> AnalyticsResult<&'a dyn CreditCurve> {
        self.curves
            .credit()
            .map_err(|_| AnalyticsError::missing_curve("credit"))
    }

    /// Days an exercise date may lag the notice cutoff and still count.
    #[must_use]
    pub fn snip_days(&self) -> u32 {
        self.snip_days
    }

    /// Step width in days for the default-loss integration.
    #[must_use]
    pub fn loss_step_days(&self) -> i64 {
        self.loss_step_days
    }

    /// Day-count basis for yield discounting.
    #[must_use]
    pub fn yield_dcf(&self) -> YieldDcf {
        self.yield_dcf
    }
}
