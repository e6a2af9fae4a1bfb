//! Discounting bases for the pricing engine.
//!
//! A pricing pass discounts either on a curve (funding, govvie, or a shifted
//! overlay of one) or at a flat yield compounded per coupon period. The
//! engine loop is identical in both cases; only the discount factor source
//! differs.

use oasis_core::daycounts::{ActActIsda, DayCount};
use oasis_core::types::{Date, Frequency};
use oasis_curves::Curve;

use crate::context::YieldDcf;
use crate::error::AnalyticsResult;

/// The discount factor source for a pricing pass.
#[derive(Clone, Copy)]
pub enum DiscountBasis<'a> {
    /// Discount factors read off a curve, possibly a shifted overlay.
    Curve(&'a dyn Curve),
    /// A flat annualized yield compounded at the coupon frequency.
    Yield {
        /// Annualized yield, decimal.
        rate: f64,
    },
}

/// Stateful discount factor source consumed by one engine pass.
///
/// Yield discounting accumulates day-count fractions period by period, so
/// [`Discounter::advance`] must be called in pay-date order. Before the
/// first advance, [`Discounter::at_date`] reports the settlement factor.
pub(crate) enum Discounter<'a> {
    Curve(&'a dyn Curve),
    Yield(YieldAccumulator),
}

impl<'a> Discounter<'a> {
    pub(crate) fn new(
        basis: DiscountBasis<'a>,
        frequency: Frequency,
        dcf: YieldDcf,
        settlement: Date,
    ) -> Self {
        match basis {
            DiscountBasis::Curve(curve) => Self::Curve(curve),
            DiscountBasis::Yield { rate } => Self::Yield(YieldAccumulator {
                rate,
                periods_per_year: frequency.compounding_per_year(),
                dcf,
                settlement,
                cumulative: 0.0,
                last_df: 1.0,
            }),
        }
    }

    /// Discount factor at the next pay date.
    ///
    /// `remaining_dcf` is the period's accrual fraction net of any part
    /// already accrued at settlement; it only matters for yield discounting
    /// in coupon-accrual mode.
    pub(crate) fn advance(&mut self, remaining_dcf: f64, pay: Date) -> AnalyticsResult<f64> {
        match self {
            Self::Curve(curve) => Ok(curve.discount_factor_at(pay)?),
            Self::Yield(acc) => Ok(acc.advance(remaining_dcf, pay)),
        }
    }

    /// Discount factor at an arbitrary date.
    ///
    /// The yield path has no term structure to interrogate, so it reports
    /// the factor at the last advanced pay date. The engine only asks at
    /// settlement (before any advance) and at the workout date (which
    /// shares the final period's pay date), where the two coincide.
    pub(crate) fn at_date(&self, date: Date) -> AnalyticsResult<f64> {
        match self {
            Self::Curve(curve) => Ok(curve.discount_factor_at(date)?),
            Self::Yield(acc) => Ok(acc.last_df),
        }
    }
}

/// Flat-yield discount factor accumulator.
pub(crate) struct YieldAccumulator {
    rate: f64,
    periods_per_year: f64,
    dcf: YieldDcf,
    settlement: Date,
    cumulative: f64,
    last_df: f64,
}

impl YieldAccumulator {
    fn advance(&mut self, remaining_dcf: f64, pay: Date) -> f64 {
        let t = match self.dcf {
            YieldDcf::CouponAccrual => {
                self.cumulative += remaining_dcf;
                self.cumulative
            }
            YieldDcf::ActActYearFraction => {
                ActActIsda.year_fraction(self.settlement, pay).max(0.0)
            }
        };
        let base = 1.0 + self.rate / self.periods_per_year;
        self.last_df = base.powf(-self.periods_per_year * t);
        self.last_df
    }
}
