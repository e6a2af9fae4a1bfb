//! # Oasis Analytics
//!
//! Quote conversion and workout analytics for the Oasis fixed income
//! analytics library.
//!
//! This crate is where instruments, curves, and market quotes meet:
//!
//! - **Engine**: one cashflow pass valuing coupons, amortization,
//!   redemption, and default-contingent legs to a workout scenario
//! - **Workout**: optimal-exercise resolution across call/put schedules
//! - **Conversions**: thirteen quoting conventions pivoting through price
//!   via a static conversion table
//! - **Risk**: finite-difference durations, convexity, DV01, yield01
//! - **Bundles**: [`standard_measures`] and the quote-driven [`value`]
//!   entry point
//!
//! ## Example
//!
//! ```rust
//! use oasis_analytics::prelude::*;
//! use oasis_bonds::prelude::*;
//! use oasis_core::prelude::*;
//! use oasis_curves::prelude::*;
//!
//! let issue = Date::from_ymd(2025, 6, 15).unwrap();
//! let bond = Bond::builder()
//!     .coupon_rate(0.05)
//!     .issue_date(issue)
//!     .maturity(Date::from_ymd(2030, 6, 15).unwrap())
//!     .settlement_days(0)
//!     .build()
//!     .unwrap();
//! let curve = FlatCurve::new(issue, 0.03).unwrap();
//! let ctx = PricingContext::new(&bond, CurveSet::new(&curve), issue);
//!
//! // A par price resolves to the coupon as yield.
//! let yld = measure_from_price(&ctx, MeasureKind::Yield, 100.0, WorkoutMode::Maturity).unwrap();
//! assert!((yld - 0.05).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::cast_possible_truncation)]

pub mod calibrate;
pub mod context;
pub mod conversions;
pub mod engine;
pub mod error;
pub mod quotes;
pub mod risk;
pub mod standard;
pub mod valuation;
pub mod workout;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calibrate::RecurveMode;
    pub use crate::context::{PricingContext, YieldDcf};
    pub use crate::conversions::{
        convert, measure_from_price, price_from_measure, MeasureKind, WorkoutMode,
    };
    pub use crate::engine::{
        accrued_interest, price_from_yield, price_on_curve, workout_measures,
        BondCouponMeasures, BondWorkoutMeasures, CreditMeasures, CurveSelect, DiscountBasis,
    };
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::quotes::{MarketQuote, QuoteField, QuoteStore};
    pub use crate::risk::{risk_measures, RiskMeasures};
    pub use crate::standard::{standard_measures, StandardMeasures};
    pub use crate::valuation::{value, ValuationMode};
    pub use crate::workout::{
        exercise_yield_from_price, resolve_workout, Workout, WorkoutInfo, WorkoutType,
    };
}

// Re-export commonly used types at crate root
pub use context::PricingContext;
pub use conversions::{convert, measure_from_price, price_from_measure, MeasureKind, WorkoutMode};
pub use error::{AnalyticsError, AnalyticsResult};
pub use standard::{standard_measures, StandardMeasures};
pub use valuation::{value, ValuationMode};
pub use workout::{resolve_workout, Workout, WorkoutInfo, WorkoutType};
