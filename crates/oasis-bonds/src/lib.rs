//! # Oasis Bonds
//!
//! Bond instrument definitions for the Oasis fixed income analytics
//! library.
//!
//! This crate models the instrument side of pricing: coupon schedules,
//! embedded call/put schedules, amortization and credit settings, and
//! the [`Bond`] aggregate that ties them together.
//!
//! - **Schedules**: backward-rolled coupon periods with stub handling
//!   and loss-quadrature decomposition
//! - **Types**: coupon basis (fixed/floating), exercise schedules,
//!   notional and credit settings
//! - **Instrument**: the validated [`Bond`] with its builder
//!
//! ## Example
//!
//! ```rust
//! use oasis_bonds::prelude::*;
//! use oasis_core::prelude::*;
//!
//! let bond = Bond::builder()
//!     .coupon_rate(0.05)
//!     .issue_date(Date::from_ymd(2025, 1, 15).unwrap())
//!     .maturity(Date::from_ymd(2030, 1, 15).unwrap())
//!     .frequency(Frequency::SemiAnnual)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(bond.schedule().len(), 10);
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

pub mod error;
pub mod instrument;
pub mod schedule;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BondError, BondResult};
    pub use crate::instrument::{Bond, BondBuilder};
    pub use crate::schedule::{CouponPeriod, CouponSchedule, QuadratureSlice};
    pub use crate::types::{
        AmortizationAttribution, CouponBasis, CreditSetting, ExerciseEntry, ExerciseKind,
        ExerciseSchedule, FloaterSetting, NotionalSetting, NotionalStep, RecoveryAssumption,
    };
}

// Re-export commonly used types at crate root
pub use error::{BondError, BondResult};
pub use instrument::{Bond, BondBuilder};
pub use schedule::{CouponPeriod, CouponSchedule, QuadratureSlice};
pub use types::{
    AmortizationAttribution, CouponBasis, CreditSetting, ExerciseEntry, ExerciseKind,
    ExerciseSchedule, FloaterSetting, NotionalSetting, NotionalStep, RecoveryAssumption,
};
