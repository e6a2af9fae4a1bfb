//! Shared instrument types: coupon basis, exercise schedules,
//! amortization and credit settings.

pub mod amortization;
pub mod credit;
pub mod floater;
pub mod options;

pub use amortization::{AmortizationAttribution, NotionalSetting, NotionalStep};
pub use credit::{CreditSetting, RecoveryAssumption};
pub use floater::{CouponBasis, FloaterSetting};
pub use options::{ExerciseEntry, ExerciseKind, ExerciseSchedule};
