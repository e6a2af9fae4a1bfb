//! Day count conventions for fixed income calculations.
//!
//! Day count conventions determine how accrued interest and discount
//! exponents are calculated by specifying how to count days between two
//! dates and the year basis.
//!
//! # Supported Conventions
//!
//! - [`Act360`]: Actual/360 - money market convention
//! - [`Act365Fixed`]: Actual/365 Fixed - UK Gilts, AUD/NZD
//! - [`ActActIsda`]: Actual/Actual ISDA - year-based split
//! - [`Thirty360US`]: 30/360 US - US corporate bonds (with Feb EOM rules)
//! - [`Thirty360E`]: 30E/360 - Eurobond convention
//!
//! # Usage
//!
//! ```rust
//! use oasis_core::daycounts::{DayCount, Thirty360US};
//! use oasis_core::types::Date;
//!
//! let dc = Thirty360US;
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 180);
//! assert!((dc.year_fraction(start, end) - 0.5).abs() < 1e-12);
//! ```

mod act;
mod thirty360;

pub use act::{Act360, Act365Fixed, ActActIsda};
pub use thirty360::{Thirty360E, Thirty360US};

use serde::{Deserialize, Serialize};

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations provide the year fraction calculation between two dates
/// according to specific market conventions.
///
/// - `year_fraction` returns the fraction of a year between dates
/// - `day_count` returns the number of days according to the convention
/// - Implementations must be thread-safe (`Send + Sync`)
pub trait DayCount: Send + Sync {
    /// Returns the conventional name (e.g., "ACT/360", "30/360 US").
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Can be negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    ///
    /// For ACT conventions this is actual calendar days; the 30/360
    /// family uses the 30-day month assumption.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of the supported day count conventions.
///
/// Provides runtime convention selection without boxing; the enum itself
/// implements [`DayCount`] by dispatching to the concrete types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/360 - money market instruments, FRNs
    Act360,
    /// Actual/365 Fixed - UK Gilts, AUD/NZD markets
    Act365Fixed,
    /// Actual/Actual ISDA - year-based calculation
    ActActIsda,
    /// 30/360 US (Bond Basis) - US corporate, agency, municipal bonds
    #[default]
    Thirty360US,
    /// 30E/360 (Eurobond Basis) - Eurobonds, European corporates
    Thirty360E,
}

impl DayCount for DayCountConvention {
    fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => Act360.name(),
            DayCountConvention::Act365Fixed => Act365Fixed.name(),
            DayCountConvention::ActActIsda => ActActIsda.name(),
            DayCountConvention::Thirty360US => Thirty360US.name(),
            DayCountConvention::Thirty360E => Thirty360E.name(),
        }
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::Act360 => Act360.year_fraction(start, end),
            DayCountConvention::Act365Fixed => Act365Fixed.year_fraction(start, end),
            DayCountConvention::ActActIsda => ActActIsda.year_fraction(start, end),
            DayCountConvention::Thirty360US => Thirty360US.year_fraction(start, end),
            DayCountConvention::Thirty360E => Thirty360E.year_fraction(start, end),
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            DayCountConvention::Act360 => Act360.day_count(start, end),
            DayCountConvention::Act365Fixed => Act365Fixed.day_count(start, end),
            DayCountConvention::ActActIsda => ActActIsda.day_count(start, end),
            DayCountConvention::Thirty360US => Thirty360US.day_count(start, end),
            DayCountConvention::Thirty360E => Thirty360E.day_count(start, end),
        }
    }
}
