//! Actual-numerator day count conventions.

use super::DayCount;
use crate::types::Date;

/// Actual/360 day count convention.
///
/// Actual calendar days over a 360-day year. Standard for money market
/// instruments and most floating-rate note accruals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "ACT/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 360.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/365 Fixed day count convention.
///
/// Actual calendar days over a fixed 365-day year regardless of leap
/// years. Used for UK Gilts and AUD/NZD markets, and as the year-fraction
/// basis for curve time axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / 365.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

/// Actual/Actual ISDA day count convention.
///
/// Splits the period at year boundaries; days in a leap year divide by
/// 366, days in a common year by 365.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        if start == end {
            return 0.0;
        }
        if end < start {
            return -self.year_fraction(end, start);
        }

        if start.year() == end.year() {
            return start.days_between(&end) as f64 / f64::from(start.days_in_year());
        }

        // Split at each Jan 1 between the two dates.
        let start_year_end = Date::from_ymd(start.year() + 1, 1, 1)
            .expect("first of year should always be valid");
        let end_year_start =
            Date::from_ymd(end.year(), 1, 1).expect("first of year should always be valid");

        let head = start.days_between(&start_year_end) as f64 / f64::from(start.days_in_year());
        let whole_years = f64::from(end.year() - start.year() - 1);
        let tail = end_year_start.days_between(&end) as f64 / f64::from(end.days_in_year());

        head + whole_years + tail
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_act360() {
        let start = date(2025, 1, 1);
        let end = date(2025, 7, 1);
        assert_eq!(Act360.day_count(start, end), 181);
        assert_relative_eq!(Act360.year_fraction(start, end), 181.0 / 360.0);
    }

    #[test]
    fn test_act365_fixed() {
        let start = date(2025, 1, 1);
        let end = date(2026, 1, 1);
        assert_relative_eq!(Act365Fixed.year_fraction(start, end), 1.0);
    }

    #[test]
    fn test_actact_same_year() {
        let start = date(2025, 1, 1);
        let end = date(2025, 7, 1);
        assert_relative_eq!(ActActIsda.year_fraction(start, end), 181.0 / 365.0);
    }

    #[test]
    fn test_actact_spanning_leap_year() {
        // 2023-07-01 to 2024-07-01 crosses into leap year 2024
        let start = date(2023, 7, 1);
        let end = date(2024, 7, 1);
        let expected = 184.0 / 365.0 + 182.0 / 366.0;
        assert_relative_eq!(ActActIsda.year_fraction(start, end), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_actact_multi_year() {
        let start = date(2023, 1, 1);
        let end = date(2026, 1, 1);
        assert_relative_eq!(ActActIsda.year_fraction(start, end), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_fraction() {
        let start = date(2025, 7, 1);
        let end = date(2025, 1, 1);
        assert!(ActActIsda.year_fraction(start, end) < 0.0);
        assert!(Act360.year_fraction(start, end) < 0.0);
    }
}
