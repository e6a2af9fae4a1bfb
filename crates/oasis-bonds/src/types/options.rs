//! Embedded exercise schedules for callable and putable bonds.
//!
//! An [`ExerciseSchedule`] holds one side of an instrument's optionality:
//! discrete exercise dates with redemption factors, plus the notice period
//! the holder or issuer must give before exercising. A bond may carry two
//! independent schedules, one for calls and one for puts.

use oasis_core::Date;
use serde::{Deserialize, Serialize};

/// Side of an embedded exercise option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseKind {
    /// Issuer redemption right.
    Call,
    /// Holder redemption right.
    Put,
}

/// A single exercise opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Exercise date.
    pub date: Date,
    /// Redemption factor of par (1.0 = par, 1.02 = 102%).
    pub factor: f64,
}

impl ExerciseEntry {
    /// Creates a new exercise entry.
    #[must_use]
    pub fn new(date: Date, factor: f64) -> Self {
        Self { date, factor }
    }
}

/// Exercise schedule for one side of an instrument's optionality.
///
/// # Example
///
/// ```
/// use oasis_bonds::types::{ExerciseEntry, ExerciseKind, ExerciseSchedule};
/// use oasis_core::Date;
///
/// let schedule = ExerciseSchedule::new(ExerciseKind::Call)
///     .with_notice_days(30)
///     .with_entry(ExerciseEntry::new(Date::from_ymd(2027, 1, 15).unwrap(), 1.02))
///     .with_entry(ExerciseEntry::new(Date::from_ymd(2028, 1, 15).unwrap(), 1.01));
///
/// assert_eq!(schedule.first_date(), Some(Date::from_ymd(2027, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSchedule {
    kind: ExerciseKind,
    entries: Vec<ExerciseEntry>,
    notice_days: u32,
}

impl ExerciseSchedule {
    /// Creates an empty schedule for the given side.
    #[must_use]
    pub fn new(kind: ExerciseKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            notice_days: 0,
        }
    }

    /// Adds an exercise entry, keeping entries sorted by date.
    #[must_use]
    pub fn with_entry(mut self, entry: ExerciseEntry) -> Self {
        self.entries.push(entry);
        self.entries.sort_by_key(|e| e.date);
        self
    }

    /// Sets the notice period in days.
    #[must_use]
    pub fn with_notice_days(mut self, days: u32) -> Self {
        self.notice_days = days;
        self
    }

    /// Returns the option side.
    #[must_use]
    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    /// Returns the notice period in days.
    #[must_use]
    pub fn notice_days(&self) -> u32 {
        self.notice_days
    }

    /// Returns the entries, sorted by date.
    #[must_use]
    pub fn entries(&self) -> &[ExerciseEntry] {
        &self.entries
    }

    /// Returns true if the schedule has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first exercise date.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.entries.first().map(|e| e.date)
    }

    /// Returns the entries eligible for exercise as seen from a valuation
    /// date.
    ///
    /// An entry is eligible if its date, allowing a `snip_days` lookback,
    /// is at least the schedule's notice period ahead of the valuation
    /// date: `date + snip_days >= valuation + notice_days`.
    pub fn eligible_entries(
        &self,
        valuation: Date,
        snip_days: u32,
    ) -> impl Iterator<Item = &ExerciseEntry> + '_ {
        let threshold = valuation.add_days(i64::from(self.notice_days) - i64::from(snip_days));
        self.entries.iter().filter(move |e| e.date >= threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn call_schedule(notice_days: u32) -> ExerciseSchedule {
        ExerciseSchedule::new(ExerciseKind::Call)
            .with_notice_days(notice_days)
            .with_entry(ExerciseEntry::new(date(2027, 1, 15), 1.02))
            .with_entry(ExerciseEntry::new(date(2028, 1, 15), 1.01))
            .with_entry(ExerciseEntry::new(date(2029, 1, 15), 1.00))
    }

    #[test]
    fn test_entries_sorted_by_date() {
        let schedule = ExerciseSchedule::new(ExerciseKind::Put)
            .with_entry(ExerciseEntry::new(date(2029, 1, 15), 1.00))
            .with_entry(ExerciseEntry::new(date(2027, 1, 15), 1.00));
        assert_eq!(schedule.first_date(), Some(date(2027, 1, 15)));
    }

    #[test]
    fn test_all_future_entries_eligible() {
        let schedule = call_schedule(0);
        let eligible: Vec<_> = schedule.eligible_entries(date(2026, 6, 1), 1).collect();
        assert_eq!(eligible.len(), 3);
    }

    #[test]
    fn test_past_entries_excluded() {
        let schedule = call_schedule(0);
        let eligible: Vec<_> = schedule.eligible_entries(date(2027, 6, 1), 1).collect();
        assert_eq!(eligible.len(), 2);
        assert_eq!(eligible[0].date, date(2028, 1, 15));
    }

    #[test]
    fn test_snip_lookback_keeps_just_passed_date() {
        let schedule = call_schedule(0);
        // Valuation one day after the first exercise date
        let eligible: Vec<_> = schedule.eligible_entries(date(2027, 1, 16), 1).collect();
        assert!(eligible.iter().any(|e| e.date == date(2027, 1, 15)));

        // Two days after, the lookback no longer covers it
        let eligible: Vec<_> = schedule.eligible_entries(date(2027, 1, 17), 1).collect();
        assert!(!eligible.iter().any(|e| e.date == date(2027, 1, 15)));
    }

    #[test]
    fn test_notice_period_excludes_near_dates() {
        let schedule = call_schedule(30);
        // 2027-01-15 is only 14 days out from 2027-01-01
        let eligible: Vec<_> = schedule.eligible_entries(date(2027, 1, 1), 1).collect();
        assert_eq!(eligible.len(), 2);
        assert_eq!(eligible[0].date, date(2028, 1, 15));
    }

    #[test]
    fn test_serde_round_trip() {
        let schedule = call_schedule(30);
        let json = serde_json::to_string(&schedule).unwrap();
        let back: ExerciseSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule, back);
    }
}
