//! Workout scenarios and optimal-exercise resolution.
//!
//! A workout is the redemption scenario a valuation runs to: final maturity,
//! a call, or a put. [`resolve_workout`] picks the scenario an economically
//! rational holder should assume given a market price.

mod resolver;

pub use resolver::{exercise_yield_from_price, resolve_workout};

use oasis_bonds::Bond;
use oasis_core::types::Date;
use serde::{Deserialize, Serialize};

/// A redemption scenario: when the instrument terminates and at what factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Redemption date.
    pub date: Date,
    /// Redemption price per unit of outstanding notional (1.0 = par).
    pub factor: f64,
}

impl Workout {
    /// Creates a workout scenario.
    #[must_use]
    pub fn new(date: Date, factor: f64) -> Self {
        Self { date, factor }
    }

    /// The scenario where the instrument runs to final maturity at par.
    #[must_use]
    pub fn at_maturity(bond: &Bond) -> Self {
        Self {
            date: bond.maturity(),
            factor: 1.0,
        }
    }
}

/// Which schedule produced a resolved workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutType {
    /// Held to final maturity.
    Maturity,
    /// Redeemed on an issuer call date.
    Call,
    /// Redeemed on a holder put date.
    Put,
}

/// A resolved workout together with the yield that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutInfo {
    /// The winning redemption scenario.
    pub workout: Workout,
    /// Which schedule it came from.
    pub workout_type: WorkoutType,
    /// Yield to the winning workout at the quoted price.
    pub yield_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use oasis_bonds::BondBuilder;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_at_maturity_redeems_at_par() {
        let bond = BondBuilder::new()
            .coupon_rate(0.04)
            .issue_date(date(2020, 3, 1))
            .maturity(date(2030, 3, 1))
            .build()
            .unwrap();
        let workout = Workout::at_maturity(&bond);
        assert_eq!(workout.date, date(2030, 3, 1));
        assert_eq!(workout.factor, 1.0);
    }

    #[test]
    fn test_workout_serializes() {
        let workout = Workout::new(date(2027, 9, 15), 1.02);
        let json = serde_json::to_string(&workout).unwrap();
        let back: Workout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, workout);
    }
}
