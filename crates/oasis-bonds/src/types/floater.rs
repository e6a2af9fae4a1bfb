//! Coupon basis: fixed rate or floating rate over a reference index.

use serde::{Deserialize, Serialize};

/// Floating rate configuration.
///
/// The coupon for each period is the index rate projected over the
/// period (or the known fixing for the current period) plus the quoted
/// margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloaterSetting {
    /// Tenor of the reference index, in months.
    pub index_tenor_months: i32,
    /// Quoted margin over the index, as a decimal (0.0050 = 50bp).
    pub quoted_margin: f64,
    /// Known fixing for the period containing settlement, as a decimal.
    /// When absent the current period is projected like future ones.
    pub current_fixing: Option<f64>,
}

impl FloaterSetting {
    /// Creates a floater setting.
    #[must_use]
    pub fn new(index_tenor_months: i32, quoted_margin: f64) -> Self {
        Self {
            index_tenor_months,
            quoted_margin,
            current_fixing: None,
        }
    }

    /// Sets the known fixing for the current period.
    #[must_use]
    pub fn with_current_fixing(mut self, fixing: f64) -> Self {
        self.current_fixing = Some(fixing);
        self
    }
}

/// How an instrument's coupon is determined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CouponBasis {
    /// Fixed annual rate, as a decimal (0.05 = 5%).
    Fixed {
        /// Annual coupon rate.
        rate: f64,
    },
    /// Floating rate over a reference index.
    Floating(FloaterSetting),
}

impl CouponBasis {
    /// Creates a fixed coupon basis.
    #[must_use]
    pub fn fixed(rate: f64) -> Self {
        Self::Fixed { rate }
    }

    /// Returns true for floating rate instruments.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        matches!(self, Self::Floating(_))
    }

    /// Returns the floater setting, if floating.
    #[must_use]
    pub fn floater(&self) -> Option<&FloaterSetting> {
        match self {
            Self::Fixed { .. } => None,
            Self::Floating(setting) => Some(setting),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_basis() {
        let basis = CouponBasis::fixed(0.05);
        assert!(!basis.is_floating());
        assert!(basis.floater().is_none());
    }

    #[test]
    fn test_floating_basis() {
        let basis = CouponBasis::Floating(
            FloaterSetting::new(3, 0.0050).with_current_fixing(0.043),
        );
        assert!(basis.is_floating());
        let setting = basis.floater().unwrap();
        assert_eq!(setting.index_tenor_months, 3);
        assert_eq!(setting.current_fixing, Some(0.043));
    }

    #[test]
    fn test_serde_round_trip() {
        let basis = CouponBasis::Floating(FloaterSetting::new(6, 0.0075));
        let json = serde_json::to_string(&basis).unwrap();
        let back: CouponBasis = serde_json::from_str(&json).unwrap();
        assert_eq!(basis, back);
    }
}
