//! Credit curve implementations.
//!
//! Survival curves driven by hazard rates. [`FlatHazardCurve`] holds a
//! single hazard rate, [`HazardCurve`] a piecewise-constant term structure,
//! and [`ShiftedHazardCurve`] overlays a running-spread bump on any base
//! curve.
//!
//! The quoted running spread and the hazard rate are linked through the
//! recovery assumption: `spread = hazard * (1 - recovery)`. Spread bumps
//! are therefore scaled by `1 / (1 - recovery)` when applied to hazards.

use oasis_core::Date;

use crate::error::{CurveError, CurveResult};
use crate::traits::CreditCurve;

fn validate_recovery(recovery: f64) -> CurveResult<()> {
    if !recovery.is_finite() || !(0.0..1.0).contains(&recovery) {
        return Err(CurveError::invalid_value(format!(
            "recovery rate {} must be in [0, 1)",
            recovery
        )));
    }
    Ok(())
}

/// A survival curve with a single constant hazard rate.
///
/// Survival follows `Q(t) = exp(-hazard * t)`. The hazard may be
/// negative while a spread solver probes below zero; survival is left
/// uncapped in that region.
#[derive(Debug, Clone, Copy)]
pub struct FlatHazardCurve {
    reference_date: Date,
    hazard: f64,
    recovery: f64,
}

impl FlatHazardCurve {
    /// Creates a flat hazard curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the hazard is not finite or the recovery is
    /// outside `[0, 1)`.
    pub fn new(reference_date: Date, hazard: f64, recovery: f64) -> CurveResult<Self> {
        if !hazard.is_finite() {
            return Err(CurveError::invalid_value("hazard rate must be finite"));
        }
        validate_recovery(recovery)?;
        Ok(Self {
            reference_date,
            hazard,
            recovery,
        })
    }

    /// Creates a flat hazard curve from a quoted running spread.
    ///
    /// The hazard is `spread / (1 - recovery)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the spread is not finite or the recovery is
    /// outside `[0, 1)`.
    pub fn from_spread(reference_date: Date, spread: f64, recovery: f64) -> CurveResult<Self> {
        validate_recovery(recovery)?;
        if !spread.is_finite() {
            return Err(CurveError::invalid_value("spread must be finite"));
        }
        Self::new(reference_date, spread / (1.0 - recovery), recovery)
    }

    /// Returns the constant hazard rate.
    #[must_use]
    pub fn hazard(&self) -> f64 {
        self.hazard
    }

    /// Returns the implied running spread, `hazard * (1 - recovery)`.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.hazard * (1.0 - self.recovery)
    }
}

impl CreditCurve for FlatHazardCurve {
    fn survival_probability(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }
        Ok((-self.hazard * t).exp())
    }

    fn recovery(&self, _t: f64) -> CurveResult<f64> {
        Ok(self.recovery)
    }

    fn reference_date(&self) -> Date {
        self.reference_date
    }
}

/// A survival curve with piecewise-constant hazard rates.
///
/// Each pillar's hazard applies from the previous pillar (or the
/// reference date) up to and including its own date. Beyond the last
/// pillar the final hazard extends flat.
#[derive(Debug, Clone)]
pub struct HazardCurve {
    reference_date: Date,
    recovery: f64,
    times: Vec<f64>,
    hazards: Vec<f64>,
    // Integrated hazard up to each pillar time.
    cumulative: Vec<f64>,
}

impl HazardCurve {
    fn integrated_hazard(&self, t: f64) -> f64 {
        let n = self.times.len();
        if t >= self.times[n - 1] {
            return self.cumulative[n - 1] + self.hazards[n - 1] * (t - self.times[n - 1]);
        }

        let idx = self.times.partition_point(|&x| x < t);
        let (base, start) = if idx == 0 {
            (0.0, 0.0)
        } else {
            (self.cumulative[idx - 1], self.times[idx - 1])
        };
        base + self.hazards[idx] * (t - start)
    }

    /// Returns the recovery assumption.
    #[must_use]
    pub fn recovery_rate(&self) -> f64 {
        self.recovery
    }
}

impl CreditCurve for HazardCurve {
    fn survival_probability(&self, t: f64) -> CurveResult<f64> {
        if t <= 0.0 {
            return Ok(1.0);
        }
        Ok((-self.integrated_hazard(t)).exp())
    }

    fn recovery(&self, _t: f64) -> CurveResult<f64> {
        Ok(self.recovery)
    }

    fn reference_date(&self) -> Date {
        self.reference_date
    }
}

/// Builder for [`HazardCurve`].
#[derive(Debug, Clone)]
pub struct HazardCurveBuilder {
    reference_date: Date,
    recovery: f64,
    pillars: Vec<(Date, f64)>,
}

impl HazardCurveBuilder {
    /// Creates a new builder with the standard 40% recovery assumption.
    #[must_use]
    pub fn new(reference_date: Date) -> Self {
        Self {
            reference_date,
            recovery: 0.4,
            pillars: Vec::new(),
        }
    }

    /// Sets the recovery assumption.
    #[must_use]
    pub fn with_recovery(mut self, recovery: f64) -> Self {
        self.recovery = recovery;
        self
    }

    /// Adds a hazard rate pillar at a date.
    #[must_use]
    pub fn add_hazard(mut self, date: Date, hazard: f64) -> Self {
        self.pillars.push((date, hazard));
        self
    }

    /// Builds the curve.
    ///
    /// # Errors
    ///
    /// Returns an error if no pillars were added, a pillar is on or
    /// before the reference date, pillar dates are not strictly
    /// increasing after sorting, a hazard is not finite, or the
    /// recovery is outside `[0, 1)`.
    pub fn build(mut self) -> CurveResult<HazardCurve> {
        validate_recovery(self.recovery)?;
        if self.pillars.is_empty() {
            return Err(CurveError::insufficient_points(1, 0));
        }

        self.pillars.sort_by_key(|(date, _)| *date);

        let mut times = Vec::with_capacity(self.pillars.len());
        let mut hazards = Vec::with_capacity(self.pillars.len());
        let mut cumulative = Vec::with_capacity(self.pillars.len());
        let mut integral = 0.0;

        for (i, (date, hazard)) in self.pillars.iter().enumerate() {
            if !hazard.is_finite() {
                return Err(CurveError::invalid_value(format!(
                    "hazard rate at {} must be finite",
                    date
                )));
            }
            let t = self.reference_date.days_between(date) as f64 / 365.0;
            if t <= 0.0 {
                return Err(CurveError::invalid_value(format!(
                    "pillar {} is not after the reference date {}",
                    date, self.reference_date
                )));
            }
            let prev = times.last().copied().unwrap_or(0.0);
            if t <= prev {
                return Err(CurveError::non_monotonic_tenors(i, prev, t));
            }
            integral += hazard * (t - prev);
            times.push(t);
            hazards.push(*hazard);
            cumulative.push(integral);
        }

        Ok(HazardCurve {
            reference_date: self.reference_date,
            recovery: self.recovery,
            times,
            hazards,
            cumulative,
        })
    }
}

/// A survival curve wrapper that applies a running-spread bump.
///
/// The bump is quoted in spread terms and scaled onto the hazard:
/// `Q_shifted(t) = Q_base(t) * exp(-(spread / (1 - recovery)) * t)`
pub struct ShiftedHazardCurve<'a, C: CreditCurve + ?Sized> {
    base: &'a C,
    spread: f64,
}

impl<'a, C: CreditCurve + ?Sized> ShiftedHazardCurve<'a, C> {
    /// Creates a new shifted survival curve.
    ///
    /// # Arguments
    ///
    /// * `base` - The underlying survival curve
    /// * `spread` - The running-spread bump (as decimal, e.g. 0.0001 for 1bp)
    pub fn new(base: &'a C, spread: f64) -> Self {
        Self { base, spread }
    }

    /// Returns the spread bump applied to this curve.
    pub fn spread(&self) -> f64 {
        self.spread
    }
}

impl<C: CreditCurve + ?Sized> CreditCurve for ShiftedHazardCurve<'_, C> {
    fn survival_probability(&self, t: f64) -> CurveResult<f64> {
        let base_q = self.base.survival_probability(t)?;
        if t <= 0.0 {
            return Ok(base_q);
        }

        let recovery = self.base.recovery(t)?;
        if recovery >= 1.0 {
            return Err(CurveError::invalid_value(
                "recovery rate must be below 1 to scale a spread bump",
            ));
        }
        let hazard_bump = self.spread / (1.0 - recovery);
        Ok(base_q * (-hazard_bump * t).exp())
    }

    fn recovery(&self, t: f64) -> CurveResult<f64> {
        self.base.recovery(t)
    }

    fn reference_date(&self) -> Date {
        self.base.reference_date()
    }
}
