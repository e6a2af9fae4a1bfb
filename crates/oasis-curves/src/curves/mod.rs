//! Concrete curve implementations.
//!
//! - [`FlatCurve`]: A single continuously compounded rate at all tenors
//! - [`ZeroCurve`]: Linearly interpolated zero rates with flat extrapolation
//! - [`ShiftedCurve`]: A wrapper applying a constant spread to another curve
//! - [`FlatHazardCurve`], [`HazardCurve`]: Survival curves with constant or
//!   piecewise-constant hazard rates
//! - [`ShiftedHazardCurve`]: A wrapper applying a running-spread bump to a
//!   survival curve

pub mod credit;
pub mod flat;
pub mod shifted;
pub mod zero;

pub use credit::{FlatHazardCurve, HazardCurve, HazardCurveBuilder, ShiftedHazardCurve};
pub use flat::FlatCurve;
pub use shifted::ShiftedCurve;
pub use zero::{ZeroCurve, ZeroCurveBuilder};
