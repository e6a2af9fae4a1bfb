//! The curve environment handed to pricing.
//!
//! A [`CurveSet`] bundles the discount curve with the optional govvie and
//! credit curves a conversion may need. It holds borrowed trait objects,
//! so rebinding one member (for a bump or an overlay) is a cheap copy.

use core::fmt;

use crate::error::{CurveError, CurveResult};
use crate::traits::{CreditCurve, Curve};

/// The set of curves available to a pricing or conversion call.
///
/// The discount curve is always present. Govvie and credit curves are
/// optional; accessors return [`CurveError::CurveNotFound`] when a
/// conversion requires one that is missing.
///
/// # Example
///
/// ```rust
/// use oasis_core::Date;
/// use oasis_curves::{CurveSet, FlatCurve};
///
/// let reference = Date::from_ymd(2025, 1, 15).unwrap();
/// let discount = FlatCurve::new(reference, 0.04).unwrap();
/// let govvie = FlatCurve::new(reference, 0.035).unwrap();
///
/// let curves = CurveSet::new(&discount).with_govvie(&govvie);
/// assert!(curves.has_govvie());
/// assert!(!curves.has_credit());
/// ```
#[derive(Clone, Copy)]
pub struct CurveSet<'a> {
    discount: &'a dyn Curve,
    govvie: Option<&'a dyn Curve>,
    credit: Option<&'a dyn CreditCurve>,
}

impl fmt::Debug for CurveSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveSet")
            .field("discount", &"<dyn Curve>")
            .field("govvie", &self.govvie.map(|_| "<dyn Curve>"))
            .field("credit", &self.credit.map(|_| "<dyn CreditCurve>"))
            .finish()
    }
}

impl<'a> CurveSet<'a> {
    /// Creates a curve set with only a discount curve.
    #[must_use]
    pub fn new(discount: &'a dyn Curve) -> Self {
        Self {
            discount,
            govvie: None,
            credit: None,
        }
    }

    /// Attaches (or replaces) the govvie curve.
    #[must_use]
    pub fn with_govvie(mut self, govvie: &'a dyn Curve) -> Self {
        self.govvie = Some(govvie);
        self
    }

    /// Attaches (or replaces) the credit curve.
    #[must_use]
    pub fn with_credit(mut self, credit: &'a dyn CreditCurve) -> Self {
        self.credit = Some(credit);
        self
    }

    /// Replaces the discount curve, keeping the other members.
    #[must_use]
    pub fn with_discount(mut self, discount: &'a dyn Curve) -> Self {
        self.discount = discount;
        self
    }

    /// Returns the discount curve.
    #[must_use]
    pub fn discount(&self) -> &'a dyn Curve {
        self.discount
    }

    /// Returns the govvie curve.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::CurveNotFound`] if no govvie curve is attached.
    pub fn govvie(&self) -> CurveResult<&'a dyn Curve> {
        self.govvie.ok_or_else(|| CurveError::curve_not_found("govvie"))
    }

    /// Returns the credit curve.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::CurveNotFound`] if no credit curve is attached.
    pub fn credit(&self) -> CurveResult<&'a dyn CreditCurve> {
        self.credit.ok_or_else(|| CurveError::curve_not_found("credit"))
    }

    /// Returns true if a govvie curve is attached.
    #[must_use]
    pub fn has_govvie(&self) -> bool {
        self.govvie.is_some()
    }

    /// Returns true if a credit curve is attached.
    #[must_use]
    pub fn has_credit(&self) -> bool {
        self.credit.is_some()
    }
}
