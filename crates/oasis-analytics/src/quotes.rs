//! Market quote storage.
//!
//! Quotes stay in [`Decimal`] exactly as contributed; they are only
//! converted to `f64` on entry to the pricing engine. A field may carry any
//! subset of bid, mid, and ask.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::conversions::MeasureKind;

/// One quoted measure: contributed bid, mid, and ask levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteField {
    /// Contributed bid.
    pub bid: Option<Decimal>,
    /// Contributed mid.
    pub mid: Option<Decimal>,
    /// Contributed ask.
    pub ask: Option<Decimal>,
}

impl QuoteField {
    /// A field carrying only a mid.
    #[must_use]
    pub fn from_mid(mid: Decimal) -> Self {
        Self {
            bid: None,
            mid: Some(mid),
            ask: None,
        }
    }

    /// A field carrying a bid and an ask.
    #[must_use]
    pub fn from_bid_ask(bid: Decimal, ask: Decimal) -> Self {
        Self {
            bid: Some(bid),
            mid: None,
            ask: Some(ask),
        }
    }

    /// The level to price off: the contributed mid, else the bid/ask
    /// midpoint, else whichever side exists.
    #[must_use]
    pub fn mid_or_calculated(&self) -> Option<Decimal> {
        if let Some(mid) = self.mid {
            return Some(mid);
        }
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::from(2)),
            (Some(side), None) | (None, Some(side)) => Some(side),
            (None, None) => None,
        }
    }
}

/// All contributed fields for one instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// The instrument the quote belongs to.
    pub instrument_id: String,
    /// Contributed fields keyed by quoting convention.
    pub fields: BTreeMap<MeasureKind, QuoteField>,
}

impl MarketQuote {
    /// Creates an empty quote for an instrument.
    #[must_use]
    pub fn new(instrument_id: impl Into<String>) -> Self {
        Self {
            instrument_id: instrument_id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) a quoted field.
    #[must_use]
    pub fn with_field(mut self, kind: MeasureKind, field: QuoteField) -> Self {
        self.fields.insert(kind, field);
        self
    }

    /// The quoted field for a measure, if contributed.
    #[must_use]
    pub fn field(&self, kind: MeasureKind) -> Option<&QuoteField> {
        self.fields.get(&kind)
    }

    /// The priceable level for a measure, if the field has one.
    #[must_use]
    pub fn mid_or_calculated(&self, kind: MeasureKind) -> Option<Decimal> {
        self.field(kind).and_then(QuoteField::mid_or_calculated)
    }
}

/// Quotes keyed by instrument id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteStore {
    quotes: BTreeMap<String, MarketQuote>,
}

impl QuoteStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a quote, replacing any previous quote for the instrument.
    pub fn insert(&mut self, quote: MarketQuote) {
        self.quotes.insert(quote.instrument_id.clone(), quote);
    }

    /// Looks up the quote for an instrument.
    #[must_use]
    pub fn get(&self, instrument_id: &str) -> Option<&MarketQuote> {
        self.quotes.get(instrument_id)
    }

    /// Number of quoted instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// True when nothing is quoted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_contributed_mid_wins() {
        let field = QuoteField {
            bid: Some(dec!(99.0)),
            mid: Some(dec!(100.25)),
            ask: Some(dec!(101.0)),
        };
        assert_eq!(field.mid_or_calculated(), Some(dec!(100.25)));
    }

    #[test]
    fn test_midpoint_calculated_from_sides() {
        let field = QuoteField::from_bid_ask(dec!(99.0), dec!(101.0));
        assert_eq!(field.mid_or_calculated(), Some(dec!(100.0)));
    }

    #[test]
    fn test_single_side_stands_in() {
        let bid_only = QuoteField {
            bid: Some(dec!(99.5)),
            ..QuoteField::default()
        };
        let ask_only = QuoteField {
            ask: Some(dec!(100.5)),
            ..QuoteField::default()
        };
        assert_eq!(bid_only.mid_or_calculated(), Some(dec!(99.5)));
        assert_eq!(ask_only.mid_or_calculated(), Some(dec!(100.5)));
        assert_eq!(QuoteField::default().mid_or_calculated(), None);
    }

    #[test]
    fn test_store_round_trips_through_serde() {
        let quote = MarketQuote::new("XS0123456789")
            .with_field(MeasureKind::Price, QuoteField::from_mid(dec!(98.75)))
            .with_field(MeasureKind::ZSpread, QuoteField::from_bid_ask(dec!(0.011), dec!(0.013)));
        let mut store = QuoteStore::new();
        store.insert(quote);

        let json = serde_json::to_string(&store).unwrap();
        let back: QuoteStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
        let quoted = back.get("XS0123456789").unwrap();
        assert_eq!(
            quoted.mid_or_calculated(MeasureKind::Price),
            Some(dec!(98.75))
        );
        assert_eq!(back.len(), 1);
    }
}
