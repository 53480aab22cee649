//! Price representation with decimal arithmetic and a raw fallback.
//!
//! The API usually sends prices as JSON numbers, but nothing guarantees it.
//! Rather than chasing `toFixed`-style runtime checks through the rendering
//! code, the two cases are made explicit here: a numeric amount that formats
//! to two decimals, or a raw value that renders verbatim.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A unit price as received from the shop API.
///
/// Numeric values (including numbers sent as strings) become [`Price::Amount`]
/// and display with exactly two decimal places. Anything else is kept as
/// [`Price::Raw`] and displayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// A numeric amount in the currency's standard unit.
    Amount(Decimal),
    /// A non-numeric value, preserved for display.
    Raw(serde_json::Value),
}

impl Price {
    /// The numeric amount, if this price is numeric.
    #[must_use]
    pub const fn amount(&self) -> Option<Decimal> {
        match self {
            Self::Amount(amount) => Some(*amount),
            Self::Raw(_) => None,
        }
    }
}

impl Default for Price {
    /// A missing price defaults to zero, displayed as "0.00".
    fn default() -> Self {
        Self::Amount(Decimal::ZERO)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "{amount:.2}"),
            Self::Raw(serde_json::Value::String(text)) => write!(f, "{text}"),
            Self::Raw(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_price_two_decimals() {
        let price: Price = serde_json::from_str("19.5").unwrap();
        assert_eq!(price.to_string(), "19.50");
    }

    #[test]
    fn test_integer_price_two_decimals() {
        let price: Price = serde_json::from_str("7").unwrap();
        assert_eq!(price.to_string(), "7.00");
    }

    #[test]
    fn test_string_amount_parses_as_numeric() {
        let price: Price = serde_json::from_str("\"1.5\"").unwrap();
        assert_eq!(price.amount(), Some(Decimal::new(15, 1)));
        assert_eq!(price.to_string(), "1.50");
    }

    #[test]
    fn test_non_numeric_price_renders_raw() {
        let price: Price = serde_json::from_str("\"call us\"").unwrap();
        assert_eq!(price.amount(), None);
        assert_eq!(price.to_string(), "call us");
    }

    #[test]
    fn test_default_price_is_zero() {
        assert_eq!(Price::default().to_string(), "0.00");
    }
}
