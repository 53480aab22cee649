//! Cart contents and the totals derived from them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CartItemId, Price};

/// One line of the server-held cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Server-issued cart line identifier, when the server provides one.
    pub id: Option<CartItemId>,
    /// Product name for display.
    pub product_name: String,
    /// Quantity of the product in this line.
    pub quantity: u32,
    /// Unit price, already resolved through the wire fallbacks.
    pub unit_price: Price,
}

impl CartItem {
    /// `unit_price * quantity`, or `None` when the price is non-numeric.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price
            .amount()
            .map(|price| price * Decimal::from(self.quantity))
    }
}

/// Aggregates over a full cart item list.
///
/// Always recomputed from the latest fetched list, never patched
/// incrementally. Lines with a non-numeric price contribute nothing to the
/// total but their quantities still count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line totals.
    pub total: Decimal,
    /// Sum of quantities.
    pub count: u64,
}

impl CartTotals {
    /// Compute totals over `items` in iteration order.
    #[must_use]
    pub fn of(items: &[CartItem]) -> Self {
        let mut total = Decimal::ZERO;
        let mut count = 0u64;
        for item in items {
            if let Some(line_total) = item.line_total() {
                total += line_total;
            }
            count += u64::from(item.quantity);
        }
        Self { total, count }
    }

    /// Total formatted with exactly two decimal places.
    #[must_use]
    pub fn total_label(&self) -> String {
        format!("{:.2}", self.total)
    }

    /// Count formatted as a plain integer.
    #[must_use]
    pub fn count_label(&self) -> String {
        self.count.to_string()
    }
}
