//! Tolerated server response shapes and their normalization.
//!
//! The shop API has two habits this module absorbs in one place: payloads
//! that arrive either bare or wrapped (`[...]` vs `{"items": [...]}`), and
//! fields known under two names (`price`/`unit_price`, `id`/`order_id`,
//! `product_name`/`name`). Each `parse_*`/`normalize` step resolves the
//! alternatives exhaustively; the rest of the workspace only ever sees the
//! canonical [`crate::types`].
//!
//! Shape rules:
//! - A products/cart body that is not a collection normalizes to an empty
//!   list (the UI shows its empty state).
//! - A collection whose entries cannot be parsed is a
//!   [`serde_json::Error`] (the UI shows its error placeholder).

use serde::Deserialize;
use serde_json::Value;

use crate::types::{CartItem, CartItemId, OrderReceipt, Price, Product, ProductId};

/// Placeholder shown when an order response carries no identifier.
pub const MISSING_ORDER_ID: &str = "(no id)";

// =============================================================================
// Products
// =============================================================================

/// A product as the catalog endpoint sends it.
#[derive(Debug, Deserialize)]
pub struct ProductWire {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub unit_price: Option<Price>,
}

impl ProductWire {
    fn normalize(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            category: self.category,
            // `price` wins over `unit_price`; neither present means zero.
            price: self.price.or(self.unit_price).unwrap_or_default(),
        }
    }
}

/// Parse a catalog response body into products.
///
/// # Errors
///
/// Returns an error when the body is a collection but an entry does not
/// parse as a product.
pub fn parse_products(body: Value) -> Result<Vec<Product>, serde_json::Error> {
    let Value::Array(entries) = body else {
        return Ok(Vec::new());
    };
    entries
        .into_iter()
        .map(|entry| serde_json::from_value::<ProductWire>(entry).map(ProductWire::normalize))
        .collect()
}

// =============================================================================
// Cart
// =============================================================================

/// A cart line as the cart endpoint sends it.
#[derive(Debug, Deserialize)]
pub struct CartItemWire {
    #[serde(default)]
    pub id: Option<CartItemId>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub unit_price: Option<Price>,
}

impl CartItemWire {
    fn normalize(self) -> CartItem {
        CartItem {
            id: self.id,
            product_name: self.product_name.or(self.name).unwrap_or_default(),
            quantity: self.quantity.unwrap_or(1),
            unit_price: self.price.or(self.unit_price).unwrap_or_default(),
        }
    }
}

/// Parse a cart response body into cart items.
///
/// Accepts a bare item array or an `{"items": [...]}` wrapper. Anything
/// else, including a wrapper whose `items` is not an array, normalizes to
/// an empty cart.
///
/// # Errors
///
/// Returns an error when an item entry does not parse as a cart line.
pub fn parse_cart(body: Value) -> Result<Vec<CartItem>, serde_json::Error> {
    let entries = match body {
        Value::Array(entries) => entries,
        Value::Object(mut wrapper) => match wrapper.remove("items") {
            Some(Value::Array(entries)) => entries,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };
    entries
        .into_iter()
        .map(|entry| serde_json::from_value::<CartItemWire>(entry).map(CartItemWire::normalize))
        .collect()
}

// =============================================================================
// Orders
// =============================================================================

/// An order-creation response as the orders endpoint sends it.
#[derive(Debug, Deserialize)]
pub struct OrderReceiptWire {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub order_id: Option<Value>,
}

impl OrderReceiptWire {
    /// Resolve the identifier: `id` wins over `order_id`, neither present
    /// yields [`MISSING_ORDER_ID`].
    #[must_use]
    pub fn normalize(self) -> OrderReceipt {
        let id = self
            .id
            .or(self.order_id)
            .map_or_else(|| MISSING_ORDER_ID.to_string(), ident_text);
        OrderReceipt { id }
    }
}

/// Render an identifier value as display text (strings unquoted).
fn ident_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}
