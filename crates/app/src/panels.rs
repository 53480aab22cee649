//! View models projected from domain types.
//!
//! Each projection is rebuilt in full from the latest fetched data; the
//! surface only ever receives complete replacements, never patches.

use shopfront_core::{CartItem, CartItemId, CartTotals, Product, ProductId};

/// State of a list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel<T> {
    /// A fetch is in flight.
    Loading(&'static str),
    /// The fetch succeeded but there is nothing to show.
    Empty(&'static str),
    /// One entry per fetched element, in response order.
    Ready(Vec<T>),
    /// The fetch failed; the placeholder replaces the list.
    Failed(&'static str),
}

/// One purchasable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Product id bound to the card's add-to-cart action.
    pub id: ProductId,
    pub name: String,
    /// Category text, blank when the product has none.
    pub category_label: String,
    /// Price with currency prefix, e.g. "$19.50".
    pub price_label: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category_label: product.category.clone().unwrap_or_default(),
            price_label: format!("${}", product.price),
        }
    }
}

/// One cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    /// Cart line id for the remove action, when the server issued one.
    pub id: Option<CartItemId>,
    /// `"{name} (x{quantity})"`.
    pub label: String,
    /// Unit price with currency prefix, e.g. "$1.50".
    pub price_label: String,
}

impl From<&CartItem> for CartRow {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            label: format!("{} (x{})", item.product_name, item.quantity),
            price_label: format!("${}", item.unit_price),
        }
    }
}

/// The persistent total/count badge fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartBadges {
    /// Cart total as a fixed two-decimal string.
    pub total: String,
    /// Item count as a plain integer string.
    pub count: String,
}

impl CartBadges {
    /// The empty-cart badges: "0.00" and "0".
    #[must_use]
    pub fn zero() -> Self {
        Self::from(&CartTotals::of(&[]))
    }
}

impl From<&CartTotals> for CartBadges {
    fn from(totals: &CartTotals) -> Self {
        Self {
            total: totals.total_label(),
            count: totals.count_label(),
        }
    }
}
