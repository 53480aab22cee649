//! Catalog product as presented to the UI.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A purchasable catalog entry.
///
/// Read-only on the client; fetched fresh for every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-issued product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category, when the server provides one.
    pub category: Option<String>,
    /// Unit price, already resolved through the wire fallbacks.
    pub price: Price,
}
