//! Order receipt returned by a successful checkout.

use serde::{Deserialize, Serialize};

/// Confirmation of a server-created order.
///
/// Not retained after navigating away; the identifier is only used for the
/// confirmation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Order identifier, or the `"(no id)"` placeholder when the server
    /// response carried none.
    pub id: String,
}
