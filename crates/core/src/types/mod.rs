//! Domain types for the shop API.

mod cart;
mod id;
mod order;
mod price;
mod product;

pub use cart::{CartItem, CartTotals};
pub use id::{CartItemId, ProductId};
pub use order::OrderReceipt;
pub use price::Price;
pub use product::Product;
