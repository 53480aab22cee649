//! Shop API client.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest`; every response body is read as text first
//!   and then parsed, so malformed payloads can be logged with context
//! - The server is the source of truth - no local cache, no optimistic
//!   state; callers re-fetch after every mutation
//! - Wire tolerance lives in `shopfront_core::wire`; this crate only moves
//!   bytes and maps failures onto [`ApiError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_client::{ClientConfig, ShopClient, StoreApi};
//!
//! let client = ShopClient::new(&ClientConfig::from_env()?);
//!
//! let products = client.products(None).await?;
//! client.add_cart_item(&products[0].id, 1).await?;
//! let receipt = client.create_order().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod config;
mod error;

pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_USER_ID};
pub use error::ApiError;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use shopfront_core::wire::{self, OrderReceiptWire};
use shopfront_core::{CartItem, CartItemId, OrderReceipt, Product, ProductId};

/// Operations the storefront UI needs from the shop API.
///
/// [`ShopClient`] is the production implementation; the view controller is
/// generic over this trait so its tests can drive it with an in-memory fake.
// The futures are awaited in place by a single-task caller, so no Send
// bound is required on them.
#[allow(async_fn_in_trait)]
pub trait StoreApi {
    /// Fetch the product catalog, optionally filtered by category.
    async fn products(&self, category: Option<&str>) -> Result<Vec<Product>, ApiError>;

    /// Fetch the current cart contents.
    async fn cart(&self) -> Result<Vec<CartItem>, ApiError>;

    /// Add `quantity` of a product to the cart.
    async fn add_cart_item(&self, product_id: &ProductId, quantity: u32) -> Result<(), ApiError>;

    /// Remove a cart line.
    async fn remove_cart_item(&self, item_id: &CartItemId) -> Result<(), ApiError>;

    /// Create an order from the current cart contents.
    async fn create_order(&self) -> Result<OrderReceipt, ApiError>;
}

// =============================================================================
// ShopClient
// =============================================================================

/// Client for the shop REST API.
///
/// Cheaply cloneable; all clones share one `reqwest::Client`.
#[derive(Clone)]
pub struct ShopClient {
    inner: Arc<ShopClientInner>,
}

struct ShopClientInner {
    client: reqwest::Client,
    /// Base URL without a trailing slash.
    base: String,
    user_id: String,
}

/// Body of `POST /api/v1/cart/items`.
#[derive(Debug, Serialize)]
struct AddCartItemRequest<'a> {
    user_id: &'a str,
    product_id: &'a ProductId,
    quantity: u32,
}

/// Body of `POST /api/v1/orders`.
#[derive(Debug, Serialize)]
struct CreateOrderRequest<'a> {
    user_id: &'a str,
}

impl ShopClient {
    /// Create a new shop API client.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(ShopClientInner {
                client: reqwest::Client::new(),
                base: config.base_url.as_str().trim_end_matches('/').to_string(),
                user_id: config.user_id.clone(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base, path)
    }

    /// GET a JSON body. Non-2xx responses carry no body text (only POST and
    /// DELETE failures capture it).
    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let response = self
            .inner
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method: "GET",
                path: path.to_string(),
                status,
                body: String::new(),
            });
        }

        parse_body(path, &response.text().await?)
    }

    /// POST a JSON body and return the response JSON. Failure captures the
    /// response text for diagnostics.
    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let response = self
            .inner
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                method: "POST",
                path: path.to_string(),
                status,
                body,
            });
        }

        parse_body(path, &response.text().await?)
    }

    /// DELETE a resource, discarding the response body on success.
    async fn delete(&self, path: &str, query: &[(&str, &str)]) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .delete(self.url(path))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                method: "DELETE",
                path: path.to_string(),
                status,
                body,
            });
        }
        Ok(())
    }

    /// Probe the API health endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server is not healthy.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<(), ApiError> {
        let response = self.inner.client.get(self.url("/health")).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method: "GET",
                path: "/health".to_string(),
                status,
                body: String::new(),
            });
        }
        Ok(())
    }
}

impl StoreApi for ShopClient {
    #[instrument(skip(self))]
    async fn products(&self, category: Option<&str>) -> Result<Vec<Product>, ApiError> {
        let query: Vec<(&str, &str)> = category.map(|c| ("category", c)).into_iter().collect();
        let body = self.get_json("/api/v1/products", &query).await?;
        Ok(wire::parse_products(body)?)
    }

    #[instrument(skip(self))]
    async fn cart(&self) -> Result<Vec<CartItem>, ApiError> {
        let body = self
            .get_json("/api/v1/cart", &[("user_id", self.inner.user_id.as_str())])
            .await?;
        Ok(wire::parse_cart(body)?)
    }

    #[instrument(skip(self), fields(product_id = %product_id))]
    async fn add_cart_item(&self, product_id: &ProductId, quantity: u32) -> Result<(), ApiError> {
        let request = AddCartItemRequest {
            user_id: &self.inner.user_id,
            product_id,
            quantity,
        };
        // The response payload only matters as success or failure.
        self.post_json("/api/v1/cart/items", &request).await?;
        Ok(())
    }

    #[instrument(skip(self), fields(item_id = %item_id))]
    async fn remove_cart_item(&self, item_id: &CartItemId) -> Result<(), ApiError> {
        let path = format!("/api/v1/cart/items/{item_id}");
        self.delete(&path, &[("user_id", self.inner.user_id.as_str())])
            .await
    }

    #[instrument(skip(self))]
    async fn create_order(&self) -> Result<OrderReceipt, ApiError> {
        let request = CreateOrderRequest {
            user_id: &self.inner.user_id,
        };
        let body = self.post_json("/api/v1/orders", &request).await?;
        let receipt: OrderReceiptWire = serde_json::from_value(body)?;
        Ok(receipt.normalize())
    }
}

/// Parse a response body, logging a truncated copy on failure.
fn parse_body(path: &str, text: &str) -> Result<Value, ApiError> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::error!(
                error = %e,
                path = %path,
                body = %text.chars().take(500).collect::<String>(),
                "failed to parse response body"
            );
            Err(ApiError::Parse(e))
        }
    }
}
