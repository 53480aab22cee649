//! View controller: navigation plus one-shot request/render cycles.
//!
//! Every operation fetches, rebuilds its view models in full, and hands them
//! to the surface. Failures are caught here, logged, and surfaced as static
//! messages; nothing propagates to the caller and navigation cannot fail.
//!
//! Operations are awaited to completion by the (sequential) command loop and
//! never spawn detached tasks, so a late response can never render into a
//! view the user has already left.

use shopfront_client::StoreApi;
use shopfront_core::{CartItemId, CartTotals, ProductId};

use crate::panels::{CartBadges, CartRow, Panel, ProductCard};
use crate::surface::Surface;
use crate::view::View;

pub(crate) const LOADING_PRODUCTS: &str = "Loading products...";
pub(crate) const NO_PRODUCTS: &str = "No products found.";
pub(crate) const PRODUCTS_FAILED: &str = "Failed to load products.";
pub(crate) const LOADING_CART: &str = "Loading cart...";
pub(crate) const CART_EMPTY: &str = "Your cart is empty.";
pub(crate) const CART_FAILED: &str = "Failed to load cart.";
pub(crate) const ITEM_ADDED: &str = "Item added to cart.";
pub(crate) const ADD_FAILED: &str = "Failed to add item to cart.";
pub(crate) const ITEM_REMOVED: &str = "Item removed from cart.";
pub(crate) const REMOVE_FAILED: &str = "Failed to remove item from cart.";
pub(crate) const ORDER_FAILED: &str = "Failed to place order.";

/// The storefront controller.
///
/// Holds the API client, the presentation surface, and the active view -
/// all injected at construction.
pub struct App<A, S> {
    api: A,
    surface: S,
    view: View,
}

impl<A: StoreApi, S: Surface> App<A, S> {
    pub fn new(api: A, surface: S) -> Self {
        Self {
            api,
            surface,
            view: View::Home,
        }
    }

    /// The currently visible view.
    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    fn set_view(&mut self, view: View) {
        self.view = view;
        self.surface.set_view(view);
    }

    /// Make Home the visible view. Visibility only; cannot fail.
    pub fn show_home(&mut self) {
        self.set_view(View::Home);
    }

    /// Make Cart the visible view. Visibility only; cannot fail.
    pub fn show_cart(&mut self) {
        self.set_view(View::Cart);
    }

    /// Make Order the visible view. Visibility only; cannot fail.
    pub fn show_order(&mut self) {
        self.set_view(View::Order);
    }

    /// Home navigation action: visibility only, no fetch.
    pub fn go_home(&mut self) {
        self.show_home();
    }

    /// Cart navigation action: show the cart, then reload its contents.
    pub async fn go_cart(&mut self) {
        self.show_cart();
        self.surface.cart_message("");
        self.load_cart().await;
    }

    /// Bootstrap sequence: Home view, catalog load, then a cart load to
    /// prime the badges.
    pub async fn start(&mut self) {
        self.show_home();
        self.load_products(None).await;
        self.load_cart().await;
    }

    /// Fetch the catalog and rebuild the product list.
    pub async fn load_products(&mut self, category: Option<&str>) {
        self.surface.catalog(Panel::Loading(LOADING_PRODUCTS));
        match self.api.products(category).await {
            Ok(products) if products.is_empty() => {
                self.surface.catalog(Panel::Empty(NO_PRODUCTS));
            }
            Ok(products) => {
                let cards = products.iter().map(ProductCard::from).collect();
                self.surface.catalog(Panel::Ready(cards));
            }
            Err(e) => {
                tracing::error!("failed to load products: {e}");
                self.surface.catalog(Panel::Failed(PRODUCTS_FAILED));
            }
        }
    }

    /// Fetch the cart and rebuild the item list and badges.
    ///
    /// The badges are always recomputed from the fetched list; on failure
    /// they reset to zero so they never describe items the panel no longer
    /// shows.
    pub async fn load_cart(&mut self) {
        self.surface.cart_items(Panel::Loading(LOADING_CART));
        match self.api.cart().await {
            Ok(items) if items.is_empty() => {
                self.surface.cart_items(Panel::Empty(CART_EMPTY));
                self.surface.cart_badges(CartBadges::zero());
            }
            Ok(items) => {
                let rows = items.iter().map(CartRow::from).collect();
                let badges = CartBadges::from(&CartTotals::of(&items));
                self.surface.cart_items(Panel::Ready(rows));
                self.surface.cart_badges(badges);
            }
            Err(e) => {
                tracing::error!("failed to load cart: {e}");
                self.surface.cart_items(Panel::Failed(CART_FAILED));
                self.surface.cart_badges(CartBadges::zero());
            }
        }
    }

    /// Add a product to the cart, then resynchronize from the server.
    ///
    /// No optimistic update and no retry: correctness depends entirely on
    /// the authoritative reload. On failure the cart view state is left
    /// unchanged.
    pub async fn add_to_cart(&mut self, product_id: &ProductId, quantity: u32) {
        match self.api.add_cart_item(product_id, quantity).await {
            Ok(()) => {
                self.surface.cart_message(ITEM_ADDED);
                self.load_cart().await;
            }
            Err(e) => {
                tracing::error!("failed to add item to cart: {e}");
                self.surface.cart_message(ADD_FAILED);
            }
        }
    }

    /// Remove a cart line, then resynchronize from the server.
    pub async fn remove_from_cart(&mut self, item_id: &CartItemId) {
        match self.api.remove_cart_item(item_id).await {
            Ok(()) => {
                self.surface.cart_message(ITEM_REMOVED);
                self.load_cart().await;
            }
            Err(e) => {
                tracing::error!("failed to remove item from cart: {e}");
                self.surface.cart_message(REMOVE_FAILED);
            }
        }
    }

    /// Submit the current cart as an order.
    ///
    /// On success, shows the confirmation in the Order view and re-derives
    /// the badges with a fresh cart load (the server empties the cart when
    /// it creates the order). On failure, writes a message and stays on the
    /// current view.
    pub async fn checkout(&mut self) {
        self.surface.cart_message("");
        match self.api.create_order().await {
            Ok(receipt) => {
                self.surface
                    .order_message(&format!("Order placed successfully. Order ID: {}", receipt.id));
                self.show_order();
                self.load_cart().await;
            }
            Err(e) => {
                tracing::error!("failed to place order: {e}");
                self.surface.cart_message(ORDER_FAILED);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::{Cell, RefCell};

    use shopfront_client::ApiError;
    use shopfront_core::{CartItem, OrderReceipt, Product};

    use super::*;

    fn failure() -> ApiError {
        ApiError::Parse(serde_json::from_str::<serde_json::Value>("oops").unwrap_err())
    }

    /// In-memory stand-in for the shop API.
    #[derive(Default)]
    struct FakeApi {
        products: Vec<Product>,
        cart: RefCell<Vec<CartItem>>,
        order_id: Option<String>,
        fail_products: bool,
        fail_cart: bool,
        fail_add: bool,
        fail_remove: bool,
        fail_order: bool,
        cart_fetches: Cell<usize>,
        last_category: RefCell<Option<String>>,
    }

    impl StoreApi for FakeApi {
        async fn products(&self, category: Option<&str>) -> Result<Vec<Product>, ApiError> {
            *self.last_category.borrow_mut() = category.map(str::to_string);
            if self.fail_products {
                return Err(failure());
            }
            Ok(self.products.clone())
        }

        async fn cart(&self) -> Result<Vec<CartItem>, ApiError> {
            self.cart_fetches.set(self.cart_fetches.get() + 1);
            if self.fail_cart {
                return Err(failure());
            }
            Ok(self.cart.borrow().clone())
        }

        async fn add_cart_item(
            &self,
            product_id: &ProductId,
            quantity: u32,
        ) -> Result<(), ApiError> {
            if self.fail_add {
                return Err(failure());
            }
            self.cart.borrow_mut().push(CartItem {
                id: None,
                product_name: format!("product-{product_id}"),
                quantity,
                unit_price: serde_json::from_str("1.0").unwrap(),
            });
            Ok(())
        }

        async fn remove_cart_item(&self, _item_id: &CartItemId) -> Result<(), ApiError> {
            if self.fail_remove {
                return Err(failure());
            }
            self.cart.borrow_mut().clear();
            Ok(())
        }

        async fn create_order(&self) -> Result<OrderReceipt, ApiError> {
            if self.fail_order {
                return Err(failure());
            }
            // The server empties the cart when it creates the order.
            self.cart.borrow_mut().clear();
            Ok(OrderReceipt {
                id: self.order_id.clone().unwrap_or_else(|| "(no id)".to_string()),
            })
        }
    }

    /// Surface that records every write.
    #[derive(Default)]
    struct RecordingSurface {
        view: Option<View>,
        catalog_writes: Vec<Panel<ProductCard>>,
        cart_writes: Vec<Panel<CartRow>>,
        badge_writes: Vec<CartBadges>,
        cart_messages: Vec<String>,
        order_messages: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn set_view(&mut self, view: View) {
            self.view = Some(view);
        }
        fn catalog(&mut self, panel: Panel<ProductCard>) {
            self.catalog_writes.push(panel);
        }
        fn cart_items(&mut self, panel: Panel<CartRow>) {
            self.cart_writes.push(panel);
        }
        fn cart_badges(&mut self, badges: CartBadges) {
            self.badge_writes.push(badges);
        }
        fn cart_message(&mut self, text: &str) {
            self.cart_messages.push(text.to_string());
        }
        fn order_message(&mut self, text: &str) {
            self.order_messages.push(text.to_string());
        }
    }

    fn app(api: FakeApi) -> App<FakeApi, RecordingSurface> {
        App::new(api, RecordingSurface::default())
    }

    fn product(id: &str, name: &str, price: &str) -> Product {
        serde_json::from_str(&format!(
            "{{\"id\":\"{id}\",\"name\":\"{name}\",\"category\":null,\"price\":{price}}}"
        ))
        .unwrap()
    }

    fn cart_item(name: &str, quantity: u32, price: &str) -> CartItem {
        CartItem {
            id: None,
            product_name: name.to_string(),
            quantity,
            unit_price: serde_json::from_str(price).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_catalog_render_is_idempotent() {
        let mut app = app(FakeApi {
            products: vec![product("1", "Laptop", "999.99"), product("2", "Pen", "19.5")],
            ..FakeApi::default()
        });
        app.load_products(None).await;
        app.load_products(None).await;

        let ready: Vec<_> = app
            .surface
            .catalog_writes
            .iter()
            .filter(|panel| matches!(panel, Panel::Ready(_)))
            .collect();
        assert_eq!(ready.len(), 2);
        assert_eq!(ready[0], ready[1]);
    }

    #[tokio::test]
    async fn test_browse_forwards_category_filter() {
        let mut app = app(FakeApi {
            products: vec![product("1", "Laptop", "999.99")],
            ..FakeApi::default()
        });
        app.load_products(Some("Electronics")).await;
        assert_eq!(
            app.api.last_category.borrow().as_deref(),
            Some("Electronics")
        );

        app.load_products(None).await;
        assert_eq!(app.api.last_category.borrow().as_deref(), None);
    }

    #[tokio::test]
    async fn test_catalog_empty_state() {
        let mut app = app(FakeApi::default());
        app.load_products(None).await;
        assert_eq!(
            app.surface.catalog_writes.last(),
            Some(&Panel::Empty(NO_PRODUCTS))
        );
    }

    #[tokio::test]
    async fn test_catalog_failure_renders_placeholder() {
        let mut app = app(FakeApi {
            fail_products: true,
            ..FakeApi::default()
        });
        app.load_products(None).await;
        assert_eq!(
            app.surface.catalog_writes.last(),
            Some(&Panel::Failed(PRODUCTS_FAILED))
        );
    }

    #[tokio::test]
    async fn test_cart_rows_and_badges() {
        let mut app = app(FakeApi {
            cart: RefCell::new(vec![cart_item("Pen", 2, "1.5")]),
            ..FakeApi::default()
        });
        app.load_cart().await;

        let Some(Panel::Ready(rows)) = app.surface.cart_writes.last() else {
            panic!("expected a ready cart panel");
        };
        assert_eq!(rows[0].label, "Pen (x2)");
        assert_eq!(rows[0].price_label, "$1.50");

        let badges = app.surface.badge_writes.last().unwrap();
        assert_eq!(badges.total, "3.00");
        assert_eq!(badges.count, "2");
    }

    #[tokio::test]
    async fn test_empty_cart_resets_badges() {
        let mut app = app(FakeApi::default());
        app.load_cart().await;
        assert_eq!(
            app.surface.cart_writes.last(),
            Some(&Panel::Empty(CART_EMPTY))
        );
        assert_eq!(app.surface.badge_writes.last(), Some(&CartBadges::zero()));
    }

    #[tokio::test]
    async fn test_cart_failure_resets_badges() {
        let mut app = app(FakeApi {
            fail_cart: true,
            ..FakeApi::default()
        });
        app.load_cart().await;
        assert_eq!(
            app.surface.cart_writes.last(),
            Some(&Panel::Failed(CART_FAILED))
        );
        assert_eq!(app.surface.badge_writes.last(), Some(&CartBadges::zero()));
    }

    #[tokio::test]
    async fn test_add_to_cart_reloads_and_confirms() {
        let mut app = app(FakeApi::default());
        app.add_to_cart(&ProductId::new("1"), 1).await;

        assert_eq!(app.surface.cart_messages, vec![ITEM_ADDED.to_string()]);
        assert_eq!(app.api.cart_fetches.get(), 1);
        // The reload rendered the item the fake recorded.
        assert!(matches!(
            app.surface.cart_writes.last(),
            Some(Panel::Ready(_))
        ));
    }

    #[tokio::test]
    async fn test_failed_add_leaves_cart_untouched() {
        let mut app = app(FakeApi {
            fail_add: true,
            ..FakeApi::default()
        });
        app.add_to_cart(&ProductId::new("1"), 1).await;

        assert_eq!(app.surface.cart_messages, vec![ADD_FAILED.to_string()]);
        assert_eq!(app.api.cart_fetches.get(), 0);
        assert!(app.surface.cart_writes.is_empty());
        assert!(app.surface.badge_writes.is_empty());
    }

    #[tokio::test]
    async fn test_remove_reloads_on_success() {
        let mut app = app(FakeApi {
            cart: RefCell::new(vec![cart_item("Pen", 2, "1.5")]),
            ..FakeApi::default()
        });
        app.remove_from_cart(&CartItemId::new("c1")).await;

        assert_eq!(app.surface.cart_messages, vec![ITEM_REMOVED.to_string()]);
        assert_eq!(app.api.cart_fetches.get(), 1);
        assert_eq!(
            app.surface.cart_writes.last(),
            Some(&Panel::Empty(CART_EMPTY))
        );
    }

    #[tokio::test]
    async fn test_checkout_success_shows_order_and_rederives_badges() {
        let mut app = app(FakeApi {
            cart: RefCell::new(vec![cart_item("Pen", 2, "1.5")]),
            order_id: Some("X1".to_string()),
            ..FakeApi::default()
        });
        app.checkout().await;

        assert_eq!(
            app.surface.order_messages,
            vec!["Order placed successfully. Order ID: X1".to_string()]
        );
        assert_eq!(app.view(), View::Order);
        // Badges come from the authoritative reload, not a local zeroing.
        assert_eq!(app.api.cart_fetches.get(), 1);
        assert_eq!(app.surface.badge_writes.last(), Some(&CartBadges::zero()));
    }

    #[tokio::test]
    async fn test_checkout_failure_keeps_view() {
        let mut app = app(FakeApi {
            fail_order: true,
            ..FakeApi::default()
        });
        app.show_cart();
        app.checkout().await;

        assert_eq!(app.view(), View::Cart);
        assert_eq!(
            app.surface.cart_messages,
            vec![String::new(), ORDER_FAILED.to_string()]
        );
        assert!(app.surface.order_messages.is_empty());
        assert_eq!(app.api.cart_fetches.get(), 0);
    }

    #[tokio::test]
    async fn test_navigation_yields_exactly_one_view() {
        let mut app = app(FakeApi::default());
        app.start().await;
        assert_eq!(app.view(), View::Home);

        app.go_cart().await;
        assert_eq!(app.view(), View::Cart);
        assert_eq!(app.surface.view, Some(View::Cart));

        app.go_home();
        app.go_home();
        assert_eq!(app.view(), View::Home);
        assert_eq!(app.surface.view, Some(View::Home));
    }

    #[tokio::test]
    async fn test_go_cart_clears_message_and_reloads() {
        let mut app = app(FakeApi::default());
        app.go_cart().await;
        assert_eq!(app.surface.cart_messages, vec![String::new()]);
        assert_eq!(app.api.cart_fetches.get(), 1);
    }

    #[tokio::test]
    async fn test_start_loads_catalog_then_badges() {
        let mut app = app(FakeApi {
            products: vec![product("1", "Laptop", "999.99")],
            cart: RefCell::new(vec![cart_item("Pen", 1, "1.5")]),
            ..FakeApi::default()
        });
        app.start().await;

        assert_eq!(app.view(), View::Home);
        assert!(matches!(
            app.surface.catalog_writes.last(),
            Some(Panel::Ready(_))
        ));
        let badges = app.surface.badge_writes.last().unwrap();
        assert_eq!(badges.total, "1.50");
        assert_eq!(badges.count, "1");
    }
}
