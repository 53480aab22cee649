//! Host surface the controller renders into.
//!
//! The original storefront rendered into a fixed set of DOM elements. Here
//! the host environment is an explicit collaborator passed to the controller
//! at construction: three togglable views, two list containers, the badge
//! fields, and two message fields.

use crate::panels::{CartBadges, CartRow, Panel, ProductCard};
use crate::view::View;

/// Presentation surface for the storefront.
///
/// Every setter fully overwrites the previous value of its field, so a
/// repeated write with the same value is a no-op in effect and late writes
/// to a hidden view are harmless.
pub trait Surface {
    /// Make `view` the single visible view.
    fn set_view(&mut self, view: View);

    /// Replace the product list.
    fn catalog(&mut self, panel: Panel<ProductCard>);

    /// Replace the cart item list.
    fn cart_items(&mut self, panel: Panel<CartRow>);

    /// Replace the total/count badge fields.
    fn cart_badges(&mut self, badges: CartBadges);

    /// Replace the cart feedback message ("" clears it).
    fn cart_message(&mut self, text: &str);

    /// Replace the order feedback message.
    fn order_message(&mut self, text: &str);
}

// =============================================================================
// TerminalSurface
// =============================================================================

/// Surface that redraws the active view on stdout after every change.
pub struct TerminalSurface {
    view: View,
    catalog: Panel<ProductCard>,
    cart_items: Panel<CartRow>,
    badges: CartBadges,
    cart_message: String,
    order_message: String,
}

impl TerminalSurface {
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: View::Home,
            catalog: Panel::Empty(""),
            cart_items: Panel::Empty(""),
            badges: CartBadges::zero(),
            cart_message: String::new(),
            order_message: String::new(),
        }
    }

    // The whole point of this type is writing the screen.
    #[allow(clippy::print_stdout)]
    fn draw(&self) {
        println!();
        println!(
            "== Shopfront - {} ==  [cart: {} items, total ${}]",
            self.view.title(),
            self.badges.count,
            self.badges.total
        );
        match self.view {
            View::Home => self.draw_catalog(),
            View::Cart => self.draw_cart(),
            View::Order => self.draw_order(),
        }
    }

    #[allow(clippy::print_stdout)]
    fn draw_catalog(&self) {
        match &self.catalog {
            Panel::Loading(text) | Panel::Empty(text) | Panel::Failed(text) => {
                println!("  {text}");
            }
            Panel::Ready(cards) => {
                for card in cards {
                    println!(
                        "  [{}] {}  {}  {}",
                        card.id, card.name, card.category_label, card.price_label
                    );
                }
            }
        }
        if !self.cart_message.is_empty() {
            println!("  * {}", self.cart_message);
        }
    }

    #[allow(clippy::print_stdout)]
    fn draw_cart(&self) {
        match &self.cart_items {
            Panel::Loading(text) | Panel::Empty(text) | Panel::Failed(text) => {
                println!("  {text}");
            }
            Panel::Ready(rows) => {
                for row in rows {
                    let id_note = row
                        .id
                        .as_ref()
                        .map(|id| format!("  [item {id}]"))
                        .unwrap_or_default();
                    println!("  {}  {}{}", row.label, row.price_label, id_note);
                }
                println!("  total: {}  count: {}", self.badges.total, self.badges.count);
            }
        }
        if !self.cart_message.is_empty() {
            println!("  * {}", self.cart_message);
        }
    }

    #[allow(clippy::print_stdout)]
    fn draw_order(&self) {
        println!("  {}", self.order_message);
        println!("  (type 'back' to return to the catalog)");
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalSurface {
    fn set_view(&mut self, view: View) {
        self.view = view;
        self.draw();
    }

    fn catalog(&mut self, panel: Panel<ProductCard>) {
        self.catalog = panel;
        if self.view == View::Home {
            self.draw();
        }
    }

    fn cart_items(&mut self, panel: Panel<CartRow>) {
        self.cart_items = panel;
        if self.view == View::Cart {
            self.draw();
        }
    }

    fn cart_badges(&mut self, badges: CartBadges) {
        self.badges = badges;
        self.draw();
    }

    fn cart_message(&mut self, text: &str) {
        self.cart_message = text.to_string();
        if !text.is_empty() {
            self.draw();
        }
    }

    fn order_message(&mut self, text: &str) {
        self.order_message = text.to_string();
    }
}
