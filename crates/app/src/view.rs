//! The three mutually exclusive views.

/// A visual state of the storefront. Exactly one is visible at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Product catalog.
    Home,
    /// Cart contents and checkout.
    Cart,
    /// Order confirmation.
    Order,
}

impl View {
    /// Heading text for the view.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Cart => "Cart",
            Self::Order => "Order",
        }
    }
}
