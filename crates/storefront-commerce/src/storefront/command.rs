//! Commands the presentation layer sends, and the events it gets back.

use crate::ids::ProductId;
use crate::search::{PriceRange, SortKey};
use serde::{Deserialize, Serialize};

/// Tabs of the sign-in dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthTab::Login => "login",
            AuthTab::Register => "register",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AuthTab::Login => "Sign In",
            AuthTab::Register => "Create Account",
        }
    }
}

/// A user interaction routed through [`Storefront::dispatch`].
///
/// [`Storefront::dispatch`]: crate::storefront::Storefront::dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Category checkbox clicked.
    ToggleCategory { category: String },
    /// Price slider moved.
    SetPriceRange { range: PriceRange },
    /// Search box edited.
    SetSearch { text: String },
    /// Sort menu changed.
    SetSort { sort: SortKey },
    /// Mobile filter panel toggled.
    ToggleFilters,
    /// Mobile navigation menu toggled.
    ToggleMenu,
    /// "Add to cart" pressed on a product card.
    AddToCart { id: ProductId },
    /// Quantity stepper pressed.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// Remove button pressed on a cart line.
    RemoveItem { id: ProductId },
    /// Cart sheet opened.
    OpenCart,
    /// Cart sheet closed.
    CloseCart,
    /// Checkout pressed.
    Checkout,
    /// Sign-in dialog opened on a tab.
    OpenAuth { tab: AuthTab },
    /// Sign-in dialog tab switched.
    SwitchAuthTab { tab: AuthTab },
    /// Sign-in or registration form submitted.
    SubmitAuth,
    /// Sign-in dialog dismissed.
    CloseAuth,
}

/// Outcome of a dispatched command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The visible product list may have changed.
    QueryChanged { visible: usize },
    /// Cart contents changed.
    CartChanged { item_count: u64 },
    /// A quantity update was rejected; the cart is unchanged.
    QuantityRejected { id: ProductId, quantity: i64 },
    /// A command named a product the catalog or cart does not hold.
    UnknownProduct { id: ProductId },
    /// Checkout was requested. Carries no data; the handler reads the cart.
    CheckoutRequested,
    CartOpened,
    CartClosed,
    FiltersToggled { open: bool },
    MenuToggled { open: bool },
    AuthOpened { tab: AuthTab },
    /// A sign-in or registration form was submitted.
    AuthSubmitted { tab: AuthTab },
    AuthClosed,
}
