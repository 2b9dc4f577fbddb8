//! Storefront presentation state.

use crate::cart::{self, compute_totals, CartTotals, LineItem, PricingPolicy};
use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;
use crate::search::{select, CatalogQuery, PriceRange};
use crate::storefront::{AuthTab, Command, Event};

/// All mutable state behind one storefront page.
///
/// The query engine and the totals calculator are re-run from this state
/// after every command; nothing here caches derived values.
#[derive(Debug, Clone, PartialEq)]
pub struct Storefront {
    catalog: Catalog,
    policy: PricingPolicy,
    /// Current catalog query.
    pub query: CatalogQuery,
    /// Cart line items.
    pub cart: Vec<LineItem>,
    /// Whether the cart sheet is open.
    pub cart_open: bool,
    /// Whether the mobile filter panel is open.
    pub filters_open: bool,
    /// Whether the mobile navigation menu is open.
    pub menu_open: bool,
    /// Open sign-in dialog tab, if the dialog is shown.
    pub auth: Option<AuthTab>,
}

impl Storefront {
    /// Create a storefront over a catalog with the default query and an
    /// empty cart. The price slider starts at [0, 200] in the policy currency.
    pub fn new(catalog: Catalog, policy: PricingPolicy) -> Self {
        let query =
            CatalogQuery::new().with_price_range(PriceRange::default_for(policy.currency()));
        Self {
            catalog,
            policy,
            query,
            cart: Vec::new(),
            cart_open: false,
            filters_open: false,
            menu_open: false,
            auth: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Products the catalog view shows for the current query.
    pub fn visible_products(&self) -> Vec<Product> {
        select(self.catalog.products(), &self.query)
    }

    /// Totals the cart sheet shows for the current cart.
    pub fn totals(&self) -> CartTotals {
        compute_totals(&self.cart, &self.policy)
    }

    /// Number of units shown on the cart badge.
    pub fn badge_count(&self) -> u64 {
        cart::item_count(&self.cart)
    }

    /// Apply a command and report what changed.
    pub fn dispatch(&mut self, command: Command) -> Vec<Event> {
        tracing::debug!(?command, "dispatching storefront command");

        match command {
            Command::ToggleCategory { category } => {
                self.query.categories.toggle(&category);
                vec![self.query_changed()]
            }
            Command::SetPriceRange { range } => {
                self.query.price_range = range;
                vec![self.query_changed()]
            }
            Command::SetSearch { text } => {
                self.query.search = text;
                vec![self.query_changed()]
            }
            Command::SetSort { sort } => {
                self.query.sort = sort;
                vec![self.query_changed()]
            }
            Command::ToggleFilters => {
                self.filters_open = !self.filters_open;
                vec![Event::FiltersToggled { open: self.filters_open }]
            }
            Command::ToggleMenu => {
                self.menu_open = !self.menu_open;
                vec![Event::MenuToggled { open: self.menu_open }]
            }
            Command::AddToCart { id } => self.add_to_cart(id),
            Command::UpdateQuantity { id, quantity } => self.update_quantity(id, quantity),
            Command::RemoveItem { id } => self.remove_item(id),
            Command::OpenCart => {
                self.cart_open = true;
                vec![Event::CartOpened]
            }
            Command::CloseCart => {
                self.cart_open = false;
                vec![Event::CartClosed]
            }
            Command::Checkout => {
                tracing::info!(items = self.badge_count(), "checkout requested");
                let mut events = Vec::new();
                if self.cart_open {
                    self.cart_open = false;
                    events.push(Event::CartClosed);
                }
                events.push(Event::CheckoutRequested);
                events
            }
            Command::OpenAuth { tab } => {
                self.auth = Some(tab);
                vec![Event::AuthOpened { tab }]
            }
            Command::SwitchAuthTab { tab } => match self.auth {
                Some(_) => {
                    self.auth = Some(tab);
                    vec![Event::AuthOpened { tab }]
                }
                None => Vec::new(),
            },
            Command::SubmitAuth => match self.auth.take() {
                Some(tab) => {
                    tracing::info!(tab = tab.as_str(), "auth form submitted");
                    vec![Event::AuthSubmitted { tab }, Event::AuthClosed]
                }
                None => Vec::new(),
            },
            Command::CloseAuth => match self.auth.take() {
                Some(_) => vec![Event::AuthClosed],
                None => Vec::new(),
            },
        }
    }

    fn query_changed(&self) -> Event {
        Event::QueryChanged {
            visible: crate::search::select_refs(self.catalog.products(), &self.query).len(),
        }
    }

    fn cart_changed(&self) -> Event {
        Event::CartChanged {
            item_count: self.badge_count(),
        }
    }

    fn add_to_cart(&mut self, id: ProductId) -> Vec<Event> {
        let Some(product) = self.catalog.get(&id) else {
            tracing::warn!(product_id = %id, "add to cart for unknown product");
            return vec![Event::UnknownProduct { id }];
        };
        self.cart = cart::add_product(&self.cart, product);
        vec![self.cart_changed()]
    }

    fn update_quantity(&mut self, id: ProductId, quantity: i64) -> Vec<Event> {
        if !self.cart.iter().any(|i| i.product_id == id) {
            return vec![Event::UnknownProduct { id }];
        }
        if cart::valid_quantity(quantity).is_none() {
            tracing::info!(product_id = %id, quantity, "quantity update rejected");
            return vec![Event::QuantityRejected { id, quantity }];
        }
        self.cart = cart::update_quantity(&self.cart, &id, quantity);
        vec![self.cart_changed()]
    }

    fn remove_item(&mut self, id: ProductId) -> Vec<Event> {
        let next = cart::remove_item(&self.cart, &id);
        if next.len() == self.cart.len() {
            return vec![Event::UnknownProduct { id }];
        }
        self.cart = next;
        vec![self.cart_changed()]
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(Catalog::demo(), PricingPolicy::default())
    }
}
