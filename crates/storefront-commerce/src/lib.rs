//! Storefront domain types and logic.
//!
//! This crate provides the computational core of a storefront:
//!
//! - **Catalog**: Products and the known category set
//! - **Search**: Category/price/text filtering and sort order over a catalog
//! - **Cart**: Line items, quantity updates, and running totals
//! - **Storefront**: Presentation state driven by explicit commands
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//!
//! // Electronics under $150, cheapest first
//! let query = CatalogQuery::new()
//!     .with_categories(CategorySelection::only("Electronics"))
//!     .with_price_range(PriceRange::new(Money::zero(Currency::USD), Money::from_cents(15000, Currency::USD)))
//!     .with_sort(SortKey::PriceAsc);
//! let visible = select(catalog.products(), &query);
//! assert_eq!(visible.len(), 2);
//!
//! // Add the first result to a cart and price it
//! let cart = add_product(&[], &visible[0]);
//! let totals = compute_totals(&cart, &PricingPolicy::default());
//! assert_eq!(totals.item_count, 1);
//! println!("Total: {}", totals.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Product, ALL_CATEGORIES};

    // Search
    pub use crate::search::{select, CatalogQuery, CategorySelection, PriceRange, SortKey};

    // Cart
    pub use crate::cart::{
        add_product, compute_totals, item_count, remove_item, update_quantity, CartTotals,
        LineItem, PricingPolicy,
    };

    // Storefront
    pub use crate::storefront::{AuthTab, Command, Event, Storefront};
}
