//! Catalog search module.
//!
//! Contains the catalog query (category, price, text, sort) and the engine
//! that turns a product list and a query into the list to display.

mod filter;
mod query;
mod select;

pub use filter::{CategorySelection, PriceRange, DEFAULT_MAX_PRICE};
pub use query::{CatalogQuery, SortKey};
pub use select::{select, select_refs};
