//! Product catalog module.
//!
//! Contains types for products, the product listing, and categories.

mod catalog;
mod category;
mod product;

pub use catalog::Catalog;
pub use category::{category_counts, is_all, ALL_CATEGORIES, DEFAULT_CATEGORIES};
pub use product::{Product, MAX_RATING};
