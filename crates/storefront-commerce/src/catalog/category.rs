//! Category names and per-category counts.

use crate::catalog::Product;

/// Sentinel category meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "All";

/// Default category set offered by the storefront filter panel.
pub const DEFAULT_CATEGORIES: [&str; 6] =
    [ALL_CATEGORIES, "Electronics", "Fashion", "Home", "Books", "Sports"];

/// Check whether a name is the "All" sentinel.
pub fn is_all(category: &str) -> bool {
    category == ALL_CATEGORIES
}

/// Count products per category, in the order of `categories`.
///
/// The sentinel counts every product. Categories with no products report 0.
pub fn category_counts<'a>(categories: &'a [String], products: &[Product]) -> Vec<(&'a str, usize)> {
    categories
        .iter()
        .map(|c| {
            let count = if is_all(c) {
                products.len()
            } else {
                products.iter().filter(|p| &p.category == c).count()
            };
            (c.as_str(), count)
        })
        .collect()
}
