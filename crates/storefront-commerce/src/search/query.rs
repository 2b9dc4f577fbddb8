//! Catalog query builder.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::search::{CategorySelection, PriceRange};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort keys offered by the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order, untouched.
    #[default]
    Featured,
    /// Sort by price, low to high.
    #[serde(rename = "price-low-high")]
    PriceAsc,
    /// Sort by price, high to low.
    #[serde(rename = "price-high-low")]
    PriceDesc,
    /// Sort by highest rated.
    #[serde(rename = "rating")]
    RatingDesc,
}

impl SortKey {
    /// All sort keys, in menu order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Featured,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-low-high",
            SortKey::PriceDesc => "price-high-low",
            SortKey::RatingDesc => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Top Rated",
        }
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CommerceError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog query: which products to show and in what order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogQuery {
    /// Selected categories.
    #[serde(default)]
    pub categories: CategorySelection,
    /// Inclusive price bounds.
    #[serde(default)]
    pub price_range: PriceRange,
    /// Case-insensitive substring searched in name and description.
    #[serde(default)]
    pub search: String,
    /// Sort order applied after filtering.
    #[serde(default)]
    pub sort: SortKey,
}

impl CatalogQuery {
    /// Create the unrestricted default query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category selection.
    pub fn with_categories(mut self, categories: CategorySelection) -> Self {
        self.categories = categories;
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Check category, price, and search predicates together.
    pub fn matches(&self, product: &Product) -> bool {
        self.matcher().matches(product)
    }

    pub(crate) fn matcher(&self) -> Matcher<'_> {
        Matcher {
            query: self,
            needle: self.search.to_lowercase(),
        }
    }
}

/// A query with its search text lowercased once.
pub(crate) struct Matcher<'a> {
    query: &'a CatalogQuery,
    needle: String,
}

impl Matcher<'_> {
    pub(crate) fn matches(&self, product: &Product) -> bool {
        self.query.categories.matches(&product.category)
            && self.query.price_range.contains(&product.price)
            && self.matches_search(product)
    }

    fn matches_search(&self, product: &Product) -> bool {
        self.needle.is_empty()
            || product.name.to_lowercase().contains(&self.needle)
            || product.description.to_lowercase().contains(&self.needle)
    }
}
