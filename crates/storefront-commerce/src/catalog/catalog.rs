//! Product collection with its known category set.

use std::collections::HashSet;

use crate::catalog::category::{ALL_CATEGORIES, DEFAULT_CATEGORIES};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

const DEMO_CATALOG: &str = include_str!("../../data/demo_catalog.json");

/// An ordered product listing.
///
/// Order is the "featured" order: the query engine preserves it when no
/// sort key is applied.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    /// Known categories, "All" first.
    categories: Vec<String>,
    /// Products in featured order.
    products: Vec<Product>,
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl Catalog {
    /// Build a catalog, validating every product and rejecting duplicate ids.
    ///
    /// The "All" sentinel is inserted at the front of the category list if
    /// missing, repeated names keep their first position, and product
    /// categories absent from the list are appended.
    pub fn new(categories: Vec<String>, products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.as_str()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }

        let mut known = vec![ALL_CATEGORIES.to_string()];
        let listed = categories.into_iter();
        let used = products.iter().map(|p| p.category.clone());
        for category in listed.chain(used) {
            if !known.contains(&category) {
                known.push(category);
            }
        }
        let categories = known;

        Ok(Self { categories, products })
    }

    /// Parse and validate a catalog document.
    ///
    /// Accepts either `{"categories": [...], "products": [...]}` or a bare
    /// product array (categories then default to the storefront set).
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Document {
            Full {
                #[serde(default = "default_categories")]
                categories: Vec<String>,
                products: Vec<Product>,
            },
            Products(Vec<Product>),
        }

        let (categories, products) = match serde_json::from_str::<Document>(json)? {
            Document::Full { categories, products } => (categories, products),
            Document::Products(products) => (default_categories(), products),
        };
        Self::new(categories, products)
    }

    /// The bundled demo catalog.
    pub fn demo() -> Self {
        // The bundled document is checked by `test_demo_catalog_loads`.
        Self::from_json(DEMO_CATALOG).unwrap_or_else(|_| Self::empty())
    }

    /// A catalog with the default categories and no products.
    pub fn empty() -> Self {
        Self {
            categories: default_categories(),
            products: Vec::new(),
        }
    }

    /// Products in featured order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Known categories, "All" first.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}
