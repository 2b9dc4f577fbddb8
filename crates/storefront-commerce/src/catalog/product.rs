//! Product type.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog.
///
/// Products are owned by the catalog's data source and never mutated once
/// listed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image URL or asset reference.
    #[serde(default)]
    pub image: String,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f64,
    /// Category name (a member of the catalog's category set).
    pub category: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Create a new product with no image, rating, or description.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: String::new(),
            rating: 0.0,
            category: category.into(),
            description: String::new(),
        }
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Check the listing invariants: non-empty id, non-negative price,
    /// rating within 0..=5.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let invalid = |reason: &str| CommerceError::InvalidProduct {
            id: self.id.to_string(),
            reason: reason.to_string(),
        };

        if self.id.is_empty() {
            return Err(invalid("empty id"));
        }
        if self.price.is_negative() {
            return Err(invalid("negative price"));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(invalid("rating must be between 0 and 5"));
        }
        Ok(())
    }
}
