//! Line items and cart list operations.
//!
//! The cart is a caller-owned `Vec<LineItem>`. Every operation here takes a
//! snapshot of the list and returns the next list; nothing is mutated in
//! place and nothing is retained.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Image reference (denormalized for display).
    #[serde(default)]
    pub image: String,
}

impl LineItem {
    /// Create a line item for one unit of a product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
            image: product.image.clone(),
        }
    }

    /// Unit price times quantity, unrounded.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.try_multiply(self.quantity)
    }
}

/// Add one unit of a product.
///
/// Increments the existing line for the product, or appends a new line with
/// quantity 1. A line already at `u32::MAX` stays there.
pub fn add_product(items: &[LineItem], product: &Product) -> Vec<LineItem> {
    let mut next = items.to_vec();
    match next.iter_mut().find(|i| i.product_id == product.id) {
        Some(existing) => {
            existing.quantity = existing.quantity.saturating_add(1);
        }
        None => next.push(LineItem::from_product(product)),
    }
    next
}

/// Set a line's quantity.
///
/// Rejected, returning the list unchanged, when `quantity` is below 1 or
/// does not fit a `u32`, or when no line has the id. Reaching
/// zero never removes a line; see [`remove_item`].
pub fn update_quantity(items: &[LineItem], id: &ProductId, quantity: i64) -> Vec<LineItem> {
    let mut next = items.to_vec();
    let Some(quantity) = valid_quantity(quantity) else {
        return next;
    };
    if let Some(item) = next.iter_mut().find(|i| &i.product_id == id) {
        item.quantity = quantity;
    }
    next
}

/// Remove the line with the given id. No-op if absent.
pub fn remove_item(items: &[LineItem], id: &ProductId) -> Vec<LineItem> {
    items.iter().filter(|i| &i.product_id != id).cloned().collect()
}

/// Total number of units (the cart badge count).
pub fn item_count(items: &[LineItem]) -> u64 {
    items.iter().map(|i| u64::from(i.quantity)).sum()
}

/// Check whether a requested quantity would be accepted.
pub fn valid_quantity(quantity: i64) -> Option<u32> {
    u32::try_from(quantity)
        .ok()
        .filter(|q| *q >= 1)
}
