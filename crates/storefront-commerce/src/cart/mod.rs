//! Shopping cart module.
//!
//! Contains line items, the list operations behind the cart controls, and
//! the totals calculator.

mod cart;
mod pricing;

pub use cart::{add_product, item_count, remove_item, update_quantity, valid_quantity, LineItem};
pub use pricing::{
    compute_totals, CartTotals, PricingPolicy, DEFAULT_SHIPPING_CENTS, DEFAULT_TAX_RATE_BPS,
};
