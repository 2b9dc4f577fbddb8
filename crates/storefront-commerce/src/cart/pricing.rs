//! Cart pricing calculations.

use crate::cart::LineItem;
use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat shipping fee in cents, charged once per order.
pub const DEFAULT_SHIPPING_CENTS: i64 = 999;

/// Tax rate in basis points, applied to the subtotal only.
pub const DEFAULT_TAX_RATE_BPS: i64 = 800;

/// Store pricing policy.
///
/// Shipping is charged even on an empty cart, and tax is computed on the
/// pre-shipping subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    shipping_fee: Money,
    tax_rate: Decimal,
}

impl PricingPolicy {
    /// Create a policy. Totals are computed in the shipping fee's currency.
    pub fn new(shipping_fee: Money, tax_rate: Decimal) -> Self {
        Self {
            shipping_fee,
            tax_rate,
        }
    }

    /// Currency every total is computed in.
    pub fn currency(&self) -> Currency {
        self.shipping_fee.currency
    }

    /// Flat shipping fee.
    pub fn shipping_fee(&self) -> Money {
        self.shipping_fee
    }

    /// Tax rate as a fraction (0.08 = 8%).
    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Compute totals for a list of line items under this policy.
    pub fn compute(&self, items: &[LineItem]) -> CartTotals {
        compute_totals(items, self)
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::new(
            Money::from_cents(DEFAULT_SHIPPING_CENTS, Currency::USD),
            Decimal::new(DEFAULT_TAX_RATE_BPS, 4),
        )
    }
}

/// Pricing breakdown for a cart.
///
/// Amounts are exact; round with [`Money::display`] when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of unit price times quantity.
    pub subtotal: Money,
    /// Flat shipping fee.
    pub shipping: Money,
    /// Subtotal times tax rate.
    pub tax: Money,
    /// Subtotal plus shipping plus tax.
    pub total: Money,
    /// Total units in the cart.
    pub item_count: u64,
}

/// Compute subtotal, shipping, tax, and total.
///
/// Never fails. Lines priced in another currency than the policy's, or whose
/// amount would overflow, are left out of the subtotal and the item count,
/// and logged.
pub fn compute_totals(items: &[LineItem], policy: &PricingPolicy) -> CartTotals {
    let currency = policy.currency();

    let mut priced: u64 = 0;
    let subtotal = items.iter().fold(Money::zero(currency), |acc, item| {
        match item.line_total().and_then(|line| acc.try_add(&line)) {
            Some(sum) => {
                priced += u64::from(item.quantity);
                sum
            }
            None => {
                tracing::warn!(
                    product_id = %item.product_id,
                    currency = %item.unit_price.currency,
                    expected = %currency,
                    "line item left out of subtotal"
                );
                acc
            }
        }
    });

    let tax = subtotal
        .try_scale(policy.tax_rate())
        .unwrap_or_else(|| Money::zero(currency));
    let shipping = policy.shipping_fee();
    let total = [shipping, tax]
        .iter()
        .try_fold(subtotal, |acc, m| acc.try_add(m))
        .unwrap_or(subtotal);

    let totals = CartTotals {
        subtotal,
        shipping,
        tax,
        total,
        item_count: priced,
    };
    tracing::debug!(
        lines = items.len(),
        items = totals.item_count,
        total = %totals.total,
        "cart totals computed"
    );
    totals
}
