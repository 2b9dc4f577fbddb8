//! Filter building blocks: category selection and price range.

use crate::catalog::{is_all, ALL_CATEGORIES};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Selected categories.
///
/// Never empty: an empty selection collapses to the "All" sentinel, which
/// places no restriction on category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySelection(Vec<String>);

impl CategorySelection {
    /// The unrestricted selection, {"All"}.
    pub fn all() -> Self {
        Self(vec![ALL_CATEGORIES.to_string()])
    }

    /// A selection of exactly one category.
    pub fn only(category: impl Into<String>) -> Self {
        Self::from(vec![category.into()])
    }

    /// Check whether the selection places no restriction.
    pub fn is_all(&self) -> bool {
        self.0.iter().any(|c| is_all(c))
    }

    /// Check whether a category is selected (the sentinel itself included).
    pub fn contains(&self, category: &str) -> bool {
        self.0.iter().any(|c| c == category)
    }

    /// Check whether a product in `category` passes this selection.
    pub fn matches(&self, category: &str) -> bool {
        self.is_all() || self.contains(category)
    }

    /// Selected names, in selection order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Apply a checkbox toggle.
    ///
    /// - Toggling "All" resets to {"All"}.
    /// - Toggling a category while "All" is selected selects only that category.
    /// - Otherwise the category is added, or removed if already selected.
    /// - Removing the last category reverts to {"All"}.
    pub fn toggle(&mut self, category: &str) {
        if is_all(category) {
            *self = Self::all();
            return;
        }

        let next = if self.is_all() {
            vec![category.to_string()]
        } else if self.contains(category) {
            self.0.iter().filter(|c| *c != category).cloned().collect()
        } else {
            let mut next = self.0.clone();
            next.push(category.to_string());
            next
        };

        *self = Self::from(next);
    }
}

impl Default for CategorySelection {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Vec<String>> for CategorySelection {
    fn from(mut categories: Vec<String>) -> Self {
        let mut seen = Vec::with_capacity(categories.len());
        categories.retain(|c| {
            if seen.contains(c) {
                false
            } else {
                seen.push(c.clone());
                true
            }
        });

        if categories.is_empty() {
            Self::all()
        } else {
            Self(categories)
        }
    }
}

impl From<CategorySelection> for Vec<String> {
    fn from(selection: CategorySelection) -> Self {
        selection.0
    }
}

impl FromIterator<String> for CategorySelection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Default upper bound of the price slider.
pub const DEFAULT_MAX_PRICE: i64 = 200;

/// Inclusive price bounds.
///
/// Crossed bounds are representable on purpose: a range with `min > max`
/// matches no product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound, inclusive.
    pub min: Money,
    /// Upper bound, inclusive.
    pub max: Money,
}

impl PriceRange {
    /// Build a range without checking the bounds.
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Build a range from slider input, rejecting crossed or negative bounds.
    pub fn try_new(min: Money, max: Money) -> Result<Self, CommerceError> {
        if min.currency != max.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: min.currency.code().to_string(),
                got: max.currency.code().to_string(),
            });
        }
        if min.amount > max.amount || min.is_negative() || max.is_negative() {
            return Err(CommerceError::InvalidPriceRange {
                min: min.display_amount(),
                max: max.display_amount(),
            });
        }
        Ok(Self { min, max })
    }

    /// The storefront's default slider range, [0, 200].
    pub fn default_for(currency: Currency) -> Self {
        Self::new(
            Money::zero(currency),
            Money::new(Decimal::from(DEFAULT_MAX_PRICE), currency),
        )
    }

    /// Check whether any price can satisfy this range.
    pub fn is_satisfiable(&self) -> bool {
        self.min.currency == self.max.currency && self.min.amount <= self.max.amount
    }

    /// Check whether `price` lies within the bounds, both ends inclusive.
    ///
    /// Prices in a different currency never match.
    pub fn contains(&self, price: &Money) -> bool {
        price.currency == self.min.currency
            && price.currency == self.max.currency
            && self.min.amount <= price.amount
            && price.amount <= self.max.amount
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::default_for(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::from_cents(cents, Currency::USD)
    }

    fn names(selection: &CategorySelection) -> Vec<&str> {
        selection.as_slice().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_default_selection_is_all() {
        let selection = CategorySelection::default();
        assert!(selection.is_all());
        assert!(selection.matches("Anything"));
    }

    #[test]
    fn test_empty_selection_collapses_to_all() {
        let selection = CategorySelection::from(Vec::new());
        assert_eq!(names(&selection), vec!["All"]);
    }

    #[test]
    fn test_toggle_from_all_selects_only_category() {
        let mut selection = CategorySelection::all();
        selection.toggle("Fashion");
        assert_eq!(names(&selection), vec!["Fashion"]);
        assert!(!selection.matches("Home"));
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut selection = CategorySelection::only("Fashion");
        selection.toggle("Home");
        assert_eq!(names(&selection), vec!["Fashion", "Home"]);

        selection.toggle("Fashion");
        assert_eq!(names(&selection), vec!["Home"]);
    }

    #[test]
    fn test_deselecting_last_reverts_to_all() {
        let mut selection = CategorySelection::only("Home");
        selection.toggle("Home");
        assert!(selection.is_all());
        assert_eq!(names(&selection), vec!["All"]);
    }

    #[test]
    fn test_toggle_all_resets() {
        let mut selection = CategorySelection::from(vec!["Home".to_string(), "Books".to_string()]);
        selection.toggle("All");
        assert_eq!(names(&selection), vec!["All"]);
    }

    #[test]
    fn test_duplicates_removed() {
        let selection: CategorySelection =
            vec!["Home".to_string(), "Home".to_string()].into_iter().collect();
        assert_eq!(names(&selection), vec!["Home"]);
    }

    #[test]
    fn test_selection_deserialize_collapses_empty() {
        let selection: CategorySelection = serde_json::from_str("[]").unwrap();
        assert!(selection.is_all());
    }

    #[test]
    fn test_price_range_inclusive() {
        let range = PriceRange::new(usd(4999), usd(12999));
        assert!(range.contains(&usd(4999)));
        assert!(range.contains(&usd(12999)));
        assert!(!range.contains(&usd(4998)));
        assert!(!range.contains(&usd(13000)));
    }

    #[test]
    fn test_crossed_range_matches_nothing() {
        let range = PriceRange::new(usd(10000), usd(5000));
        assert!(!range.is_satisfiable());
        assert!(!range.contains(&usd(7500)));
        assert!(!range.contains(&usd(10000)));
    }

    #[test]
    fn test_try_new_validates() {
        assert!(PriceRange::try_new(usd(0), usd(20000)).is_ok());
        assert!(matches!(
            PriceRange::try_new(usd(200), usd(100)),
            Err(CommerceError::InvalidPriceRange { .. })
        ));
        assert!(PriceRange::try_new(usd(-100), usd(100)).is_err());
        assert!(matches!(
            PriceRange::try_new(usd(0), Money::from_cents(100, Currency::EUR)),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_other_currency_never_matches() {
        let range = PriceRange::default();
        assert!(!range.contains(&Money::from_cents(100, Currency::EUR)));
    }

    #[test]
    fn test_default_range() {
        let range = PriceRange::default();
        assert_eq!(range.min, usd(0));
        assert_eq!(range.max, usd(20000));
    }
}
