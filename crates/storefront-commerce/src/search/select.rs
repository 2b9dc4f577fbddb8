//! The catalog query engine.

use std::cmp::Ordering;

use crate::catalog::Product;
use crate::search::{CatalogQuery, SortKey};

/// Select the products a query shows, in display order.
///
/// Filtering keeps products that pass the category, price, and search
/// predicates. Sorting is stable and runs only for non-featured keys, so
/// ties and the featured order keep the input's relative order. The input
/// is never modified.
pub fn select(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    select_refs(products, query).into_iter().cloned().collect()
}

/// Like [`select`], borrowing from the input instead of cloning.
pub fn select_refs<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    let matcher = query.matcher();
    let mut selected: Vec<&Product> = products.iter().filter(|p| matcher.matches(p)).collect();

    if let Some(compare) = comparator(query.sort) {
        selected.sort_by(|a, b| compare(a, b));
    }

    tracing::debug!(
        input = products.len(),
        selected = selected.len(),
        sort = query.sort.as_str(),
        "catalog query evaluated"
    );
    selected
}

type Comparator = fn(&Product, &Product) -> Ordering;

fn comparator(sort: SortKey) -> Option<Comparator> {
    match sort {
        SortKey::Featured => None,
        SortKey::PriceAsc => Some(price_ascending as Comparator),
        SortKey::PriceDesc => Some(price_descending as Comparator),
        SortKey::RatingDesc => Some(rating_descending as Comparator),
    }
}

fn price_ascending(a: &Product, b: &Product) -> Ordering {
    a.price.amount.cmp(&b.price.amount)
}

fn price_descending(a: &Product, b: &Product) -> Ordering {
    b.price.amount.cmp(&a.price.amount)
}

// Total order, so an unvalidated NaN rating sorts first instead of breaking the sort.
fn rating_descending(a: &Product, b: &Product) -> Ordering {
    b.rating.total_cmp(&a.rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::money::{Currency, Money};
    use crate::search::{CategorySelection, PriceRange};

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    fn usd(cents: i64) -> Money {
        Money::from_cents(cents, Currency::USD)
    }

    #[test]
    fn test_default_query_shows_whole_catalog_in_order() {
        let catalog = Catalog::demo();
        let selected = select(catalog.products(), &CatalogQuery::new());
        assert_eq!(ids(&selected), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::demo();
        let query = CatalogQuery::new().with_categories(CategorySelection::only("Fashion"));
        assert_eq!(ids(&select(catalog.products(), &query)), vec!["3", "5"]);
    }

    #[test]
    fn test_multiple_categories() {
        let catalog = Catalog::demo();
        let query = CatalogQuery::new().with_categories(
            vec!["Home".to_string(), "Fashion".to_string()].into_iter().collect(),
        );
        assert_eq!(ids(&select(catalog.products(), &query)), vec!["3", "4", "5"]);
    }

    #[test]
    fn test_all_overrides_earlier_category_choices() {
        let catalog = Catalog::demo();
        let mut categories = CategorySelection::only("Fashion");
        categories.toggle("Home");
        categories.toggle("All");
        let query = CatalogQuery::new().with_categories(categories);
        assert_eq!(select(catalog.products(), &query).len(), catalog.len());
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let catalog = Catalog::demo();
        let query = CatalogQuery::new().with_price_range(PriceRange::new(usd(5999), usd(8999)));
        assert_eq!(ids(&select(catalog.products(), &query)), vec!["3", "4", "6"]);
    }

    #[test]
    fn test_crossed_price_bounds_select_nothing() {
        let catalog = Catalog::demo();
        let query = CatalogQuery::new().with_price_range(PriceRange::new(usd(20000), usd(0)));
        assert!(select(catalog.products(), &query).is_empty());
    }

    #[test]
    fn test_search_name_and_description() {
        let catalog = Catalog::demo();
        let by_name = CatalogQuery::new().with_search("SHOES");
        assert_eq!(ids(&select(catalog.products(), &by_name)), vec!["3"]);

        let by_description = CatalogQuery::new().with_search("battery");
        assert_eq!(ids(&select(catalog.products(), &by_description)), vec!["6"]);
    }

    #[test]
    fn test_sort_price_ascending() {
        let catalog = Catalog::demo();
        let query = CatalogQuery::new().with_sort(SortKey::PriceAsc);
        assert_eq!(ids(&select(catalog.products(), &query)), vec!["5", "4", "6", "3", "1", "2"]);
    }

    #[test]
    fn test_sort_price_descending() {
        let catalog = Catalog::demo();
        let query = CatalogQuery::new().with_sort(SortKey::PriceDesc);
        assert_eq!(ids(&select(catalog.products(), &query)), vec!["2", "1", "3", "6", "4", "5"]);
    }

    #[test]
    fn test_sort_rating_descending() {
        let catalog = Catalog::demo();
        let query = CatalogQuery::new().with_sort(SortKey::RatingDesc);
        assert_eq!(ids(&select(catalog.products(), &query)), vec!["3", "1", "5", "2", "6", "4"]);
    }

    #[test]
    fn test_sort_ties_keep_input_order() {
        let products = vec![
            Product::new("a", "A", usd(1000), "Home").with_rating(4.0),
            Product::new("b", "B", usd(500), "Home").with_rating(4.0),
            Product::new("c", "C", usd(1000), "Home").with_rating(4.0),
        ];
        let by_price = CatalogQuery::new().with_sort(SortKey::PriceAsc);
        assert_eq!(ids(&select(&products, &by_price)), vec!["b", "a", "c"]);

        let by_rating = CatalogQuery::new().with_sort(SortKey::RatingDesc);
        assert_eq!(ids(&select(&products, &by_rating)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rating_sort_with_nan_is_ordered() {
        let products = vec![
            Product::new("a", "A", usd(1000), "Home").with_rating(4.0),
            Product::new("b", "B", usd(1000), "Home").with_rating(f64::NAN),
            Product::new("c", "C", usd(1000), "Home").with_rating(5.0),
            Product::new("d", "D", usd(1000), "Home").with_rating(4.0),
        ];
        let query = CatalogQuery::new().with_sort(SortKey::RatingDesc);
        assert_eq!(ids(&select(&products, &query)), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(select(&[], &CatalogQuery::new()).is_empty());
        let catalog = Catalog::demo();
        let query = CatalogQuery::new().with_search("no such product");
        assert!(select(catalog.products(), &query).is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let catalog = Catalog::demo();
        let before = catalog.products().to_vec();
        let query = CatalogQuery::new().with_sort(SortKey::PriceDesc);
        let _ = select(catalog.products(), &query);
        assert_eq!(catalog.products(), before.as_slice());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const CATEGORIES: [&str; 4] = ["Electronics", "Fashion", "Home", "Books"];

        fn arb_product(index: usize) -> impl Strategy<Value = Product> {
            (0i64..30_000, 0u8..=50, 0usize..CATEGORIES.len(), "[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,24}")
                .prop_map(move |(cents, rating, category, name, description)| {
                    Product::new(
                        format!("p{index}"),
                        name,
                        Money::from_cents(cents, Currency::USD),
                        CATEGORIES[category],
                    )
                    .with_rating(f64::from(rating) / 10.0)
                    .with_description(description)
                })
        }

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            (0usize..20).prop_flat_map(|n| (0..n).map(arb_product).collect::<Vec<_>>())
        }

        fn arb_sort() -> impl Strategy<Value = SortKey> {
            prop::sample::select(SortKey::ALL.to_vec())
        }

        fn arb_query() -> impl Strategy<Value = CatalogQuery> {
            (
                prop::collection::vec(prop::sample::select(vec!["All", "Electronics", "Fashion", "Home", "Books", "Garden"]), 0..3),
                0i64..30_000,
                0i64..30_000,
                "[a-z]{0,2}",
                arb_sort(),
            )
                .prop_map(|(categories, min, max, search, sort)| {
                    CatalogQuery::new()
                        .with_categories(categories.into_iter().map(String::from).collect())
                        .with_price_range(PriceRange::new(
                            Money::from_cents(min, Currency::USD),
                            Money::from_cents(max, Currency::USD),
                        ))
                        .with_search(search)
                        .with_sort(sort)
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: every selected product comes from the input and passes all predicates.
            #[test]
            fn selection_is_a_matching_subset(products in arb_products(), query in arb_query()) {
                let selected = select(&products, &query);
                prop_assert!(selected.len() <= products.len());
                for p in &selected {
                    prop_assert!(products.contains(p));
                    prop_assert!(query.categories.matches(&p.category));
                    prop_assert!(query.price_range.contains(&p.price));
                    prop_assert!(query.matches(p));
                }
                let expected = products.iter().filter(|p| query.matches(p)).count();
                prop_assert_eq!(selected.len(), expected);
            }

            /// Property: featured order is the input's relative order.
            #[test]
            fn featured_preserves_order(products in arb_products(), query in arb_query()) {
                let query = query.with_sort(SortKey::Featured);
                let selected = select(&products, &query);
                let expected: Vec<Product> = products.iter().filter(|p| query.matches(p)).cloned().collect();
                prop_assert_eq!(selected, expected);
            }

            /// Property: sorted keys yield monotone sequences.
            #[test]
            fn sort_keys_are_monotone(products in arb_products(), query in arb_query()) {
                let selected = select(&products, &query);
                for pair in selected.windows(2) {
                    match query.sort {
                        SortKey::PriceAsc => prop_assert!(pair[0].price.amount <= pair[1].price.amount),
                        SortKey::PriceDesc => prop_assert!(pair[0].price.amount >= pair[1].price.amount),
                        SortKey::RatingDesc => prop_assert!(pair[0].rating >= pair[1].rating),
                        SortKey::Featured => {}
                    }
                }
            }

            /// Property: repeated calls return identical output.
            #[test]
            fn select_is_idempotent(products in arb_products(), query in arb_query()) {
                prop_assert_eq!(select(&products, &query), select(&products, &query));
            }
        }
    }
}
