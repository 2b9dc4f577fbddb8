//! Catalog browsing command.

use anyhow::Result;
use storefront_commerce::search::PriceRange;
use storefront_commerce::storefront::Command;
use storefront_commerce::Money;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{format_price, format_rating};

const COLUMN_WIDTHS: [usize; 5] = [6, 24, 14, 10, 6];

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront(args.catalog.as_deref())?;

    if !args.categories.is_empty() {
        store.query.categories = args.categories.into_iter().collect();
    }

    let current = store.query.price_range;
    let currency = store.policy().currency();
    let range = PriceRange::new(
        args.min.map(|m| Money::new(m, currency)).unwrap_or(current.min),
        args.max.map(|m| Money::new(m, currency)).unwrap_or(current.max),
    );
    if !range.is_satisfiable() {
        ctx.output.warn(&format!(
            "Price range {} to {} is empty",
            range.min.display(),
            range.max.display()
        ));
    }
    store.dispatch(Command::SetPriceRange { range });
    store.dispatch(Command::SetSearch { text: args.search });
    store.dispatch(Command::SetSort { sort: args.sort });

    let products = store.visible_products();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} of {} products ({})",
        products.len(),
        store.catalog().len(),
        store.query.sort.display_name()
    ));

    if products.is_empty() {
        ctx.output.info("No products found");
        ctx.output.info("Try adjusting your filters or search query");
        return Ok(());
    }

    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "RATING"], &COLUMN_WIDTHS);
    for product in &products {
        let price = format_price(&product.price, COLUMN_WIDTHS[3]);
        let rating = format_rating(product.rating);
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                &product.category,
                &price,
                &rating,
            ],
            &COLUMN_WIDTHS,
        );
    }

    Ok(())
}
