//! Category listing command.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::catalog::category_counts;

use super::CategoriesArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CategoryCount<'a> {
    name: &'a str,
    products: usize,
}

/// Run the categories command.
pub fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;
    let counts = category_counts(catalog.categories(), catalog.products());

    if ctx.output.is_json() {
        let counts: Vec<CategoryCount<'_>> = counts
            .iter()
            .map(|&(name, products)| CategoryCount { name, products })
            .collect();
        ctx.output.json(&counts);
        return Ok(());
    }

    ctx.output.header("Categories");
    ctx.output.table_row(&["CATEGORY", "PRODUCTS"], &[16, 8]);
    for (name, count) in &counts {
        ctx.output.table_row(&[name, &count.to_string()], &[16, 8]);
    }

    Ok(())
}
