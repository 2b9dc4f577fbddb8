//! Cart pricing command.

use anyhow::{bail, Context as _, Result};
use serde::Serialize;
use storefront_commerce::cart::{CartTotals, LineItem};
use storefront_commerce::storefront::{Command, Event};

use super::CartArgs;
use crate::context::Context;
use crate::output::format_price;

const COLUMN_WIDTHS: [usize; 4] = [24, 10, 5, 10];

#[derive(Serialize)]
struct CartReport<'a> {
    items: &'a [LineItem],
    totals: CartTotals,
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront(args.catalog.as_deref())?;

    if let Some(path) = &args.items {
        store.cart = load_items(ctx, path)?;
    }

    let mut commands = Vec::new();
    commands.extend(args.add.into_iter().map(|id| Command::AddToCart { id: id.into() }));
    commands.extend(args.set.into_iter().map(|(id, quantity)| Command::UpdateQuantity {
        id: id.into(),
        quantity,
    }));
    commands.extend(args.remove.into_iter().map(|id| Command::RemoveItem { id: id.into() }));

    for command in commands {
        for event in store.dispatch(command) {
            report_event(ctx, &event);
        }
    }

    let totals = store.totals();

    if ctx.output.is_json() {
        ctx.output.json(&CartReport {
            items: &store.cart,
            totals,
        });
        return Ok(());
    }

    ctx.output.header(&format!("Cart ({} items)", totals.item_count));

    if store.cart.is_empty() {
        ctx.output.info("Your cart is empty");
    } else {
        ctx.output
            .table_row(&["ITEM", "PRICE", "QTY", "TOTAL"], &COLUMN_WIDTHS);
        for item in &store.cart {
            let unit = format_price(&item.unit_price, COLUMN_WIDTHS[1]);
            let line = item
                .line_total()
                .map(|t| format_price(&t, COLUMN_WIDTHS[3]))
                .unwrap_or_else(|| "overflow".to_string());
            ctx.output.table_row(
                &[&item.name, &unit, &item.quantity.to_string(), &line],
                &COLUMN_WIDTHS,
            );
        }
    }

    println!();
    ctx.output.kv("Subtotal", &totals.subtotal.display());
    ctx.output.kv("Shipping", &totals.shipping.display());
    ctx.output.kv("Tax", &totals.tax.display());
    ctx.output.kv("Total", &totals.total.display());

    Ok(())
}

/// Read a saved cart, rejecting lines a cart could never hold.
fn load_items(ctx: &Context, path: &str) -> Result<Vec<LineItem>> {
    let resolved = ctx.resolve_path(path);
    let content = std::fs::read_to_string(&resolved)
        .with_context(|| format!("Failed to read cart: {}", resolved.display()))?;
    let items: Vec<LineItem> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse cart: {}", resolved.display()))?;

    for item in &items {
        if storefront_commerce::cart::valid_quantity(i64::from(item.quantity)).is_none() {
            bail!(
                "Cart line '{}' has invalid quantity {}",
                item.product_id,
                item.quantity
            );
        }
    }

    ctx.output
        .debug(&format!("Loaded {} line(s) from {}", items.len(), resolved.display()));
    Ok(items)
}

fn report_event(ctx: &Context, event: &Event) {
    match event {
        Event::UnknownProduct { id } => {
            ctx.output.warn(&format!("Unknown product: {}", id));
        }
        Event::QuantityRejected { id, quantity } => {
            ctx.output.warn(&format!(
                "Quantity {} rejected for product {}",
                quantity, id
            ));
        }
        Event::CartChanged { item_count } => {
            ctx.output.debug(&format!("Cart now holds {} item(s)", item_count));
        }
        _ => {}
    }
}
