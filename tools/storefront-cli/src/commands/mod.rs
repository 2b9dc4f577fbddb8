//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod categories;
pub mod config;

use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use storefront_commerce::search::SortKey;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Catalog JSON file (default: configured catalog, else built-in demo).
    #[arg(long)]
    pub catalog: Option<String>,

    /// Category to include; repeat to select several (default: All).
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    /// Lowest price to show, inclusive.
    #[arg(long)]
    pub min: Option<Decimal>,

    /// Highest price to show, inclusive.
    #[arg(long)]
    pub max: Option<Decimal>,

    /// Case-insensitive text matched against name and description.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort order: featured, price-low-high, price-high-low, rating.
    #[arg(long, default_value = "featured")]
    pub sort: SortKey,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Catalog JSON file (default: configured catalog, else built-in demo).
    #[arg(long)]
    pub catalog: Option<String>,

    /// Start from a saved cart (JSON array of line items).
    #[arg(long)]
    pub items: Option<String>,

    /// Add one unit of a product; repeat to add more.
    #[arg(short, long = "add")]
    pub add: Vec<String>,

    /// Set a line's quantity, as ID=QTY.
    #[arg(long = "set", value_parser = parse_quantity_update)]
    pub set: Vec<(String, i64)>,

    /// Remove a line by product ID.
    #[arg(long = "remove")]
    pub remove: Vec<String>,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Catalog JSON file (default: configured catalog, else built-in demo).
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Parse an `ID=QTY` pair.
fn parse_quantity_update(s: &str) -> Result<(String, i64), String> {
    let (id, quantity) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got '{}'", s))?;
    if id.is_empty() {
        return Err(format!("missing product ID in '{}'", s));
    }
    let quantity = quantity
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid quantity in '{}': {}", s, e))?;
    Ok((id.to_string(), quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity_update() {
        assert_eq!(parse_quantity_update("2=3").unwrap(), ("2".to_string(), 3));
        assert_eq!(parse_quantity_update("2=0").unwrap(), ("2".to_string(), 0));
        assert_eq!(parse_quantity_update("2=-1").unwrap(), ("2".to_string(), -1));
        assert!(parse_quantity_update("2").is_err());
        assert!(parse_quantity_update("=3").is_err());
        assert!(parse_quantity_update("2=many").is_err());
    }
}
