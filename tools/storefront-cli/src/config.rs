//! CLI configuration.

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_commerce::cart::PricingPolicy;
use storefront_commerce::search::PriceRange;
use storefront_commerce::{Currency, Money};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Pricing configuration.
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Check values the deserializer cannot.
    pub fn validate(&self) -> Result<()> {
        self.currency()?;
        if self.pricing.shipping_fee.is_sign_negative() {
            bail!("pricing.shipping_fee must not be negative");
        }
        if self.pricing.tax_rate.is_sign_negative() {
            bail!("pricing.tax_rate must not be negative");
        }
        if self.catalog.min_price.is_sign_negative() {
            bail!("catalog.min_price must not be negative");
        }
        if self.catalog.min_price > self.catalog.max_price {
            bail!(
                "catalog.min_price ({}) exceeds catalog.max_price ({})",
                self.catalog.min_price,
                self.catalog.max_price
            );
        }
        Ok(())
    }

    /// Configured currency.
    pub fn currency(&self) -> Result<Currency> {
        self.pricing
            .currency
            .parse()
            .context("Invalid pricing.currency")
    }

    /// Pricing policy for the totals calculator.
    pub fn policy(&self) -> Result<PricingPolicy> {
        let currency = self.currency()?;
        Ok(PricingPolicy::new(
            Money::new(self.pricing.shipping_fee, currency),
            self.pricing.tax_rate,
        ))
    }

    /// Price range the catalog view starts with.
    pub fn default_price_range(&self) -> Result<PriceRange> {
        let currency = self.currency()?;
        Ok(PriceRange::new(
            Money::new(self.catalog.min_price, currency),
            Money::new(self.catalog.max_price, currency),
        ))
    }

    /// Read a value by dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog.path" => Some(self.catalog.path.clone().unwrap_or_default()),
            "catalog.min_price" => Some(self.catalog.min_price.to_string()),
            "catalog.max_price" => Some(self.catalog.max_price.to_string()),
            "pricing.currency" => Some(self.pricing.currency.clone()),
            "pricing.shipping_fee" => Some(self.pricing.shipping_fee.to_string()),
            "pricing.tax_rate" => Some(self.pricing.tax_rate.to_string()),
            _ => None,
        }
    }

    /// Set a value by dotted key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "catalog.path" => {
                self.catalog.path = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "catalog.min_price" => self.catalog.min_price = parse_decimal(key, value)?,
            "catalog.max_price" => self.catalog.max_price = parse_decimal(key, value)?,
            "pricing.currency" => {
                let currency: Currency = value
                    .parse()
                    .with_context(|| format!("Invalid value for {}", key))?;
                self.pricing.currency = currency.code().to_string();
            }
            "pricing.shipping_fee" => self.pricing.shipping_fee = parse_decimal(key, value)?,
            "pricing.tax_rate" => self.pricing.tax_rate = parse_decimal(key, value)?,
            _ => bail!("Unknown config key: {}", key),
        }
        Ok(())
    }
}

fn parse_decimal(key: &str, value: &str) -> Result<Decimal> {
    value
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal for {}: {}", key, value))
}

/// Catalog source and initial view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog JSON file. The built-in demo catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Lower bound of the initial price range.
    #[serde(default)]
    pub min_price: Decimal,

    /// Upper bound of the initial price range.
    #[serde(default = "default_max_price")]
    pub max_price: Decimal,
}

fn default_max_price() -> Decimal {
    Decimal::from(storefront_commerce::search::DEFAULT_MAX_PRICE)
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            min_price: Decimal::ZERO,
            max_price: default_max_price(),
        }
    }
}

/// Cart pricing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Flat shipping fee.
    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: Decimal,

    /// Tax rate applied to the subtotal.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
}

fn default_currency() -> String {
    Currency::USD.code().to_string()
}

fn default_shipping_fee() -> Decimal {
    Decimal::new(storefront_commerce::cart::DEFAULT_SHIPPING_CENTS, 2)
}

fn default_tax_rate() -> Decimal {
    Decimal::new(storefront_commerce::cart::DEFAULT_TAX_RATE_BPS, 4).normalize()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            shipping_fee: default_shipping_fee(),
            tax_rate: default_tax_rate(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[catalog]
# Catalog JSON file; the built-in demo catalog is used when unset
# path = "catalog.json"
min_price = "0"
max_price = "200"

[pricing]
currency = "USD"
shipping_fee = "9.99"
tax_rate = "0.08"
"#
    .to_string()
}
