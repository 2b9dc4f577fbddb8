//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use console::Term;
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let catalog = &ctx.config.catalog;
    ctx.output.info("[catalog]");
    ctx.output
        .kv("path", catalog.path.as_deref().unwrap_or("(built-in demo)"));
    ctx.output.kv("min_price", &catalog.min_price.to_string());
    ctx.output.kv("max_price", &catalog.max_price.to_string());

    let pricing = &ctx.config.pricing;
    ctx.output.info("[pricing]");
    ctx.output.kv("currency", &pricing.currency);
    ctx.output.kv("shipping_fee", &pricing.shipping_fee.to_string());
    ctx.output.kv("tax_rate", &pricing.tax_rate.to_string());

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let Some(value) = ctx.config.get(key) else {
        bail!("Unknown config key: {}", key);
    };

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(config_path) = &ctx.config_path else {
        bail!("No config file found. Run `storefront config init` to create one.");
    };
    let config_path = config_path.to_string_lossy().to_string();

    let mut config = CliConfig::load(&config_path)?;
    config.set(key, value)?;
    config.validate()?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path: PathBuf = match &ctx.config_path {
        Some(path) if ctx.explicit_config => ctx.resolve_path(&path.to_string_lossy()),
        _ => ctx.cwd.join(CONFIG_FILE_NAMES[0]),
    };

    if config_path.exists() && !force {
        if !Term::stdout().is_term() || ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", config_path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Config init cancelled");
            return Ok(());
        }
    }

    if config_path.extension().is_some_and(|ext| ext == "json") {
        CliConfig::default().save(&config_path.to_string_lossy())?;
    } else {
        fs::write(&config_path, generate_default_config())?;
    }

    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    ctx.config.validate()?;

    if let Some(path) = &ctx.config.catalog.path {
        let catalog = ctx.load_catalog(Some(path))?;
        ctx.output
            .debug(&format!("Catalog holds {} product(s)", catalog.len()));
    }

    if ctx.config_path.is_none() {
        ctx.output
            .warn("No config file found; built-in defaults are in effect");
    }

    ctx.output.success("Configuration is valid");

    Ok(())
}
