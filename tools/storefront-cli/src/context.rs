//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_commerce::catalog::Catalog;
use storefront_commerce::storefront::Storefront;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration was loaded from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Whether `config_path` came from `--config`. That file may not exist yet.
    pub explicit_config: bool,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let explicit_config = config_path.is_some();

        let (config, config_path) = if let Some(path) = config_path {
            let config = if Path::new(path).exists() {
                CliConfig::load(path)?
            } else {
                tracing::debug!(path, "config file not found, using defaults");
                CliConfig::default()
            };
            (config, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            explicit_config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "skipping unreadable config"
                        ),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the catalog: an explicit file, else the configured path, else the demo catalog.
    pub fn load_catalog(&self, path: Option<&str>) -> Result<Catalog> {
        let path = path.map(str::to_string).or_else(|| self.config.catalog.path.clone());

        let Some(path) = path else {
            self.output.debug("Using built-in demo catalog");
            return Ok(Catalog::demo());
        };

        let resolved = self.resolve_path(&path);
        self.output.debug(&format!("Loading catalog {}", resolved.display()));
        let json = std::fs::read_to_string(&resolved)
            .with_context(|| format!("Failed to read catalog: {}", resolved.display()))?;
        Catalog::from_json(&json)
            .with_context(|| format!("Invalid catalog: {}", resolved.display()))
    }

    /// Build a storefront over the catalog with the configured pricing and
    /// initial price range.
    pub fn storefront(&self, catalog_path: Option<&str>) -> Result<Storefront> {
        self.config.validate()?;
        let catalog = self.load_catalog(catalog_path)?;
        let mut store = Storefront::new(catalog, self.config.policy()?);
        store.query.price_range = self.config.default_price_range()?;
        Ok(store)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
