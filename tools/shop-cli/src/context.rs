//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use shop_commerce::CatalogClient;
use shop_data::FetchClient;
use shop_web::Session;

use crate::config::{ShopConfig, API_URL_ENV, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration, overrides applied.
    pub config: ShopConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&str>, api_url: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (ShopConfig::load(&path)?, Some(path))
            }
            None => match Self::find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (ShopConfig::default(), None),
            },
        };
        config.apply_overrides(std::env::var(API_URL_ENV).ok(), api_url);

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, ShopConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = ShopConfig::load(&config_path) {
                        return Some((config_path, config));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Catalog client for the configured API.
    pub fn catalog(&self) -> Result<CatalogClient> {
        let timeout = Duration::from_secs(self.config.api.timeout_secs);
        let http = FetchClient::http(Some(timeout))
            .context("Failed to build HTTP client")?
            .with_base_url(self.config.api.base_url.clone());
        Ok(CatalogClient::new(http))
    }

    /// A fresh storefront session with an empty cart.
    pub fn session(&self) -> Result<Session> {
        Ok(Session::new(self.catalog()?, self.config.site.clone()))
    }
}
