//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shop_observability::LoggingConfig;
use shop_web::SiteMeta;

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "SHOP_API_URL";

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Catalog API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Site defaults for page meta tags.
    #[serde(default)]
    pub site: SiteMeta,
}

impl ShopConfig {
    /// Load config from a file. `.json` files are JSON, anything else TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Apply `SHOP_API_URL` and then the `--api-url` flag.
    pub fn apply_overrides(&mut self, env_url: Option<String>, flag_url: Option<&str>) {
        if let Some(url) = env_url.filter(|u| !u.is_empty()) {
            self.api.base_url = url;
        }
        if let Some(url) = flag_url {
            self.api.base_url = url.to_string();
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

/// Catalog API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.escuelajs.co".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Generate a default shop.toml config file.
pub fn generate_default_config() -> String {
    let site = SiteMeta::default();
    format!(
        r#"# Shopfront configuration

[api]
base_url = "{base_url}"
timeout_secs = {timeout}

[logging]
# trace | debug | info | warn | error
level = "info"
# human | json
format = "human"

[site]
name = "{name}"
description = "{description}"
image = "{image}"
url = "{url}"
"#,
        base_url = default_base_url(),
        timeout = default_timeout_secs(),
        name = site.name,
        description = site.description,
        image = site.image,
        url = site.url
    )
}
