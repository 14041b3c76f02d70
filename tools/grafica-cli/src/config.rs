//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use grafica_catalog::prelude::Destinations;
use grafica_catalog::quote::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

use crate::logging::LogFormat;

/// Config file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["grafica.toml", ".grafica.toml", "grafica.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront presentation.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Messaging destinations.
    #[serde(default)]
    pub contact: ContactConfig,

    /// Reference data overrides.
    #[serde(default)]
    pub data: DataConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Destinations for the quote composer.
    pub fn destinations(&self) -> Destinations {
        Destinations {
            catalog: self.contact.catalog_destination.clone(),
            calculator: self.contact.calculator_destination.clone(),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Storefront presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Shop name shown in headers.
    #[serde(default = "default_shop_name")]
    pub name: String,

    /// Line shown under the name.
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

fn default_shop_name() -> String {
    "RR Gráfica Expresso".to_string()
}

fn default_tagline() -> String {
    "Qualidade Premium".to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
            tagline: default_tagline(),
        }
    }
}

/// Messaging destinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Deep-link service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Receives product and general inquiries.
    #[serde(default = "default_catalog_destination")]
    pub catalog_destination: String,

    /// Receives calculator quotes.
    #[serde(default = "default_calculator_destination")]
    pub calculator_destination: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_catalog_destination() -> String {
    Destinations::default().catalog
}

fn default_calculator_destination() -> String {
    Destinations::default().calculator
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            catalog_destination: default_catalog_destination(),
            calculator_destination: default_calculator_destination(),
        }
    }
}

/// Reference data overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Price table file, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_table: Option<String>,
}

/// Log output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Format to use; `--json` forces JSON logs.
    pub fn effective_format(&self, json: bool) -> LogFormat {
        if json {
            LogFormat::Json
        } else {
            self.format
        }
    }
}
