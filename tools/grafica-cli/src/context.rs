//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use grafica_catalog::prelude::*;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve_against(&cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            // Try to find config in current directory or parent directories
            None => match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Reference data: the configured price table, or the built-in one.
    pub fn price_table(&self) -> Result<PriceTable> {
        let Some(ref relative) = self.config.data.price_table else {
            return Ok(PriceTable::builtin());
        };

        let path = self.resolve_data_path(relative);
        self.output.debug(&format!("Loading price table: {}", path.display()));
        PriceTable::load(&path)
            .with_context(|| format!("Failed to load price table: {}", path.display()))
    }

    /// The catalog built from [`Self::price_table`].
    pub fn catalog(&self) -> Result<(PriceTable, Catalog)> {
        let table = self.price_table()?;
        let catalog = CatalogBuilder::new().build(&table.rows);
        Ok((table, catalog))
    }

    /// Composer addressed to the configured destinations.
    pub fn composer(&self) -> QuoteMessageComposer {
        QuoteMessageComposer::new(self.config.destinations())
    }

    /// Resolve a data path relative to the config file's directory.
    pub fn resolve_data_path(&self, path: &str) -> PathBuf {
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(self.cwd.as_path());
        resolve_against(base, path)
    }
}

/// Find config file in directory tree.
pub fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                if let Ok(config) = CliConfig::load(&config_path) {
                    return Some((config, config_path));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

fn resolve_against(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("grafica-context-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn context_at(cwd: PathBuf, config: CliConfig, config_path: Option<PathBuf>) -> Context {
        Context {
            config,
            config_path,
            output: Output::new(false, true),
            cwd,
        }
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = temp_dir("walk");
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join(".grafica.toml"), "[shop]\nname = \"Loja\"\n").unwrap();

        let (config, path) = find_config(&nested).unwrap();
        assert_eq!(config.shop.name, "Loja");
        assert_eq!(path, root.join(".grafica.toml"));

        std::fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_builtin_table_without_data_override() {
        let ctx = context_at(PathBuf::from("/"), CliConfig::default(), None);
        let (table, catalog) = ctx.catalog().unwrap();
        assert_eq!(table, PriceTable::builtin());
        assert_eq!(catalog.len(), 15);
    }

    #[test]
    fn test_price_table_relative_to_config_file() {
        let root = temp_dir("data");
        std::fs::write(
            root.join("prices.toml"),
            r#"
[[rows]]
id = "1"
name = "Caneca"
quantity = "1"
price = "R$ 30,00"
"#,
        )
        .unwrap();

        let mut config = CliConfig::default();
        config.data.price_table = Some("prices.toml".to_string());
        let ctx = context_at(PathBuf::from("/"), config, Some(root.join("grafica.toml")));

        let (_, catalog) = ctx.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Caneca").is_some());

        std::fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_missing_price_table_names_path() {
        let mut config = CliConfig::default();
        config.data.price_table = Some("/nonexistent/prices.toml".to_string());
        let ctx = context_at(PathBuf::from("/"), config, None);

        let err = ctx.price_table().unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/prices.toml"));
    }

    #[test]
    fn test_composer_uses_configured_destinations() {
        let mut config = CliConfig::default();
        config.contact.calculator_destination = "5500000000000".to_string();
        let ctx = context_at(PathBuf::from("/"), config, None);

        assert_eq!(ctx.composer().destinations().calculator, "5500000000000");
    }
}
