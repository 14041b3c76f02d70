//! Configuration management commands.

use anyhow::{bail, Result};
use grafica_catalog::prelude::*;
use grafica_catalog::quote::normalize_destination;
use url::Url;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
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
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    // Shop section
    ctx.output.info("");
    ctx.output.info("[shop]");
    ctx.output.kv("name", &ctx.config.shop.name);
    ctx.output.kv("tagline", &ctx.config.shop.tagline);

    // Contact section
    ctx.output.info("");
    ctx.output.info("[contact]");
    ctx.output.kv("base_url", &ctx.config.contact.base_url);
    ctx.output
        .kv("catalog_destination", &ctx.config.contact.catalog_destination);
    ctx.output.kv(
        "calculator_destination",
        &ctx.config.contact.calculator_destination,
    );

    // Data section
    ctx.output.info("");
    ctx.output.info("[data]");
    match ctx.config.data.price_table {
        Some(ref table) => ctx.output.kv(
            "price_table",
            &ctx.resolve_data_path(table).display().to_string(),
        ),
        None => ctx.output.kv("price_table", "(built-in)"),
    }

    // Logging section
    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output
        .kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    CliConfig::default().save(&config_path)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check_config(ctx);

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Collect configuration errors and warnings.
fn check_config(ctx: &Context) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let config = &ctx.config;

    if config.shop.name.trim().is_empty() {
        warnings.push("shop.name is empty".to_string());
    }

    // Check the deep-link service
    if let Err(e) = DeepLinkSink::new(
        &config.contact.base_url,
        |_: &Url| -> Result<(), CatalogError> { Ok(()) },
    ) {
        errors.push(format!("contact.base_url: {}", e));
    } else if !config.contact.base_url.starts_with("https://") {
        warnings.push("contact.base_url should use https".to_string());
    }

    // Check destinations
    for (key, value) in [
        ("contact.catalog_destination", &config.contact.catalog_destination),
        (
            "contact.calculator_destination",
            &config.contact.calculator_destination,
        ),
    ] {
        if let Err(e) = normalize_destination(value) {
            errors.push(format!("{}: {}", key, e));
        }
    }

    // Check the price table
    if config.data.price_table.is_some() {
        match ctx.price_table() {
            Ok(table) => {
                if table.rows.is_empty() {
                    warnings.push("data.price_table has no rows".to_string());
                }
                if table.unit_prices.is_empty() {
                    warnings.push("data.price_table has no calculator prices".to_string());
                }
            }
            Err(e) => errors.push(format!("data.price_table: {:#}", e)),
        }
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::json_context;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_is_clean() {
        let (errors, warnings) = check_config(&json_context(CliConfig::default()));
        assert_eq!(errors, Vec::<String>::new());
        assert_eq!(warnings, Vec::<String>::new());
    }

    #[test]
    fn test_bad_destination_and_base_url() {
        let mut config = CliConfig::default();
        config.contact.calculator_destination = "+55 (11) 9999".to_string();
        config.contact.base_url = "not a url".to_string();

        let (errors, _) = check_config(&json_context(config));
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("contact.base_url"));
        assert!(errors[1].starts_with("contact.calculator_destination"));
    }

    #[test]
    fn test_plain_http_is_a_warning() {
        let mut config = CliConfig::default();
        config.contact.base_url = "http://wa.me".to_string();

        let (errors, warnings) = check_config(&json_context(config));
        assert!(errors.is_empty());
        assert_eq!(warnings, ["contact.base_url should use https"]);
    }

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = std::env::temp_dir().join(format!("grafica-init-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut ctx = json_context(CliConfig::default());
        ctx.cwd = dir.clone();

        init_config(false, &ctx).unwrap();
        let written = CliConfig::load(dir.join("grafica.toml")).unwrap();
        assert_eq!(written, CliConfig::default());

        assert!(init_config(false, &ctx).is_err());
        init_config(true, &ctx).unwrap();

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_missing_price_table_is_an_error() {
        let mut config = CliConfig::default();
        config.data.price_table = Some("/nonexistent/prices.toml".to_string());

        let (errors, _) = check_config(&json_context(config));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("/nonexistent/prices.toml"));
    }
}
