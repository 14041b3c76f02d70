//! Grafica CLI - terminal storefront for the print-shop catalog.
//!
//! Commands:
//! - `grafica catalog` - List products, with search and category filters
//! - `grafica categories` - List category options with product counts
//! - `grafica calc` - Price a custom-sized product by area
//! - `grafica contact` - Send a product or general inquiry
//! - `grafica config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CalcArgs, CatalogArgs, ConfigArgs, ContactArgs};

/// Grafica CLI - browse the catalog and request quotes
#[derive(Parser)]
#[command(name = "grafica")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog(CatalogArgs),

    /// List category options
    Categories,

    /// Price a custom-sized product by area
    Calc(CalcArgs),

    /// Send an inquiry to the shop
    Contact(ContactArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(cli.verbose, ctx.config.logging.effective_format(cli.json));

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Categories => commands::categories::run(&ctx),
        Commands::Calc(args) => commands::calc::run(args, &ctx),
        Commands::Contact(args) => commands::contact::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
