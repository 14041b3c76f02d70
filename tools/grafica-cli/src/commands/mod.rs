//! CLI command implementations.

pub mod calc;
pub mod catalog;
pub mod categories;
pub mod config;
pub mod contact;

use anyhow::Result;
use clap::{Args, Subcommand};
use grafica_catalog::prelude::*;
use serde::Serialize;
use url::Url;

use crate::context::Context;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Text to look for in product names.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category label, or "all".
    #[arg(long, default_value = "all")]
    pub category: String,
}

/// Arguments for the calc command.
#[derive(Args)]
pub struct CalcArgs {
    /// Calculator category (Lona, Banner, Adesivo).
    pub category: String,

    /// Material variant.
    #[arg(long)]
    pub variant: Option<String>,

    /// Width in meters.
    #[arg(short, long)]
    pub width: Option<String>,

    /// Height in meters.
    #[arg(long)]
    pub height: Option<String>,

    /// Send the result as a quote request.
    #[arg(short, long)]
    pub quote: bool,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    /// Product to ask about (default: the whole catalog).
    pub product: Option<String>,
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
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// A delivered inquiry, as reported to the user.
#[derive(Debug, Serialize)]
pub struct Delivery {
    pub destination: String,
    pub text: String,
    pub link: String,
}

/// Compose an inquiry and hand it to the deep-link sink.
///
/// The terminal cannot launch the messaging app, so the link is collected
/// for the caller to print.
pub fn deliver(inquiry: &Inquiry, ctx: &Context) -> Result<Delivery> {
    let mut links: Vec<Url> = Vec::new();
    let message = {
        let mut sink = DeepLinkSink::new(
            &ctx.config.contact.base_url,
            |link: &Url| -> Result<(), CatalogError> {
                links.push(link.clone());
                Ok(())
            },
        )?;
        ctx.composer().send(inquiry, &mut sink)?
    };

    Ok(Delivery {
        destination: message.destination,
        text: message.text,
        link: links.pop().map(String::from).unwrap_or_default(),
    })
}

/// Print a delivery in human form.
pub fn print_delivery(delivery: &Delivery, ctx: &Context) {
    ctx.output
        .success(&format!("Mensagem pronta para {}", delivery.destination));
    ctx.output.kv("mensagem", &delivery.text.replace('\n', " | "));
    if !ctx.output.is_json() {
        println!("{}", delivery.link);
    }
}
