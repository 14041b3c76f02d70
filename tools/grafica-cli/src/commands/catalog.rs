//! Product listing.

use anyhow::Result;
use grafica_catalog::prelude::*;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::{calculator_badge, format_row};

/// Shown when the filters leave nothing.
pub const NO_PRODUCTS: &str = "Nenhum produto encontrado";

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let (_, catalog) = ctx.catalog()?;

    let filter = CatalogFilter::new(args.search, CategorySelector::parse(&args.category));
    let products = filter.apply(&catalog);
    ctx.output.debug(&format!(
        "{} of {} products match",
        products.len(),
        catalog.len()
    ));

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&ctx.config.shop.name);
    println!("  {}", ctx.config.shop.tagline);

    if products.is_empty() {
        ctx.output.info(NO_PRODUCTS);
        return Ok(());
    }

    for product in products {
        print_card(product, ctx);
    }

    Ok(())
}

fn print_card(product: &Product, ctx: &Context) {
    println!();
    if product.calculator().is_some() {
        println!(
            "{}  [{}]  {}",
            console::style(&product.name).bold(),
            product.category,
            calculator_badge()
        );
    } else {
        println!("{}  [{}]", console::style(&product.name).bold(), product.category);
    }
    ctx.output.kv("imagem", &product.image_ref);

    for line in variant_lines(product) {
        ctx.output.list_item(&line);
    }
}

/// One line per variant: `{quantity}(und)  {price}`.
pub fn variant_lines(product: &Product) -> Vec<String> {
    let width = product
        .variants
        .iter()
        .map(|v| v.quantity_label.chars().count() + "(und)".len())
        .max()
        .unwrap_or(0);

    product
        .variants
        .iter()
        .map(|v| {
            let quantity = format!("{}(und)", v.quantity_label);
            format_row(&[&quantity, &v.price_label], &[width, 0])
        })
        .collect()
}
