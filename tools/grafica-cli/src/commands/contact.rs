//! Product and general inquiries.

use anyhow::{bail, Result};
use grafica_catalog::prelude::*;

use super::{deliver, print_delivery, ContactArgs};
use crate::context::Context;

/// Run the contact command.
pub fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let inquiry = match args.product {
        Some(name) => {
            let (_, catalog) = ctx.catalog()?;
            inquiry_for(&catalog, &name)?
        }
        None => Inquiry::general(),
    };

    let delivery = deliver(&inquiry, ctx)?;
    if ctx.output.is_json() {
        ctx.output.json(&delivery);
    } else {
        print_delivery(&delivery, ctx);
    }
    Ok(())
}

/// Inquiry about a product that must exist in the catalog.
fn inquiry_for(catalog: &Catalog, name: &str) -> Result<Inquiry> {
    match catalog.get(name) {
        Some(product) => Ok(Inquiry::product(&product.name)),
        None => bail!("Unknown product: {}. Run `grafica catalog` to list products.", name),
    }
}
