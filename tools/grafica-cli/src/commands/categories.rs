//! Category listing.

use anyhow::Result;
use grafica_catalog::prelude::*;

use crate::context::Context;

/// Run the categories command.
pub fn run(ctx: &Context) -> Result<()> {
    let (_, catalog) = ctx.catalog()?;
    let options = category_options(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&options);
        return Ok(());
    }

    ctx.output.header("Categorias");

    let width = options
        .iter()
        .map(|o| o.selector.as_str().chars().count())
        .max()
        .unwrap_or(0);
    for option in &options {
        let count = option.count.to_string();
        ctx.output
            .table_row(&[option.selector.as_str(), &option.label, &count], &[width, 22, 0]);
    }

    Ok(())
}
