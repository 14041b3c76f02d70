//! Area calculator.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use grafica_catalog::prelude::*;
use serde::Serialize;

use super::{deliver, print_delivery, CalcArgs, Delivery};
use crate::context::Context;

/// Machine-readable calculator report.
#[derive(Debug, Serialize)]
struct CalcReport<'a> {
    input: &'a CalculatorInput,
    result: CalculatorResult,
    quotable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery: Option<Delivery>,
}

/// Run the calc command.
pub fn run(args: CalcArgs, ctx: &Context) -> Result<()> {
    let table = ctx.price_table()?;
    let mut session = open_session(&table.unit_prices, &args.category)?;

    let interactive = args.variant.is_none() || args.width.is_none() || args.height.is_none();
    if interactive && ctx.output.is_json() {
        bail!("--variant, --width and --height are required with --json");
    }

    let variant = match args.variant {
        Some(variant) => variant,
        None => prompt_variant(&session)?,
    };
    session.set_variant(variant);
    session.set_width(match args.width {
        Some(width) => width,
        None => prompt_dimension("Largura (m)")?,
    });
    session.set_height(match args.height {
        Some(height) => height,
        None => prompt_dimension("Altura (m)")?,
    });

    if !session.can_calculate() {
        bail!("Informe o material, a largura e a altura");
    }

    if interactive {
        let confirmed = Confirm::new()
            .with_prompt("Calcular?")
            .default(true)
            .interact()?;
        if !confirmed {
            ctx.output.info("Cálculo cancelado");
            return Ok(());
        }
    }

    let result = session.calculate();
    ctx.output.debug(&format!(
        "area={} price_per_unit={} total={}",
        result.area, result.price_per_unit, result.total
    ));

    if !ctx.output.is_json() {
        print_result(&session, ctx);
    }

    let delivery = if args.quote {
        let Some(inquiry) = Inquiry::from_session(&session) else {
            bail!("Nothing to quote: check the dimensions and the material");
        };
        Some(deliver(&inquiry, ctx)?)
    } else {
        None
    };

    if ctx.output.is_json() {
        ctx.output.json(&CalcReport {
            input: session.input(),
            result,
            quotable: session.is_quotable(),
            delivery,
        });
    } else if let Some(ref delivery) = delivery {
        print_delivery(delivery, ctx);
    }

    Ok(())
}

/// Open the calculator for a category name such as `lona` or `Banner`.
fn open_session<'a>(table: &'a UnitPriceTable, category: &str) -> Result<CalculatorSession<'a>> {
    let session = match CalculatorKind::from_key(category) {
        Some(kind) => CalculatorSession::open(table, kind),
        None => CalculatorSession::open_category(table, category.trim()),
    };

    if session.variant_options().is_empty() {
        let known: Vec<&str> = table.categories.iter().map(|c| c.category.as_str()).collect();
        bail!(
            "No calculator for category: {} (available: {})",
            category,
            known.join(", ")
        );
    }
    Ok(session)
}

/// Selector entry: `{variant} - R$ {price}/m²`.
pub fn variant_option_label(option: &UnitPrice) -> String {
    format!(
        "{} - {}/m²",
        option.label,
        Money::new(option.price_per_m2).display_compact()
    )
}

fn prompt_variant(session: &CalculatorSession<'_>) -> Result<String> {
    let options = session.variant_options();
    let items: Vec<String> = options.iter().map(variant_option_label).collect();

    let selection = Select::new()
        .with_prompt("Material")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(options[selection].label.clone())
}

fn prompt_dimension(prompt: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn print_result(session: &CalculatorSession<'_>, ctx: &Context) {
    ctx.output
        .header(&format!("Calculadora: {}", session.category()));

    let result = session.result();
    if !result.is_quotable() {
        ctx.output
            .warn("Não foi possível calcular: verifique as medidas e o material");
        return;
    }

    let input = session.input();
    ctx.output
        .kv("Material", input.variant.as_deref().unwrap_or_default());
    ctx.output.kv(
        "Dimensões",
        &format!("{}m x {}m", input.width.trim(), input.height.trim()),
    );
    ctx.output.kv("Área", &format!("{:.2} m²", result.area));
    ctx.output.kv(
        "Valor por m²",
        &result.unit_price_money().display(),
    );
    ctx.output
        .kv("Total", &result.total_money().display());
}
