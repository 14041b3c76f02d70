//! Flat price-list rows.

use serde::{Deserialize, Serialize};

/// One line of the shop's price list.
///
/// Several rows usually share a `name`; each of them becomes one pricing
/// tier of that product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRow {
    /// Row identifier, reused as the variant id.
    pub id: String,
    /// Product name (grouping key).
    pub name: String,
    /// Quantity or unit label (e.g., "2500", "m²").
    #[serde(rename = "quantity")]
    pub quantity_label: String,
    /// Display price (e.g., "R$ 150,00" or "A partir de R$ 70,00").
    #[serde(rename = "price")]
    pub price_label: String,
}

impl PriceRow {
    /// Create a new price row.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity_label: impl Into<String>,
        price_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity_label: quantity_label.into(),
            price_label: price_label.into(),
        }
    }
}

const BUILTIN_ROWS: &[(&str, &str, &str, &str)] = &[
    ("1", "Panfleto 80g frente", "2500", "R$ 150,00"),
    ("2", "Panfleto 80g frente", "5000", "R$ 220,00"),
    ("3", "Panfleto 80g frente", "10000", "R$ 400,00"),
    ("4", "Panfleto 80g frente e verso", "2500", "R$ 240,00"),
    ("5", "Panfleto 80g frente e verso", "5000", "R$ 300,00"),
    ("6", "Panfleto 80g frente e verso", "10000", "R$ 500,00"),
    ("7", "Panfleto 115g frente", "1000", "R$ 160,00"),
    ("8", "Panfleto 115g frente", "2500", "R$ 245,00"),
    ("9", "Panfleto 115g frente", "5000", "R$ 410,00"),
    ("10", "Panfleto 115g frente", "10000", "R$ 540,00"),
    ("11", "Panfleto 115g frente e verso", "1000", "R$ 210,00"),
    ("12", "Panfleto 115g frente e verso", "2500", "R$ 300,00"),
    ("13", "Panfleto 115g frente e verso", "5000", "R$ 380,00"),
    ("14", "Panfleto 115g frente e verso", "10000", "R$ 720,00"),
    ("15", "Cartão de visita frente", "1000", "R$ 70,00"),
    ("16", "Cartão de visita frente e verso", "1000", "R$ 90,00"),
    ("17", "Camisa branca poliester P ao GG", "1", "R$ 35,00"),
    ("18", "Camisa branca poliester XGG", "1", "R$ 45,00"),
    ("19", "Camisa Colorida Poliester P ao GG", "1", "R$ 40,00"),
    ("20", "Camisa Colorida Poliester XGG", "1", "R$ 50,00"),
    ("21", "Lona UV", "1", "R$ 85,00"),
    ("22", "Lona Normal", "1", "R$ 70,00"),
    // Sold by area, priced through the calculator
    ("23", "Lona Personalizada", "m²", "A partir de R$ 70,00"),
    ("24", "Banner Personalizado", "m²", "A partir de R$ 102,50"),
    ("25", "Adesivo Personalizado", "m²", "A partir de R$ 70,00"),
];

/// The shop's built-in price list, in display order.
pub fn builtin_rows() -> Vec<PriceRow> {
    BUILTIN_ROWS
        .iter()
        .map(|(id, name, quantity, price)| PriceRow::new(*id, *name, *quantity, *price))
        .collect()
}
