//! Reference price data.
//!
//! A [`PriceTable`] bundles the flat price rows that feed the catalog and
//! the per-m² table that feeds the area calculator. The shop ships a
//! built-in table; a TOML or JSON file can replace it.

mod rows;
mod unit_prices;

pub use rows::{builtin_rows, PriceRow};
pub use unit_prices::{UnitPrice, UnitPriceCategory, UnitPriceTable};

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};

/// Static reference data consumed by the catalog and the calculator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Price rows in display order.
    #[serde(default)]
    pub rows: Vec<PriceRow>,
    /// Per-m² prices.
    #[serde(default, rename = "calculator")]
    pub unit_prices: UnitPriceTable,
}

impl PriceTable {
    /// Create a table from parts.
    pub fn new(rows: Vec<PriceRow>, unit_prices: UnitPriceTable) -> Self {
        Self { rows, unit_prices }
    }

    /// The shop's built-in reference data.
    pub fn builtin() -> Self {
        Self::new(builtin_rows(), UnitPriceTable::builtin())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: PriceTable = toml::from_str(content)?;
        table.validate()?;
        Ok(table)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let table: PriceTable = serde_json::from_str(content)?;
        table.validate()?;
        Ok(table)
    }

    /// Load a table from a file; `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let table = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        debug!(
            path = %path.display(),
            rows = table.rows.len(),
            categories = table.unit_prices.categories.len(),
            "loaded price table"
        );
        Ok(table)
    }

    /// Check the table for structural problems.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for row in &self.rows {
            if row.id.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    field: "id",
                    context: format!("row {:?}", row.name),
                });
            }
            if row.name.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    field: "name",
                    context: format!("row {}", row.id),
                });
            }
            if !ids.insert(row.id.as_str()) {
                return Err(CatalogError::DuplicateRowId(row.id.clone()));
            }
        }

        let mut categories = HashSet::new();
        for category in &self.unit_prices.categories {
            if category.category.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    field: "category",
                    context: "calculator table".to_string(),
                });
            }
            if !categories.insert(category.category.as_str()) {
                return Err(CatalogError::DuplicateCalculatorCategory(
                    category.category.clone(),
                ));
            }
            if category.variants.is_empty() {
                warn!(category = %category.category, "calculator category has no variants");
            }
            for variant in &category.variants {
                if !variant.price_per_m2.is_finite() || variant.price_per_m2 <= 0.0 {
                    return Err(CatalogError::InvalidUnitPrice {
                        category: category.category.clone(),
                        variant: variant.label.clone(),
                        price: variant.price_per_m2,
                    });
                }
            }
        }

        Ok(())
    }
}
