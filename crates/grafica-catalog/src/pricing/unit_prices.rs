//! Per-square-meter price table used by the area calculator.

use serde::{Deserialize, Serialize};

/// Price per m² for one calculator variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitPrice {
    /// Variant label shown to the customer (e.g., "Lona UV").
    pub label: String,
    /// Price per square meter.
    pub price_per_m2: f64,
}

impl UnitPrice {
    pub fn new(label: impl Into<String>, price_per_m2: f64) -> Self {
        Self {
            label: label.into(),
            price_per_m2,
        }
    }
}

/// The variants priced by area for one calculator category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitPriceCategory {
    /// Calculator category key (e.g., "Lona").
    pub category: String,
    /// Variants in display order.
    #[serde(default)]
    pub variants: Vec<UnitPrice>,
}

impl UnitPriceCategory {
    /// Look up a variant by its exact label.
    pub fn variant(&self, label: &str) -> Option<&UnitPrice> {
        self.variants.iter().find(|v| v.label == label)
    }
}

/// Mapping calculator category → variant → price per m².
///
/// Categories and variants keep the order they were declared in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitPriceTable {
    pub categories: Vec<UnitPriceCategory>,
}

impl UnitPriceTable {
    /// Create a table from categories.
    pub fn new(categories: Vec<UnitPriceCategory>) -> Self {
        Self { categories }
    }

    /// The shop's built-in per-m² prices.
    pub fn builtin() -> Self {
        let category = |name: &str, variants: &[(&str, f64)]| UnitPriceCategory {
            category: name.to_string(),
            variants: variants
                .iter()
                .map(|(label, price)| UnitPrice::new(*label, *price))
                .collect(),
        };

        Self::new(vec![
            category("Lona", &[("Lona UV", 85.0), ("Lona Normal", 70.0)]),
            category(
                "Banner",
                &[
                    (
                        "Banner Personalizado (sem verniz UV, 380g, lona brilho, solvente)",
                        102.5,
                    ),
                    ("Banner Personalizado (440g, lona fosca, UV)", 120.0),
                ],
            ),
            category(
                "Adesivo",
                &[
                    ("Adesivo Normal", 70.0),
                    ("Adesivo Normal UV", 90.0),
                    ("Adesivo Perfurado", 90.0),
                ],
            ),
        ])
    }

    /// Look up a category by its exact key.
    pub fn category(&self, category: &str) -> Option<&UnitPriceCategory> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Variants of a category; empty for an unknown category.
    pub fn variants(&self, category: &str) -> &[UnitPrice] {
        self.category(category)
            .map(|c| c.variants.as_slice())
            .unwrap_or(&[])
    }

    /// Price per m² for a (category, variant) pair.
    pub fn price_per_m2(&self, category: &str, variant: &str) -> Option<f64> {
        self.category(category)
            .and_then(|c| c.variant(variant))
            .map(|v| v.price_per_m2)
    }

    /// Check if the table has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let table = UnitPriceTable::builtin();
        assert_eq!(table.price_per_m2("Lona", "Lona UV"), Some(85.0));
        assert_eq!(
            table.price_per_m2("Banner", "Banner Personalizado (440g, lona fosca, UV)"),
            Some(120.0)
        );
        assert_eq!(table.price_per_m2("Adesivo", "Adesivo Perfurado"), Some(90.0));
    }

    #[test]
    fn test_lookup_misses() {
        let table = UnitPriceTable::builtin();
        assert_eq!(table.price_per_m2("Lona", "Lona Dourada"), None);
        assert_eq!(table.price_per_m2("Camisa", "Lona UV"), None);
        // Keys are exact
        assert_eq!(table.price_per_m2("lona", "Lona UV"), None);
    }

    #[test]
    fn test_variants_keep_declared_order() {
        let table = UnitPriceTable::builtin();
        let labels: Vec<&str> = table
            .variants("Adesivo")
            .iter()
            .map(|v| v.label.as_str())
            .collect();
        assert_eq!(labels, ["Adesivo Normal", "Adesivo Normal UV", "Adesivo Perfurado"]);
        assert!(table.variants("Outros").is_empty());
    }
}
