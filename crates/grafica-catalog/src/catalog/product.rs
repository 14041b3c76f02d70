//! Product and variant types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{image, CategoryTag};
use crate::pricing::PriceRow;
use crate::text::contains_ignore_case;

/// Calculator family of an area-priced product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorKind {
    Lona,
    Banner,
    Adesivo,
}

/// Calculator family rules, first match wins.
const CALCULATOR_RULES: &[(&str, CalculatorKind)] = &[
    ("Lona", CalculatorKind::Lona),
    ("Banner", CalculatorKind::Banner),
    ("Adesivo", CalculatorKind::Adesivo),
];

/// Name tokens marking a product as custom-sized.
const CUSTOM_MARKERS: &[&str] = &["Personalizada", "Personalizado"];

impl CalculatorKind {
    /// Classify a product name.
    pub fn for_name(name: &str) -> Option<Self> {
        CALCULATOR_RULES
            .iter()
            .find(|(pattern, _)| contains_ignore_case(name, pattern))
            .map(|(_, kind)| *kind)
    }

    /// Key into the per-m² table.
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorKind::Lona => "Lona",
            CalculatorKind::Banner => "Banner",
            CalculatorKind::Adesivo => "Adesivo",
        }
    }

    /// Parse a table key, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "lona" => Some(CalculatorKind::Lona),
            "banner" => Some(CalculatorKind::Banner),
            "adesivo" => Some(CalculatorKind::Adesivo),
            _ => None,
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pricing tier of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Id of the price row this tier came from.
    pub id: String,
    /// Quantity or unit label.
    pub quantity_label: String,
    /// Display price.
    pub price_label: String,
}

impl From<&PriceRow> for Variant {
    fn from(row: &PriceRow) -> Self {
        Self {
            id: row.id.clone(),
            quantity_label: row.quantity_label.clone(),
            price_label: row.price_label.clone(),
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product name (unique).
    pub name: String,
    /// Storefront category.
    pub category: CategoryTag,
    /// Pricing tiers, in price-list order.
    pub variants: Vec<Variant>,
    /// Image reference.
    pub image_ref: String,
    /// Whether the product is priced by area.
    pub calculator_eligible: bool,
    /// Calculator family derived from the name.
    pub calculator_kind: Option<CalculatorKind>,
}

impl Product {
    /// Create a product with no variants, deriving everything from its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            category: CategoryTag::for_name(&name),
            image_ref: image::image_for(&name).to_string(),
            calculator_eligible: CUSTOM_MARKERS
                .iter()
                .any(|marker| contains_ignore_case(&name, marker)),
            calculator_kind: CalculatorKind::for_name(&name),
            variants: Vec::new(),
            name,
        }
    }

    /// Calculator to open for this product, if it is priced by area.
    pub fn calculator(&self) -> Option<CalculatorKind> {
        if self.calculator_eligible {
            self.calculator_kind
        } else {
            None
        }
    }

    /// Append a pricing tier.
    pub fn push_variant(&mut self, variant: Variant) {
        self.variants.push(variant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_derivation() {
        let product = Product::new("Lona Personalizada");
        assert_eq!(product.category, CategoryTag::LonasEBanners);
        assert!(product.calculator_eligible);
        assert_eq!(product.calculator_kind, Some(CalculatorKind::Lona));
        assert_eq!(product.calculator(), Some(CalculatorKind::Lona));
        assert!(product.variants.is_empty());
    }

    #[test]
    fn test_fixed_tier_product_has_no_calculator() {
        let product = Product::new("Lona UV");
        assert!(!product.calculator_eligible);
        // Family is still derived from the name
        assert_eq!(product.calculator_kind, Some(CalculatorKind::Lona));
        assert_eq!(product.calculator(), None);
    }

    #[test]
    fn test_calculator_kind_order() {
        assert_eq!(CalculatorKind::for_name("Banner de Lona"), Some(CalculatorKind::Lona));
        assert_eq!(CalculatorKind::for_name("Adesivo Banner"), Some(CalculatorKind::Banner));
        assert_eq!(CalculatorKind::for_name("Camisa"), None);
    }

    #[test]
    fn test_custom_marker_casing() {
        assert!(Product::new("Adesivo personalizado").calculator_eligible);
        assert!(Product::new("BANNER PERSONALIZADO").calculator_eligible);
        assert!(!Product::new("Adesivo Normal").calculator_eligible);
    }

    #[test]
    fn test_calculator_kind_from_key() {
        assert_eq!(CalculatorKind::from_key("banner"), Some(CalculatorKind::Banner));
        assert_eq!(CalculatorKind::from_key(" ADESIVO "), Some(CalculatorKind::Adesivo));
        assert_eq!(CalculatorKind::from_key("Camisa"), None);
        for kind in [CalculatorKind::Lona, CalculatorKind::Banner, CalculatorKind::Adesivo] {
            assert_eq!(CalculatorKind::from_key(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_push_variant_keeps_order() {
        let mut product = Product::new("Panfleto 80g frente");
        product.push_variant(Variant::from(&PriceRow::new("2", "Panfleto 80g frente", "5000", "R$ 220,00")));
        product.push_variant(Variant::from(&PriceRow::new("1", "Panfleto 80g frente", "2500", "R$ 150,00")));
        let ids: Vec<&str> = product.variants.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }
}
