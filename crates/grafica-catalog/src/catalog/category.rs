//! Category tags and the name rules that assign them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::text::contains_ignore_case;

/// Storefront category of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryTag {
    #[serde(rename = "Panfletos")]
    Panfletos,
    #[serde(rename = "Cartões")]
    Cartoes,
    #[serde(rename = "Camisas")]
    Camisas,
    #[serde(rename = "Lonas e Banners")]
    LonasEBanners,
    #[serde(rename = "Adesivos")]
    Adesivos,
    #[default]
    #[serde(rename = "Outros")]
    Outros,
}

/// Category rules, evaluated in order; the first rule with a matching
/// pattern wins regardless of where the pattern occurs in the name.
const CATEGORY_RULES: &[(&[&str], CategoryTag)] = &[
    (&["Panfleto"], CategoryTag::Panfletos),
    (&["Cartão"], CategoryTag::Cartoes),
    (&["Camisa"], CategoryTag::Camisas),
    (&["Lona", "Banner"], CategoryTag::LonasEBanners),
    (&["Adesivo"], CategoryTag::Adesivos),
];

impl CategoryTag {
    /// All tags in rule order, fallback last.
    pub const ALL: [CategoryTag; 6] = [
        CategoryTag::Panfletos,
        CategoryTag::Cartoes,
        CategoryTag::Camisas,
        CategoryTag::LonasEBanners,
        CategoryTag::Adesivos,
        CategoryTag::Outros,
    ];

    /// Classify a product name.
    pub fn for_name(name: &str) -> Self {
        CATEGORY_RULES
            .iter()
            .find(|(patterns, _)| patterns.iter().any(|p| contains_ignore_case(name, p)))
            .map(|(_, tag)| *tag)
            .unwrap_or_default()
    }

    /// Display label (e.g., "Lonas e Banners").
    pub fn label(&self) -> &'static str {
        match self {
            CategoryTag::Panfletos => "Panfletos",
            CategoryTag::Cartoes => "Cartões",
            CategoryTag::Camisas => "Camisas",
            CategoryTag::LonasEBanners => "Lonas e Banners",
            CategoryTag::Adesivos => "Adesivos",
            CategoryTag::Outros => "Outros",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        assert_eq!(CategoryTag::for_name("Panfleto 80g frente"), CategoryTag::Panfletos);
        assert_eq!(CategoryTag::for_name("Cartão de visita frente"), CategoryTag::Cartoes);
        assert_eq!(CategoryTag::for_name("Camisa branca poliester XGG"), CategoryTag::Camisas);
        assert_eq!(CategoryTag::for_name("Banner Personalizado"), CategoryTag::LonasEBanners);
        assert_eq!(CategoryTag::for_name("Lona UV"), CategoryTag::LonasEBanners);
        assert_eq!(CategoryTag::for_name("Adesivo Personalizado"), CategoryTag::Adesivos);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(CategoryTag::for_name("Caneca"), CategoryTag::Outros);
        assert_eq!(CategoryTag::for_name(""), CategoryTag::Outros);
    }

    #[test]
    fn test_rule_order_beats_position_in_name() {
        assert_eq!(CategoryTag::for_name("Cartão Lona Especial"), CategoryTag::Cartoes);
        assert_eq!(CategoryTag::for_name("Lona Cartão Especial"), CategoryTag::Cartoes);
        assert_eq!(CategoryTag::for_name("Adesivo para Lona"), CategoryTag::LonasEBanners);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(CategoryTag::for_name("PANFLETO A5"), CategoryTag::Panfletos);
        assert_eq!(CategoryTag::for_name("cartão fidelidade"), CategoryTag::Cartoes);
    }

    #[test]
    fn test_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&CategoryTag::Cartoes).unwrap();
        assert_eq!(json, "\"Cartões\"");
        let back: CategoryTag = serde_json::from_str("\"Lonas e Banners\"").unwrap();
        assert_eq!(back, CategoryTag::LonasEBanners);
    }
}
