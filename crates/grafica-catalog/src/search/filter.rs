//! Text and category filtering.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Product;
use crate::text::contains_ignore_case;

/// Sentinel selecting every category.
pub const ALL_CATEGORIES: &str = "all";

/// Category constraint of a filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategorySelector {
    /// No constraint.
    #[default]
    All,
    /// Category label must contain this text (case-insensitive).
    Named(String),
}

impl CategorySelector {
    /// Parse a selector; `"all"` means no constraint.
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategorySelector::All
        } else {
            CategorySelector::Named(value.to_string())
        }
    }

    /// Selector value as shown in option lists.
    pub fn as_str(&self) -> &str {
        match self {
            CategorySelector::All => ALL_CATEGORIES,
            CategorySelector::Named(name) => name,
        }
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Named(name) => contains_ignore_case(product.category.label(), name),
        }
    }
}

/// A search term plus a category selector.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Text matched against product names; empty matches everything.
    pub search: String,
    /// Category constraint.
    pub category: CategorySelector,
}

impl CatalogFilter {
    /// Create a filter.
    pub fn new(search: impl Into<String>, category: CategorySelector) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    /// Check whether a product passes both predicates.
    pub fn matches(&self, product: &Product) -> bool {
        contains_ignore_case(&product.name, &self.search) && self.category.matches(product)
    }

    /// Keep the products that match, in input order.
    ///
    /// An empty result is the "no results" state, not an error.
    pub fn apply<'a>(&self, products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a Product> {
        let mut total = 0usize;
        let matched: Vec<&Product> = products
            .into_iter()
            .inspect(|_| total += 1)
            .filter(|p| self.matches(p))
            .collect();

        debug!(
            search = %self.search,
            category = self.category.as_str(),
            total,
            matched = matched.len(),
            "filtered catalog"
        );
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogBuilder;
    use crate::pricing::builtin_rows;

    fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let catalog = CatalogBuilder::new().build(&builtin_rows());
        let all = CatalogFilter::default().apply(&catalog);
        assert_eq!(all.len(), catalog.len());
        assert!(all.iter().zip(catalog.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = CatalogBuilder::new().build(&builtin_rows());
        let found = CatalogFilter::new("CARTÃO", CategorySelector::All).apply(&catalog);
        assert_eq!(names(&found), ["Cartão de visita frente", "Cartão de visita frente e verso"]);
    }

    #[test]
    fn test_category_matches_by_substring() {
        let catalog = CatalogBuilder::new().build(&builtin_rows());
        let banners = CatalogFilter::new("", CategorySelector::parse("banners")).apply(&catalog);
        assert_eq!(
            names(&banners),
            ["Lona UV", "Lona Normal", "Lona Personalizada", "Banner Personalizado"]
        );
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let catalog = CatalogBuilder::new().build(&builtin_rows());
        let found = CatalogFilter::new("personaliz", CategorySelector::parse("Adesivos")).apply(&catalog);
        assert_eq!(names(&found), ["Adesivo Personalizado"]);
    }

    #[test]
    fn test_no_results() {
        let catalog = CatalogBuilder::new().build(&builtin_rows());
        let found = CatalogFilter::new("caneca", CategorySelector::All).apply(&catalog);
        assert!(found.is_empty());
    }

    #[test]
    fn test_all_sentinel_is_exact() {
        assert_eq!(CategorySelector::parse("all"), CategorySelector::All);
        assert_eq!(
            CategorySelector::parse("All"),
            CategorySelector::Named("All".to_string())
        );
    }
}
