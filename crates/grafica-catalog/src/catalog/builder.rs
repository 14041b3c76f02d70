//! Grouping price rows into products.

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::catalog::{Product, Variant};
use crate::pricing::PriceRow;

/// Products keyed by name, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by its exact name.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.index.get(name).map(|&i| &self.products[i])
    }

    /// Iterate products in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Products as a slice, in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Total number of variants across all products.
    pub fn variant_count(&self) -> usize {
        self.products.iter().map(|p| p.variants.len()).sum()
    }

    /// Products priced by area.
    pub fn calculator_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.calculator().is_some())
    }

    /// Find the product for `name`, creating it on first sight.
    fn entry(&mut self, name: &str) -> &mut Product {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => {
                let i = self.products.len();
                self.products.push(Product::new(name));
                self.index.insert(name.to_string(), i);
                i
            }
        };
        &mut self.products[i]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.products.serialize(serializer)
    }
}

/// Builds a [`Catalog`] from a flat price list.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogBuilder;

impl CatalogBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Group rows by product name.
    ///
    /// Each distinct name becomes one product, and every row (including the
    /// first of its group) becomes a variant of that product, in row order.
    pub fn build<'a>(&self, rows: impl IntoIterator<Item = &'a PriceRow>) -> Catalog {
        let mut catalog = Catalog::default();
        let mut row_count = 0usize;

        for row in rows {
            catalog.entry(&row.name).push_variant(Variant::from(row));
            row_count += 1;
        }

        debug!(rows = row_count, products = catalog.len(), "built catalog");
        catalog
    }
}
