//! Product catalog module.
//!
//! Contains products, variants, categories, and the builder that groups
//! price rows into products.

mod builder;
mod category;
pub mod image;
mod product;

pub use builder::{Catalog, CatalogBuilder};
pub use category::CategoryTag;
pub use product::{CalculatorKind, Product, Variant};
