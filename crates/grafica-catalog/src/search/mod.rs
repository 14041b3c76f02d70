//! Search module.
//!
//! Contains the catalog filter and the category selector options.

mod facets;
mod filter;

pub use facets::{category_options, CategoryOption};
pub use filter::{CatalogFilter, CategorySelector, ALL_CATEGORIES};
