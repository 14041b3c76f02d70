//! Catalog domain types and logic for a print-shop storefront.
//!
//! This crate provides the pure, synchronous core of the storefront:
//!
//! - **Pricing**: the reference price rows and the per-m² table
//! - **Catalog**: grouping rows into products with ordered variants
//! - **Search**: text and category filtering, category options
//! - **Calculator**: area-based pricing for custom-sized goods
//! - **Quote**: inquiry messages and the messaging sink seam
//!
//! # Example
//!
//! ```rust
//! use grafica_catalog::prelude::*;
//!
//! let table = PriceTable::builtin();
//! let catalog = CatalogBuilder::new().build(&table.rows);
//!
//! let filter = CatalogFilter::new("lona", CategorySelector::All);
//! let lonas = filter.apply(catalog.iter());
//! assert_eq!(lonas.len(), 3);
//!
//! let calculator = AreaCalculator::new(&table.unit_prices);
//! let result = calculator.compute(&CalculatorInput::new("Lona", "Lona UV", "2.5", "1.5"));
//! assert_eq!(result.total, 318.75);
//! ```

pub mod error;
pub mod money;
mod text;

pub mod calculator;
pub mod catalog;
pub mod pricing;
pub mod quote;
pub mod search;

pub use error::CatalogError;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::money::Money;

    // Pricing
    pub use crate::pricing::{PriceRow, PriceTable, UnitPrice, UnitPriceCategory, UnitPriceTable};

    // Catalog
    pub use crate::catalog::{
        Catalog, CatalogBuilder, CalculatorKind, CategoryTag, Product, Variant,
    };

    // Search
    pub use crate::search::{category_options, CatalogFilter, CategoryOption, CategorySelector};

    // Calculator
    pub use crate::calculator::{AreaCalculator, CalculatorInput, CalculatorResult, CalculatorSession};

    // Quote
    pub use crate::quote::{
        DeepLinkSink, Destinations, Inquiry, LinkOpener, MessageSink, QuoteMessage,
        QuoteMessageComposer, GENERAL_INQUIRY,
    };
}
