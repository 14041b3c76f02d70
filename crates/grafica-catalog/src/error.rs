//! Catalog error types.

use thiserror::Error;

/// Errors raised while loading reference data or delivering quotes.
///
/// The catalog operations themselves never fail; these cover the edges
/// where data comes from a file or a message leaves the process.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two price rows share the same id.
    #[error("Duplicate price row id: {0}")]
    DuplicateRowId(String),

    /// A required field is blank.
    #[error("Empty field `{field}` in {context}")]
    EmptyField { field: &'static str, context: String },

    /// A per-m² price is zero, negative or not finite.
    #[error("Invalid price per m² for {category} / {variant}: {price}")]
    InvalidUnitPrice {
        category: String,
        variant: String,
        price: f64,
    },

    /// A calculator category appears more than once.
    #[error("Duplicate calculator category: {0}")]
    DuplicateCalculatorCategory(String),

    /// Messaging destination is not a phone-style identifier.
    #[error("Invalid messaging destination: {0:?}")]
    InvalidDestination(String),

    /// Messaging base URL cannot take a path.
    #[error("Invalid messaging base URL: {0}")]
    InvalidBaseUrl(String),

    /// Deep link could not be built.
    #[error("Invalid messaging link: {0}")]
    InvalidLink(#[from] url::ParseError),

    /// Reference data file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML reference data could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// JSON reference data could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
