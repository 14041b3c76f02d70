//! Amounts in reais, for rendering computed prices.
//!
//! Calculator amounts keep full `f64` precision while they are computed;
//! rounding to centavos happens only when rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency symbol used in every rendered amount.
pub const SYMBOL: &str = "R$";

/// Centavos shown when rendering.
const DECIMAL_PLACES: usize = 2;

/// A monetary value in reais.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money {
    /// Unrounded amount.
    pub amount: f64,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    /// Format as a display string (e.g., "R$ 510.00").
    pub fn display(&self) -> String {
        format!("{} {}", SYMBOL, self.display_amount())
    }

    /// Format the rounded amount without symbol (e.g., "510.00").
    pub fn display_amount(&self) -> String {
        format!("{:.places$}", self.amount, places = DECIMAL_PLACES)
    }

    /// Format without padding decimals (e.g., "R$ 102.5"), as used for rate listings.
    pub fn display_compact(&self) -> String {
        format!("{} {}", SYMBOL, self.amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
