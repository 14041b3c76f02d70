//! Area-based pricing for custom-sized goods.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::money::Money;
use crate::pricing::UnitPriceTable;

/// Raw calculator inputs, as typed by the customer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Calculator category key (e.g., "Lona").
    pub category: String,
    /// Selected variant; `None` until the customer picks one.
    pub variant: Option<String>,
    /// Width in meters, unparsed.
    pub width: String,
    /// Height in meters, unparsed.
    pub height: String,
}

impl CalculatorInput {
    /// Create an input; an empty variant counts as unselected.
    pub fn new(
        category: impl Into<String>,
        variant: impl Into<String>,
        width: impl Into<String>,
        height: impl Into<String>,
    ) -> Self {
        let variant = variant.into();
        Self {
            category: category.into(),
            variant: (!variant.is_empty()).then_some(variant),
            width: width.into(),
            height: height.into(),
        }
    }

    /// Parsed width, if it is a positive number.
    pub fn width_m(&self) -> Option<f64> {
        parse_dimension(&self.width)
    }

    /// Parsed height, if it is a positive number.
    pub fn height_m(&self) -> Option<f64> {
        parse_dimension(&self.height)
    }
}

/// Outcome of one calculation.
///
/// Values keep full precision; round only when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorResult {
    /// Area in m².
    pub area: f64,
    /// Price per m².
    pub price_per_unit: f64,
    /// `area * price_per_unit`.
    pub total: f64,
}

impl CalculatorResult {
    /// The "not yet computable" result.
    pub const ZERO: CalculatorResult = CalculatorResult {
        area: 0.0,
        price_per_unit: 0.0,
        total: 0.0,
    };

    /// Check if this is the zero result.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Check if the result can back a quote (area and total both positive).
    pub fn is_quotable(&self) -> bool {
        self.area > 0.0 && self.total > 0.0
    }

    /// Total as money.
    pub fn total_money(&self) -> Money {
        Money::new(self.total)
    }

    /// Price per m² as money.
    pub fn unit_price_money(&self) -> Money {
        Money::new(self.price_per_unit)
    }
}

/// Parse a dimension typed in meters.
///
/// Surrounding whitespace is ignored and a comma is accepted as the decimal
/// separator. Anything that is not a finite number above zero yields `None`.
pub fn parse_dimension(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replacen(',', ".", 1);
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Computes area and price from the per-m² table.
#[derive(Debug, Clone, Copy)]
pub struct AreaCalculator<'a> {
    table: &'a UnitPriceTable,
}

impl<'a> AreaCalculator<'a> {
    pub fn new(table: &'a UnitPriceTable) -> Self {
        Self { table }
    }

    /// The per-m² table this calculator reads.
    pub fn table(&self) -> &'a UnitPriceTable {
        self.table
    }

    /// Compute from raw inputs.
    ///
    /// Incomplete or invalid input yields [`CalculatorResult::ZERO`]; this
    /// never fails.
    pub fn compute(&self, input: &CalculatorInput) -> CalculatorResult {
        let (Some(width), Some(height)) = (input.width_m(), input.height_m()) else {
            debug!(width = %input.width, height = %input.height, "dimensions not computable");
            return CalculatorResult::ZERO;
        };
        let Some(variant) = input.variant.as_deref() else {
            debug!("no variant selected");
            return CalculatorResult::ZERO;
        };
        self.compute_dimensions(&input.category, variant, width, height)
    }

    /// Compute from parsed dimensions.
    pub fn compute_dimensions(
        &self,
        category: &str,
        variant: &str,
        width: f64,
        height: f64,
    ) -> CalculatorResult {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return CalculatorResult::ZERO;
        }
        let Some(price_per_unit) = self.table.price_per_m2(category, variant) else {
            debug!(category, variant, "no per-m² price for variant");
            return CalculatorResult::ZERO;
        };

        let area = width * height;
        let result = CalculatorResult {
            area,
            price_per_unit,
            total: area * price_per_unit,
        };
        debug!(category, variant, area, total = result.total, "calculated price");
        result
    }
}
