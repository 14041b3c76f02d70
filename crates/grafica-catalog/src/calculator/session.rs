//! Calculator state for one open calculator.

use crate::calculator::{AreaCalculator, CalculatorInput, CalculatorResult};
use crate::catalog::CalculatorKind;
use crate::pricing::{UnitPrice, UnitPriceTable};

/// Inputs and last result of a calculator, recomputed only on demand.
///
/// Changing any input clears the held result, so a result always belongs
/// to the inputs currently shown.
#[derive(Debug, Clone)]
pub struct CalculatorSession<'a> {
    calculator: AreaCalculator<'a>,
    input: CalculatorInput,
    result: CalculatorResult,
}

impl<'a> CalculatorSession<'a> {
    /// Open a calculator for a category.
    pub fn open(table: &'a UnitPriceTable, kind: CalculatorKind) -> Self {
        Self::open_category(table, kind.as_str())
    }

    /// Open a calculator for a raw category key.
    pub fn open_category(table: &'a UnitPriceTable, category: impl Into<String>) -> Self {
        Self {
            calculator: AreaCalculator::new(table),
            input: CalculatorInput {
                category: category.into(),
                ..CalculatorInput::default()
            },
            result: CalculatorResult::ZERO,
        }
    }

    /// Category this calculator prices.
    pub fn category(&self) -> &str {
        &self.input.category
    }

    /// Variants the customer can pick from.
    pub fn variant_options(&self) -> &'a [UnitPrice] {
        self.calculator.table().variants(&self.input.category)
    }

    pub fn input(&self) -> &CalculatorInput {
        &self.input
    }

    pub fn result(&self) -> CalculatorResult {
        self.result
    }

    pub fn set_variant(&mut self, variant: impl Into<String>) {
        let variant = variant.into();
        self.input.variant = (!variant.is_empty()).then_some(variant);
        self.result = CalculatorResult::ZERO;
    }

    pub fn set_width(&mut self, width: impl Into<String>) {
        self.input.width = width.into();
        self.result = CalculatorResult::ZERO;
    }

    pub fn set_height(&mut self, height: impl Into<String>) {
        self.input.height = height.into();
        self.result = CalculatorResult::ZERO;
    }

    /// Whether every input has been filled in.
    pub fn can_calculate(&self) -> bool {
        !self.input.width.trim().is_empty()
            && !self.input.height.trim().is_empty()
            && self.input.variant.is_some()
    }

    /// Recompute the result from the current inputs.
    pub fn calculate(&mut self) -> CalculatorResult {
        self.result = self.calculator.compute(&self.input);
        self.result
    }

    /// Whether the held result can back a quote.
    pub fn is_quotable(&self) -> bool {
        self.result.is_quotable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_options() {
        let table = UnitPriceTable::builtin();
        let session = CalculatorSession::open(&table, CalculatorKind::Lona);
        let labels: Vec<&str> = session.variant_options().iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, ["Lona UV", "Lona Normal"]);
    }

    #[test]
    fn test_manual_trigger() {
        let table = UnitPriceTable::builtin();
        let mut session = CalculatorSession::open(&table, CalculatorKind::Lona);
        assert!(!session.can_calculate());

        session.set_variant("Lona UV");
        session.set_width("2");
        session.set_height("3");
        assert!(session.can_calculate());
        // Nothing computed until asked
        assert!(session.result().is_zero());

        let result = session.calculate();
        assert_eq!(result.area, 6.0);
        assert_eq!(result.total, 510.0);
        assert!(session.is_quotable());
    }

    #[test]
    fn test_input_change_clears_result() {
        let table = UnitPriceTable::builtin();
        let mut session = CalculatorSession::open(&table, CalculatorKind::Adesivo);
        session.set_variant("Adesivo Normal");
        session.set_width("1");
        session.set_height("1");
        session.calculate();
        assert!(session.is_quotable());

        session.set_width("1.");
        assert!(session.result().is_zero());
        assert!(!session.is_quotable());

        session.set_width("");
        assert!(!session.can_calculate());
        assert!(session.calculate().is_zero());
    }

    #[test]
    fn test_unknown_category_has_no_options() {
        let table = UnitPriceTable::builtin();
        let session = CalculatorSession::open_category(&table, "Camisa");
        assert!(session.variant_options().is_empty());
    }
}
