//! Quote message composition.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::CalculatorSession;
use crate::error::Result;
use crate::money::Money;
use crate::quote::MessageSink;

/// Product name used for the general, catalog-wide inquiry.
pub const GENERAL_INQUIRY: &str = "Catálogo Geral";

/// What the customer is asking about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inquiry {
    /// Ask about a catalog product (or the whole catalog).
    Catalog { product: String },
    /// Ask for a quote on a calculated custom size.
    Calculator {
        variant: String,
        width: f64,
        height: f64,
        area: f64,
        total: f64,
    },
}

impl Inquiry {
    /// Inquiry about one product.
    pub fn product(name: impl Into<String>) -> Self {
        Inquiry::Catalog {
            product: name.into(),
        }
    }

    /// Inquiry about the whole catalog.
    pub fn general() -> Self {
        Self::product(GENERAL_INQUIRY)
    }

    /// Inquiry for the session's current result, if it can back a quote.
    pub fn from_session(session: &CalculatorSession<'_>) -> Option<Self> {
        if !session.is_quotable() {
            return None;
        }
        let input = session.input();
        let result = session.result();
        Some(Inquiry::Calculator {
            variant: input.variant.clone()?,
            width: input.width_m()?,
            height: input.height_m()?,
            area: result.area,
            total: result.total,
        })
    }
}

/// Where each kind of inquiry is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destinations {
    /// Destination for product and general inquiries.
    pub catalog: String,
    /// Destination for calculator quotes.
    pub calculator: String,
}

impl Default for Destinations {
    fn default() -> Self {
        Self {
            catalog: "5522997179616".to_string(),
            calculator: "5511999999999".to_string(),
        }
    }
}

impl Destinations {
    /// Destination for an inquiry.
    pub fn for_inquiry(&self, inquiry: &Inquiry) -> &str {
        match inquiry {
            Inquiry::Catalog { .. } => &self.catalog,
            Inquiry::Calculator { .. } => &self.calculator,
        }
    }
}

/// A composed message, ready for a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteMessage {
    pub destination: String,
    pub text: String,
}

/// Formats inquiries and hands them to a [`MessageSink`].
#[derive(Debug, Clone, Default)]
pub struct QuoteMessageComposer {
    destinations: Destinations,
}

impl QuoteMessageComposer {
    pub fn new(destinations: Destinations) -> Self {
        Self { destinations }
    }

    pub fn destinations(&self) -> &Destinations {
        &self.destinations
    }

    /// Render the message text for an inquiry.
    pub fn text(&self, inquiry: &Inquiry) -> String {
        match inquiry {
            Inquiry::Catalog { product } => {
                format!("Olá! Gostaria de saber mais sobre: {}", product)
            }
            Inquiry::Calculator {
                variant,
                width,
                height,
                area,
                total,
            } => format!(
                "Olá! Gostaria de um orçamento para:\n{}\nDimensões: {}m x {}m ({:.2}m²)\nValor calculado: {}",
                variant,
                width,
                height,
                area,
                Money::new(*total).display()
            ),
        }
    }

    /// Compose the message for an inquiry.
    pub fn compose(&self, inquiry: &Inquiry) -> QuoteMessage {
        QuoteMessage {
            destination: self.destinations.for_inquiry(inquiry).to_string(),
            text: self.text(inquiry),
        }
    }

    /// Compose and hand the message to a sink.
    pub fn send<S: MessageSink + ?Sized>(&self, inquiry: &Inquiry, sink: &mut S) -> Result<QuoteMessage> {
        let message = self.compose(inquiry);
        debug!(destination = %message.destination, "delivering quote message");
        sink.deliver(&message.destination, &message.text)?;
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CalculatorKind;
    use crate::pricing::UnitPriceTable;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<(String, String)>,
    }

    impl MessageSink for RecordingSink {
        fn deliver(&mut self, destination: &str, text: &str) -> Result<()> {
            self.calls.push((destination.to_string(), text.to_string()));
            Ok(())
        }
    }

    fn calculator_inquiry() -> Inquiry {
        Inquiry::Calculator {
            variant: "Lona UV".to_string(),
            width: 2.0,
            height: 3.0,
            area: 6.0,
            total: 510.0,
        }
    }

    #[test]
    fn test_catalog_text() {
        let composer = QuoteMessageComposer::default();
        assert_eq!(
            composer.text(&Inquiry::product("Lona UV")),
            "Olá! Gostaria de saber mais sobre: Lona UV"
        );
        assert_eq!(
            composer.text(&Inquiry::general()),
            "Olá! Gostaria de saber mais sobre: Catálogo Geral"
        );
    }

    #[test]
    fn test_calculator_text() {
        let text = QuoteMessageComposer::default().text(&calculator_inquiry());
        assert_eq!(
            text,
            "Olá! Gostaria de um orçamento para:\nLona UV\nDimensões: 2m x 3m (6.00m²)\nValor calculado: R$ 510.00"
        );
    }

    #[test]
    fn test_calculator_text_rounds_area_and_total() {
        let inquiry = Inquiry::Calculator {
            variant: "Adesivo Normal".to_string(),
            width: 1.25,
            height: 0.333,
            area: 1.25 * 0.333,
            total: 29.137,
        };
        let text = QuoteMessageComposer::default().text(&inquiry);
        assert!(text.contains("1.25m x 0.333m (0.42m²)"));
        assert!(text.contains("R$ 29.14"));
    }

    #[test]
    fn test_destinations_by_kind() {
        let composer = QuoteMessageComposer::default();
        assert_eq!(composer.compose(&Inquiry::general()).destination, "5522997179616");
        assert_eq!(composer.compose(&calculator_inquiry()).destination, "5511999999999");
    }

    #[test]
    fn test_send_records_call() {
        let composer = QuoteMessageComposer::new(Destinations {
            catalog: "551100000000".to_string(),
            calculator: "551100000001".to_string(),
        });
        let mut sink = RecordingSink::default();

        let message = composer.send(&Inquiry::product("Lona UV"), &mut sink).unwrap();

        assert_eq!(sink.calls.len(), 1);
        assert_eq!(sink.calls[0].0, "551100000000");
        assert_eq!(sink.calls[0].1, message.text);
    }

    #[test]
    fn test_from_session() {
        let table = UnitPriceTable::builtin();
        let mut session = CalculatorSession::open(&table, CalculatorKind::Lona);
        session.set_variant("Lona UV");
        session.set_width("2");
        session.set_height("3");
        assert_eq!(Inquiry::from_session(&session), None);

        session.calculate();
        assert_eq!(Inquiry::from_session(&session), Some(calculator_inquiry()));
    }
}
