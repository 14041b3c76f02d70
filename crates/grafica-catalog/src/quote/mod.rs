//! Quote module.
//!
//! Composes inquiry messages and hands them to a messaging sink.

mod message;
mod sink;

pub use message::{Destinations, Inquiry, QuoteMessage, QuoteMessageComposer, GENERAL_INQUIRY};
pub use sink::{normalize_destination, DeepLinkSink, LinkOpener, MessageSink, DEFAULT_BASE_URL};
