//! Messaging sinks.
//!
//! A sink receives a destination identifier and a message text and takes
//! care of getting it to the vendor. The catalog never waits on a reply.

use url::{form_urlencoded, Url};

use crate::error::{CatalogError, Result};

/// Default messaging deep-link service.
pub const DEFAULT_BASE_URL: &str = "https://wa.me";

/// Receives composed quote messages.
pub trait MessageSink {
    /// Hand off a message for delivery.
    fn deliver(&mut self, destination: &str, text: &str) -> Result<()>;
}

/// Opens (or shows) a messaging deep link.
pub trait LinkOpener {
    fn open(&mut self, link: &Url) -> Result<()>;
}

impl<F> LinkOpener for F
where
    F: FnMut(&Url) -> Result<()>,
{
    fn open(&mut self, link: &Url) -> Result<()> {
        self(link)
    }
}

/// Sink that turns messages into `{base}/{destination}?text={message}` links.
#[derive(Debug, Clone)]
pub struct DeepLinkSink<O> {
    base_url: Url,
    opener: O,
}

impl<O: LinkOpener> DeepLinkSink<O> {
    /// Create a sink for a base URL such as `https://wa.me`.
    pub fn new(base_url: &str, opener: O) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { base_url, opener })
    }

    /// Build the deep link for a message.
    pub fn link(&self, destination: &str, text: &str) -> Result<Url> {
        let destination = normalize_destination(destination)?;

        let mut link = self.base_url.clone();
        if let Ok(mut segments) = link.path_segments_mut() {
            segments.pop_if_empty().push(&destination);
        }
        link.set_query(Some(&format!("text={}", encode_component(text))));
        Ok(link)
    }

    /// Get back the opener.
    pub fn into_opener(self) -> O {
        self.opener
    }
}

impl<O: LinkOpener> MessageSink for DeepLinkSink<O> {
    fn deliver(&mut self, destination: &str, text: &str) -> Result<()> {
        let link = self.link(destination, text)?;
        tracing::info!(%link, "opening messaging link");
        self.opener.open(&link)
    }
}

/// Percent-encode a query value the way browsers' `encodeURIComponent` does.
///
/// Spaces become `%20` and `! ~ ( )` stay literal. An apostrophe stays `%27`,
/// since URLs with a special scheme always escape it in the query.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace("%21", "!")
        .replace("%7E", "~")
        .replace("%28", "(")
        .replace("%29", ")")
}

/// Validate a phone-style destination, dropping a leading `+` and spaces.
pub fn normalize_destination(destination: &str) -> Result<String> {
    let trimmed = destination.trim();
    let digits: String = trimmed
        .strip_prefix('+')
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| *c != ' ')
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CatalogError::InvalidDestination(destination.to_string()));
    }
    Ok(digits)
}
