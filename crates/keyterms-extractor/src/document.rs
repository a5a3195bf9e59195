//! Text extraction from fetched documents
//!
//! Documents arrive as JSON objects; the text of interest lives in their
//! `"body"` field. The raw payload is dropped as soon as the body string
//! is pulled out.

use crate::error::ExtractorError;
use crate::ExtractorResult;
use keyterms_domain::traits::DocumentFetcher;
use serde_json::Value;
use std::fmt::Display;
use std::time::Duration;
use tokio::time::timeout;

/// Field of the structured document that holds the text
const BODY_FIELD: &str = "body";

/// Retrieves a URL and extracts its body text.
pub struct TextExtractor<F> {
    fetcher: F,
    fetch_timeout: Duration,
}

impl<F> TextExtractor<F>
where
    F: DocumentFetcher,
    F::Error: Display,
{
    /// Create an extractor over the given fetcher.
    pub fn new(fetcher: F, fetch_timeout: Duration) -> Self {
        Self {
            fetcher,
            fetch_timeout,
        }
    }

    /// Fetch `url` and return the document's body text.
    ///
    /// A fetch timeout is reported as a fetch error, matching how a
    /// network failure at the same stage would surface.
    pub async fn extract(&self, url: &str) -> ExtractorResult<String> {
        let bytes = timeout(self.fetch_timeout, self.fetcher.fetch(url))
            .await
            .map_err(|_| ExtractorError::Fetch(format!("{}: request timed out", url)))?
            .map_err(|e| ExtractorError::Fetch(format!("{}: {}", url, e)))?;

        body_field(&bytes)
    }
}

/// Parse a JSON document and return its `"body"` string field.
pub fn body_field(bytes: &[u8]) -> ExtractorResult<String> {
    let document: Value = serde_json::from_slice(bytes)?;

    document
        .get(BODY_FIELD)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ExtractorError::MissingField(BODY_FIELD.to_string()))
}
