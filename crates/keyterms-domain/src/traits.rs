//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the aggregation logic and
//! infrastructure. Production implementations live in other crates
//! (keyterms-extractor, keyterms-syntax); deterministic mocks implement the
//! same traits so pipeline behavior is testable without network access.

use crate::token::Token;
use async_trait::async_trait;

/// Retrieves the raw payload behind a URL.
///
/// Implemented by the infrastructure layer (keyterms-extractor).
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Error type for fetch operations
    type Error;

    /// Fetch the resource at `url` and return its raw bytes.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, Self::Error>;
}

/// Classifies text into tokens with part-of-speech tags.
///
/// Implemented by the infrastructure layer (keyterms-syntax). Callers must
/// never pass empty text; implementations reject it before doing any work.
#[async_trait]
pub trait SyntaxAnalyzer: Send + Sync {
    /// Error type for analysis operations
    type Error;

    /// Analyze `text` and return its tokens in document order.
    async fn detect_syntax(&self, text: &str) -> Result<Vec<Token>, Self::Error>;
}

/// Strips markup from a text fragment, returning plain text.
///
/// Best-effort and deterministic; there is no error case.
pub trait Sanitizer: Send + Sync {
    /// Remove all markup from `markup`, keeping the text content.
    fn sanitize(&self, markup: &str) -> String;
}
