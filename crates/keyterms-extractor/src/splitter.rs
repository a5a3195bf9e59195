//! Paragraph splitting for document bodies

use keyterms_domain::traits::Sanitizer;

/// Default paragraph boundary in the source markup
pub const DEFAULT_DELIMITER: &str = "</p>";

/// Splits a document body into sanitized paragraphs.
///
/// The body is cut at a literal closing-paragraph delimiter, each segment
/// is run through the sanitizer, and segments that are empty after
/// sanitization are dropped — they must never reach the syntax analyzer.
#[derive(Debug, Clone)]
pub struct ParagraphSplitter<S> {
    sanitizer: S,
    delimiter: String,
}

impl<S: Sanitizer> ParagraphSplitter<S> {
    /// Create a splitter using the default `</p>` delimiter.
    pub fn new(sanitizer: S) -> Self {
        Self {
            sanitizer,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Override the paragraph delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Split `body` into non-empty sanitized paragraphs, freshly
    /// materialized per document.
    pub fn split(&self, body: &str) -> Vec<String> {
        body.split(&self.delimiter)
            .map(|segment| self.sanitizer.sanitize(segment).trim().to_string())
            .filter(|paragraph| !paragraph.is_empty())
            .collect()
    }
}
