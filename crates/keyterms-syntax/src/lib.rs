//! Keyterms Syntax Providers
//!
//! Implementations of the `SyntaxAnalyzer` trait from `keyterms-domain`:
//! the adapters that turn a paragraph of plain text into part-of-speech
//! tagged tokens.
//!
//! # Providers
//!
//! - `MockAnalyzer`: deterministic mock for testing
//! - `RemoteAnalyzer`: HTTP client for a hosted syntax-analysis service
//!
//! # Examples
//!
//! ```
//! use keyterms_syntax::MockAnalyzer;
//! use keyterms_domain::{PosTag, Token};
//! use keyterms_domain::traits::SyntaxAnalyzer;
//!
//! # async fn example() {
//! let analyzer = MockAnalyzer::new(vec![Token::new("cat", PosTag::Noun)]);
//! let tokens = analyzer.detect_syntax("any text").await.unwrap();
//! assert_eq!(tokens.len(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod remote;

use async_trait::async_trait;
use keyterms_domain::traits::SyntaxAnalyzer;
use keyterms_domain::Token;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use remote::RemoteAnalyzer;

/// Errors that can occur during syntax analysis
#[derive(Error, Debug)]
pub enum SyntaxError {
    /// Request rejected before being sent (empty text, bad language code)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Mock syntax analyzer for deterministic testing
///
/// Returns pre-configured token sequences without making any network calls.
/// The mock enforces the same non-empty-text precondition as the remote
/// analyzer, so pipeline tests exercise the real validation path.
///
/// # Examples
///
/// ```
/// use keyterms_syntax::MockAnalyzer;
/// use keyterms_domain::{PosTag, Token};
/// use keyterms_domain::traits::SyntaxAnalyzer;
///
/// # async fn example() {
/// let mut analyzer = MockAnalyzer::default();
/// analyzer.add_response("The cat runs.", vec![
///     Token::new("The", PosTag::Det),
///     Token::new("cat", PosTag::Noun),
///     Token::new("runs", PosTag::Verb),
/// ]);
/// let tokens = analyzer.detect_syntax("The cat runs.").await.unwrap();
/// assert_eq!(tokens.len(), 3);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockAnalyzer {
    default_tokens: Vec<Token>,
    responses: Arc<Mutex<HashMap<String, Vec<Token>>>>,
    errors: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockAnalyzer {
    /// Create a mock that returns the same tokens for every input.
    pub fn new(default_tokens: Vec<Token>) -> Self {
        Self {
            default_tokens,
            ..Self::default()
        }
    }

    /// Add a specific token response for a given input text.
    pub fn add_response(&mut self, text: impl Into<String>, tokens: Vec<Token>) {
        self.responses.lock().unwrap().insert(text.into(), tokens);
    }

    /// Configure a communication error for a specific input text.
    pub fn add_error(&mut self, text: impl Into<String>, reason: impl Into<String>) {
        self.errors.lock().unwrap().insert(text.into(), reason.into());
    }

    /// Number of times `detect_syntax` was invoked.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count.
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

#[async_trait]
impl SyntaxAnalyzer for MockAnalyzer {
    type Error = SyntaxError;

    async fn detect_syntax(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if text.trim().is_empty() {
            return Err(SyntaxError::Validation(
                "text must not be empty".to_string(),
            ));
        }

        if let Some(reason) = self.errors.lock().unwrap().get(text) {
            return Err(SyntaxError::Communication(reason.clone()));
        }

        let responses = self.responses.lock().unwrap();
        if let Some(tokens) = responses.get(text) {
            return Ok(tokens.clone());
        }

        Ok(self.default_tokens.clone())
    }
}
