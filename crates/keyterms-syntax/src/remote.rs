//! Remote syntax-analysis client
//!
//! HTTP adapter for a hosted detect-syntax service. The service takes a
//! language code and a non-empty text and returns tokens annotated with
//! part-of-speech tags, using PascalCase JSON field names on the wire.
//!
//! # Features
//!
//! - Async HTTP communication via reqwest
//! - Configurable endpoint and language code
//! - Retry logic with exponential backoff
//! - Request timeout handling

use crate::SyntaxError;
use async_trait::async_trait;
use keyterms_domain::traits::SyntaxAnalyzer;
use keyterms_domain::{PosTag, Token};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default language code sent with every request
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Default timeout for analysis requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// HTTP client for a hosted syntax-analysis service
///
/// The language code is fixed per client; this tool analyzes a single
/// supported language per run.
pub struct RemoteAnalyzer {
    endpoint: String,
    language_code: String,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for the detect-syntax API
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct DetectSyntaxRequest {
    language_code: String,
    text: String,
}

/// Response from the detect-syntax API
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DetectSyntaxResponse {
    syntax_tokens: Vec<WireToken>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WireToken {
    text: String,
    part_of_speech: WirePartOfSpeech,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WirePartOfSpeech {
    tag: String,
}

impl RemoteAnalyzer {
    /// Create a new remote analyzer.
    ///
    /// # Parameters
    ///
    /// - `endpoint`: service base URL (e.g., "http://localhost:9400")
    /// - `language_code`: language of the analyzed text (e.g., "en")
    pub fn new(endpoint: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, language_code, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a remote analyzer with an explicit request timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        language_code: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("reqwest client with static configuration");

        Self {
            endpoint: endpoint.into(),
            language_code: language_code.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set the maximum number of retry attempts.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Analyze `text`, retrying transient failures with exponential backoff.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `text` is empty (rejected before any request is sent)
    /// - the service cannot be reached or keeps failing
    /// - the service reports rate limiting
    /// - the response body cannot be decoded
    pub async fn detect_syntax(&self, text: &str) -> Result<Vec<Token>, SyntaxError> {
        if text.trim().is_empty() {
            return Err(SyntaxError::Validation(
                "text must not be empty".to_string(),
            ));
        }

        let url = format!("{}/v1/detect-syntax", self.endpoint);
        let request_body = DetectSyntaxRequest {
            language_code: self.language_code.clone(),
            text: text.to_string(),
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&request_body).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        return match response.json::<DetectSyntaxResponse>().await {
                            Ok(body) => Ok(body
                                .syntax_tokens
                                .into_iter()
                                .map(WireToken::into_token)
                                .collect()),
                            Err(e) => Err(SyntaxError::InvalidResponse(format!(
                                "Failed to parse response: {}",
                                e
                            ))),
                        };
                    } else if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(SyntaxError::RateLimitExceeded);
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(SyntaxError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(SyntaxError::Communication(format!(
                        "Request failed: {}",
                        e
                    )));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            SyntaxError::Communication("Max retries exceeded".to_string())
        }))
    }
}

impl WireToken {
    /// Unknown tags degrade to `O` so a tagset extension on the service
    /// side filters out instead of failing the run.
    fn into_token(self) -> Token {
        let tag = PosTag::parse(&self.part_of_speech.tag).unwrap_or(PosTag::O);
        Token::new(self.text, tag)
    }
}

#[async_trait]
impl SyntaxAnalyzer for RemoteAnalyzer {
    type Error = SyntaxError;

    async fn detect_syntax(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        RemoteAnalyzer::detect_syntax(self, text).await
    }
}
