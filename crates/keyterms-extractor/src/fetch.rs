//! Document retrieval
//!
//! `HttpFetcher` is the production implementation of the fetch boundary;
//! `MockFetcher` serves deterministic payloads for tests. Both implement
//! the `DocumentFetcher` trait from `keyterms-domain`.

use async_trait::async_trait;
use keyterms_domain::traits::DocumentFetcher;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during document retrieval
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure or request timeout
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status
    #[error("unexpected status {0}")]
    Status(u16),
}

/// HTTP document fetcher
///
/// Plain GET with a request timeout; no retries, redirects follow
/// reqwest defaults, and no custom headers are sent.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the given request timeout.
    pub fn new(timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("reqwest client with static configuration");

        Self { client }
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    type Error = FetchError;

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, Self::Error> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Mock fetcher serving canned payloads
///
/// Unconfigured URLs fail with a request error, and every call is counted,
/// so tests can assert both dedup behavior and failure handling.
#[derive(Debug, Clone, Default)]
pub struct MockFetcher {
    pages: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    errors: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockFetcher {
    /// Create an empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `bytes` for `url`.
    pub fn add_page(&mut self, url: impl Into<String>, bytes: Vec<u8>) {
        self.pages.lock().unwrap().insert(url.into(), bytes);
    }

    /// Fail requests for `url` with the given reason.
    pub fn add_error(&mut self, url: impl Into<String>, reason: impl Into<String>) {
        self.errors.lock().unwrap().insert(url.into(), reason.into());
    }

    /// Number of times `fetch` was invoked.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl DocumentFetcher for MockFetcher {
    type Error = FetchError;

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(reason) = self.errors.lock().unwrap().get(url) {
            return Err(FetchError::Request(reason.clone()));
        }

        self.pages
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Request(format!("no page configured for {}", url)))
    }
}
