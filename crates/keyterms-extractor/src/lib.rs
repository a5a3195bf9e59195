//! Keyterms Extractor
//!
//! The aggregation pipeline: retrieves documents, splits and sanitizes
//! their text, classifies paragraphs through a syntax analyzer, filters
//! tokens by grammatical role, and accumulates frequencies across the
//! whole link set.
//!
//! # Architecture
//!
//! ```text
//! LinkSet → fetch → body → paragraphs → analyze → filter → FrequencyTable
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use keyterms_extractor::{
//!     HttpFetcher, ParagraphSplitter, Pipeline, PipelineConfig, StrictSanitizer,
//! };
//! use keyterms_domain::{rank, LinkSet};
//! use keyterms_syntax::RemoteAnalyzer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PipelineConfig::default();
//! let fetcher = HttpFetcher::new(config.fetch_timeout_secs);
//! let analyzer = RemoteAnalyzer::new("http://localhost:9400", "en");
//! let splitter = ParagraphSplitter::new(StrictSanitizer);
//!
//! let pipeline = Pipeline::new(fetcher, analyzer, splitter, config)?;
//!
//! let links: LinkSet = ["http://example.com/a.json"].into_iter().collect();
//! let outcome = pipeline.run(&links).await?;
//!
//! for entry in rank(&outcome.table, 25) {
//!     println!("{}\t{}", entry.count, entry.key);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod document;
mod error;
mod fetch;
mod pipeline;
mod sanitize;
mod splitter;
mod types;

#[cfg(test)]
mod tests;

pub use config::{FailurePolicy, PipelineConfig};
pub use document::{body_field, TextExtractor};
pub use error::{ExtractorError, ExtractorResult};
pub use fetch::{FetchError, HttpFetcher, MockFetcher};
pub use pipeline::Pipeline;
pub use sanitize::StrictSanitizer;
pub use splitter::ParagraphSplitter;
pub use types::{LinkFailure, RunOutcome};
