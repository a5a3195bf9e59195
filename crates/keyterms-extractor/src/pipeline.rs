//! Pipeline driver
//!
//! Owns the run: traverses the link set, extracts and splits each
//! document, classifies paragraphs, filters tokens, and folds per-link
//! partial tables into the run table. The driver is the only writer of
//! shared state; fetcher, analyzer, and sanitizer are injected
//! capabilities that never see the accumulator.

use crate::config::{FailurePolicy, PipelineConfig};
use crate::document::TextExtractor;
use crate::error::ExtractorError;
use crate::splitter::ParagraphSplitter;
use crate::types::{LinkFailure, RunOutcome};
use crate::ExtractorResult;
use futures::stream::{self, StreamExt};
use keyterms_domain::traits::{DocumentFetcher, Sanitizer, SyntaxAnalyzer};
use keyterms_domain::{FrequencyTable, LinkSet, PosFilter};
use std::collections::BTreeSet;
use std::fmt::Display;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// The aggregation pipeline.
///
/// Generic over its collaborators so tests can substitute deterministic
/// stubs for the network-backed implementations.
pub struct Pipeline<F, A, S> {
    extractor: TextExtractor<F>,
    analyzer: A,
    splitter: ParagraphSplitter<S>,
    filter: PosFilter,
    config: PipelineConfig,
}

impl<F, A, S> Pipeline<F, A, S>
where
    F: DocumentFetcher,
    A: SyntaxAnalyzer,
    S: Sanitizer,
    F::Error: Display,
    A::Error: Display,
{
    /// Create a pipeline with the default part-of-speech allow-list.
    pub fn new(
        fetcher: F,
        analyzer: A,
        splitter: ParagraphSplitter<S>,
        config: PipelineConfig,
    ) -> ExtractorResult<Self> {
        config.validate().map_err(ExtractorError::Config)?;
        let extractor = TextExtractor::new(fetcher, config.fetch_timeout());
        Ok(Self {
            extractor,
            analyzer,
            splitter,
            filter: PosFilter::default(),
            config,
        })
    }

    /// Replace the part-of-speech filter.
    pub fn with_filter(mut self, filter: PosFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Process every link in the set and aggregate the results.
    ///
    /// Links are traversed in sorted order. With `max_parallel_links > 1`
    /// several links are in flight at once, each building a local partial
    /// table; partials are absorbed here, in the driver, so the aggregate
    /// counts and the ranking are identical however completions interleave.
    ///
    /// Under [`FailurePolicy::Abort`] the first per-link error fails the
    /// run and all partial progress is discarded. Under
    /// [`FailurePolicy::Skip`] the failure is recorded in the outcome and
    /// the remaining links still count.
    pub async fn run(&self, links: &LinkSet) -> ExtractorResult<RunOutcome> {
        let mut urls: Vec<&str> = links.iter().collect();
        urls.sort_unstable();

        info!("processing {} distinct links", urls.len());

        let mut results = stream::iter(urls)
            .map(|url| async move { (url, self.process_link(url).await) })
            .buffer_unordered(self.config.max_parallel_links.max(1));

        let mut table = FrequencyTable::new();
        let mut processed = BTreeSet::new();
        let mut failures = Vec::new();

        while let Some((url, result)) = results.next().await {
            match result {
                Ok(partial) => {
                    info!("parsed {} ({} accepted tokens)", url, partial.total());
                    table.absorb(partial);
                    processed.insert(url.to_string());
                }
                Err(e) => match self.config.failure_policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Skip => {
                        warn!("skipping {}: {}", url, e);
                        failures.push(LinkFailure {
                            url: url.to_string(),
                            reason: e.to_string(),
                        });
                    }
                },
            }
        }

        Ok(RunOutcome {
            table,
            processed,
            failures,
        })
    }

    /// Process one link into a local partial table.
    async fn process_link(&self, url: &str) -> ExtractorResult<FrequencyTable> {
        let body = self.extractor.extract(url).await?;
        let paragraphs = self.splitter.split(&body);
        debug!("{}: {} non-empty paragraphs", url, paragraphs.len());

        let mut partial = FrequencyTable::new();
        for paragraph in &paragraphs {
            let tokens = timeout(
                self.config.syntax_timeout(),
                self.analyzer.detect_syntax(paragraph),
            )
            .await
            .map_err(|_| ExtractorError::Syntax(format!("{}: analysis timed out", url)))?
            .map_err(|e| ExtractorError::Syntax(format!("{}: {}", url, e)))?;

            for token in tokens.iter().filter(|t| self.filter.accept(t)) {
                partial.merge(token);
            }
        }

        Ok(partial)
    }
}
