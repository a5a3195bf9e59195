//! Result types for a pipeline run

use keyterms_domain::FrequencyTable;
use std::collections::BTreeSet;

/// Everything a completed run produced.
#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    /// Aggregated counts across all successfully processed links
    pub table: FrequencyTable,

    /// Links whose extraction and classification completed without error.
    /// A link with zero salient tokens still counts as processed.
    pub processed: BTreeSet<String>,

    /// Links skipped under the skip policy, with the reason each failed
    pub failures: Vec<LinkFailure>,
}

/// A link that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFailure {
    /// The failing URL
    pub url: String,

    /// Human-readable description of what went wrong
    pub reason: String,
}
