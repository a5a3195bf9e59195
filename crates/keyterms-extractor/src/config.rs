//! Configuration for the aggregation pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What to do when processing a single link fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Fail the whole run on the first per-link error, discarding progress
    Abort,
    /// Record the failure against the link and continue with the rest
    Skip,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        FailurePolicy::Skip
    }
}

/// Configuration for the pipeline driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum time for retrieving one document (seconds)
    pub fetch_timeout_secs: u64,

    /// Maximum time for one syntax-analysis call (seconds)
    pub syntax_timeout_secs: u64,

    /// Links processed concurrently; 1 means strictly sequential
    pub max_parallel_links: usize,

    /// Per-link failure handling
    pub failure_policy: FailurePolicy,
}

impl PipelineConfig {
    /// Get the fetch timeout as a Duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Get the syntax-analysis timeout as a Duration
    pub fn syntax_timeout(&self) -> Duration {
        Duration::from_secs(self.syntax_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.fetch_timeout_secs == 0 {
            return Err("fetch_timeout_secs must be greater than 0".to_string());
        }
        if self.syntax_timeout_secs == 0 {
            return Err("syntax_timeout_secs must be greater than 0".to_string());
        }
        if self.max_parallel_links == 0 {
            return Err("max_parallel_links must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for PipelineConfig {
    /// Sequential processing with generous external-call timeouts
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 30,
            syntax_timeout_secs: 30,
            max_parallel_links: 1,
            failure_policy: FailurePolicy::default(),
        }
    }
}
