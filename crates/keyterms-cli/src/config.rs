//! Configuration management for the CLI.

use crate::cli::{CliFailurePolicy, CliFormat};
use crate::error::{CliError, Result};
use keyterms_extractor::{FailurePolicy, PipelineConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub settings: Settings,

    /// Syntax-analysis service settings
    #[serde(default)]
    pub service: ServiceSettings,

    /// Pipeline settings
    #[serde(default)]
    pub pipeline: PipelineSettings,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Default number of ranked entries in the report
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Syntax-analysis service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Service base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Language code sent with every request
    #[serde(default = "default_language")]
    pub language_code: String,

    /// Request timeout (seconds)
    #[serde(default = "default_service_timeout")]
    pub timeout_secs: u64,

    /// Retry attempts for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

/// Pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Document fetch timeout (seconds)
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Links processed concurrently
    #[serde(default = "default_parallel")]
    pub max_parallel_links: usize,

    /// Per-link failure handling
    #[serde(default)]
    pub on_error: FailurePolicy,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain report with tab-separated ranked lines
    Plain,
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Plain => OutputFormat::Plain,
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

impl From<CliFailurePolicy> for FailurePolicy {
    fn from(policy: CliFailurePolicy) -> Self {
        match policy {
            CliFailurePolicy::Abort => FailurePolicy::Abort,
            CliFailurePolicy::Skip => FailurePolicy::Skip,
        }
    }
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".keyterms").join("config.toml"))
    }

    /// Load configuration from file or create default.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Derive the pipeline configuration from the resolved settings.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            fetch_timeout_secs: self.pipeline.fetch_timeout_secs,
            syntax_timeout_secs: self.service.timeout_secs,
            max_parallel_links: self.pipeline.max_parallel_links,
            failure_policy: self.pipeline.on_error,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: default_format(),
            limit: default_limit(),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            language_code: default_language(),
            timeout_secs: default_service_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: default_fetch_timeout(),
            max_parallel_links: default_parallel(),
            on_error: FailurePolicy::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Plain
}

fn default_limit() -> usize {
    25
}

fn default_endpoint() -> String {
    "http://localhost:9400".to_string()
}

fn default_language() -> String {
    keyterms_syntax::remote::DEFAULT_LANGUAGE_CODE.to_string()
}

fn default_service_timeout() -> u64 {
    keyterms_syntax::remote::DEFAULT_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    keyterms_syntax::remote::DEFAULT_MAX_RETRIES
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_parallel() -> usize {
    1
}
