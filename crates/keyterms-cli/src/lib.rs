//! Keyterms CLI library.
//!
//! Argument parsing, configuration, link-file ingestion, and report
//! rendering for the `keyterms` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, CliFailurePolicy, CliFormat};
pub use config::{Config, OutputFormat};
pub use error::{CliError, Result};
pub use output::{Formatter, ReportData};
