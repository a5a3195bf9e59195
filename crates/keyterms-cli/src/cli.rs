//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Keyterms CLI - rank salient words across a set of web documents.
#[derive(Debug, Parser)]
#[command(name = "keyterms")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File containing one document URL per line
    #[arg(short, long)]
    pub file: PathBuf,

    /// Maximum number of ranked entries in the report
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Syntax-analysis service endpoint
    #[arg(long, env = "KEYTERMS_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Language code sent to the syntax-analysis service
    #[arg(long)]
    pub language: Option<String>,

    /// Process up to this many links concurrently
    #[arg(long)]
    pub parallel: Option<usize>,

    /// What to do when a single link fails
    #[arg(long, value_enum)]
    pub on_error: Option<CliFailurePolicy>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Plain report with tab-separated ranked lines (default)
    Plain,
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// Per-link failure policy options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFailurePolicy {
    /// Fail the whole run on the first per-link error
    Abort,
    /// Skip failing links and report them in the summary
    Skip,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_file_flag() {
        assert!(Cli::try_parse_from(["keyterms"]).is_err());
        let cli = Cli::try_parse_from(["keyterms", "--file", "links.txt"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("links.txt"));
        assert!(cli.limit.is_none());
    }

    #[test]
    fn test_all_flags_parse() {
        let cli = Cli::try_parse_from([
            "keyterms",
            "--file",
            "links.txt",
            "--limit",
            "10",
            "--format",
            "json",
            "--no-color",
            "--endpoint",
            "http://localhost:9400",
            "--language",
            "en",
            "--parallel",
            "4",
            "--on-error",
            "abort",
        ])
        .unwrap();
        assert_eq!(cli.limit, Some(10));
        assert!(cli.no_color);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(matches!(cli.on_error, Some(CliFailurePolicy::Abort)));
        assert_eq!(cli.parallel, Some(4));
    }
}
