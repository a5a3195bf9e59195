//! Keyterms - rank salient words across a set of web documents.

use clap::Parser;
use keyterms_cli::{input, Cli, Config, Formatter, ReportData};
use keyterms_domain::rank;
use keyterms_extractor::{HttpFetcher, ParagraphSplitter, Pipeline, StrictSanitizer};
use keyterms_syntax::RemoteAnalyzer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> keyterms_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Apply command-line overrides
    if let Some(endpoint) = cli.endpoint {
        config.service.endpoint = endpoint;
    }
    if let Some(language) = cli.language {
        config.service.language_code = language;
    }
    if let Some(parallel) = cli.parallel {
        config.pipeline.max_parallel_links = parallel;
    }
    if let Some(policy) = cli.on_error {
        config.pipeline.on_error = policy.into();
    }

    let limit = cli.limit.unwrap_or(config.settings.limit);
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    // Ingest and deduplicate the link file
    let links = input::read_links(&cli.file)?;
    info!("read {} distinct links from {}", links.len(), cli.file.display());

    // Wire the pipeline
    let fetcher = HttpFetcher::new(config.pipeline.fetch_timeout_secs);
    let analyzer = RemoteAnalyzer::with_timeout(
        &config.service.endpoint,
        &config.service.language_code,
        config.service.timeout_secs,
    )
    .with_max_retries(config.service.max_retries);
    let splitter = ParagraphSplitter::new(StrictSanitizer);
    let pipeline = Pipeline::new(fetcher, analyzer, splitter, config.pipeline_config())?;

    let outcome = pipeline.run(&links).await?;

    let report = ReportData {
        links_checked: outcome.processed.len(),
        distinct_keys: outcome.table.distinct(),
        entries: rank(&outcome.table, limit),
        skipped: outcome.failures,
    };

    println!("{}", formatter.format_report(&report)?);
    Ok(())
}
