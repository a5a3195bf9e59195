//! Report rendering for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use keyterms_domain::RankedEntry;
use keyterms_extractor::LinkFailure;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Everything the final report needs.
#[derive(Debug, Clone)]
pub struct ReportData {
    /// Distinct links successfully processed
    pub links_checked: usize,

    /// Distinct frequency keys across all documents
    pub distinct_keys: usize,

    /// Ranked entries, highest count first
    pub entries: Vec<RankedEntry>,

    /// Links skipped under the skip policy
    pub skipped: Vec<LinkFailure>,
}

/// Report formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Render the report in the configured format.
    pub fn format_report(&self, report: &ReportData) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(self.format_plain(report)),
            OutputFormat::Table => Ok(self.format_table(report)),
            OutputFormat::Json => self.format_json(report),
        }
    }

    /// Classic plain-text report: summary block, then `count<TAB>key` lines.
    fn format_plain(&self, report: &ReportData) -> String {
        let mut out = String::new();
        out.push_str("--------------------\n");
        out.push_str(&self.colorize("Report finished:", "cyan"));
        out.push('\n');
        out.push_str(&format!("links checked: {}\n", report.links_checked));
        out.push_str(&format!("distinct keys: {}\n", report.distinct_keys));
        self.push_skipped(&mut out, report);

        out.push('\n');
        out.push_str(&self.colorize("Top words:", "cyan"));
        out.push('\n');
        for entry in &report.entries {
            out.push_str(&format!("{}\t{}\n", entry.count, entry.key));
        }
        out
    }

    /// Summary block followed by a Rank/Count/Key table.
    fn format_table(&self, report: &ReportData) -> String {
        let mut out = String::new();
        out.push_str(&format!("links checked: {}\n", report.links_checked));
        out.push_str(&format!("distinct keys: {}\n", report.distinct_keys));
        self.push_skipped(&mut out, report);

        if report.entries.is_empty() {
            out.push_str(&self.colorize("No words counted.", "yellow"));
            out.push('\n');
            return out;
        }

        let mut builder = Builder::default();
        builder.push_record(["Rank", "Count", "Key"]);
        for (index, entry) in report.entries.iter().enumerate() {
            builder.push_record([
                &(index + 1).to_string(),
                &entry.count.to_string(),
                &entry.key.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        out.push_str(&table.to_string());
        out.push('\n');
        out
    }

    /// Machine-readable rendering.
    fn format_json(&self, report: &ReportData) -> Result<String> {
        let top_words: Vec<serde_json::Value> = report
            .entries
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "text": entry.key.text,
                    "tag": entry.key.tag.as_str(),
                    "count": entry.count,
                })
            })
            .collect();

        let skipped: Vec<serde_json::Value> = report
            .skipped
            .iter()
            .map(|failure| {
                serde_json::json!({
                    "url": failure.url,
                    "reason": failure.reason,
                })
            })
            .collect();

        let body = serde_json::json!({
            "links_checked": report.links_checked,
            "distinct_keys": report.distinct_keys,
            "top_words": top_words,
            "skipped": skipped,
        });

        Ok(serde_json::to_string_pretty(&body)?)
    }

    fn push_skipped(&self, out: &mut String, report: &ReportData) {
        if report.skipped.is_empty() {
            return;
        }
        out.push_str(&self.colorize(
            &format!("skipped links: {}", report.skipped.len()),
            "yellow",
        ));
        out.push('\n');
        for failure in &report.skipped {
            out.push_str(&format!("  {}: {}\n", failure.url, failure.reason));
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "cyan" => text.cyan().to_string(),
            "yellow" => text.yellow().to_string(),
            "red" => text.red().to_string(),
            _ => text.to_string(),
        }
    }
}
