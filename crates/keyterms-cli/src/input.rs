//! Link-file ingestion.

use crate::error::{CliError, Result};
use keyterms_domain::LinkSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a newline-delimited link file into a deduplicated set.
///
/// Blank and whitespace-only lines are skipped; duplicate URLs collapse
/// silently.
pub fn read_links(path: &Path) -> Result<LinkSet> {
    let file = File::open(path)
        .map_err(|e| CliError::Input(format!("cannot open {}: {}", path.display(), e)))?;

    let mut links = LinkSet::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let url = line.trim();
        if url.is_empty() {
            continue;
        }
        links.insert(url);
    }

    Ok(links)
}
