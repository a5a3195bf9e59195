//! Deterministic top-N view of a frequency table

use crate::frequency::{FrequencyKey, FrequencyTable};

/// One row of the ranked output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// The counted key.
    pub key: FrequencyKey,
    /// Its occurrence count.
    pub count: u64,
}

/// Produce the top `limit` entries of the table.
///
/// Entries are ordered by count descending; ties break by ascending
/// `(text, tag)` so repeated runs over the same input render identically.
/// At most `limit` entries are returned.
pub fn rank(table: &FrequencyTable, limit: usize) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = table
        .iter()
        .map(|(key, count)| RankedEntry {
            key: key.clone(),
            count,
        })
        .collect();

    entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    entries.truncate(limit);
    entries
}
