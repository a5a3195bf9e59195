//! Frequency accumulation across documents
//!
//! The table is the only mutable state of a run. It is an owned value the
//! pipeline driver threads through processing; adapters never touch it, and
//! per-link partial tables are folded in whole via [`FrequencyTable::absorb`],
//! so a snapshot can never observe a half-applied merge.

use crate::token::{PosTag, Token};
use std::collections::HashMap;
use std::fmt;

/// Composite identity of a counted word: exact surface text plus tag.
///
/// Two tokens with the same text but different tags are distinct keys —
/// `run (VERB)` and `run (NOUN)` count separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrequencyKey {
    /// Surface text of the counted word.
    pub text: String,
    /// Part-of-speech tag.
    pub tag: PosTag,
}

impl FrequencyKey {
    /// Create a key from its parts.
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

impl From<&Token> for FrequencyKey {
    fn from(token: &Token) -> Self {
        Self {
            text: token.text.clone(),
            tag: token.tag,
        }
    }
}

impl fmt::Display for FrequencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.tag)
    }
}

/// Occurrence counts keyed by `(text, tag)`.
///
/// Counts only ever increase during a run. Each accepted token increments
/// exactly one key by exactly one, so after N accepted tokens
/// [`FrequencyTable::total`] is N.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<FrequencyKey, u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one token. This is the sole mutation path for single entries.
    pub fn merge(&mut self, token: &Token) {
        *self.counts.entry(FrequencyKey::from(token)).or_insert(0) += 1;
    }

    /// Fold another table into this one, summing counts per key.
    ///
    /// Used by the driver to combine per-link partial tables; the totals of
    /// the operands add up exactly.
    pub fn absorb(&mut self, other: FrequencyTable) {
        for (key, count) in other.counts {
            *self.counts.entry(key).or_insert(0) += count;
        }
    }

    /// Count for a key, zero when absent.
    pub fn count(&self, key: &FrequencyKey) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts — equals the number of tokens merged so far.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Whether no token has been counted yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(key, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&FrequencyKey, u64)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_creates_and_increments() {
        let mut table = FrequencyTable::new();
        let cat = Token::new("cat", PosTag::Noun);
        table.merge(&cat);
        table.merge(&cat);
        assert_eq!(table.count(&FrequencyKey::new("cat", PosTag::Noun)), 2);
        assert_eq!(table.distinct(), 1);
        assert_eq!(table.total(), 2);
    }

    #[test]
    fn test_same_text_different_tag_is_distinct() {
        let mut table = FrequencyTable::new();
        table.merge(&Token::new("run", PosTag::Verb));
        table.merge(&Token::new("run", PosTag::Noun));
        assert_eq!(table.distinct(), 2);
        assert_eq!(table.count(&FrequencyKey::new("run", PosTag::Verb)), 1);
        assert_eq!(table.count(&FrequencyKey::new("run", PosTag::Noun)), 1);
    }

    #[test]
    fn test_absorb_sums_counts() {
        let mut left = FrequencyTable::new();
        left.merge(&Token::new("cat", PosTag::Noun));
        left.merge(&Token::new("run", PosTag::Verb));

        let mut right = FrequencyTable::new();
        right.merge(&Token::new("cat", PosTag::Noun));

        left.absorb(right);
        assert_eq!(left.count(&FrequencyKey::new("cat", PosTag::Noun)), 2);
        assert_eq!(left.total(), 3);
    }

    #[test]
    fn test_key_display() {
        let key = FrequencyKey::new("cat", PosTag::Noun);
        assert_eq!(key.to_string(), "cat (NOUN)");
    }

    #[test]
    fn test_absent_key_counts_zero() {
        let table = FrequencyTable::new();
        assert_eq!(table.count(&FrequencyKey::new("cat", PosTag::Noun)), 0);
        assert!(table.is_empty());
    }
}
