//! Part-of-speech allow-list filtering

use crate::token::{PosTag, Token};
use std::collections::HashSet;

/// Decides which tokens are salient enough to count.
///
/// The default allow-list keeps verbs, nouns, proper nouns, and adverbs;
/// everything else (determiners, punctuation, particles, ...) is noise for
/// a word-frequency report.
#[derive(Debug, Clone)]
pub struct PosFilter {
    allowed: HashSet<PosTag>,
}

impl PosFilter {
    /// Build a filter from an explicit allow-list.
    pub fn new(allowed: impl IntoIterator<Item = PosTag>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Whether the token's tag is on the allow-list. Pure, no side effects.
    pub fn accept(&self, token: &Token) -> bool {
        self.allowed.contains(&token.tag)
    }
}

impl Default for PosFilter {
    fn default() -> Self {
        Self::new([PosTag::Verb, PosTag::Noun, PosTag::Propn, PosTag::Adv])
    }
}
