//! Tokens and part-of-speech tags
//!
//! A token is the unit the syntax-analysis service returns: a text span
//! plus the grammatical role it plays in its sentence. The tagset mirrors
//! the universal tagset of the backing service.

use std::fmt;

/// Grammatical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Conj,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    /// Catch-all for tags the service reports outside the known set.
    O,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
}

impl PosTag {
    /// The tag in the uppercase form the service uses on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Adj => "ADJ",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Aux => "AUX",
            PosTag::Conj => "CONJ",
            PosTag::Cconj => "CCONJ",
            PosTag::Det => "DET",
            PosTag::Intj => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Num => "NUM",
            PosTag::O => "O",
            PosTag::Part => "PART",
            PosTag::Pron => "PRON",
            PosTag::Propn => "PROPN",
            PosTag::Punct => "PUNCT",
            PosTag::Sconj => "SCONJ",
            PosTag::Sym => "SYM",
            PosTag::Verb => "VERB",
        }
    }

    /// Parse an uppercase wire tag. Returns `None` for unknown tags so the
    /// caller decides whether to reject or degrade to [`PosTag::O`].
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "ADJ" => PosTag::Adj,
            "ADP" => PosTag::Adp,
            "ADV" => PosTag::Adv,
            "AUX" => PosTag::Aux,
            "CONJ" => PosTag::Conj,
            "CCONJ" => PosTag::Cconj,
            "DET" => PosTag::Det,
            "INTJ" => PosTag::Intj,
            "NOUN" => PosTag::Noun,
            "NUM" => PosTag::Num,
            "O" => PosTag::O,
            "PART" => PosTag::Part,
            "PRON" => PosTag::Pron,
            "PROPN" => PosTag::Propn,
            "PUNCT" => PosTag::Punct,
            "SCONJ" => PosTag::Sconj,
            "SYM" => PosTag::Sym,
            "VERB" => PosTag::Verb,
            _ => return None,
        })
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A text span annotated with its grammatical role.
///
/// Tokens are produced by a [`crate::traits::SyntaxAnalyzer`], consumed once
/// by the filter/aggregation step, and not retained afterwards. The text is
/// the exact surface form; no normalization or stemming is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Surface text of the token.
    pub text: String,
    /// Grammatical role assigned by the analyzer.
    pub tag: PosTag,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}
