//! Fortune slip records.

use serde::{Deserialize, Serialize};

/// A single fortune slip from the corpus.
///
/// Slips are read-only after corpus load. The `id` is a stable ordering
/// key, unique within the corpus, never reused or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slip {
    /// Positive, corpus-unique identifier (1-based).
    pub id: u32,
    /// Short human-readable name, usually the story the slip alludes to.
    pub title: String,
    /// Fortune-tier label, e.g. 上上签.
    pub kind: String,
    /// The verse, sentence-delimited by punctuation.
    pub poetry: String,
    /// Prose gloss of the verse (诗意).
    pub meaning: String,
    /// Prose elaboration and advice (解曰).
    pub explanation: String,
}

impl std::fmt::Display for Slip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "第 {} 签 · {}", self.id, self.title)
    }
}
