//! The slip corpus.
//!
//! A corpus is an ordered, read-only collection of slips, validated once at
//! load. The builtin corpus ships embedded in the crate; custom corpora can
//! be parsed from JSON with the same validation. The first ten builtin
//! slips are curated for offline use, where the fixed fallback reading
//! stands in for the backend.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::error::{CorpusError, CorpusResult};
use crate::slip::Slip;

/// Embedded builtin corpus data.
const BUILTIN_DATA: &str = include_str!("../data/slips.json");

/// An ordered, validated collection of fortune slips.
#[derive(Debug, Clone)]
pub struct Corpus {
    slips: Vec<Slip>,
}

impl Corpus {
    /// Build a corpus from slips, validating ids.
    ///
    /// Rejects an empty corpus, a slip with id 0, and duplicate ids.
    pub fn new(slips: Vec<Slip>) -> CorpusResult<Self> {
        if slips.is_empty() {
            return Err(CorpusError::Empty);
        }
        let mut seen = HashSet::new();
        for slip in &slips {
            if slip.id == 0 {
                return Err(CorpusError::ZeroId);
            }
            if !seen.insert(slip.id) {
                return Err(CorpusError::DuplicateId(slip.id));
            }
        }
        Ok(Self { slips })
    }

    /// Parse and validate a corpus from a JSON array of slips.
    pub fn from_json(json: &str) -> CorpusResult<Self> {
        let slips: Vec<Slip> = serde_json::from_str(json)?;
        Self::new(slips)
    }

    /// The builtin corpus, parsed and validated once per process.
    pub fn builtin() -> &'static Corpus {
        static BUILTIN: OnceLock<Corpus> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Corpus::from_json(BUILTIN_DATA).expect("embedded corpus data is valid")
        })
    }

    /// Number of slips in the corpus.
    pub fn len(&self) -> usize {
        self.slips.len()
    }

    /// Whether the corpus is empty. Never true for a validated corpus.
    pub fn is_empty(&self) -> bool {
        self.slips.is_empty()
    }

    /// All slips in corpus order.
    pub fn slips(&self) -> &[Slip] {
        &self.slips
    }

    /// Look up a slip by id.
    pub fn get(&self, id: u32) -> Option<&Slip> {
        self.slips.iter().find(|slip| slip.id == id)
    }

    /// Look up a slip by corpus position.
    pub fn by_index(&self, index: usize) -> Option<&Slip> {
        self.slips.get(index)
    }
}
