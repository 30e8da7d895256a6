//! Error types for corpus loading and validation.

use thiserror::Error;

/// Alias for `Result<T, CorpusError>`.
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Errors raised while loading or validating a slip corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus contains no slips.
    #[error("corpus is empty")]
    Empty,

    /// Slip ids are 1-based; 0 is reserved as invalid.
    #[error("slip id 0 is not a valid id")]
    ZeroId,

    /// Two slips share the same id.
    #[error("duplicate slip id: {0}")]
    DuplicateId(u32),

    /// The corpus JSON could not be parsed.
    #[error("invalid corpus data: {0}")]
    Parse(#[from] serde_json::Error),
}
