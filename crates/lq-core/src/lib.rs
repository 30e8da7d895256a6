//! Core types for Lingqian: the slip corpus and the interpretation model.
//!
//! This crate defines the data that the ritual and interpretation layers
//! operate on. It knows nothing about backends or terminals — you can use
//! the embedded builtin corpus or construct a [`Corpus`] from JSON.

pub mod corpus;
pub mod error;
pub mod interpretation;
pub mod slip;
pub mod verse;

pub use corpus::Corpus;
pub use error::{CorpusError, CorpusResult};
pub use interpretation::{Category, CategoryAdvice, Interpretation};
pub use slip::Slip;
