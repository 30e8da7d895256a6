//! Interpretation service for Lingqian.
//!
//! Turns a drawn slip into a structured reading. A remote text-generation
//! backend enriches the reading when a credential is configured; every
//! failure path — missing credential, transport error, malformed or empty
//! response — resolves to a fixed fallback reading, so the caller never
//! observes an error.

pub mod backend;
pub mod error;
pub mod fallback;
pub mod gemini;
pub mod prompt;
pub mod service;

pub use backend::GenerativeBackend;
pub use error::{InterpretError, InterpretResult};
pub use gemini::GeminiBackend;
pub use service::{InterpretationService, Interpreter};
