//! The backend seam for text generation.
//!
//! Exactly one concrete integration is compiled per deployment; the
//! service only ever talks to this trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::InterpretResult;

/// A remote text-generation backend.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Produce raw response text for the given instructions.
    ///
    /// `schema` describes the expected JSON output shape. Backends that
    /// support schema-constrained generation pass it through to the
    /// endpoint; others may fold it into the instruction text. Either way
    /// the returned text is re-validated by the caller.
    async fn generate(&self, system: &str, user: &str, schema: &Value) -> InterpretResult<String>;
}
