//! Error types internal to the interpretation pipeline.
//!
//! None of these escape the service: every variant resolves to the fixed
//! fallback reading at the public boundary.

use thiserror::Error;

/// Alias for `Result<T, InterpretError>`.
pub type InterpretResult<T> = Result<T, InterpretError>;

/// Failures on the way from a slip to a validated reading.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// Transport-level failure reaching the backend.
    #[error("backend transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for operator diagnostics.
        body: String,
    },

    /// The backend answered successfully but with no usable text.
    #[error("backend returned an empty response")]
    EmptyResponse,

    /// The response body is not valid JSON.
    #[error("backend response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The response parsed as JSON but failed shape validation.
    #[error("backend response failed validation: {0}")]
    Malformed(String),
}
