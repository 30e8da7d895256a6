//! Error types for the ritual state controller.

use thiserror::Error;

use crate::stage::Stage;

/// Alias for `Result<T, RitualError>`.
pub type RitualResult<T> = Result<T, RitualError>;

/// Errors raised when a session action does not fit the current stage.
#[derive(Debug, Error)]
pub enum RitualError {
    /// The action is only valid in a different stage.
    #[error("cannot {action} while {stage}")]
    WrongStage {
        /// The attempted action.
        action: &'static str,
        /// The stage the session was in.
        stage: Stage,
    },
}
