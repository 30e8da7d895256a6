//! Ritual stages.

use serde::{Deserialize, Serialize};

/// The user-visible stage of a ritual session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Waiting for the seeker to begin.
    Idle,
    /// The cylinder is shaking; a slip is about to emerge.
    Shaking,
    /// A slip is drawn; awaiting block-throw confirmation.
    Confirming,
    /// The reading is complete. Terminal until reset.
    Result,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Shaking => write!(f, "shaking"),
            Self::Confirming => write!(f, "confirming"),
            Self::Result => write!(f, "result"),
        }
    }
}
