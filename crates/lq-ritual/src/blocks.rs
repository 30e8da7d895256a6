//! The divination block throw.
//!
//! Two crescent blocks are thrown; the way they land decides whether the
//! drawn slip may be read. Weights follow the traditional odds: holy 50%,
//! smiling 25%, yin 25%. Only a holy outcome confirms the slip.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Outcome of a block throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrowOutcome {
    /// No throw has resolved yet.
    Unthrown,
    /// 圣杯 — one up, one down. The slip is confirmed.
    Holy,
    /// 笑杯 — both up. The question was not earnest; throw again.
    Smile,
    /// 阴杯 — both down. The time is not right; throw again.
    Yin,
}

impl ThrowOutcome {
    /// Whether this outcome confirms the slip.
    pub fn is_affirmative(self) -> bool {
        matches!(self, Self::Holy)
    }
}

impl std::fmt::Display for ThrowOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unthrown => write!(f, "未掷"),
            Self::Holy => write!(f, "圣杯"),
            Self::Smile => write!(f, "笑杯"),
            Self::Yin => write!(f, "阴杯"),
        }
    }
}

/// Throw the blocks: holy 50%, smile 25%, yin 25%.
pub fn throw_blocks(rng: &mut StdRng) -> ThrowOutcome {
    let roll: f64 = rng.random();
    if roll < 0.5 {
        ThrowOutcome::Holy
    } else if roll < 0.75 {
        ThrowOutcome::Smile
    } else {
        ThrowOutcome::Yin
    }
}
