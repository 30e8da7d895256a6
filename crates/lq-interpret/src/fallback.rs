//! The fixed fallback reading.
//!
//! Returned whenever the backend is unconfigured, unreachable, or answers
//! with something that fails validation. Deliberately not parameterized by
//! slip: generically applicable advice, one entry per category, so the
//! ritual always completes once the blocks confirm the slip.

use lq_core::{Category, CategoryAdvice, Interpretation};

/// Build the fallback reading.
pub fn fallback() -> Interpretation {
    Interpretation {
        insight: "机缘流转，心中所念已有回响。签文所示乃当务之急，宜静心体察，顺势而为。"
            .to_string(),
        advice: vec![
            CategoryAdvice {
                category: Category::Career,
                content: "当下宜守不宜攻，待时而动，厚积薄发，必有回甘。".to_string(),
            },
            CategoryAdvice {
                category: Category::Love,
                content: "随缘而遇，不强求，不执着。心诚则灵，静待佳期。".to_string(),
            },
            CategoryAdvice {
                category: Category::Wealth,
                content: "谨慎理财，避开投机之念。勤俭持家，自有盈余庆贺。".to_string(),
            },
            CategoryAdvice {
                category: Category::Health,
                content: "起居有时，心态平和。劳逸结合，则百病不侵。".to_string(),
            },
        ],
    }
}
