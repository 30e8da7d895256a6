//! Structured interpretations of a drawn slip.
//!
//! A reading is one free-form insight passage plus exactly one
//! recommendation per fixed category. Completeness is a post-receipt
//! invariant: it is validated after parsing a backend response, not merely
//! requested in the prompt.

use serde::{Deserialize, Serialize};

/// The fixed set of advice categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 事业 — work and ambition.
    Career,
    /// 感情 — relationships.
    Love,
    /// 财运 — wealth and money matters.
    Wealth,
    /// 健康 — health and wellbeing.
    Health,
}

impl Category {
    /// All categories in canonical display order.
    pub const ALL: [Category; 4] = [Self::Career, Self::Love, Self::Wealth, Self::Health];

    /// The fixed two-character display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Career => "事业",
            Self::Love => "感情",
            Self::Wealth => "财运",
            Self::Health => "健康",
        }
    }

    /// Map a label back to its category.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "事业" => Some(Self::Career),
            "感情" => Some(Self::Love),
            "财运" => Some(Self::Wealth),
            "健康" => Some(Self::Health),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A recommendation for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAdvice {
    /// Which category the advice applies to.
    pub category: Category,
    /// Prose recommendation.
    pub content: String,
}

/// A complete reading for a drawn slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Free-form present-moment insight passage.
    pub insight: String,
    /// One recommendation per category.
    pub advice: Vec<CategoryAdvice>,
}

impl Interpretation {
    /// Check that every category appears exactly once.
    pub fn has_all_categories(&self) -> bool {
        self.advice.len() == Category::ALL.len()
            && Category::ALL.iter().all(|category| {
                self.advice
                    .iter()
                    .filter(|advice| advice.category == *category)
                    .count()
                    == 1
            })
    }

    /// The advice content for one category, if present.
    pub fn advice_for(&self, category: Category) -> Option<&str> {
        self.advice
            .iter()
            .find(|advice| advice.category == category)
            .map(|advice| advice.content.as_str())
    }
}
