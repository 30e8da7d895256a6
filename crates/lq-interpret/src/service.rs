//! The interpretation service.
//!
//! `interpret` never fails observably: the unconfigured path and every
//! backend failure resolve to the fixed fallback reading. The credential
//! is re-read from the environment on every call, so a key added or
//! rotated mid-process takes effect without a restart.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use lq_core::{Category, CategoryAdvice, Interpretation, Slip};

use crate::backend::GenerativeBackend;
use crate::error::{InterpretError, InterpretResult};
use crate::fallback::fallback;
use crate::gemini::{self, GeminiBackend};
use crate::prompt;

/// Anything that can turn a slip into a reading.
///
/// The ritual controller depends only on this trait; the service below is
/// the production implementation.
#[async_trait]
pub trait Interpreter: Send + Sync {
    /// Whether a remote backend credential is currently available.
    fn is_configured(&self) -> bool;

    /// Produce a reading for the slip. Never fails observably.
    async fn interpret(&self, slip: &Slip) -> Interpretation;
}

/// Interpretation service backed by Gemini, with the fixed fallback.
#[derive(Debug, Clone)]
pub struct InterpretationService {
    api_key_var: String,
    model: String,
}

impl Default for InterpretationService {
    fn default() -> Self {
        Self::new()
    }
}

impl InterpretationService {
    /// Service reading the default credential variable at call time.
    pub fn new() -> Self {
        Self {
            api_key_var: gemini::API_KEY_VAR.to_string(),
            model: gemini::DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the environment variable consulted for the credential.
    pub fn with_api_key_var(mut self, var: impl Into<String>) -> Self {
        self.api_key_var = var.into();
        self
    }

    fn credential(&self) -> Option<String> {
        std::env::var(&self.api_key_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Run the request pipeline against a specific backend.
    async fn request(
        &self,
        backend: &dyn GenerativeBackend,
        slip: &Slip,
    ) -> InterpretResult<Interpretation> {
        let raw = backend
            .generate(
                &prompt::system_instruction(),
                &prompt::user_instruction(slip),
                &prompt::response_schema(),
            )
            .await?;
        parse_reading(&raw)
    }
}

#[async_trait]
impl Interpreter for InterpretationService {
    fn is_configured(&self) -> bool {
        self.credential().is_some()
    }

    async fn interpret(&self, slip: &Slip) -> Interpretation {
        let Some(api_key) = self.credential() else {
            // Expected in restricted environments, not a failure.
            debug!(slip = slip.id, "no backend credential, using fallback reading");
            return fallback();
        };

        let backend = GeminiBackend::new(api_key, self.model.clone());
        match self.request(&backend, slip).await {
            Ok(reading) => reading,
            Err(error) => {
                warn!(slip = slip.id, %error, "interpretation failed, using fallback reading");
                fallback()
            }
        }
    }
}

/// Wire shape of a backend response body.
#[derive(Debug, Deserialize)]
struct RawReading {
    insight: String,
    categories: Vec<RawAdvice>,
}

#[derive(Debug, Deserialize)]
struct RawAdvice {
    label: String,
    content: String,
}

/// Strip an optional Markdown code fence around a JSON body.
///
/// Schema-constrained backends return bare JSON, but free-text models
/// habitually wrap it in ```json fences.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

/// Parse raw backend text into a validated reading.
fn parse_reading(raw: &str) -> InterpretResult<Interpretation> {
    let parsed: RawReading = serde_json::from_str(strip_code_fence(raw))?;

    if parsed.insight.trim().is_empty() {
        return Err(InterpretError::Malformed("empty insight".to_string()));
    }

    let mut advice: Vec<CategoryAdvice> = Vec::with_capacity(parsed.categories.len());
    for entry in parsed.categories {
        let Some(category) = Category::from_label(&entry.label) else {
            return Err(InterpretError::Malformed(format!(
                "unknown category label: {}",
                entry.label
            )));
        };
        if advice.iter().any(|existing| existing.category == category) {
            return Err(InterpretError::Malformed(format!(
                "duplicate category: {}",
                entry.label
            )));
        }
        if entry.content.trim().is_empty() {
            return Err(InterpretError::Malformed(format!(
                "empty advice for {}",
                entry.label
            )));
        }
        advice.push(CategoryAdvice {
            category,
            content: entry.content,
        });
    }

    let reading = Interpretation {
        insight: parsed.insight,
        advice,
    };
    if !reading.has_all_categories() {
        return Err(InterpretError::Malformed(
            "missing category entries".to_string(),
        ));
    }
    Ok(reading)
}
