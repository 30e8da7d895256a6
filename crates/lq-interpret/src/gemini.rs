//! Google Gemini backend.
//!
//! Calls the `generateContent` REST endpoint with schema-constrained JSON
//! output (`response_mime_type` + `response_schema`). The backend value is
//! cheap and constructed per call, so credential changes in the
//! environment are picked up without a restart.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::backend::GenerativeBackend;
use crate::error::{InterpretError, InterpretResult};

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Default model for interpretation requests.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Generous request timeout; a timeout is just another transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Gemini `generateContent` client.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    api_key: String,
    model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GeminiBackend {
    /// Build a backend with an explicit key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate(&self, system: &str, user: &str, schema: &Value) -> InterpretResult<String> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: format!("{system}\n\n{user}"),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema.clone(),
            },
        };

        let url = format!("{BASE_URL}/{}:generateContent?key={}", self.model, self.api_key);
        debug!(model = %self.model, "sending generation request");

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(InterpretError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: GeminiResponse = serde_json::from_str(&text)?;
        extract_text(parsed)
    }
}

/// Pull the first candidate's text out of a response.
fn extract_text(response: GeminiResponse) -> InterpretResult<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(InterpretError::EmptyResponse)
}
