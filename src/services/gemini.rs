//! Gemini generative-text client
//!
//! Calls the `generateContent` REST endpoint and returns the concatenated text
//! of the first candidate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::services::{http_client, read_body, ChatProvider, ServiceError};
use crate::storage::settings::ServerSettings;
use crate::types::config::GEMINI_KEY_VAR;

/// Gemini client configuration
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub fn from_settings(settings: &ServerSettings, api_key: Option<String>) -> Self {
        Self {
            base_url: settings.gemini_base_url.clone(),
            model: settings.gemini_model.clone(),
            api_key,
            timeout_secs: settings.request_timeout_secs,
        }
    }
}

// ============================================================================
// Gemini API types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
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

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// GeminiClient
// ============================================================================

pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let client = http_client(config.timeout_secs);
        Self { config, client }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

#[async_trait]
impl ChatProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ServiceError::MissingApiKey(GEMINI_KEY_VAR))?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.config.model, "Gemini generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let body = read_body(response).await?;
        parse_generate_response(&body)
    }
}

/// Extract the reply text from a `generateContent` response body
fn parse_generate_response(body: &str) -> Result<String, ServiceError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| ServiceError::Parse(e.to_string()))?;

    if let Some(error) = response.error {
        return Err(ServiceError::Request(error.message));
    }

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ServiceError::Empty);
    }
    Ok(text)
}
