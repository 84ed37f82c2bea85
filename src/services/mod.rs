//! Upstream services
//!
//! Clients for the third-party APIs the server proxies, plus the static palette table.
//! The HTTP layer talks to the providers through the traits below so the
//! upstreams can be swapped or stubbed.

pub mod gemini;
pub mod palettes;
pub mod unsplash;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::image::ImageResult;

/// Upstream service errors
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} is not set")]
    MissingApiKey(&'static str),
    #[error("HTTP request failed: {0}")]
    Request(String),
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Empty response from upstream")]
    Empty,
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        ServiceError::Request(e.to_string())
    }
}

/// Generative-text backend used for chat guidance
#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &str;
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError>;
}

/// Photo-search backend used for image suggestions
#[async_trait]
pub trait ImageProvider: Send + Sync {
    fn name(&self) -> &str;
    async fn search_photos(&self, query: &str) -> Result<Vec<ImageResult>, ServiceError>;
}

/// Wrap a user message in the moodboard assistant prompt
pub fn moodboard_prompt(message: &str) -> String {
    format!(
        "You are a creative assistant helping users create moodboards. User message: {}. \
         Provide helpful, creative guidance for their moodboard project.",
        message
    )
}

/// Build the shared HTTP client for upstream calls
pub(crate) fn http_client(timeout_secs: u64) -> reqwest::Client {
    build_http_client(timeout_secs, concat!("kiko/", env!("CARGO_PKG_VERSION")))
}

fn build_http_client(timeout_secs: u64, user_agent: &str) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .user_agent(user_agent)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to build HTTP client ({}), using defaults without the {}s timeout",
                e,
                timeout_secs
            );
            reqwest::Client::new()
        })
}

/// Read a response body, turning non-success statuses into errors
pub(crate) async fn read_body(response: reqwest::Response) -> Result<String, ServiceError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ServiceError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_message() {
        let prompt = moodboard_prompt("rainy Tokyo night");
        assert!(prompt.starts_with("You are a creative assistant helping users create moodboards."));
        assert!(prompt.contains("User message: rainy Tokyo night."));
        assert!(prompt.ends_with("guidance for their moodboard project."));
    }

    #[test]
    fn test_invalid_client_config_falls_back() {
        // A newline makes the user agent an invalid header value
        let _client = build_http_client(5, "kiko\nbroken");
        let _client = http_client(5);
    }

    #[test]
    fn test_error_display() {
        let err = ServiceError::MissingApiKey("GEMINI_API_KEY");
        assert_eq!(err.to_string(), "GEMINI_API_KEY is not set");

        let err = ServiceError::Status {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "API error (401): unauthorized");
    }
}
