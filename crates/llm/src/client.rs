//! LLM client abstraction and request/response types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Completion error types.
///
/// Typed so callers can distinguish "missing credential" from "network
/// error" from "malformed response" programmatically; any user-facing
/// `LLM_ERROR:` string is rendered at the presentation boundary.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    /// No API credential was resolvable; no network call was attempted
    #[error("API credential not set")]
    MissingCredential,

    /// Transport-level failure sending the request
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be interpreted
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// LLM completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    /// The prompt text to send to the LLM
    pub prompt: String,

    /// Model identifier (e.g., "gpt-4o-mini")
    pub model: String,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature; answers use 0.0 for determinism
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl LlmRequest {
    /// Create a new LLM request with required fields.
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            max_tokens: None,
            temperature: None,
        }
    }

    /// Set the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the temperature for sampling.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// LLM completion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    /// The generated text, trimmed
    pub content: String,

    /// Model that generated the response
    pub model: String,

    /// Usage statistics
    pub usage: LlmUsage,
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LlmUsage {
    #[serde(default)]
    pub prompt_tokens: u32,

    #[serde(default)]
    pub completion_tokens: u32,

    #[serde(default)]
    pub total_tokens: u32,
}

/// Trait for LLM providers.
///
/// Abstracts the underlying completion service behind a single
/// non-streaming call.
#[async_trait::async_trait]
pub trait LlmClient: Send + Sync {
    /// Get the provider name (e.g., "openai").
    fn provider_name(&self) -> &str;

    /// Perform a single completion.
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = LlmRequest::new("Hello", "gpt-4o-mini")
            .with_max_tokens(300)
            .with_temperature(0.0);

        assert_eq!(request.prompt, "Hello");
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.max_tokens, Some(300));
        assert_eq!(request.temperature, Some(0.0));
    }

    #[test]
    fn test_error_display() {
        let err = LlmError::Api {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "API error (429): rate limited");
    }
}
