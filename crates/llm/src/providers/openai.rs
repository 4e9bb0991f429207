//! OpenAI LLM provider implementation.
//!
//! Talks to the chat-completions endpoint with a single user message.
//! The credential is checked before any network I/O: a missing key is a
//! recoverable condition, not a failed request.

use crate::client::{LlmClient, LlmError, LlmRequest, LlmResponse, LlmUsage};
use serde::{Deserialize, Serialize};

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI chat-completions request format.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI chat-completions response format.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    model: String,
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

/// OpenAI LLM client.
pub struct OpenAiClient {
    /// Completion endpoint URL
    endpoint: String,

    /// API credential; `None` means every call degrades before the network
    api_key: Option<String>,

    /// HTTP client
    client: reqwest::Client,
}

impl OpenAiClient {
    /// Create a new OpenAI client against the default endpoint.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key)
    }

    /// Create a new OpenAI client with a custom endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Convert an LlmRequest to the chat-completions wire format.
    fn to_chat_request(&self, request: &LlmRequest) -> ChatRequest {
        ChatRequest {
            model: request.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: request.prompt.clone(),
            }],
            max_tokens: request.max_tokens,
            temperature: request.temperature.unwrap_or(0.0),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for OpenAiClient {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        // Credential gate: no key, no network call.
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingCredential)?;

        tracing::info!("Sending completion request to OpenAI");
        tracing::debug!("Model: {}, max_tokens: {:?}", request.model, request.max_tokens);

        let chat_request = self.to_chat_request(request);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| LlmError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::MalformedResponse("response has no choices".to_string()))?;

        let usage = chat_response
            .usage
            .map(|u| LlmUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        tracing::info!("Received completion from OpenAI");

        Ok(LlmResponse {
            content: choice.message.content.trim().to_string(),
            model: chat_response.model,
            usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OpenAiClient::new(Some("sk-test".to_string()));
        assert_eq!(client.provider_name(), "openai");
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_chat_request_conversion() {
        let client = OpenAiClient::new(None);
        let request = LlmRequest::new("Hello", "gpt-4o-mini").with_max_tokens(300);

        let chat_req = client.to_chat_request(&request);
        assert_eq!(chat_req.model, "gpt-4o-mini");
        assert_eq!(chat_req.messages.len(), 1);
        assert_eq!(chat_req.messages[0].role, "user");
        assert_eq!(chat_req.messages[0].content, "Hello");
        assert_eq!(chat_req.max_tokens, Some(300));
        // Temperature defaults to deterministic sampling
        assert_eq!(chat_req.temperature, 0.0);
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_network_call() {
        // Point the client at a local listener that counts connection
        // attempts; the credential gate must fire before any are made.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        listener.set_nonblocking(true).unwrap();

        let endpoint = format!("http://{}/v1/chat/completions", addr);
        let client = OpenAiClient::with_endpoint(endpoint, None);
        let request = LlmRequest::new("Hello", "gpt-4o-mini");

        let result = client.complete(&request).await;
        assert!(matches!(result, Err(LlmError::MissingCredential)));

        // Zero connections reached the listener.
        assert!(matches!(
            listener.accept(),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock
        ));
    }

    #[test]
    fn test_chat_response_parsing() {
        let json = r#"{
            "model": "gpt-4o-mini",
            "choices": [{"message": {"role": "assistant", "content": "  An answer.  "}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }"#;

        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices.len(), 1);
        assert_eq!(parsed.choices[0].message.content, "  An answer.  ");
        assert_eq!(parsed.usage.as_ref().unwrap().total_tokens, 15);
    }
}
