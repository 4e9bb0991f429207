//! The answering step: one completion request per question.

use std::sync::Arc;

use crate::client::{LlmClient, LlmError, LlmRequest};

/// Fixed sampling temperature for answers.
const ANSWER_TEMPERATURE: f32 = 0.0;

/// Sends a built prompt to the completion service and returns its text.
///
/// Holds the model identifier and token budget so the CLI passes only the
/// prompt per call. Never panics and never propagates a completion failure
/// as anything other than a typed `LlmError`.
pub struct Answerer {
    client: Arc<dyn LlmClient>,
    model: String,
    max_tokens: u32,
}

impl Answerer {
    /// Create an answerer around a provider client.
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            client,
            model: model.into(),
            max_tokens,
        }
    }

    /// Ask the completion service for an answer to the prompt.
    ///
    /// Returns the trimmed response text; all failure classes come back as
    /// `LlmError` values for the caller to render.
    pub async fn answer(&self, prompt: &str) -> Result<String, LlmError> {
        let request = LlmRequest::new(prompt, &self.model)
            .with_max_tokens(self.max_tokens)
            .with_temperature(ANSWER_TEMPERATURE);

        let response = self.client.complete(&request).await?;
        Ok(response.content)
    }
}
