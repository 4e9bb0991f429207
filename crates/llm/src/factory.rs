//! LLM provider factory.
//!
//! Maps a provider name from configuration to a concrete client. The
//! credential is injected here, already resolved by the config boundary;
//! a `None` key builds a client whose calls degrade without network I/O.

use crate::client::LlmClient;
use crate::providers::OpenAiClient;
use std::sync::Arc;

/// Create an LLM client based on the provider name.
///
/// # Arguments
/// * `provider` - Provider identifier (only "openai" is implemented)
/// * `endpoint` - Optional custom endpoint URL
/// * `api_key` - Optional API credential
pub fn create_client(
    provider: &str,
    endpoint: Option<&str>,
    api_key: Option<&str>,
) -> Result<Arc<dyn LlmClient>, String> {
    match provider.to_lowercase().as_str() {
        "openai" => {
            let api_key = api_key.map(str::to_string);
            let client = match endpoint {
                Some(endpoint) => OpenAiClient::with_endpoint(endpoint, api_key),
                None => OpenAiClient::new(api_key),
            };
            Ok(Arc::new(client))
        }
        _ => Err(format!("Unknown provider: {}", provider)),
    }
}
