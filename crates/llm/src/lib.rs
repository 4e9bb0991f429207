//! LLM integration crate for the MamaBot CLI.
//!
//! This crate provides a provider-agnostic abstraction for the answering
//! step: a single completion request per question, no streaming, fixed
//! deterministic sampling.
//!
//! # Providers
//! - **OpenAI**: chat-completions endpoint (default)
//!
//! # Example
//! ```no_run
//! use mamabot_llm::{Answerer, create_client};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_client("openai", None, Some("sk-..."))?;
//! let answerer = Answerer::new(client, "gpt-4o-mini", 300);
//! let answer = answerer.answer("Is spitting up normal?").await?;
//! println!("{}", answer);
//! # Ok(())
//! # }
//! ```

pub mod answerer;
pub mod client;
pub mod factory;
pub mod providers;

// Re-export main types
pub use answerer::Answerer;
pub use client::{LlmClient, LlmError, LlmRequest, LlmResponse, LlmUsage};
pub use factory::create_client;
pub use providers::OpenAiClient;
