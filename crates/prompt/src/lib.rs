//! Prompt construction for the MamaBot CLI.
//!
//! This crate composes the single bounded prompt sent to the completion
//! endpoint (question + short source excerpts) and renders the
//! human-readable citation list shown after the answer.

pub mod builder;
pub mod citations;

// Re-export main operations
pub use builder::build_prompt;
pub use citations::format_citations;
