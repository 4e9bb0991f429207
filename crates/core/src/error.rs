//! Error types for the MamaBot CLI.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application, including configuration, I/O, LLM, and prompt errors.
//!
//! Fetch failures and completion-service failures are deliberately *not*
//! routed through this type on the happy path: the sources and llm crates
//! carry their own typed errors (`FetchError`, `LlmError`) so callers can
//! tell failure classes apart without string matching. `AppError` is for
//! failures that should abort the current command.

use thiserror::Error;

/// Unified error type for the MamaBot CLI.
///
/// All fallible functions above the component boundaries return
/// `Result<T, AppError>`. We never panic — errors must be represented
/// and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// LLM provider setup errors
    #[error("LLM error: {0}")]
    Llm(String),

    /// Prompt rendering errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
