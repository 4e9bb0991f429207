//! MamaBot Core Library
//!
//! This crate provides the foundational utilities for the MamaBot CLI:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management (sources, limits, LLM settings)
//! - Shared text helpers

pub mod config;
pub mod error;
pub mod logging;
pub mod text;

// Re-export commonly used types
pub use config::{AppConfig, Limits, SourceEntry};
pub use error::{AppError, AppResult};
