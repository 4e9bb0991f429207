//! Command handlers for the MamaBot CLI.

pub mod ask;
pub mod sources;

// Re-export command types for convenience
pub use ask::AskCommand;
pub use sources::SourcesCommand;
