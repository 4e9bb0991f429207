//! Source retrieval for the MamaBot CLI.
//!
//! This crate fetches the configured trusted pages and turns each one into a
//! `SourceRecord`: a bounded plain-text excerpt plus a title. Fetch failures
//! never cross this crate's boundary as errors — they are captured inside
//! the record and flow downstream like any successful fetch.

pub mod extract;
pub mod fetcher;
pub mod gatherer;
pub mod record;

// Re-export main types
pub use fetcher::{FetchError, FetchedPage, PageFetcher};
pub use gatherer::gather;
pub use record::{SourceBody, SourceRecord};
