//! Source gathering.
//!
//! Iterates the configured source list in order and fetches each page
//! sequentially. There is deliberately no fan-out: total latency is the sum
//! of per-source fetch latencies, and a hanging source delays the run by at
//! most its timeout.

use mamabot_core::config::SourceEntry;

use crate::fetcher::PageFetcher;
use crate::record::{SourceBody, SourceRecord};

/// Gather all configured sources into records, in configured order.
///
/// A failed fetch produces a record whose title falls back to the URL and
/// whose body carries the failure; it is a valid record and flows
/// downstream like any other.
pub async fn gather(fetcher: &PageFetcher, sources: &[SourceEntry]) -> Vec<SourceRecord> {
    let mut records = Vec::with_capacity(sources.len());

    for entry in sources {
        tracing::info!("Gathering source '{}' from {}", entry.name, entry.url);

        let record = match fetcher.fetch(&entry.url).await {
            Ok(page) => SourceRecord {
                name: entry.name.clone(),
                url: entry.url.clone(),
                title: page.title,
                body: SourceBody::Text(page.text),
            },
            Err(err) => {
                tracing::warn!("Fetch failed for '{}': {}", entry.name, err);
                SourceRecord {
                    name: entry.name.clone(),
                    url: entry.url.clone(),
                    title: entry.url.clone(),
                    body: SourceBody::FetchFailed(err),
                }
            }
        };

        records.push(record);
    }

    records
}
