//! Citation formatting.
//!
//! Pure formatting, no I/O: renders the first few gathered sources as a
//! short human-readable list printed after the answer.

use mamabot_sources::SourceRecord;

/// Format the first `max_items` records as `- <name>: <url>` lines.
///
/// Lines keep gathered order and are newline-joined with no trailing
/// newline.
pub fn format_citations(records: &[SourceRecord], max_items: usize) -> String {
    records
        .iter()
        .take(max_items)
        .map(|record| format!("- {}: {}", record.name, record.url))
        .collect::<Vec<_>>()
        .join("\n")
}
