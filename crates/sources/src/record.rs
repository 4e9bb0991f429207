//! Source record data model.
//!
//! A `SourceRecord` is what the rest of the pipeline consumes: the
//! configured name and URL, the page title, and either the fetched text or
//! the typed fetch failure. The `ERROR_FETCHING:` sentinel string exists
//! only as a rendering of the failure, so the prompt builder and citation
//! formatter never need failure-specific branches.

use std::borrow::Cow;

use mamabot_core::text::char_len;

use crate::fetcher::FetchError;

/// The body of a gathered source: fetched text, or the failure that
/// prevented fetching it.
#[derive(Debug, Clone)]
pub enum SourceBody {
    Text(String),
    FetchFailed(FetchError),
}

/// One gathered source. Immutable once created; lifetime is a single
/// gathering run.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    /// Configured source name (unique within a run)
    pub name: String,

    /// Configured base URL
    pub url: String,

    /// Page title, or the URL when fetching failed or no title was present
    pub title: String,

    /// Fetched text or the typed failure
    pub body: SourceBody,
}

impl SourceRecord {
    /// The record's text as embedded in prompts and snapshots.
    ///
    /// A failed fetch renders as `ERROR_FETCHING: <cause>`.
    pub fn text(&self) -> Cow<'_, str> {
        match &self.body {
            SourceBody::Text(text) => Cow::Borrowed(text.as_str()),
            SourceBody::FetchFailed(err) => Cow::Owned(format!("ERROR_FETCHING: {}", err)),
        }
    }

    /// Character length of the rendered text.
    pub fn text_len(&self) -> usize {
        char_len(&self.text())
    }

    /// Whether the fetch behind this record failed.
    pub fn is_fetch_failed(&self) -> bool {
        matches!(self.body, SourceBody::FetchFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_record() -> SourceRecord {
        SourceRecord {
            name: "CDC".to_string(),
            url: "https://www.cdc.gov/".to_string(),
            title: "CDC Home".to_string(),
            body: SourceBody::Text("hello world".to_string()),
        }
    }

    #[test]
    fn test_text_of_successful_fetch() {
        let record = ok_record();
        assert_eq!(record.text(), "hello world");
        assert_eq!(record.text_len(), 11);
        assert!(!record.is_fetch_failed());
    }

    #[test]
    fn test_failed_fetch_renders_sentinel() {
        let record = SourceRecord {
            name: "WHO".to_string(),
            url: "https://www.who.int/".to_string(),
            title: "https://www.who.int/".to_string(),
            body: SourceBody::FetchFailed(FetchError::Timeout(
                "https://www.who.int/".to_string(),
            )),
        };

        assert!(record.is_fetch_failed());
        assert_eq!(
            record.text(),
            "ERROR_FETCHING: timeout fetching https://www.who.int/"
        );
    }
}
