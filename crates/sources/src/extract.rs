//! HTML text and title extraction.
//!
//! Strips `script`/`style`/`noscript` subtrees and concatenates the
//! remaining visible text nodes in document order, one per line, matching
//! what a reader would see on the page.

use mamabot_core::text::{char_len, clip_chars};
use scraper::{ElementRef, Html, Node, Selector};

/// Marker appended when a page's text is cut at the cap.
pub const TRUNCATION_MARKER: &str = "\n...[truncated]";

/// Tags whose entire subtree is invisible to a reader.
const SKIPPED_TAGS: [&str; 3] = ["script", "style", "noscript"];

/// Extract the visible text of an HTML document.
///
/// Text nodes are trimmed, empty ones dropped, and the rest joined by
/// newlines in document order.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts = Vec::new();
    collect_visible(document.root_element(), &mut parts);
    parts.join("\n")
}

fn collect_visible(element: ElementRef<'_>, out: &mut Vec<String>) {
    for child in element.children() {
        if let Some(el) = ElementRef::wrap(child) {
            if SKIPPED_TAGS.contains(&el.value().name()) {
                continue;
            }
            collect_visible(el, out);
        } else if let Node::Text(text) = child.value() {
            let trimmed = text.text.trim();
            if !trimmed.is_empty() {
                out.push(trimmed.to_string());
            }
        }
    }
}

/// Extract the trimmed `<title>` text, if the document has one.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;

    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Truncate text to `max_chars` characters, appending the marker when cut.
pub fn truncate_page_text(text: &str, max_chars: usize) -> String {
    if char_len(text) > max_chars {
        format!("{}{}", clip_chars(text, max_chars), TRUNCATION_MARKER)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>  Feeding Basics  </title>
            <style>body { color: red; }</style>
            <script>console.log("hidden");</script>
        </head>
        <body>
            <h1>Feeding your newborn</h1>
            <noscript>Please enable JavaScript</noscript>
            <p>Spitting up is common in healthy babies.</p>
        </body>
        </html>
    "#;

    #[test]
    fn test_visible_text_skips_script_style_noscript() {
        let text = visible_text(SAMPLE_HTML);
        assert!(text.contains("Feeding your newborn"));
        assert!(text.contains("Spitting up is common in healthy babies."));
        assert!(!text.contains("console.log"));
        assert!(!text.contains("color: red"));
        assert!(!text.contains("Please enable JavaScript"));
    }

    #[test]
    fn test_visible_text_document_order_newline_joined() {
        let html = "<html><body><p>first</p><p>second</p></body></html>";
        assert_eq!(visible_text(html), "first\nsecond");
    }

    #[test]
    fn test_visible_text_includes_title_text() {
        // The <title> element is a visible text node in document order,
        // so it leads the extracted text.
        let text = visible_text(SAMPLE_HTML);
        assert!(text.starts_with("Feeding Basics"));
    }

    #[test]
    fn test_extract_title_trimmed() {
        assert_eq!(extract_title(SAMPLE_HTML), Some("Feeding Basics".to_string()));
    }

    #[test]
    fn test_extract_title_missing() {
        let html = "<html><body>No title here</body></html>";
        assert_eq!(extract_title(html), None);
    }

    #[test]
    fn test_truncate_long_text_has_exact_length_and_marker() {
        let text = "a".repeat(5000);
        let truncated = truncate_page_text(&text, 3000);
        assert_eq!(char_len(&truncated), 3000 + char_len(TRUNCATION_MARKER));
        assert!(truncated.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        let truncated = truncate_page_text("short text", 3000);
        assert_eq!(truncated, "short text");
        assert!(!truncated.contains("[truncated]"));
    }

    #[test]
    fn test_truncate_at_exact_cap_unchanged() {
        let text = "b".repeat(3000);
        assert_eq!(truncate_page_text(&text, 3000), text);
    }
}
