//! Shared text helpers.
//!
//! All pipeline caps (page text, prompt excerpts, the CLI prompt preview)
//! are expressed in characters, not bytes, so clipping has to respect UTF-8
//! boundaries.

/// Clip a string to at most `max_chars` characters.
///
/// Returns the full string unchanged when it already fits.
pub fn clip_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Number of characters in a string.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_shorter_than_cap() {
        assert_eq!(clip_chars("hello", 10), "hello");
    }

    #[test]
    fn test_clip_exact_cap() {
        assert_eq!(clip_chars("hello", 5), "hello");
    }

    #[test]
    fn test_clip_longer_than_cap() {
        assert_eq!(clip_chars("hello world", 5), "hello");
    }

    #[test]
    fn test_clip_multibyte() {
        // é is two bytes; clipping must count characters
        let text = "ééééé";
        assert_eq!(clip_chars(text, 3), "ééé");
        assert_eq!(char_len(clip_chars(text, 3)), 3);
    }

    #[test]
    fn test_clip_empty() {
        assert_eq!(clip_chars("", 5), "");
    }
}
