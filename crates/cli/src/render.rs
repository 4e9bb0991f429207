//! Console renderers for the warning banner.
//!
//! The banner must appear before any answer. It renders either as a styled
//! ANSI panel or as a plain-text block bounded by separator rows, depending
//! on terminal capability detected once at startup.

use mamabot_core::logging::supports_color;

/// Banner title.
pub const BANNER_TITLE: &str = "IMPORTANT";

/// Fixed banner text; the wording is a behavioral requirement.
pub const BANNER_TEXT: &str = "WARNING: MamaBot provides general informational support \
for new parents. It is NOT a substitute for professional medical, legal, or emergency \
advice. If you suspect an emergency, call your local emergency number or seek immediate \
medical care.";

const PANEL_WIDTH: usize = 80;

/// Renders console panels; implementations differ only in decoration.
pub trait ConsoleRenderer {
    /// Render a banner panel as a printable string (no trailing newline).
    fn banner(&self, title: &str, body: &str) -> String;
}

/// ANSI-styled renderer: bold red rules around the body.
pub struct StyledRenderer;

impl ConsoleRenderer for StyledRenderer {
    fn banner(&self, title: &str, body: &str) -> String {
        const BOLD_RED: &str = "\x1b[1;31m";
        const RESET: &str = "\x1b[0m";

        let rule = "━".repeat(PANEL_WIDTH);
        format!(
            "{BOLD_RED}{rule}{RESET}\n{BOLD_RED}{title}{RESET}\n{body}\n{BOLD_RED}{rule}{RESET}"
        )
    }
}

/// Plain-text fallback: the body bounded by rows of separator characters.
pub struct PlainRenderer;

impl ConsoleRenderer for PlainRenderer {
    fn banner(&self, _title: &str, body: &str) -> String {
        let sep = "!".repeat(PANEL_WIDTH);
        format!("{sep}\n{body}\n{sep}")
    }
}

/// Select a renderer once at startup based on color capability.
pub fn detect_renderer(no_color: bool) -> Box<dyn ConsoleRenderer> {
    if !no_color && supports_color() {
        Box::new(StyledRenderer)
    } else {
        Box::new(PlainRenderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_banner_bounded_by_separators() {
        let rendered = PlainRenderer.banner(BANNER_TITLE, BANNER_TEXT);
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.first(), Some(&"!".repeat(80).as_str()));
        assert_eq!(lines.last(), Some(&"!".repeat(80).as_str()));
        assert!(rendered.contains("NOT a substitute for professional medical"));
        // No ANSI escapes in the fallback
        assert!(!rendered.contains('\x1b'));
    }

    #[test]
    fn test_styled_banner_contains_title_and_body() {
        let rendered = StyledRenderer.banner(BANNER_TITLE, BANNER_TEXT);
        assert!(rendered.contains("IMPORTANT"));
        assert!(rendered.contains("call your local emergency number"));
        assert!(rendered.contains("\x1b[1;31m"));
        assert!(rendered.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_detect_renderer_honors_no_color_flag() {
        let renderer = detect_renderer(true);
        let rendered = renderer.banner(BANNER_TITLE, BANNER_TEXT);
        assert!(!rendered.contains('\x1b'));
    }
}
