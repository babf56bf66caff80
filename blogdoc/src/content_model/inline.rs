//! Inline span representation
//!
//! A span is a fragment of a single line's text, tagged as plain or bold.
//! Spans are produced by a secondary scan over a line after its block type
//! has been decided.

use serde::{Deserialize, Serialize};

/// A fragment of a line's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineSpan {
    /// Unformatted text
    Plain(String),
    /// Text delimited by `**...**` in the source
    Bold(String),
}

impl InlineSpan {
    /// The raw text of the span, regardless of formatting
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(text) | InlineSpan::Bold(text) => text,
        }
    }
}

/// Split a line's text into plain and bold spans on `**...**` delimiters.
///
/// Text with no bold markers yields a single plain span wrapping the whole
/// input. An opening `**` with no matching close is literal text; it never
/// fails.
pub fn resolve_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            // Unmatched opener: the remainder stays literal.
            break;
        };

        if open > 0 {
            spans.push(InlineSpan::Plain(rest[..open].to_string()));
        }
        spans.push(InlineSpan::Bold(after_open[..close].to_string()));
        rest = &after_open[close + 2..];
    }

    if !rest.is_empty() || spans.is_empty() {
        spans.push(InlineSpan::Plain(rest.to_string()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_inline_bold_and_plain() {
        let spans = resolve_inline("**bold** and plain");

        assert_eq!(
            spans,
            vec![
                InlineSpan::Bold("bold".to_string()),
                InlineSpan::Plain(" and plain".to_string()),
            ]
        );
    }

    #[test]
    fn test_resolve_inline_no_markers() {
        let spans = resolve_inline("no bold here");

        assert_eq!(spans, vec![InlineSpan::Plain("no bold here".to_string())]);
    }

    #[test]
    fn test_resolve_inline_interior_bold() {
        let spans = resolve_inline("before **middle** after");

        assert_eq!(
            spans,
            vec![
                InlineSpan::Plain("before ".to_string()),
                InlineSpan::Bold("middle".to_string()),
                InlineSpan::Plain(" after".to_string()),
            ]
        );
    }

    #[test]
    fn test_resolve_inline_multiple_bold_regions() {
        let spans = resolve_inline("**a** x **b**");

        assert_eq!(
            spans,
            vec![
                InlineSpan::Bold("a".to_string()),
                InlineSpan::Plain(" x ".to_string()),
                InlineSpan::Bold("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_resolve_inline_unbalanced_marker_stays_literal() {
        let spans = resolve_inline("start **unclosed");

        assert_eq!(
            spans,
            vec![InlineSpan::Plain("start **unclosed".to_string())]
        );
    }

    #[test]
    fn test_resolve_inline_empty_input() {
        let spans = resolve_inline("");

        assert_eq!(spans, vec![InlineSpan::Plain(String::new())]);
    }
}
