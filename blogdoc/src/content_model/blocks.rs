//! Block-level article content elements
//!
//! This module defines the structured representation of an article body
//! at the block level (headings, paragraphs, tables, media references, etc.)
//! as produced by the line renderer.

use super::inline::InlineSpan;
use serde::{Deserialize, Serialize};

/// Block-level article content element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockNode {
    /// A heading with level and resolved inline content
    Heading {
        /// Heading level (1 = h1, 2 = h2, 3 = h3)
        level: u8,
        /// Inline spans comprising the heading text
        content: Vec<InlineSpan>,
    },

    /// A paragraph of resolved inline content
    Paragraph {
        /// Inline spans comprising the paragraph text
        content: Vec<InlineSpan>,
    },

    /// A single list item
    ///
    /// Consecutive list items of the same kind form one visual list; the
    /// renderer emits them individually in input order and leaves grouping
    /// to the view layer.
    ListItem {
        /// Whether the item came from a numbered (`1.`) marker
        ordered: bool,
        /// Inline spans comprising the item text
        content: Vec<InlineSpan>,
    },

    /// A pipe-delimited table
    ///
    /// The first accumulated line becomes the header row and the second is
    /// discarded as the separator row by markdown convention.
    Table {
        /// Header cell texts
        headers: Vec<String>,
        /// Data rows, each a vector of cell texts
        rows: Vec<Vec<String>>,
    },

    /// An image reference
    Image {
        /// Alternative text for the image
        alt: String,
        /// Media path as written in the source (relative; the view layer
        /// applies the deployment's base-path convention)
        path: String,
    },

    /// A video reference (media path with an `.mp4`/`.webm`/`.mov` extension)
    Video {
        /// Media path as written in the source
        path: String,
    },

    /// A citation or campaign-link line rendered as its own paragraph
    LinkParagraph {
        /// The full source line, used as the display text
        text: String,
        /// URL extracted from the first parenthesized group of the line
        /// (empty when the line carries no such group)
        href: String,
    },

    /// Start of a FAQ section, derived from a `## FAQ` heading
    FaqSectionStart {
        /// The heading text after the `## ` prefix
        heading: String,
    },

    /// A question line within (or, for degenerate input, outside) a FAQ section
    FaqQuestion {
        /// Question text with the bold markers stripped
        text: String,
    },

    /// End of a FAQ section, synthesized at end of input when not explicit
    FaqSectionEnd,

    /// Embedded markup captured verbatim and emitted without interpretation
    RawHtml {
        /// The captured lines, joined with newlines
        markup: String,
    },

    /// A blank-line separator
    Break,
}
