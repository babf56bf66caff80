//! blogdoc - blog article rendering tool
//!
//! Renders article bodies written in a constrained line-oriented markup
//! into an ordered sequence of typed block nodes, and maps that sequence to
//! static HTML pages or block-tree JSON. Rendering is a pure, total
//! function: malformed markup degrades to plain paragraphs instead of
//! failing.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod content_model;
pub mod html_exporter;
pub mod json_exporter;
pub mod pipeline;
pub mod site_config;

use content_model::{BlockNode, LineRenderer};

/// Render an article body into its ordered block sequence
pub fn render_article(body: &str) -> Vec<BlockNode> {
    LineRenderer::render(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_article_empty() {
        assert!(render_article("").is_empty());
    }

    #[test]
    fn test_render_article_paragraph() {
        let nodes = render_article("hello");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], BlockNode::Paragraph { .. }));
    }
}
