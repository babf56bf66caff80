//! Article content model for the rendering stage
//!
//! This module defines the structures produced by Stage 1 (parsing), where
//! article source files are loaded and their bodies rendered into typed
//! block sequences.

use crate::site_config::SiteConfig;
use std::path::PathBuf;

// Submodules
mod blocks;
mod inline;
mod lint;
mod renderer;

// Re-export public types
pub use blocks::BlockNode;
pub use inline::{resolve_inline, InlineSpan};
pub use lint::{lint, LintWarning};
pub use renderer::{extract_title, LineRenderer};

/// A single article source file with its rendered content
#[derive(Debug)]
pub struct ArticleSource {
    /// Path to the source file (relative to the site root)
    pub path: PathBuf,

    /// Absolute path to the source file
    pub absolute_path: PathBuf,

    /// URL slug derived from the file stem (e.g., "gpu-farms" from
    /// "gpu-farms.md")
    pub slug: String,

    /// Article title extracted from the leading `# ` heading, if present
    pub title: Option<String>,

    /// Raw body text as loaded from disk
    pub raw_body: String,

    /// Rendered block sequence
    pub blocks: Vec<BlockNode>,
}

impl ArticleSource {
    /// Render the raw body into the block sequence and extract the title
    ///
    /// Rendering is total: this never fails, whatever the body contains.
    pub fn render(&mut self) {
        self.title = extract_title(&self.raw_body);
        self.blocks = LineRenderer::render(&self.raw_body);
    }

    /// Number of rendered block nodes
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

/// All articles of one site, with its configuration
#[derive(Debug)]
pub struct SiteModel {
    /// Root directory of the article tree
    pub root: PathBuf,

    /// Site configuration from blogdoc.toml
    pub config: SiteConfig,

    /// Rendered articles, sorted by slug
    pub articles: Vec<ArticleSource>,
}

impl SiteModel {
    /// Total rendered block nodes across all articles
    pub fn block_count(&self) -> usize {
        self.articles.iter().map(ArticleSource::block_count).sum()
    }
}
