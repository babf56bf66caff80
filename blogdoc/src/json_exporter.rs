//! JSON exporter for rendered articles
//!
//! Serializes an article's block tree, making the content model available
//! to external consumers (and to the `inspect` command) without committing
//! them to the HTML view.

use crate::content_model::{ArticleSource, BlockNode};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during JSON export
#[derive(Error, Debug)]
pub enum JsonExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serializable view of one rendered article
#[derive(Serialize)]
struct ArticleDump<'a> {
    slug: &'a str,
    title: Option<&'a str>,
    blocks: &'a [BlockNode],
}

/// Render one article's block tree as pretty-printed JSON
pub fn to_json_string(article: &ArticleSource) -> Result<String, JsonExportError> {
    let dump = ArticleDump {
        slug: &article.slug,
        title: article.title.as_deref(),
        blocks: &article.blocks,
    };

    Ok(serde_json::to_string_pretty(&dump)?)
}

/// Export one article to a JSON file
pub fn to_json_file(article: &ArticleSource, output_path: &Path) -> Result<(), JsonExportError> {
    let output = to_json_string(article)?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, output)?;

    Ok(())
}
