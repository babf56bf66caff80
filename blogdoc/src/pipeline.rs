//! Two-stage site processing pipeline
//!
//! This module orchestrates the stages of site processing:
//! 1. **Parsing**: Discover article files and render each body into blocks
//! 2. **Export**: Generate output pages (HTML or JSON) from the site model

use crate::content_model::{ArticleSource, SiteModel};
use crate::site_config::{SiteConfig, SiteConfigError};
use itertools::Itertools;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Errors that can occur while building the site model
#[derive(Error, Debug)]
pub enum ParseError {
    /// Error loading the site configuration
    #[error("failed to load site config {0}: {1}")]
    Config(PathBuf, #[source] Box<SiteConfigError>),

    /// IO error reading an article file
    #[error("failed to read {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// Article filename does not yield a usable slug
    #[error("invalid article filename: {0}")]
    InvalidFilename(PathBuf),

    /// Two article files resolve to the same slug
    #[error("duplicate article slug '{0}'")]
    DuplicateSlug(String),
}

/// Stage 1: Discover and render all articles under a site root
///
/// # Parameters
/// * `root` - Site root directory, holding blogdoc.toml and the article tree
///
/// # Returns
/// * `Ok(SiteModel)` - All discovered articles, rendered and sorted by slug
/// * `Err(ParseError)` - Error loading configuration or reading files
///
/// Rendering itself is total and contributes no error cases; only the
/// filesystem can fail here.
pub fn parse_sources(root: &Path) -> Result<SiteModel, ParseError> {
    let config_path = root.join("blogdoc.toml");
    let config = SiteConfig::load_or_default(&config_path)
        .map_err(|e| ParseError::Config(config_path.clone(), Box::new(e)))?;

    let article_paths: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path().is_file() && e.path().extension().and_then(|s| s.to_str()) == Some("md")
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    // Render articles (optionally in parallel); calls are independent.
    #[cfg(feature = "parallel")]
    let articles: Result<Vec<_>, _> = article_paths
        .par_iter()
        .map(|path| load_article(path, root))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let articles: Result<Vec<_>, _> = article_paths
        .iter()
        .map(|path| load_article(path, root))
        .collect();

    let mut articles = articles?;
    articles.sort_by(|a, b| a.slug.cmp(&b.slug));

    // Slugs name output files, so collisions across directories are fatal.
    if let Some((_, dup)) = articles
        .iter()
        .tuple_windows()
        .find(|(a, b)| a.slug == b.slug)
    {
        return Err(ParseError::DuplicateSlug(dup.slug.clone()));
    }

    Ok(SiteModel {
        root: root.to_path_buf(),
        config,
        articles,
    })
}

/// Load and render a single article file
fn load_article(path: &Path, root: &Path) -> Result<ArticleSource, ParseError> {
    let raw_body = std::fs::read_to_string(path)
        .map_err(|e| ParseError::Io(path.to_path_buf(), e))?;

    let slug = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| ParseError::InvalidFilename(path.to_path_buf()))?;

    let relative_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();

    let mut article = ArticleSource {
        path: relative_path,
        absolute_path: path.to_path_buf(),
        slug,
        title: None,
        raw_body,
        blocks: Vec::new(),
    };

    article.render();

    if article.title.is_none() {
        log::warn!(
            "{}: no title heading found, page title falls back to the slug",
            article.path.display()
        );
    }
    log::info!(
        "rendered {} ({} blocks)",
        article.path.display(),
        article.block_count()
    );

    Ok(article)
}

/// Stage 2: Export the site model to output pages
pub mod export {
    use super::SiteModel;
    use crate::html_exporter::{self, HtmlExportError};
    use crate::json_exporter::{self, JsonExportError};
    use std::path::Path;

    /// Write one HTML page per article into the output directory
    pub fn to_html_dir(model: &SiteModel, out_dir: &Path) -> Result<(), HtmlExportError> {
        for article in &model.articles {
            let output_path = out_dir.join(format!("{}.html", article.slug));
            html_exporter::to_html_file(article, &model.config, &output_path)?;
        }
        Ok(())
    }

    /// Write one JSON block-tree file per article into the output directory
    pub fn to_json_dir(model: &SiteModel, out_dir: &Path) -> Result<(), JsonExportError> {
        for article in &model.articles {
            let output_path = out_dir.join(format!("{}.json", article.slug));
            json_exporter::to_json_file(article, &output_path)?;
        }
        Ok(())
    }
}
