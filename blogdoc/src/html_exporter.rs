//! HTML exporter for rendered articles
//!
//! Maps each block-node variant of an article to a standalone HTML page:
//! the article title in the page chrome, block content in the body, and a
//! static stylesheet inlined in the head. Relative media paths get the
//! configured base path prepended here; the renderer itself carries no
//! styling or path knowledge.

use crate::content_model::{ArticleSource, BlockNode, InlineSpan};
use crate::site_config::SiteConfig;
use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during HTML export
#[derive(Error, Debug)]
pub enum HtmlExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export one article to an HTML file
///
/// # Parameters
/// * `article` - The rendered article to export
/// * `config` - Site configuration (title, media base path)
/// * `output_path` - Path where the HTML file will be written
pub fn to_html_file(
    article: &ArticleSource,
    config: &SiteConfig,
    output_path: &Path,
) -> Result<(), HtmlExportError> {
    let output = render_page(article, config);

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(output_path)?;
    file.write_all(output.as_bytes())?;

    Ok(())
}

/// Render one article as a complete HTML page string
pub fn render_page(article: &ArticleSource, config: &SiteConfig) -> String {
    let mut output = String::new();
    let title = article.title.clone().unwrap_or_else(|| article.slug.clone());

    write_html_header(&mut output, &title, &config.site_title);

    output.push_str("<body>\n");
    output.push_str("<div class=\"container\">\n");

    output.push_str(&format!(
        "<p class=\"site-title\">{}</p>\n",
        escape_html(&config.site_title)
    ));
    output.push_str(&format!(
        "<h1 class=\"article-title\">{}</h1>\n",
        escape_html(&title)
    ));

    write_blocks(&mut output, &article.blocks, config);

    output.push_str("</div>\n");
    output.push_str("</body>\n");
    output.push_str("</html>\n");

    output
}

/// Write HTML header with the stylesheet
fn write_html_header(output: &mut String, title: &str, site_title: &str) {
    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html lang=\"en\">\n");
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"UTF-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    output.push_str(&format!(
        "<title>{} - {}</title>\n",
        escape_html(title),
        escape_html(site_title)
    ));
    output.push_str("<style>\n");
    output.push_str(CSS_STYLES);
    output.push_str("</style>\n");
    output.push_str("</head>\n");
}

/// Write the article body blocks
///
/// Consecutive list items of the same kind are wrapped in one `<ul>`/`<ol>`;
/// everything else maps one block to one element.
fn write_blocks(output: &mut String, blocks: &[BlockNode], config: &SiteConfig) {
    let mut faq_open = false;
    let mut i = 0;

    while i < blocks.len() {
        if let BlockNode::ListItem { ordered, .. } = blocks[i] {
            let tag = if ordered { "ol" } else { "ul" };
            output.push_str(&format!("<{}>\n", tag));
            while let Some(BlockNode::ListItem {
                ordered: item_ordered,
                content,
            }) = blocks.get(i)
            {
                if *item_ordered != ordered {
                    break;
                }
                output.push_str(&format!("<li>{}</li>\n", spans_to_html(content)));
                i += 1;
            }
            output.push_str(&format!("</{}>\n", tag));
            continue;
        }

        write_block(output, &blocks[i], config, &mut faq_open);
        i += 1;
    }

    if faq_open {
        output.push_str("</section>\n");
    }
}

/// Write a single non-list block
fn write_block(output: &mut String, block: &BlockNode, config: &SiteConfig, faq_open: &mut bool) {
    match block {
        BlockNode::Heading { level, content } => {
            let h_level = (*level).min(6);
            output.push_str(&format!(
                "<h{} class=\"content-heading\">{}</h{}>\n",
                h_level,
                spans_to_html(content),
                h_level
            ));
        }

        BlockNode::Paragraph { content } => {
            output.push_str(&format!("<p>{}</p>\n", spans_to_html(content)));
        }

        // Grouped in write_blocks; an item reaching here stands alone.
        BlockNode::ListItem { content, .. } => {
            output.push_str(&format!("<ul>\n<li>{}</li>\n</ul>\n", spans_to_html(content)));
        }

        BlockNode::Table { headers, rows } => {
            write_table(output, headers, rows);
        }

        BlockNode::Image { alt, path } => {
            output.push_str(&format!(
                "<figure><img src=\"{}\" alt=\"{}\"></figure>\n",
                escape_html(&resolve_media_path(path, &config.media_base_path)),
                escape_html(alt)
            ));
        }

        BlockNode::Video { path } => {
            output.push_str(&format!(
                "<video controls src=\"{}\"></video>\n",
                escape_html(&resolve_media_path(path, &config.media_base_path))
            ));
        }

        BlockNode::LinkParagraph { text, href } => {
            if href.is_empty() {
                output.push_str(&format!(
                    "<p class=\"citation\">{}</p>\n",
                    escape_html(text)
                ));
            } else {
                output.push_str(&format!(
                    "<p class=\"citation\"><a href=\"{}\">{}</a></p>\n",
                    escape_html(href),
                    escape_html(text)
                ));
            }
        }

        BlockNode::FaqSectionStart { heading } => {
            if *faq_open {
                output.push_str("</section>\n");
            }
            *faq_open = true;
            output.push_str(&format!(
                "<section class=\"faq\">\n<h2>{}</h2>\n",
                escape_html(heading)
            ));
        }

        BlockNode::FaqQuestion { text } => {
            output.push_str(&format!(
                "<p class=\"faq-question\"><strong>{}</strong></p>\n",
                escape_html(text)
            ));
        }

        BlockNode::FaqSectionEnd => {
            if *faq_open {
                *faq_open = false;
                output.push_str("</section>\n");
            }
        }

        BlockNode::RawHtml { markup } => {
            output.push_str(markup);
            output.push('\n');
        }

        BlockNode::Break => {
            output.push_str("<br>\n");
        }
    }
}

/// Write a pipe table as HTML
fn write_table(output: &mut String, headers: &[String], rows: &[Vec<String>]) {
    output.push_str("<table>\n<thead>\n<tr>\n");

    for header in headers {
        output.push_str(&format!("<th>{}</th>\n", escape_html(header)));
    }

    output.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in rows {
        output.push_str("<tr>\n");
        for cell in row {
            output.push_str(&format!("<td>{}</td>\n", escape_html(cell)));
        }
        output.push_str("</tr>\n");
    }

    output.push_str("</tbody>\n</table>\n");
}

/// Convert inline spans to HTML with formatting
fn spans_to_html(spans: &[InlineSpan]) -> String {
    let mut result = String::new();

    for span in spans {
        match span {
            InlineSpan::Plain(text) => result.push_str(&escape_html(text)),
            InlineSpan::Bold(text) => {
                result.push_str(&format!("<strong>{}</strong>", escape_html(text)));
            }
        }
    }

    result
}

/// Prefix a relative media path with the configured base path
///
/// Absolute paths and full URLs pass through unchanged.
fn resolve_media_path(path: &str, base: &str) -> String {
    if path.starts_with('/') || path.contains("://") {
        return path.to_string();
    }

    if base.ends_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Static stylesheet inlined into every page
const CSS_STYLES: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto',
                 'Helvetica Neue', sans-serif;
    line-height: 1.6;
    color: #333;
    background-color: #f5f5f5;
    padding: 20px;
}

.container {
    max-width: 760px;
    margin: 0 auto;
    background: white;
    padding: 48px;
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
    border-radius: 4px;
}

.site-title {
    font-size: 0.9em;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    color: #0066cc;
    margin-bottom: 8px;
}

.article-title {
    font-size: 2.2em;
    font-weight: 700;
    margin-bottom: 24px;
    color: #1a1a1a;
    border-bottom: 3px solid #0066cc;
    padding-bottom: 10px;
}

.content-heading {
    margin-top: 28px;
    margin-bottom: 12px;
    color: #1a1a1a;
    font-weight: 600;
}

p {
    margin-bottom: 14px;
}

strong {
    font-weight: 600;
    color: #1a1a1a;
}

ul, ol {
    margin-bottom: 16px;
    padding-left: 30px;
}

li {
    margin-bottom: 6px;
}

table {
    width: 100%;
    border-collapse: collapse;
    margin-bottom: 20px;
    font-size: 0.95em;
}

thead {
    background-color: #f6f8fa;
}

th {
    padding: 10px 12px;
    text-align: left;
    font-weight: 600;
    border-bottom: 2px solid #d0d7de;
}

td {
    padding: 8px 12px;
    border-bottom: 1px solid #d0d7de;
}

figure {
    margin: 24px 0;
    text-align: center;
}

figure img {
    max-width: 100%;
    height: auto;
    border-radius: 4px;
}

video {
    max-width: 100%;
    margin: 24px 0;
    border-radius: 4px;
}

.citation {
    font-size: 0.9em;
    color: #666;
}

.faq {
    margin-top: 32px;
    padding-top: 8px;
    border-top: 2px solid #e0e0e0;
}

.faq-question {
    margin-top: 18px;
}

a {
    color: #0366d6;
    text-decoration: none;
}

a:hover {
    text-decoration: underline;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_article(body: &str) -> ArticleSource {
        let mut article = ArticleSource {
            path: PathBuf::from("post.md"),
            absolute_path: PathBuf::from("/site/post.md"),
            slug: "post".to_string(),
            title: None,
            raw_body: body.to_string(),
            blocks: Vec::new(),
        };
        article.render();
        article
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<div>"), "&lt;div&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_spans_to_html_bold() {
        let spans = vec![
            InlineSpan::Bold("bold".to_string()),
            InlineSpan::Plain(" & plain".to_string()),
        ];

        assert_eq!(spans_to_html(&spans), "<strong>bold</strong> &amp; plain");
    }

    #[test]
    fn test_resolve_media_path_relative() {
        assert_eq!(resolve_media_path("pic.png", "/blog/"), "/blog/pic.png");
        assert_eq!(resolve_media_path("pic.png", "/blog"), "/blog/pic.png");
    }

    #[test]
    fn test_resolve_media_path_absolute_untouched() {
        assert_eq!(resolve_media_path("/cdn/pic.png", "/blog/"), "/cdn/pic.png");
        assert_eq!(
            resolve_media_path("https://cdn.example.com/pic.png", "/blog/"),
            "https://cdn.example.com/pic.png"
        );
    }

    #[test]
    fn test_list_items_grouped_into_one_list() {
        let article = test_article("- one\n- two\n1. first");
        let page = render_page(&article, &SiteConfig::default());

        assert!(page.contains("<ul>\n<li>one</li>\n<li>two</li>\n</ul>"));
        assert!(page.contains("<ol>\n<li>first</li>\n</ol>"));
    }

    #[test]
    fn test_page_title_uses_extracted_heading() {
        let article = test_article("# Farm Update\nprose");
        let page = render_page(&article, &SiteConfig::default());

        assert!(page.contains("<title>Farm Update - Blog</title>"));
        assert!(page.contains("<h1 class=\"article-title\">Farm Update</h1>"));
        // The suppressed heading does not reappear in the body.
        assert!(!page.contains("<h1 class=\"content-heading\">"));
    }

    #[test]
    fn test_page_title_falls_back_to_slug() {
        let article = test_article("just prose");
        let page = render_page(&article, &SiteConfig::default());

        assert!(page.contains("<title>post - Blog</title>"));
    }

    #[test]
    fn test_faq_section_markup_is_balanced() {
        let article = test_article("## FAQ\n**Is it fast?**\n");
        let page = render_page(&article, &SiteConfig::default());

        assert!(page.contains("<section class=\"faq\">"));
        assert!(page.contains("<p class=\"faq-question\"><strong>Is it fast?</strong></p>"));
        assert_eq!(page.matches("<section").count(), page.matches("</section>").count());
    }

    #[test]
    fn test_raw_markup_passes_through_unescaped() {
        let article = test_article("<script>\nconsole.log('hi');\n</script>");
        let page = render_page(&article, &SiteConfig::default());

        assert!(page.contains("<script>\nconsole.log('hi');\n</script>"));
    }

    #[test]
    fn test_media_paths_prefixed() {
        let article = test_article("![shot](ui.png)\n![demo](demo.mp4)");
        let page = render_page(&article, &SiteConfig::default());

        assert!(page.contains("<img src=\"/blog/ui.png\" alt=\"shot\">"));
        assert!(page.contains("<video controls src=\"/blog/demo.mp4\">"));
    }

    #[test]
    fn test_link_paragraph_markup() {
        let article = test_article("[1] Report (https://example.com/r?a=1)");
        let page = render_page(&article, &SiteConfig::default());

        assert!(page.contains(
            "<a href=\"https://example.com/r?a=1\">[1] Report (https://example.com/r?a=1)</a>"
        ));
    }
}
