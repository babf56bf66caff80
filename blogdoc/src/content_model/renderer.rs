//! Article body line renderer
//!
//! Converts the raw body text of one article into an ordered sequence of
//! typed block nodes. The markup is a constrained line-oriented format:
//! each line is classified by a fixed precedence chain, with two multi-line
//! capture modes (pipe tables and verbatim `<script>` blocks) buffered and
//! emitted at block close.
//!
//! Rendering is a pure function over the body string. It never fails: any
//! line no rule claims falls through to a plain paragraph, so malformed
//! markup degrades to inert text instead of surfacing an error.

use super::blocks::BlockNode;
use super::inline::resolve_inline;
use regex::Regex;

/// File extensions that make a media reference a video rather than an image
const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "webm", "mov"];

/// Renderer state for converting body lines to block nodes
pub struct LineRenderer {
    /// Whether the document-title `# ` heading has already been suppressed
    first_heading_seen: bool,

    /// Whether a pipe-table run is currently accumulating
    in_table: bool,

    /// Accumulated `|`-prefixed lines of the open table run
    table_lines: Vec<String>,

    /// Whether a verbatim `<script>` capture is open
    in_script: bool,

    /// Captured lines of the open script block, verbatim
    script_lines: Vec<String>,

    /// Whether a FAQ section is open
    in_faq: bool,

    /// Completed block nodes, in input order modulo block-close buffering
    nodes: Vec<BlockNode>,

    /// Compiled line patterns
    patterns: LinePatterns,
}

/// Line-classification patterns, compiled once per renderer
struct LinePatterns {
    /// `![alt](path)` media reference at line start
    media: Regex,
    /// Numbered list marker with its remainder
    ordered_item: Regex,
    /// `[N]`-style citation marker at line start
    citation: Regex,
    /// A whole line that is one bolded question
    faq_question: Regex,
}

impl LinePatterns {
    fn compile() -> Self {
        Self {
            media: Regex::new(r"^!\[([^\]]*)\]\(([^)]+)\)").expect("static pattern"),
            ordered_item: Regex::new(r"^\d+\.\s*(.+)$").expect("static pattern"),
            citation: Regex::new(r"^\[\d+\]").expect("static pattern"),
            faq_question: Regex::new(r"^\*\*[^*]+\?\*\*$").expect("static pattern"),
        }
    }
}

impl LineRenderer {
    /// Create a new renderer with empty scan state
    pub fn new() -> Self {
        Self {
            first_heading_seen: false,
            in_table: false,
            table_lines: Vec::new(),
            in_script: false,
            script_lines: Vec::new(),
            in_faq: false,
            nodes: Vec::new(),
            patterns: LinePatterns::compile(),
        }
    }

    /// Render an article body into an ordered sequence of block nodes
    ///
    /// # Parameters
    /// * `body` - Raw article body text; may be empty or arbitrarily long
    ///
    /// # Returns
    /// * `Vec<BlockNode>` - Block nodes in input line order, with table and
    ///   script blocks emitted once at block close
    pub fn render(body: &str) -> Vec<BlockNode> {
        let mut renderer = Self::new();

        for line in body.lines() {
            renderer.process_line(line);
        }

        renderer.finalize();
        renderer.nodes
    }

    /// Classify and dispatch a single line
    fn process_line(&mut self, raw: &str) {
        let line = raw.trim();

        // Blank lines separate content, but an open capture swallows them:
        // a script block keeps them verbatim, a table run skips over them
        // without closing.
        if line.is_empty() {
            if self.in_script {
                self.script_lines.push(raw.to_string());
            } else if !self.in_table {
                self.nodes.push(BlockNode::Break);
            }
            return;
        }

        // A script opener always (re)starts the capture buffer, even when a
        // capture is already open. The closing tag is only recognized on
        // subsequent lines.
        if line.starts_with("<script") {
            self.in_script = true;
            self.script_lines = vec![raw.to_string()];
            return;
        }

        if self.in_script {
            self.script_lines.push(raw.to_string());
            if line.contains("</script>") {
                let markup = std::mem::take(&mut self.script_lines).join("\n");
                self.in_script = false;
                self.nodes.push(BlockNode::RawHtml { markup });
            }
            return;
        }

        // Media references are emitted immediately, never buffered.
        if let Some(caps) = self.patterns.media.captures(line) {
            let alt = caps[1].to_string();
            let path = caps[2].to_string();
            if is_video_path(&path) {
                self.nodes.push(BlockNode::Video { path });
            } else {
                self.nodes.push(BlockNode::Image { alt, path });
            }
            return;
        }

        if line.starts_with('|') {
            self.in_table = true;
            self.table_lines.push(line.to_string());
            return;
        }

        // First non-pipe line after a table run closes it; the current line
        // then continues through the remaining rules below.
        if self.in_table {
            self.flush_table();
        }

        if let Some(rest) = line.strip_prefix("# ") {
            if !self.first_heading_seen {
                // The leading h1 is the article title, displayed by the
                // page chrome rather than the body.
                self.first_heading_seen = true;
                return;
            }
            self.nodes.push(BlockNode::Heading {
                level: 1,
                content: resolve_inline(rest),
            });
            return;
        }

        if let Some(rest) = line.strip_prefix("## ") {
            let heading = rest.trim();
            if heading.to_ascii_lowercase().starts_with("faq") {
                self.in_faq = true;
                self.nodes.push(BlockNode::FaqSectionStart {
                    heading: heading.to_string(),
                });
            } else {
                self.nodes.push(BlockNode::Heading {
                    level: 2,
                    content: resolve_inline(rest),
                });
            }
            return;
        }

        if let Some(rest) = line.strip_prefix("### ") {
            self.nodes.push(BlockNode::Heading {
                level: 3,
                content: resolve_inline(rest),
            });
            return;
        }

        if let Some(rest) = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
        {
            self.nodes.push(BlockNode::ListItem {
                ordered: false,
                content: resolve_inline(rest),
            });
            return;
        }

        if let Some(caps) = self.patterns.ordered_item.captures(line) {
            self.nodes.push(BlockNode::ListItem {
                ordered: true,
                content: resolve_inline(&caps[1]),
            });
            return;
        }

        if self.patterns.citation.is_match(line)
            || (line.starts_with('(') && line.contains("utm_source"))
        {
            let href = extract_parenthesized(line).unwrap_or_default();
            self.nodes.push(BlockNode::LinkParagraph {
                text: line.to_string(),
                href,
            });
            return;
        }

        if self.patterns.faq_question.is_match(line)
            || (line.starts_with("**") && line.contains('?'))
        {
            self.nodes.push(BlockNode::FaqQuestion {
                text: line.replace("**", ""),
            });
            return;
        }

        // Everything else is a plain paragraph.
        self.nodes.push(BlockNode::Paragraph {
            content: resolve_inline(line),
        });
    }

    /// Close the open table run and emit one table node
    ///
    /// The first buffered line is the header row; the second is discarded as
    /// the separator row without inspection (markdown table convention); all
    /// remaining lines become data rows.
    fn flush_table(&mut self) {
        self.in_table = false;
        let lines = std::mem::take(&mut self.table_lines);
        if lines.is_empty() {
            return;
        }

        let headers = split_table_row(&lines[0]);
        let rows: Vec<Vec<String>> = lines.iter().skip(2).map(|l| split_table_row(l)).collect();

        self.nodes.push(BlockNode::Table { headers, rows });
    }

    /// Finish the scan after the last line
    ///
    /// An open FAQ section is force-closed, a leftover table run is flushed,
    /// and an unterminated script capture is dropped without emitting.
    fn finalize(&mut self) {
        if self.in_faq {
            self.in_faq = false;
            self.nodes.push(BlockNode::FaqSectionEnd);
        }

        if self.in_table {
            self.flush_table();
        }

        self.script_lines.clear();
        self.in_script = false;
    }
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the text of the article's title heading
///
/// Returns the remainder of the first `# ` line, the same line the renderer
/// suppresses from body output. Lines inside a `<script>` capture are
/// skipped so embedded markup cannot shadow the title.
pub fn extract_title(body: &str) -> Option<String> {
    let mut in_script = false;

    for raw in body.lines() {
        let line = raw.trim();

        if line.starts_with("<script") {
            in_script = true;
            continue;
        }
        if in_script {
            if line.contains("</script>") {
                in_script = false;
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("# ") {
            return Some(rest.trim().to_string());
        }
    }

    None
}

/// Whether a media path's extension marks it as a video
fn is_video_path(path: &str) -> bool {
    path.rsplit('.')
        .next()
        .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Split a pipe-delimited row into trimmed, non-empty cell texts
fn split_table_row(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

/// URL inside the first `(...)` group of a line, if any
fn extract_parenthesized(line: &str) -> Option<String> {
    let open = line.find('(')?;
    let rest = &line[open + 1..];
    let close = rest.find(')')?;
    Some(rest[..close].to_string())
}
