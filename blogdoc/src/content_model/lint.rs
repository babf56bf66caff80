//! Authoring lints for article bodies
//!
//! The renderer never rejects input: malformed markup degrades to inert
//! output. These lints give authors the diagnostics that contract
//! withholds, pointing at constructs the renderer silently drops or
//! reinterprets. Linting is a separate scan and has no effect on rendering.

use thiserror::Error;

/// A non-fatal authoring hazard found in an article body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// A `<script>` block was never closed; the renderer drops it entirely
    #[error("unterminated <script> block opened on line {line}; the whole block is dropped from output")]
    UnterminatedScript {
        /// 1-based line number of the opening tag
        line: usize,
    },

    /// A table's second line is discarded as the separator row even though
    /// it does not look like one, losing what is probably a data row
    #[error("table starting on line {line} has no separator row; its second line ({dropped:?}) is discarded as one")]
    SuspiciousTableSeparator {
        /// 1-based line number of the table's first row
        line: usize,
        /// The line that will be silently discarded
        dropped: String,
    },

    /// The article body contains no content at all
    #[error("article body is empty")]
    EmptyBody,
}

/// Scan an article body for authoring hazards
///
/// Mirrors the renderer's capture semantics (blank lines do not close a
/// table run, a script opener restarts its capture) so warnings point at
/// exactly what rendering will drop.
pub fn lint(body: &str) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    if body.trim().is_empty() {
        warnings.push(LintWarning::EmptyBody);
        return warnings;
    }

    let mut in_script = false;
    let mut script_open_line = 0usize;
    let mut table_lines: Vec<(usize, String)> = Vec::new();
    let mut in_table = false;

    for (idx, raw) in body.lines().enumerate() {
        let number = idx + 1;
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with("<script") {
            in_script = true;
            script_open_line = number;
            continue;
        }
        if in_script {
            if line.contains("</script>") {
                in_script = false;
            }
            continue;
        }

        if line.starts_with('|') {
            in_table = true;
            table_lines.push((number, line.to_string()));
            continue;
        }

        if in_table {
            check_table_run(&table_lines, &mut warnings);
            table_lines.clear();
            in_table = false;
        }
    }

    if in_table {
        check_table_run(&table_lines, &mut warnings);
    }
    if in_script {
        warnings.push(LintWarning::UnterminatedScript {
            line: script_open_line,
        });
    }

    warnings
}

/// Warn when a closed table run's second line is not a separator row
fn check_table_run(lines: &[(usize, String)], warnings: &mut Vec<LintWarning>) {
    if lines.len() < 2 {
        return;
    }

    let (first_line, _) = lines[0];
    let (_, ref second) = lines[1];

    if !is_separator_row(second) {
        warnings.push(LintWarning::SuspiciousTableSeparator {
            line: first_line,
            dropped: second.clone(),
        });
    }
}

/// Whether a pipe row consists only of `---`/`:--:`-style separator cells
fn is_separator_row(line: &str) -> bool {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .all(|cell| cell.contains('-') && cell.chars().all(|c| matches!(c, '-' | ':')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_body_lints_clean() {
        let body = "# Title\n\nSome prose.\n\n|A|B|\n|---|---|\n|1|2|\n";

        assert!(lint(body).is_empty());
    }

    #[test]
    fn test_empty_body_warns() {
        assert_eq!(lint("  \n \n"), vec![LintWarning::EmptyBody]);
    }

    #[test]
    fn test_unterminated_script_warns_with_line() {
        let body = "intro\n<script>\nconsole.log(1)";

        assert_eq!(
            lint(body),
            vec![LintWarning::UnterminatedScript { line: 2 }]
        );
    }

    #[test]
    fn test_terminated_script_is_fine() {
        let body = "<script>\nconsole.log(1)\n</script>";

        assert!(lint(body).is_empty());
    }

    #[test]
    fn test_missing_separator_row_warns() {
        let body = "|A|B|\n|1|2|\n";

        assert_eq!(
            lint(body),
            vec![LintWarning::SuspiciousTableSeparator {
                line: 1,
                dropped: "|1|2|".to_string(),
            }]
        );
    }

    #[test]
    fn test_aligned_separator_row_accepted() {
        let body = "|A|B|\n|:--|--:|\n|1|2|\n";

        assert!(lint(body).is_empty());
    }

    #[test]
    fn test_single_row_table_has_nothing_to_lose() {
        // A one-line run has no second line to discard.
        assert!(lint("|A|B|\n").is_empty());
    }
}
