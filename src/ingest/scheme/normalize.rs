use serde::{Deserialize, Serialize};

/// How whitespace is folded before extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhitespaceMode {
    /// Keep line structure. Whitespace is collapsed inside each line and
    /// table rows keep their tab / multi-space column gaps.
    #[default]
    Lines,
    /// Collapse every whitespace run, newlines included, into one space
    /// before any per-line logic. Multi-line input becomes a single line.
    Legacy,
}

impl WhitespaceMode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            WhitespaceMode::Lines => "lines",
            WhitespaceMode::Legacy => "legacy",
        }
    }
}

/// Input text in the two shapes the extractors consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    /// Canonical text: one collapsed, trimmed, non-blank line per source line.
    pub text: String,
    /// Lines for the table strategy, column gaps intact.
    pub rows: Vec<String>,
}

impl NormalizedDocument {
    /// Lines of the canonical text.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

#[must_use]
pub fn normalize(content: &str, mode: WhitespaceMode) -> NormalizedDocument {
    match mode {
        WhitespaceMode::Lines => {
            let unified = unify_line_endings(content);
            let text = unified
                .split('\n')
                .map(collapse_whitespace)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            let rows = unified.split('\n').map(String::from).collect();
            NormalizedDocument { text, rows }
        }
        WhitespaceMode::Legacy => {
            let text = collapse_whitespace(&unify_line_endings(content));
            let rows = text.split('\n').map(String::from).collect();
            NormalizedDocument { text, rows }
        }
    }
}

/// `\r\n` and lone `\r` become `\n`.
#[must_use]
pub fn unify_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Trim and fold every whitespace run into a single space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
