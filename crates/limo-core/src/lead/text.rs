//! Input normalization: whitespace collapsing and the line sequence.

use super::rules::patterns::WHITESPACE_RUN;

/// Marker substituted for every newline before whitespace is collapsed.
pub const LINE_BREAK: &str = "[NL]";

/// Normalized lead text together with its line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadText {
    /// Whole text with newlines replaced by [`LINE_BREAK`] and whitespace
    /// runs collapsed to single spaces.
    pub normalized: String,
    /// Trimmed, non-empty lines.
    pub lines: Vec<String>,
}

impl LeadText {
    pub fn new(raw: &str) -> Self {
        let normalized = normalize(raw);
        let lines = normalized
            .split(LINE_BREAK)
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();

        Self { normalized, lines }
    }
}

/// Replace newlines with the line marker, drop carriage returns and collapse
/// whitespace.
pub fn normalize(raw: &str) -> String {
    let marked = raw
        .replace('\n', &format!(" {} ", LINE_BREAK))
        .replace('\r', "");
    WHITESPACE_RUN.replace_all(&marked, " ").trim().to_string()
}
