//! Guardian report - the ordered line log of one pass

use serde::Serialize;

/// Append-only list of report lines, one per observation or action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GuardianReport {
    lines: Vec<String>,
}

impl GuardianReport {
    /// Create an empty report
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a line
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// All lines in the order they were recorded
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Find the first line starting with a prefix
    #[must_use]
    pub fn line_starting_with(&self, prefix: &str) -> Option<&str> {
        self.lines.iter().map(String::as_str).find(|l| l.starts_with(prefix))
    }
}

impl Extend<String> for GuardianReport {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.lines.extend(iter);
    }
}

impl std::fmt::Display for GuardianReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}
