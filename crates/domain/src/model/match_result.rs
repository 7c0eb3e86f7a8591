use std::fmt;

use changed_files_shared_kernel::ChangedFile;
use serde::Serialize;

/// Outcome of one pattern scanned against the whole changed-file list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pattern: String,
    matched: bool,
    files: Vec<ChangedFile>,
}

impl MatchResult {
    /// `files` must already be in input order and free of duplicates.
    pub(crate) fn new(pattern: impl Into<String>, files: Vec<ChangedFile>) -> Self {
        Self { pattern: pattern.into(), matched: !files.is_empty(), files }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matched(&self) -> bool {
        self.matched
    }

    pub fn files(&self) -> &[ChangedFile] {
        &self.files
    }
}

/// The log line the CI scripts print per pattern.
impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matched {
            write!(f, "Pattern '{}': Found a matching file", self.pattern)
        } else {
            write!(f, "Pattern '{}': No matching file found", self.pattern)
        }
    }
}
