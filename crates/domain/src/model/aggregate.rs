use changed_files_shared_kernel::ChangedFile;
use serde::Serialize;

use super::MatchResult;

/// Combined outcome of matching every pattern against every changed file.
///
/// `matched_files` lists each matching path once, in the order it was first
/// matched while scanning patterns in input order. `patterns` holds one entry
/// per input pattern, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    matched: bool,
    total: usize,
    matched_files: Vec<ChangedFile>,
    patterns: Vec<MatchResult>,
}

impl AggregateResult {
    pub(crate) fn new(matched_files: Vec<ChangedFile>, patterns: Vec<MatchResult>) -> Self {
        Self {
            matched: !matched_files.is_empty(),
            total: matched_files.len(),
            matched_files,
            patterns,
        }
    }

    /// At least one pattern matched at least one file.
    pub fn any_match(&self) -> bool {
        self.matched
    }

    /// Number of distinct matched files.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn matched_files(&self) -> &[ChangedFile] {
        &self.matched_files
    }

    pub fn patterns(&self) -> &[MatchResult] {
        &self.patterns
    }

    /// Matched files joined by `separator`.
    ///
    /// Lossy when a path itself contains the separator; use the serialized
    /// form when that matters.
    pub fn joined_files(&self, separator: &str) -> String {
        self.matched_files
            .iter()
            .map(ChangedFile::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}
