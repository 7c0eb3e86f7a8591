use changed_files_shared_kernel::{DomainError, DomainResult};

use super::GlobPattern;

/// Non-empty, ordered collection of compiled patterns.
///
/// Order and duplicates are preserved so that every input pattern maps to
/// exactly one result entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternList(Vec<GlobPattern>);

impl PatternList {
    /// Compile `patterns`, failing only when there are none.
    pub fn new<I, S>(patterns: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compiled: Vec<GlobPattern> = patterns
            .into_iter()
            .map(|pattern| GlobPattern::new(pattern.as_ref()))
            .collect();

        if compiled.is_empty() {
            return Err(DomainError::configuration("no patterns supplied"));
        }
        Ok(Self(compiled))
    }

    /// Parse a space- or newline-separated pattern string, as found in an
    /// environment variable or a workflow input.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        Self::new(split_patterns(raw))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GlobPattern> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Patterns that could not be compiled and compare literally instead.
    pub fn literal_fallbacks(&self) -> impl Iterator<Item = &GlobPattern> {
        self.0.iter().filter(|pattern| pattern.is_literal_fallback())
    }
}

impl<'a> IntoIterator for &'a PatternList {
    type Item = &'a GlobPattern;
    type IntoIter = std::slice::Iter<'a, GlobPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Split on any run of ASCII/Unicode whitespace; empty segments are dropped.
pub fn split_patterns(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
