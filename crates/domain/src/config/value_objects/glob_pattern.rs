use regex::Regex;

use super::shell_syntax::to_regex;

/// A shell-style wildcard pattern compiled for full-string matching.
///
/// `*` and `?` cross `/` freely: the pattern is matched against the whole
/// path as one string. `?` and bracket classes consume one Unicode character.
/// Matching is case-sensitive.
///
/// Compilation never fails. A pattern the regex engine still rejects after
/// shell translation (for instance an inverted range such as `[z-a]`)
/// degrades to an exact string comparison; [`GlobPattern::fallback_reason`]
/// reports why.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    original: String,
    compiled: Compiled,
}

#[derive(Debug, Clone)]
enum Compiled {
    Regex(Regex),
    Literal { reason: String },
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Self {
        let compiled = Regex::new(&to_regex(pattern))
            .map(Compiled::Regex)
            .unwrap_or_else(|err| Compiled::Literal { reason: err.to_string() });

        Self { original: pattern.to_string(), compiled }
    }

    /// Whether `value` matches this pattern from start to end.
    ///
    /// `value` is never interpreted as a pattern itself.
    pub fn matches(&self, value: &str) -> bool {
        match &self.compiled {
            Compiled::Regex(regex) => regex.is_match(value),
            Compiled::Literal { .. } => self.original == value,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.original
    }

    /// The compile error that forced this pattern into literal comparison.
    pub fn fallback_reason(&self) -> Option<&str> {
        match &self.compiled {
            Compiled::Regex(_) => None,
            Compiled::Literal { reason } => Some(reason),
        }
    }

    pub fn is_literal_fallback(&self) -> bool {
        self.fallback_reason().is_some()
    }
}

impl PartialEq for GlobPattern {
    fn eq(&self, other: &Self) -> bool {
        self.original == other.original
    }
}

impl Eq for GlobPattern {}
