use std::collections::HashSet;

use changed_files_shared_kernel::{ChangedFile, DomainResult};

use crate::{
    config::PatternList,
    model::{AggregateResult, MatchResult},
};

/// Evaluates a fixed pattern list against changed-file lists.
///
/// Stateless between calls, so one matcher can be shared across threads and
/// reused for any number of file lists.
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    patterns: PatternList,
}

impl GlobMatcher {
    pub fn new(patterns: PatternList) -> Self {
        Self { patterns }
    }

    /// Compile `patterns`; fails with a configuration error when empty.
    pub fn from_patterns<I, S>(patterns: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PatternList::new(patterns).map(Self::new)
    }

    pub fn patterns(&self) -> &PatternList {
        &self.patterns
    }

    /// Scan every file against every pattern.
    ///
    /// Each pattern scans the full list independently, so a file may appear
    /// under several patterns; it appears in the aggregate set only once.
    /// A duplicated input path is recorded once per pattern.
    pub fn match_files(&self, files: &[ChangedFile]) -> AggregateResult {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut matched_files = Vec::new();

        let results = self
            .patterns
            .iter()
            .map(|pattern| {
                let mut local: HashSet<&str> = HashSet::new();
                let hits: Vec<ChangedFile> = files
                    .iter()
                    .filter(|file| pattern.matches(file.as_str()))
                    .filter(|file| local.insert(file.as_str()))
                    .cloned()
                    .collect();

                for file in files.iter().filter(|file| local.contains(file.as_str())) {
                    if seen.insert(file.as_str()) {
                        matched_files.push(file.clone());
                    }
                }

                MatchResult::new(pattern.pattern(), hits)
            })
            .collect();

        AggregateResult::new(matched_files, results)
    }
}

/// Match `files` against `patterns` in one call.
pub fn match_changed_files<S: AsRef<str>>(
    files: &[ChangedFile],
    patterns: &[S],
) -> DomainResult<AggregateResult> {
    GlobMatcher::from_patterns(patterns).map(|matcher| matcher.match_files(files))
}

#[cfg(test)]
mod tests {
    use changed_files_shared_kernel::DomainError;

    use super::*;

    fn files(paths: &[&str]) -> Vec<ChangedFile> {
        paths.iter().copied().map(ChangedFile::from).collect()
    }

    fn names(files: &[ChangedFile]) -> Vec<&str> {
        files.iter().map(ChangedFile::as_str).collect()
    }

    #[test]
    fn python_and_markdown_scenario() {
        let changed = files(&["a.py", "b.txt", "dir/c.py"]);
        let result = match_changed_files(&changed, &["*.py", "*.md"]).unwrap();

        let py = &result.patterns()[0];
        assert_eq!(py.pattern(), "*.py");
        assert!(py.matched());
        assert_eq!(names(py.files()), ["a.py", "dir/c.py"]);

        let md = &result.patterns()[1];
        assert_eq!(md.pattern(), "*.md");
        assert!(!md.matched());
        assert!(md.files().is_empty());

        assert_eq!(names(result.matched_files()), ["a.py", "dir/c.py"]);
        assert_eq!(result.total(), 2);
        assert!(result.any_match());
    }

    #[test]
    fn empty_changed_files_is_not_an_error() {
        let result = match_changed_files(&[], &["*.py"]).unwrap();
        assert_eq!(result.patterns().len(), 1);
        assert!(!result.patterns()[0].matched());
        assert_eq!(result.total(), 0);
        assert!(!result.any_match());
    }

    #[test]
    fn empty_pattern_list_is_a_configuration_error() {
        let err = match_changed_files::<&str>(&files(&["x.py"]), &[]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidConfiguration { .. }));
    }

    #[test]
    fn file_matching_several_patterns_is_counted_once() {
        let changed = files(&["src/lib.rs", "README.md"]);
        let result = match_changed_files(&changed, &["src/*", "*.rs", "*"]).unwrap();

        assert_eq!(names(result.patterns()[0].files()), ["src/lib.rs"]);
        assert_eq!(names(result.patterns()[1].files()), ["src/lib.rs"]);
        assert_eq!(names(result.patterns()[2].files()), ["src/lib.rs", "README.md"]);
        assert_eq!(names(result.matched_files()), ["src/lib.rs", "README.md"]);
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn aggregate_order_follows_pattern_scan() {
        let changed = files(&["a.md", "b.rs", "c.md"]);
        let result = match_changed_files(&changed, &["*.rs", "*.md"]).unwrap();
        assert_eq!(names(result.matched_files()), ["b.rs", "a.md", "c.md"]);
    }

    #[test]
    fn duplicate_input_paths_are_recorded_once() {
        let changed = files(&["a.py", "a.py", "b.py"]);
        let result = match_changed_files(&changed, &["*.py"]).unwrap();
        assert_eq!(names(result.patterns()[0].files()), ["a.py", "b.py"]);
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn duplicate_patterns_each_get_a_result() {
        let changed = files(&["a.py"]);
        let result = match_changed_files(&changed, &["*.py", "*.py"]).unwrap();
        assert_eq!(result.patterns().len(), 2);
        assert!(result.patterns().iter().all(MatchResult::matched));
        assert_eq!(result.total(), 1);
    }

    #[test]
    fn unusual_paths_do_not_fail() {
        let changed = files(&["", "[x]", "*", "we?rd/pa th"]);
        let result = match_changed_files(&changed, &["*"]).unwrap();
        assert_eq!(result.total(), 4);

        let literal = match_changed_files(&changed, &["[[]x]"]).unwrap();
        assert_eq!(names(literal.matched_files()), ["[x]"]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let matcher = GlobMatcher::from_patterns(["*.go", "docs/*"]).unwrap();
        let changed = files(&["main.go", "docs/guide.md", "pkg/x.go"]);
        assert_eq!(matcher.match_files(&changed), matcher.match_files(&changed));
    }

    #[test]
    fn joined_files_uses_separator() {
        let changed = files(&["a.py", "b.py"]);
        let result = match_changed_files(&changed, &["*.py"]).unwrap();
        assert_eq!(result.joined_files(","), "a.py,b.py");
        assert_eq!(result.joined_files(" "), "a.py b.py");
    }
}
