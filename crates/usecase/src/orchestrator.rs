use changed_files_domain::GlobMatcher;
use changed_files_ports::ChangedFileSource;
use changed_files_shared_kernel::{ApplicationError, ChangedFile, Result};
use tracing::{debug, info, warn};

use crate::dto::MatchChangedFilesOutput;

pub struct MatchChangedFiles<'a> {
    source: &'a dyn ChangedFileSource,
}

impl<'a> MatchChangedFiles<'a> {
    pub fn new(source: &'a dyn ChangedFileSource) -> Self {
        Self { source }
    }

    pub fn run(&self, matcher: &GlobMatcher) -> Result<MatchChangedFilesOutput> {
        for pattern in matcher.patterns().literal_fallbacks() {
            warn!(
                pattern = pattern.pattern(),
                reason = pattern.fallback_reason().unwrap_or_default(),
                "pattern is not a valid glob; comparing it literally"
            );
        }

        let changed_files = self.collect()?;
        if changed_files.is_empty() {
            warn!(source = %self.source.describe(), "no changed files found");
        }

        let result = matcher.match_files(&changed_files);
        for per_pattern in result.patterns() {
            debug!(
                pattern = per_pattern.pattern(),
                matched = per_pattern.files().len(),
                "pattern evaluated"
            );
        }
        info!(total = result.total(), changed = changed_files.len(), "matching finished");

        Ok(MatchChangedFilesOutput { changed_files, result })
    }

    fn collect(&self) -> Result<Vec<ChangedFile>> {
        let source_name = self.source.describe();
        debug!(source = %source_name, "collecting changed files");
        self.source.changed_files().map_err(|err| {
            ApplicationError::SourceFailed {
                source_name,
                reason: err.to_string(),
                source: Some(Box::new(err)),
            }
            .into()
        })
    }
}
