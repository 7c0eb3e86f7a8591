use changed_files_domain::AggregateResult;
use changed_files_shared_kernel::ChangedFile;

/// Everything a front end needs to report one matching run.
#[derive(Debug, Clone)]
pub struct MatchChangedFilesOutput {
    /// The list exactly as the source produced it.
    pub changed_files: Vec<ChangedFile>,
    pub result: AggregateResult,
}
