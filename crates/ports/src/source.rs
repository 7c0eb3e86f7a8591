// crates/ports/src/source.rs
use changed_files_shared_kernel::{ChangedFile, Result};

/// Port for obtaining the ordered list of changed files.
///
/// Implementations return paths in the order their backend reports them and
/// may return an empty list; deciding whether that is fatal is up to callers.
pub trait ChangedFileSource: Send + Sync {
    fn changed_files(&self) -> Result<Vec<ChangedFile>>;

    /// Short label used in logs and error messages.
    fn describe(&self) -> String;
}

/// An in-memory list is its own source.
impl ChangedFileSource for Vec<ChangedFile> {
    fn changed_files(&self) -> Result<Vec<ChangedFile>> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("inline list ({} files)", self.len())
    }
}
