// crates/ports/src/output.rs
use changed_files_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// A single `key=value` pair destined for the CI runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub key: String,
    pub value: String,
}

impl OutputRecord {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// Port for publishing result records.
pub trait OutputSink: Send + Sync {
    fn publish(&self, records: &[OutputRecord]) -> Result<()>;

    fn describe(&self) -> String;
}
