use std::path::PathBuf;

use changed_files_ports::{OutputRecord, OutputSink};
use changed_files_shared_kernel::{InfrastructureError, Result};
use tracing::debug;

use crate::persistence::FileWriter;

const DELIMITER_PREFIX: &str = "CHANGED_FILES_EOF";

/// Appends records to the file GitHub Actions reads step outputs from.
#[derive(Debug, Clone)]
pub struct GithubOutputSink {
    path: PathBuf,
}

impl GithubOutputSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSink for GithubOutputSink {
    fn publish(&self, records: &[OutputRecord]) -> Result<()> {
        let body = format_records(records);
        debug!(path = %self.path.display(), bytes = body.len(), "appending step outputs");
        FileWriter::append(&self.path, body.as_bytes())
            .map_err(|source| InfrastructureError::FileWrite { path: self.path.clone(), source }.into())
    }

    fn describe(&self) -> String {
        format!("GitHub output {}", self.path.display())
    }
}

/// Render records in the `$GITHUB_OUTPUT` file format.
///
/// Single-line values use `key=value`. Values containing a newline use the
/// `key<<DELIMITER` block form with a delimiter absent from the value.
pub fn format_records(records: &[OutputRecord]) -> String {
    let mut out = String::new();
    for record in records {
        if record.value.contains('\n') {
            let delimiter = delimiter_for(&record.value);
            out.push_str(&format!("{}<<{delimiter}\n{}\n{delimiter}\n", record.key, record.value));
        } else {
            out.push_str(&format!("{}={}\n", record.key, record.value));
        }
    }
    out
}

fn delimiter_for(value: &str) -> String {
    let mut delimiter = DELIMITER_PREFIX.to_string();
    let mut n = 0usize;
    while value.contains(&delimiter) {
        n += 1;
        delimiter = format!("{DELIMITER_PREFIX}_{n}");
    }
    delimiter
}
