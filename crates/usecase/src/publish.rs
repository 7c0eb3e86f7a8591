use changed_files_domain::AggregateResult;
use changed_files_ports::{OutputRecord, OutputSink};
use changed_files_shared_kernel::{ApplicationError, Result};
use tracing::debug;

/// Key holding the overall "at least one match" flag.
pub const MATCHED_KEY: &str = "matched";
/// Key holding the number of distinct matched files.
pub const COUNT_KEY: &str = "count";
/// Default key for the comma-joined matched file list.
pub const DEFAULT_FILES_KEY: &str = "files";

/// Records published for `result`, in a fixed order: flag, count, file list.
pub fn output_records(result: &AggregateResult, files_key: &str) -> Vec<OutputRecord> {
    vec![
        OutputRecord::new(MATCHED_KEY, result.any_match().to_string()),
        OutputRecord::new(COUNT_KEY, result.total().to_string()),
        OutputRecord::new(files_key, result.joined_files(",")),
    ]
}

pub struct PublishResults<'a> {
    sink: &'a dyn OutputSink,
    files_key: String,
}

impl<'a> PublishResults<'a> {
    pub fn new(sink: &'a dyn OutputSink, files_key: impl Into<String>) -> Self {
        Self { sink, files_key: files_key.into() }
    }

    pub fn run(&self, result: &AggregateResult) -> Result<()> {
        let records = output_records(result, &self.files_key);
        let sink = self.sink.describe();
        debug!(sink = %sink, records = records.len(), "publishing results");
        self.sink.publish(&records).map_err(|err| {
            ApplicationError::PublishFailed {
                sink,
                reason: err.to_string(),
                source: Some(Box::new(err)),
            }
            .into()
        })
    }
}
