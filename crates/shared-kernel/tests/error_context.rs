// crates/shared-kernel/tests/error_context.rs
use std::io;

use changed_files_shared_kernel::{ChangedFilesError, DomainError, ErrorContext};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(ChangedFilesError::from)
        .context("reading changed file list")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading changed file list"));
    assert!(display.contains("Output error:"));
    assert!(!err.is_configuration());
}

#[test]
fn configuration_errors_survive_context_wrapping() {
    let result: std::result::Result<(), DomainError> =
        Err(DomainError::configuration("no patterns supplied"));
    let err = result.with_context(|| "matching changed files".to_string()).unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("no patterns supplied"));
}
