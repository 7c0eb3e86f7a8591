// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod sinks;
pub mod sources;

pub use sinks::{GithubOutputSink, format_records};
pub use sources::{FileListSource, GitDiffSource, ListFormat};
