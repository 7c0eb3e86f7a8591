//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: where the changed-file list comes from
//! - [`output`]: where `key=value` results are published
//!
//! These ports keep the use case independent of git, files and the CI
//! runner it happens to be invoked from.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod output;
pub mod source;

pub use output::{OutputRecord, OutputSink};
pub use source::ChangedFileSource;
