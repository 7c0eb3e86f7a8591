//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: fetch the changed files and match them against the patterns
//! - [`publish`]: turn an aggregate result into CI output records
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod publish;

pub use dto::MatchChangedFilesOutput;
pub use orchestrator::MatchChangedFiles;
pub use publish::{PublishResults, output_records};
