//! # Domain
//!
//! The changed-file glob-matching engine.
//!
//! - [`config`]: pattern value objects ([`GlobPattern`], [`PatternList`])
//! - [`matching`]: [`GlobMatcher`], which evaluates every pattern against every changed file
//! - [`model`]: the per-pattern and aggregate results
//!
//! Nothing in this crate performs I/O.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod matching;
pub mod model;

pub use config::{GlobPattern, PatternList, split_patterns};
pub use matching::{GlobMatcher, match_changed_files};
pub use model::{AggregateResult, MatchResult};
