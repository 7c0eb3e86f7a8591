// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod args_groups;
pub mod config;
pub mod error;
pub mod logging;
pub mod parsers;
pub mod presentation;
pub mod run;
pub mod value_enum;

pub use run::{Report, RunStatus, run};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
