pub mod github_output;

pub use github_output::{GithubOutputSink, format_records};
