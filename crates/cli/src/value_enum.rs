// crates/cli/src/value_enum.rs
use clap::ValueEnum;

/// Where the changed-file list is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SourceKind {
    /// `git diff --name-only` between two revisions
    Git,
    /// A newline- or NUL-separated list file (`-` for stdin)
    List,
    /// Paths given with `--file`
    Inline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-pattern lines followed by `key=value` records
    #[default]
    Text,
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}
