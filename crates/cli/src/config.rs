// crates/cli/src/config.rs
use std::path::PathBuf;

use changed_files_domain::split_patterns;
use changed_files_infra::ListFormat;
use changed_files_shared_kernel::PresentationError;

use crate::{
    args::Args,
    value_enum::{OutputFormat, SourceKind},
};

/// Resolved changed-file source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Git {
        repo: PathBuf,
        base: String,
        head: String,
        merge_base: bool,
    },
    /// `path == None` reads stdin.
    List { path: Option<PathBuf>, format: ListFormat },
    Inline(Vec<String>),
}

/// Validated run configuration built from [`Args`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Positional patterns first, then those from `--patterns`/the environment.
    /// Left unvalidated here: an empty list is reported by the matcher.
    pub patterns: Vec<String>,
    pub source: SourceConfig,
    pub format: OutputFormat,
    pub files_key: String,
    pub github_output: Option<PathBuf>,
    pub require_match: bool,
    pub fail_on_empty: bool,
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let mut patterns = args.patterns;
        if let Some(list) = args.pattern_list.as_deref() {
            patterns.extend(split_patterns(list));
        }

        let source = source_from_args(args.source)?;

        // An exported-but-empty GITHUB_OUTPUT means "not running in Actions".
        let github_output = args.output.github_output.filter(|path| !path.as_os_str().is_empty());

        Ok(Self {
            patterns,
            source,
            format: args.output.format,
            files_key: args.output.output_key,
            github_output,
            require_match: args.behavior.require_match,
            fail_on_empty: args.behavior.fail_on_empty,
        })
    }
}

fn source_from_args(opts: crate::args_groups::SourceOptions) -> Result<SourceConfig, PresentationError> {
    let kind = opts.source.unwrap_or(if !opts.files.is_empty() {
        SourceKind::Inline
    } else if opts.files_from.is_some() {
        SourceKind::List
    } else {
        SourceKind::Git
    });

    let format = if opts.null_separated { ListFormat::Nul } else { ListFormat::Lines };

    match kind {
        SourceKind::Inline => {
            if let Some(path) = &opts.files_from {
                return Err(PresentationError::InvalidValue {
                    flag: "--files-from".to_string(),
                    value: path.display().to_string(),
                    reason: "cannot be combined with the inline source".to_string(),
                });
            }
            Ok(SourceConfig::Inline(opts.files))
        }
        SourceKind::List => {
            reject_inline_files(&opts.files, "list")?;
            let path = opts.files_from.filter(|path| path.as_os_str() != "-");
            Ok(SourceConfig::List { path, format })
        }
        SourceKind::Git => {
            reject_inline_files(&opts.files, "git")?;
            if let Some(path) = &opts.files_from {
                return Err(PresentationError::InvalidValue {
                    flag: "--files-from".to_string(),
                    value: path.display().to_string(),
                    reason: "cannot be combined with the git source".to_string(),
                });
            }
            Ok(SourceConfig::Git {
                repo: opts.repo,
                base: opts.base,
                head: opts.head,
                merge_base: opts.merge_base,
            })
        }
    }
}

fn reject_inline_files(files: &[String], source: &str) -> Result<(), PresentationError> {
    match files.first() {
        Some(first) => Err(PresentationError::InvalidValue {
            flag: "--file".to_string(),
            value: first.clone(),
            reason: format!("cannot be combined with the {source} source"),
        }),
        None => Ok(()),
    }
}
