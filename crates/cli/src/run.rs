// crates/cli/src/run.rs
use std::io::Write;

use changed_files_domain::GlobMatcher;
use changed_files_infra::{FileListSource, GitDiffSource, GithubOutputSink};
use changed_files_ports::ChangedFileSource;
use changed_files_shared_kernel::{ChangedFile, ErrorContext};
use changed_files_usecase::{MatchChangedFiles, PublishResults};
use tracing::info;

use crate::{
    config::{Config, SourceConfig},
    error::Result,
    presentation,
};

/// Exit status policy outcome, independent of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// `--require-match` was set and nothing matched.
    NoMatch,
    /// `--fail-on-empty` was set and the source reported no files.
    NoChangedFiles,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::NoMatch | Self::NoChangedFiles => 1,
        }
    }
}

/// What the binary prints and how it exits.
#[derive(Debug, Clone)]
pub struct Report {
    pub rendered: String,
    pub status: RunStatus,
}

impl Report {
    /// Write the rendered output and flush. A closed pipe surfaces as
    /// [`AppError::Io`](crate::error::AppError::Io) instead of a panic.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(self.rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

pub fn run(config: &Config) -> Result<Report> {
    // パターン未指定はソースに触れる前に弾く
    let matcher = GlobMatcher::from_patterns(&config.patterns)?;
    let source = build_source(&config.source);

    let output = MatchChangedFiles::new(source.as_ref()).run(&matcher)?;

    if let Some(path) = &config.github_output {
        let sink = GithubOutputSink::new(path);
        PublishResults::new(&sink, config.files_key.as_str()).run(&output.result)?;
        info!(path = %path.display(), "step outputs written");
    }

    let rendered = presentation::render(&output.result, config.format, &config.files_key)
        .context("rendering results")?;

    let status = if config.fail_on_empty && output.changed_files.is_empty() {
        RunStatus::NoChangedFiles
    } else if config.require_match && !output.result.any_match() {
        RunStatus::NoMatch
    } else {
        RunStatus::Success
    };

    Ok(Report { rendered, status })
}

fn build_source(source: &SourceConfig) -> Box<dyn ChangedFileSource> {
    match source {
        SourceConfig::Git { repo, base, head, merge_base } => Box::new(
            GitDiffSource::new(repo.clone())
                .base(base.as_str())
                .head(head.as_str())
                .merge_base(*merge_base),
        ),
        SourceConfig::List { path: Some(path), format } => {
            Box::new(FileListSource::from_path(path.clone(), *format))
        }
        SourceConfig::List { path: None, format } => Box::new(FileListSource::stdin(*format)),
        SourceConfig::Inline(files) => {
            Box::new(files.iter().map(|f| ChangedFile::from(f.as_str())).collect::<Vec<_>>())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::value_enum::OutputFormat;

    fn inline_config(files: &[&str], patterns: &[&str]) -> Config {
        Config {
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            source: SourceConfig::Inline(files.iter().map(|f| f.to_string()).collect()),
            format: OutputFormat::Text,
            files_key: "files".to_string(),
            github_output: None,
            require_match: false,
            fail_on_empty: false,
        }
    }

    #[test]
    fn reports_success_with_matches() {
        let report = run(&inline_config(&["a.py", "b.txt"], &["*.py"])).unwrap();
        assert_eq!(report.status, RunStatus::Success);
        assert!(report.rendered.contains("files=a.py\n"));
    }

    #[test]
    fn empty_patterns_are_a_configuration_error() {
        let err = run(&inline_config(&["x.py"], &[])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("no patterns supplied"));
    }

    #[test]
    fn require_match_trips_on_no_match() {
        let mut config = inline_config(&["b.txt"], &["*.py"]);
        config.require_match = true;
        assert_eq!(run(&config).unwrap().status, RunStatus::NoMatch);
    }

    #[test]
    fn fail_on_empty_trips_before_require_match() {
        let mut config = inline_config(&[], &["*.py"]);
        config.require_match = true;
        config.fail_on_empty = true;
        assert_eq!(run(&config).unwrap().status, RunStatus::NoChangedFiles);
    }

    #[test]
    fn empty_source_without_policy_succeeds() {
        let report = run(&inline_config(&[], &["*.py"])).unwrap();
        assert_eq!(report.status, RunStatus::Success);
        assert!(report.rendered.contains("matched=false\n"));
    }

    #[test]
    fn writes_github_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("out");
        let mut config = inline_config(&["a.py", "dir/c.py"], &["*.py"]);
        config.github_output = Some(path.clone());
        config.files_key = "python".to_string();

        run(&config).unwrap();

        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "matched=true\ncount=2\npython=a.py,dir/c.py\n"
        );
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn report_writes_rendered_output() {
        let report = run(&inline_config(&["a.py"], &["*.py"])).unwrap();
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), report.rendered);
    }

    #[test]
    fn closed_stdout_is_a_runtime_error() {
        let report = run(&inline_config(&["a.py"], &["*.py"])).unwrap();
        let err = report.write_to(&mut ClosedPipe).unwrap_err();
        assert!(matches!(err, crate::error::AppError::Io(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn missing_list_file_is_a_runtime_error() {
        let mut config = inline_config(&[], &["*"]);
        config.source = SourceConfig::List {
            path: Some(PathBuf::from("/nonexistent/changed-files.txt")),
            format: changed_files_infra::ListFormat::Lines,
        };
        let err = run(&config).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
