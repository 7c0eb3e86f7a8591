use std::{
    path::{Path, PathBuf},
    process::Command,
};

use changed_files_ports::ChangedFileSource;
use changed_files_shared_kernel::{ChangedFile, InfrastructureError, Result};
use tracing::debug;

pub const DEFAULT_BASE: &str = "HEAD~1";
pub const DEFAULT_HEAD: &str = "HEAD";

/// Changed files from `git diff --name-only` between two revisions.
#[derive(Debug, Clone)]
pub struct GitDiffSource {
    repo: PathBuf,
    base: String,
    head: String,
    merge_base: bool,
}

impl GitDiffSource {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.into(),
            base: DEFAULT_BASE.to_string(),
            head: DEFAULT_HEAD.to_string(),
            merge_base: false,
        }
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn head(mut self, head: impl Into<String>) -> Self {
        self.head = head.into();
        self
    }

    /// Diff from the merge base of `base` and `head` (`base...head`), which
    /// is what a pull request shows.
    pub fn merge_base(mut self, enabled: bool) -> Self {
        self.merge_base = enabled;
        self
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }

    fn revision_args(&self) -> Vec<String> {
        if self.merge_base {
            vec![format!("{}...{}", self.base, self.head)]
        } else {
            vec![self.base.clone(), self.head.clone()]
        }
    }
}

impl ChangedFileSource for GitDiffSource {
    fn changed_files(&self) -> Result<Vec<ChangedFile>> {
        let mut args = vec!["diff".to_string(), "--name-only".to_string(), "-z".to_string()];
        args.extend(self.revision_args());
        args.push("--".to_string());
        debug!(repo = %self.repo.display(), ?args, "running git");

        let output = Command::new("git")
            .args(&args)
            .current_dir(&self.repo)
            .output()
            .map_err(|err| InfrastructureError::GitError {
                operation: "diff".to_string(),
                details: format!("failed to run git: {err}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(InfrastructureError::GitError {
                operation: "diff".to_string(),
                details: stderr.trim().to_string(),
            }
            .into());
        }

        Ok(parse_name_only_z(&output.stdout))
    }

    fn describe(&self) -> String {
        let range = self.revision_args().join(" ");
        format!("git diff {range} in {}", self.repo.display())
    }
}

/// Split NUL-terminated `--name-only -z` output, keeping git's order.
fn parse_name_only_z(stdout: &[u8]) -> Vec<ChangedFile> {
    stdout
        .split(|&b| b == 0)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| ChangedFile::from(String::from_utf8_lossy(chunk).into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git(dir: &Path, args: &[&str]) -> bool {
        Command::new("git")
            .args(["-c", "user.name=ci", "-c", "user.email=ci@example.com", "-c", "commit.gpgsign=false"])
            .args(args)
            .current_dir(dir)
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    #[test]
    fn parses_nul_separated_output_in_order() {
        let files = parse_name_only_z(b"z.rs\0a b.py\0dir/c.md\0");
        let names: Vec<&str> = files.iter().map(ChangedFile::as_str).collect();
        assert_eq!(names, ["z.rs", "a b.py", "dir/c.md"]);
    }

    #[test]
    fn empty_output_is_empty_list() {
        assert!(parse_name_only_z(b"").is_empty());
    }

    #[test]
    fn describes_revision_range() {
        let plain = GitDiffSource::new(".");
        assert_eq!(plain.describe(), "git diff HEAD~1 HEAD in .");

        let pr = GitDiffSource::new(".").base("origin/main").merge_base(true);
        assert_eq!(pr.describe(), "git diff origin/main...HEAD in .");
    }

    #[test]
    fn diff_outside_a_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = GitDiffSource::new(dir.path()).changed_files().unwrap_err();
        assert!(err.to_string().contains("Git operation failed"));
    }

    #[test]
    fn lists_files_changed_by_last_commit() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        if !git(root, &["init", "-q"]) {
            return;
        }
        std::fs::write(root.join("keep.txt"), "one").unwrap();
        assert!(git(root, &["add", "."]));
        assert!(git(root, &["commit", "-q", "-m", "first"]));

        std::fs::create_dir(root.join("src")).unwrap();
        std::fs::write(root.join("src/lib.rs"), "fn main() {}").unwrap();
        std::fs::write(root.join("keep.txt"), "two").unwrap();
        assert!(git(root, &["add", "."]));
        assert!(git(root, &["commit", "-q", "-m", "second"]));

        let files = GitDiffSource::new(root).changed_files().unwrap();
        let names: Vec<&str> = files.iter().map(ChangedFile::as_str).collect();
        assert_eq!(names, ["keep.txt", "src/lib.rs"]);
    }
}
