use std::path::PathBuf;

use changed_files_ports::ChangedFileSource;
use changed_files_shared_kernel::{ChangedFile, InfrastructureError, Result};

use crate::persistence::FileReader;

/// How entries are separated in a changed-file list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFormat {
    /// One path per line; `\r\n` line endings are accepted.
    #[default]
    Lines,
    /// NUL separated, as produced by `git diff -z` or `find -print0`.
    Nul,
}

/// Changed files read from a list file, or from stdin when no path is set.
///
/// Blank entries are skipped; other entries are kept verbatim and in order.
#[derive(Debug, Clone)]
pub struct FileListSource {
    path: Option<PathBuf>,
    format: ListFormat,
}

impl FileListSource {
    pub fn from_path(path: impl Into<PathBuf>, format: ListFormat) -> Self {
        Self { path: Some(path.into()), format }
    }

    pub fn stdin(format: ListFormat) -> Self {
        Self { path: None, format }
    }

    fn read(&self) -> Result<Vec<u8>> {
        match &self.path {
            Some(path) => FileReader::read_to_end(path)
                .map_err(|source| InfrastructureError::FileRead { path: path.clone(), source }.into()),
            None => FileReader::read_stdin().map_err(|source| {
                InfrastructureError::FileRead { path: PathBuf::from("<stdin>"), source }.into()
            }),
        }
    }
}

impl ChangedFileSource for FileListSource {
    fn changed_files(&self) -> Result<Vec<ChangedFile>> {
        Ok(parse_list(&self.read()?, self.format))
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) => format!("file list {}", path.display()),
            None => "file list <stdin>".to_string(),
        }
    }
}

fn parse_list(buf: &[u8], format: ListFormat) -> Vec<ChangedFile> {
    let text = String::from_utf8_lossy(buf);
    match format {
        ListFormat::Lines => text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ChangedFile::from)
            .collect(),
        ListFormat::Nul => text
            .split('\0')
            .filter(|chunk| !chunk.is_empty())
            .map(ChangedFile::from)
            .collect(),
    }
}
