pub mod file_list;
pub mod git;

pub use file_list::{FileListSource, ListFormat};
pub use git::GitDiffSource;
