pub mod glob_pattern;
pub mod pattern_list;
mod shell_syntax;

pub use glob_pattern::GlobPattern;
pub use pattern_list::{PatternList, split_patterns};
