// crates/cli/src/args.rs
use clap::Parser;

use crate::args_groups::{BehaviorOptions, LoggingOptions, OutputOptions, SourceOptions};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "changed-files",
    version = crate::VERSION,
    about = "変更ファイルをシェル形式の glob パターンで照合する CI ヘルパー"
)]
pub struct Args {
    /// 照合する glob パターン (`*` は `/` も跨ぐ, 完全一致)
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// 空白/改行区切りのパターン一覧 (位置引数の後ろに追加)
    #[arg(long = "patterns", value_name = "LIST", env = "CHANGED_FILES_PATTERNS")]
    pub pattern_list: Option<String>,

    #[command(flatten)]
    pub source: SourceOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    #[command(flatten)]
    pub logging: LoggingOptions,
}
