// crates/cli/src/args_groups.rs
//! Sub-structures for organizing CLI arguments into logical groups.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueHint};
use changed_files_infra::sources::git::{DEFAULT_BASE, DEFAULT_HEAD};
use changed_files_usecase::publish::DEFAULT_FILES_KEY;

use crate::{
    parsers,
    value_enum::{OutputFormat, SourceKind},
};

/// Changed-file source options
#[derive(Args, Debug)]
pub struct SourceOptions {
    /// 変更ファイルの取得元 (省略時: --file があれば inline, --files-from があれば list, それ以外は git)
    #[arg(long, value_enum, help_heading = "入力")]
    pub source: Option<SourceKind>,

    /// git diff の比較元リビジョン
    #[arg(long, default_value = DEFAULT_BASE, help_heading = "入力")]
    pub base: String,

    /// git diff の比較先リビジョン
    #[arg(long, default_value = DEFAULT_HEAD, help_heading = "入力")]
    pub head: String,

    /// base と head のマージベースから比較する (`base...head`)
    #[arg(long, help_heading = "入力")]
    pub merge_base: bool,

    /// git を実行するディレクトリ
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath, help_heading = "入力")]
    pub repo: PathBuf,

    /// 変更ファイル一覧を読み込むファイル (`-` で標準入力)
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "入力")]
    pub files_from: Option<PathBuf>,

    /// 一覧を NUL 区切りとして読む
    #[arg(long = "null", help_heading = "入力")]
    pub null_separated: bool,

    /// 変更ファイルを直接指定（複数指定可）
    #[arg(long = "file", value_name = "PATH", help_heading = "入力")]
    pub files: Vec<String>,
}

/// Output-related options
#[derive(Args, Debug)]
pub struct OutputOptions {
    /// 標準出力のフォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// 一致したファイル一覧 (カンマ区切り) を出力するキー名
    #[arg(long, default_value = DEFAULT_FILES_KEY, value_parser = parsers::parse_output_key, help_heading = "出力")]
    pub output_key: String,

    /// `key=value` を追記する GitHub Actions の出力ファイル
    #[arg(long, env = "GITHUB_OUTPUT", value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub github_output: Option<PathBuf>,
}

/// Exit status policy
#[derive(Args, Debug)]
pub struct BehaviorOptions {
    /// どのパターンにも一致しなければ終了コード 1
    #[arg(long, help_heading = "動作")]
    pub require_match: bool,

    /// 変更ファイルが 0 件なら終了コード 1
    #[arg(long, help_heading = "動作")]
    pub fail_on_empty: bool,
}

/// Logging options
#[derive(Args, Debug)]
pub struct LoggingOptions {
    /// ログを詳細にする (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "ログ")]
    pub verbose: u8,

    /// エラー以外のログを抑制する
    #[arg(short, long, conflicts_with = "verbose", help_heading = "ログ")]
    pub quiet: bool,
}
