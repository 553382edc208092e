//! CLI 層: コマンドライン解析と Config → AnalyzeCommand の変換

pub mod args;

pub use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
