//! CLI 層: コマンドライン解析

pub mod args;

pub use args::{config_to_command, parse_args, Config};
