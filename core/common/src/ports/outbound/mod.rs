//! Outbound ポート: アプリが外界（FS・環境変数・コンソール・ログ・生成 API）を使うための trait

pub mod console;
pub mod env_resolver;
pub mod fs;
pub mod log;
pub mod text_generator;

pub use console::Console;
pub use env_resolver::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use text_generator::{TextGenerator, TextGeneratorFactory};
