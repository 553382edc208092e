//! アダプター（外界の I/O を trait で抽象化）
//!
//! usecase はポートの trait 経由でのみファイル・環境変数・コンソール・ログに触れる。
//! 実装は標準実装（Std*）やテスト用の実装を注入する。

pub mod console;
pub mod file_json_log;
pub mod std_env_resolver;
pub mod std_fs;
pub mod stderr_log;

pub use console::{BufferConsole, StdConsole};
pub use file_json_log::{build_logger, FileJsonLog, NoopLog, TeeLog};
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use stderr_log::StderrLog;
