//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::cli::Config;
use common::error::Error;

/// redesign を実行する Inbound ポート
pub trait UseCaseRunner {
    fn run(&self, config: Config) -> Result<i32, Error>;
}
