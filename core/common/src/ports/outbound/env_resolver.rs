//! 環境変数解決 Outbound ポート
//!
//! usecase・設定読み込みはこの trait 経由でのみ環境変数と実行ファイルの位置にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 環境変数を取得する（未設定・空文字は None）
    fn var(&self, key: &str) -> Option<String>;

    /// 設定ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. GEMTOOLS_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/gemtools（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/gemtools
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// 実行中のバイナリが置かれたディレクトリ
    fn exe_dir(&self) -> Result<PathBuf, Error>;
}
