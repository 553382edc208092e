//! コンソール出力 Outbound ポート
//!
//! ステータス行・回答本文・警告の表示先。usecase は println! を直接使わない。

/// コンソール（Outbound ポート）
pub trait Console: Send + Sync {
    /// 標準出力に 1 行
    fn out(&self, line: &str);
    /// 標準エラーに 1 行
    fn err(&self, line: &str);
}
