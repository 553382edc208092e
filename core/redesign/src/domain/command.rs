//! redesign コマンドの enum

/// redesign の実行モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedesignCommand {
    /// ヘルプ表示
    Help,
    /// マニフェストのファイルを読み込み、1 回だけ生成 API に送る
    Run,
}
