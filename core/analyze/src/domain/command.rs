//! analyze コマンドの enum（Command Pattern）

use crate::domain::AnalyzeRequest;

/// analyze の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeCommand {
    /// ヘルプ表示
    Help,
    /// モードとプリセット指示文の一覧
    ListModes,
    /// 1 ファイルを生成 API に送る
    Analyze(AnalyzeRequest),
}
