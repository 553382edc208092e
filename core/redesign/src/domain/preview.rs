//! コンソール用プレビュー（先頭 N 文字 + 続き記号）
//!
//! 保存される成果物は常に全文。プレビューは表示専用。

/// プレビューの最大文字数
pub const PREVIEW_LIMIT: usize = 2000;
/// 切り詰めたときに付ける続き記号
pub const CONTINUATION_MARKER: &str = "...";

/// `limit` 文字（Unicode スカラー値）を超えるときだけ切り詰めて続き記号を付ける
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}{}", &text[..idx], CONTINUATION_MARKER),
        None => text.to_string(),
    }
}
