//! 複数ファイルをラベル付きコードブロックとして連結する

use common::domain::{fenced_block, Prompt, SourceLang};
use std::path::Path;

/// 読み込めた 1 ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// マニフェストに書かれたままの相対パス（見出しに使う）
    pub rel_path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(rel_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            rel_path: rel_path.into(),
            content: content.into(),
        }
    }

    /// `### <path>` の見出しとコードフェンス
    pub fn render(&self) -> String {
        let lang = SourceLang::from_path(Path::new(&self.rel_path));
        format!("### {}\n{}\n", self.rel_path, fenced_block(&lang, &self.content))
    }
}

/// マニフェスト順に連結した本文
pub fn render_bundle(files: &[SourceFile]) -> String {
    files
        .iter()
        .map(SourceFile::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// テンプレートの直後にコード本文を付ける（ファイルが 0 件でもそのまま送る）
pub fn build_prompt(template: &str, files: &[SourceFile]) -> Prompt {
    Prompt::new(format!("{}{}", template, render_bundle(files)))
}
