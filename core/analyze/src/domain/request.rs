//! 1 回の解析要求とプロンプトの組み立て

use common::domain::{fenced_block, ModelName, Prompt, PromptMode, SourceLang};
use std::path::PathBuf;

/// 解析要求
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub file: PathBuf,
    pub mode: PromptMode,
    /// 空でなければ mode のプリセットより優先
    pub custom_prompt: Option<String>,
    /// 指定時は標準出力ではなくこのファイルに書く（上書き）
    pub output: Option<PathBuf>,
    /// 設定のモデルを上書き
    pub model: Option<ModelName>,
}

impl AnalyzeRequest {
    pub fn new(file: impl Into<PathBuf>, mode: PromptMode) -> Self {
        Self {
            file: file.into(),
            mode,
            custom_prompt: None,
            output: None,
            model: None,
        }
    }

    /// 実際に使う指示文
    pub fn instruction(&self) -> &str {
        resolve_instruction(self.mode, self.custom_prompt.as_deref())
    }

    /// ステータス表示用のモード名（カスタム指示文なら "custom"）
    pub fn mode_label(&self) -> &str {
        if has_custom(self.custom_prompt.as_deref()) {
            "custom"
        } else {
            self.mode.name()
        }
    }
}

fn has_custom(custom: Option<&str>) -> bool {
    custom.map(|c| !c.is_empty()).unwrap_or(false)
}

/// 空でないカスタム指示文があればそれを（空白だけでもそのまま）、なければモードのプリセットを返す
fn resolve_instruction(mode: PromptMode, custom: Option<&str>) -> &str {
    match custom {
        Some(c) if has_custom(Some(c)) => c,
        _ => mode.preset(),
    }
}

/// 指示文・空行・言語ラベル付きコードフェンスを連結する
pub fn build_prompt(instruction: &str, lang: &SourceLang, content: &str) -> Prompt {
    Prompt::new(format!("{}\n\n{}", instruction, fenced_block(lang, content)))
}
