//! プロンプトモード（名前 → 指示文のプリセット）
//!
//! モードは閉じた集合。未知のモード名はネットワーク呼び出し前に引数エラーとする。

use crate::error::Error;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromptMode {
    /// 性能と可読性の最適化（デフォルト）
    #[default]
    Optimize,
    Refactor,
    Explain,
    Bug,
    Review,
    Test,
}

impl PromptMode {
    /// 全モード（先頭がデフォルト）
    pub const ALL: [PromptMode; 6] = [
        PromptMode::Optimize,
        PromptMode::Refactor,
        PromptMode::Explain,
        PromptMode::Bug,
        PromptMode::Review,
        PromptMode::Test,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Optimize => "optimize",
            Self::Refactor => "refactor",
            Self::Explain => "explain",
            Self::Bug => "bug",
            Self::Review => "review",
            Self::Test => "test",
        }
    }

    /// モードに対応するプリセット指示文
    pub fn preset(self) -> &'static str {
        match self {
            Self::Optimize => "Please optimize the following Flutter/Dart code for performance and readability. Keep functionality unchanged and output the full optimized code:",
            Self::Refactor => "Please refactor the following code to improve structure and design patterns. Explain your refactoring approach:",
            Self::Explain => "Please explain the functionality and logic of the following code in detail, in English:",
            Self::Bug => "Please check the following code for potential bugs or issues and provide fixes:",
            Self::Review => "Please review the following code and give suggestions on performance, readability, and best practices:",
            Self::Test => "Please generate unit tests for the following code (use the Flutter test framework):",
        }
    }

    /// ヘルプ表示用の短い説明
    pub fn summary(self) -> &'static str {
        match self {
            Self::Optimize => "Optimize performance and readability (default)",
            Self::Refactor => "Refactor code structure",
            Self::Explain => "Explain code functionality",
            Self::Bug => "Find potential bugs",
            Self::Review => "Code review",
            Self::Test => "Generate test cases",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.name()).collect()
    }
}

impl FromStr for PromptMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| {
                Error::invalid_argument(format!(
                    "Unknown mode: {}. Available modes: {}",
                    s,
                    Self::names().join(", ")
                ))
            })
    }
}

impl std::fmt::Display for PromptMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
