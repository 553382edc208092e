//! コードフェンスの言語ラベル（拡張子から推定）

use std::path::Path;

/// フェンスに付ける言語ラベル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLang(String);

impl SourceLang {
    /// 拡張子からラベルを決める。未知の拡張子はそのまま、拡張子なしは空。
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let label = match ext.as_str() {
            "rs" => "rust",
            "py" => "python",
            "ts" => "typescript",
            "js" | "mjs" | "cjs" => "javascript",
            "kt" | "kts" => "kotlin",
            "rb" => "ruby",
            "sh" | "bash" => "bash",
            "yml" => "yaml",
            "md" => "markdown",
            "h" => "c",
            "hpp" | "cc" | "cxx" => "cpp",
            "cs" => "csharp",
            other => other,
        };
        Self(label.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourceLang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// 内容をラベル付きのコードフェンスで囲む
pub fn fenced_block(lang: &SourceLang, content: &str) -> String {
    format!("```{}\n{}\n```", lang, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dart_label() {
        assert_eq!(SourceLang::from_path(Path::new("lib/main.dart")).as_str(), "dart");
    }

    #[test]
    fn test_mapped_labels() {
        assert_eq!(SourceLang::from_path(Path::new("src/lib.rs")).as_str(), "rust");
        assert_eq!(SourceLang::from_path(Path::new("App.tsx")).as_str(), "tsx");
        assert_eq!(SourceLang::from_path(Path::new("auth.js")).as_str(), "javascript");
        assert_eq!(SourceLang::from_path(Path::new("tool.PY")).as_str(), "python");
    }

    #[test]
    fn test_no_extension_is_empty() {
        assert_eq!(SourceLang::from_path(Path::new("Makefile")).as_str(), "");
    }

    #[test]
    fn test_fenced_block() {
        let lang = SourceLang::from_path(Path::new("hello.dart"));
        assert_eq!(fenced_block(&lang, "void main(){}"), "```dart\nvoid main(){}\n```");
    }
}
