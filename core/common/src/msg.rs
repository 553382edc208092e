//! ロケール別コンソールメッセージ
//!
//! 両ツールのコンソール出力はすべてここを経由する（英語・日本語）。

use std::path::Path;

/// 表示ロケール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// `ja` / `ja_JP.UTF-8` / `ja-JP` などを受け付ける。未知のものは英語。
    pub fn parse(s: &str) -> Self {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "ja" || lower.starts_with("ja_") || lower.starts_with("ja-") || lower.starts_with("ja.") {
            Self::Ja
        } else {
            Self::En
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }
}

/// 区切り線の幅
pub const RULE_WIDTH: usize = 50;

/// `=` の区切り線
pub fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// `-` の区切り線
pub fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// ロケールに応じたメッセージ表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn file_not_found(&self, path: &Path) -> String {
        match self.locale {
            Locale::En => format!("Error: File not found - {}", path.display()),
            Locale::Ja => format!("エラー: ファイルが見つかりません - {}", path.display()),
        }
    }

    /// 認証情報が未設定のときの対処方法
    pub fn credential_unset(&self, settings_path: &Path, env_var: &str) -> String {
        match self.locale {
            Locale::En => format!(
                "Error: Please set your Gemini API key\nFile location: {}\nSet \"api_key\" there, or export {}=<your key>",
                settings_path.display(),
                env_var
            ),
            Locale::Ja => format!(
                "エラー: Gemini API キーを設定してください\n設定ファイル: {}\n\"api_key\" を設定するか、{}=<キー> を export してください",
                settings_path.display(),
                env_var
            ),
        }
    }

    pub fn read_file(&self, path: &Path, chars: usize) -> String {
        match self.locale {
            Locale::En => format!("Read file: {} ({} chars)", path.display(), chars),
            Locale::Ja => format!("ファイル読み込み: {} ({} 文字)", path.display(), chars),
        }
    }

    pub fn calling_api(&self, mode: &str) -> String {
        match self.locale {
            Locale::En => format!("Calling Gemini API (mode: {})...", mode),
            Locale::Ja => format!("Gemini API を呼び出し中 (モード: {})...", mode),
        }
    }

    pub fn response_title(&self) -> &'static str {
        match self.locale {
            Locale::En => "Gemini response:",
            Locale::Ja => "Gemini の回答:",
        }
    }

    pub fn result_saved(&self, path: &Path) -> String {
        match self.locale {
            Locale::En => format!("Result saved to: {}", path.display()),
            Locale::Ja => format!("結果を保存しました: {}", path.display()),
        }
    }

    pub fn redesign_title(&self) -> &'static str {
        match self.locale {
            Locale::En => "STEM-style UI redesign tool",
            Locale::Ja => "STEM スタイル UI リデザインツール",
        }
    }

    pub fn loading_files(&self) -> &'static str {
        match self.locale {
            Locale::En => "Loading UI files...",
            Locale::Ja => "UI ファイルを読み込み中...",
        }
    }

    pub fn file_loaded(&self, rel: &str) -> String {
        match self.locale {
            Locale::En => format!("✓ Loaded: {}", rel),
            Locale::Ja => format!("✓ 読み込み: {}", rel),
        }
    }

    pub fn file_skipped(&self, rel: &str) -> String {
        match self.locale {
            Locale::En => format!("✗ File not found: {}", rel),
            Locale::Ja => format!("✗ ファイルが見つかりません: {}", rel),
        }
    }

    /// 存在するが読めない（権限・UTF-8 でない等）ファイル
    pub fn file_unreadable(&self, rel: &str) -> String {
        match self.locale {
            Locale::En => format!("✗ Cannot read file: {}", rel),
            Locale::Ja => format!("✗ ファイルを読み込めません: {}", rel),
        }
    }

    pub fn calling_api_long(&self) -> &'static str {
        match self.locale {
            Locale::En => "Calling Gemini API (this may take some time)...",
            Locale::Ja => "Gemini API を呼び出し中（時間がかかる場合があります）...",
        }
    }

    pub fn design_saved(&self, path: &Path) -> String {
        match self.locale {
            Locale::En => format!("✓ Design output saved to: {}", path.display()),
            Locale::Ja => format!("✓ デザイン出力を保存しました: {}", path.display()),
        }
    }

    pub fn preview_title(&self) -> &'static str {
        match self.locale {
            Locale::En => "Gemini output preview:",
            Locale::Ja => "Gemini 出力プレビュー:",
        }
    }

    pub fn full_output_in(&self, path: &Path) -> String {
        match self.locale {
            Locale::En => format!("Full output is in: {}", path.display()),
            Locale::Ja => format!("全文はこちら: {}", path.display()),
        }
    }
}
