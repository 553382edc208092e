//! 共有設定（config.json + 環境変数）
//!
//! 認証情報・プロバイダ・ロケール・redesign のファイル一覧を 1 か所で解決する。
//! 両ツールはこのモジュールにだけ依存し、互いには依存しない。

use crate::domain::{ApiKey, ModelName};
use crate::error::Error;
use crate::llm::ProviderType;
use crate::msg::{Locale, Messages};
use crate::ports::outbound::{EnvResolver, FileSystem};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 設定ホームを上書きする環境変数
pub const ENV_HOME: &str = "GEMTOOLS_HOME";
/// API キーを上書きする環境変数
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
/// ロケールを上書きする環境変数
pub const ENV_LANG: &str = "GEMTOOLS_LANG";
/// JSONL ログの出力先を上書きする環境変数
pub const ENV_LOG: &str = "GEMTOOLS_LOG";

/// 設定ホーム直下の設定ファイル名
pub const SETTINGS_FILE_NAME: &str = "config.json";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// redesign が読むファイル（ベースディレクトリからの相対パス）
pub const DEFAULT_UI_FILES: [&str; 7] = [
    "../lib/theme/design_tokens.dart",
    "../lib/theme/theme.dart",
    "../lib/widgets/module_panel.dart",
    "../lib/widgets/property_panel.dart",
    "../lib/widgets/builder_canvas.dart",
    "../lib/widgets/block_widgets/block_wrapper.dart",
    "../lib/features/builder/builder_screen.dart",
];
pub const DEFAULT_REDESIGN_OUTPUT: &str = "stem_redesign_output.md";

/// redesign の入力一覧と出力先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedesignManifest {
    /// 相対パスの基準。None なら実行ファイルのディレクトリ
    pub base_dir: Option<PathBuf>,
    /// 読み込むファイル（この順で連結する）
    pub files: Vec<String>,
    /// 出力ファイル名（base_dir 直下）
    pub output: String,
    /// 組み込みテンプレートの代わりに使う指示文ファイル
    pub template_file: Option<PathBuf>,
}

impl Default for RedesignManifest {
    fn default() -> Self {
        Self {
            base_dir: None,
            files: DEFAULT_UI_FILES.iter().map(|s| s.to_string()).collect(),
            output: DEFAULT_REDESIGN_OUTPUT.to_string(),
            template_file: None,
        }
    }
}

/// 解決済みの設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: ApiKey,
    pub provider: ProviderType,
    pub model: ModelName,
    pub base_url: Option<String>,
    pub locale: Locale,
    /// JSONL ログの出力先（None ならファイルに書かない）
    pub log_file: Option<PathBuf>,
    pub redesign: RedesignManifest,
    /// 設定ファイルの場所（存在しなくても、編集すべき場所として案内に使う）
    pub settings_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: ApiKey::default(),
            provider: ProviderType::default(),
            model: ModelName::new(DEFAULT_MODEL),
            base_url: None,
            locale: Locale::default(),
            log_file: None,
            redesign: RedesignManifest::default(),
            settings_path: PathBuf::from(SETTINGS_FILE_NAME),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SettingsRaw {
    api_key: Option<String>,
    provider: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    locale: Option<String>,
    log_file: Option<PathBuf>,
    redesign: Option<RedesignRaw>,
}

#[derive(Debug, Default, Deserialize)]
struct RedesignRaw {
    base_dir: Option<PathBuf>,
    files: Option<Vec<String>>,
    output: Option<String>,
    template_file: Option<PathBuf>,
}

impl Settings {
    /// JSON 文字列からパース（未指定の項目はデフォルト）
    pub fn parse(json: &str, settings_path: impl Into<PathBuf>) -> Result<Self, Error> {
        let settings_path = settings_path.into();
        let raw: SettingsRaw = serde_json::from_str(json)
            .map_err(|e| Error::json(format!("{}: {}", settings_path.display(), e)))?;

        let mut s = Settings {
            settings_path,
            ..Settings::default()
        };
        if let Some(key) = raw.api_key {
            s.api_key = ApiKey::new(key);
        }
        if let Some(p) = raw.provider {
            s.provider = ProviderType::parse(&p).ok_or_else(|| {
                Error::config(format!(
                    "{}: unknown provider '{}'. Available: gemini, echo",
                    s.settings_path.display(),
                    p
                ))
            })?;
        }
        if let Some(m) = raw.model.filter(|m| !m.trim().is_empty()) {
            s.model = ModelName::new(m);
        }
        s.base_url = raw.base_url.filter(|u| !u.trim().is_empty());
        if let Some(l) = raw.locale {
            s.locale = Locale::parse(&l);
        }
        s.log_file = raw.log_file;
        if let Some(r) = raw.redesign {
            if let Some(files) = r.files {
                s.redesign.files = files;
            }
            if let Some(output) = r.output {
                if output.trim().is_empty() {
                    return Err(Error::config(format!(
                        "{}: redesign.output must not be empty",
                        s.settings_path.display()
                    )));
                }
                s.redesign.output = output;
            }
            s.redesign.base_dir = r.base_dir;
            s.redesign.template_file = r.template_file;
        }
        Ok(s)
    }

    /// 環境変数による上書き（API キー・ロケール・ログ出力先）
    pub fn apply_env(&mut self, env: &dyn EnvResolver) {
        if let Some(key) = env.var(ENV_API_KEY) {
            self.api_key = ApiKey::new(key);
        }
        if let Some(lang) = env.var(ENV_LANG) {
            self.locale = Locale::parse(&lang);
        }
        if let Some(log) = env.var(ENV_LOG) {
            self.log_file = Some(PathBuf::from(log));
        }
    }

    pub fn messages(&self) -> Messages {
        Messages::new(self.locale)
    }

    /// ネットワーク呼び出しに使える API キーを返す。
    /// プレースホルダのままなら設定場所を案内する Config エラー。
    pub fn require_api_key(&self) -> Result<&ApiKey, Error> {
        if self.api_key.is_unset() {
            return Err(Error::config(
                self.messages()
                    .credential_unset(&self.settings_path, ENV_API_KEY),
            ));
        }
        Ok(&self.api_key)
    }

    /// 生成前の認証情報チェック（認証不要のプロバイダでは常に Ok）
    pub fn check_credential(&self) -> Result<(), Error> {
        if self.provider.requires_api_key() {
            self.require_api_key()?;
        }
        Ok(())
    }
}

/// 設定ファイルの場所（<home>/config.json）
pub fn settings_path(env: &dyn EnvResolver) -> Result<PathBuf, Error> {
    Ok(env.resolve_home_dir()?.join(SETTINGS_FILE_NAME))
}

/// config.json を読み込み、環境変数で上書きした設定を返す。ファイルが無ければデフォルト。
pub fn load_settings(fs: &dyn FileSystem, env: &dyn EnvResolver) -> Result<Settings, Error> {
    let path = settings_path(env)?;
    let mut settings = read_settings_file(fs, &path)?;
    settings.apply_env(env);
    Ok(settings)
}

fn read_settings_file(fs: &dyn FileSystem, path: &Path) -> Result<Settings, Error> {
    if !fs.exists(path) {
        return Ok(Settings {
            settings_path: path.to_path_buf(),
            ..Settings::default()
        });
    }
    let contents = fs.read_to_string(path)?;
    Settings::parse(&contents, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StdFileSystem;
    use crate::domain::HomeDir;
    use std::collections::HashMap;

    struct MapEnv {
        home: PathBuf,
        vars: HashMap<String, String>,
    }

    impl MapEnv {
        fn new(home: &Path) -> Self {
            Self {
                home: home.to_path_buf(),
                vars: HashMap::new(),
            }
        }

        fn with(mut self, k: &str, v: &str) -> Self {
            self.vars.insert(k.to_string(), v.to_string());
            self
        }
    }

    impl EnvResolver for MapEnv {
        fn var(&self, key: &str) -> Option<String> {
            self.vars.get(key).cloned().filter(|v| !v.is_empty())
        }
        fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
            Ok(HomeDir::new(self.home.clone()))
        }
        fn exe_dir(&self) -> Result<PathBuf, Error> {
            Ok(self.home.clone())
        }
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let s = Settings::parse("{}", "/x/config.json").unwrap();
        assert!(s.api_key.is_unset());
        assert_eq!(s.provider, ProviderType::Gemini);
        assert_eq!(&*s.model, DEFAULT_MODEL);
        assert_eq!(s.locale, Locale::En);
        assert_eq!(s.redesign.files.len(), 7);
        assert_eq!(s.redesign.output, DEFAULT_REDESIGN_OUTPUT);
        assert_eq!(s.settings_path, PathBuf::from("/x/config.json"));
    }

    #[test]
    fn test_parse_full() {
        let json = r#"{
            "api_key": "AIzaTest",
            "provider": "echo",
            "model": "gemini-1.5-pro",
            "locale": "ja",
            "log_file": "/tmp/gemtools.jsonl",
            "redesign": {
                "base_dir": "/work/tools",
                "files": ["a.dart", "b.dart"],
                "output": "out.md",
                "template_file": "prompt.md"
            }
        }"#;
        let s = Settings::parse(json, "config.json").unwrap();
        assert!(!s.api_key.is_unset());
        assert_eq!(s.provider, ProviderType::Echo);
        assert_eq!(&*s.model, "gemini-1.5-pro");
        assert_eq!(s.locale, Locale::Ja);
        assert_eq!(s.log_file, Some(PathBuf::from("/tmp/gemtools.jsonl")));
        assert_eq!(s.redesign.base_dir, Some(PathBuf::from("/work/tools")));
        assert_eq!(s.redesign.files, vec!["a.dart".to_string(), "b.dart".to_string()]);
        assert_eq!(s.redesign.output, "out.md");
        assert_eq!(s.redesign.template_file, Some(PathBuf::from("prompt.md")));
    }

    #[test]
    fn test_parse_broken_json_names_path() {
        let err = Settings::parse("{ nope", "/cfg/config.json").unwrap_err();
        assert_eq!(err.exit_code(), 65);
        assert!(err.to_string().contains("/cfg/config.json"));
    }

    #[test]
    fn test_parse_unknown_provider() {
        let err = Settings::parse(r#"{"provider":"gpt"}"#, "config.json").unwrap_err();
        assert_eq!(err.exit_code(), 78);
        assert!(err.to_string().contains("unknown provider 'gpt'"));
    }

    #[test]
    fn test_require_api_key_sentinel() {
        let s = Settings::parse(r#"{"api_key":"PUT_YOUR_API_KEY_HERE"}"#, "/cfg/config.json").unwrap();
        let err = s.require_api_key().unwrap_err();
        assert_eq!(err.exit_code(), 78);
        assert!(err.to_string().contains("/cfg/config.json"));
        assert!(err.to_string().contains(ENV_API_KEY));
    }

    #[test]
    fn test_check_credential_skipped_for_echo() {
        let s = Settings::parse(r#"{"provider":"echo"}"#, "config.json").unwrap();
        assert!(s.check_credential().is_ok());
        let s = Settings::parse("{}", "config.json").unwrap();
        assert!(s.check_credential().is_err());
    }

    #[test]
    fn test_load_settings_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let env = MapEnv::new(dir.path());
        let s = load_settings(&StdFileSystem, &env).unwrap();
        assert!(s.api_key.is_unset());
        assert_eq!(s.settings_path, dir.path().join(SETTINGS_FILE_NAME));
    }

    #[test]
    fn test_load_settings_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE_NAME),
            r#"{"api_key":"from-file","locale":"en"}"#,
        )
        .unwrap();
        let env = MapEnv::new(dir.path())
            .with(ENV_API_KEY, "from-env")
            .with(ENV_LANG, "ja_JP.UTF-8")
            .with(ENV_LOG, "/tmp/x.jsonl");
        let s = load_settings(&StdFileSystem, &env).unwrap();
        assert_eq!(s.api_key.as_str(), "from-env");
        assert_eq!(s.locale, Locale::Ja);
        assert_eq!(s.log_file, Some(PathBuf::from("/tmp/x.jsonl")));
    }

    #[test]
    fn test_load_settings_file_key_when_env_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE_NAME), r#"{"api_key":"from-file"}"#).unwrap();
        let env = MapEnv::new(dir.path()).with(ENV_API_KEY, "");
        let s = load_settings(&StdFileSystem, &env).unwrap();
        assert_eq!(s.api_key.as_str(), "from-file");
    }
}
