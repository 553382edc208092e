//! 複数ファイルのリデザイン依頼ユースケース
//!
//! 認証情報の確認 → マニフェストのファイル読み込み（無い・読めないものは警告して飛ばす）→
//! テンプレート + コード本文 → 生成 API 1 回 → 全文を出力ファイルへ、先頭だけコンソールへ。

use crate::domain::{build_prompt, preview, SourceFile, PREVIEW_LIMIT, STEM_REDESIGN_PROMPT};
use common::error::Error;
use common::msg::{heavy_rule, light_rule};
use common::ports::outbound::{
    Console, EnvResolver, FileSystem, Log, LogLevel, LogRecord, TextGeneratorFactory,
};
use common::settings::Settings;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 1 回の実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedesignReport {
    pub loaded: Vec<String>,
    pub skipped: Vec<String>,
    pub output_path: PathBuf,
}

/// redesign のユースケース
pub struct RedesignUseCase {
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn EnvResolver>,
    console: Arc<dyn Console>,
    logger: Arc<dyn Log>,
    generators: Arc<dyn TextGeneratorFactory>,
    settings: Settings,
}

impl RedesignUseCase {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        env: Arc<dyn EnvResolver>,
        console: Arc<dyn Console>,
        logger: Arc<dyn Log>,
        generators: Arc<dyn TextGeneratorFactory>,
        settings: Settings,
    ) -> Self {
        Self {
            fs,
            env,
            console,
            logger,
            generators,
            settings,
        }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.logger.log(&record.layer("usecase"));
    }

    pub fn run(&self) -> Result<RedesignReport, Error> {
        let msgs = self.settings.messages();
        let manifest = &self.settings.redesign;

        self.settings.check_credential()?;

        self.console.out(&heavy_rule());
        self.console.out(msgs.redesign_title());
        self.console.out(&heavy_rule());
        self.console.out("");

        let base_dir = self.base_dir()?;
        let template = self.load_template(&base_dir)?;

        self.console.out(msgs.loading_files());
        let mut files = Vec::new();
        let mut skipped = Vec::new();
        for rel in &manifest.files {
            let full = base_dir.join(rel);
            if self.fs.is_file(&full) {
                match self.fs.read_to_string(&full) {
                    Ok(content) => {
                        self.log(
                            LogRecord::new(LogLevel::Debug, "file loaded")
                                .kind("input")
                                .field("path", json!(rel))
                                .field("chars", json!(content.chars().count())),
                        );
                        self.console.out(&msgs.file_loaded(rel));
                        files.push(SourceFile::new(rel.clone(), content));
                    }
                    Err(e) => {
                        self.log(
                            LogRecord::new(LogLevel::Warn, "file unreadable")
                                .kind("input")
                                .field("path", json!(full.display().to_string()))
                                .field("error", json!(e.to_string())),
                        );
                        self.console.out(&msgs.file_unreadable(rel));
                        skipped.push(rel.clone());
                    }
                }
            } else {
                self.log(
                    LogRecord::new(LogLevel::Warn, "file skipped")
                        .kind("input")
                        .field("path", json!(full.display().to_string())),
                );
                self.console.out(&msgs.file_skipped(rel));
                skipped.push(rel.clone());
            }
        }
        self.console.out("");

        let prompt = build_prompt(&template, &files);

        let generator = self.generators.create(
            self.settings.provider,
            &self.settings.model,
            &self.settings.api_key,
            self.settings.base_url.as_deref(),
        )?;
        self.console.out(msgs.calling_api_long());
        self.log(
            LogRecord::new(LogLevel::Info, "calling remote")
                .kind("remote")
                .field("provider", json!(generator.name()))
                .field("model", json!(self.settings.model.to_string()))
                .field("files", json!(files.len()))
                .field("prompt_chars", json!(prompt.chars().count())),
        );
        let result = generator.generate(&prompt)?;

        let output_path = base_dir.join(&manifest.output);
        self.fs.write(&output_path, &result)?;
        self.log(
            LogRecord::new(LogLevel::Info, "design output written")
                .kind("output")
                .field("path", json!(output_path.display().to_string()))
                .field("response_chars", json!(result.chars().count())),
        );

        self.console.out("");
        self.console.out(&heavy_rule());
        self.console.out(&msgs.design_saved(&output_path));
        self.console.out(&heavy_rule());
        self.console.out("");
        self.console.out(msgs.preview_title());
        self.console.out(&light_rule());
        self.console.out(&preview(&result, PREVIEW_LIMIT));
        self.console.out("");
        self.console.out(&msgs.full_output_in(&output_path));

        Ok(RedesignReport {
            loaded: files.into_iter().map(|f| f.rel_path).collect(),
            skipped,
            output_path,
        })
    }

    /// 相対パスの基準（設定になければ実行ファイルのディレクトリ）
    fn base_dir(&self) -> Result<PathBuf, Error> {
        match &self.settings.redesign.base_dir {
            Some(dir) => Ok(dir.clone()),
            None => self.env.exe_dir(),
        }
    }

    /// template_file があればそれを読む（相対パスは base_dir 基準）
    fn load_template(&self, base_dir: &Path) -> Result<String, Error> {
        match &self.settings.redesign.template_file {
            Some(path) => {
                let full = base_dir.join(path);
                if !self.fs.is_file(&full) {
                    return Err(Error::config(format!(
                        "redesign.template_file not found: {}",
                        full.display()
                    )));
                }
                self.fs.read_to_string(&full)
            }
            None => Ok(STEM_REDESIGN_PROMPT.to_string()),
        }
    }
}
