//! 単一ファイル解析ユースケース
//!
//! 認証情報の確認 → ファイル読み込み → プロンプト組み立て → 生成 API 1 回 → 出力、の直線的な流れ。
//! 認証情報未設定・入力ファイル不在のときはネットワーク呼び出しの前に終了する。

use crate::domain::{build_prompt, AnalyzeRequest};
use common::domain::SourceLang;
use common::error::Error;
use common::msg::heavy_rule;
use common::ports::outbound::{Console, FileSystem, Log, LogLevel, LogRecord, TextGeneratorFactory};
use common::settings::Settings;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;

/// analyze のユースケース
pub struct AnalyzeUseCase {
    fs: Arc<dyn FileSystem>,
    console: Arc<dyn Console>,
    logger: Arc<dyn Log>,
    generators: Arc<dyn TextGeneratorFactory>,
    settings: Settings,
}

impl AnalyzeUseCase {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        console: Arc<dyn Console>,
        logger: Arc<dyn Log>,
        generators: Arc<dyn TextGeneratorFactory>,
        settings: Settings,
    ) -> Self {
        Self {
            fs,
            console,
            logger,
            generators,
            settings,
        }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.logger.log(&record.layer("usecase"));
    }

    /// 1 ファイルを解析し、応答を出力する。成功時は終了コード 0。
    pub fn run(&self, req: &AnalyzeRequest) -> Result<i32, Error> {
        let msgs = self.settings.messages();

        self.settings.check_credential()?;
        self.log(
            LogRecord::new(LogLevel::Debug, "credential ok")
                .kind("config")
                .field("provider", json!(self.settings.provider.as_str())),
        );

        let code = self.load_source(&req.file)?;
        self.console
            .out(&msgs.read_file(&req.file, code.chars().count()));

        let lang = SourceLang::from_path(&req.file);
        let prompt = build_prompt(req.instruction(), &lang, &code);

        let model = req.model.as_ref().unwrap_or(&self.settings.model);
        let generator = self.generators.create(
            self.settings.provider,
            model,
            &self.settings.api_key,
            self.settings.base_url.as_deref(),
        )?;
        self.console.out(&msgs.calling_api(req.mode_label()));
        self.log(
            LogRecord::new(LogLevel::Info, "calling remote")
                .kind("remote")
                .field("provider", json!(generator.name()))
                .field("model", json!(model.to_string()))
                .field("mode", json!(req.mode_label()))
                .field("prompt_chars", json!(prompt.chars().count())),
        );
        let response = generator.generate(&prompt)?;
        self.log(
            LogRecord::new(LogLevel::Info, "remote responded")
                .kind("remote")
                .field("response_chars", json!(response.chars().count())),
        );

        match &req.output {
            Some(path) => {
                self.fs.write(path, &response)?;
                self.log(
                    LogRecord::new(LogLevel::Info, "response written")
                        .kind("output")
                        .field("path", json!(path.display().to_string())),
                );
                self.console.out(&msgs.result_saved(path));
            }
            None => {
                self.console.out("");
                self.console.out(&heavy_rule());
                self.console.out(msgs.response_title());
                self.console.out(&heavy_rule());
                self.console.out("");
                self.console.out(&response);
            }
        }
        Ok(0)
    }

    /// 入力ファイルを UTF-8 で読み込む。通常ファイルでなければ InputNotFound。
    fn load_source(&self, path: &Path) -> Result<String, Error> {
        if !self.fs.is_file(path) {
            self.log(
                LogRecord::new(LogLevel::Error, "input file not found")
                    .kind("input")
                    .field("path", json!(path.display().to_string())),
            );
            return Err(Error::input_not_found(
                self.settings.messages().file_not_found(path),
            ));
        }
        let content = self.fs.read_to_string(path)?;
        self.log(
            LogRecord::new(LogLevel::Debug, "input file loaded")
                .kind("input")
                .field("path", json!(path.display().to_string()))
                .field("chars", json!(content.chars().count())),
        );
        Ok(content)
    }
}
