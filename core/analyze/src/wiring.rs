//! 配線: 標準アダプタで App を組み立てる

use std::sync::Arc;

use common::adapter::{build_logger, StdConsole, StdEnvResolver, StdFileSystem};
use common::error::Error;
use common::llm::StdTextGeneratorFactory;
use common::ports::outbound::{Console, FileSystem, Log, TextGeneratorFactory};
use common::settings::{load_settings, Settings};

use crate::usecase::analyze::AnalyzeUseCase;

/// main / Runner が使う配線済みの依存一式
pub struct App {
    pub settings: Settings,
    pub console: Arc<dyn Console>,
    pub logger: Arc<dyn Log>,
    pub analyze_use_case: AnalyzeUseCase,
}

impl App {
    pub fn new(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        console: Arc<dyn Console>,
        logger: Arc<dyn Log>,
        generators: Arc<dyn TextGeneratorFactory>,
    ) -> Self {
        let analyze_use_case = AnalyzeUseCase::new(
            fs,
            Arc::clone(&console),
            Arc::clone(&logger),
            generators,
            settings.clone(),
        );
        Self {
            settings,
            console,
            logger,
            analyze_use_case,
        }
    }
}

/// 配線: 設定を読み込み、標準アダプタで App を組み立てる
pub fn wire_analyze(verbose: bool) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let settings = load_settings(fs.as_ref(), &StdEnvResolver)?;
    let logger = build_logger(Arc::clone(&fs), settings.log_file.as_deref(), verbose);
    Ok(App::new(
        settings,
        fs,
        Arc::new(StdConsole),
        logger,
        Arc::new(StdTextGeneratorFactory),
    ))
}
