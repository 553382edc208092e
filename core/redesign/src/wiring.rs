//! 配線: 標準アダプタで App を組み立てる

use std::sync::Arc;

use common::adapter::{build_logger, StdConsole, StdEnvResolver, StdFileSystem};
use common::error::Error;
use common::llm::StdTextGeneratorFactory;
use common::ports::outbound::{Console, EnvResolver, FileSystem, Log, TextGeneratorFactory};
use common::settings::{load_settings, Settings};

use crate::usecase::redesign::RedesignUseCase;

/// main / Runner が使う配線済みの依存一式
pub struct App {
    pub settings: Settings,
    pub console: Arc<dyn Console>,
    pub logger: Arc<dyn Log>,
    pub redesign_use_case: RedesignUseCase,
}

impl App {
    pub fn new(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        env: Arc<dyn EnvResolver>,
        console: Arc<dyn Console>,
        logger: Arc<dyn Log>,
        generators: Arc<dyn TextGeneratorFactory>,
    ) -> Self {
        let redesign_use_case = RedesignUseCase::new(
            fs,
            env,
            Arc::clone(&console),
            Arc::clone(&logger),
            generators,
            settings.clone(),
        );
        Self {
            settings,
            console,
            logger,
            redesign_use_case,
        }
    }
}

/// 配線: 設定を読み込み、標準アダプタで App を組み立てる
pub fn wire_redesign(verbose: bool) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let settings = load_settings(fs.as_ref(), env.as_ref())?;
    let logger = build_logger(Arc::clone(&fs), settings.log_file.as_deref(), verbose);
    Ok(App::new(
        settings,
        fs,
        env,
        Arc::new(StdConsole),
        logger,
        Arc::new(StdTextGeneratorFactory),
    ))
}
