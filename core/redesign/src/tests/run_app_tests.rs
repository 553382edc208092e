use crate::cli::Config;
use crate::ports::inbound::UseCaseRunner;
use crate::wiring::App;
use common::adapter::{BufferConsole, NoopLog, StdEnvResolver, StdFileSystem};
use common::domain::ApiKey;
use super::stub_generator::StubGeneratorFactory;
use common::ports::outbound::Console;
use common::settings::{Settings, DEFAULT_REDESIGN_OUTPUT};
use std::path::Path;
use std::sync::Arc;

/// テスト用アダプタで App を組み立て、Runner で run する
fn run_app(
    config: Config,
    key: &str,
    base: &Path,
    gens: &Arc<StubGeneratorFactory>,
) -> (Result<i32, common::error::Error>, Arc<BufferConsole>) {
    let console = Arc::new(BufferConsole::new());
    let console_port: Arc<dyn Console> = console.clone();
    let mut settings = Settings {
        api_key: ApiKey::new(key),
        ..Settings::default()
    };
    settings.redesign.base_dir = Some(base.to_path_buf());
    let app = App::new(
        settings,
        Arc::new(StdFileSystem),
        Arc::new(StdEnvResolver),
        console_port,
        Arc::new(NoopLog),
        gens.clone(),
    );
    let runner = crate::Runner { app };
    (runner.run(config), console)
}

#[test]
fn test_run_app_with_help() {
    let dir = tempfile::tempdir().unwrap();
    let gens = Arc::new(StubGeneratorFactory::replying("never"));
    let config = Config {
        help: true,
        ..Default::default()
    };
    let (result, console) = run_app(config, "", dir.path(), &gens);
    assert_eq!(result.unwrap(), 0);
    assert!(console.stdout().contains("Usage: redesign"));
    assert!(console.stdout().contains("default 30 second timeout"));
    assert_eq!(gens.calls(), 0);
}

#[test]
fn test_run_app_redesign() {
    let dir = tempfile::tempdir().unwrap();
    let gens = Arc::new(StubGeneratorFactory::replying("Redesigned."));
    let (result, console) = run_app(Config::default(), "real-key", dir.path(), &gens);
    assert_eq!(result.unwrap(), 0);
    assert_eq!(gens.calls(), 1);
    assert!(dir.path().join(DEFAULT_REDESIGN_OUTPUT).is_file());
    assert!(console.stdout().contains("Redesigned."));
}

#[test]
fn test_run_app_unset_key_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let gens = Arc::new(StubGeneratorFactory::replying("never"));
    let (result, _console) = run_app(Config::default(), "PUT_YOUR_API_KEY_HERE", dir.path(), &gens);
    assert_eq!(result.unwrap_err().exit_code(), 78);
    assert_eq!(gens.created(), 0);
    assert!(!dir.path().join(DEFAULT_REDESIGN_OUTPUT).exists());
}
