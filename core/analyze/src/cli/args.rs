use crate::domain::{AnalyzeCommand, AnalyzeRequest};
use clap::builder::{ArgAction, PossibleValuesParser};
use clap::value_parser;
use clap_complete::Shell;
use common::domain::{ModelName, PromptMode};
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: 構造化ログを stderr にも出す
    pub verbose: bool,
    /// --list-modes: モードとプリセット指示文を表示
    pub list_modes: bool,
    pub file: Option<PathBuf>,
    pub mode: PromptMode,
    pub prompt: Option<String>,
    pub output: Option<PathBuf>,
    pub model: Option<ModelName>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            verbose: false,
            list_modes: false,
            file: None,
            mode: PromptMode::default(),
            prompt: None,
            output: None,
            model: None,
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("analyze")
        .about("Use the Gemini API to analyze and improve a source file")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit structured logs to stderr (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("mode")
                .short('m')
                .long("mode")
                .value_name("mode")
                .help("Analysis mode")
                .value_parser(PossibleValuesParser::new(PromptMode::names()))
                .default_value(PromptMode::default().name())
                .num_args(1),
        )
        .arg(
            clap::Arg::new("prompt")
                .short('p')
                .long("prompt")
                .value_name("text")
                .help("Custom prompt (overrides mode preset)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("path")
                .help("Write output to a file (default: print to stdout)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .long("model")
                .value_name("model")
                .help("Model name (e.g. gemini-2.0-flash, gemini-1.5-pro). Default: settings")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("list-modes")
                .long("list-modes")
                .help("List available modes with their preset prompts")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("file")
                .index(1)
                .value_name("file")
                .help("Path to the code file")
                .value_parser(value_parser!(PathBuf)),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Result<Config, Error> {
    let mode = match matches.get_one::<String>("mode") {
        Some(m) => m.parse::<PromptMode>()?,
        None => PromptMode::default(),
    };
    Ok(Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        list_modes: matches.get_flag("list-modes"),
        file: matches.get_one::<PathBuf>("file").cloned(),
        mode,
        prompt: matches.get_one::<String>("prompt").cloned(),
        output: matches.get_one::<PathBuf>("output").cloned(),
        model: matches
            .get_one::<String>("model")
            .map(|s| ModelName::new(s.clone())),
    })
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)?))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    matches_to_config(&matches)
}

/// Config を実行するコマンドに変換する。ファイル未指定は引数エラー。
pub fn config_to_command(config: Config) -> Result<AnalyzeCommand, Error> {
    if config.help {
        return Ok(AnalyzeCommand::Help);
    }
    if config.list_modes {
        return Ok(AnalyzeCommand::ListModes);
    }
    let file = config
        .file
        .ok_or_else(|| Error::invalid_argument("No file provided. Please provide the path to a code file."))?;
    Ok(AnalyzeCommand::Analyze(AnalyzeRequest {
        file,
        mode: config.mode,
        custom_prompt: config.prompt,
        output: config.output,
        model: config.model,
    }))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "analyze", &mut std::io::stdout());
}
