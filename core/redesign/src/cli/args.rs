use crate::domain::RedesignCommand;
use clap::builder::ArgAction;
use common::error::Error;

/// redesign は動作を変える引数を取らない（入力一覧と出力先は設定で決まる）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: 構造化ログを stderr にも出す
    pub verbose: bool,
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("redesign")
        .about("Send a fixed set of UI files to Gemini and save a STEM-style redesign")
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
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
    }
}

/// コマンドラインを解析する
pub fn parse_args() -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

pub fn config_to_command(config: &Config) -> RedesignCommand {
    if config.help {
        RedesignCommand::Help
    } else {
        RedesignCommand::Run
    }
}
