mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use cli::{config_to_command, parse_args, Config};
use common::error::Error;
use common::ports::outbound::{Console, LogLevel, LogRecord};
use common::settings::DEFAULT_REDESIGN_OUTPUT;
use domain::RedesignCommand;
use ports::inbound::UseCaseRunner;
use wiring::{wire_redesign, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(&config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", serde_json::json!(command_name))
                .field("locale", serde_json::json!(self.app.settings.locale.as_str())),
        );

        let result = match cmd {
            RedesignCommand::Help => {
                print_help(self.app.console.as_ref());
                Ok(0)
            }
            RedesignCommand::Run => self.app.redesign_use_case.run().map(|report| {
                let _ = self.app.logger.log(
                    &LogRecord::new(LogLevel::Info, "redesign summary")
                        .layer("cli")
                        .kind("lifecycle")
                        .field("loaded", serde_json::json!(report.loaded.len()))
                        .field("skipped", serde_json::json!(report.skipped)),
                );
                0
            }),
        };

        let code = match &result {
            Ok(c) => *c,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", serde_json::json!(command_name))
                .field("exit_code", serde_json::json!(code)),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

fn cmd_name_for_log(cmd: &RedesignCommand) -> &'static str {
    match cmd {
        RedesignCommand::Help => "help",
        RedesignCommand::Run => "redesign",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("redesign: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = parse_args()?;
    let app = wire_redesign(config.verbose)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: redesign [-v]");
}

fn print_help(console: &dyn Console) {
    let lines = [
        "Usage: redesign [options]".to_string(),
        "Send the configured UI files to Gemini with a STEM redesign brief.".to_string(),
        String::new(),
        "Options:".to_string(),
        "  -h, --help       Show this help message".to_string(),
        "  -v, --verbose    Emit structured logs to stderr".to_string(),
        String::new(),
        "Files are read relative to the directory of this executable unless".to_string(),
        "\"redesign.base_dir\" is set in config.json. Missing files are skipped.".to_string(),
        format!(
            "The full response is written to {} (\"redesign.output\").",
            DEFAULT_REDESIGN_OUTPUT
        ),
        "The Gemini request uses the HTTP client's default 30 second timeout.".to_string(),
        String::new(),
        "Environment:".to_string(),
        "  GEMINI_API_KEY   API key (overrides \"api_key\" in config.json)".to_string(),
        "  GEMTOOLS_HOME    Settings directory (default: $XDG_CONFIG_HOME/gemtools or ~/.config/gemtools)".to_string(),
        "  GEMTOOLS_LANG    Console language (en, ja)".to_string(),
        "  GEMTOOLS_LOG     Append JSONL logs to this file".to_string(),
    ];
    for line in &lines {
        console.out(line);
    }
}
