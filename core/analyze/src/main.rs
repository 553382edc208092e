mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;


use std::process;
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::domain::PromptMode;
use common::error::Error;
use common::ports::outbound::{Console, LogLevel, LogRecord};
use domain::AnalyzeCommand;
use ports::inbound::UseCaseRunner;
use wiring::{wire_analyze, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config)?;
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", serde_json::json!(command_name))
                .field("locale", serde_json::json!(self.app.settings.locale.as_str())),
        );

        let result = match cmd {
            AnalyzeCommand::Help => {
                print_help(self.app.console.as_ref());
                Ok(0)
            }
            AnalyzeCommand::ListModes => {
                for mode in PromptMode::ALL {
                    self.app
                        .console
                        .out(&format!("{:<9} {}", mode.name(), mode.preset()));
                }
                Ok(0)
            }
            AnalyzeCommand::Analyze(req) => self.app.analyze_use_case.run(&req),
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

fn cmd_name_for_log(cmd: &AnalyzeCommand) -> &'static str {
    match cmd {
        AnalyzeCommand::Help => "help",
        AnalyzeCommand::ListModes => "list-modes",
        AnalyzeCommand::Analyze(_) => "analyze",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("analyze: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_analyze(config.verbose)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: analyze [options] <file>");
}

fn print_help(console: &dyn Console) {
    let lines = [
        "Usage: analyze [options] <file>",
        "Use the Gemini API to analyze and improve a source file.",
        "",
        "Options:",
        "  -h, --help                Show this help message",
        "  -m, --mode <mode>         Analysis mode (default: optimize)",
        "  -p, --prompt <text>       Custom prompt (overrides mode preset)",
        "  -o, --output <path>       Write output to a file (default: print to stdout)",
        "      --model <model>       Model name (e.g. gemini-2.0-flash, gemini-1.5-pro)",
        "      --list-modes          List modes with their preset prompts",
        "      --generate <shell>    Generate shell completion script (bash, zsh, fish, ...)",
        "  -v, --verbose             Emit structured logs to stderr",
        "",
        "Available modes (-m):",
    ];
    for line in lines {
        console.out(line);
    }
    for mode in PromptMode::ALL {
        console.out(&format!("  {:<9} - {}", mode.name(), mode.summary()));
    }
    let tail = [
        "",
        "The Gemini request uses the HTTP client's default 30 second timeout.",
        "",
        "Environment:",
        "  GEMINI_API_KEY   API key (overrides \"api_key\" in config.json)",
        "  GEMTOOLS_HOME    Settings directory (default: $XDG_CONFIG_HOME/gemtools or ~/.config/gemtools)",
        "  GEMTOOLS_LANG    Console language (en, ja)",
        "  GEMTOOLS_LOG     Append JSONL logs to this file",
        "",
        "Examples:",
        "  analyze lib/widgets/my_widget.dart              # default optimize",
        "  analyze lib/main.dart -m explain                # explain code",
        "  analyze lib/services/api.dart -m bug            # find bugs",
        "  analyze lib/models/user.dart -m review          # code review",
        "  analyze lib/utils.dart -p \"Add error handling\"  # custom prompt",
        "  analyze lib/widget.dart -o output.md            # output to file",
    ];
    for line in tail {
        console.out(line);
    }
}
