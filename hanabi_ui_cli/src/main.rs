use std::{io, process::ExitCode};

use hanabi_core::{run_session, OutputFormat};
use log::error;

static USAGE: &str = "Usage: hanabi_ui_cli [--json]
Reads game commands from stdin, one per line, and prints a summary for every finished game.
Set RUST_LOG=debug to trace each turn on stderr.";

fn output_format(args: &[String]) -> Option<OutputFormat> {
    match args {
        [] => Some(OutputFormat::Text),
        [flag] if flag == "--json" => Some(OutputFormat::Json),
        _ => None,
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(format) = output_format(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_session(stdin.lock(), stdout.lock(), format) {
        error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
