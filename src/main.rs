//! Plagscan - lexical plagiarism and similarity scanner
//!
//! Scores a document against a directory of reference documents and
//! reports the closest references and matching paragraphs.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use cli::{Cli, OutputFormat};
use plagscan_core::error::ScanError;
use plagscan_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e, cli.format, cli.quiet);
            exit_status(&e)
        }
    }
}

/// Argument errors raised before `Cli` exists.
///
/// Help and version go through clap as usual. A bad argument in a run that
/// asked for `--format json` is reported as a `usage_error` envelope so
/// scripts always get JSON on stderr.
fn parse_failure(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if informational || requested_format() != OutputFormat::Json {
        err.exit();
    }

    let error = ScanError::UsageError(err.to_string().trim_end().to_string());
    report(&error, OutputFormat::Json, false);
    exit_status(&error)
}

/// Last parseable `--format` value on the raw command line
fn requested_format() -> OutputFormat {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut format = OutputFormat::default();

    for (i, arg) in args.iter().enumerate() {
        let value = match arg.strip_prefix("--format=") {
            Some(value) => Some(value),
            None if arg == "--format" => args.get(i + 1).map(String::as_str),
            None => None,
        };
        if let Some(parsed) = value.and_then(|v| v.parse().ok()) {
            format = parsed;
        }
    }

    format
}

fn report(error: &ScanError, format: OutputFormat, quiet: bool) {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
}

fn exit_status(error: &ScanError) -> ExitCode {
    ExitCode::from(error.exit_code() as u8)
}
