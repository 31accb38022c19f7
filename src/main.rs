//! Arbor - ordered maps and observable graph searches from the command line
//!
//! Applies map operations to a binary-search-tree map, and runs breadth-first,
//! depth-first or Dijkstra searches over weighted graphs and grids while
//! printing every progress notification.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use arbor_core::config::ArborConfig;
use arbor_core::error::{ArborError, ExitCode as ArborExitCode};
use arbor_core::logging;
use cli::{Cli, OutputFormat};
use commands::dispatch::CommandContext;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is global, but parsing can fail before it is read.
            // A JSON request still gets the structured error envelope.
            if argv_format_json {
                let arbor_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        ArborError::UsageError(err.to_string())
                    }
                    _ => ArborError::Other(err.to_string()),
                };

                return report_error(&arbor_error, OutputFormat::Json, false);
            }

            err.exit();
        }
    };

    let config = match ArborConfig::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_error(&e, cli.format.unwrap_or_default(), cli.quiet),
    };
    let format = cli.format.unwrap_or(config.output.format);

    // The config level only applies when neither flag asks for one
    let log_level = cli
        .log_level
        .as_deref()
        .or((!cli.verbose).then_some(config.logging.level.as_str()));
    if let Err(e) = logging::init_tracing(cli.verbose, log_level, cli.log_json || config.logging.json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let ctx = CommandContext::new(&cli, &config, format, start);
    match commands::dispatch::run(&ctx) {
        Ok(()) => ExitCode::from(ArborExitCode::Success as u8),
        Err(e) => report_error(&e, format, cli.quiet),
    }
}

fn report_error(error: &ArborError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }
    ExitCode::from(error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
