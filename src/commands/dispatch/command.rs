//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use arbor_core::config::ArborConfig;
use arbor_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a ArborConfig,
    /// Effective format: `--format`, else the config file, else human
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a ArborConfig, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("arbor {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Ordered maps and observable graph searches.");
        println!();
        println!("Run `arbor --help` for usage information.");
        Ok(())
    }
}
