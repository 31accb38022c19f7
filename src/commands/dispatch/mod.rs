//! Command dispatch logic for arbor

mod command;

pub use command::{Command, CommandContext, NoCommand};

use crate::cli::Commands;
use arbor_core::error::Result;
use arbor_core::trace_time;

pub fn run(ctx: &CommandContext) -> Result<()> {
    let result = match &ctx.cli.command {
        None => NoCommand.execute(ctx),
        Some(Commands::Map(args)) => args.execute(ctx),
        Some(Commands::Graph(args)) => args.execute(ctx),
        Some(Commands::Grid(args)) => args.execute(ctx),
    };

    trace_time!(ctx.start, "dispatch", ok = result.is_ok());
    result
}
