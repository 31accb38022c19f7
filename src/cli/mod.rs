//! CLI argument parsing for arbor
//!
//! Global flags: --format, --config, --quiet, --verbose, --log-level, --log-json

pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use arbor_core::graph::Weight;
use arbor_core::grid::{Cell, Side};
pub use arbor_core::format::OutputFormat;
use parse::{
    parse_cell, parse_edge, parse_key_value, parse_output_format, parse_range, parse_wall,
    EdgeSpec,
};

/// Arbor - ordered maps and observable graph searches
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json or records [default: from config, else human]
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(long, global = true, env = "ARBOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. trace, arbor_core=debug)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply operations to an ordered map and print the result
    Map(MapArgs),

    /// Build a weighted graph and run a search over it
    Graph(GraphArgs),

    /// Build a walled grid graph and run a search over it
    Grid(GridArgs),
}

/// Map operations are applied in a fixed order: puts, removes, gets, range
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Insert or overwrite an entry
    #[arg(long = "put", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub puts: Vec<(i64, String)>,

    /// Remove a key
    #[arg(long = "remove", value_name = "KEY")]
    pub removes: Vec<i64>,

    /// Look up a key
    #[arg(long = "get", value_name = "KEY")]
    pub gets: Vec<i64>,

    /// Print the sub-map with keys in the inclusive range
    #[arg(long, value_name = "FROM..TO", value_parser = parse_range)]
    pub range: Option<(i64, i64)>,
}

/// Search algorithm to run
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Search algorithm
    #[arg(value_enum)]
    pub algorithm: Algorithm,

    /// Add a vertex (in order; order decides traversal ties)
    #[arg(long = "vertex", value_name = "NAME")]
    pub vertices: Vec<String>,

    /// Add a directed edge
    #[arg(long = "edge", value_name = "FROM:TO:WEIGHT", value_parser = parse_edge)]
    pub edges: Vec<EdgeSpec>,

    /// Start vertex
    #[arg(long)]
    pub from: String,

    /// End vertex
    #[arg(long)]
    pub to: String,
}

#[derive(Args, Debug)]
pub struct GridArgs {
    /// Search algorithm
    #[arg(value_enum)]
    pub algorithm: Algorithm,

    /// Number of columns
    #[arg(long)]
    pub width: usize,

    /// Number of rows
    #[arg(long)]
    pub height: usize,

    /// Weight of every open passage [default: from config, else 1]
    #[arg(long)]
    pub weight: Option<Weight>,

    /// Block the passage above or to the left of a cell
    #[arg(long = "wall", value_name = "X,Y:above|left", value_parser = parse_wall)]
    pub walls: Vec<(Cell, Side)>,

    /// Start cell
    #[arg(long, value_name = "X,Y", value_parser = parse_cell)]
    pub from: Cell,

    /// End cell
    #[arg(long, value_name = "X,Y", value_parser = parse_cell)]
    pub to: Cell,
}
