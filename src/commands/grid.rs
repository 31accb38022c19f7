//! `arbor grid`: search a rectangular grid with walls

use arbor_core::error::Result;
use arbor_core::grid::{grid_graph, OpenGrid};

use super::dispatch::{Command, CommandContext};
use super::graph::{print_report, run_algorithm};
use crate::cli::GridArgs;

impl GridArgs {
    fn build_grid(&self, ctx: &CommandContext) -> OpenGrid {
        let weight = self.weight.unwrap_or(ctx.config.grid.default_weight);
        self.walls.iter().fold(
            OpenGrid::new(self.width, self.height).with_default_weight(weight),
            |grid, &(cell, side)| grid.with_wall(cell, side),
        )
    }
}

impl Command for GridArgs {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let mut graph = grid_graph(&self.build_grid(ctx))?;
        let report = run_algorithm(&mut graph, self.algorithm, self.from, self.to)?;
        print_report(ctx, "grid", &report)
    }
}
