//! Clean command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use gepctl::{Board, PathLayout};

use crate::Cli;

/// Remove the build and output directories for one board, or for all
/// boards with `--all`.
pub(crate) fn cmd_clean(cli: &Cli, board: Board, all: bool) -> Result<()> {
    let boards: &[Board] = if all { &Board::ALL } else { &[board] };

    for board in boards {
        let layout = PathLayout::for_board(*board);
        layout
            .clean_in(Path::new("."))
            .with_context(|| format!("failed to clean build directories for {board}"))?;

        if !cli.quiet {
            eprintln!(
                "{} Cleaned {} and {}",
                style("🗑").red(),
                layout.build_dir.display(),
                layout.output_dir.display()
            );
        }
    }

    Ok(())
}
