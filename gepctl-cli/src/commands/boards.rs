//! Boards listing command implementation.

use console::style;
use gepctl::{Board, PathLayout};

/// List the supported board variants.
///
/// With `--json` a machine-readable array goes to stdout; otherwise a
/// human-readable list goes to stderr.
pub(crate) fn cmd_boards(json: bool) {
    if json {
        let boards: Vec<serde_json::Value> = Board::ALL
            .iter()
            .map(|board| {
                let layout = PathLayout::for_board(*board);
                serde_json::json!({
                    "name": board.name(),
                    "fqbn": board.fqbn(),
                    "build_dir": layout.build_dir,
                    "output_dir": layout.output_dir,
                    "extra_build_flag": board.extra_build_flag(),
                    "default": *board == Board::default(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&boards).unwrap_or_default()
        );
        return;
    }

    eprintln!("{}", style("Supported boards:").bold().underlined());
    for board in Board::ALL {
        let marker = if board == Board::default() {
            " (default)"
        } else {
            ""
        };
        eprintln!(
            "  {} {}{} - {}",
            style("•").green(),
            style(board.name()).cyan(),
            marker,
            board.fqbn()
        );
    }
}
