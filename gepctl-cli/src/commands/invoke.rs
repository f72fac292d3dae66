//! Build and upload command implementations.

use anyhow::{Context, Result};
use console::style;
use gepctl::{BuildRequest, Invocation, Operation, SKETCH, TOOLCHAIN_BIN};

use crate::Cli;

/// Run the toolchain for a build or upload request.
///
/// Returns the toolchain's exit code; the caller is responsible for
/// propagating it as the process exit status. With `--dry-run` the
/// command line is printed to stdout instead and 0 is returned.
pub(crate) fn cmd_invoke(cli: &Cli, request: &BuildRequest) -> Result<i32> {
    let invocation = Invocation::from_request(request);

    if cli.dry_run {
        println!("{}", invocation.command_line());
        return Ok(0);
    }

    if !cli.quiet {
        match request.operation {
            Operation::Build => eprintln!(
                "{} Compiling {} for {} ({})",
                style("⚙").cyan(),
                SKETCH,
                request.board,
                request.board.fqbn()
            ),
            Operation::Upload => eprintln!(
                "{} Uploading {} image via {}",
                style("⬆").cyan(),
                request.board,
                request.device
            ),
        }
    }

    let code = invocation
        .run()
        .context("failed to run the Arduino toolchain")?;

    if !cli.quiet {
        if code == 0 {
            let done = match request.operation {
                Operation::Build => "Build complete",
                Operation::Upload => "Upload complete",
            };
            eprintln!("{} {}", style("✓").green(), done);
        } else {
            eprintln!(
                "{} {} exited with status {}",
                style("✗").red(),
                TOOLCHAIN_BIN,
                code
            );
        }
    }

    Ok(code)
}
