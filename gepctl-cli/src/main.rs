//! gepctl CLI - build and upload tool for the GEP EEPROM programmer sketch.
//!
//! Wraps the `arduino-cli` toolchain: `gepctl build` compiles
//! `gep.ino` for the selected board into per-board directories, and
//! `gepctl upload` sends the resulting image to the device. The
//! toolchain's exit code is propagated unchanged.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use env_logger::Env;
use gepctl::{Board, BuildRequest, Operation};
use log::debug;
use std::env;
use std::path::PathBuf;

mod commands;
mod config;

use config::Config;

/// Serial device used when neither flag, env var, nor config names one.
const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// gepctl - build and upload the GEP EEPROM programmer sketch.
///
/// Environment variables:
///   GEPCTL_DEVICE  - Default serial device
///   GEPCTL_BOARD   - Default board variant (nano, mega)
#[derive(Parser)]
#[command(name = "gepctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Serial device used for upload.
    #[arg(short, long, global = true, env = "GEPCTL_DEVICE")]
    device: Option<String>,

    /// Target board variant.
    #[arg(short, long, global = true, env = "GEPCTL_BOARD")]
    board: Option<BoardArg>,

    /// Verbose output (forwarded to the toolchain as -v).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (suppress status output).
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print the toolchain command line instead of running it.
    #[arg(long, global = true)]
    dry_run: bool,

    /// Path to a configuration file.
    #[arg(long = "config", global = true, value_name = "PATH")]
    config_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Supported board variants.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum BoardArg {
    /// Arduino Nano (old bootloader ATmega328).
    Nano,
    /// Arduino Mega with the GEP shield (default).
    Mega,
}

impl From<BoardArg> for Board {
    fn from(board: BoardArg) -> Self {
        match board {
            BoardArg::Nano => Board::Nano,
            BoardArg::Mega => Board::Mega,
        }
    }
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Compile the sketch for the selected board.
    Build,

    /// Upload a previously built image to the device.
    Upload,

    /// Remove the per-board build and output directories.
    Clean {
        /// Clean the directories of every board variant.
        #[arg(long)]
        all: bool,
    },

    /// List the supported board variants.
    Boards {
        /// Output the board list as JSON to stdout.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell type for completions.
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.quiet {
        "warn"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // NO_COLOR and TTY detection
    if env::var("NO_COLOR").is_ok() || !console::Term::stderr().is_term() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    debug!("gepctl v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = if let Some(ref path) = cli.config_path {
        Config::load_from_path(path)
    } else {
        Config::load()
    };

    match cli.command {
        Commands::Build => run_toolchain(&cli, &config, Operation::Build)?,
        Commands::Upload => run_toolchain(&cli, &config, Operation::Upload)?,
        Commands::Clean { all } => {
            commands::clean::cmd_clean(&cli, resolve_board(&cli, &config)?, all)?;
        },
        Commands::Boards { json } => {
            commands::boards::cmd_boards(json);
        },
        Commands::Completions { shell } => {
            commands::completions::cmd_completions(shell);
        },
    }

    Ok(())
}

/// Build the request, run the toolchain, and propagate its exit code.
fn run_toolchain(cli: &Cli, config: &Config, operation: Operation) -> Result<()> {
    let request = BuildRequest {
        operation,
        board: resolve_board(cli, config)?,
        device: resolve_device(cli, config),
        verbose: cli.verbose,
    };

    let code = commands::invoke::cmd_invoke(cli, &request)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Board from CLI flag, config file default, or the built-in default.
fn resolve_board(cli: &Cli, config: &Config) -> Result<Board> {
    if let Some(board) = cli.board {
        return Ok(board.into());
    }
    if let Some(name) = &config.defaults.board {
        return name
            .parse()
            .with_context(|| format!("invalid board '{name}' in config file"));
    }
    Ok(Board::default())
}

/// Device from CLI flag, config file default, or the built-in default.
fn resolve_device(cli: &Cli, config: &Config) -> String {
    cli.device
        .clone()
        .or_else(|| config.defaults.device.clone())
        .unwrap_or_else(|| DEFAULT_DEVICE.to_string())
}
