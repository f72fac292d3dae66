//! # gepctl
//!
//! Library behind the `gepctl` command-line tool: it drives the
//! `arduino-cli` toolchain to compile and upload the GEP EEPROM
//! programmer sketch (`gep.ino`) for the two supported board variants.
//!
//! The library does exactly one thing: turn a validated
//! [`BuildRequest`] into the external toolchain command line, run it,
//! and report the child's exit code unchanged. It does not parse the
//! sketch, manage toolchain installation, or talk to the board itself.
//!
//! ## Board variants
//!
//! - Nano — bare Arduino Nano (old-bootloader ATmega328)
//! - Mega — Arduino Mega with the GEP shield (`-DMEGA_SHIELD` build)
//!
//! Each variant builds into its own `build-<board>` / `output-<board>`
//! directory pair so the two targets never share intermediates.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gepctl::{Board, BuildRequest, Invocation, Operation};
//!
//! fn main() -> gepctl::Result<()> {
//!     let request = BuildRequest {
//!         operation: Operation::Build,
//!         board: Board::Mega,
//!         device: "/dev/ttyUSB0".to_string(),
//!         verbose: false,
//!     };
//!
//!     let exit_code = Invocation::from_request(&request).run()?;
//!     std::process::exit(exit_code);
//! }
//! ```

pub mod board;
pub mod error;
pub mod invocation;
pub mod layout;

// Re-exports for convenience
pub use {
    board::Board,
    error::{Error, Result},
    invocation::{BuildRequest, Invocation, Operation, SKETCH, TOOLCHAIN_BIN},
    layout::PathLayout,
};
