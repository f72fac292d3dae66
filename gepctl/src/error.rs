//! Error types for gepctl.

use std::io;
use thiserror::Error;

/// Result type for gepctl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for gepctl operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (process spawning, directory removal).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The external toolchain binary could not be found on PATH.
    #[error("toolchain '{program}' not found on PATH")]
    ToolchainNotFound {
        /// Name of the missing binary.
        program: String,
    },

    /// An unrecognized board name (from config files or user input).
    #[error("unknown board '{0}' (expected 'nano' or 'mega')")]
    UnknownBoard(String),
}
