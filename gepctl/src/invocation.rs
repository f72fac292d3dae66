//! Toolchain invocation construction and execution.
//!
//! The entire contract of gepctl lives here: translate a
//! [`BuildRequest`] into the exact `arduino-cli` argument vector, run
//! it with inherited standard streams, and hand the child's exit code
//! back unchanged. No output capture, no retries, no interpretation of
//! what the toolchain prints.

use std::io;
use std::process::Command;

use log::debug;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::layout::PathLayout;

/// Name of the external toolchain binary, expected on PATH.
pub const TOOLCHAIN_BIN: &str = "arduino-cli";

/// The fixed sketch file compiled and uploaded by this tool.
pub const SKETCH: &str = "gep.ino";

/// What to do with the sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Compile the sketch into `output-<board>/`.
    Build,
    /// Upload a previously built image from `output-<board>/`.
    Upload,
}

/// One validated user request, constructed once from the CLI surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// Build or upload.
    pub operation: Operation,
    /// Target board variant.
    pub board: Board,
    /// Serial device path used for upload.
    pub device: String,
    /// Forward the toolchain's global `-v` flag.
    pub verbose: bool,
}

/// A fully constructed toolchain command line, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: &'static str,
    args: Vec<String>,
}

impl Invocation {
    /// Construct the argument vector for a request.
    #[must_use]
    pub fn from_request(request: &BuildRequest) -> Self {
        let layout = PathLayout::for_board(request.board);
        let build_dir = layout.build_dir.to_string_lossy().into_owned();
        let output_dir = layout.output_dir.to_string_lossy().into_owned();

        let mut args: Vec<String> = Vec::new();

        // Global verbosity goes before the subcommand name.
        if request.verbose {
            args.push("-v".into());
        }

        match request.operation {
            Operation::Build => {
                args.push("compile".into());
                args.push("--fqbn".into());
                args.push(request.board.fqbn().into());
                args.push("--warnings".into());
                args.push("default".into());
                args.push("--build-cache-path".into());
                args.push(build_dir.clone());
                args.push("--build-path".into());
                args.push(build_dir);
                args.push("--output-dir".into());
                args.push(output_dir);
                if let Some(flag) = request.board.extra_build_flag() {
                    args.push("--build-property".into());
                    args.push(format!("build.extra_flags={flag}"));
                }
                args.push(SKETCH.into());
            },
            Operation::Upload => {
                args.push("upload".into());
                args.push("--fqbn".into());
                args.push(request.board.fqbn().into());
                args.push("--port".into());
                args.push(request.device.clone());
                args.push("--input-dir".into());
                args.push(output_dir);
            },
        }

        Self {
            program: TOOLCHAIN_BIN,
            args,
        }
    }

    /// The toolchain binary to execute.
    #[must_use]
    pub fn program(&self) -> &str {
        self.program
    }

    /// The ordered argument vector, not including the program name.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The rendered command line, for logging and `--dry-run`.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut line = String::from(self.program);
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run the toolchain with inherited standard streams and wait.
    ///
    /// Returns the child's exit code unchanged. A child killed by a
    /// signal has no exit code and is reported as 1.
    pub fn run(&self) -> Result<i32> {
        debug!("exec: {}", self.command_line());

        let status = Command::new(self.program)
            .args(&self.args)
            .status()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    Error::ToolchainNotFound {
                        program: self.program.to_string(),
                    }
                } else {
                    Error::Io(e)
                }
            })?;

        Ok(status.code().unwrap_or(1))
    }
}
