//! Command implementations.
//!
//! Each subcommand is implemented in its own module for clean separation.

pub(crate) mod boards;
pub(crate) mod clean;
pub(crate) mod completions;
pub(crate) mod invoke;
