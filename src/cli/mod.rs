//! Command-line surface of the `claude-sessions` binary.

pub mod commands;

pub use commands::{Cli, Commands, run};
