//! Command-line interface for the mealgraph pipeline

pub mod commands;

pub use commands::{Cli, CommandExecutor, CommandResult, Commands};
