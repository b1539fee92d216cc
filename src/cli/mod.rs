//! Command-line interface module
//!
//! Provides argument parsing and command execution.

pub mod args;
pub mod commands;

pub use args::{Args, parse_args};
pub use commands::{RunSummary, execute_command};
