//! CLI module for medir
//!
//! Argument types, command handlers, and output utilities for the
//! medir binary.

mod args;
mod commands;
mod logging;

pub use args::{parse_args, Cli, Command, CompareArgs, OutputFormat, ReportArgs, TaggerArg};
pub use commands::run_command;
pub use logging::LogLevel;
