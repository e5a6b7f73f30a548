//! CLI command implementations

mod compare;
mod demo;
mod report;


use crate::cli::args::{Cli, Command};
use crate::cli::logging::LogLevel;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Report(args) => report::run_report(args, log_level),
        Command::Compare(args) => compare::run_compare(args, log_level),
        Command::Demo => demo::run_demo(log_level),
    }
}
