//! Medir CLI
//!
//! Classification metrics entry point for the medir library.
//!
//! # Usage
//!
//! ```bash
//! # Full report for one tagger
//! medir report scalar
//!
//! # Report with the raw confusion matrix
//! medir report flair --matrix
//!
//! # Report as JSON
//! medir report ensemble --format json
//!
//! # Rank all taggers by a metric
//! medir compare --metric macro-f1
//!
//! # Leaderboard as a markdown table
//! medir compare --markdown
//!
//! # Reports for every bundled tagger
//! medir demo
//! ```

use clap::Parser;
use medir::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
