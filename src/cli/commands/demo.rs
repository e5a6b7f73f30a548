//! Demo command implementation
//!
//! Prints the full report for every bundled tagger, in the order the
//! original experiment ran them.

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::demo;
use crate::metrics::MetricsResult;
use crate::report::evaluation_report;

pub fn run_demo(level: LogLevel) -> Result<(), String> {
    for (name, matrix) in demo::all_taggers().map_err(|e| e.to_string())? {
        let result = MetricsResult::from_confusion_matrix(&matrix);
        for class in result.degenerate_classes() {
            log(
                level,
                LogLevel::Verbose,
                &format!(
                    "Note: {name} has no ground-truth instances of class {} ({})",
                    class,
                    demo::POS_LABELS[class]
                ),
            );
        }
        let report =
            evaluation_report(&result, &demo::POS_LABELS).map_err(|e| e.to_string())?;
        log(level, LogLevel::Normal, &format!("{name}:"));
        log(level, LogLevel::Normal, &report);
    }
    Ok(())
}
