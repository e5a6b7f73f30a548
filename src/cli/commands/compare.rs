//! Compare command implementation

use crate::cli::args::{CompareArgs, OutputFormat};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::compare::Leaderboard;
use crate::demo;
use crate::metrics::MetricsResult;

pub fn run_compare(args: CompareArgs, level: LogLevel) -> Result<(), String> {
    let mut leaderboard = Leaderboard::new(args.metric);
    for (name, matrix) in demo::all_taggers().map_err(|e| e.to_string())? {
        leaderboard.add(name, MetricsResult::from_confusion_matrix(&matrix));
    }

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Ranking {} taggers by {}",
            leaderboard.entries.len(),
            args.metric
        ),
    );

    if args.markdown {
        log(level, LogLevel::Normal, &leaderboard.to_markdown());
        return Ok(());
    }

    match args.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&leaderboard).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        OutputFormat::Text => {
            log(level, LogLevel::Normal, &leaderboard.to_string());
            if let Some(best) = leaderboard.best() {
                log(
                    level,
                    LogLevel::Normal,
                    &format!("Best by {}: {}", args.metric, best.name),
                );
            }
        }
    }

    Ok(())
}
