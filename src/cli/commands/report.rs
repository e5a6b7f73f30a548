//! Report command implementation

use crate::cli::args::{OutputFormat, ReportArgs, TaggerArg};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::demo;
use crate::metrics::MetricsResult;
use crate::report::evaluation_report;

pub fn run_report(args: ReportArgs, level: LogLevel) -> Result<(), String> {
    let matrix = match args.tagger {
        TaggerArg::Scalar => demo::scalar_tagger(),
        TaggerArg::Flair => demo::flair_tagger(),
        TaggerArg::Ensemble => demo::ensemble_tagger(),
    }
    .map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Evaluating {}: {} classes, {} samples",
            args.tagger,
            matrix.n_classes(),
            matrix.total()
        ),
    );

    let result = MetricsResult::from_confusion_matrix(&matrix);
    for class in result.degenerate_classes() {
        log(
            level,
            LogLevel::Verbose,
            &format!(
                "Note: class {} ({}) has no ground-truth instances",
                class,
                demo::POS_LABELS[class]
            ),
        );
    }

    if args.matrix {
        log(level, LogLevel::Normal, &matrix.to_string());
    }

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        OutputFormat::Text => {
            let report =
                evaluation_report(&result, &demo::POS_LABELS).map_err(|e| e.to_string())?;
            log(level, LogLevel::Normal, &report);
        }
    }

    Ok(())
}
