//! CLI argument types

use clap::{Parser, Subcommand};

use crate::metrics::SummaryMetric;

/// Medir: classification metrics calculator
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "medir")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Multi-class classification metrics from confusion matrices")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Report metrics for one bundled tagger evaluation
    Report(ReportArgs),

    /// Rank the bundled tagger evaluations against each other
    Compare(CompareArgs),

    /// Print the full report for every bundled tagger
    Demo,
}

/// Arguments for the report command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// Tagger to evaluate (scalar, flair, ensemble)
    #[arg(value_name = "TAGGER")]
    pub tagger: TaggerArg,

    /// Print the confusion matrix before the report
    #[arg(short, long)]
    pub matrix: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the compare command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CompareArgs {
    /// Ranking metric, e.g. accuracy, macro-f1, weighted-mcc
    #[arg(short, long, default_value = "accuracy")]
    pub metric: SummaryMetric,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Emit a markdown table instead of the boxed table
    #[arg(long)]
    pub markdown: bool,
}

/// Bundled tagger selector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaggerArg {
    Scalar,
    Flair,
    Ensemble,
}

impl std::str::FromStr for TaggerArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scalar" => Ok(TaggerArg::Scalar),
            "flair" => Ok(TaggerArg::Flair),
            "ensemble" => Ok(TaggerArg::Ensemble),
            _ => Err(format!(
                "Unknown tagger: {s}. Valid taggers: scalar, flair, ensemble"
            )),
        }
    }
}

impl std::fmt::Display for TaggerArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaggerArg::Scalar => write!(f, "scalar"),
            TaggerArg::Flair => write!(f, "flair"),
            TaggerArg::Ensemble => write!(f, "ensemble"),
        }
    }
}

/// Output format for report and compare
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json"
            )),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
