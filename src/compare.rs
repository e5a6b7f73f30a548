//! Leaderboard for comparing evaluations of several models

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::metrics::{Average, MetricsResult, SummaryMetric};

/// One evaluated model: a display name plus its full metrics
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelEvaluation {
    pub name: String,
    pub result: MetricsResult,
}

impl ModelEvaluation {
    /// Read the summary scalar selected by `metric`
    pub fn score(&self, metric: SummaryMetric) -> f64 {
        self.result.overall.get(metric)
    }
}

/// Columns every table shows in addition to the primary metric
const DEFAULT_COLUMNS: [SummaryMetric; 4] = [
    SummaryMetric::Accuracy,
    SummaryMetric::F1(Average::Macro),
    SummaryMetric::F1(Average::Weighted),
    SummaryMetric::Mcc(Average::Macro),
];

/// Leaderboard ranking models by a primary metric
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Leaderboard {
    /// Evaluations in rank order, best first
    pub entries: Vec<ModelEvaluation>,
    /// Metric used for ranking
    pub primary_metric: SummaryMetric,
}

impl Leaderboard {
    /// Create an empty leaderboard ranked by `primary_metric`
    pub fn new(primary_metric: SummaryMetric) -> Self {
        Self {
            entries: Vec::new(),
            primary_metric,
        }
    }

    /// Add a model's evaluation and re-rank
    pub fn add(&mut self, name: impl Into<String>, result: MetricsResult) {
        self.entries.push(ModelEvaluation {
            name: name.into(),
            result,
        });
        self.sort();
    }

    /// Re-rank by the primary metric
    pub fn sort(&mut self) {
        self.sort_by(self.primary_metric);
    }

    /// Re-rank by a specific metric
    ///
    /// Every summary metric is better when larger, so ranking is always
    /// descending. The sort is stable: ties keep insertion order.
    pub fn sort_by(&mut self, metric: SummaryMetric) {
        self.entries.sort_by(|a, b| {
            b.score(metric)
                .partial_cmp(&a.score(metric))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Best model under the primary metric
    pub fn best(&self) -> Option<&ModelEvaluation> {
        self.entries.first()
    }

    /// Table columns: the primary metric first, then the defaults
    fn columns(&self) -> Vec<SummaryMetric> {
        let mut columns = vec![self.primary_metric];
        for metric in DEFAULT_COLUMNS {
            if metric != self.primary_metric {
                columns.push(metric);
            }
        }
        columns
    }

    /// Export as a markdown table
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        if self.entries.is_empty() {
            return md;
        }
        let columns = self.columns();

        // Header
        md.push_str("| Model |");
        for metric in &columns {
            md.push_str(&format!(" {metric} |"));
        }
        md.push('\n');

        // Separator
        md.push_str("|-------|");
        for _ in &columns {
            md.push_str("----------|");
        }
        md.push('\n');

        // Rows
        for entry in &self.entries {
            md.push_str(&format!("| {} |", entry.name));
            for metric in &columns {
                md.push_str(&format!(" {:.4} |", entry.score(*metric)));
            }
            md.push('\n');
        }

        md
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "Leaderboard: (empty)");
        }

        let columns = self.columns();
        let names: Vec<String> = columns.iter().map(|m| m.to_string()).collect();
        let widths: Vec<usize> = names.iter().map(|n| n.len().max(8)).collect();

        let model_width = self
            .entries
            .iter()
            .map(|e| e.name.len())
            .max()
            .unwrap_or(5)
            .max(5);

        // Top border
        write!(f, "┌{:─<width$}", "", width = model_width + 2)?;
        for &w in &widths {
            write!(f, "┬{:─<width$}", "", width = w + 2)?;
        }
        writeln!(f, "┐")?;

        // Header
        write!(f, "│ {:model_width$} ", "Model")?;
        for (name, &w) in names.iter().zip(&widths) {
            write!(f, "│ {name:>w$} ")?;
        }
        writeln!(f, "│")?;

        // Separator
        write!(f, "├{:─<width$}", "", width = model_width + 2)?;
        for &w in &widths {
            write!(f, "┼{:─<width$}", "", width = w + 2)?;
        }
        writeln!(f, "┤")?;

        // Rows
        for entry in &self.entries {
            write!(f, "│ {:model_width$} ", entry.name)?;
            for (&metric, &w) in columns.iter().zip(&widths) {
                write!(f, "│ {:>w$.4} ", entry.score(metric))?;
            }
            writeln!(f, "│")?;
        }

        // Bottom border
        write!(f, "└{:─<width$}", "", width = model_width + 2)?;
        for &w in &widths {
            write!(f, "┴{:─<width$}", "", width = w + 2)?;
        }
        writeln!(f, "┘")?;

        Ok(())
    }
}
