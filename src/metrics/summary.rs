//! Aggregate views over per-class metrics

use serde::{Deserialize, Serialize};
use std::fmt;

use super::class::ClassMetrics;

/// Strategy for collapsing per-class scores into a single number
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Average {
    /// Unweighted mean, every class counts equally
    Macro,
    /// Mean weighted by each class's ground-truth instance count
    Weighted,
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Average::Macro => write!(f, "macro"),
            Average::Weighted => write!(f, "weighted"),
        }
    }
}

/// A single scalar selectable from [`OverallMetrics`]
///
/// Used to pick the ranking column when comparing several models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryMetric {
    Accuracy,
    Precision(Average),
    Recall(Average),
    F1(Average),
    BalancedAccuracy(Average),
    WeightedAccuracy(Average),
    Mcc(Average),
}

impl fmt::Display for SummaryMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryMetric::Accuracy => write!(f, "accuracy"),
            SummaryMetric::Precision(avg) => write!(f, "{avg} precision"),
            SummaryMetric::Recall(avg) => write!(f, "{avg} recall"),
            SummaryMetric::F1(avg) => write!(f, "{avg} f1"),
            SummaryMetric::BalancedAccuracy(avg) => write!(f, "{avg} balanced accuracy"),
            SummaryMetric::WeightedAccuracy(avg) => write!(f, "{avg} weighted accuracy"),
            SummaryMetric::Mcc(avg) => write!(f, "{avg} mcc"),
        }
    }
}

impl std::str::FromStr for SummaryMetric {
    type Err = String;

    /// Parse `accuracy`, or an averaging prefix (`macro-`, `weighted-`)
    /// followed by `precision`, `recall`, `f1`, `balanced-accuracy`,
    /// `weighted-accuracy`, or `mcc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        if lower == "accuracy" {
            return Ok(SummaryMetric::Accuracy);
        }
        let (prefix, rest) = lower.split_once('-').ok_or_else(|| unknown_metric(s))?;
        let avg = match prefix {
            "macro" => Average::Macro,
            "weighted" => Average::Weighted,
            _ => return Err(unknown_metric(s)),
        };
        match rest {
            "precision" => Ok(SummaryMetric::Precision(avg)),
            "recall" => Ok(SummaryMetric::Recall(avg)),
            "f1" => Ok(SummaryMetric::F1(avg)),
            "balanced-accuracy" => Ok(SummaryMetric::BalancedAccuracy(avg)),
            "weighted-accuracy" => Ok(SummaryMetric::WeightedAccuracy(avg)),
            "mcc" => Ok(SummaryMetric::Mcc(avg)),
            _ => Err(unknown_metric(s)),
        }
    }
}

fn unknown_metric(s: &str) -> String {
    format!(
        "Unknown metric: {s}. Valid metrics: accuracy, or macro-/weighted- \
         followed by precision, recall, f1, balanced-accuracy, weighted-accuracy, mcc"
    )
}

/// The six metrics after averaging across classes
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AveragedMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub balanced_accuracy: f64,
    pub weighted_accuracy: f64,
    pub mcc: f64,
}

impl AveragedMetrics {
    fn zeroed() -> Self {
        Self {
            precision: 0.0,
            recall: 0.0,
            f1_score: 0.0,
            balanced_accuracy: 0.0,
            weighted_accuracy: 0.0,
            mcc: 0.0,
        }
    }

    /// Unweighted mean of each metric across classes
    ///
    /// An empty slice yields all zeros, consistent with the crate-wide
    /// substitute-0 convention for empty denominators.
    pub fn macro_over(classes: &[ClassMetrics]) -> Self {
        if classes.is_empty() {
            return Self::zeroed();
        }
        let n = classes.len() as f64;
        let mean =
            |pick: fn(&ClassMetrics) -> f64| classes.iter().map(pick).sum::<f64>() / n;
        Self {
            precision: mean(|c| c.precision),
            recall: mean(|c| c.recall),
            f1_score: mean(|c| c.f1_score),
            balanced_accuracy: mean(|c| c.balanced_accuracy),
            weighted_accuracy: mean(|c| c.weighted_accuracy),
            mcc: mean(|c| c.mcc),
        }
    }

    /// Mean of each metric weighted by class support
    ///
    /// Classes with zero support contribute nothing; when every class has
    /// zero support (an all-zero matrix) the result is all zeros rather
    /// than 0/0.
    pub fn weighted_over(classes: &[ClassMetrics]) -> Self {
        let total: u64 = classes.iter().map(|c| c.support).sum();
        if total == 0 {
            return Self::zeroed();
        }
        let total = total as f64;
        let mean = |pick: fn(&ClassMetrics) -> f64| {
            classes
                .iter()
                .map(|c| pick(c) * c.support as f64)
                .sum::<f64>()
                / total
        };
        Self {
            precision: mean(|c| c.precision),
            recall: mean(|c| c.recall),
            f1_score: mean(|c| c.f1_score),
            balanced_accuracy: mean(|c| c.balanced_accuracy),
            weighted_accuracy: mean(|c| c.weighted_accuracy),
            mcc: mean(|c| c.mcc),
        }
    }
}

/// Overall accuracy plus both aggregate views
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OverallMetrics {
    /// trace / total, the fraction of samples predicted correctly
    pub accuracy: f64,
    pub macro_avg: AveragedMetrics,
    pub weighted_avg: AveragedMetrics,
}

impl OverallMetrics {
    /// Read the scalar selected by `metric`
    pub fn get(&self, metric: SummaryMetric) -> f64 {
        match metric {
            SummaryMetric::Accuracy => self.accuracy,
            SummaryMetric::Precision(avg) => self.averaged(avg).precision,
            SummaryMetric::Recall(avg) => self.averaged(avg).recall,
            SummaryMetric::F1(avg) => self.averaged(avg).f1_score,
            SummaryMetric::BalancedAccuracy(avg) => self.averaged(avg).balanced_accuracy,
            SummaryMetric::WeightedAccuracy(avg) => self.averaged(avg).weighted_accuracy,
            SummaryMetric::Mcc(avg) => self.averaged(avg).mcc,
        }
    }

    fn averaged(&self, avg: Average) -> &AveragedMetrics {
        match avg {
            Average::Macro => &self.macro_avg,
            Average::Weighted => &self.weighted_avg,
        }
    }
}
