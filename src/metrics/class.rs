//! Per-class metric records

use serde::{Deserialize, Serialize};

/// The six evaluation metrics for a single class, plus its support
///
/// Each metric whose natural denominator is zero is defined as 0 rather
/// than NaN. That convention keeps every field finite for any non-negative
/// input and matches the reference outputs this crate reproduces; it is a
/// modeling choice, not a statistical one (MCC in particular is arguably
/// undefined for a class with no predictions and no instances).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// TP / (TP + FP), or 0 when the class was never predicted
    pub precision: f64,
    /// TP / (TP + FN), or 0 when the class has no instances
    pub recall: f64,
    /// Harmonic mean of precision and recall, or 0 when both are 0
    pub f1_score: f64,
    /// (sensitivity + specificity) / 2
    pub balanced_accuracy: f64,
    /// (TP + TN) / (TP + TN + FP + FN)
    pub weighted_accuracy: f64,
    /// Matthews Correlation Coefficient for this class vs. rest, in [-1, 1]
    pub mcc: f64,
    /// Count of ground-truth instances of this class (row sum)
    pub support: u64,
}

impl ClassMetrics {
    /// Compute the one-vs-rest metrics for a class from its four counts
    ///
    /// `tp` is the diagonal entry, `fp` the column sum minus `tp`, `fn_`
    /// the row sum minus `tp`, and `tn` the remainder of the sample total.
    pub fn from_counts(tp: u64, fp: u64, fn_: u64, tn: u64) -> Self {
        let tp_f = tp as f64;
        let fp_f = fp as f64;
        let fn_f = fn_ as f64;
        let tn_f = tn as f64;

        let precision = if tp + fp > 0 { tp_f / (tp_f + fp_f) } else { 0.0 };
        let recall = if tp + fn_ > 0 { tp_f / (tp_f + fn_f) } else { 0.0 };
        let f1_score = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        // Sensitivity is recall; balanced accuracy averages it with
        // specificity so an inflated majority class cannot dominate.
        let specificity = if tn + fp > 0 { tn_f / (tn_f + fp_f) } else { 0.0 };
        let balanced_accuracy = (recall + specificity) / 2.0;

        // Denominator equals the sample total; only an all-zero matrix
        // can make it 0.
        let count_total = tp + tn + fp + fn_;
        let weighted_accuracy = if count_total > 0 {
            (tp_f + tn_f) / count_total as f64
        } else {
            0.0
        };

        // Factors multiplied in f64 so large counts cannot overflow.
        let mcc_denominator =
            ((tp_f + fp_f) * (tp_f + fn_f) * (tn_f + fp_f) * (tn_f + fn_f)).sqrt();
        let mcc = if mcc_denominator != 0.0 {
            (tp_f * tn_f - fp_f * fn_f) / mcc_denominator
        } else {
            0.0
        };

        Self {
            precision,
            recall,
            f1_score,
            balanced_accuracy,
            weighted_accuracy,
            mcc,
            support: tp + fn_,
        }
    }
}
