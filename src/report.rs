//! Hierarchical text report over computed metrics

use crate::error::{MetricsError, Result};
use crate::metrics::MetricsResult;

// Each block aligns its values to a fixed column; the widths differ per
// block because the longest label differs.
const CLASS_LABEL_WIDTH: usize = 20;
const ACCURACY_LABEL_WIDTH: usize = 24;
const MACRO_LABEL_WIDTH: usize = 26;
const WEIGHTED_LABEL_WIDTH: usize = 29;

fn metric_line(report: &mut String, label: &str, width: usize, value: f64) {
    report.push_str(&format!("    {label:<width$}{value:.4}\n"));
}

/// Render a metrics result as an indented text report
///
/// `labels` must hold exactly one label per class, in matrix order;
/// anything else is a [`MetricsError::LabelMismatch`]. Values print with
/// four decimal places. The layout is fixed: overall accuracy, one block
/// per class, then the macro-averaged and weighted-averaged blocks.
///
/// # Example
/// ```
/// use medir::{evaluation_report, ConfusionMatrix, MetricsResult};
///
/// let cm = ConfusionMatrix::from_rows(vec![vec![2, 0], vec![0, 2]])?;
/// let result = MetricsResult::from_confusion_matrix(&cm);
/// let report = evaluation_report(&result, &["cat", "dog"])?;
/// assert!(report.contains("  cat:\n"));
/// # Ok::<(), medir::MetricsError>(())
/// ```
pub fn evaluation_report(result: &MetricsResult, labels: &[&str]) -> Result<String> {
    if labels.len() != result.n_classes() {
        return Err(MetricsError::LabelMismatch {
            expected: result.n_classes(),
            found: labels.len(),
        });
    }

    let mut report = String::new();

    report.push_str("Overall Metrics:\n");
    metric_line(
        &mut report,
        "Accuracy:",
        ACCURACY_LABEL_WIDTH,
        result.overall.accuracy,
    );

    report.push_str("\nPer-Class Metrics:\n");
    for (label, class) in labels.iter().zip(&result.per_class) {
        report.push_str(&format!("  {label}:\n"));
        let w = CLASS_LABEL_WIDTH;
        metric_line(&mut report, "Precision:", w, class.precision);
        metric_line(&mut report, "Recall:", w, class.recall);
        metric_line(&mut report, "F1 Score:", w, class.f1_score);
        metric_line(&mut report, "Balanced Accuracy:", w, class.balanced_accuracy);
        metric_line(&mut report, "Weighted Accuracy:", w, class.weighted_accuracy);
        metric_line(&mut report, "Matthews Corr Coef:", w, class.mcc);
    }

    report.push_str("\nOverall Metrics:\n");
    report.push_str("  Macro Averaging:\n");
    let macro_avg = &result.overall.macro_avg;
    let w = MACRO_LABEL_WIDTH;
    metric_line(&mut report, "Macro Precision:", w, macro_avg.precision);
    metric_line(&mut report, "Macro Recall:", w, macro_avg.recall);
    metric_line(&mut report, "Macro F1 Score:", w, macro_avg.f1_score);
    metric_line(
        &mut report,
        "Macro Balanced Accuracy:",
        w,
        macro_avg.balanced_accuracy,
    );
    metric_line(
        &mut report,
        "Macro Weighted Accuracy:",
        w,
        macro_avg.weighted_accuracy,
    );
    metric_line(&mut report, "Macro Matthews Corr Coef:", w, macro_avg.mcc);

    report.push_str("\n  Weighted Averaging:\n");
    let weighted = &result.overall.weighted_avg;
    let w = WEIGHTED_LABEL_WIDTH;
    metric_line(&mut report, "Weighted Precision:", w, weighted.precision);
    metric_line(&mut report, "Weighted Recall:", w, weighted.recall);
    metric_line(&mut report, "Weighted F1 Score:", w, weighted.f1_score);
    metric_line(
        &mut report,
        "Weighted Balanced Accuracy:",
        w,
        weighted.balanced_accuracy,
    );
    metric_line(&mut report, "Weighted Accuracy:", w, weighted.weighted_accuracy);
    metric_line(&mut report, "Weighted Matthews Corr Coef:", w, weighted.mcc);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::ConfusionMatrix;

    fn result_for(rows: Vec<Vec<u64>>) -> MetricsResult {
        let cm = ConfusionMatrix::from_rows(rows).unwrap();
        MetricsResult::from_confusion_matrix(&cm)
    }

    #[test]
    fn test_label_count_must_match() {
        let result = result_for(vec![vec![2, 0], vec![0, 2]]);
        let err = evaluation_report(&result, &["only one"]).unwrap_err();
        assert_eq!(
            err,
            MetricsError::LabelMismatch {
                expected: 2,
                found: 1
            }
        );
        let err = evaluation_report(&result, &["a", "b", "c"]).unwrap_err();
        assert_eq!(
            err,
            MetricsError::LabelMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_perfect_matrix_report_lines() {
        let result = result_for(vec![vec![2, 0], vec![0, 2]]);
        let report = evaluation_report(&result, &["cat", "dog"]).unwrap();
        assert!(report.starts_with("Overall Metrics:\n"));
        assert!(report.contains("    Accuracy:               1.0000\n"));
        assert!(report.contains("  cat:\n"));
        assert!(report.contains("  dog:\n"));
        assert!(report.contains("    Precision:          1.0000\n"));
        assert!(report.contains("    Recall:             1.0000\n"));
        assert!(report.contains("    F1 Score:           1.0000\n"));
        assert!(report.contains("    Matthews Corr Coef: 1.0000\n"));
        assert!(report.contains("    Macro Precision:          1.0000\n"));
        assert!(report.contains("    Weighted Precision:          1.0000\n"));
    }

    #[test]
    fn test_four_decimal_rounding() {
        // Class 0 recall is 5/6 = 0.8333...
        let result = result_for(vec![vec![5, 1, 0], vec![2, 3, 1], vec![0, 0, 4]]);
        let report = evaluation_report(&result, &["a", "b", "c"]).unwrap();
        assert!(report.contains("    Accuracy:               0.7500\n"));
        assert!(report.contains("    Recall:             0.8333\n"));
    }

    #[test]
    fn test_section_order() {
        let result = result_for(vec![vec![1, 0], vec![0, 1]]);
        let report = evaluation_report(&result, &["x", "y"]).unwrap();
        let per_class = report.find("Per-Class Metrics:").unwrap();
        let macro_block = report.find("Macro Averaging:").unwrap();
        let weighted_block = report.find("Weighted Averaging:").unwrap();
        assert!(per_class < macro_block);
        assert!(macro_block < weighted_block);
    }

    #[test]
    fn test_every_class_gets_a_block() {
        let result = result_for(vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]);
        let report = evaluation_report(&result, &["a", "b", "c"]).unwrap();
        let precision_lines = report.matches("    Precision:").count();
        assert_eq!(precision_lines, 3);
    }
}
