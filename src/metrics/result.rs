//! End-to-end metric derivation from a confusion matrix

use serde::{Deserialize, Serialize};

use super::class::ClassMetrics;
use super::summary::{AveragedMetrics, OverallMetrics};
use crate::matrix::ConfusionMatrix;

/// Complete evaluation of one confusion matrix
///
/// One [`ClassMetrics`] record per class, in matrix order, plus overall
/// accuracy and the macro and weighted aggregate views.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MetricsResult {
    pub per_class: Vec<ClassMetrics>,
    pub overall: OverallMetrics,
}

impl MetricsResult {
    /// Derive all metrics from a confusion matrix
    ///
    /// Infallible: squareness and non-emptiness are enforced when the
    /// matrix is constructed, and every zero-denominator case substitutes
    /// 0, so no input reaching this point can fail.
    pub fn from_confusion_matrix(matrix: &ConfusionMatrix) -> Self {
        let per_class: Vec<ClassMetrics> = (0..matrix.n_classes())
            .map(|c| {
                ClassMetrics::from_counts(
                    matrix.true_positives(c),
                    matrix.false_positives(c),
                    matrix.false_negatives(c),
                    matrix.true_negatives(c),
                )
            })
            .collect();

        let overall = OverallMetrics {
            accuracy: matrix.accuracy(),
            macro_avg: AveragedMetrics::macro_over(&per_class),
            weighted_avg: AveragedMetrics::weighted_over(&per_class),
        };

        Self { per_class, overall }
    }

    /// Number of classes this result covers
    pub fn n_classes(&self) -> usize {
        self.per_class.len()
    }

    /// Indices of classes with zero support
    ///
    /// Such classes never occur in the ground truth: recall is 0 by the
    /// substitute-0 rule and they carry no weight in the weighted
    /// averages. Surfaced so callers can warn instead of reporting them
    /// silently.
    pub fn degenerate_classes(&self) -> Vec<usize> {
        self.per_class
            .iter()
            .enumerate()
            .filter(|(_, c)| c.support == 0)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn matrix(rows: Vec<Vec<u64>>) -> ConfusionMatrix {
        ConfusionMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_perfect_separation() {
        let result =
            MetricsResult::from_confusion_matrix(&matrix(vec![vec![2, 0], vec![0, 2]]));
        assert_eq!(result.overall.accuracy, 1.0);
        for class in &result.per_class {
            assert_eq!(class.precision, 1.0);
            assert_eq!(class.recall, 1.0);
            assert_eq!(class.f1_score, 1.0);
            assert_eq!(class.mcc, 1.0);
        }
        assert_eq!(result.overall.macro_avg.f1_score, 1.0);
        assert_eq!(result.overall.weighted_avg.f1_score, 1.0);
        assert_eq!(result.overall.macro_avg.mcc, 1.0);
        assert_eq!(result.overall.weighted_avg.mcc, 1.0);
    }

    #[test]
    fn test_total_confusion() {
        let result =
            MetricsResult::from_confusion_matrix(&matrix(vec![vec![0, 1], vec![1, 0]]));
        assert_eq!(result.overall.accuracy, 0.0);
        for class in &result.per_class {
            assert_eq!(class.precision, 0.0);
            assert_eq!(class.recall, 0.0);
            assert_eq!(class.f1_score, 0.0);
            // TN = 2 - 0 - 1 - 1 = 0, so the denominator is
            // sqrt(1*1*1*1) = 1 and mcc = (0 - 1) / 1
            assert_eq!(class.mcc, -1.0);
        }
        assert_eq!(result.overall.macro_avg.mcc, -1.0);
        assert_eq!(result.overall.weighted_avg.mcc, -1.0);
    }

    #[test]
    fn test_single_class() {
        let result = MetricsResult::from_confusion_matrix(&matrix(vec![vec![5]]));
        assert_eq!(result.n_classes(), 1);
        assert_eq!(result.overall.accuracy, 1.0);
        let class = &result.per_class[0];
        assert_eq!(class.weighted_accuracy, 1.0);
        assert_eq!(class.mcc, 0.0);
    }

    #[test]
    fn test_three_class_reference_values() {
        // [[5,1,0],[2,3,1],[0,0,4]]: total 16, trace 12
        let result = MetricsResult::from_confusion_matrix(&matrix(vec![
            vec![5, 1, 0],
            vec![2, 3, 1],
            vec![0, 0, 4],
        ]));
        assert_eq!(result.overall.accuracy, 0.75);

        // Class 0: TP=5, FP=2, FN=1, TN=8
        let c0 = &result.per_class[0];
        assert_abs_diff_eq!(c0.precision, 5.0 / 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c0.recall, 5.0 / 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c0.f1_score, 10.0 / 13.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c0.balanced_accuracy, 49.0 / 60.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c0.weighted_accuracy, 13.0 / 16.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c0.mcc, 38.0 / 3780.0_f64.sqrt(), epsilon = 1e-12);

        // Class 1: TP=3, FP=1, FN=3, TN=9
        let c1 = &result.per_class[1];
        assert_abs_diff_eq!(c1.precision, 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(c1.recall, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c1.f1_score, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(c1.mcc, 1.0 / 5.0_f64.sqrt(), epsilon = 1e-12);

        // Class 2: TP=4, FP=1, FN=0, TN=11
        let c2 = &result.per_class[2];
        assert_abs_diff_eq!(c2.precision, 0.8, epsilon = 1e-12);
        assert_eq!(c2.recall, 1.0);
        assert_abs_diff_eq!(c2.f1_score, 8.0 / 9.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c2.mcc, 44.0 / 2640.0_f64.sqrt(), epsilon = 1e-12);

        // Aggregates from the per-class values above
        let macro_p = (5.0 / 7.0 + 0.75 + 0.8) / 3.0;
        assert_abs_diff_eq!(result.overall.macro_avg.precision, macro_p, epsilon = 1e-12);
        let weighted_p = ((5.0 / 7.0) * 6.0 + 0.75 * 6.0 + 0.8 * 4.0) / 16.0;
        assert_abs_diff_eq!(
            result.overall.weighted_avg.precision,
            weighted_p,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_degenerate_class_detection() {
        // Class 1 has an all-zero row and column
        let result = MetricsResult::from_confusion_matrix(&matrix(vec![
            vec![3, 0, 0],
            vec![0, 0, 0],
            vec![0, 0, 2],
        ]));
        assert_eq!(result.degenerate_classes(), vec![1]);
        let c1 = &result.per_class[1];
        assert_eq!(c1.precision, 0.0);
        assert_eq!(c1.recall, 0.0);
        assert_eq!(c1.f1_score, 0.0);
        assert_eq!(c1.mcc, 0.0);
        assert_eq!(c1.support, 0);
        // Weighted averages ignore the zero-weight class
        assert_eq!(result.overall.weighted_avg.precision, 1.0);
        assert_eq!(result.overall.weighted_avg.recall, 1.0);
    }

    #[test]
    fn test_all_zero_matrix() {
        let result =
            MetricsResult::from_confusion_matrix(&matrix(vec![vec![0, 0], vec![0, 0]]));
        assert_eq!(result.overall.accuracy, 0.0);
        assert_eq!(result.degenerate_classes(), vec![0, 1]);
        assert_eq!(result.overall.weighted_avg.precision, 0.0);
        assert_eq!(result.overall.macro_avg.f1_score, 0.0);
    }

    #[test]
    fn test_results_are_finite() {
        let result = MetricsResult::from_confusion_matrix(&matrix(vec![
            vec![0, 5, 0],
            vec![0, 0, 0],
            vec![7, 0, 0],
        ]));
        for class in &result.per_class {
            assert!(class.precision.is_finite());
            assert!(class.recall.is_finite());
            assert!(class.f1_score.is_finite());
            assert!(class.balanced_accuracy.is_finite());
            assert!(class.weighted_accuracy.is_finite());
            assert!(class.mcc.is_finite());
        }
        assert!(result.overall.accuracy.is_finite());
    }
}
