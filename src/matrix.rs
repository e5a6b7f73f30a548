//! Confusion matrix for multi-class classification

use crate::error::{MetricsError, Result};
use std::fmt;

/// Confusion matrix for multi-class classification
///
/// Element [i][j] is the count of samples with true class i predicted as j.
/// Construction via [`ConfusionMatrix::from_rows`] validates that the input
/// is square with at least one class, so a built matrix is always valid.
#[derive(Clone, Debug)]
pub struct ConfusionMatrix {
    /// The matrix data: matrix[true_class][predicted_class] = count
    matrix: Vec<Vec<u64>>,
    /// Number of classes
    n_classes: usize,
}

impl ConfusionMatrix {
    /// Build from row vectors, validating squareness
    ///
    /// # Errors
    /// Returns [`MetricsError::EmptyMatrix`] for zero rows and
    /// [`MetricsError::InvalidMatrix`] when any row's length differs from
    /// the row count. A 2×3 input fails; it is never truncated.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self> {
        let n_classes = rows.len();
        if n_classes == 0 {
            return Err(MetricsError::EmptyMatrix);
        }

        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != n_classes {
                return Err(MetricsError::InvalidMatrix {
                    row,
                    expected: n_classes,
                    found: entries.len(),
                });
            }
        }

        Ok(Self {
            matrix: rows,
            n_classes,
        })
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Get element at [true_class][predicted_class]
    pub fn get(&self, true_class: usize, predicted_class: usize) -> u64 {
        self.matrix[true_class][predicted_class]
    }

    /// True positives for a class (diagonal entry)
    pub fn true_positives(&self, class: usize) -> u64 {
        self.matrix[class][class]
    }

    /// False positives for a class (predicted as class but wasn't)
    pub fn false_positives(&self, class: usize) -> u64 {
        (0..self.n_classes)
            .filter(|&i| i != class)
            .map(|i| self.matrix[i][class])
            .sum()
    }

    /// False negatives for a class (was class but predicted differently)
    pub fn false_negatives(&self, class: usize) -> u64 {
        (0..self.n_classes)
            .filter(|&j| j != class)
            .map(|j| self.matrix[class][j])
            .sum()
    }

    /// True negatives for a class
    pub fn true_negatives(&self, class: usize) -> u64 {
        self.total()
            - self.true_positives(class)
            - self.false_positives(class)
            - self.false_negatives(class)
    }

    /// Support (count of ground-truth instances) for a class: the row sum
    pub fn support(&self, class: usize) -> u64 {
        self.matrix[class].iter().sum()
    }

    /// Count of predictions assigned to a class: the column sum
    pub fn predicted(&self, class: usize) -> u64 {
        (0..self.n_classes).map(|i| self.matrix[i][class]).sum()
    }

    /// Total number of samples
    pub fn total(&self) -> u64 {
        self.matrix.iter().flatten().sum()
    }

    /// Sum of the diagonal: count of correct predictions
    pub fn trace(&self) -> u64 {
        (0..self.n_classes).map(|i| self.matrix[i][i]).sum()
    }

    /// Overall accuracy: trace / total, or 0 for an all-zero matrix
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.trace() as f64 / total as f64
    }

    /// Whether the matrix holds no samples at all (degenerate input)
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        // Header
        write!(f, "        ")?;
        for j in 0..self.n_classes {
            write!(f, "Pred {j:<3}")?;
        }
        writeln!(f)?;

        // Rows
        for i in 0..self.n_classes {
            write!(f, "True {i:<3}")?;
            for j in 0..self.n_classes {
                write!(f, "{:>7} ", self.matrix[i][j])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
