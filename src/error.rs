//! Error types for matrix validation and report formatting

use thiserror::Error;

/// Errors raised when building a confusion matrix or formatting a report
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("confusion matrix must be square: row {row} has {found} columns, expected {expected}")]
    InvalidMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("confusion matrix must have at least one class")]
    EmptyMatrix,

    #[error("expected {expected} class labels, found {found}")]
    LabelMismatch { expected: usize, found: usize },
}

/// Result type for metric operations
pub type Result<T> = std::result::Result<T, MetricsError>;
