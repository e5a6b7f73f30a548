//! Multi-class classification metrics
//!
//! Derives per-class metrics from a confusion matrix:
//! - Precision, recall, F1
//! - Balanced and weighted accuracy
//! - Matthews Correlation Coefficient (one class vs. rest)
//!
//! and aggregates them into macro and support-weighted averages.

mod class;
mod result;
mod summary;

// Re-export all public types
pub use class::ClassMetrics;
pub use result::MetricsResult;
pub use summary::{Average, AveragedMetrics, OverallMetrics, SummaryMetric};
