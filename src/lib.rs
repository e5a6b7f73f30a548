//! Multi-class classification metrics from confusion matrices.
//!
//! This crate provides tools for:
//! - Per-class precision, recall, F1, balanced accuracy, weighted accuracy, and MCC
//! - Macro and support-weighted averaging across classes
//! - Plain-text evaluation reports and model leaderboards
//! - Bundled confusion matrices from a part-of-speech tagging experiment
//!
//! # Toyota Way Principles
//!
//! - **Genchi Genbutsu**: Metrics computed directly from observed confusion counts
//! - **Jidoka**: Zero-denominator cases yield defined values instead of NaN
//! - **Visual Control**: Hierarchical reports and ranked tables for quick review

pub mod cli;
pub mod compare;
pub mod demo;
pub mod error;
pub mod matrix;
pub mod metrics;
pub mod report;

pub use compare::{Leaderboard, ModelEvaluation};
pub use error::{MetricsError, Result};
pub use matrix::ConfusionMatrix;
pub use metrics::{
    Average, AveragedMetrics, ClassMetrics, MetricsResult, OverallMetrics, SummaryMetric,
};
pub use report::evaluation_report;
