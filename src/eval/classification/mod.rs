//! Classification metrics for model evaluation
//!
//! Provides multi-class classification metrics including:
//! - Confusion matrix construction from a grid or from raw labels
//! - Per-label TP/TN/FP/FN counts and the rates derived from them
//! - Macro, micro, and weighted averaging
//! - sklearn-style classification reports

mod average;
mod confusion;
mod count;
mod label;
mod metrics;
mod options;
mod rates;
mod report;

#[cfg(test)]
mod basic_tests;

// Re-export all public types and functions
pub use average::Average;
pub use confusion::ConfusionMatrix;
pub use count::Count;
pub use label::Label;
pub use metrics::MultiClassMetrics;
pub use options::{FromLabelsOptions, LabelComparator};
pub use rates::LabelMetrics;
pub use report::classification_report;
