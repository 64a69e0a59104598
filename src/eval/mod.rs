//! Model evaluation
//!
//! - `classification`: confusion matrix construction, per-label counts and
//!   rates, multi-class averaging and text reports

pub mod classification;

pub use classification::{
    classification_report, Average, ConfusionMatrix, Count, FromLabelsOptions, Label,
    LabelComparator, LabelMetrics, MultiClassMetrics,
};
