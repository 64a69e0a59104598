//! Confusion matrix evaluation
//!
//! Scores already-produced predictions against ground truth. A
//! [`ConfusionMatrix`] is built either from a pre-counted grid plus the labels
//! it indexes, or from two parallel slices of actual and predicted labels.
//!
//! Every metric is derived from the same per-label primitives (TP, TN, FP, FN)
//! computed over the grid's rows and columns. Degenerate ratios (0/0) come
//! back as `NaN` instead of an error so that batch evaluation over many labels
//! never aborts halfway.
//!
//! # Example
//!
//! ```
//! use confusion_matrix::{ConfusionMatrix, FromLabelsOptions};
//!
//! let actual = ["cat", "dog", "dog", "cat"];
//! let predicted = ["cat", "cat", "dog", "cat"];
//! let cm = ConfusionMatrix::from_labels(&actual, &predicted, &FromLabelsOptions::default())?;
//!
//! assert_eq!(cm.labels(), &["cat", "dog"]);
//! assert_eq!(cm.true_positive_count("dog")?, 1);
//! assert_eq!(cm.accuracy(), 0.75);
//! # Ok::<(), confusion_matrix::ConfusionError>(())
//! ```

pub mod error;
pub mod eval;

pub use error::{ConfusionError, Result};
pub use eval::{
    classification_report, Average, ConfusionMatrix, Count, FromLabelsOptions, Label,
    LabelComparator, LabelMetrics, MultiClassMetrics,
};
