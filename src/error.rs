//! Error types for confusion matrix construction and label lookups.
//!
//! Numeric degeneracies (a ratio whose denominator is zero) are not errors;
//! they surface as `NaN` from the metric methods.

use thiserror::Error;

/// Result type alias for confusion matrix operations.
pub type Result<T> = std::result::Result<T, ConfusionError>;

/// Errors raised while building or querying a confusion matrix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfusionError {
    /// The grid is not square, or its size disagrees with the label list.
    #[error("Invalid confusion matrix shape: {message}")]
    Shape { message: String },

    /// `actual` and `predicted` have different lengths.
    #[error("actual and predicted must have the same length (actual: {actual}, predicted: {predicted})")]
    LengthMismatch { actual: usize, predicted: usize },

    /// A per-label query named a label the matrix does not index.
    #[error("The label does not exist: {label}")]
    UnknownLabel { label: String },
}

impl ConfusionError {
    pub(crate) fn not_square(rows: usize, columns: usize) -> Self {
        Self::Shape {
            message: format!("matrix must be square ({rows} rows, row of length {columns})"),
        }
    }

    pub(crate) fn label_count(matrix: usize, labels: usize) -> Self {
        Self::Shape {
            message: format!(
                "matrix and labels must have the same length (matrix: {matrix}, labels: {labels})"
            ),
        }
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Shape { .. } => "E040",
            Self::LengthMismatch { .. } => "E041",
            Self::UnknownLabel { .. } => "E042",
        }
    }
}
