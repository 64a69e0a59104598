//! Confusion matrix for multi-class classification

use super::count::Count;
use super::label::Label;
use super::options::FromLabelsOptions;
use crate::error::{ConfusionError, Result};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Confusion matrix for multi-class classification
///
/// Element `[i][j]` counts the observations whose actual class is
/// `labels[i]` and whose predicted class is `labels[j]`.
///
/// The grid and labels handed to [`ConfusionMatrix::new`] are stored as
/// given, without copying: [`matrix`](Self::matrix) returns the same
/// allocation. Nothing is cached, so counts changed through
/// [`count_mut`](Self::count_mut) or [`rows_mut`](Self::rows_mut) are
/// reflected by every later query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawConfusionMatrix<L, C>",
    bound(
        serialize = "L: Serialize, C: Serialize",
        deserialize = "L: Label + Deserialize<'de>, C: Count + Deserialize<'de>"
    )
)]
pub struct ConfusionMatrix<L, C = usize> {
    /// Row/column labels, in index order
    labels: Vec<L>,
    /// The matrix data: matrix[actual][predicted] = count
    matrix: Vec<Vec<C>>,
}

/// Unvalidated wire form, checked by the constructor on deserialization
#[derive(Deserialize)]
struct RawConfusionMatrix<L, C> {
    labels: Vec<L>,
    matrix: Vec<Vec<C>>,
}

impl<L: Label, C: Count> TryFrom<RawConfusionMatrix<L, C>> for ConfusionMatrix<L, C> {
    type Error = ConfusionError;

    fn try_from(raw: RawConfusionMatrix<L, C>) -> Result<Self> {
        Self::new(raw.matrix, raw.labels).inspect_err(|err| {
            debug!("rejecting deserialized confusion matrix: {err}");
        })
    }
}

impl<L: Label> ConfusionMatrix<L, usize> {
    /// Create from actual and predicted labels
    ///
    /// Labels are taken from `options` when given, otherwise from the
    /// distinct values of `actual` followed by `predicted`, in first-seen
    /// order. Observations whose actual or predicted label is not part of
    /// the label set are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use confusion_matrix::{ConfusionMatrix, FromLabelsOptions};
    ///
    /// let cm = ConfusionMatrix::from_labels(&["A", "B"], &["B", "C"], &FromLabelsOptions::default())?;
    /// assert_eq!(cm.labels(), &["A", "B", "C"]);
    /// assert_eq!(cm.matrix(), &vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]]);
    /// # Ok::<(), confusion_matrix::ConfusionError>(())
    /// ```
    pub fn from_labels(actual: &[L], predicted: &[L], options: &FromLabelsOptions<L>) -> Result<Self> {
        if actual.len() != predicted.len() {
            return Err(ConfusionError::LengthMismatch {
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }

        let mut labels = match options.labels() {
            Some(explicit) => distinct(explicit.iter()),
            None => distinct(actual.iter().chain(predicted.iter())),
        };
        options.sort_labels(&mut labels);

        let n = labels.len();
        let mut matrix = vec![vec![0usize; n]; n];
        let mut skipped = 0usize;

        for (a, p) in actual.iter().zip(predicted.iter()) {
            match (position(&labels, a), position(&labels, p)) {
                (Some(i), Some(j)) => matrix[i][j] += 1,
                _ => {
                    trace!("skipping observation (actual: {a:?}, predicted: {p:?}): label not in label set");
                    skipped += 1;
                }
            }
        }

        debug!(
            "built {n}x{n} confusion matrix from {} observations ({skipped} skipped)",
            actual.len()
        );

        Self::new(matrix, labels)
    }

    /// Create from actual and predicted labels with default options
    pub fn from_labels_default(actual: &[L], predicted: &[L]) -> Result<Self> {
        Self::from_labels(actual, predicted, &FromLabelsOptions::default())
    }
}

impl<L: Label, C: Count> ConfusionMatrix<L, C> {
    /// Create from a count grid and the labels indexing it
    ///
    /// Rows are actual classes and columns predicted classes. The grid must
    /// be square and have one row per label.
    pub fn new(matrix: Vec<Vec<C>>, labels: Vec<L>) -> Result<Self> {
        if let Some(row) = matrix.iter().find(|row| row.len() != matrix.len()) {
            return Err(ConfusionError::not_square(matrix.len(), row.len()));
        }
        if labels.len() != matrix.len() {
            return Err(ConfusionError::label_count(matrix.len(), labels.len()));
        }

        Ok(Self { labels, matrix })
    }

    /// Get the raw matrix
    pub fn matrix(&self) -> &Vec<Vec<C>> {
        &self.matrix
    }

    /// Iterate mutably over the rows.
    ///
    /// Rows are handed out as slices, so the grid stays square.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [C]> + '_ {
        self.matrix.iter_mut().map(Vec::as_mut_slice)
    }

    /// Get mutable access to the cell of an (actual, predicted) label pair
    pub fn count_mut<Q>(&mut self, actual: &Q, predicted: &Q) -> Result<&mut C>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        let i = self.index_of(actual)?;
        let j = self.index_of(predicted)?;
        Ok(&mut self.matrix[i][j])
    }

    /// Get the labels, in row/column order
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Take back the grid and labels
    pub fn into_parts(self) -> (Vec<Vec<C>>, Vec<L>) {
        (self.matrix, self.labels)
    }

    /// Number of labels (rows and columns)
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the matrix has no labels
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Get the row/column index of `label`
    ///
    /// Every per-label query goes through this lookup and fails with
    /// [`ConfusionError::UnknownLabel`] when the label is absent.
    pub fn index_of<Q>(&self, label: &Q) -> Result<usize>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.labels
            .iter()
            .position(|l| l.borrow() == label)
            .ok_or_else(|| ConfusionError::UnknownLabel {
                label: format!("{label:?}"),
            })
    }

    /// Get the count for an (actual, predicted) label pair
    pub fn count<Q>(&self, actual: &Q, predicted: &Q) -> Result<C>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        let i = self.index_of(actual)?;
        let j = self.index_of(predicted)?;
        Ok(self.matrix[i][j])
    }

    /// Total number of observations
    ///
    /// Count queries sum in the cell type, so `C` must be wide enough to
    /// hold the grid total; a narrower type overflows. The rate metrics
    /// sum in `f64` and are unaffected.
    pub fn total_count(&self) -> C {
        self.matrix.iter().flatten().copied().sum()
    }

    /// Total number of observations
    #[deprecated(note = "use `total_count`")]
    pub fn total(&self) -> C {
        self.total_count()
    }

    /// Number of correct predictions (the diagonal)
    pub fn true_count(&self) -> C {
        (0..self.len()).map(|i| self.matrix[i][i]).sum()
    }

    /// Number of incorrect predictions (everything off the diagonal)
    pub fn false_count(&self) -> C {
        self.total_count() - self.true_count()
    }

    /// Calculate true positives: actual and predicted are both `label`
    pub fn true_positive_count<Q>(&self, label: &Q) -> Result<C>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.index_of(label).map(|idx| self.tp_at(idx))
    }

    /// Calculate true negatives: neither actual nor predicted is `label`
    pub fn true_negative_count<Q>(&self, label: &Q) -> Result<C>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.index_of(label).map(|idx| self.tn_at(idx))
    }

    /// Calculate false positives: predicted as `label` but wasn't
    pub fn false_positive_count<Q>(&self, label: &Q) -> Result<C>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.index_of(label).map(|idx| self.fp_at(idx))
    }

    /// Calculate false negatives: was `label` but predicted differently
    pub fn false_negative_count<Q>(&self, label: &Q) -> Result<C>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.index_of(label).map(|idx| self.fn_at(idx))
    }

    /// Number of observations whose actual class is `label` (TP + FN)
    pub fn positive_count<Q>(&self, label: &Q) -> Result<C>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.index_of(label).map(|idx| self.tp_at(idx) + self.fn_at(idx))
    }

    /// Number of observations whose actual class is not `label` (TN + FP)
    pub fn negative_count<Q>(&self, label: &Q) -> Result<C>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.index_of(label).map(|idx| self.tn_at(idx) + self.fp_at(idx))
    }

    /// Get the 2x2 one-vs-rest table `[[TP, FN], [FP, TN]]` for `label`
    pub fn confusion_table<Q>(&self, label: &Q) -> Result<[[C; 2]; 2]>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        let idx = self.index_of(label)?;
        Ok([
            [self.tp_at(idx), self.fn_at(idx)],
            [self.fp_at(idx), self.tn_at(idx)],
        ])
    }

    pub(crate) fn tp_at(&self, idx: usize) -> C {
        self.matrix[idx][idx]
    }

    pub(crate) fn fp_at(&self, idx: usize) -> C {
        (0..self.len())
            .filter(|&i| i != idx)
            .map(|i| self.matrix[i][idx])
            .sum()
    }

    pub(crate) fn fn_at(&self, idx: usize) -> C {
        (0..self.len())
            .filter(|&j| j != idx)
            .map(|j| self.matrix[idx][j])
            .sum()
    }

    pub(crate) fn tn_at(&self, idx: usize) -> C {
        (0..self.len())
            .filter(|&i| i != idx)
            .map(|i| {
                (0..self.len())
                    .filter(|&j| j != idx)
                    .map(|j| self.matrix[i][j])
                    .sum::<C>()
            })
            .sum()
    }

    pub(crate) fn support_at(&self, idx: usize) -> C {
        self.matrix[idx].iter().copied().sum()
    }
}

/// Distinct values in first-seen order, compared with [`Label::same_value`]
fn distinct<'a, L: Label>(values: impl Iterator<Item = &'a L>) -> Vec<L> {
    let mut out: Vec<L> = Vec::new();
    for value in values {
        if !out.iter().any(|seen| seen.same_value(value)) {
            out.push(value.clone());
        }
    }
    out
}

fn position<L: PartialEq>(labels: &[L], value: &L) -> Option<usize> {
    labels.iter().position(|l| l == value)
}

impl<L: Label, C: Count> fmt::Display for ConfusionMatrix<L, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix (rows: actual, columns: predicted):")?;

        let names: Vec<String> = self.labels.iter().map(ToString::to_string).collect();
        let cells: Vec<Vec<String>> = self
            .matrix
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        let width = names
            .iter()
            .chain(cells.iter().flatten())
            .map(String::len)
            .max()
            .unwrap_or(0)
            .max(6);

        // Header
        write!(f, "{:>width$}", "")?;
        for name in &names {
            write!(f, " {name:>width$}")?;
        }
        writeln!(f)?;

        // Rows
        for (name, row) in names.iter().zip(cells.iter()) {
            write!(f, "{name:>width$}")?;
            for cell in row {
                write!(f, " {cell:>width$}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
