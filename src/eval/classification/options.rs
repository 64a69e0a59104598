//! Options for building a confusion matrix from raw labels

use super::label::Label;
use std::cmp::Ordering;
use std::fmt;

/// Three-way comparator ordering the label list of a confusion matrix.
pub type LabelComparator<L> = Box<dyn Fn(&L, &L) -> Ordering + Send + Sync>;

/// Configuration for [`ConfusionMatrix::from_labels`](super::ConfusionMatrix::from_labels)
///
/// # Example
///
/// ```
/// use confusion_matrix::FromLabelsOptions;
///
/// let options = FromLabelsOptions::default()
///     .with_labels(vec![1, 2, 3])
///     .with_sort(|a: &i32, b: &i32| b.cmp(a));
/// assert_eq!(options.labels(), Some(&[1, 2, 3][..]));
/// assert!(options.has_sort());
/// ```
pub struct FromLabelsOptions<L> {
    /// Label universe; observations with a label outside it are skipped.
    /// `None` infers the labels from the observations.
    labels: Option<Vec<L>>,
    /// Ordering for the final label list; `None` keeps first-seen order.
    sort: Option<LabelComparator<L>>,
}

impl<L> Default for FromLabelsOptions<L> {
    fn default() -> Self {
        Self { labels: None, sort: None }
    }
}

impl<L: Label> FromLabelsOptions<L> {
    /// Create options that infer labels and keep first-seen order
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the matrix to an explicit label set.
    ///
    /// Duplicates are dropped (first occurrence wins). Labels that never
    /// occur still get a row and column, filled with zeros.
    pub fn with_labels(mut self, labels: Vec<L>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Order the label list with a three-way comparator
    pub fn with_sort<F>(mut self, compare: F) -> Self
    where
        F: Fn(&L, &L) -> Ordering + Send + Sync + 'static,
    {
        self.sort = Some(Box::new(compare));
        self
    }

    /// Order the label list ascending by the label's natural order.
    ///
    /// Incomparable pairs (float `NaN`) compare as equal.
    pub fn sorted(self) -> Self
    where
        L: PartialOrd,
    {
        self.with_sort(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Get the explicit label set, if any
    pub fn labels(&self) -> Option<&[L]> {
        self.labels.as_deref()
    }

    /// Whether a comparator is configured
    pub fn has_sort(&self) -> bool {
        self.sort.is_some()
    }

    pub(crate) fn sort_labels(&self, labels: &mut [L]) {
        if let Some(compare) = &self.sort {
            labels.sort_by(|a, b| compare(a, b));
        }
    }
}

impl<L: fmt::Debug> fmt::Debug for FromLabelsOptions<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromLabelsOptions")
            .field("labels", &self.labels)
            .field("sort", &self.sort.as_ref().map(|_| "<comparator>"))
            .finish()
    }
}
