//! Multi-class classification metrics

use super::average::Average;
use super::confusion::ConfusionMatrix;
use super::count::Count;
use super::label::Label;
use crate::error::Result;

/// Per-label precision, recall and F1 of a confusion matrix, in label order
///
/// Per-label values keep the matrix's `NaN` convention. The macro and
/// weighted averages skip `NaN` entries and are themselves `NaN` only when
/// nothing is left to average.
#[derive(Clone, Debug)]
pub struct MultiClassMetrics<C = usize> {
    /// Per-label precision
    pub precision: Vec<f64>,
    /// Per-label recall
    pub recall: Vec<f64>,
    /// Per-label F1 score
    pub f1: Vec<f64>,
    /// Per-label support (number of actual observations)
    pub support: Vec<C>,
    /// Number of labels
    pub n_classes: usize,
    /// TP, FP, FN summed over all labels, for micro averaging
    pooled: (f64, f64, f64),
}

impl<C: Count> MultiClassMetrics<C> {
    /// Compute metrics from confusion matrix
    pub fn from_confusion_matrix<L: Label>(cm: &ConfusionMatrix<L, C>) -> Self {
        let n_classes = cm.len();
        let mut precision = Vec::with_capacity(n_classes);
        let mut recall = Vec::with_capacity(n_classes);
        let mut f1 = Vec::with_capacity(n_classes);
        let mut support = Vec::with_capacity(n_classes);
        let mut pooled = (0.0, 0.0, 0.0);

        for idx in 0..n_classes {
            let c = cm.counts_at(idx);
            precision.push(c.ppv());
            recall.push(c.tpr());
            f1.push(c.f1());
            support.push(cm.support_at(idx));

            pooled.0 += c.tp;
            pooled.1 += c.fp;
            pooled.2 += c.fn_;
        }

        Self {
            precision,
            recall,
            f1,
            support,
            n_classes,
            pooled,
        }
    }

    /// Get averaged precision
    pub fn precision_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => {
                let (tp, fp, _) = self.pooled;
                tp / (tp + fp)
            }
            _ => self.average_metric(&self.precision, average),
        }
    }

    /// Get averaged recall
    pub fn recall_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => {
                let (tp, _, fn_) = self.pooled;
                tp / (tp + fn_)
            }
            _ => self.average_metric(&self.recall, average),
        }
    }

    /// Get averaged F1
    pub fn f1_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => {
                let (tp, fp, fn_) = self.pooled;
                2.0 * tp / (2.0 * tp + fp + fn_)
            }
            _ => self.average_metric(&self.f1, average),
        }
    }

    /// Total support over all labels
    pub fn total_support(&self) -> C {
        self.support.iter().copied().sum()
    }

    fn average_metric(&self, values: &[f64], average: Average) -> f64 {
        let defined = values
            .iter()
            .zip(self.support.iter())
            .filter(|(v, _)| !v.is_nan());

        match average {
            Average::Macro | Average::Micro => {
                let (sum, n) = defined.fold((0.0, 0usize), |(sum, n), (&v, _)| (sum + v, n + 1));
                sum / n as f64
            }
            Average::Weighted => {
                let (sum, weight) = defined.fold((0.0, 0.0), |(sum, weight), (&v, &s)| {
                    (sum + v * s.as_f64(), weight + s.as_f64())
                });
                sum / weight
            }
        }
    }
}

impl MultiClassMetrics<usize> {
    /// Compute from actual and predicted labels
    pub fn from_labels<L: Label>(actual: &[L], predicted: &[L]) -> Result<Self> {
        let cm = ConfusionMatrix::from_labels_default(actual, predicted)?;
        Ok(Self::from_confusion_matrix(&cm))
    }
}
