//! Rates and scores derived from the per-label counts
//!
//! Every metric is a ratio of TP/TN/FP/FN evaluated in `f64`. A zero
//! denominator yields `NaN` (or an infinity for a non-zero numerator), never
//! an error, so scoring many labels in a batch cannot fail on one degenerate
//! class.

use super::confusion::ConfusionMatrix;
use super::count::Count;
use super::label::Label;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// One-vs-rest counts of a single label, widened to `f64`
#[derive(Clone, Copy, Debug)]
pub(crate) struct Counts {
    pub(crate) tp: f64,
    pub(crate) tn: f64,
    pub(crate) fp: f64,
    pub(crate) fn_: f64,
}

impl Counts {
    pub(crate) fn tpr(self) -> f64 {
        self.tp / (self.tp + self.fn_)
    }

    pub(crate) fn tnr(self) -> f64 {
        self.tn / (self.tn + self.fp)
    }

    pub(crate) fn ppv(self) -> f64 {
        self.tp / (self.tp + self.fp)
    }

    pub(crate) fn npv(self) -> f64 {
        self.tn / (self.tn + self.fn_)
    }

    pub(crate) fn fdr(self) -> f64 {
        self.fp / (self.fp + self.tp)
    }

    pub(crate) fn for_(self) -> f64 {
        self.fn_ / (self.fn_ + self.tp)
    }

    pub(crate) fn f1(self) -> f64 {
        2.0 * self.tp / (2.0 * self.tp + self.fp + self.fn_)
    }

    pub(crate) fn mcc(self) -> f64 {
        let Self { tp, tn, fp, fn_ } = self;
        (tp * tn - fp * fn_) / ((tp + fp) * (tp + fn_) * (tn + fp) * (tn + fn_)).sqrt()
    }
}

impl<L: Label, C: Count> ConfusionMatrix<L, C> {
    /// One-vs-rest counts for the label at `idx`, summed in `f64`
    pub(crate) fn counts_at(&self, idx: usize) -> Counts {
        let mut counts = Counts {
            tp: 0.0,
            tn: 0.0,
            fp: 0.0,
            fn_: 0.0,
        };
        for (i, row) in self.matrix().iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                let value = cell.as_f64();
                match (i == idx, j == idx) {
                    (true, true) => counts.tp += value,
                    (true, false) => counts.fn_ += value,
                    (false, true) => counts.fp += value,
                    (false, false) => counts.tn += value,
                }
            }
        }
        counts
    }

    fn counts<Q>(&self, label: &Q) -> Result<Counts>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.index_of(label).map(|idx| self.counts_at(idx))
    }

    /// Ratio of correct predictions to all predictions
    ///
    /// `NaN` for an empty matrix. Cells are summed in `f64`, as for every
    /// rate below.
    pub fn accuracy(&self) -> f64 {
        let mut correct = 0.0;
        let mut total = 0.0;
        for (i, row) in self.matrix().iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                let value = cell.as_f64();
                total += value;
                if i == j {
                    correct += value;
                }
            }
        }
        correct / total
    }

    /// True positive rate a.k.a. sensitivity or recall: TP / (TP + FN)
    ///
    /// <https://en.wikipedia.org/wiki/Sensitivity_and_specificity>
    pub fn true_positive_rate<Q>(&self, label: &Q) -> Result<f64>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.counts(label).map(Counts::tpr)
    }

    /// True negative rate a.k.a. specificity: TN / (TN + FP)
    pub fn true_negative_rate<Q>(&self, label: &Q) -> Result<f64>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.counts(label).map(Counts::tnr)
    }

    /// Positive predictive value a.k.a. precision: TP / (TP + FP)
    ///
    /// <https://en.wikipedia.org/wiki/Positive_and_negative_predictive_values>
    pub fn positive_predictive_value<Q>(&self, label: &Q) -> Result<f64>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.counts(label).map(Counts::ppv)
    }

    /// Negative predictive value: TN / (TN + FN)
    pub fn negative_predictive_value<Q>(&self, label: &Q) -> Result<f64>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.counts(label).map(Counts::npv)
    }

    /// False negative rate a.k.a. miss rate: 1 - TPR
    pub fn false_negative_rate<Q>(&self, label: &Q) -> Result<f64>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.counts(label).map(|c| 1.0 - c.tpr())
    }

    /// False positive rate a.k.a. fall-out: 1 - TNR
    pub fn false_positive_rate<Q>(&self, label: &Q) -> Result<f64>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.counts(label).map(|c| 1.0 - c.tnr())
    }

    /// False discovery rate: FP / (FP + TP)
    pub fn false_discovery_rate<Q>(&self, label: &Q) -> Result<f64>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.counts(label).map(Counts::fdr)
    }

    /// False omission rate: FN / (FN + TP)
    pub fn false_omission_rate<Q>(&self, label: &Q) -> Result<f64>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.counts(label).map(Counts::for_)
    }

    /// F1 score: 2TP / (2TP + FP + FN)
    ///
    /// <https://en.wikipedia.org/wiki/F1_score>
    pub fn f1_score<Q>(&self, label: &Q) -> Result<f64>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.counts(label).map(Counts::f1)
    }

    /// Matthews correlation coefficient
    ///
    /// (TP·TN - FP·FN) / sqrt((TP+FP)(TP+FN)(TN+FP)(TN+FN)); `NaN` when any
    /// of the four sums is zero.
    ///
    /// <https://en.wikipedia.org/wiki/Matthews_correlation_coefficient>
    pub fn matthews_correlation_coefficient<Q>(&self, label: &Q) -> Result<f64>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.counts(label).map(Counts::mcc)
    }

    /// Informedness (Youden's J): TPR + TNR - 1
    pub fn informedness<Q>(&self, label: &Q) -> Result<f64>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.counts(label).map(|c| c.tpr() + c.tnr() - 1.0)
    }

    /// Markedness: PPV + NPV - 1
    pub fn markedness<Q>(&self, label: &Q) -> Result<f64>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.counts(label).map(|c| c.ppv() + c.npv() - 1.0)
    }

    /// Compute every per-label count and metric in one pass
    ///
    /// The count fields are summed in `C`, see [`total_count`](Self::total_count).
    pub fn label_metrics<Q>(&self, label: &Q) -> Result<LabelMetrics<C>>
    where
        L: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        self.index_of(label).map(|idx| self.label_metrics_at(idx))
    }

    pub(crate) fn label_metrics_at(&self, idx: usize) -> LabelMetrics<C> {
        let c = self.counts_at(idx);
        LabelMetrics {
            true_positive: self.tp_at(idx),
            true_negative: self.tn_at(idx),
            false_positive: self.fp_at(idx),
            false_negative: self.fn_at(idx),
            true_positive_rate: c.tpr(),
            true_negative_rate: c.tnr(),
            positive_predictive_value: c.ppv(),
            negative_predictive_value: c.npv(),
            false_negative_rate: 1.0 - c.tpr(),
            false_positive_rate: 1.0 - c.tnr(),
            false_discovery_rate: c.fdr(),
            false_omission_rate: c.for_(),
            f1_score: c.f1(),
            matthews_correlation_coefficient: c.mcc(),
            informedness: c.tpr() + c.tnr() - 1.0,
            markedness: c.ppv() + c.npv() - 1.0,
        }
    }
}

/// Snapshot of every one-vs-rest count and metric for a single label
///
/// Metric fields follow the same `NaN` convention as the
/// [`ConfusionMatrix`] methods they mirror.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelMetrics<C = usize> {
    pub true_positive: C,
    pub true_negative: C,
    pub false_positive: C,
    pub false_negative: C,
    pub true_positive_rate: f64,
    pub true_negative_rate: f64,
    pub positive_predictive_value: f64,
    pub negative_predictive_value: f64,
    pub false_negative_rate: f64,
    pub false_positive_rate: f64,
    pub false_discovery_rate: f64,
    pub false_omission_rate: f64,
    pub f1_score: f64,
    pub matthews_correlation_coefficient: f64,
    pub informedness: f64,
    pub markedness: f64,
}
