//! Classification report

use super::average::Average;
use super::confusion::ConfusionMatrix;
use super::count::Count;
use super::label::Label;
use super::metrics::MultiClassMetrics;

/// Generate sklearn-style classification report
///
/// One row per label with precision, recall, F1 and support, followed by
/// the macro and weighted averages and the overall accuracy. Undefined
/// ratios print as `NaN`.
///
/// # Example
///
/// ```
/// use confusion_matrix::{classification_report, ConfusionMatrix};
///
/// let cm = ConfusionMatrix::from_labels_default(&["cat", "dog", "cat"], &["cat", "cat", "cat"])?;
/// let report = classification_report(&cm);
/// assert!(report.contains("weighted avg"));
/// # Ok::<(), confusion_matrix::ConfusionError>(())
/// ```
pub fn classification_report<L: Label, C: Count>(cm: &ConfusionMatrix<L, C>) -> String {
    let metrics = MultiClassMetrics::from_confusion_matrix(cm);
    let name_width = cm
        .labels()
        .iter()
        .map(|label| label.to_string().len())
        .chain([Average::Weighted.name().len()])
        .max()
        .unwrap_or(0);

    let mut report = String::new();

    report.push_str(&format!(
        "{:>name_width$} {:>10} {:>10} {:>10} {:>10}\n",
        "", "precision", "recall", "f1-score", "support"
    ));
    report.push_str(&"-".repeat(name_width + 44));
    report.push('\n');

    // Per-label metrics
    for (idx, label) in cm.labels().iter().enumerate() {
        report.push_str(&format!(
            "{:>name_width$} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
            label.to_string(),
            metrics.precision[idx],
            metrics.recall[idx],
            metrics.f1[idx],
            metrics.support[idx]
        ));
    }

    report.push_str(&"-".repeat(name_width + 44));
    report.push('\n');

    // Averages
    let total_support = metrics.total_support();
    for average in [Average::Macro, Average::Weighted] {
        report.push_str(&format!(
            "{:>name_width$} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
            average.name(),
            metrics.precision_avg(average),
            metrics.recall_avg(average),
            metrics.f1_avg(average),
            total_support
        ));
    }

    report.push_str(&format!("\nAccuracy: {:.4}\n", cm.accuracy()));

    report
}
