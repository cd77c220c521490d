//! Evaluation metrics for predicted labels.

/// A metric over predicted vs. true labels.
pub trait Metric {
    /// Compute the metric value for parallel prediction/label slices.
    fn compute(&self, preds: &[u8], labels: &[u8]) -> f64;

    /// Whether higher values indicate better performance.
    fn higher_is_better(&self) -> bool;

    /// Name of the metric (for logging).
    fn name(&self) -> &'static str;
}

/// Fraction of predictions that match the true label.
///
/// Higher is better; an empty input scores 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accuracy;

impl Metric for Accuracy {
    fn compute(&self, preds: &[u8], labels: &[u8]) -> f64 {
        debug_assert_eq!(preds.len(), labels.len());
        if preds.is_empty() {
            return 0.0;
        }
        correct_count(preds, labels) as f64 / preds.len() as f64
    }

    fn higher_is_better(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "accuracy"
    }
}

/// Number of predictions that match the true label.
pub fn correct_count(preds: &[u8], labels: &[u8]) -> usize {
    preds
        .iter()
        .zip(labels.iter())
        .filter(|(p, l)| p == l)
        .count()
}
