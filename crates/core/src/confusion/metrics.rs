//! Per-class TP/FP/FN, precision and recall derived from the grid.

use serde::Serialize;

use super::matrix::ConfusionMatrix;
use crate::labels::ClassDescriptor;
use crate::types::DbId;

/// Metrics for a single real class.
///
/// `precision` and `recall` are percentages and are `None` when their
/// denominator is zero; they are never coerced to 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassMetrics {
    pub class_id: DbId,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
}

/// `numerator / denominator * 100`, or `None` for a zero denominator.
pub fn percentage(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        return None;
    }
    Some(numerator as f64 / denominator as f64 * 100.0)
}

/// Compute metrics for every real class, in registry order.
///
/// For class `c`:
/// - `TP` is the diagonal cell.
/// - `FP` sums column `c` over every other ground-truth row plus the
///   "No label" row (predictions of `c` without ground truth).
/// - `FN` sums row `c` over every other predicted column plus the
///   "No prediction" column (ground truth of `c` never predicted).
///
/// No averaging across classes is done here.
pub fn compute_class_metrics(
    classes: &[ClassDescriptor],
    matrix: &ConfusionMatrix,
) -> Vec<ClassMetrics> {
    let n = classes.len();

    classes
        .iter()
        .enumerate()
        .map(|(c, class)| {
            let true_positives = matrix.count_at(c, c);

            let predicted_as_other: usize = (0..n)
                .filter(|&g| g != c)
                .map(|g| matrix.count_at(g, c))
                .sum();
            let false_positives = predicted_as_other + matrix.count_at(n, c);

            let missed_as_other: usize = (0..n)
                .filter(|&p| p != c)
                .map(|p| matrix.count_at(c, p))
                .sum();
            let false_negatives = missed_as_other + matrix.count_at(c, n);

            ClassMetrics {
                class_id: class.id,
                true_positives,
                false_positives,
                false_negatives,
                precision: percentage(true_positives, true_positives + false_positives),
                recall: percentage(true_positives, true_positives + false_negatives),
            }
        })
        .collect()
}
