//! Per-image listing of an evaluation set with a coarse correctness flag.
//!
//! Correctness here compares the multiset of classes on each side and
//! ignores positions entirely, so it can disagree with the position-based
//! matching used by the matrix (e.g. two swapped detections on one image
//! are "correct" here but show up off-diagonal in the matrix).

use std::collections::HashMap;

use serde::Serialize;

use crate::labels::{EvaluationImage, GroundTruthLabel, PredictionLabel};
use crate::types::DbId;

/// One image of the evaluation set with all of its labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEvaluation {
    pub image_id: DbId,
    pub file_name: String,
    pub evaluation_set: String,
    pub ground_truth_labels: Vec<GroundTruthLabel>,
    pub prediction_labels: Vec<PredictionLabel>,
    pub is_correct: bool,
}

/// Whether the sorted class ids on both sides are identical.
///
/// An image missing labels on either side is never correct.
pub fn is_correct(ground_truth: &[GroundTruthLabel], predictions: &[PredictionLabel]) -> bool {
    if ground_truth.is_empty() || predictions.is_empty() {
        return false;
    }
    let mut gt_classes: Vec<DbId> = ground_truth.iter().map(|l| l.class_id).collect();
    let mut pred_classes: Vec<DbId> = predictions.iter().map(|l| l.class_id).collect();
    gt_classes.sort_unstable();
    pred_classes.sort_unstable();
    gt_classes == pred_classes
}

/// Group labels by image id, preserving input order within each image.
pub fn group_by_image<T, F>(labels: &[T], image_id: F) -> HashMap<DbId, Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> DbId,
{
    let mut grouped: HashMap<DbId, Vec<T>> = HashMap::new();
    for label in labels {
        grouped.entry(image_id(label)).or_default().push(label.clone());
    }
    grouped
}

/// Produce one row per image, including images with no labels at all.
pub fn list_images(
    images: &[EvaluationImage],
    ground_truth: &[GroundTruthLabel],
    predictions: &[PredictionLabel],
) -> Vec<ImageEvaluation> {
    let mut gt_by_image = group_by_image(ground_truth, |l| l.image_id);
    let mut pred_by_image = group_by_image(predictions, |l| l.image_id);

    images
        .iter()
        .map(|image| {
            let ground_truth_labels = gt_by_image.remove(&image.id).unwrap_or_default();
            let prediction_labels = pred_by_image.remove(&image.id).unwrap_or_default();
            let is_correct = is_correct(&ground_truth_labels, &prediction_labels);
            ImageEvaluation {
                image_id: image.id,
                file_name: image.file_name.clone(),
                evaluation_set: image.split.clone(),
                ground_truth_labels,
                prediction_labels,
                is_correct,
            }
        })
        .collect()
}
