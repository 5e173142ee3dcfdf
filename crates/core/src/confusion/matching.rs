//! Position-keyed matching of ground-truth labels against predictions.
//!
//! A ground-truth label and a prediction match when they sit on the same
//! image at the same position. Classes do not have to agree: a match with
//! different classes is a misclassification and stays in `matched`.

use std::collections::{HashMap, HashSet};

use crate::error::CoreError;
use crate::labels::{GroundTruthLabel, PredictionLabel};
use crate::types::DbId;

/// Join key shared by both sides: `(image_id, position)`.
pub type MatchKey<'a> = (DbId, Option<&'a str>);

/// A ground-truth label paired with the prediction at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedPair<'a> {
    pub ground_truth: &'a GroundTruthLabel,
    pub prediction: &'a PredictionLabel,
}

/// Result of matching one evaluation set.
///
/// `matched` and `gt_only` follow the ground-truth input order; `pred_only`
/// follows the prediction input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome<'a> {
    pub matched: Vec<MatchedPair<'a>>,
    /// Ground truth with no prediction at its position.
    pub gt_only: Vec<&'a GroundTruthLabel>,
    /// Predictions with no ground truth at their position.
    pub pred_only: Vec<&'a PredictionLabel>,
}

impl MatchOutcome<'_> {
    /// Total number of label occurrences placed in the matrix:
    /// one per matched pair plus one per unmatched label.
    pub fn occurrence_count(&self) -> usize {
        self.matched.len() + self.gt_only.len() + self.pred_only.len()
    }
}

fn gt_key(label: &GroundTruthLabel) -> MatchKey<'_> {
    (label.image_id, label.position.as_deref())
}

fn pred_key(label: &PredictionLabel) -> MatchKey<'_> {
    (label.image_id, label.position.as_deref())
}

fn duplicate_position(side: &str, (image_id, position): MatchKey<'_>) -> CoreError {
    CoreError::Conflict(format!(
        "Duplicate {side} position '{}' on image {image_id}",
        position.unwrap_or("<none>")
    ))
}

/// Split labels into matched pairs and the two unmatched remainders.
///
/// Runs in a single O(G + P) pass. Two labels on the same side sharing an
/// `(image_id, position)` key make the join ambiguous and are rejected with
/// [`CoreError::Conflict`] instead of silently dropping one of them.
pub fn match_labels<'a>(
    ground_truth: &'a [GroundTruthLabel],
    predictions: &'a [PredictionLabel],
) -> Result<MatchOutcome<'a>, CoreError> {
    let mut predictions_by_key: HashMap<MatchKey<'a>, &'a PredictionLabel> =
        HashMap::with_capacity(predictions.len());
    for prediction in predictions {
        let key = pred_key(prediction);
        if predictions_by_key.insert(key, prediction).is_some() {
            return Err(duplicate_position("prediction", key));
        }
    }

    let mut ground_truth_keys: HashSet<MatchKey<'a>> = HashSet::with_capacity(ground_truth.len());
    let mut outcome = MatchOutcome::default();

    for label in ground_truth {
        let key = gt_key(label);
        if !ground_truth_keys.insert(key) {
            return Err(duplicate_position("ground-truth", key));
        }
        match predictions_by_key.get(&key) {
            Some(&prediction) => outcome.matched.push(MatchedPair {
                ground_truth: label,
                prediction,
            }),
            None => outcome.gt_only.push(label),
        }
    }

    outcome.pred_only = predictions
        .iter()
        .filter(|&p| !ground_truth_keys.contains(&pred_key(p)))
        .collect();

    Ok(outcome)
}
