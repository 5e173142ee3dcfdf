//! Drill-down into a single confusion-matrix cell.
//!
//! Re-derives the exact labels that produced a cell's count from the same
//! [`MatchOutcome`] the matrix was built from, grouped by image.

use std::collections::HashMap;

use serde::Serialize;

use super::axis::{ClassAxis, NO_LABEL_NAME, NO_PREDICTION_NAME};
use super::matching::MatchOutcome;
use crate::error::CoreError;
use crate::labels::{ClassDescriptor, EvaluationImage, GroundTruthLabel, PredictionLabel};
use crate::types::DbId;

/// An image together with the labels relevant to the current view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageWithLabels {
    pub image_id: DbId,
    pub file_name: String,
    pub ground_truth_labels: Vec<GroundTruthLabel>,
    pub prediction_labels: Vec<PredictionLabel>,
}

/// Everything behind one cell of the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellDetail {
    pub gt_class_id: ClassAxis,
    pub pred_class_id: ClassAxis,
    pub gt_class_name: String,
    pub pred_class_name: String,
    /// Label occurrences, not images: an image with two qualifying labels
    /// counts twice.
    pub total_count: usize,
    pub images: Vec<ImageWithLabels>,
}

/// Which slice of the match outcome a cell draws from.
enum CellSource {
    /// "No label" x "No prediction": impossible, always empty.
    Corner,
    PredictionOnly(DbId),
    GroundTruthOnly(DbId),
    Matched { gt: DbId, pred: DbId },
}

fn class_name(classes: &[ClassDescriptor], id: DbId) -> Result<String, CoreError> {
    classes
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
        .ok_or(CoreError::NotFound {
            entity: "Class",
            id,
        })
}

/// Resolve the ground-truth axis id. "No prediction" is not a row.
fn resolve_row(classes: &[ClassDescriptor], id: DbId) -> Result<(ClassAxis, String), CoreError> {
    match ClassAxis::from_id(id) {
        ClassAxis::NoLabel => Ok((ClassAxis::NoLabel, NO_LABEL_NAME.to_string())),
        ClassAxis::Class(id) => Ok((ClassAxis::Class(id), class_name(classes, id)?)),
        ClassAxis::NoPrediction => Err(CoreError::NotFound {
            entity: "Class",
            id,
        }),
    }
}

/// Resolve the predicted axis id. "No label" is not a column.
fn resolve_column(
    classes: &[ClassDescriptor],
    id: DbId,
) -> Result<(ClassAxis, String), CoreError> {
    match ClassAxis::from_id(id) {
        ClassAxis::NoPrediction => Ok((ClassAxis::NoPrediction, NO_PREDICTION_NAME.to_string())),
        ClassAxis::Class(id) => Ok((ClassAxis::Class(id), class_name(classes, id)?)),
        ClassAxis::NoLabel => Err(CoreError::NotFound {
            entity: "Class",
            id,
        }),
    }
}

/// Images in order of first appearance, each with the labels collected so far.
struct ImageGroups<'a> {
    file_names: HashMap<DbId, &'a str>,
    index: HashMap<DbId, usize>,
    images: Vec<ImageWithLabels>,
}

impl<'a> ImageGroups<'a> {
    fn new(images: &'a [EvaluationImage]) -> Self {
        Self {
            file_names: images
                .iter()
                .map(|i| (i.id, i.file_name.as_str()))
                .collect(),
            index: HashMap::new(),
            images: Vec::new(),
        }
    }

    fn entry(&mut self, image_id: DbId) -> &mut ImageWithLabels {
        let slot = match self.index.get(&image_id) {
            Some(&slot) => slot,
            None => {
                let file_name = self
                    .file_names
                    .get(&image_id)
                    .map(|s| s.to_string())
                    .unwrap_or_default();
                self.images.push(ImageWithLabels {
                    image_id,
                    file_name,
                    ground_truth_labels: Vec::new(),
                    prediction_labels: Vec::new(),
                });
                self.index.insert(image_id, self.images.len() - 1);
                self.images.len() - 1
            }
        };
        &mut self.images[slot]
    }
}

/// List the labels behind the `(gt_class_id, pred_class_id)` cell.
///
/// Ids are wire ids: `-2` selects the "No label" row and `-1` the
/// "No prediction" column. Any other id must exist in `classes`, otherwise
/// [`CoreError::NotFound`] is returned.
pub fn cell_detail(
    classes: &[ClassDescriptor],
    images: &[EvaluationImage],
    gt_class_id: DbId,
    pred_class_id: DbId,
    outcome: &MatchOutcome<'_>,
) -> Result<CellDetail, CoreError> {
    let (gt_axis, gt_class_name) = resolve_row(classes, gt_class_id)?;
    let (pred_axis, pred_class_name) = resolve_column(classes, pred_class_id)?;

    let source = match (gt_axis, pred_axis) {
        (ClassAxis::Class(gt), ClassAxis::Class(pred)) => CellSource::Matched { gt, pred },
        (ClassAxis::Class(gt), _) => CellSource::GroundTruthOnly(gt),
        (_, ClassAxis::Class(pred)) => CellSource::PredictionOnly(pred),
        _ => CellSource::Corner,
    };

    let mut groups = ImageGroups::new(images);
    let mut total_count = 0usize;

    match source {
        CellSource::Corner => {}
        CellSource::PredictionOnly(class_id) => {
            for label in outcome.pred_only.iter().filter(|p| p.class_id == class_id) {
                groups
                    .entry(label.image_id)
                    .prediction_labels
                    .push((*label).clone());
                total_count += 1;
            }
        }
        CellSource::GroundTruthOnly(class_id) => {
            for label in outcome.gt_only.iter().filter(|g| g.class_id == class_id) {
                groups
                    .entry(label.image_id)
                    .ground_truth_labels
                    .push((*label).clone());
                total_count += 1;
            }
        }
        CellSource::Matched { gt, pred } => {
            for pair in outcome
                .matched
                .iter()
                .filter(|m| m.ground_truth.class_id == gt && m.prediction.class_id == pred)
            {
                let entry = groups.entry(pair.ground_truth.image_id);
                entry.ground_truth_labels.push(pair.ground_truth.clone());
                entry.prediction_labels.push(pair.prediction.clone());
                total_count += 1;
            }
        }
    }

    Ok(CellDetail {
        gt_class_id: gt_axis,
        pred_class_id: pred_axis,
        gt_class_name,
        pred_class_name,
        total_count,
        images: groups.images,
    })
}
