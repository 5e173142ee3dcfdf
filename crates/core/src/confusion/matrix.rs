//! Confusion-matrix construction from a [`MatchOutcome`].
//!
//! Rows are ground-truth classes followed by the "No label" row; columns
//! are predicted classes followed by the "No prediction" column. The
//! bottom-right corner (no label and no prediction) can never occur and is
//! always zero.

use std::collections::HashMap;

use serde::Serialize;

use super::axis::{ground_truth_axis, prediction_axis, AxisClass, ClassAxis};
use super::matching::MatchOutcome;
use crate::labels::ClassDescriptor;
use crate::types::DbId;

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatrixCell {
    pub gt_class_id: ClassAxis,
    pub pred_class_id: ClassAxis,
    pub count: usize,
    /// True only when both axes name the same real class.
    pub is_diagonal: bool,
}

impl MatrixCell {
    fn new(gt_class_id: ClassAxis, pred_class_id: ClassAxis, count: usize) -> Self {
        let is_diagonal = matches!(
            (gt_class_id, pred_class_id),
            (ClassAxis::Class(g), ClassAxis::Class(p)) if g == p
        );
        Self {
            gt_class_id,
            pred_class_id,
            count,
            is_diagonal,
        }
    }
}

/// A fully computed confusion matrix.
///
/// `cells[row][col]` lines up with `gt_axis[row]` and `pred_axis[col]`.
/// When the evaluation set has no images, or the snapshot has no classes,
/// `cells` is empty but both axes are still populated so legends can be
/// drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub gt_axis: Vec<AxisClass>,
    pub pred_axis: Vec<AxisClass>,
    pub cells: Vec<Vec<MatrixCell>>,
    /// Largest count in the grid; used for heat-map colour scaling.
    pub max_count: usize,
    /// Labels whose class is missing from the registry and could not be
    /// placed on an axis.
    #[serde(skip)]
    pub unregistered_labels: usize,
}

impl ConfusionMatrix {
    /// Matrix for an evaluation set with no images.
    pub fn empty(classes: &[ClassDescriptor]) -> Self {
        Self {
            gt_axis: ground_truth_axis(classes),
            pred_axis: prediction_axis(classes),
            cells: Vec::new(),
            max_count: 0,
            unregistered_labels: 0,
        }
    }

    /// Aggregate matched and unmatched labels into a grid.
    pub fn build(classes: &[ClassDescriptor], outcome: &MatchOutcome<'_>) -> Self {
        let n = classes.len();
        let index: HashMap<DbId, usize> = classes
            .iter()
            .enumerate()
            .map(|(i, class)| (class.id, i))
            .collect();

        // Row `n` is "No label", column `n` is "No prediction".
        let mut counts = vec![vec![0usize; n + 1]; n + 1];
        let mut unregistered_labels = 0usize;

        for pair in &outcome.matched {
            match (
                index.get(&pair.ground_truth.class_id),
                index.get(&pair.prediction.class_id),
            ) {
                (Some(&row), Some(&col)) => counts[row][col] += 1,
                _ => unregistered_labels += 1,
            }
        }
        for label in &outcome.gt_only {
            match index.get(&label.class_id) {
                Some(&row) => counts[row][n] += 1,
                None => unregistered_labels += 1,
            }
        }
        for label in &outcome.pred_only {
            match index.get(&label.class_id) {
                Some(&col) => counts[n][col] += 1,
                None => unregistered_labels += 1,
            }
        }

        // Without real classes only the corner remains, which is never
        // populated, so the grid is reported empty like a set with no images.
        if n == 0 {
            return Self {
                unregistered_labels,
                ..Self::empty(classes)
            };
        }

        let gt_axis = ground_truth_axis(classes);
        let pred_axis = prediction_axis(classes);

        let cells: Vec<Vec<MatrixCell>> = gt_axis
            .iter()
            .zip(&counts)
            .map(|(gt, row)| {
                pred_axis
                    .iter()
                    .zip(row)
                    .map(|(pred, &count)| MatrixCell::new(gt.id, pred.id, count))
                    .collect()
            })
            .collect();

        let max_count = counts.iter().flatten().copied().max().unwrap_or(0);

        Self {
            gt_axis,
            pred_axis,
            cells,
            max_count,
            unregistered_labels,
        }
    }

    /// Count at `(row, col)`, or 0 when the grid is empty.
    pub fn count_at(&self, row: usize, col: usize) -> usize {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .map_or(0, |cell| cell.count)
    }

    /// Count for an axis pair, or 0 when either axis entry is absent.
    #[cfg(test)]
    pub(crate) fn count(&self, gt: ClassAxis, pred: ClassAxis) -> usize {
        let row = self.gt_axis.iter().position(|a| a.id == gt);
        let col = self.pred_axis.iter().position(|a| a.id == pred);
        match (row, col) {
            (Some(row), Some(col)) => self.count_at(row, col),
            _ => 0,
        }
    }
}
