//! Model evaluation views: confusion summary, cell drill-down, image list.
//!
//! Each call loads its own data through an [`EvaluationStore`], runs the
//! pure engine in [`crate::confusion`] and returns a plain value. Nothing
//! is cached; results are recomputed from the labels on every request.

use serde::Serialize;

use crate::confusion::{
    cell_detail, compute_class_metrics, list_images, match_labels, AxisClass, CellDetail,
    ClassMetrics, ConfusionMatrix, ImageEvaluation, MatrixCell,
};
use crate::error::CoreError;
use crate::evaluation_set::EvaluationSet;
use crate::labels::{ClassDescriptor, EvaluationImage, GroundTruthLabel, PredictionLabel};
use crate::store::EvaluationStore;
use crate::types::DbId;

/// Default page size for the image list.
pub const DEFAULT_IMAGE_LIMIT: i64 = 100;

/// Maximum page size for the image list.
pub const MAX_IMAGE_LIMIT: i64 = 500;

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Summary view: both axes, the grid and per-class metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfusionSummary {
    pub model_id: DbId,
    pub evaluation_set: EvaluationSet,
    pub gt_classes: Vec<AxisClass>,
    pub pred_classes: Vec<AxisClass>,
    pub matrix: Vec<Vec<MatrixCell>>,
    pub class_metrics: Vec<ClassMetrics>,
    pub max_count: usize,
}

/// Filtering and paging for the image list.
#[derive(Debug, Clone, Default)]
pub struct ImageListFilter {
    /// Keep only images whose correctness flag equals this value.
    pub is_correct: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ImageListFilter {
    fn limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_IMAGE_LIMIT)
            .clamp(1, MAX_IMAGE_LIMIT) as usize
    }

    fn offset(&self) -> usize {
        self.offset.unwrap_or(0).max(0) as usize
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Everything one evaluation request needs, fetched fresh.
struct EvaluationData {
    classes: Vec<ClassDescriptor>,
    images: Vec<EvaluationImage>,
    ground_truth: Vec<GroundTruthLabel>,
    predictions: Vec<PredictionLabel>,
}

async fn load(
    store: &dyn EvaluationStore,
    model_id: DbId,
    evaluation_set: &EvaluationSet,
) -> Result<EvaluationData, CoreError> {
    let snapshot_id = store.resolve_snapshot_id(model_id).await?;
    let classes = store.list_classes(snapshot_id).await?;
    let images = store
        .list_images(snapshot_id, evaluation_set.split_name())
        .await?;

    if images.is_empty() {
        tracing::debug!(
            model_id,
            snapshot_id,
            evaluation_set = %evaluation_set,
            "No images in evaluation set"
        );
        return Ok(EvaluationData {
            classes,
            images,
            ground_truth: Vec::new(),
            predictions: Vec::new(),
        });
    }

    let image_ids: Vec<DbId> = images.iter().map(|i| i.id).collect();
    let ground_truth = store
        .list_ground_truth_labels(snapshot_id, &image_ids)
        .await?;
    let predictions = store.list_prediction_labels(model_id, &image_ids).await?;

    Ok(EvaluationData {
        classes,
        images,
        ground_truth,
        predictions,
    })
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Build the confusion summary for a model on one evaluation set.
pub async fn confusion_summary(
    store: &dyn EvaluationStore,
    model_id: DbId,
    evaluation_set: &EvaluationSet,
) -> Result<ConfusionSummary, CoreError> {
    let data = load(store, model_id, evaluation_set).await?;

    let matrix = if data.images.is_empty() {
        ConfusionMatrix::empty(&data.classes)
    } else {
        let outcome = match_labels(&data.ground_truth, &data.predictions)?;
        tracing::debug!(
            model_id,
            occurrences = outcome.occurrence_count(),
            matched = outcome.matched.len(),
            gt_only = outcome.gt_only.len(),
            pred_only = outcome.pred_only.len(),
            "Labels matched"
        );
        ConfusionMatrix::build(&data.classes, &outcome)
    };

    if matrix.unregistered_labels > 0 {
        tracing::warn!(
            model_id,
            evaluation_set = %evaluation_set,
            unregistered = matrix.unregistered_labels,
            "Labels reference classes outside the snapshot registry"
        );
    }

    let class_metrics = compute_class_metrics(&data.classes, &matrix);

    Ok(ConfusionSummary {
        model_id,
        evaluation_set: evaluation_set.clone(),
        gt_classes: matrix.gt_axis,
        pred_classes: matrix.pred_axis,
        matrix: matrix.cells,
        class_metrics,
        max_count: matrix.max_count,
    })
}

/// List the labels behind one matrix cell.
pub async fn confusion_cell(
    store: &dyn EvaluationStore,
    model_id: DbId,
    evaluation_set: &EvaluationSet,
    gt_class_id: DbId,
    pred_class_id: DbId,
) -> Result<CellDetail, CoreError> {
    let data = load(store, model_id, evaluation_set).await?;
    let outcome = match_labels(&data.ground_truth, &data.predictions)?;
    cell_detail(
        &data.classes,
        &data.images,
        gt_class_id,
        pred_class_id,
        &outcome,
    )
}

/// List every image of the evaluation set with its labels and correctness.
pub async fn evaluation_images(
    store: &dyn EvaluationStore,
    model_id: DbId,
    evaluation_set: &EvaluationSet,
    filter: &ImageListFilter,
) -> Result<Vec<ImageEvaluation>, CoreError> {
    let data = load(store, model_id, evaluation_set).await?;

    let rows = list_images(&data.images, &data.ground_truth, &data.predictions)
        .into_iter()
        .filter(|row| filter.is_correct.map_or(true, |wanted| row.is_correct == wanted))
        .skip(filter.offset())
        .take(filter.limit())
        .collect();

    Ok(rows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::confusion::fixtures::{gt, image, pred, scenario, CLASS_A, CLASS_B};
    use crate::confusion::{ClassAxis, NO_LABEL_ID};
    use crate::memory::InMemoryEvaluationStore;

    const MODEL: DbId = 1;
    const SNAPSHOT: DbId = 10;

    fn scenario_store() -> InMemoryEvaluationStore {
        let s = scenario();
        InMemoryEvaluationStore::new()
            .with_model(MODEL, Some(SNAPSHOT))
            .with_model(2, None)
            .with_classes(SNAPSHOT, s.classes)
            .with_images(SNAPSHOT, s.images)
            .with_images(SNAPSHOT, vec![image(3, "training")])
            .with_ground_truth(SNAPSHOT, s.ground_truth)
            .with_ground_truth(SNAPSHOT, vec![gt(4, 3, "0", CLASS_A)])
            .with_predictions(s.predictions)
            .with_predictions(vec![pred(5, 3, "0", CLASS_A, 99)])
    }

    // -- confusion_summary ----------------------------------------------------

    #[tokio::test]
    async fn summary_for_scenario() {
        let store = scenario_store();
        let summary = confusion_summary(&store, MODEL, &EvaluationSet::Test)
            .await
            .unwrap();

        assert_eq!(summary.gt_classes.len(), 3);
        assert_eq!(summary.pred_classes.len(), 3);
        assert_eq!(summary.matrix[0][0].count, 1);
        assert_eq!(summary.matrix[1][0].count, 1);
        assert_eq!(summary.matrix[0][1].count, 1);
        assert_eq!(summary.matrix[1][1].count, 0);
        assert_eq!(summary.matrix[2][1].count, 1);
        assert_eq!(summary.matrix[2][2].count, 0);
        assert_eq!(summary.max_count, 1);
        assert_eq!(summary.class_metrics[0].precision, Some(50.0));
        assert_eq!(summary.class_metrics[1].recall, Some(0.0));
    }

    #[tokio::test]
    async fn summary_only_uses_requested_split() {
        let store = scenario_store();
        let summary = confusion_summary(&store, MODEL, &EvaluationSet::Train)
            .await
            .unwrap();

        assert_eq!(summary.matrix[0][0].count, 1);
        assert_eq!(summary.class_metrics[0].precision, Some(100.0));
        assert_eq!(summary.class_metrics[1].precision, None);
        assert_eq!(summary.class_metrics[1].recall, None);
    }

    #[tokio::test]
    async fn summary_with_no_images_keeps_axes() {
        let store = scenario_store();
        let summary = confusion_summary(&store, MODEL, &EvaluationSet::Dev)
            .await
            .unwrap();

        assert!(summary.matrix.is_empty());
        assert_eq!(summary.gt_classes.len(), 3);
        assert_eq!(summary.pred_classes.len(), 3);
        assert_eq!(summary.max_count, 0);
        assert!(summary.class_metrics.iter().all(|m| m.precision.is_none()));
    }

    #[tokio::test]
    async fn summary_without_classes_has_empty_grid() {
        let store = InMemoryEvaluationStore::new()
            .with_model(MODEL, Some(SNAPSHOT))
            .with_images(SNAPSHOT, vec![image(1, "test")])
            .with_ground_truth(SNAPSHOT, vec![gt(1, 1, "0", CLASS_A)])
            .with_predictions(vec![pred(1, 1, "0", CLASS_A, 80)]);

        let summary = confusion_summary(&store, MODEL, &EvaluationSet::Test)
            .await
            .unwrap();

        assert!(summary.matrix.is_empty());
        assert_eq!(summary.gt_classes.len(), 1);
        assert_eq!(summary.gt_classes[0].id, ClassAxis::NoLabel);
        assert_eq!(summary.pred_classes.len(), 1);
        assert_eq!(summary.pred_classes[0].id, ClassAxis::NoPrediction);
        assert!(summary.class_metrics.is_empty());
        assert_eq!(summary.max_count, 0);
    }

    #[tokio::test]
    async fn unknown_set_degrades_to_no_images() {
        let store = scenario_store();
        let set = EvaluationSet::parse("VALIDATION");
        let summary = confusion_summary(&store, MODEL, &set).await.unwrap();
        assert!(summary.matrix.is_empty());
    }

    #[tokio::test]
    async fn unknown_model_is_not_found() {
        let store = scenario_store();
        let result = confusion_summary(&store, 404, &EvaluationSet::Test).await;
        assert_matches!(result, Err(CoreError::NotFound { entity: "Model", id: 404 }));
    }

    #[tokio::test]
    async fn model_without_snapshot_fails_precondition() {
        let store = scenario_store();
        let result = confusion_summary(&store, 2, &EvaluationSet::Test).await;
        assert_matches!(result, Err(CoreError::PreconditionFailed(_)));
    }

    #[tokio::test]
    async fn duplicate_positions_abort_summary() {
        let store = scenario_store().with_predictions(vec![pred(9, 1, "0", CLASS_B, 10)]);
        let result = confusion_summary(&store, MODEL, &EvaluationSet::Test).await;
        assert_matches!(result, Err(CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn summary_is_idempotent() {
        let store = scenario_store();
        let first = confusion_summary(&store, MODEL, &EvaluationSet::Test)
            .await
            .unwrap();
        let second = confusion_summary(&store, MODEL, &EvaluationSet::Test)
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn other_models_predictions_are_ignored() {
        let store = scenario_store()
            .with_model(3, Some(SNAPSHOT))
            .with_predictions(vec![PredictionLabel {
                model_id: 3,
                ..pred(20, 1, "5", CLASS_B, 50)
            }]);
        let summary = confusion_summary(&store, MODEL, &EvaluationSet::Test)
            .await
            .unwrap();
        assert_eq!(summary.matrix[2][1].count, 1);
    }

    // -- confusion_cell -------------------------------------------------------

    #[tokio::test]
    async fn cell_for_no_label_row() {
        let store = scenario_store();
        let detail = confusion_cell(&store, MODEL, &EvaluationSet::Test, NO_LABEL_ID, CLASS_B)
            .await
            .unwrap();
        assert_eq!(detail.gt_class_id, ClassAxis::NoLabel);
        assert_eq!(detail.total_count, 1);
        assert_eq!(detail.images[0].file_name, "img2.png");
    }

    #[tokio::test]
    async fn cell_with_unknown_class_is_not_found() {
        let store = scenario_store();
        let result = confusion_cell(&store, MODEL, &EvaluationSet::Test, CLASS_A, 77).await;
        assert_matches!(result, Err(CoreError::NotFound { entity: "Class", id: 77 }));
    }

    #[tokio::test]
    async fn cell_on_empty_set_is_empty() {
        let store = scenario_store();
        let detail = confusion_cell(&store, MODEL, &EvaluationSet::Dev, CLASS_A, CLASS_A)
            .await
            .unwrap();
        assert_eq!(detail.total_count, 0);
        assert!(detail.images.is_empty());
    }

    // -- evaluation_images ----------------------------------------------------

    #[tokio::test]
    async fn images_listed_per_split() {
        let store = scenario_store();
        let rows = evaluation_images(
            &store,
            MODEL,
            &EvaluationSet::Train,
            &ImageListFilter::default(),
        )
        .await
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].evaluation_set, "training");
        assert!(rows[0].is_correct);
    }

    #[tokio::test]
    async fn images_filtered_by_correctness() {
        let store = scenario_store();
        let filter = ImageListFilter {
            is_correct: Some(true),
            ..Default::default()
        };
        let rows = evaluation_images(&store, MODEL, &EvaluationSet::Test, &filter)
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn images_paginated() {
        let store = scenario_store();
        let filter = ImageListFilter {
            is_correct: None,
            limit: Some(1),
            offset: Some(1),
        };
        let rows = evaluation_images(&store, MODEL, &EvaluationSet::Test, &filter)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].image_id, 2);
    }

    #[test]
    fn filter_clamps_limit_and_offset() {
        let filter = ImageListFilter {
            is_correct: None,
            limit: Some(10_000),
            offset: Some(-5),
        };
        assert_eq!(filter.limit(), MAX_IMAGE_LIMIT as usize);
        assert_eq!(filter.offset(), 0);

        let filter = ImageListFilter {
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(filter.limit(), 1);
        assert_eq!(ImageListFilter::default().limit(), DEFAULT_IMAGE_LIMIT as usize);
    }
}
