//! Handlers for the model evaluation views.
//!
//! All three endpoints recompute from the stored labels on every call; the
//! evaluation set defaults to `TEST` when the query omits it.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use vislab_core::confusion::{CellDetail, ImageEvaluation};
use vislab_core::evaluation::{self, ConfusionSummary, ImageListFilter};
use vislab_core::evaluation_set::EvaluationSet;
use vislab_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// `?evaluation_set=` shared by every evaluation endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct EvaluationSetParams {
    pub evaluation_set: Option<String>,
}

/// Query parameters for the cell drill-down.
#[derive(Debug, Deserialize)]
pub struct CellParams {
    pub evaluation_set: Option<String>,
    pub gt_class_id: Option<DbId>,
    pub pred_class_id: Option<DbId>,
}

/// Query parameters for the image list.
#[derive(Debug, Deserialize)]
pub struct ImageListParams {
    pub evaluation_set: Option<String>,
    pub is_correct: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Resolve the requested evaluation set, falling back to `TEST`.
fn evaluation_set(raw: Option<&str>) -> EvaluationSet {
    match raw.map(str::trim) {
        Some(token) if !token.is_empty() => EvaluationSet::parse(token),
        _ => EvaluationSet::default(),
    }
}

fn required(value: Option<DbId>, name: &str) -> AppResult<DbId> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing query parameter: {name}")))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/models/{model_id}/confusion-matrix
///
/// Axes, grid and per-class precision/recall for one evaluation set.
pub async fn get_confusion_matrix(
    State(state): State<AppState>,
    Path(model_id): Path<DbId>,
    Query(params): Query<EvaluationSetParams>,
) -> AppResult<Json<DataResponse<ConfusionSummary>>> {
    let set = evaluation_set(params.evaluation_set.as_deref());
    let summary = evaluation::confusion_summary(state.evaluations.as_ref(), model_id, &set).await?;

    tracing::info!(
        model_id,
        evaluation_set = %set,
        classes = summary.class_metrics.len(),
        max_count = summary.max_count,
        "Computed confusion matrix"
    );

    Ok(Json(DataResponse { data: summary }))
}

/// GET /api/v1/models/{model_id}/confusion-matrix/cells?gt_class_id=&pred_class_id=
///
/// Labels behind one cell. `-2` addresses the "No label" row and `-1` the
/// "No prediction" column.
pub async fn get_confusion_cell(
    State(state): State<AppState>,
    Path(model_id): Path<DbId>,
    Query(params): Query<CellParams>,
) -> AppResult<Json<DataResponse<CellDetail>>> {
    let gt_class_id = required(params.gt_class_id, "gt_class_id")?;
    let pred_class_id = required(params.pred_class_id, "pred_class_id")?;
    let set = evaluation_set(params.evaluation_set.as_deref());

    let detail = evaluation::confusion_cell(
        state.evaluations.as_ref(),
        model_id,
        &set,
        gt_class_id,
        pred_class_id,
    )
    .await?;

    tracing::info!(
        model_id,
        evaluation_set = %set,
        gt_class_id,
        pred_class_id,
        total = detail.total_count,
        "Loaded confusion cell"
    );

    Ok(Json(DataResponse { data: detail }))
}

/// GET /api/v1/models/{model_id}/evaluation-images
///
/// Every image of the evaluation set with its labels and correctness flag.
/// Supports `?is_correct=`, `?limit=` and `?offset=`.
pub async fn list_evaluation_images(
    State(state): State<AppState>,
    Path(model_id): Path<DbId>,
    Query(params): Query<ImageListParams>,
) -> AppResult<Json<DataResponse<Vec<ImageEvaluation>>>> {
    let set = evaluation_set(params.evaluation_set.as_deref());
    let filter = ImageListFilter {
        is_correct: params.is_correct,
        limit: params.limit,
        offset: params.offset,
    };

    let images =
        evaluation::evaluation_images(state.evaluations.as_ref(), model_id, &set, &filter).await?;

    tracing::info!(
        model_id,
        evaluation_set = %set,
        count = images.len(),
        "Listed evaluation images"
    );

    Ok(Json(DataResponse { data: images }))
}
