//! Route definitions for model evaluation views.

use axum::routing::get;
use axum::Router;

use crate::handlers::evaluation;
use crate::state::AppState;

/// Routes mounted at `/models`.
///
/// ```text
/// GET /{model_id}/confusion-matrix        -> get_confusion_matrix   (?evaluation_set)
/// GET /{model_id}/confusion-matrix/cells  -> get_confusion_cell     (?evaluation_set, gt_class_id, pred_class_id)
/// GET /{model_id}/evaluation-images       -> list_evaluation_images (?evaluation_set, ?is_correct, ?limit, ?offset)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{model_id}/confusion-matrix",
            get(evaluation::get_confusion_matrix),
        )
        .route(
            "/{model_id}/confusion-matrix/cells",
            get(evaluation::get_confusion_cell),
        )
        .route(
            "/{model_id}/evaluation-images",
            get(evaluation::list_evaluation_images),
        )
}
