pub mod evaluation;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /models/{model_id}/confusion-matrix          summary
/// /models/{model_id}/confusion-matrix/cells    cell drill-down
/// /models/{model_id}/evaluation-images         per-image list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/models", evaluation::router())
}
