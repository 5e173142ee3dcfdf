use std::sync::Arc;

use vislab_core::store::EvaluationStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Source of classes, images and labels for the evaluation views.
    pub evaluations: Arc<dyn EvaluationStore>,
}
