//! Shared helpers for API integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use vislab_api::config::ServerConfig;
use vislab_api::routes;
use vislab_api::state::AppState;
use vislab_core::labels::{ClassDescriptor, EvaluationImage, GroundTruthLabel, PredictionLabel};
use vislab_core::memory::InMemoryEvaluationStore;
use vislab_core::store::EvaluationStore;
use vislab_core::types::DbId;

pub const MODEL: DbId = 1;
pub const MODEL_WITHOUT_SNAPSHOT: DbId = 2;
pub const SNAPSHOT: DbId = 10;
pub const CLASS_A: DbId = 1;
pub const CLASS_B: DbId = 2;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        db_max_connections: 5,
    }
}

// ---------------------------------------------------------------------------
// Fixture data
// ---------------------------------------------------------------------------

fn class(id: DbId, name: &str, sequence: i32) -> ClassDescriptor {
    ClassDescriptor {
        id,
        name: name.to_string(),
        color: "#FF0000".to_string(),
        sequence,
    }
}

fn image(id: DbId, split: &str) -> EvaluationImage {
    EvaluationImage {
        id,
        file_name: format!("img{id}.png"),
        split: split.to_string(),
    }
}

fn gt(id: DbId, image_id: DbId, position: &str, class_id: DbId) -> GroundTruthLabel {
    GroundTruthLabel {
        id,
        image_id,
        class_id,
        position: Some(position.to_string()),
        created_at: chrono::Utc::now(),
        created_by: None,
    }
}

fn pred(id: DbId, image_id: DbId, position: &str, class_id: DbId, confidence: i32) -> PredictionLabel {
    PredictionLabel {
        id,
        image_id,
        class_id,
        model_id: MODEL,
        position: Some(position.to_string()),
        confidence_rate: confidence,
    }
}

/// Store seeded with two test images and one dev image:
///
/// ```text
/// img1 (test): GT A@0, B@1   pred A@0, A@1
/// img2 (test): GT A@0        pred B@0, B@9
/// img3 (dev):  GT A@0        pred A@0
/// ```
pub fn scenario_store() -> InMemoryEvaluationStore {
    InMemoryEvaluationStore::new()
        .with_model(MODEL, Some(SNAPSHOT))
        .with_model(MODEL_WITHOUT_SNAPSHOT, None)
        .with_classes(SNAPSHOT, vec![class(CLASS_A, "A", 1), class(CLASS_B, "B", 2)])
        .with_images(
            SNAPSHOT,
            vec![image(1, "test"), image(2, "test"), image(3, "dev")],
        )
        .with_ground_truth(
            SNAPSHOT,
            vec![
                gt(1, 1, "0", CLASS_A),
                gt(2, 1, "1", CLASS_B),
                gt(3, 2, "0", CLASS_A),
                gt(4, 3, "0", CLASS_A),
            ],
        )
        .with_predictions(vec![
            pred(1, 1, "0", CLASS_A, 90),
            pred(2, 1, "1", CLASS_A, 60),
            pred(3, 2, "0", CLASS_B, 70),
            pred(4, 2, "9", CLASS_B, 40),
            pred(5, 3, "0", CLASS_A, 99),
        ])
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the application router with the production middleware stack over
/// the given store.
pub fn build_test_app_with(store: Arc<dyn EvaluationStore>) -> Router {
    let state = AppState {
        config: Arc::new(test_config()),
        evaluations: store,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Router over [`scenario_store`].
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(scenario_store()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
