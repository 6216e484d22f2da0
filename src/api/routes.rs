//! API route definitions
//!
//! - `/` and `/health` at the root, plain JSON for liveness checks
//! - `/api/v1/*` wrapped in the `{data, meta}` envelope

use axum::{routing::{get, post}, Router};

use super::handlers::{self, ApiState};

/// Routes nested under `/api/v1`.
pub fn api_routes(state: ApiState) -> Router {
    Router::new()
        .route("/model-info", get(handlers::model_info))
        .route("/predict", post(handlers::predict))
        .route("/predict/batch", post(handlers::predict_batch))
        .with_state(state)
}

/// Service info and health at root level.
pub fn root_routes(state: ApiState) -> Router {
    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health))
        .with_state(state)
}
