//! HTTP handlers for the advisory service.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::envelope::{ApiErrorResponse, ApiResponse, ErrorDetail};
use crate::config::defaults::MAX_BATCH_SIZE;
use crate::config::ServiceConfig;
use crate::features::FeatureLayout;
use crate::pipeline::AdvisoryPipeline;
use crate::types::{PredictionRequest, PredictionResult};

// ============================================================================
// State
// ============================================================================

/// Shared, read-only state for every handler.
#[derive(Clone)]
pub struct ApiState {
    pub pipeline: Arc<AdvisoryPipeline>,
    pub config: Arc<ServiceConfig>,
}

impl ApiState {
    pub fn new(pipeline: AdvisoryPipeline, config: ServiceConfig) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Service info & health
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub model_loaded: bool,
    pub endpoints: Vec<&'static str>,
}

/// GET /
pub async fn service_info(State(state): State<ApiState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "Bhujal Groundwater Advisor",
        version: env!("CARGO_PKG_VERSION"),
        model_loaded: state.pipeline.model_loaded(),
        endpoints: vec![
            "GET /",
            "GET /health",
            "GET /api/v1/model-info",
            "POST /api/v1/predict",
            "POST /api/v1/predict/batch",
        ],
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub timestamp: String,
}

/// GET /health
pub async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_loaded: state.pipeline.model_loaded(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

// ============================================================================
// Model info
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub kind: &'static str,
    pub name: String,
    pub expected_features: usize,
    /// `location`, `extended`, or `unsupported` when no layout matches.
    pub feature_layout: &'static str,
    pub configured_path: String,
}

/// GET /api/v1/model-info
pub async fn model_info(State(state): State<ApiState>) -> Response {
    let Some(regressor) = state.pipeline.regressor() else {
        return ApiErrorResponse::service_unavailable(
            "No model loaded; predictions use the heuristic fallback",
        );
    };

    let feature_layout = match FeatureLayout::for_count(regressor.expected_features()) {
        Some(FeatureLayout::Location) => "location",
        Some(FeatureLayout::Extended) => "extended",
        None => "unsupported",
    };

    ApiResponse::ok(ModelInfo {
        kind: regressor.kind(),
        name: regressor.name().to_string(),
        expected_features: regressor.expected_features(),
        feature_layout,
        configured_path: state.config.model.path.display().to_string(),
    })
}

// ============================================================================
// Prediction
// ============================================================================

/// POST /api/v1/predict
pub async fn predict(
    State(state): State<ApiState>,
    body: Result<Json<PredictionRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return ApiErrorResponse::bad_request(rejection.body_text()),
    };

    let today = Utc::now().date_naive();
    match state.pipeline.predict(&request, today) {
        Ok(result) => {
            info!(
                lat = result.location.latitude,
                lon = result.location.longitude,
                method = ?result.prediction_method,
                depth = result.current_water_level,
                "Prediction served"
            );
            ApiResponse::ok(result)
        }
        Err(e) => {
            debug!(error = %e, "Rejected prediction request");
            ApiErrorResponse::bad_request(e.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub locations: Vec<PredictionRequest>,
}

/// One slot of a batch response. Exactly one of `data` / `error` is set.
#[derive(Debug, Serialize)]
pub struct BatchItem {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PredictionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<BatchItem>,
    pub succeeded: usize,
    pub failed: usize,
}

/// POST /api/v1/predict/batch
///
/// Invalid coordinates fail their own slot only; the rest of the batch is
/// still served.
pub async fn predict_batch(
    State(state): State<ApiState>,
    body: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    let Json(batch) = match body {
        Ok(body) => body,
        Err(rejection) => return ApiErrorResponse::bad_request(rejection.body_text()),
    };

    if batch.locations.is_empty() {
        return ApiErrorResponse::bad_request("Batch must contain at least one location");
    }
    if batch.locations.len() > MAX_BATCH_SIZE {
        warn!(size = batch.locations.len(), "Oversize batch rejected");
        return ApiErrorResponse::bad_request(format!(
            "Batch size {} exceeds the maximum of {MAX_BATCH_SIZE}",
            batch.locations.len()
        ));
    }

    let today = Utc::now().date_naive();
    let pipeline = Arc::clone(&state.pipeline);
    let outcomes = match tokio::task::spawn_blocking(move || {
        pipeline.predict_batch(&batch.locations, today)
    })
    .await
    {
        Ok(outcomes) => outcomes,
        Err(e) => {
            error!(error = %e, "Batch prediction task failed");
            return ApiErrorResponse::internal("Batch prediction failed");
        }
    };

    let results: Vec<BatchItem> = outcomes
        .into_iter()
        .enumerate()
        .map(|(index, outcome)| match outcome {
            Ok(result) => BatchItem {
                index,
                data: Some(result),
                error: None,
            },
            Err(e) => BatchItem {
                index,
                data: None,
                error: Some(ErrorDetail::bad_request(e.to_string())),
            },
        })
        .collect();
    let failed = results.iter().filter(|item| item.error.is_some()).count();
    let succeeded = results.len() - failed;

    info!(succeeded, failed, "Batch prediction served");
    ApiResponse::ok(BatchResponse {
        results,
        succeeded,
        failed,
    })
}

// ============================================================================
// Fallback
// ============================================================================

/// Unknown route.
pub async fn not_found() -> impl IntoResponse {
    ApiErrorResponse::not_found(
        "Endpoint not found. Available: /, /health, /api/v1/model-info, /api/v1/predict, /api/v1/predict/batch",
    )
}
