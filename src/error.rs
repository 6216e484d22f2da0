//! Error types shared across the pipeline, regressor and boundary layers.

use std::path::PathBuf;
use thiserror::Error;

/// Caller-input error for a coordinate field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Missing required field: {0}")]
    Missing(&'static str),

    #[error("Field {0} must be a finite number")]
    NotFinite(&'static str),

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Failures while loading or invoking the depth regressor.
///
/// None of these reach the caller of the pipeline: they select the
/// heuristic fallback and become its `fallbackReason`.
#[derive(Error, Debug)]
pub enum RegressorError {
    #[error("Model file not found at {0}")]
    ModelNotFound(PathBuf),

    #[error("Failed to read model file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse model file {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("Feature vector length mismatch: expected {expected}, got {got}")]
    FeatureMismatch { expected: usize, got: usize },

    #[error("Regressor returned a non-finite value")]
    NonFinite,

    #[error("Inference failed: {0}")]
    Inference(String),
}
