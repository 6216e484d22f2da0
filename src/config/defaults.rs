//! Service-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Server
// ============================================================================

/// Default bind address for the HTTP service.
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5002";

/// Origins allowed by CORS when the config does not list any.
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5000", "http://localhost:3000"];

/// Largest accepted request body (bytes). A full batch fits comfortably.
pub const MAX_REQUEST_BODY_BYTES: usize = 256 * 1024;

// ============================================================================
// Prediction
// ============================================================================

/// Maximum coordinates per `/api/v1/predict/batch` call.
pub const MAX_BATCH_SIZE: usize = 100;

// ============================================================================
// Model
// ============================================================================

/// Default linear model file, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "groundwater_model.json";

/// Feature count of the location-only layout.
pub const DEFAULT_EXPECTED_FEATURES: usize = crate::features::LOCATION_FEATURE_COUNT;

// ============================================================================
// Config discovery
// ============================================================================

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "BHUJAL_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "bhujal.toml";
