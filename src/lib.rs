//! Bhujal: Groundwater Depth Advisory
//!
//! Estimates groundwater depth for a coordinate and turns it into drilling
//! advice that can be explained line by line.
//!
//! ## Architecture
//!
//! - **Classifier** (`geo`): coordinate → region type and climate zone
//! - **Regressor** (`regressor`): opaque depth model loaded once at startup
//! - **Confidence Engine** (`confidence`): capped additive sub-scores with a breakdown
//! - **Projector** (`projection`): current, future and 5-year depth trend
//! - **Seasonal Generator** (`seasonal`): month-by-month relative levels
//! - **Drilling Planner** (`drilling`): urgency, windows, rolling timeline
//! - **Advisory Composer** (`advisory`): suitability, interpretation, recommendations
//! - **Pipeline** (`pipeline`): composes the stages, owns the heuristic fallback

pub mod advisory;
pub mod api;
pub mod confidence;
pub mod config;
pub mod drilling;
pub mod error;
pub mod features;
pub mod geo;
pub mod pipeline;
pub mod projection;
pub mod regressor;
pub mod seasonal;
pub mod types;

// Re-export configuration
pub use config::ServiceConfig;

// Re-export errors
pub use error::{CoordinateError, RegressorError};

// Re-export the pipeline entry point
pub use pipeline::AdvisoryPipeline;
pub use regressor::Regressor;

// Re-export commonly used types
pub use types::{
    ClimateZone, ConfidenceBreakdown, Coordinate, DrillingTimeline, PredictionMethod,
    PredictionRequest, PredictionResult, RegionType, SeasonalAnalysis, Urgency,
};
