//! Request and result types for one prediction cycle.

use serde::{Deserialize, Serialize};

use super::{BestDrillingTime, ConfidenceBreakdown, Coordinate, DrillingTimeline, SeasonalAnalysis};
use crate::error::CoordinateError;

/// Inbound prediction request.
///
/// Only the coordinate drives the advisory pipeline; the optional fields feed
/// feature assembly for the regressor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, alias = "previous_level")]
    pub previous_level: Option<f64>,
    #[serde(default)]
    pub rainfall: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
}

impl PredictionRequest {
    pub fn coordinate(&self) -> Result<Coordinate, CoordinateError> {
        Coordinate::from_fields(self.latitude, self.longitude)
    }
}

/// How the depth figure was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionMethod {
    MlModel,
    HeuristicFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyPrediction {
    pub year: i32,
    /// Years after the request date (1–5)
    pub years_from_now: u32,
    pub water_level: f64,
}

/// Aggregate output of the advisory pipeline. Built fresh per request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub current_water_level: f64,
    pub future_water_level: f64,
    pub is_suitable_for_borewell: bool,
    pub suitability_note: String,
    pub yearly_predictions: Vec<YearlyPrediction>,
    pub location: Coordinate,
    pub interpretation: String,
    pub recommendations: Vec<String>,
    pub seasonal_analysis: SeasonalAnalysis,
    pub drilling_timeline: DrillingTimeline,
    pub best_drilling_time: BestDrillingTime,
    pub confidence: f64,
    /// Absent when the heuristic fallback produced the result.
    pub confidence_breakdown: Option<ConfidenceBreakdown>,
    pub confidence_explanation: Vec<String>,
    pub prediction_method: PredictionMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}
