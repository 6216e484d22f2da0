//! Confidence breakdown types rendered by UI consumers.
//!
//! Every sub-score is a public field so the breakdown can be shown
//! component by component next to the final value.

use serde::{Deserialize, Serialize};

/// Lower bound applied to the summed confidence.
pub const MIN_CONFIDENCE: f64 = 0.40;
/// Upper bound applied to the summed confidence.
pub const MAX_CONFIDENCE: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityScore {
    pub spatial_density: f64,
    pub temporal_frequency: f64,
    pub recentness: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCertaintyScore {
    pub prediction_reasonableness: f64,
    pub feature_quality: f64,
    pub training_similarity: f64,
    /// Zero or negative.
    pub distance_penalty: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalScore {
    pub aquifer: f64,
    pub seasonal: f64,
    pub land_use: f64,
    pub hydrogeological: f64,
    /// Sum of the four factors before capping.
    pub raw_total: f64,
    pub applied_cap: f64,
    /// `min(raw_total, applied_cap)`
    pub total: f64,
}

impl EnvironmentalScore {
    /// Whether the cap reduced the raw sum.
    pub fn was_capped(&self) -> bool {
        self.raw_total > self.applied_cap
    }
}

/// Full confidence decomposition for one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceBreakdown {
    pub base: f64,
    pub data_quality: DataQualityScore,
    pub model_certainty: ModelCertaintyScore,
    pub environmental: EnvironmentalScore,
    pub final_confidence: f64,
}

impl ConfidenceBreakdown {
    /// Unclamped sum of the four component totals.
    pub fn component_sum(&self) -> f64 {
        self.base + self.data_quality.total + self.model_certainty.total + self.environmental.total
    }

    /// Final confidence as a percentage (0–100)
    pub fn percent(&self) -> u8 {
        (self.final_confidence * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
