//! Shared value types for the groundwater advisory pipeline
//!
//! - Geography: Coordinate, RegionType, ClimateZone, UrbanClass
//! - Confidence: ConfidenceBreakdown and its component scores
//! - Seasonal: SeasonalPattern, SeasonalAnalysis
//! - Drilling: Urgency, DrillingTimeline, BestDrillingTime
//! - Prediction: PredictionRequest, PredictionResult

mod geo;
mod confidence;
mod seasonal;
mod drilling;
mod prediction;

pub use geo::*;
pub use confidence::*;
pub use seasonal::*;
pub use drilling::*;
pub use prediction::*;
