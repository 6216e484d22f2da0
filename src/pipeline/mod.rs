//! Advisory pipeline
//!
//! ```text
//! STAGE 1: Region/climate classification
//! STAGE 2: Feature assembly + regressor (or heuristic fallback)
//! STAGE 3: Level projection (current, future, 5-year trend)
//! STAGE 4: Confidence scoring (model path only)
//! STAGE 5: Seasonal analysis
//! STAGE 6: Drilling plan + best month
//! STAGE 7: Suitability, interpretation, recommendations
//! ```
//!
//! Every stage is a pure function of its inputs. The only shared state is the
//! read-only regressor handle. The calendar date is an explicit argument so
//! results are reproducible.

pub mod fallback;

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{CoordinateError, RegressorError};
use crate::features::{assemble, FeatureLayout, SiteInputs, LOCATION_FEATURE_COUNT};
use crate::projection::{project, PROJECTION_YEARS};
use crate::regressor::Regressor;
use crate::types::{
    ClimateZone, Coordinate, PredictionMethod, PredictionRequest, PredictionResult, RegionType,
    YearlyPrediction,
};
use crate::{advisory, confidence, drilling, geo, seasonal};

/// Levels shared by the model and fallback paths once depth is known.
struct Levels {
    current: f64,
    future: f64,
    yearly: [f64; PROJECTION_YEARS],
}

pub struct AdvisoryPipeline {
    regressor: Option<Arc<Regressor>>,
}

impl AdvisoryPipeline {
    pub fn new(regressor: Option<Arc<Regressor>>) -> Self {
        Self { regressor }
    }

    /// Pipeline that always takes the heuristic path.
    pub fn without_model() -> Self {
        Self { regressor: None }
    }

    pub fn model_loaded(&self) -> bool {
        self.regressor.is_some()
    }

    pub fn regressor(&self) -> Option<&Regressor> {
        self.regressor.as_deref()
    }

    /// Validate the request coordinate and run the full pipeline.
    pub fn predict(
        &self,
        request: &PredictionRequest,
        today: NaiveDate,
    ) -> Result<PredictionResult, CoordinateError> {
        let coord = request.coordinate()?;
        let inputs = SiteInputs::from_request(request, today.year());
        Ok(self.predict_coordinate(&coord, &inputs, today))
    }

    /// Run many requests in parallel. Results keep the input order.
    pub fn predict_batch(
        &self,
        requests: &[PredictionRequest],
        today: NaiveDate,
    ) -> Vec<Result<PredictionResult, CoordinateError>> {
        requests
            .par_iter()
            .map(|request| self.predict(request, today))
            .collect()
    }

    pub fn predict_coordinate(
        &self,
        coord: &Coordinate,
        inputs: &SiteInputs,
        today: NaiveDate,
    ) -> PredictionResult {
        // STAGE 1
        let (region, climate) = geo::classify(coord);
        debug!(
            lat = coord.latitude,
            lon = coord.longitude,
            region = ?region,
            climate = ?climate,
            "Stage 1: location classified"
        );

        // STAGE 2
        match self.run_regressor(coord, inputs) {
            Ok((raw, features)) => {
                debug!(raw, "Stage 2: regressor output");
                model_result(coord, region, climate, raw, &features, today)
            }
            Err(reason) => {
                warn!(
                    lat = coord.latitude,
                    lon = coord.longitude,
                    reason = %reason,
                    "Regressor unavailable, using heuristic fallback"
                );
                fallback_result(coord, region, climate, reason, today)
            }
        }
    }

    fn run_regressor(
        &self,
        coord: &Coordinate,
        inputs: &SiteInputs,
    ) -> Result<(f64, Vec<f64>), String> {
        let regressor = self
            .regressor
            .as_deref()
            .ok_or_else(|| "Model not loaded".to_string())?;

        let expected = regressor.expected_features();
        let layout = FeatureLayout::for_count(expected).ok_or_else(|| {
            failure(&RegressorError::FeatureMismatch {
                expected,
                got: LOCATION_FEATURE_COUNT,
            })
        })?;

        let features = assemble(layout, coord, inputs);
        let raw = regressor.predict(&features).map_err(|e| failure(&e))?;
        Ok((raw, features))
    }
}

fn model_result(
    coord: &Coordinate,
    region: RegionType,
    climate: ClimateZone,
    raw: f64,
    features: &[f64],
    today: NaiveDate,
) -> PredictionResult {
    // STAGE 3
    let projection = project(raw, coord);

    // STAGE 4
    let breakdown = confidence::score(coord, raw, features);
    let explanation = confidence::explain(&breakdown);
    debug!(
        current = projection.current,
        future = projection.future,
        confidence = breakdown.final_confidence,
        "Stages 3-4: projection and confidence"
    );

    // STAGES 5-7
    let levels = Levels {
        current: projection.current,
        future: projection.future,
        yearly: projection.yearly,
    };
    let (suitable, note) = advisory::assess(levels.current, levels.future, region, coord);
    let recommendations = advisory::recommendations(levels.current, levels.future, suitable);

    compose(
        coord,
        region,
        climate,
        &levels,
        (suitable, note),
        recommendations,
        today,
        Confidence {
            value: breakdown.final_confidence,
            breakdown: Some(breakdown),
            explanation,
        },
        PredictionMethod::MlModel,
        None,
    )
}

fn failure(error: &RegressorError) -> String {
    format!("Model prediction failed: {error}")
}

fn fallback_result(
    coord: &Coordinate,
    region: RegionType,
    climate: ClimateZone,
    reason: String,
    today: NaiveDate,
) -> PredictionResult {
    let estimate = fallback::estimate(coord);
    let levels = Levels {
        current: estimate.current,
        future: estimate.future,
        yearly: estimate.yearly,
    };
    let note = advisory::suitability_note(estimate.suitable, levels.current, levels.future, region);
    let explanation = vec![
        format!("Heuristic estimate used: {reason}"),
        format!(
            "Confidence {:.0}% from latitude band and depth plausibility",
            estimate.confidence * 100.0
        ),
    ];

    compose(
        coord,
        region,
        climate,
        &levels,
        (estimate.suitable, note),
        advisory::fallback_recommendations(),
        today,
        Confidence {
            value: estimate.confidence,
            breakdown: None,
            explanation,
        },
        PredictionMethod::HeuristicFallback,
        Some(reason),
    )
}

struct Confidence {
    value: f64,
    breakdown: Option<crate::types::ConfidenceBreakdown>,
    explanation: Vec<String>,
}

#[allow(clippy::too_many_arguments)]
fn compose(
    coord: &Coordinate,
    region: RegionType,
    climate: ClimateZone,
    levels: &Levels,
    suitability: (bool, String),
    recommendations: Vec<String>,
    today: NaiveDate,
    confidence: Confidence,
    method: PredictionMethod,
    fallback_reason: Option<String>,
) -> PredictionResult {
    let month = today.month();

    let mut seasonal_analysis = seasonal::analyze(region, climate, levels.current);
    for pattern in &mut seasonal_analysis.seasonal_patterns {
        pattern.water_level = round_to(pattern.water_level, 2);
        pattern.relative_level = round_to(pattern.relative_level, 2);
    }

    let drilling_timeline = drilling::plan(region, climate, levels.current, levels.future, month);
    let best_drilling_time = drilling::best_drilling_time(region, month);

    let yearly_predictions = levels
        .yearly
        .iter()
        .zip(1u32..)
        .map(|(level, offset)| YearlyPrediction {
            year: today.year() + offset as i32,
            years_from_now: offset,
            water_level: round_to(*level, 2),
        })
        .collect();

    PredictionResult {
        current_water_level: round_to(levels.current, 2),
        future_water_level: round_to(levels.future, 2),
        is_suitable_for_borewell: suitability.0,
        suitability_note: suitability.1,
        yearly_predictions,
        location: *coord,
        interpretation: advisory::interpretation(levels.current).to_string(),
        recommendations,
        seasonal_analysis,
        drilling_timeline,
        best_drilling_time,
        confidence: round_to(confidence.value, 3),
        confidence_breakdown: confidence.breakdown,
        confidence_explanation: confidence.explanation,
        prediction_method: method,
        fallback_reason,
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
