//! Pipeline Regression Tests
//!
//! Exercises the public advisory pipeline end to end: classification
//! precedence, confidence bounds and breakdown consistency, seasonal and
//! drilling agreement, and reproducibility of both the model and heuristic
//! paths.

use std::sync::Arc;

use bhujal::confidence;
use bhujal::drilling;
use bhujal::features::{EXTENDED_FEATURE_COUNT, LOCATION_FEATURE_COUNT};
use bhujal::geo;
use bhujal::pipeline::AdvisoryPipeline;
use bhujal::regressor::Regressor;
use bhujal::types::{
    ClimateZone, Coordinate, MonthSuitability, PredictionMethod, PredictionRequest, RegionType,
    Urgency,
};
use chrono::NaiveDate;

fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

fn request(lat: f64, lon: f64) -> PredictionRequest {
    PredictionRequest {
        latitude: Some(lat),
        longitude: Some(lon),
        ..PredictionRequest::default()
    }
}

fn date(month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, 10).unwrap()
}

fn model_pipeline(depth: f64) -> AdvisoryPipeline {
    AdvisoryPipeline::new(Some(Arc::new(Regressor::callable(
        LOCATION_FEATURE_COUNT,
        move |_| Ok(depth),
    ))))
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn classifier_precedence_on_reference_cities() {
    assert_eq!(
        geo::classify(&coord(26.9124, 75.7873)),
        (RegionType::ThartDesert, ClimateZone::Arid)
    );
    assert_eq!(
        geo::classify_region(&coord(19.0760, 72.8777)),
        RegionType::CoastalPlains
    );
    assert_eq!(
        geo::classify_region(&coord(22.5726, 88.3639)),
        RegionType::GangeticPlains
    );
}

#[test]
fn region_and_climate_mismatch_is_preserved() {
    assert_eq!(
        geo::classify(&coord(28.0, 76.5)),
        (RegionType::GangeticPlains, ClimateZone::Arid)
    );
}

#[test]
fn climate_table_order_decides_overlaps() {
    assert_eq!(geo::classify_climate(&coord(22.3, 70.8)), ClimateZone::SemiArid);
    // Also inside the west-coast wet box
    assert_eq!(geo::classify_climate(&coord(19.0, 74.5)), ClimateZone::SemiArid);
    assert_eq!(
        geo::classify_climate(&coord(26.85, 80.95)),
        ClimateZone::SubtropicalHumid
    );
    assert_eq!(
        geo::classify_climate(&coord(13.08, 80.27)),
        ClimateZone::TropicalWetDry
    );
}

#[test]
fn outside_india_uses_defaults() {
    assert_eq!(
        geo::classify(&coord(51.5074, -0.1278)),
        (RegionType::MixedTerrain, ClimateZone::Temperate)
    );
}

// ============================================================================
// Confidence
// ============================================================================

#[test]
fn confidence_bounded_and_consistent_over_grid() {
    let features = [0.0; LOCATION_FEATURE_COUNT];
    for lat in (-80..=80).step_by(10) {
        for lon in (-170..=170).step_by(20) {
            for raw in [-5.0, 0.0, 3.0, 25.0, 120.0] {
                let b = confidence::score(&coord(f64::from(lat), f64::from(lon)), raw, &features);
                let sum = b.base
                    + b.data_quality.total
                    + b.model_certainty.total
                    + b.environmental.total;
                assert!(
                    (b.final_confidence - sum.clamp(0.40, 0.95)).abs() < 1e-9,
                    "({lat}, {lon}, {raw}): {} vs {sum}",
                    b.final_confidence
                );
                assert!((0.40..=0.95).contains(&b.final_confidence));
                let env = &b.environmental;
                assert!((env.total - env.raw_total.min(env.applied_cap)).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn confidence_explanation_is_never_empty() {
    let b = confidence::score(&coord(12.9716, 77.5946), 18.0, &[0.0; LOCATION_FEATURE_COUNT]);
    assert!(!confidence::explain(&b).is_empty());
}

// ============================================================================
// Drilling
// ============================================================================

#[test]
fn best_month_counts_forward_to_optimal_window() {
    let november = drilling::best_drilling_time(RegionType::GangeticPlains, 11);
    assert_eq!(november.months_from_now, 0);
    assert_eq!(november.month, 11);

    let june = drilling::best_drilling_time(RegionType::GangeticPlains, 6);
    assert_eq!(june.months_from_now, 5);
    assert_eq!(june.month, 11);
}

#[test]
fn urgency_is_monotone_in_depth() {
    assert_eq!(drilling::urgency(4.0, 4.4), Urgency::Immediate);
    assert_eq!(drilling::urgency(8.0, 8.8), Urgency::High);
    assert_eq!(drilling::urgency(15.0, 16.5), Urgency::Moderate);
    assert_eq!(drilling::urgency(25.0, 27.5), Urgency::Low);
    assert_eq!(drilling::urgency(30.0, 85.0), Urgency::Immediate);
    assert!(Urgency::Immediate > Urgency::High);
}

#[test]
fn timeline_starts_at_request_month_and_wraps() {
    let result = model_pipeline(22.0)
        .predict(&request(22.5726, 88.3639), date(10))
        .unwrap();
    let months: Vec<u32> = result
        .drilling_timeline
        .timeline
        .iter()
        .map(|e| e.month)
        .collect();
    assert_eq!(months, vec![10, 11, 12, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    for entry in &result.drilling_timeline.timeline {
        let optimal = result.drilling_timeline.optimal_months.contains(&entry.month);
        assert_eq!(optimal, entry.suitability == MonthSuitability::Excellent);
    }
}

#[test]
fn immediate_need_relabels_avoid_months() {
    let result = model_pipeline(3.5)
        .predict(&request(22.5726, 88.3639), date(1))
        .unwrap();
    assert_eq!(result.drilling_timeline.urgency, Urgency::Immediate);
    assert!(result
        .drilling_timeline
        .timeline
        .iter()
        .all(|e| e.suitability != MonthSuitability::Avoid));
}

// ============================================================================
// Seasonal
// ============================================================================

#[test]
fn seasonal_patterns_cover_the_year() {
    let result = model_pipeline(20.0)
        .predict(&request(12.9716, 77.5946), date(3))
        .unwrap();
    let numbers: Vec<u32> = result
        .seasonal_analysis
        .seasonal_patterns
        .iter()
        .map(|p| p.month_number)
        .collect();
    assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
    assert!(!result.seasonal_analysis.critical_months.is_empty());
}

// ============================================================================
// Fallback & reproducibility
// ============================================================================

#[test]
fn fallback_is_reproducible() {
    let pipeline = AdvisoryPipeline::without_model();
    let a = pipeline.predict(&request(17.385, 78.4867), date(6)).unwrap();
    let b = pipeline.predict(&request(17.385, 78.4867), date(6)).unwrap();
    assert_eq!(a.prediction_method, PredictionMethod::HeuristicFallback);
    assert_eq!(a.confidence, b.confidence);
    assert_eq!(a.current_water_level, b.current_water_level);
    assert!((0.4..=0.8).contains(&a.confidence));
}

#[test]
fn fallback_future_is_ten_percent_deeper() {
    let result = AdvisoryPipeline::without_model()
        .predict(&request(21.0, 79.0), date(6))
        .unwrap();
    // 15 + 21 / 3 = 22
    assert_eq!(result.current_water_level, 22.0);
    assert_eq!(result.future_water_level, 24.2);
    assert!(result.is_suitable_for_borewell);
}

#[test]
fn extended_model_accepts_extreme_year() {
    let pipeline = AdvisoryPipeline::new(Some(Arc::new(Regressor::callable(
        EXTENDED_FEATURE_COUNT,
        |features| Ok(if features.iter().all(|f| f.is_finite()) { 18.0 } else { -1.0 }),
    ))));
    for year in [i32::MIN, i32::MAX] {
        let req = PredictionRequest {
            year: Some(year),
            ..request(28.6139, 77.2090)
        };
        let result = pipeline.predict(&req, date(5)).unwrap();
        assert_eq!(result.prediction_method, PredictionMethod::MlModel);
        assert_eq!(result.current_water_level, 18.0);
    }
}

#[test]
fn model_output_serializes_identically_across_runs() {
    let pipeline = model_pipeline(31.7);
    let a = serde_json::to_string(&pipeline.predict(&request(23.2599, 77.4126), date(8)).unwrap())
        .unwrap();
    let b = serde_json::to_string(&pipeline.predict(&request(23.2599, 77.4126), date(8)).unwrap())
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn concurrent_batch_matches_sequential() {
    let pipeline = model_pipeline(14.0);
    let requests: Vec<PredictionRequest> = (0..40)
        .map(|i| request(8.0 + f64::from(i) * 0.5, 70.0 + f64::from(i) * 0.6))
        .collect();

    let batch = pipeline.predict_batch(&requests, date(4));
    for (req, outcome) in requests.iter().zip(batch) {
        let single = pipeline.predict(req, date(4)).unwrap();
        let batched = outcome.unwrap();
        assert_eq!(
            serde_json::to_value(&single).unwrap(),
            serde_json::to_value(&batched).unwrap()
        );
    }
}
