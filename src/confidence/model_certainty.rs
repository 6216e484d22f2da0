//! Model-certainty sub-score: how much to trust this particular regressor output.

use crate::geo::{in_core_training_area, in_india, nearest_reference_point};
use crate::types::{Coordinate, ModelCertaintyScore};

pub fn score_model_certainty(
    coord: &Coordinate,
    raw_prediction: f64,
    features: &[f64],
) -> ModelCertaintyScore {
    let prediction_reasonableness = score_reasonableness(raw_prediction);
    let feature_quality = score_feature_quality(features);
    let training_similarity = score_training_similarity(coord);
    let distance_penalty = distance_penalty(coord);

    ModelCertaintyScore {
        prediction_reasonableness,
        feature_quality,
        training_similarity,
        distance_penalty,
        total: prediction_reasonableness + feature_quality + training_similarity + distance_penalty,
    }
}

/// Typical Indian aquifer depths sit in 5–30 m; the further out, the less plausible.
fn score_reasonableness(raw: f64) -> f64 {
    if (5.0..=30.0).contains(&raw) {
        0.06
    } else if (3.0..=50.0).contains(&raw) {
        0.04
    } else if (1.0..=80.0).contains(&raw) {
        0.02
    } else {
        -0.02
    }
}

fn score_feature_quality(features: &[f64]) -> f64 {
    if !features.iter().all(|x| x.is_finite()) {
        return 0.0;
    }
    let mut score = 0.03;
    if features.iter().all(|x| x.abs() < 1000.0) {
        score += 0.02;
    }
    score
}

fn score_training_similarity(coord: &Coordinate) -> f64 {
    let mut score = 0.0;
    if in_india(coord) {
        score += 0.04;
        if in_core_training_area(coord) {
            score += 0.02;
        }
    }
    score
}

/// Penalty by distance to the nearest well-monitored city.
fn distance_penalty(coord: &Coordinate) -> f64 {
    if !in_india(coord) {
        return -0.05;
    }
    let (_, km) = nearest_reference_point(coord);
    if km > 300.0 {
        -0.05
    } else if km > 200.0 {
        -0.03
    } else if km > 100.0 {
        -0.01
    } else {
        0.0
    }
}
