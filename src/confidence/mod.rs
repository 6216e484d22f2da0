//! Multi-factor confidence scoring
//!
//! Four additive components, each independently reported:
//!
//! | Component | Range (approx.) | Driven by |
//! |---|---|---|
//! | base | 0.40 / 0.60 | India bounding box |
//! | data quality | 0.09–0.18 | urban tier, recency |
//! | model certainty | -0.07–0.17 | raw value band, features, training area, distance |
//! | environmental | capped at 0.10–0.12 | aquifer, seasonality, land use, hydrogeology |
//!
//! The sum is clamped to [`MIN_CONFIDENCE`, `MAX_CONFIDENCE`].

mod data_quality;
mod environmental;
mod model_certainty;

pub use data_quality::score_data_quality;
pub use environmental::{
    score_environmental, BASE_ENVIRONMENTAL_CAP, HIGH_RECHARGE_CAP, LOW_VARIANCE_CAP,
};
pub use model_certainty::score_model_certainty;

use crate::geo::{classify, in_india};
use crate::types::{ConfidenceBreakdown, Coordinate, MAX_CONFIDENCE, MIN_CONFIDENCE};

pub const BASE_CONFIDENCE_INDIA: f64 = 0.60;
pub const BASE_CONFIDENCE_ELSEWHERE: f64 = 0.40;

/// Score confidence for one regressor output at one coordinate.
pub fn score(coord: &Coordinate, raw_prediction: f64, features: &[f64]) -> ConfidenceBreakdown {
    let (region, climate) = classify(coord);

    let base = if in_india(coord) {
        BASE_CONFIDENCE_INDIA
    } else {
        BASE_CONFIDENCE_ELSEWHERE
    };
    let data_quality = score_data_quality(coord);
    let model_certainty = score_model_certainty(coord, raw_prediction, features);
    let environmental = score_environmental(coord, region, climate);

    let mut breakdown = ConfidenceBreakdown {
        base,
        data_quality,
        model_certainty,
        environmental,
        final_confidence: 0.0,
    };
    breakdown.final_confidence = breakdown
        .component_sum()
        .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);
    breakdown
}

/// Render the breakdown as explanation lines for the UI.
pub fn explain(breakdown: &ConfidenceBreakdown) -> Vec<String> {
    let dq = &breakdown.data_quality;
    let mc = &breakdown.model_certainty;
    let env = &breakdown.environmental;

    let base_reason = if breakdown.base >= BASE_CONFIDENCE_INDIA {
        "location within the Indian monitoring network"
    } else {
        "location outside the training coverage"
    };

    let mut lines = vec![
        format!("Base confidence {:.0}% ({base_reason})", breakdown.base * 100.0),
        format!(
            "Data quality {:+.1}% (spatial density {:+.1}%, temporal frequency {:+.1}%, recentness {:+.1}%)",
            dq.total * 100.0,
            dq.spatial_density * 100.0,
            dq.temporal_frequency * 100.0,
            dq.recentness * 100.0,
        ),
        format!(
            "Model certainty {:+.1}% (prediction range {:+.1}%, feature quality {:+.1}%, training similarity {:+.1}%, distance {:+.1}%)",
            mc.total * 100.0,
            mc.prediction_reasonableness * 100.0,
            mc.feature_quality * 100.0,
            mc.training_similarity * 100.0,
            mc.distance_penalty * 100.0,
        ),
        format!(
            "Environmental {:+.1}% (aquifer {:+.1}%, seasonal {:+.1}%, land use {:+.1}%, hydrogeology {:+.1}%)",
            env.total * 100.0,
            env.aquifer * 100.0,
            env.seasonal * 100.0,
            env.land_use * 100.0,
            env.hydrogeological * 100.0,
        ),
    ];

    if env.was_capped() {
        lines.push(format!(
            "Environmental factors capped at {:.0}% (raw {:.1}%)",
            env.applied_cap * 100.0,
            env.raw_total * 100.0,
        ));
    }

    let sum = breakdown.component_sum();
    if sum > MAX_CONFIDENCE || sum < MIN_CONFIDENCE {
        lines.push(format!(
            "Total {:.1}% clamped to the {:.0}%–{:.0}% range",
            sum * 100.0,
            MIN_CONFIDENCE * 100.0,
            MAX_CONFIDENCE * 100.0,
        ));
    }

    lines.push(format!("Final confidence {}%", breakdown.percent()));
    lines
}
