//! Suitability flag, advisory note, depth interpretation and recommendations.

use crate::types::{Coordinate, RegionType};

/// Shallowest workable level (mbgl).
pub const MIN_WORKABLE_DEPTH_M: f64 = 3.0;
/// Deepest level still economical to drill (mbgl).
pub const MAX_WORKABLE_DEPTH_M: f64 = 80.0;
pub const MAX_FUTURE_DEPTH_M: f64 = 100.0;
pub const MAX_ABS_LATITUDE: f64 = 60.0;

pub fn is_suitable(current: f64, future: f64, coord: &Coordinate) -> bool {
    current >= MIN_WORKABLE_DEPTH_M
        && current <= MAX_WORKABLE_DEPTH_M
        && future <= MAX_FUTURE_DEPTH_M
        && coord.latitude.abs() <= MAX_ABS_LATITUDE
}

/// Suitability flag plus the matching advisory note.
pub fn assess(current: f64, future: f64, region: RegionType, coord: &Coordinate) -> (bool, String) {
    let suitable = is_suitable(current, future, coord);
    (suitable, suitability_note(suitable, current, future, region))
}

pub fn suitability_note(suitable: bool, current: f64, future: f64, region: RegionType) -> String {
    let region = region.display_name();
    if !suitable {
        if current < MIN_WORKABLE_DEPTH_M {
            format!(
                "Not suitable: water table at {current:.1} m is very shallow for a borewell in the {region}; consider a dug well or rainwater harvesting"
            )
        } else if current > MAX_WORKABLE_DEPTH_M {
            format!(
                "Not suitable: water table at {current:.1} m is very deep in the {region}; drilling will be expensive and yield uncertain"
            )
        } else if future > MAX_FUTURE_DEPTH_M {
            format!(
                "Not suitable: levels in the {region} are projected to fall below {MAX_FUTURE_DEPTH_M:.0} m ({future:.1} m)"
            )
        } else {
            format!("Not suitable: location is outside the range this advisory covers ({region})")
        }
    } else if current > 20.0 {
        format!("Suitable with deep drilling: expect to reach water below {current:.1} m in the {region}")
    } else if current > 10.0 {
        format!("Suitable: moderate depth of {current:.1} m, typical for the {region}")
    } else if current < 3.0 {
        format!("Suitable with caution: very shallow water table ({current:.1} m) in the {region}")
    } else if current < 5.0 {
        format!("Suitable: shallow water table ({current:.1} m) in the {region}; check for seasonal drying")
    } else {
        format!("Suitable: optimal depth of {current:.1} m for a borewell in the {region}")
    }
}

/// Depth band label for a level in mbgl.
pub fn interpretation(level: f64) -> &'static str {
    if level < 5.0 {
        "Critical - Very shallow groundwater, potential water scarcity risk"
    } else if level < 10.0 {
        "Low - Shallow groundwater, monitor closely"
    } else if level < 20.0 {
        "Moderate - Normal groundwater level"
    } else if level < 30.0 {
        "Good - Adequate groundwater level"
    } else {
        "Excellent - Deep groundwater, good water availability"
    }
}

/// Action list for the model-backed path.
pub fn recommendations(current: f64, future: f64, suitable: bool) -> Vec<String> {
    let mut recs = Vec::new();

    if suitable {
        recs.push("Location suitable for borewell drilling".to_string());
        recs.push(format!(
            "Optimal drilling depth: {:.1} - {:.1} meters",
            (current - 5.0).max(0.0),
            current + 5.0
        ));
        if future > current * 1.2 {
            recs.push("Consider water conservation practices".to_string());
            recs.push("Install water level monitoring system".to_string());
        }
    } else if current < MIN_WORKABLE_DEPTH_M {
        recs.push("Water level too shallow for borewell drilling".to_string());
        recs.push("Consider rainwater harvesting systems".to_string());
    } else if current > MAX_WORKABLE_DEPTH_M {
        recs.push("Water level very deep - drilling will be expensive".to_string());
        recs.push("Explore alternative water sources".to_string());
    } else if future > MAX_FUTURE_DEPTH_M {
        recs.push("Water level expected to decline significantly".to_string());
        recs.push("Implement water conservation measures".to_string());
    } else {
        recs.push("Consult local water authorities before drilling".to_string());
    }

    if current > 15.0 {
        recs.push("Consider submersible pump for better efficiency".to_string());
    }
    recs
}

/// Fixed advice attached to heuristic-fallback results.
pub fn fallback_recommendations() -> Vec<String> {
    [
        "Prediction based on simplified heuristic model",
        "Limited data available for this location",
        "Recommend detailed geological survey for accurate assessment",
        "Consult local water authorities and hydrogeologists",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}
