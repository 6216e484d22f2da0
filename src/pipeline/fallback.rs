//! Deterministic heuristic used when the regressor is unavailable.
//!
//! Depth comes from latitude alone. Confidence adds a small jitter drawn from
//! a `StdRng` seeded by the coordinate, so the same location always gets the
//! same figure.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::projection::{yearly_projection, PROJECTION_YEARS};
use crate::types::Coordinate;

pub const FALLBACK_MIN_DEPTH_M: f64 = 5.0;
pub const FALLBACK_MAX_DEPTH_M: f64 = 50.0;
pub const FALLBACK_FUTURE_FACTOR: f64 = 1.1;

pub const FALLBACK_BASE_CONFIDENCE: f64 = 0.5;
pub const FALLBACK_MIN_CONFIDENCE: f64 = 0.4;
pub const FALLBACK_MAX_CONFIDENCE: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicEstimate {
    pub current: f64,
    pub future: f64,
    pub yearly: [f64; PROJECTION_YEARS],
    pub suitable: bool,
    pub confidence: f64,
}

pub fn estimate(coord: &Coordinate) -> HeuristicEstimate {
    let current =
        (15.0 + coord.latitude.abs() / 3.0).clamp(FALLBACK_MIN_DEPTH_M, FALLBACK_MAX_DEPTH_M);
    HeuristicEstimate {
        current,
        future: current * FALLBACK_FUTURE_FACTOR,
        yearly: yearly_projection(current),
        suitable: (10.0..=40.0).contains(&current),
        confidence: confidence(coord, current),
    }
}

fn confidence(coord: &Coordinate, current: f64) -> f64 {
    let abs_lat = coord.latitude.abs();
    let mut score = FALLBACK_BASE_CONFIDENCE;

    // Tropical and subtropical latitudes are the best-characterised
    if (10.0..=30.0).contains(&abs_lat) {
        score += 0.15;
    } else if abs_lat <= 10.0 {
        score += 0.10;
    }

    if (10.0..=30.0).contains(&current) {
        score += 0.10;
    } else if (5.0..=40.0).contains(&current) {
        score += 0.05;
    }

    (score + jitter(coord)).clamp(FALLBACK_MIN_CONFIDENCE, FALLBACK_MAX_CONFIDENCE)
}

/// Location-seeded jitter in [-0.05, 0.05).
fn jitter(coord: &Coordinate) -> f64 {
    let mut rng = StdRng::seed_from_u64(jitter_seed(coord));
    let u: f64 = rng.gen();
    (u - 0.5) * 0.1
}

fn jitter_seed(coord: &Coordinate) -> u64 {
    // Negative seeds wrap; only stability matters
    (coord.latitude * 1000.0 + coord.longitude * 1000.0).trunc() as i64 as u64
}
