//! Level projection: raw regressor depth to current, future and 5-year trend.
//!
//! All values are metres below ground level (mbgl). A larger number means the
//! water table sits deeper, so every growth factor here models a receding
//! water table.

use serde::Serialize;

use crate::geo::{has_high_recharge_structures, is_alluvial, is_arid};
use crate::types::Coordinate;

/// Deepest level the projector will report (mbgl).
pub const MAX_DEPTH_M: f64 = 100.0;

/// Number of yearly steps in the long-range projection.
pub const PROJECTION_YEARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProjection {
    pub current: f64,
    pub future: f64,
    /// Levels for years 1..=5
    pub yearly: [f64; PROJECTION_YEARS],
}

/// Project a raw regressor depth at `coord`.
pub fn project(raw_prediction: f64, coord: &Coordinate) -> LevelProjection {
    let current = raw_prediction.clamp(0.0, MAX_DEPTH_M);
    let future = (current * seasonal_factor(coord) * trend_factor(coord)).min(MAX_DEPTH_M);
    LevelProjection {
        current,
        future,
        yearly: yearly_projection(current),
    }
}

/// Higher-latitude sites swing further between seasons.
fn seasonal_factor(coord: &Coordinate) -> f64 {
    if coord.latitude.abs() > 30.0 {
        1.10
    } else {
        1.05
    }
}

fn trend_factor(coord: &Coordinate) -> f64 {
    if is_arid(coord) {
        1.05
    } else if is_alluvial(coord) {
        1.02
    } else if has_high_recharge_structures(coord) {
        1.01
    } else {
        1.03
    }
}

/// Compound an accelerating deepening rate of `1.02 + year * 0.005` per year.
pub fn yearly_projection(current: f64) -> [f64; PROJECTION_YEARS] {
    let mut levels = [0.0; PROJECTION_YEARS];
    let mut level = current;
    for (i, slot) in levels.iter_mut().enumerate() {
        let year = (i + 1) as f64;
        level = (level * (1.02 + year * 0.005)).min(MAX_DEPTH_M);
        *slot = level;
    }
    levels
}
