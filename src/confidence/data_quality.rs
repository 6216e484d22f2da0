//! Data-quality sub-score: monitoring density and data recency.

use crate::geo::urban_class;
use crate::types::{Coordinate, DataQualityScore, UrbanClass};

/// Fixed bonus for using the latest monitoring campaign.
pub const RECENTNESS_BONUS: f64 = 0.05;

pub fn score_data_quality(coord: &Coordinate) -> DataQualityScore {
    let urban = urban_class(coord);
    let spatial_density = spatial_density(urban);
    let temporal_frequency = temporal_frequency(urban);
    DataQualityScore {
        spatial_density,
        temporal_frequency,
        recentness: RECENTNESS_BONUS,
        total: spatial_density + temporal_frequency + RECENTNESS_BONUS,
    }
}

/// Denser observation-well networks around cities.
fn spatial_density(urban: UrbanClass) -> f64 {
    match urban {
        UrbanClass::MajorMetro => 0.08,
        UrbanClass::Urban => 0.06,
        UrbanClass::PeriUrban => 0.04,
        UrbanClass::Rural => 0.02,
    }
}

fn temporal_frequency(urban: UrbanClass) -> f64 {
    match urban {
        UrbanClass::MajorMetro => 0.05,
        UrbanClass::Urban => 0.04,
        UrbanClass::PeriUrban | UrbanClass::Rural => 0.02,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metro_scores_highest() {
        let dq = score_data_quality(&Coordinate::new(19.0760, 72.8777).unwrap());
        assert_eq!(dq.spatial_density, 0.08);
        assert_eq!(dq.temporal_frequency, 0.05);
        assert!((dq.total - 0.18).abs() < 1e-12);
    }

    #[test]
    fn rural_scores_lowest() {
        let dq = score_data_quality(&Coordinate::new(-30.0, 140.0).unwrap());
        assert_eq!(dq.spatial_density, 0.02);
        assert_eq!(dq.temporal_frequency, 0.02);
        assert_eq!(dq.recentness, RECENTNESS_BONUS);
    }

    #[test]
    fn peri_urban_shares_rural_temporal_tier() {
        assert_eq!(temporal_frequency(UrbanClass::PeriUrban), 0.02);
        assert_eq!(spatial_density(UrbanClass::PeriUrban), 0.04);
    }
}
