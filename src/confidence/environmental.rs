//! Environmental sub-score with a location-dependent cap.

use crate::geo::{
    has_high_recharge_structures, in_core_training_area, in_india, is_alluvial, is_arid,
    is_flood_prone, is_low_variance, is_rajasthan, urban_class,
};
use crate::types::{ClimateZone, Coordinate, EnvironmentalScore, RegionType, UrbanClass};

pub const BASE_ENVIRONMENTAL_CAP: f64 = 0.10;
pub const HIGH_RECHARGE_CAP: f64 = 0.12;
pub const LOW_VARIANCE_CAP: f64 = 0.11;

/// Seasonal stability never drops below this.
pub const SEASONAL_FLOOR: f64 = -0.05;

pub fn score_environmental(
    coord: &Coordinate,
    region: RegionType,
    climate: ClimateZone,
) -> EnvironmentalScore {
    let aquifer = score_aquifer(region);
    let seasonal = score_seasonal_stability(coord, climate);
    let land_use = score_land_use(coord);
    let hydrogeological = score_hydrogeological(coord);

    let raw_total = aquifer + seasonal + land_use + hydrogeological;
    let applied_cap = environmental_cap(coord);

    EnvironmentalScore {
        aquifer,
        seasonal,
        land_use,
        hydrogeological,
        raw_total,
        applied_cap,
        total: raw_total.min(applied_cap),
    }
}

/// Aquifer productivity by region: thick alluvium best, desert worst.
fn score_aquifer(region: RegionType) -> f64 {
    match region {
        RegionType::GangeticPlains => 0.04,
        RegionType::CoastalPlains => 0.03,
        RegionType::WesternGhats => 0.025,
        RegionType::DeccanPlateau | RegionType::CentralHighlands | RegionType::NortheastHills => {
            0.02
        }
        RegionType::MixedTerrain => 0.015,
        RegionType::ThartDesert => 0.01,
    }
}

fn score_seasonal_stability(coord: &Coordinate, climate: ClimateZone) -> f64 {
    let mut score: f64 = 0.03;
    match climate {
        ClimateZone::Arid => score -= 0.03,
        ClimateZone::SemiArid => score -= 0.02,
        _ => {}
    }
    if is_rajasthan(coord) {
        score -= 0.02;
    }
    if is_flood_prone(coord) {
        score -= 0.02;
    }
    score.max(SEASONAL_FLOOR)
}

fn score_land_use(coord: &Coordinate) -> f64 {
    if is_arid(coord) {
        0.01
    } else if urban_class(coord) == UrbanClass::MajorMetro {
        // Sealed surfaces, heavy abstraction
        0.01
    } else if is_alluvial(coord) {
        0.03
    } else {
        0.02
    }
}

fn score_hydrogeological(coord: &Coordinate) -> f64 {
    if has_high_recharge_structures(coord) {
        0.03
    } else if in_core_training_area(coord) {
        0.02
    } else if in_india(coord) {
        0.01
    } else {
        0.0
    }
}

/// High-recharge check takes precedence over low variance.
fn environmental_cap(coord: &Coordinate) -> f64 {
    if has_high_recharge_structures(coord) {
        HIGH_RECHARGE_CAP
    } else if is_low_variance(coord) {
        LOW_VARIANCE_CAP
    } else {
        BASE_ENVIRONMENTAL_CAP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::classify;

    fn env_at(lat: f64, lon: f64) -> EnvironmentalScore {
        let coord = Coordinate::new(lat, lon).unwrap();
        let (region, climate) = classify(&coord);
        score_environmental(&coord, region, climate)
    }

    #[test]
    fn total_never_exceeds_cap() {
        for (lat, lon) in [(26.85, 80.95), (26.9124, 75.7873), (12.97, 77.59), (45.0, 5.0)] {
            let env = env_at(lat, lon);
            assert!(env.total <= env.applied_cap, "({lat}, {lon}) {env:?}");
            assert_eq!(env.total, env.raw_total.min(env.applied_cap));
        }
    }

    #[test]
    fn jaipur_seasonal_penalties_stack() {
        let env = env_at(26.9124, 75.7873);
        // 0.03 - 0.03 (arid) - 0.02 (Rajasthan)
        assert!((env.seasonal - -0.02).abs() < 1e-12);
        assert_eq!(env.applied_cap, HIGH_RECHARGE_CAP);
    }

    #[test]
    fn seasonal_stability_respects_floor() {
        for lat in (60..=370).step_by(5) {
            for lon in (660..=980).step_by(5) {
                let coord = Coordinate::new(f64::from(lat) / 10.0, f64::from(lon) / 10.0).unwrap();
                for climate in ClimateZone::ALL {
                    assert!(score_seasonal_stability(&coord, climate) >= SEASONAL_FLOOR);
                }
            }
        }
    }

    #[test]
    fn flood_prone_penalty() {
        // Patna: Kosi flood box, subtropical humid
        let coord = Coordinate::new(25.6, 85.1).unwrap();
        let score = score_seasonal_stability(&coord, ClimateZone::SubtropicalHumid);
        assert!((score - 0.01).abs() < 1e-12);
    }

    #[test]
    fn low_variance_cap_for_lucknow() {
        let env = env_at(26.85, 80.95);
        assert_eq!(env.applied_cap, LOW_VARIANCE_CAP);
        // 0.04 aquifer + 0.03 seasonal + 0.03 land use + 0.02 hydro = 0.12 -> capped
        assert!((env.raw_total - 0.12).abs() < 1e-12);
        assert_eq!(env.total, LOW_VARIANCE_CAP);
        assert!(env.was_capped());
    }

    #[test]
    fn high_recharge_beats_low_variance() {
        // Inside both the Rajasthan box and the alluvial box, not arid, not flood-prone
        let coord = Coordinate::new(27.5, 77.8).unwrap();
        assert!(is_low_variance(&coord));
        assert!(has_high_recharge_structures(&coord));
        assert_eq!(environmental_cap(&coord), HIGH_RECHARGE_CAP);
    }

    #[test]
    fn base_cap_elsewhere() {
        assert_eq!(env_at(12.97, 77.59).applied_cap, BASE_ENVIRONMENTAL_CAP);
        assert_eq!(env_at(45.0, 5.0).applied_cap, BASE_ENVIRONMENTAL_CAP);
    }
}
