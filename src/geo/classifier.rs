//! Region and climate classification.
//!
//! Both classifiers are ordered rule tables evaluated top to bottom. Boxes
//! overlap on purpose: precedence, not geometry, decides. The two tables are
//! independent, so a point can be `GangeticPlains` and `Arid` at once.

use super::bbox::{first_match, BoundingBox, Rule};
use crate::types::{ClimateZone, Coordinate, RegionType};

const THAR_DESERT: &[BoundingBox] = &[BoundingBox::new(24.0, 30.0, 69.0, 76.0)];
const WESTERN_GHATS: &[BoundingBox] = &[BoundingBox::new(8.0, 21.0, 73.0, 77.0)];
const NORTHEAST_HILLS: &[BoundingBox] = &[BoundingBox::new(22.0, 29.5, 89.5, 97.5)];
const GANGETIC_PLAINS: &[BoundingBox] = &[
    BoundingBox::new(24.0, 31.0, 75.0, 88.5),
    // Bihar / Bengal delta
    BoundingBox::new(21.5, 27.0, 84.0, 89.0),
];
const DECCAN_PLATEAU: &[BoundingBox] = &[BoundingBox::new(12.0, 22.0, 74.0, 80.0)];
const COASTAL_PLAINS: &[BoundingBox] = &[
    // West coast, everything seaward of 73°E
    BoundingBox::new(6.0, 24.0, 68.0, 73.0),
    BoundingBox::new(6.0, 22.0, 80.0, 88.0),
    BoundingBox::new(6.0, 12.0, 73.0, 80.0),
];
const CENTRAL_HIGHLANDS: &[BoundingBox] = &[BoundingBox::new(21.0, 26.0, 74.0, 84.0)];

/// Region precedence: desert > ghats > hills > plains > plateau > coastal > highlands.
pub const REGION_RULES: [Rule<RegionType>; 7] = [
    Rule { result: RegionType::ThartDesert, boxes: THAR_DESERT },
    Rule { result: RegionType::WesternGhats, boxes: WESTERN_GHATS },
    Rule { result: RegionType::NortheastHills, boxes: NORTHEAST_HILLS },
    Rule { result: RegionType::GangeticPlains, boxes: GANGETIC_PLAINS },
    Rule { result: RegionType::DeccanPlateau, boxes: DECCAN_PLATEAU },
    Rule { result: RegionType::CoastalPlains, boxes: COASTAL_PLAINS },
    Rule { result: RegionType::CentralHighlands, boxes: CENTRAL_HIGHLANDS },
];

const ARID: &[BoundingBox] = &[BoundingBox::new(23.0, 30.5, 68.0, 77.0)];
const SEMI_ARID: &[BoundingBox] = &[
    BoundingBox::new(20.0, 24.5, 68.0, 73.0),
    // Rain shadow east of the Ghats
    BoundingBox::new(14.0, 20.0, 74.0, 79.0),
];
const TROPICAL_WET: &[BoundingBox] = &[
    BoundingBox::new(8.0, 20.0, 72.0, 75.0),
    BoundingBox::new(22.0, 29.0, 89.0, 97.0),
];
const TROPICAL_WET_DRY: &[BoundingBox] = &[BoundingBox::new(8.0, 23.0, 75.0, 88.0)];
const SUBTROPICAL_HUMID: &[BoundingBox] = &[BoundingBox::new(22.0, 31.0, 77.0, 89.0)];
const MOUNTAIN: &[BoundingBox] = &[BoundingBox::new(30.5, 37.0, 72.0, 97.0)];

pub const CLIMATE_RULES: [Rule<ClimateZone>; 6] = [
    Rule { result: ClimateZone::Arid, boxes: ARID },
    Rule { result: ClimateZone::SemiArid, boxes: SEMI_ARID },
    Rule { result: ClimateZone::TropicalWet, boxes: TROPICAL_WET },
    Rule { result: ClimateZone::TropicalWetDry, boxes: TROPICAL_WET_DRY },
    Rule { result: ClimateZone::SubtropicalHumid, boxes: SUBTROPICAL_HUMID },
    Rule { result: ClimateZone::Mountain, boxes: MOUNTAIN },
];

pub fn classify_region(coord: &Coordinate) -> RegionType {
    first_match(&REGION_RULES, coord, RegionType::MixedTerrain)
}

pub fn classify_climate(coord: &Coordinate) -> ClimateZone {
    first_match(&CLIMATE_RULES, coord, ClimateZone::Temperate)
}

/// Classify a coordinate into its region and climate zone.
pub fn classify(coord: &Coordinate) -> (RegionType, ClimateZone) {
    (classify_region(coord), classify_climate(coord))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn jaipur_is_thar_desert_and_arid() {
        assert_eq!(
            classify(&c(26.9124, 75.7873)),
            (RegionType::ThartDesert, ClimateZone::Arid)
        );
    }

    #[test]
    fn mumbai_takes_coastal_branch() {
        // lng < 73 keeps it out of the Ghats box
        assert_eq!(classify_region(&c(19.0760, 72.8777)), RegionType::CoastalPlains);
        assert_eq!(classify_climate(&c(19.0760, 72.8777)), ClimateZone::TropicalWet);
    }

    #[test]
    fn kolkata_is_gangetic_plains() {
        assert_eq!(classify_region(&c(22.5726, 88.3639)), RegionType::GangeticPlains);
    }

    #[test]
    fn bengaluru_is_deccan_plateau() {
        assert_eq!(classify_region(&c(12.9716, 77.5946)), RegionType::DeccanPlateau);
    }

    #[test]
    fn desert_wins_over_overlapping_plains_box() {
        // Inside both the Thar and Gangetic boxes
        let p = c(27.0, 75.5);
        assert!(GANGETIC_PLAINS[0].contains(&p));
        assert_eq!(classify_region(&p), RegionType::ThartDesert);
    }

    #[test]
    fn region_and_climate_can_disagree() {
        // Eastern Haryana: alluvial plain by region, arid by climate.
        let (region, climate) = classify(&c(28.0, 76.5));
        assert_eq!(region, RegionType::GangeticPlains);
        assert_eq!(climate, ClimateZone::Arid);
    }

    #[test]
    fn outside_india_falls_to_defaults() {
        assert_eq!(
            classify(&c(48.8566, 2.3522)),
            (RegionType::MixedTerrain, ClimateZone::Temperate)
        );
    }

    #[test]
    fn himalaya_is_mountain_climate() {
        assert_eq!(classify_climate(&c(34.08, 74.80)), ClimateZone::Mountain);
    }

    #[test]
    fn every_region_reachable() {
        let samples = [
            (26.9, 71.0),
            (15.5, 74.0),
            (25.5, 91.9),
            (26.8, 80.9),
            (17.4, 78.5),
            (19.08, 72.88),
            (23.26, 77.41),
            (40.0, 10.0),
        ];
        for (i, (lat, lon)) in samples.iter().enumerate() {
            assert_eq!(classify_region(&c(*lat, *lon)), RegionType::ALL[i], "sample {i}");
        }
    }

    #[test]
    fn every_climate_reachable() {
        let samples = [
            (26.9, 71.0),
            (22.3, 70.8),
            (19.08, 72.88),
            (13.08, 80.27),
            (26.85, 80.95),
            (34.08, 74.80),
            (40.0, 10.0),
        ];
        for (i, (lat, lon)) in samples.iter().enumerate() {
            assert_eq!(classify_climate(&c(*lat, *lon)), ClimateZone::ALL[i], "sample {i}");
        }
    }

    #[test]
    fn climate_overlaps_resolve_by_table_order() {
        // Rain-shadow box against the west-coast wet box
        let p = c(19.0, 74.5);
        assert!(SEMI_ARID[1].contains(&p) && TROPICAL_WET[0].contains(&p));
        assert_eq!(classify_climate(&p), ClimateZone::SemiArid);

        // Thar edge: arid beats the Kutch semi-arid box
        let p = c(23.5, 70.0);
        assert!(ARID[0].contains(&p) && SEMI_ARID[0].contains(&p));
        assert_eq!(classify_climate(&p), ClimateZone::Arid);

        // Chota Nagpur: wet-dry beats humid subtropical
        let p = c(22.5, 85.0);
        assert!(TROPICAL_WET_DRY[0].contains(&p) && SUBTROPICAL_HUMID[0].contains(&p));
        assert_eq!(classify_climate(&p), ClimateZone::TropicalWetDry);
    }
}
