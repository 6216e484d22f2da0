//! Static location predicates used by the confidence engine and projector.
//!
//! All facts here are hand-coded geographic rules; nothing is loaded at runtime.

use super::bbox::{any_contains, BoundingBox};
use super::classifier::classify_climate;
use crate::types::{ClimateZone, Coordinate, UrbanClass};

/// Mean Earth radius used by the haversine distance (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const INDIA: BoundingBox = BoundingBox::new(6.0, 37.0, 66.0, 98.0);
const CORE_TRAINING_AREA: BoundingBox = BoundingBox::new(15.0, 30.0, 72.0, 88.0);

const RAJASTHAN: &[BoundingBox] = &[BoundingBox::new(23.0, 30.5, 69.0, 78.5)];
const GUJARAT: &[BoundingBox] = &[BoundingBox::new(20.0, 24.7, 68.0, 74.5)];
// Marathwada
const DROUGHT_PRONE_MAHARASHTRA: &[BoundingBox] = &[BoundingBox::new(17.0, 20.5, 74.0, 77.5)];

const FLOOD_PRONE: &[BoundingBox] = &[
    // Kosi / north Bihar
    BoundingBox::new(25.0, 27.5, 83.0, 88.5),
    // Brahmaputra valley
    BoundingBox::new(25.5, 27.5, 89.5, 95.5),
    // Bengal delta
    BoundingBox::new(21.5, 23.0, 87.5, 89.5),
];

const ALLUVIAL: &[BoundingBox] = &[
    BoundingBox::new(24.0, 31.0, 74.0, 89.0),
    BoundingBox::new(21.5, 27.0, 84.0, 89.0),
    BoundingBox::new(25.5, 27.5, 89.5, 95.5),
];

/// A reference city with dense monitoring-well coverage.
#[derive(Debug, Clone, Copy)]
pub struct ReferencePoint {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// The eight reference points used for urban tiering and distance penalty.
pub const REFERENCE_POINTS: [ReferencePoint; 8] = [
    ReferencePoint { name: "Delhi", latitude: 28.6139, longitude: 77.2090 },
    ReferencePoint { name: "Mumbai", latitude: 19.0760, longitude: 72.8777 },
    ReferencePoint { name: "Kolkata", latitude: 22.5726, longitude: 88.3639 },
    ReferencePoint { name: "Chennai", latitude: 13.0827, longitude: 80.2707 },
    ReferencePoint { name: "Bengaluru", latitude: 12.9716, longitude: 77.5946 },
    ReferencePoint { name: "Hyderabad", latitude: 17.3850, longitude: 78.4867 },
    ReferencePoint { name: "Pune", latitude: 18.5204, longitude: 73.8567 },
    ReferencePoint { name: "Ahmedabad", latitude: 23.0225, longitude: 72.5714 },
];

pub fn in_india(coord: &Coordinate) -> bool {
    INDIA.contains(coord)
}

pub fn in_core_training_area(coord: &Coordinate) -> bool {
    CORE_TRAINING_AREA.contains(coord)
}

pub fn is_rajasthan(coord: &Coordinate) -> bool {
    any_contains(RAJASTHAN, coord)
}

pub fn is_gujarat(coord: &Coordinate) -> bool {
    any_contains(GUJARAT, coord)
}

pub fn is_drought_prone_maharashtra(coord: &Coordinate) -> bool {
    any_contains(DROUGHT_PRONE_MAHARASHTRA, coord)
}

/// Areas with dense check-dam / johad / farm-pond recharge networks.
pub fn has_high_recharge_structures(coord: &Coordinate) -> bool {
    is_rajasthan(coord) || is_gujarat(coord) || is_drought_prone_maharashtra(coord)
}

pub fn is_flood_prone(coord: &Coordinate) -> bool {
    any_contains(FLOOD_PRONE, coord)
}

pub fn is_alluvial(coord: &Coordinate) -> bool {
    any_contains(ALLUVIAL, coord)
}

pub fn is_arid(coord: &Coordinate) -> bool {
    classify_climate(coord) == ClimateZone::Arid
}

/// Alluvial, not flood-prone and not arid.
pub fn is_low_variance(coord: &Coordinate) -> bool {
    is_alluvial(coord) && !is_flood_prone(coord) && !is_arid(coord)
}

/// Great-circle distance in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Nearest reference point and its distance in km.
pub fn nearest_reference_point(coord: &Coordinate) -> (&'static ReferencePoint, f64) {
    let mut best = &REFERENCE_POINTS[0];
    let mut best_km = f64::INFINITY;
    for point in &REFERENCE_POINTS {
        let km = haversine_km(coord.latitude, coord.longitude, point.latitude, point.longitude);
        if km < best_km {
            best = point;
            best_km = km;
        }
    }
    (best, best_km)
}

/// Tier the coordinate by distance to the nearest reference city.
pub fn urban_class(coord: &Coordinate) -> UrbanClass {
    let (_, km) = nearest_reference_point(coord);
    if km <= 50.0 {
        UrbanClass::MajorMetro
    } else if km <= 150.0 {
        UrbanClass::Urban
    } else if km <= 300.0 {
        UrbanClass::PeriUrban
    } else {
        UrbanClass::Rural
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn haversine_delhi_mumbai() {
        let km = haversine_km(28.6139, 77.2090, 19.0760, 72.8777);
        assert!((km - 1153.0).abs() < 10.0, "Delhi-Mumbai ~1153 km, got {km}");
    }

    #[test]
    fn haversine_zero_distance() {
        assert!(haversine_km(10.0, 20.0, 10.0, 20.0).abs() < 1e-9);
    }

    #[test]
    fn nearest_point_for_pune_suburb() {
        let (point, km) = nearest_reference_point(&c(18.55, 73.80));
        assert_eq!(point.name, "Pune");
        assert!(km < 10.0);
    }

    #[test]
    fn urban_tiers() {
        assert_eq!(urban_class(&c(28.6139, 77.2090)), UrbanClass::MajorMetro);
        // Jaipur is ~240 km from Delhi
        assert_eq!(urban_class(&c(26.9124, 75.7873)), UrbanClass::PeriUrban);
        assert_eq!(urban_class(&c(40.0, 10.0)), UrbanClass::Rural);
    }

    #[test]
    fn india_box() {
        assert!(in_india(&c(20.0, 80.0)));
        assert!(!in_india(&c(40.0, 80.0)));
        assert!(!in_india(&c(20.0, 100.0)));
    }

    #[test]
    fn high_recharge_regions() {
        assert!(has_high_recharge_structures(&c(26.9124, 75.7873)));
        assert!(has_high_recharge_structures(&c(22.3, 70.8)));
        assert!(has_high_recharge_structures(&c(19.88, 75.34)));
        assert!(!has_high_recharge_structures(&c(22.5726, 88.3639)));
    }

    #[test]
    fn low_variance_excludes_flood_and_arid() {
        // Lucknow: alluvial, not flood-prone, not arid
        assert!(is_low_variance(&c(26.85, 80.95)));
        // Patna sits in the Kosi flood box
        assert!(!is_low_variance(&c(25.6, 85.1)));
        // Alluvial but arid
        assert!(!is_low_variance(&c(28.0, 76.5)));
    }
}
