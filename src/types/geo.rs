//! Geographic value types: Coordinate, RegionType, ClimateZone, UrbanClass

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;

// ============================================================================
// Coordinate
// ============================================================================

/// A validated WGS84 point. Construct through [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Validate and build a coordinate.
    ///
    /// Rejects NaN/infinite values and anything outside [-90, 90] x [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        check_axis("latitude", latitude, 90.0)?;
        check_axis("longitude", longitude, 180.0)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build from optional request fields, reporting which one is missing.
    pub fn from_fields(
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self, CoordinateError> {
        let lat = latitude.ok_or(CoordinateError::Missing("latitude"))?;
        let lon = longitude.ok_or(CoordinateError::Missing("longitude"))?;
        Self::new(lat, lon)
    }
}

fn check_axis(field: &'static str, value: f64, limit: f64) -> Result<(), CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::NotFinite(field));
    }
    if !(-limit..=limit).contains(&value) {
        return Err(CoordinateError::OutOfRange {
            field,
            value,
            min: -limit,
            max: limit,
        });
    }
    Ok(())
}

// ============================================================================
// Regional taxonomy
// ============================================================================

/// Coarse geomorphological region. Downstream lookup tables are keyed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionType {
    #[serde(rename = "thar_desert")]
    ThartDesert,
    WesternGhats,
    NortheastHills,
    GangeticPlains,
    DeccanPlateau,
    CoastalPlains,
    CentralHighlands,
    MixedTerrain,
}

impl RegionType {
    pub const ALL: [Self; 8] = [
        Self::ThartDesert,
        Self::WesternGhats,
        Self::NortheastHills,
        Self::GangeticPlains,
        Self::DeccanPlateau,
        Self::CoastalPlains,
        Self::CentralHighlands,
        Self::MixedTerrain,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ThartDesert => "Thar Desert",
            Self::WesternGhats => "Western Ghats",
            Self::NortheastHills => "Northeast Hills",
            Self::GangeticPlains => "Gangetic Plains",
            Self::DeccanPlateau => "Deccan Plateau",
            Self::CoastalPlains => "Coastal Plains",
            Self::CentralHighlands => "Central Highlands",
            Self::MixedTerrain => "Mixed Terrain",
        }
    }
}

impl std::fmt::Display for RegionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Coarse aridity/humidity zone, classified independently of [`RegionType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateZone {
    Arid,
    SemiArid,
    TropicalWet,
    TropicalWetDry,
    SubtropicalHumid,
    Mountain,
    Temperate,
}

impl ClimateZone {
    pub const ALL: [Self; 7] = [
        Self::Arid,
        Self::SemiArid,
        Self::TropicalWet,
        Self::TropicalWetDry,
        Self::SubtropicalHumid,
        Self::Mountain,
        Self::Temperate,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Arid => "Arid",
            Self::SemiArid => "Semi-arid",
            Self::TropicalWet => "Tropical Wet",
            Self::TropicalWetDry => "Tropical Wet-Dry",
            Self::SubtropicalHumid => "Subtropical Humid",
            Self::Mountain => "Mountain",
            Self::Temperate => "Temperate",
        }
    }
}

impl std::fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Settlement density tier, used as a proxy for monitoring-well density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrbanClass {
    MajorMetro,
    Urban,
    PeriUrban,
    Rural,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_coordinate() {
        let c = Coordinate::new(28.6139, 77.2090).unwrap();
        assert_eq!(c.latitude, 28.6139);
        assert_eq!(c.longitude, 77.2090);
    }

    #[test]
    fn accepts_boundaries() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let err = Coordinate::new(91.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            CoordinateError::OutOfRange { field: "latitude", .. }
        ));
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(
            Coordinate::new(f64::NAN, 0.0).unwrap_err(),
            CoordinateError::NotFinite("latitude")
        );
        assert_eq!(
            Coordinate::new(0.0, f64::INFINITY).unwrap_err(),
            CoordinateError::NotFinite("longitude")
        );
    }

    #[test]
    fn reports_missing_field() {
        assert_eq!(
            Coordinate::from_fields(Some(10.0), None).unwrap_err(),
            CoordinateError::Missing("longitude")
        );
    }

    #[test]
    fn region_serializes_snake_case() {
        let json = serde_json::to_string(&RegionType::ThartDesert).unwrap();
        assert_eq!(json, "\"thar_desert\"");
        let json = serde_json::to_string(&ClimateZone::TropicalWetDry).unwrap();
        assert_eq!(json, "\"tropical_wet_dry\"");
    }
}
