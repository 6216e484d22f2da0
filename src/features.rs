//! Feature assembly for the regressor.
//!
//! Two layouts are supported, chosen by the feature count the loaded model
//! expects:
//!
//! - [`FeatureLayout::Location`]: 12 values derived from the coordinate alone
//!   (position terms plus synthetic temperature, precipitation, elevation and
//!   soil-porosity proxies).
//! - [`FeatureLayout::Extended`]: 54 values that also use the optional request
//!   fields (year, previous level, rainfall, temperature).

use crate::types::{Coordinate, PredictionRequest};

pub const LOCATION_FEATURE_COUNT: usize = 12;
pub const EXTENDED_FEATURE_COUNT: usize = 54;

pub const DEFAULT_PREVIOUS_LEVEL_M: f64 = 10.0;
pub const DEFAULT_RAINFALL_MM: f64 = 800.0;
pub const DEFAULT_TEMPERATURE_C: f64 = 25.0;
const BASELINE_YEAR: i32 = 2020;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureLayout {
    Location,
    Extended,
}

impl FeatureLayout {
    /// Layout producing exactly `count` features, if any.
    pub const fn for_count(count: usize) -> Option<Self> {
        match count {
            LOCATION_FEATURE_COUNT => Some(Self::Location),
            EXTENDED_FEATURE_COUNT => Some(Self::Extended),
            _ => None,
        }
    }

    pub const fn len(self) -> usize {
        match self {
            Self::Location => LOCATION_FEATURE_COUNT,
            Self::Extended => EXTENDED_FEATURE_COUNT,
        }
    }
}

/// Optional site observations with their defaults filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteInputs {
    pub year: i32,
    pub previous_level: f64,
    pub rainfall: f64,
    pub temperature: f64,
}

impl SiteInputs {
    pub fn from_request(request: &PredictionRequest, current_year: i32) -> Self {
        Self {
            year: request.year.unwrap_or(current_year),
            previous_level: request.previous_level.unwrap_or(DEFAULT_PREVIOUS_LEVEL_M),
            rainfall: request.rainfall.unwrap_or(DEFAULT_RAINFALL_MM),
            temperature: request.temperature.unwrap_or(DEFAULT_TEMPERATURE_C),
        }
    }

    pub const fn defaults(year: i32) -> Self {
        Self {
            year,
            previous_level: DEFAULT_PREVIOUS_LEVEL_M,
            rainfall: DEFAULT_RAINFALL_MM,
            temperature: DEFAULT_TEMPERATURE_C,
        }
    }
}

pub fn assemble(layout: FeatureLayout, coord: &Coordinate, inputs: &SiteInputs) -> Vec<f64> {
    match layout {
        FeatureLayout::Location => location_features(coord),
        FeatureLayout::Extended => extended_features(coord, inputs),
    }
}

fn location_features(coord: &Coordinate) -> Vec<f64> {
    let lat = coord.latitude;
    let lon = coord.longitude;

    let avg_temperature = 25.0 + lat / 10.0;
    let precipitation = (100.0 - lat.abs() * 2.0).max(0.0);
    let elevation = (lat * 100.0).abs() % 1000.0;
    let soil_porosity = 0.3 + (lon.abs() % 10.0) / 100.0;

    vec![
        lat,
        lon,
        lat.abs(),
        lon.rem_euclid(360.0),
        lat * lon,
        lat.to_radians().sin(),
        lon.to_radians().cos(),
        lat.powi(2) + lon.powi(2),
        avg_temperature,
        precipitation,
        elevation,
        soil_porosity,
    ]
}

fn extended_features(coord: &Coordinate, inputs: &SiteInputs) -> Vec<f64> {
    let lat = coord.latitude;
    let lon = coord.longitude;
    let year = f64::from(inputs.year);
    let prev = inputs.previous_level;
    let rain = inputs.rainfall;
    let temp = inputs.temperature;

    let mut features = Vec::with_capacity(EXTENDED_FEATURE_COUNT);

    // Raw inputs
    let base = [lat, lon, year, prev, rain, temp];
    features.extend_from_slice(&base);

    // Derived
    features.extend_from_slice(&[
        year - f64::from(BASELINE_YEAR),
        lat * lon,
        lat.powi(2),
        lon.powi(2),
        temp * rain / 1000.0,
        lat.abs(),
        lon.abs(),
    ]);

    // Cyclical, zonal and deviation terms
    let four_year_cycle =
        (2.0 * std::f64::consts::PI * f64::from(inputs.year.rem_euclid(4)) / 4.0).sin();
    features.extend_from_slice(&[
        four_year_cycle,
        (lat / 10.0).trunc(),
        (lon / 10.0).trunc(),
        temp - DEFAULT_TEMPERATURE_C,
        rain - DEFAULT_RAINFALL_MM,
        prev - DEFAULT_PREVIOUS_LEVEL_M,
        lat.abs().sqrt(),
        lon.abs().sqrt(),
        rain.max(1.0).ln(),
        (temp + 273.15).max(1.0).ln(),
    ]);

    // Pairwise products of the raw inputs
    for i in 0..base.len() {
        for j in (i + 1)..base.len() {
            features.push(base[i] * base[j]);
        }
    }

    // Pad with a repeating set of transforms
    let padding = [
        lat + lon,
        lat - lon,
        year / 100.0,
        if rain > 0.0 { temp / rain } else { 0.0 },
        prev * 2.0,
        lat.to_radians().sin(),
        lon.to_radians().cos(),
        (lat + lon) / 2.0,
        (lat - lon).abs(),
        0.0,
    ];
    let needed = EXTENDED_FEATURE_COUNT.saturating_sub(features.len());
    features.extend(padding.iter().cycle().take(needed));
    features.truncate(EXTENDED_FEATURE_COUNT);
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> Coordinate {
        Coordinate::new(28.6139, 77.2090).unwrap()
    }

    #[test]
    fn layouts_have_declared_length() {
        let inputs = SiteInputs::defaults(2025);
        for layout in [FeatureLayout::Location, FeatureLayout::Extended] {
            assert_eq!(assemble(layout, &delhi(), &inputs).len(), layout.len());
        }
    }

    #[test]
    fn layout_lookup() {
        assert_eq!(FeatureLayout::for_count(12), Some(FeatureLayout::Location));
        assert_eq!(FeatureLayout::for_count(54), Some(FeatureLayout::Extended));
        assert_eq!(FeatureLayout::for_count(7), None);
    }

    #[test]
    fn location_features_values() {
        let coord = Coordinate::new(20.0, -10.0).unwrap();
        let f = assemble(FeatureLayout::Location, &coord, &SiteInputs::defaults(2025));
        assert_eq!(f[0], 20.0);
        assert_eq!(f[2], 20.0);
        assert_eq!(f[3], 350.0);
        assert_eq!(f[4], -200.0);
        assert_eq!(f[8], 27.0);
        assert_eq!(f[9], 60.0);
        assert_eq!(f[10], 0.0);
        assert!((f[11] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn extended_uses_request_fields() {
        let request = PredictionRequest {
            latitude: Some(28.6139),
            longitude: Some(77.2090),
            year: Some(2025),
            previous_level: Some(12.5),
            rainfall: Some(650.0),
            temperature: None,
        };
        let inputs = SiteInputs::from_request(&request, 1999);
        assert_eq!(inputs.year, 2025);
        assert_eq!(inputs.temperature, DEFAULT_TEMPERATURE_C);

        let f = assemble(FeatureLayout::Extended, &delhi(), &inputs);
        assert_eq!(f[2], 2025.0);
        assert_eq!(f[3], 12.5);
        assert_eq!(f[4], 650.0);
        assert_eq!(f[6], 5.0);
        assert_eq!(f[18], 2.5);
    }

    #[test]
    fn extended_ends_with_padding() {
        let inputs = SiteInputs::defaults(2025);
        let f = assemble(FeatureLayout::Extended, &delhi(), &inputs);
        // 23 engineered + 15 products, then padding from index 38
        assert_eq!(f[38], 28.6139 + 77.2090);
        assert_eq!(f[47], 0.0);
        assert_eq!(f[48], 28.6139 + 77.2090);
        assert!(f.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn extreme_years_stay_finite() {
        for year in [i32::MIN, i32::MAX] {
            let f = assemble(FeatureLayout::Extended, &delhi(), &SiteInputs::defaults(year));
            assert_eq!(f[6], f64::from(year) - 2020.0);
            assert!(f.iter().all(|x| x.is_finite()), "{year}");
        }
    }

    #[test]
    fn missing_year_uses_current_year() {
        let inputs = SiteInputs::from_request(&PredictionRequest::default(), 2031);
        assert_eq!(inputs, SiteInputs::defaults(2031));
    }
}
