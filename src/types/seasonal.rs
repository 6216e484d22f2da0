//! Seasonal analysis types: SeasonalPattern, SeasonalPeriod, SeasonalAnalysis

use serde::{Deserialize, Serialize};

use super::{ClimateZone, RegionType};

/// English month names, index 0 = January.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name for a 1-based month number. Out-of-range input wraps.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[((month + 11) % 12) as usize]
}

/// Status band derived from the combined monthly multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelStatus {
    #[serde(rename = "Critical Low")]
    CriticalLow,
    Low,
    Moderate,
    Good,
}

impl LevelStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CriticalLow => "Critical Low",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::Good => "Good",
        }
    }
}

impl std::fmt::Display for LevelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One month of the seasonal water-level pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalPattern {
    pub month: String,
    /// 1–12
    pub month_number: u32,
    /// Estimated depth for the month (mbgl)
    pub water_level: f64,
    /// Combined multiplier as a percentage
    pub relative_level: f64,
    pub status: LevelStatus,
    pub description: String,
}

/// A named set of months with an explanation (recharge or stress window).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalPeriod {
    pub months: Vec<String>,
    pub description: String,
}

/// Seasonal section of the prediction result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalAnalysis {
    pub region_type: RegionType,
    pub climate_zone: ClimateZone,
    pub seasonal_patterns: Vec<SeasonalPattern>,
    pub critical_months: Vec<String>,
    pub recharge_period: SeasonalPeriod,
    pub stressed_period: SeasonalPeriod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_name_is_one_based() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
    }

    #[test]
    fn status_serializes_with_space() {
        let json = serde_json::to_string(&LevelStatus::CriticalLow).unwrap();
        assert_eq!(json, "\"Critical Low\"");
    }
}
