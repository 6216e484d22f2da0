//! Seasonal pattern generator
//!
//! Turns the current depth into a 12-month pattern:
//! `combined[m] = region_base[m] * climate_adjustment[m]`,
//! `water_level[m] = current / combined[m]`.
//! A month with a combined multiplier above 1.0 sits shallower than the
//! current reading, below 1.0 deeper.

mod tables;

pub use tables::{climate_adjustment, region_seasonality, RegionSeasonality};

use crate::types::{
    month_name, ClimateZone, LevelStatus, RegionType, SeasonalAnalysis, SeasonalPattern,
    SeasonalPeriod,
};

// ============================================================================
// Status and season labels
// ============================================================================

/// Status band on the combined multiplier.
pub fn status_for(combined: f64) -> LevelStatus {
    if combined < 0.75 {
        LevelStatus::CriticalLow
    } else if combined < 0.85 {
        LevelStatus::Low
    } else if combined < 0.95 {
        LevelStatus::Moderate
    } else {
        LevelStatus::Good
    }
}

/// Indian meteorological season for a 1-based month.
pub const fn indian_season(month: u32) -> &'static str {
    match month {
        3..=5 => "Summer (pre-monsoon)",
        6..=9 => "Southwest Monsoon",
        10 | 11 => "Post-monsoon",
        _ => "Winter",
    }
}

fn describe(month: u32, status: LevelStatus) -> String {
    let phrase = match status {
        LevelStatus::CriticalLow => "water table at its deepest, shallow wells may fail",
        LevelStatus::Low => "below-average levels, expect reduced yield",
        LevelStatus::Moderate => "near-average groundwater levels",
        LevelStatus::Good => "well-recharged aquifer",
    };
    format!("{}: {phrase}", indian_season(month))
}

// ============================================================================
// Generator
// ============================================================================

/// Monthly pattern for January..December.
pub fn seasons(
    region: RegionType,
    climate: ClimateZone,
    current_level: f64,
) -> Vec<SeasonalPattern> {
    let base = region_seasonality(region).base;
    let adjustment = climate_adjustment(climate);

    (1..=12u32)
        .zip(base.iter().zip(adjustment.iter()))
        .map(|(month, (b, a))| {
            let combined = b * a;
            let status = status_for(combined);
            SeasonalPattern {
                month: month_name(month).to_string(),
                month_number: month,
                water_level: current_level / combined,
                relative_level: combined * 100.0,
                status,
                description: describe(month, status),
            }
        })
        .collect()
}

fn month_names(months: &[u32]) -> Vec<String> {
    months.iter().map(|m| month_name(*m).to_string()).collect()
}

pub fn critical_months(region: RegionType) -> Vec<String> {
    month_names(region_seasonality(region).critical_months)
}

pub fn recharge_period(region: RegionType) -> SeasonalPeriod {
    let profile = region_seasonality(region);
    SeasonalPeriod {
        months: month_names(profile.recharge_months),
        description: profile.recharge_description.to_string(),
    }
}

pub fn stressed_period(region: RegionType) -> SeasonalPeriod {
    let profile = region_seasonality(region);
    SeasonalPeriod {
        months: month_names(profile.stressed_months),
        description: profile.stressed_description.to_string(),
    }
}

/// Full seasonal section for one location.
pub fn analyze(region: RegionType, climate: ClimateZone, current_level: f64) -> SeasonalAnalysis {
    SeasonalAnalysis {
        region_type: region,
        climate_zone: climate,
        seasonal_patterns: seasons(region, climate, current_level),
        critical_months: critical_months(region),
        recharge_period: recharge_period(region),
        stressed_period: stressed_period(region),
    }
}
