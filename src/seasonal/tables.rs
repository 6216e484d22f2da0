//! Static monthly multiplier tables.
//!
//! A multiplier of 1.0 is the annual mean level. Values above 1.0 mean a
//! fuller aquifer (shallower water table), values below mean drawdown.
//! Index 0 = January.

use crate::types::{ClimateZone, RegionType};

/// Seasonal profile of one region.
#[derive(Debug)]
pub struct RegionSeasonality {
    pub base: [f64; 12],
    /// Months (1–12) where wells most often run dry
    pub critical_months: &'static [u32],
    pub recharge_months: &'static [u32],
    pub recharge_description: &'static str,
    pub stressed_months: &'static [u32],
    pub stressed_description: &'static str,
}

const THAR_DESERT: RegionSeasonality = RegionSeasonality {
    base: [0.90, 0.85, 0.78, 0.70, 0.65, 0.68, 0.85, 1.00, 1.05, 1.00, 0.95, 0.92],
    critical_months: &[4, 5, 6],
    recharge_months: &[8, 9],
    recharge_description: "Brief, erratic monsoon; recharge depends on johads and tankas",
    stressed_months: &[3, 4, 5, 6],
    stressed_description: "Extreme heat and evaporation with heavy pumping before the rains",
};

const WESTERN_GHATS: RegionSeasonality = RegionSeasonality {
    base: [1.00, 0.92, 0.85, 0.78, 0.72, 0.95, 1.25, 1.35, 1.30, 1.20, 1.10, 1.05],
    critical_months: &[4, 5],
    recharge_months: &[6, 7, 8, 9],
    recharge_description: "Intense orographic southwest monsoon rainfall",
    stressed_months: &[3, 4, 5],
    stressed_description: "Fast runoff on steep laterite slopes leaves little storage by summer",
};

const NORTHEAST_HILLS: RegionSeasonality = RegionSeasonality {
    base: [0.95, 0.90, 0.88, 0.92, 1.00, 1.15, 1.25, 1.28, 1.20, 1.10, 1.02, 0.98],
    critical_months: &[2, 3],
    recharge_months: &[5, 6, 7, 8, 9],
    recharge_description: "Early pre-monsoon showers followed by a long, heavy monsoon",
    stressed_months: &[1, 2, 3],
    stressed_description: "Dry winter with springs at their lowest discharge",
};

const GANGETIC_PLAINS: RegionSeasonality = RegionSeasonality {
    base: [1.00, 0.95, 0.88, 0.80, 0.75, 0.82, 1.05, 1.18, 1.20, 1.12, 1.05, 1.02],
    critical_months: &[4, 5, 6],
    recharge_months: &[7, 8, 9, 10],
    recharge_description: "Monsoon rainfall and river floods recharge the thick alluvial aquifer",
    stressed_months: &[4, 5, 6],
    stressed_description: "Rabi irrigation and summer heat draw the water table down",
};

const DECCAN_PLATEAU: RegionSeasonality = RegionSeasonality {
    base: [0.95, 0.88, 0.80, 0.72, 0.68, 0.78, 0.95, 1.05, 1.12, 1.15, 1.08, 1.00],
    critical_months: &[3, 4, 5, 6],
    recharge_months: &[8, 9, 10, 11],
    recharge_description: "Slow infiltration into weathered and fractured basalt after the monsoon",
    stressed_months: &[2, 3, 4, 5, 6],
    stressed_description: "Hard-rock aquifers with low storage deplete quickly in the dry season",
};

const COASTAL_PLAINS: RegionSeasonality = RegionSeasonality {
    base: [1.00, 0.95, 0.90, 0.85, 0.82, 0.95, 1.15, 1.20, 1.15, 1.10, 1.12, 1.05],
    critical_months: &[4, 5],
    recharge_months: &[6, 7, 8, 9, 10, 11],
    recharge_description: "Southwest monsoon plus northeast monsoon rains on the east coast",
    stressed_months: &[3, 4, 5],
    stressed_description: "Pre-monsoon drawdown with a risk of saline intrusion near the shore",
};

const CENTRAL_HIGHLANDS: RegionSeasonality = RegionSeasonality {
    base: [0.98, 0.92, 0.84, 0.76, 0.72, 0.80, 1.02, 1.15, 1.18, 1.10, 1.04, 1.00],
    critical_months: &[4, 5, 6],
    recharge_months: &[7, 8, 9, 10],
    recharge_description: "Monsoon recharge through plateau soils and surface tanks",
    stressed_months: &[3, 4, 5, 6],
    stressed_description: "Hot, dry summer with falling levels in shallow dug wells",
};

const MIXED_TERRAIN: RegionSeasonality = RegionSeasonality {
    base: [1.00, 0.96, 0.92, 0.88, 0.85, 0.90, 1.05, 1.12, 1.12, 1.06, 1.02, 1.00],
    critical_months: &[4, 5],
    recharge_months: &[7, 8, 9],
    recharge_description: "Main rainy season",
    stressed_months: &[4, 5, 6],
    stressed_description: "Late dry season before the rains return",
};

pub const fn region_seasonality(region: RegionType) -> &'static RegionSeasonality {
    match region {
        RegionType::ThartDesert => &THAR_DESERT,
        RegionType::WesternGhats => &WESTERN_GHATS,
        RegionType::NortheastHills => &NORTHEAST_HILLS,
        RegionType::GangeticPlains => &GANGETIC_PLAINS,
        RegionType::DeccanPlateau => &DECCAN_PLATEAU,
        RegionType::CoastalPlains => &COASTAL_PLAINS,
        RegionType::CentralHighlands => &CENTRAL_HIGHLANDS,
        RegionType::MixedTerrain => &MIXED_TERRAIN,
    }
}

/// Monthly climate adjustment applied on top of the regional base.
pub const fn climate_adjustment(climate: ClimateZone) -> &'static [f64; 12] {
    match climate {
        ClimateZone::Arid => {
            &[1.00, 0.98, 0.95, 0.92, 0.90, 0.92, 0.98, 1.02, 1.02, 1.00, 1.00, 1.00]
        }
        ClimateZone::SemiArid => {
            &[1.00, 0.98, 0.96, 0.94, 0.92, 0.95, 1.00, 1.03, 1.04, 1.02, 1.00, 1.00]
        }
        ClimateZone::TropicalWet => {
            &[1.00, 0.98, 0.96, 0.95, 0.96, 1.04, 1.08, 1.08, 1.05, 1.02, 1.00, 1.00]
        }
        ClimateZone::TropicalWetDry => {
            &[1.00, 0.98, 0.96, 0.94, 0.93, 0.98, 1.04, 1.06, 1.05, 1.02, 1.00, 1.00]
        }
        ClimateZone::SubtropicalHumid => {
            &[1.00, 0.99, 0.97, 0.95, 0.95, 0.98, 1.04, 1.06, 1.05, 1.02, 1.00, 1.00]
        }
        // Snowmelt-fed recharge peaks in late spring
        ClimateZone::Mountain => {
            &[0.96, 0.95, 0.98, 1.02, 1.06, 1.06, 1.04, 1.02, 1.00, 0.98, 0.97, 0.96]
        }
        ClimateZone::Temperate => &[1.0; 12],
    }
}
