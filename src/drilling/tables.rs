//! Per-region drilling windows. Optimal and avoid months never overlap.

use crate::types::RegionType;

#[derive(Debug)]
pub struct DrillingWindow {
    pub optimal: &'static [u32],
    pub avoid: &'static [u32],
    pub rationale: &'static str,
    pub avoid_reason: &'static str,
}

const THAR_DESERT: DrillingWindow = DrillingWindow {
    optimal: &[10, 11, 12, 1, 2],
    avoid: &[4, 5, 6],
    rationale: "Thar Desert: drill in the cool season after the short monsoon, when levels are at their annual high.",
    avoid_reason: "extreme summer heat and the deepest water table of the year",
};

const WESTERN_GHATS: DrillingWindow = DrillingWindow {
    optimal: &[11, 12, 1, 2],
    avoid: &[6, 7, 8, 9],
    rationale: "Western Ghats: drill once slopes have drained after the monsoon.",
    avoid_reason: "heavy monsoon rain, landslide risk and inaccessible sites",
};

const NORTHEAST_HILLS: DrillingWindow = DrillingWindow {
    optimal: &[11, 12, 1, 2, 3],
    avoid: &[5, 6, 7, 8, 9],
    rationale: "Northeast Hills: the dry winter is the only reliable working season.",
    avoid_reason: "prolonged monsoon with flooding and road closures",
};

const GANGETIC_PLAINS: DrillingWindow = DrillingWindow {
    optimal: &[11, 12, 1, 2, 3],
    avoid: &[7, 8, 9],
    rationale: "Gangetic Plains: drill after the monsoon once floodwater has receded and the alluvium is recharged.",
    avoid_reason: "waterlogged fields and river flooding",
};

const DECCAN_PLATEAU: DrillingWindow = DrillingWindow {
    optimal: &[10, 11, 12, 1],
    avoid: &[6, 7, 8],
    rationale: "Deccan Plateau: fractures carry the most water right after the monsoon, which makes yield testing reliable.",
    avoid_reason: "monsoon rain on black cotton soil makes rig movement difficult",
};

const COASTAL_PLAINS: DrillingWindow = DrillingWindow {
    optimal: &[12, 1, 2, 3],
    avoid: &[6, 7, 8, 9],
    rationale: "Coastal Plains: drill in the dry months and test for salinity before completing the well.",
    avoid_reason: "monsoon flooding and cyclone risk",
};

const CENTRAL_HIGHLANDS: DrillingWindow = DrillingWindow {
    optimal: &[10, 11, 12, 1, 2],
    avoid: &[7, 8, 9],
    rationale: "Central Highlands: drill after the monsoon while recharge is fresh.",
    avoid_reason: "peak monsoon with poor site access",
};

const MIXED_TERRAIN: DrillingWindow = DrillingWindow {
    optimal: &[11, 12, 1, 2],
    avoid: &[7, 8],
    rationale: "Mixed terrain: drill in the dry season following the rains.",
    avoid_reason: "peak rainy season",
};

pub const fn region_window(region: RegionType) -> &'static DrillingWindow {
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
