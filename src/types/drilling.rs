//! Drilling plan types: Urgency, TimelineEntry, DrillingTimeline, BestDrillingTime

use serde::{Deserialize, Serialize};

/// Drilling-priority tier derived from current/future depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Moderate,
    High,
    Immediate,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Immediate => "Immediate",
        };
        f.write_str(s)
    }
}

/// Label for a month in the rolling drilling timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthSuitability {
    Excellent,
    Acceptable,
    Avoid,
    /// An avoid-month relabelled because the drilling need is immediate.
    Conditional,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// 1–12
    pub month: u32,
    pub month_name: String,
    /// Offset from the current month (0–11)
    pub months_from_now: u32,
    pub suitability: MonthSuitability,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillingTimeline {
    pub urgency: Urgency,
    #[serde(rename = "optimalMonths")]
    pub optimal_months: Vec<u32>,
    #[serde(rename = "avoidMonths")]
    pub avoid_months: Vec<u32>,
    pub timeline: Vec<TimelineEntry>,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestDrillingTime {
    pub month: u32,
    pub month_name: String,
    pub months_from_now: u32,
    pub recommendation: String,
}
