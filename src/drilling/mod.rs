//! Drilling planner: urgency tier, optimal/avoid months, 12-month rolling
//! timeline and the next best month to drill.

mod tables;

pub use tables::{region_window, DrillingWindow};

use crate::types::{
    month_name, BestDrillingTime, ClimateZone, DrillingTimeline, MonthSuitability, RegionType,
    TimelineEntry, Urgency,
};

/// Fold any month number into 1–12.
pub const fn normalize_month(month: u32) -> u32 {
    (month + 11) % 12 + 1
}

const fn month_at_offset(current_month: u32, offset: u32) -> u32 {
    (normalize_month(current_month) - 1 + offset) % 12 + 1
}

/// Urgency tier, first match wins.
pub fn urgency(current: f64, future: f64) -> Urgency {
    if current < 5.0 || future > 80.0 {
        Urgency::Immediate
    } else if current < 10.0 || future > 60.0 {
        Urgency::High
    } else if current < 20.0 || future > 40.0 {
        Urgency::Moderate
    } else {
        Urgency::Low
    }
}

fn label_month(month: u32, window: &DrillingWindow, urgency: Urgency) -> MonthSuitability {
    if window.optimal.contains(&month) {
        MonthSuitability::Excellent
    } else if window.avoid.contains(&month) {
        if urgency == Urgency::Immediate {
            MonthSuitability::Conditional
        } else {
            MonthSuitability::Avoid
        }
    } else {
        MonthSuitability::Acceptable
    }
}

fn month_note(suitability: MonthSuitability, window: &DrillingWindow) -> String {
    match suitability {
        MonthSuitability::Excellent => "Optimal drilling window".to_string(),
        MonthSuitability::Acceptable => "Drilling possible with standard precautions".to_string(),
        MonthSuitability::Avoid => format!("Not recommended: {}", window.avoid_reason),
        MonthSuitability::Conditional => format!(
            "Drill only if the need cannot wait: {}",
            window.avoid_reason
        ),
    }
}

const fn climate_remark(climate: ClimateZone) -> &'static str {
    match climate {
        ClimateZone::Arid => {
            "Arid climate: budget for deeper casing and yield testing in summer."
        }
        ClimateZone::SemiArid => {
            "Semi-arid climate: recharge is erratic, so confirm yield after the rains."
        }
        ClimateZone::TropicalWet => "High rainfall keeps the dry season short.",
        ClimateZone::TropicalWetDry => "A distinct dry season follows the monsoon.",
        ClimateZone::SubtropicalHumid => "Humid subtropical climate with a hot pre-monsoon summer.",
        ClimateZone::Mountain => "Mountain terrain: access and freezing limit the working season.",
        ClimateZone::Temperate => "No strong monsoon signal at this location.",
    }
}

const fn urgency_remark(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Immediate => {
            "Immediate attention needed: levels are critical, avoid-months may be used with care."
        }
        Urgency::High => "High priority: plan drilling within the next optimal window.",
        Urgency::Moderate => "Moderate priority: drill in the next optimal window.",
        Urgency::Low => "Low priority: drilling can be scheduled flexibly.",
    }
}

/// Build the drilling plan for a location.
pub fn plan(
    region: RegionType,
    climate: ClimateZone,
    current: f64,
    future: f64,
    current_month: u32,
) -> DrillingTimeline {
    let window = region_window(region);
    let urgency = urgency(current, future);

    let timeline = (0..12u32)
        .map(|offset| {
            let month = month_at_offset(current_month, offset);
            let suitability = label_month(month, window, urgency);
            TimelineEntry {
                month,
                month_name: month_name(month).to_string(),
                months_from_now: offset,
                suitability,
                note: month_note(suitability, window),
            }
        })
        .collect();

    DrillingTimeline {
        urgency,
        optimal_months: window.optimal.to_vec(),
        avoid_months: window.avoid.to_vec(),
        timeline,
        reasoning: format!(
            "{} {} {}",
            window.rationale,
            climate_remark(climate),
            urgency_remark(urgency)
        ),
    }
}

/// Next optimal month, scanning forward from (and including) the current month.
pub fn best_drilling_time(region: RegionType, current_month: u32) -> BestDrillingTime {
    best_in(region_window(region).optimal, current_month)
}

fn best_in(optimal: &[u32], current_month: u32) -> BestDrillingTime {
    let found = (0..12u32)
        .map(|offset| (offset, month_at_offset(current_month, offset)))
        .find(|(_, month)| optimal.contains(month));

    match found {
        Some((0, month)) => BestDrillingTime {
            month,
            month_name: month_name(month).to_string(),
            months_from_now: 0,
            recommendation: format!(
                "Drill now: {} is within the optimal window",
                month_name(month)
            ),
        },
        Some((offset, month)) => BestDrillingTime {
            month,
            month_name: month_name(month).to_string(),
            months_from_now: offset,
            recommendation: format!(
                "Plan drilling for {} ({offset} month{} from now)",
                month_name(month),
                if offset == 1 { "" } else { "s" }
            ),
        },
        None => {
            let month = normalize_month(current_month);
            BestDrillingTime {
                month,
                month_name: month_name(month).to_string(),
                months_from_now: 0,
                recommendation: "No optimal month identified; proceed with caution".to_string(),
            }
        }
    }
}
