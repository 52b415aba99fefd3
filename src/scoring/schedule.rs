use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::costs::local_cost_estimate;
use crate::property::Property;

/// Task priority, ordered high-first for schedule sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Important,
    Routine,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Important => "important",
            Priority::Routine => "routine",
        }
    }
}

/// One projected maintenance task with a regionally adjusted cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceTask {
    pub task: String,
    pub frequency: String,
    pub next_due: NaiveDate,
    pub priority: Priority,
    pub estimated_cost: u64,
    pub description: String,
}

fn task(
    name: &str,
    frequency: &str,
    next_due: NaiveDate,
    priority: Priority,
    estimated_cost: u64,
    description: &str,
) -> MaintenanceTask {
    MaintenanceTask {
        task: name.to_string(),
        frequency: frequency.to_string(),
        next_due,
        priority,
        estimated_cost,
        description: description.to_string(),
    }
}

fn due(today: NaiveDate, days: u64) -> NaiveDate {
    today + Days::new(days)
}

/// Project a maintenance schedule from the property's component ages.
///
/// Each threshold rule is independent and fires at most once; rules are
/// not mutually exclusive across categories. The result is stably sorted
/// by priority (high first), then due date. Pure for a given property
/// snapshot and `today`.
pub fn generate_maintenance_schedule(
    property: &Property,
    today: NaiveDate,
) -> Vec<MaintenanceTask> {
    let mut schedule = Vec::new();
    let zip = property.zip_code.as_str();

    // HVAC ladder: filter upkeep while new, annual service through ~80%
    // of the 18-year lifespan, replacement planning beyond that.
    if property.hvac_age <= 1 {
        let est = local_cost_estimate("hvac_service", zip);
        schedule.push(task(
            "HVAC Filter Check/Replacement",
            "Every 3 months",
            due(today, 90),
            Priority::Routine,
            (est.min / 10).max(20),
            "Check and replace air filters as needed.",
        ));
    } else if property.hvac_age as f64 <= 18.0 * 0.8 {
        let est = local_cost_estimate("hvac_service", zip);
        schedule.push(task(
            "HVAC Annual Service",
            "Annually",
            due(today, 365),
            Priority::Important,
            est.avg,
            "Professional tune-up and inspection.",
        ));
    } else {
        let est = local_cost_estimate("hvac_replacement", zip);
        schedule.push(task(
            "HVAC Replacement Planning",
            "Within 1-2 years",
            due(today, 365),
            Priority::High,
            est.avg,
            "Budget and plan for HVAC system replacement.",
        ));
    }

    if property.roof_age > 10 {
        let est = local_cost_estimate("roof_repair", zip);
        schedule.push(task(
            "Roof Inspection (detailed for age)",
            "Annually",
            due(today, 365),
            Priority::Important,
            est.min.max(150),
            "Inspect roof for wear and potential leaks, especially past 10 years.",
        ));
    }

    if property.electrical_age > 30 {
        let est = local_cost_estimate("electrical_panel", zip);
        schedule.push(task(
            "Electrical System Inspection",
            "Consider within 1 year",
            due(today, 365),
            Priority::Important,
            (est.min / 5).max(150),
            "Inspect aging electrical panel and wiring.",
        ));
    }
    if property.electrical_age as f64 > 35.0 * 0.9 {
        let est = local_cost_estimate("electrical_panel", zip);
        schedule.push(task(
            "Consider Electrical Panel Upgrade",
            "Within 2-3 years",
            due(today, 730),
            Priority::High,
            est.avg,
            "Plan for upgrading an electrical panel that may be original.",
        ));
    }

    if property.plumbing_age > 8 {
        let est = local_cost_estimate("water_heater", zip);
        schedule.push(task(
            "Water Heater Check/Service",
            "Annually if >8yrs old",
            due(today, 365),
            Priority::Important,
            (est.min / 10).max(100),
            "Inspect water heater; plan for replacement if near end-of-life.",
        ));
    }
    if property.plumbing_age as f64 > 50.0 * 0.8 {
        let est = local_cost_estimate("plumbing_repair", zip);
        schedule.push(task(
            "Major Plumbing Inspection (Pipes)",
            "Consider within 2 years",
            due(today, 730),
            Priority::High,
            est.avg,
            "Inspect for potential major plumbing updates if original pipes.",
        ));
    }

    // Seasonal tasks fire unconditionally.
    let gutter_est = local_cost_estimate("gutter_replacement", zip);
    let gutter_clean_cost = if gutter_est.min > 0 {
        (gutter_est.min / 10).max(150)
    } else {
        150
    };
    schedule.push(task(
        "Gutter Cleaning (Spring)",
        "Annually (Spring)",
        due(today, 120),
        Priority::Routine,
        gutter_clean_cost,
        "Clean gutters and downspouts after winter.",
    ));
    schedule.push(task(
        "Gutter Cleaning (Fall)",
        "Annually (Fall)",
        due(today, 300),
        Priority::Routine,
        gutter_clean_cost,
        "Clean gutters and downspouts before winter.",
    ));
    schedule.push(task(
        "Exterior Caulking & Sealing Check",
        "Annually",
        due(today, 270),
        Priority::Routine,
        100,
        "Check windows, doors, and siding for gaps to prevent drafts and water intrusion.",
    ));
    schedule.push(task(
        "Smoke & CO Detector Test/Battery Change",
        "Semi-Annually",
        due(today, 180),
        Priority::Important,
        10,
        "Test all detectors and replace batteries as needed.",
    ));

    schedule.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then(a.next_due.cmp(&b.next_due))
    });
    schedule
}

/// Convenience wrapper scheduling against the local calendar date.
pub fn generate_maintenance_schedule_now(property: &Property) -> Vec<MaintenanceTask> {
    generate_maintenance_schedule(property, Local::now().date_naive())
}
