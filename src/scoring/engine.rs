use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::degradation::age_score;
use crate::property::Property;

/// Expected lifespans (years) for whole-building and mechanical systems.
const BUILDING_EXPECTED_LIFE: f64 = 80.0;
const HVAC_EXPECTED_LIFE: f64 = 18.0;
const ELECTRICAL_EXPECTED_LIFE: f64 = 35.0;
const PLUMBING_EXPECTED_LIFE: f64 = 50.0;

/// Category weights for the overall score.
const WEIGHT_STRUCTURAL: f64 = 0.3;
const WEIGHT_SYSTEMS: f64 = 0.4;
const WEIGHT_SAFETY: f64 = 0.2;
const WEIGHT_ENVIRONMENTAL: f64 = 0.1;

/// A labeled sub-metric within a category, e.g. "HVAC" within Systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub label: String,
    pub value: f64,
}

/// One category's weighted score plus its labeled components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: f64,
    pub components: Vec<ComponentScore>,
}

/// Full health breakdown for a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub overall: f64,
    pub structural: CategoryScore,
    pub systems: CategoryScore,
    pub safety: CategoryScore,
    pub environmental: CategoryScore,
}

/// Scores are displayed at one decimal; each category rounds once when
/// produced and the overall value rounds the weighted sum of the
/// already-rounded categories.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn component(label: &str, value: f64) -> ComponentScore {
    ComponentScore {
        label: label.to_string(),
        value: round1(value),
    }
}

/// Structural category: building age, foundation quality, and roof
/// condition adjusted for material lifespan.
pub fn structural_score(property: &Property, today: NaiveDate) -> CategoryScore {
    let building_age_score =
        age_score(property.building_age(today) as f64, BUILDING_EXPECTED_LIFE);
    let foundation_score = property.foundation_type.quality_score();
    let roof_score = age_score(
        property.roof_age as f64,
        property.roof_material.expected_life() as f64,
    );

    let score = building_age_score * 0.4 + foundation_score * 0.3 + roof_score * 0.3;
    CategoryScore {
        score: round1(score),
        components: vec![
            component("Building Age", building_age_score),
            component("Foundation", foundation_score),
            component("Roof Condition", roof_score),
        ],
    }
}

/// Systems category: HVAC, electrical, and plumbing ages against their
/// design lifespans.
pub fn systems_score(property: &Property) -> CategoryScore {
    let hvac = age_score(property.hvac_age as f64, HVAC_EXPECTED_LIFE);
    let electrical = age_score(property.electrical_age as f64, ELECTRICAL_EXPECTED_LIFE);
    let plumbing = age_score(property.plumbing_age as f64, PLUMBING_EXPECTED_LIFE);

    let score = hvac * 0.4 + electrical * 0.3 + plumbing * 0.3;
    CategoryScore {
        score: round1(score),
        components: vec![
            component("HVAC", hvac),
            component("Electrical", electrical),
            component("Plumbing", plumbing),
        ],
    }
}

/// Safety category: deduction-based, starting from 90. Building age,
/// aging electrical, and a stale or absent inspection each cost points.
pub fn safety_score(property: &Property, today: NaiveDate) -> CategoryScore {
    let mut score: f64 = 90.0;
    let age = property.building_age(today);

    if age > 50 {
        score -= 15.0;
    } else if age > 30 {
        score -= 7.0;
    }

    if property.electrical_age > 30 {
        score -= 5.0;
    }

    match property.last_inspection {
        None => {
            if age > 20 {
                score -= 5.0;
            }
        }
        Some(date) => {
            if (today - date).num_days() > 5 * 365 {
                score -= 5.0;
            }
        }
    }

    let score = round1(score.max(0.0));
    CategoryScore {
        score,
        components: vec![ComponentScore {
            label: "General Safety Factors".to_string(),
            value: score,
        }],
    }
}

/// Environmental category: fixed placeholder value.
pub fn environmental_score(_property: &Property) -> CategoryScore {
    CategoryScore {
        score: 80.0,
        components: vec![ComponentScore {
            label: "General Environmental".to_string(),
            value: 80.0,
        }],
    }
}

/// Weighted overall health score with the per-category breakdowns.
pub fn overall_score(property: &Property, today: NaiveDate) -> HealthReport {
    let structural = structural_score(property, today);
    let systems = systems_score(property);
    let safety = safety_score(property, today);
    let environmental = environmental_score(property);

    let overall = structural.score * WEIGHT_STRUCTURAL
        + systems.score * WEIGHT_SYSTEMS
        + safety.score * WEIGHT_SAFETY
        + environmental.score * WEIGHT_ENVIRONMENTAL;

    HealthReport {
        overall: round1(overall),
        structural,
        systems,
        safety,
        environmental,
    }
}

/// Convenience wrapper scoring against the local calendar date.
pub fn overall_score_now(property: &Property) -> HealthReport {
    overall_score(property, Local::now().date_naive())
}
