use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::property::PropertyId;
use crate::scoring::engine::overall_score;
use crate::store::AppState;

/// One row of the comparative health view: the headline scores for a
/// property, labeled for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyScoreSummary {
    pub id: PropertyId,
    pub label: String,
    pub overall: f64,
    pub structural: f64,
    pub systems: f64,
    pub safety: f64,
}

/// Score every property in the portfolio for side-by-side comparison,
/// in portfolio order.
pub fn portfolio_summaries(state: &AppState, today: NaiveDate) -> Vec<PropertyScoreSummary> {
    state
        .properties()
        .iter()
        .map(|property| {
            let report = overall_score(property, today);
            PropertyScoreSummary {
                id: property.id,
                label: property.display_label(),
                overall: report.overall,
                structural: report.structural.score,
                systems: report.systems.score,
                safety: report.safety.score,
            }
        })
        .collect()
}

/// Convenience wrapper summarizing against the local calendar date.
pub fn portfolio_summaries_now(state: &AppState) -> Vec<PropertyScoreSummary> {
    portfolio_summaries(state, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{FoundationType, PropertyType, RoofMaterial};
    use crate::store::PropertyDraft;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn draft(address: &str, year_built: i32) -> PropertyDraft {
        PropertyDraft {
            address: address.to_string(),
            city: "Culpeper".to_string(),
            state: "VA".to_string(),
            zip_code: "22701".to_string(),
            year_built,
            square_footage: 1850,
            property_type: PropertyType::SingleFamily,
            roof_material: RoofMaterial::Metal,
            roof_age: 0,
            foundation_type: FoundationType::Basement,
            hvac_age: 0,
            electrical_age: 0,
            plumbing_age: 0,
            last_inspection: Some(fixed_today()),
            image_data: None,
        }
    }

    #[test]
    fn test_empty_portfolio() {
        let state = AppState::new();
        assert!(portfolio_summaries(&state, fixed_today()).is_empty());
    }

    #[test]
    fn test_summaries_follow_portfolio_order() {
        let mut state = AppState::new();
        let newer = state.add_property(draft("1 Elm St", 2024)).unwrap();
        let older = state.add_property(draft("2 Oak Ave", 1950)).unwrap();

        let rows = portfolio_summaries(&state, fixed_today());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, newer);
        assert_eq!(rows[1].id, older);
        assert_eq!(rows[0].label, "1 Elm St, Culpeper");
        assert!(rows[0].overall > rows[1].overall);
    }

    #[test]
    fn test_summary_scores_match_engine() {
        let mut state = AppState::new();
        let id = state.add_property(draft("1 Elm St", 2024)).unwrap();

        let rows = portfolio_summaries(&state, fixed_today());
        let report = overall_score(state.property(id).unwrap(), fixed_today());
        assert_eq!(rows[0].overall, report.overall);
        assert_eq!(rows[0].structural, report.structural.score);
        assert_eq!(rows[0].systems, report.systems.score);
        assert_eq!(rows[0].safety, report.safety.score);
    }
}
