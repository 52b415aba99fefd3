use serde::{Deserialize, Serialize};

use crate::scoring::costs::{local_cost_estimate, CostEstimate};

/// User-supplied estimates for one improvement project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub improvement_name: String,
    pub estimated_cost: f64,
    pub resale_value_increase: f64,
    pub annual_savings: f64,
    pub years_to_project: u32,
}

/// Computed return-on-investment breakdown for an improvement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiAnalysis {
    pub total_operational_savings: f64,
    pub total_financial_benefit: f64,
    pub net_gain: f64,
    pub roi_percentage: f64,
    /// None when there are no annual savings to pay the cost back.
    pub payback_years: Option<f64>,
}

/// Validate inputs and compute the ROI breakdown.
/// Returns all validation errors at once (not just the first).
pub fn analyze_roi(inputs: &RoiInputs) -> Result<RoiAnalysis, Vec<String>> {
    let mut errors = Vec::new();

    if inputs.improvement_name.trim().is_empty() {
        errors.push("improvement_name: must not be empty".to_string());
    }
    if inputs.estimated_cost <= 0.0 {
        errors.push("estimated_cost: must be greater than zero".to_string());
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let total_operational_savings = inputs.annual_savings * inputs.years_to_project as f64;
    let total_financial_benefit = inputs.resale_value_increase + total_operational_savings;
    let net_gain = total_financial_benefit - inputs.estimated_cost;
    let roi_percentage = net_gain / inputs.estimated_cost * 100.0;
    let payback_years = if inputs.annual_savings > 0.0 {
        Some(inputs.estimated_cost / inputs.annual_savings)
    } else {
        None
    };

    Ok(RoiAnalysis {
        total_operational_savings,
        total_financial_benefit,
        net_gain,
        roi_percentage,
        payback_years,
    })
}

/// Keyword map from improvement descriptions to cost-table items, used
/// to prefill a cost suggestion. First matching keyword wins.
const COST_CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    ("hvac", "hvac_replacement"),
    ("air conditioner", "hvac_replacement"),
    ("furnace", "hvac_replacement"),
    ("roof", "roof_replacement"),
    ("electrical panel", "electrical_panel"),
    ("water heater", "water_heater"),
    ("plumbing repair", "plumbing_repair"),
];

/// Guess the cost-table item behind a free-text improvement name.
pub fn suggest_cost_item(improvement_name: &str) -> Option<&'static str> {
    let lowered = improvement_name.to_lowercase();
    COST_CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, item)| *item)
}

/// Regionally adjusted cost suggestion for an improvement, when its name
/// maps to a known cost item with a non-zero average.
pub fn suggest_cost(improvement_name: &str, zip_code: &str) -> Option<CostEstimate> {
    let item = suggest_cost_item(improvement_name)?;
    let estimate = local_cost_estimate(item, zip_code);
    if estimate.avg > 0 {
        Some(estimate)
    } else {
        None
    }
}
