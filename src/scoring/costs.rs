use serde::{Deserialize, Serialize};

/// How much trust to place in a regional multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// Regional cost adjustment resolved from a ZIP code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalInfo {
    pub multiplier: f64,
    pub region: &'static str,
    pub confidence: Confidence,
}

/// Cost estimate for one repair/replacement item, regionally adjusted.
/// Dollar figures are truncated to whole dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub min: u64,
    pub max: u64,
    pub avg: u64,
    pub national_avg: u64,
    pub confidence: Confidence,
    pub region: String,
}

struct Baseline {
    item: &'static str,
    min: u64,
    max: u64,
    avg: u64,
}

/// National baseline repair/replacement costs in dollars.
const NATIONAL_COST_BASELINE: &[Baseline] = &[
    Baseline { item: "hvac_service", min: 200, max: 500, avg: 350 },
    Baseline { item: "hvac_replacement", min: 5000, max: 12000, avg: 7500 },
    Baseline { item: "roof_repair", min: 400, max: 2000, avg: 1000 },
    Baseline { item: "roof_replacement", min: 10000, max: 30000, avg: 15000 },
    Baseline { item: "electrical_panel", min: 1500, max: 4000, avg: 2500 },
    Baseline { item: "plumbing_repair", min: 250, max: 1000, avg: 600 },
    Baseline { item: "water_heater", min: 1000, max: 3500, avg: 1800 },
    Baseline { item: "foundation_repair", min: 3000, max: 25000, avg: 10000 },
    Baseline { item: "gutter_replacement", min: 1000, max: 3000, avg: 1700 },
];

/// Item keys accepted by [`local_cost_estimate`], for presentation pickers.
pub const COST_ITEM_TYPES: [&str; 9] = [
    "hvac_service",
    "hvac_replacement",
    "roof_repair",
    "roof_replacement",
    "electrical_panel",
    "plumbing_repair",
    "water_heater",
    "foundation_repair",
    "gutter_replacement",
];

struct RegionEntry {
    key: &'static str,
    multiplier: f64,
    region: &'static str,
    confidence: Confidence,
}

/// Exact five-digit ZIP entries first; single-digit keys are prefix
/// entries matched against the first digit of the ZIP.
const REGIONAL_MULTIPLIERS: &[RegionEntry] = &[
    RegionEntry { key: "22701", multiplier: 0.85, region: "Central Virginia - Rural", confidence: Confidence::High },
    RegionEntry { key: "22102", multiplier: 1.35, region: "Northern Virginia - DC Metro", confidence: Confidence::High },
    RegionEntry { key: "10001", multiplier: 1.85, region: "Manhattan, NY", confidence: Confidence::High },
    RegionEntry { key: "90210", multiplier: 1.65, region: "Los Angeles Metro", confidence: Confidence::High },
    RegionEntry { key: "94102", multiplier: 1.75, region: "San Francisco Bay Area", confidence: Confidence::High },
    RegionEntry { key: "60601", multiplier: 1.25, region: "Chicago Metro", confidence: Confidence::High },
    RegionEntry { key: "2", multiplier: 1.45, region: "Northeast Corridor", confidence: Confidence::Medium },
    RegionEntry { key: "9", multiplier: 1.40, region: "West Coast", confidence: Confidence::Medium },
];

const DEFAULT_REGION: RegionalInfo = RegionalInfo {
    multiplier: 1.00,
    region: "National Average",
    confidence: Confidence::Low,
};

/// Resolve the cost region for a ZIP code: exact match first, then
/// first-digit prefix, then the national-average default.
pub fn regional_info(zip_code: &str) -> RegionalInfo {
    let zip = zip_code.trim();
    if let Some(entry) = REGIONAL_MULTIPLIERS.iter().find(|e| e.key == zip) {
        return RegionalInfo {
            multiplier: entry.multiplier,
            region: entry.region,
            confidence: entry.confidence,
        };
    }
    if let Some(first) = zip.chars().next() {
        let prefix = first.to_string();
        if let Some(entry) = REGIONAL_MULTIPLIERS.iter().find(|e| e.key == prefix) {
            return RegionalInfo {
                multiplier: entry.multiplier,
                region: entry.region,
                confidence: entry.confidence,
            };
        }
    }
    DEFAULT_REGION
}

/// Regionally adjusted cost estimate for a named item. Unknown item
/// types return an explicit zero-valued estimate rather than an error.
pub fn local_cost_estimate(item_type: &str, zip_code: &str) -> CostEstimate {
    let Some(baseline) = NATIONAL_COST_BASELINE.iter().find(|b| b.item == item_type) else {
        return CostEstimate {
            min: 0,
            max: 0,
            avg: 0,
            national_avg: 0,
            confidence: Confidence::Low,
            region: "Unknown".to_string(),
        };
    };

    let info = regional_info(zip_code);
    CostEstimate {
        min: (baseline.min as f64 * info.multiplier) as u64,
        max: (baseline.max as f64 * info.multiplier) as u64,
        avg: (baseline.avg as f64 * info.multiplier) as u64,
        national_avg: baseline.avg,
        confidence: info.confidence,
        region: info.region.to_string(),
    }
}
