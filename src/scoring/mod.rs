pub mod costs;
pub mod degradation;
pub mod engine;
pub mod schedule;

pub use costs::{
    local_cost_estimate, regional_info, Confidence, CostEstimate, RegionalInfo, COST_ITEM_TYPES,
};
pub use degradation::age_score;
pub use engine::{
    environmental_score, overall_score, overall_score_now, safety_score, structural_score,
    systems_score, CategoryScore, ComponentScore, HealthReport,
};
pub use schedule::{
    generate_maintenance_schedule, generate_maintenance_schedule_now, MaintenanceTask, Priority,
};
