//! Property portfolio health scoring and maintenance planning.
//!
//! The core of the crate is the scoring engine: pure functions that turn
//! a property's physical attributes (ages of its degradable components,
//! materials, inspection history) into a weighted 0-100 health score,
//! per-category breakdowns, a prioritized maintenance schedule, and
//! ZIP-adjusted cost estimates. Around it sit the in-process application
//! state (the property portfolio and its maintenance log) and a memoized
//! weather lookup for the dashboard's conditions panel.
//!
//! Scoring never fails: every scoring function and the schedule
//! generator is total over valid property values, with unknown
//! categorical inputs resolved through documented defaults.

pub mod config;
pub mod portfolio;
pub mod property;
pub mod roi;
pub mod scoring;
pub mod store;
pub mod weather;

pub use portfolio::{portfolio_summaries, portfolio_summaries_now, PropertyScoreSummary};
pub use property::{
    FoundationType, MaintenanceRecord, Property, PropertyId, PropertyType, RoofMaterial, Urgency,
};
pub use scoring::{
    age_score, generate_maintenance_schedule, local_cost_estimate, overall_score, regional_info,
    HealthReport, MaintenanceTask,
};
pub use store::{AppState, MaintenanceDraft, PropertyDraft};
pub use weather::{WeatherError, WeatherReport, WeatherService};
