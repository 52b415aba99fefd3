mod state;
mod validate;

pub use state::{AppState, MaintenanceDraft, PropertyDraft, SessionView};
pub use validate::{validate_maintenance_draft, validate_property_draft};
