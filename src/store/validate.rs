use super::{MaintenanceDraft, PropertyDraft};

/// Validate a property form submission.
/// Returns all validation errors at once (not just the first).
pub fn validate_property_draft(draft: &PropertyDraft) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if draft.address.trim().is_empty() {
        errors.push("address: must not be empty".to_string());
    }
    if draft.city.trim().is_empty() {
        errors.push("city: must not be empty".to_string());
    }
    if draft.state.trim().is_empty() {
        errors.push("state: must not be empty".to_string());
    }
    if draft.zip_code.trim().is_empty() {
        errors.push("zip_code: must not be empty".to_string());
    }
    if draft.year_built <= 1800 {
        errors.push(format!(
            "year_built: {} is not a plausible construction year",
            draft.year_built
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a maintenance-record form submission. Existence of the
/// referenced property is checked by the store, which owns the list.
pub fn validate_maintenance_draft(draft: &MaintenanceDraft) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if draft.category.trim().is_empty() {
        errors.push("category: must not be empty".to_string());
    }
    if draft.description.trim().is_empty() {
        errors.push("description: must not be empty".to_string());
    }
    if draft.cost < 0.0 {
        errors.push(format!("cost: {} must be non-negative", draft.cost));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
