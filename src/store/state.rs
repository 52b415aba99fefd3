use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::validate::{validate_maintenance_draft, validate_property_draft};
use crate::property::{
    Document, FoundationType, MaintenanceRecord, Property, PropertyId, PropertyType,
    RoofMaterial, Urgency,
};

/// Form payload for creating or editing a property. The store assigns
/// the id and owns the document list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDraft {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub year_built: i32,
    pub square_footage: u32,
    pub property_type: PropertyType,
    pub roof_material: RoofMaterial,
    pub roof_age: u32,
    pub foundation_type: FoundationType,
    pub hvac_age: u32,
    pub electrical_age: u32,
    pub plumbing_age: u32,
    pub last_inspection: Option<NaiveDate>,
    #[serde(default)]
    pub image_data: Option<Vec<u8>>,
}

/// Form payload for logging a maintenance event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceDraft {
    pub property_id: PropertyId,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub cost: f64,
    pub contractor: String,
    pub urgency: Urgency,
}

/// Transient per-session view state: which forms are open, what is
/// selected, and the ROI scratchpad. Cleared wholesale on logout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub show_add_property_form: bool,
    pub show_add_maintenance_form: bool,
    pub editing_property: Option<PropertyId>,
    pub active_tab: Option<String>,
    pub maintenance_filter_urgency: Option<Urgency>,
    pub selected_property: Option<PropertyId>,
    pub roi_draft: Option<crate::roi::RoiInputs>,
}

/// All in-process application state: the property portfolio, its
/// maintenance log, and the transient session view. Nothing here is
/// persisted; the hosting session owns one instance per user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    properties: Vec<Property>,
    maintenance: Vec<MaintenanceRecord>,
    next_property_id: u64,
    pub session: SessionView,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add a property, assigning the next sequential id.
    pub fn add_property(&mut self, draft: PropertyDraft) -> Result<PropertyId, Vec<String>> {
        validate_property_draft(&draft)?;

        self.next_property_id += 1;
        let id = PropertyId(self.next_property_id);
        self.properties.push(Property {
            id,
            address: draft.address,
            city: draft.city,
            state: draft.state,
            zip_code: draft.zip_code,
            year_built: draft.year_built,
            square_footage: draft.square_footage,
            property_type: draft.property_type,
            roof_material: draft.roof_material,
            roof_age: draft.roof_age,
            foundation_type: draft.foundation_type,
            hvac_age: draft.hvac_age,
            electrical_age: draft.electrical_age,
            plumbing_age: draft.plumbing_age,
            last_inspection: draft.last_inspection,
            image_data: draft.image_data,
            documents: Vec::new(),
        });
        Ok(id)
    }

    /// Replace a property's attributes in place. Maintenance records
    /// keep referencing the id, so an address edit never orphans them.
    pub fn update_property(
        &mut self,
        id: PropertyId,
        draft: PropertyDraft,
    ) -> Result<(), Vec<String>> {
        validate_property_draft(&draft)?;

        let Some(property) = self.properties.iter_mut().find(|p| p.id == id) else {
            return Err(vec![format!("property {}: not found", id)]);
        };
        property.address = draft.address;
        property.city = draft.city;
        property.state = draft.state;
        property.zip_code = draft.zip_code;
        property.year_built = draft.year_built;
        property.square_footage = draft.square_footage;
        property.property_type = draft.property_type;
        property.roof_material = draft.roof_material;
        property.roof_age = draft.roof_age;
        property.foundation_type = draft.foundation_type;
        property.hvac_age = draft.hvac_age;
        property.electrical_age = draft.electrical_age;
        property.plumbing_age = draft.plumbing_age;
        property.last_inspection = draft.last_inspection;
        if draft.image_data.is_some() {
            property.image_data = draft.image_data;
        }
        Ok(())
    }

    /// Delete a property. Cascades to exactly the maintenance records
    /// referencing it, and drops any session references to the id.
    pub fn remove_property(&mut self, id: PropertyId) -> Option<Property> {
        let index = self.properties.iter().position(|p| p.id == id)?;
        let removed = self.properties.remove(index);

        self.maintenance.retain(|r| r.property_id != id);
        if self.session.editing_property == Some(id) {
            self.session.editing_property = None;
        }
        if self.session.selected_property == Some(id) {
            self.session.selected_property = None;
        }
        Some(removed)
    }

    pub fn property(&self, id: PropertyId) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Validate and log a maintenance event against an existing property.
    pub fn add_maintenance(&mut self, draft: MaintenanceDraft) -> Result<(), Vec<String>> {
        validate_maintenance_draft(&draft)?;

        if self.property(draft.property_id).is_none() {
            return Err(vec![format!(
                "property_id: no property {} on record",
                draft.property_id
            )]);
        }
        self.maintenance.push(MaintenanceRecord {
            date: draft.date,
            category: draft.category,
            description: draft.description,
            cost: draft.cost,
            contractor: draft.contractor,
            urgency: draft.urgency,
            property_id: draft.property_id,
        });
        Ok(())
    }

    pub fn maintenance_records(&self) -> &[MaintenanceRecord] {
        &self.maintenance
    }

    /// Maintenance history for one property, optionally filtered by
    /// urgency, in insertion (logged) order.
    pub fn maintenance_for(
        &self,
        id: PropertyId,
        urgency: Option<Urgency>,
    ) -> Vec<&MaintenanceRecord> {
        self.maintenance
            .iter()
            .filter(|r| r.property_id == id)
            .filter(|r| urgency.map_or(true, |u| r.urgency == u))
            .collect()
    }

    /// Attach an uploaded document to a property. Returns false when the
    /// property does not exist.
    pub fn add_document(&mut self, id: PropertyId, name: &str, bytes: Vec<u8>, mime_type: &str) -> bool {
        let Some(property) = self.properties.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        property.documents.push(Document {
            name: name.to_string(),
            bytes,
            mime_type: mime_type.to_string(),
            uploaded_at: Utc::now(),
        });
        true
    }

    /// Remove one document by index. Returns the removed document.
    pub fn remove_document(&mut self, id: PropertyId, index: usize) -> Option<Document> {
        let property = self.properties.iter_mut().find(|p| p.id == id)?;
        if index < property.documents.len() {
            Some(property.documents.remove(index))
        } else {
            None
        }
    }

    /// End the user session: reset the transient view state. Portfolio
    /// and maintenance data survive logout.
    pub fn end_session(&mut self) {
        self.session = SessionView::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft(address: &str) -> PropertyDraft {
        PropertyDraft {
            address: address.to_string(),
            city: "Culpeper".to_string(),
            state: "VA".to_string(),
            zip_code: "22701".to_string(),
            year_built: 2000,
            square_footage: 1850,
            property_type: PropertyType::SingleFamily,
            roof_material: RoofMaterial::AsphaltShingles,
            roof_age: 5,
            foundation_type: FoundationType::Basement,
            hvac_age: 5,
            electrical_age: 10,
            plumbing_age: 10,
            last_inspection: None,
            image_data: None,
        }
    }

    fn maintenance(id: PropertyId, description: &str) -> MaintenanceDraft {
        MaintenanceDraft {
            property_id: id,
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            category: "Plumbing".to_string(),
            description: description.to_string(),
            cost: 240.0,
            contractor: "Valley Plumbing".to_string(),
            urgency: Urgency::Routine,
        }
    }

    #[test]
    fn test_add_property_assigns_sequential_ids() {
        let mut state = AppState::new();
        let first = state.add_property(draft("1 Elm St")).unwrap();
        let second = state.add_property(draft("2 Elm St")).unwrap();
        assert_eq!(first, PropertyId(1));
        assert_eq!(second, PropertyId(2));
        assert_eq!(state.properties().len(), 2);
    }

    #[test]
    fn test_add_property_rejects_invalid_draft() {
        let mut state = AppState::new();
        let result = state.add_property(draft("   "));
        assert!(result.is_err());
        assert!(state.properties().is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut state = AppState::new();
        let first = state.add_property(draft("1 Elm St")).unwrap();
        state.remove_property(first);
        let second = state.add_property(draft("2 Elm St")).unwrap();
        assert_eq!(second, PropertyId(2));
    }

    #[test]
    fn test_duplicate_addresses_allowed() {
        // Addresses are display text, not keys; the id disambiguates.
        let mut state = AppState::new();
        let first = state.add_property(draft("1 Elm St")).unwrap();
        let second = state.add_property(draft("1 Elm St")).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_update_property_keeps_maintenance_history() {
        let mut state = AppState::new();
        let id = state.add_property(draft("1 Elm St")).unwrap();
        state.add_maintenance(maintenance(id, "Water heater flush")).unwrap();

        let mut edited = draft("99 Renamed Ave");
        edited.city = "Richmond".to_string();
        state.update_property(id, edited).unwrap();

        assert_eq!(state.property(id).unwrap().address, "99 Renamed Ave");
        assert_eq!(state.maintenance_for(id, None).len(), 1);
    }

    #[test]
    fn test_update_missing_property() {
        let mut state = AppState::new();
        let result = state.update_property(PropertyId(42), draft("1 Elm St"));
        let errors = result.unwrap_err();
        assert!(errors[0].contains("not found"));
    }

    #[test]
    fn test_cascade_delete_removes_exactly_matching_records() {
        let mut state = AppState::new();
        let keep = state.add_property(draft("1 Elm St")).unwrap();
        let doomed = state.add_property(draft("2 Elm St")).unwrap();
        state.add_maintenance(maintenance(keep, "Gutter repair")).unwrap();
        state.add_maintenance(maintenance(doomed, "Roof patch")).unwrap();
        state.add_maintenance(maintenance(doomed, "Panel swap")).unwrap();

        let removed = state.remove_property(doomed);
        assert!(removed.is_some());
        assert_eq!(state.maintenance_records().len(), 1);
        assert_eq!(state.maintenance_records()[0].property_id, keep);
        assert!(state.maintenance_for(doomed, None).is_empty());
    }

    #[test]
    fn test_remove_property_clears_session_references() {
        let mut state = AppState::new();
        let id = state.add_property(draft("1 Elm St")).unwrap();
        state.session.editing_property = Some(id);
        state.session.selected_property = Some(id);

        state.remove_property(id);
        assert_eq!(state.session.editing_property, None);
        assert_eq!(state.session.selected_property, None);
    }

    #[test]
    fn test_remove_missing_property_is_none() {
        let mut state = AppState::new();
        assert!(state.remove_property(PropertyId(7)).is_none());
    }

    #[test]
    fn test_add_maintenance_requires_existing_property() {
        let mut state = AppState::new();
        let errors = state
            .add_maintenance(maintenance(PropertyId(9), "Ghost repair"))
            .unwrap_err();
        assert!(errors[0].contains("no property"));
    }

    #[test]
    fn test_maintenance_filter_by_urgency() {
        let mut state = AppState::new();
        let id = state.add_property(draft("1 Elm St")).unwrap();
        state.add_maintenance(maintenance(id, "Routine one")).unwrap();
        let mut urgent = maintenance(id, "Burst pipe");
        urgent.urgency = Urgency::High;
        state.add_maintenance(urgent).unwrap();

        assert_eq!(state.maintenance_for(id, None).len(), 2);
        assert_eq!(state.maintenance_for(id, Some(Urgency::High)).len(), 1);
        assert_eq!(state.maintenance_for(id, Some(Urgency::Medium)).len(), 0);
    }

    #[test]
    fn test_document_lifecycle() {
        let mut state = AppState::new();
        let id = state.add_property(draft("1 Elm St")).unwrap();

        assert!(state.add_document(id, "deed.pdf", vec![1, 2, 3], "application/pdf"));
        assert_eq!(state.property(id).unwrap().documents.len(), 1);

        let removed = state.remove_document(id, 0).unwrap();
        assert_eq!(removed.name, "deed.pdf");
        assert!(state.property(id).unwrap().documents.is_empty());

        assert!(state.remove_document(id, 0).is_none());
        assert!(!state.add_document(PropertyId(99), "x", Vec::new(), "text/plain"));
    }

    #[test]
    fn test_end_session_resets_view_but_keeps_data() {
        let mut state = AppState::new();
        let id = state.add_property(draft("1 Elm St")).unwrap();
        state.add_maintenance(maintenance(id, "Service call")).unwrap();

        state.session.show_add_property_form = true;
        state.session.active_tab = Some("Property Health".to_string());
        state.session.selected_property = Some(id);
        state.session.maintenance_filter_urgency = Some(Urgency::High);

        state.end_session();

        assert_eq!(state.session, SessionView::default());
        assert_eq!(state.properties().len(), 1);
        assert_eq!(state.maintenance_records().len(), 1);
    }
}
