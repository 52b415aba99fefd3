use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable opaque key for a property, assigned sequentially by the store.
/// Maintenance records reference this id rather than the display address,
/// so editing an address never orphans its history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropertyId(pub u64);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    SingleFamily,
    Townhouse,
    Condo,
    MultiFamily,
    Commercial,
}

impl PropertyType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Single Family" => Some(PropertyType::SingleFamily),
            "Townhouse" => Some(PropertyType::Townhouse),
            "Condo" => Some(PropertyType::Condo),
            "Multi-Family" => Some(PropertyType::MultiFamily),
            "Commercial" => Some(PropertyType::Commercial),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "Single Family",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Condo => "Condo",
            PropertyType::MultiFamily => "Multi-Family",
            PropertyType::Commercial => "Commercial",
        }
    }
}

/// Roof covering material. Each variant carries the design lifespan used
/// as the denominator in degradation scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoofMaterial {
    AsphaltShingles,
    Metal,
    Tile,
    Slate,
    Wood,
    Composite,
    FlatRoof,
}

impl RoofMaterial {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Asphalt Shingles" => Some(RoofMaterial::AsphaltShingles),
            "Metal" => Some(RoofMaterial::Metal),
            "Tile" => Some(RoofMaterial::Tile),
            "Slate" => Some(RoofMaterial::Slate),
            "Wood" => Some(RoofMaterial::Wood),
            "Composite" => Some(RoofMaterial::Composite),
            "Flat Roof (TPO/EPDM)" | "Flat Roof" => Some(RoofMaterial::FlatRoof),
            _ => None,
        }
    }

    /// Expected lifespan in years.
    pub fn expected_life(&self) -> u32 {
        match self {
            RoofMaterial::AsphaltShingles => 20,
            RoofMaterial::Metal => 50,
            RoofMaterial::Tile => 50,
            RoofMaterial::Slate => 75,
            RoofMaterial::Wood => 25,
            RoofMaterial::Composite => 30,
            RoofMaterial::FlatRoof => 20,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoofMaterial::AsphaltShingles => "Asphalt Shingles",
            RoofMaterial::Metal => "Metal",
            RoofMaterial::Tile => "Tile",
            RoofMaterial::Slate => "Slate",
            RoofMaterial::Wood => "Wood",
            RoofMaterial::Composite => "Composite",
            RoofMaterial::FlatRoof => "Flat Roof (TPO/EPDM)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoundationType {
    ConcreteSlab,
    Basement,
    CrawlSpace,
    PierAndBeam,
}

impl FoundationType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Concrete Slab" => Some(FoundationType::ConcreteSlab),
            "Basement" => Some(FoundationType::Basement),
            "Crawl Space" => Some(FoundationType::CrawlSpace),
            "Pier & Beam" => Some(FoundationType::PierAndBeam),
            _ => None,
        }
    }

    /// Fixed quality score contributed to the structural category.
    pub fn quality_score(&self) -> f64 {
        match self {
            FoundationType::ConcreteSlab => 85.0,
            FoundationType::Basement => 90.0,
            FoundationType::CrawlSpace => 75.0,
            FoundationType::PierAndBeam => 70.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FoundationType::ConcreteSlab => "Concrete Slab",
            FoundationType::Basement => "Basement",
            FoundationType::CrawlSpace => "Crawl Space",
            FoundationType::PierAndBeam => "Pier & Beam",
        }
    }
}

/// Urgency of a logged maintenance event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Routine,
    Medium,
    High,
}

impl Urgency {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Routine" => Some(Urgency::Routine),
            "Medium" => Some(Urgency::Medium),
            "High" => Some(Urgency::High),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Routine => "Routine",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }
}

/// An uploaded file attached to a property. Opaque to the scoring engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub uploaded_at: DateTime<Utc>,
}

/// One physical asset under management.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
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
    /// None when no inspection is on record ("N/A" or unparseable input).
    pub last_inspection: Option<NaiveDate>,
    #[serde(default)]
    pub image_data: Option<Vec<u8>>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl Property {
    /// Age of the building in years as of `today`. Future `year_built`
    /// yields a negative age; the degradation curve clamps it.
    pub fn building_age(&self, today: NaiveDate) -> i32 {
        use chrono::Datelike;
        today.year() - self.year_built
    }

    /// Display label used in pickers and portfolio rows.
    pub fn display_label(&self) -> String {
        format!("{}, {}", self.address, self.city)
    }
}

/// One logged service event, referencing its parent property by id.
/// Records are never mutated; they are only removed as a cascade side
/// effect of deleting the parent property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub cost: f64,
    pub contractor: String,
    pub urgency: Urgency,
    pub property_id: PropertyId,
}

/// Parse a form-supplied inspection date. The sentinel "N/A", empty
/// input, and malformed strings all mean "no inspection on record".
pub fn parse_inspection_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("n/a") {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
