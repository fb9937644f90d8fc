use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{AttributeValue, ServiceEntry};

/// Normalized VA facility built from one GIS record.
///
/// Sub-sections produced by key mappings are ordered maps so that the
/// serialized document keeps the declared field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub unique_id: AttributeValue,
    pub name: AttributeValue,
    pub classification: AttributeValue,
    pub website: AttributeValue,
    pub lat: AttributeValue,
    pub long: AttributeValue,
    pub facility_type: String,
    pub address: FacilityAddress,
    pub phone: IndexMap<String, AttributeValue>,
    pub hours: IndexMap<String, AttributeValue>,
    pub services: FacilityServices,
    pub feedback: FacilityFeedback,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilityAddress {
    pub physical: IndexMap<String, AttributeValue>,
    /// the map service has no mailing address source, so this stays empty
    pub mailing: IndexMap<String, AttributeValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilityServices {
    /// date the outpatient services data was last refreshed, as `YYYY-MM-DD`
    pub last_updated: Option<String>,
    pub health: Vec<ServiceEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilityFeedback {
    pub health: IndexMap<String, AttributeValue>,
}
