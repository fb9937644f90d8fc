use indexmap::IndexMap;

use super::{AttributeBag, AttributeValue};

/// Declarative mapping from an output field name to the GIS attribute it is
/// read from. Pairs are kept in declaration order and projections preserve it.
#[derive(Debug, Clone, Copy)]
pub struct KeyMap(&'static [(&'static str, &'static str)]);

impl KeyMap {
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self(pairs)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, &'static str)> {
        self.0.iter()
    }

    pub fn output_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(output, _)| *output)
    }

    pub fn source_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(_, source)| *source)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds a sub-section of a facility from a flat GIS attribute list according
/// to the provided key mapping. String values are trimmed, every other value
/// is copied as-is. Source keys missing from the record project to null.
pub fn project(keymap: &KeyMap, attrs: &AttributeBag) -> IndexMap<String, AttributeValue> {
    keymap
        .iter()
        .map(|(output, source)| (output.to_string(), attrs.get(source).trimmed()))
        .collect()
}

pub const TOP_KEYMAP: KeyMap = KeyMap::new(&[
    ("unique_id", "StationNumber"),
    ("name", "StationName"),
    ("classification", "CocClassification"),
    ("website", "Website_URL"),
    ("lat", "Latitude"),
    ("long", "Longitude"),
]);

pub const ADDR_KEYMAP: KeyMap = KeyMap::new(&[
    ("address_1", "Street"),
    ("address_2", "Building"),
    ("address_3", "Suite"),
    ("city", "City"),
    ("state", "State"),
]);

pub const PHONE_KEYMAP: KeyMap = KeyMap::new(&[
    ("main", "MainPhone"),
    ("fax", "MainFax"),
    ("after_hours", "AfterHoursPhone"),
    ("patient_advocate", "PatientAdvocatePhone"),
    ("enrollment_coordinator", "EnrollmentCoordinatorPhone"),
    ("pharmacy", "PharmacyPhone"),
]);

pub const HOURS_KEYMAP: KeyMap = KeyMap::new(&[
    ("Monday", "Monday"),
    ("Tuesday", "Tuesday"),
    ("Wednesday", "Wednesday"),
    ("Thursday", "Thursday"),
    ("Friday", "Friday"),
    ("Saturday", "Saturday"),
    ("Sunday", "Sunday"),
]);

pub const FEEDBACK_KEYMAP: KeyMap = KeyMap::new(&[
    ("primary_care_routine", "Primary_Care_Routine_Score"),
    ("primary_care_urgent", "Primary_Care_Urgent_Score"),
    ("specialty_care_routine", "Specialty_Care_Routine_Score"),
    ("specialty_care_urgent", "Specialty_Care_Urgent_Score"),
]);
