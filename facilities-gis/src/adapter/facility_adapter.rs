use indexmap::IndexMap;
use rayon::prelude::*;

use super::{
    compose_phone, compose_zip, epoch_ms_to_iso_date, project, resolve_services, AttributeValue,
    Facility, FacilityAddress, FacilityFeedback, FacilityServices, GisRecord, ADDR_KEYMAP,
    APPROVED_SERVICES, FEEDBACK_KEYMAP, HOURS_KEYMAP, PHONE_KEYMAP, SERVICE_HIERARCHY, TOP_KEYMAP,
};

pub const FACILITY_TYPE: &str = "va_health_facility";

/// attribute holding the station number, used for lookups by id
pub const VHA_ID_FIELD: &str = "StationNumber";

pub const SERVICES_DATE_FIELD: &str = "OutpatientServicesDataDate";

const MH_CLINIC_PHONE_FIELD: &str = "MHClinicPhone";
const MH_CLINIC_EXTENSION_FIELD: &str = "Extension";
const ZIP_FIELD: &str = "Zip";
const ZIP4_FIELD: &str = "Zip4";

/// Builds a [`Facility`] from a GIS record. Every step is total: a sparse
/// record gives a facility with null or empty fields rather than an error.
pub fn from_gis(record: &GisRecord) -> Facility {
    let attrs = &record.attributes;

    let mut top = project(&TOP_KEYMAP, attrs);
    let mut take = |field: &str| top.shift_remove(field).unwrap_or_default();

    let mut physical = project(&ADDR_KEYMAP, attrs);
    physical.insert(
        String::from("zip"),
        AttributeValue::from(compose_zip(attrs.get(ZIP_FIELD), attrs.get(ZIP4_FIELD))),
    );

    let mut phone = project(&PHONE_KEYMAP, attrs);
    phone.insert(
        String::from("mental_health_clinic"),
        AttributeValue::from(compose_phone(
            attrs.get(MH_CLINIC_PHONE_FIELD),
            attrs.get(MH_CLINIC_EXTENSION_FIELD),
        )),
    );

    let services_date = attrs.get(SERVICES_DATE_FIELD);
    let last_updated = epoch_ms_to_iso_date(services_date);
    if last_updated.is_none() && !services_date.is_blank() {
        log::warn!("facility has unreadable {SERVICES_DATE_FIELD} value '{services_date}'");
    }

    Facility {
        unique_id: take("unique_id"),
        name: take("name"),
        classification: take("classification"),
        website: take("website"),
        lat: take("lat"),
        long: take("long"),
        facility_type: FACILITY_TYPE.to_string(),
        address: FacilityAddress {
            physical,
            mailing: IndexMap::new(),
        },
        phone,
        hours: project(&HOURS_KEYMAP, attrs),
        services: FacilityServices {
            last_updated,
            health: resolve_services(attrs, SERVICE_HIERARCHY, APPROVED_SERVICES),
        },
        feedback: FacilityFeedback {
            health: project(&FEEDBACK_KEYMAP, attrs),
        },
    }
}

/// transforms a batch of records in parallel. output order matches input order.
pub fn from_gis_batch(records: &[GisRecord]) -> Vec<Facility> {
    records.par_iter().map(from_gis).collect()
}

impl From<&GisRecord> for Facility {
    fn from(value: &GisRecord) -> Self {
        from_gis(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::ServiceEntry;

    fn test_record() -> GisRecord {
        serde_json::from_value(serde_json::json!({
            "attributes": {
                "StationNumber": "442",
                "StationName": " VA Test Clinic ",
                "CocClassification": "VA Medical Center (VAMC)",
                "Website_URL": "http://www.cheyenne.va.gov/ ",
                "Latitude": 41.148,
                "Longitude": -104.786,
                "Street": "2360 East Pershing Boulevard",
                "Building": null,
                "Suite": " ",
                "City": "Cheyenne",
                "State": "WY",
                "Zip": "82001",
                "Zip4": "5356",
                "MainPhone": "307-778-7550",
                "MainFax": "307-778-7381",
                "AfterHoursPhone": "307-778-7550",
                "PatientAdvocatePhone": "307-778-7550 x7517",
                "EnrollmentCoordinatorPhone": "307-778-7550 x7579",
                "PharmacyPhone": "866-420-6337",
                "MHClinicPhone": "307-778-7349",
                "Extension": 0,
                "Monday": "24/7",
                "Tuesday": "24/7",
                "Wednesday": "24/7",
                "Thursday": "24/7",
                "Friday": "24/7",
                "Saturday": "24/7",
                "Sunday": "24/7",
                "OutpatientServicesDataDate": 1609459200000_i64,
                "MentalHealthCare": "YES",
                "OutpatientMHCare": "YES",
                "OutpatientSpecMHCare": "NO",
                "PrimaryCare": "NO",
                "Audiology": "YES",
                "Primary_Care_Routine_Score": 0.91,
                "Primary_Care_Urgent_Score": 0.72,
                "Specialty_Care_Routine_Score": 0.87,
                "Specialty_Care_Urgent_Score": null
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_from_gis_top_level() {
        let facility = from_gis(&test_record());
        assert_eq!(facility.unique_id, AttributeValue::from("442"));
        assert_eq!(facility.name, AttributeValue::from("VA Test Clinic"));
        assert_eq!(
            facility.website,
            AttributeValue::from("http://www.cheyenne.va.gov/")
        );
        assert_eq!(facility.lat, AttributeValue::from(41.148));
        assert_eq!(facility.facility_type, FACILITY_TYPE);
    }

    #[test]
    fn test_from_gis_address() {
        let facility = from_gis(&test_record());
        let physical = &facility.address.physical;
        let fields = physical.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(
            fields,
            vec!["address_1", "address_2", "address_3", "city", "state", "zip"]
        );
        assert_eq!(physical["zip"], AttributeValue::from("82001-5356"));
        assert_eq!(physical["address_2"], AttributeValue::Null);
        assert_eq!(physical["address_3"], AttributeValue::from(""));
        assert!(facility.address.mailing.is_empty());
    }

    #[test]
    fn test_from_gis_phone_and_hours() {
        let facility = from_gis(&test_record());
        assert_eq!(
            facility.phone["mental_health_clinic"],
            AttributeValue::from("307-778-7349")
        );
        assert_eq!(facility.phone.len(), PHONE_KEYMAP.len() + 1);
        assert_eq!(facility.hours["Sunday"], AttributeValue::from("24/7"));
        assert_eq!(facility.hours.len(), 7);
    }

    #[test]
    fn test_from_gis_services_and_feedback() {
        let facility = from_gis(&test_record());
        assert_eq!(
            facility.services.last_updated,
            Some(String::from("2021-01-01"))
        );
        assert_eq!(
            facility.services.health,
            vec![ServiceEntry {
                sl1: vec![String::from("MentalHealthCare")],
                sl2: vec![String::from("OutpatientMHCare")],
            }]
        );
        assert_eq!(
            facility.feedback.health["primary_care_routine"],
            AttributeValue::from(0.91)
        );
        assert_eq!(
            facility.feedback.health["specialty_care_urgent"],
            AttributeValue::Null
        );
    }

    #[test]
    fn test_from_gis_empty_record() {
        let facility = from_gis(&GisRecord::default());
        assert_eq!(facility.unique_id, AttributeValue::Null);
        assert_eq!(facility.address.physical["zip"], AttributeValue::from(""));
        assert_eq!(
            facility.phone["mental_health_clinic"],
            AttributeValue::from("")
        );
        assert_eq!(facility.services.last_updated, None);
        assert!(facility.services.health.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let facility = from_gis(&test_record());
        let json = serde_json::to_value(&facility).unwrap();
        assert_eq!(json["name"], serde_json::json!("VA Test Clinic"));
        assert_eq!(json["address"]["mailing"], serde_json::json!({}));
        assert_eq!(
            json["services"]["health"],
            serde_json::json!([{ "sl1": ["MentalHealthCare"], "sl2": ["OutpatientMHCare"] }])
        );
        assert_eq!(json["services"]["last_updated"], serde_json::json!("2021-01-01"));
        assert_eq!(json["feedback"]["health"]["specialty_care_urgent"], serde_json::Value::Null);
    }

    #[test]
    fn test_batch_preserves_order() {
        let records = (0..64)
            .map(|idx| {
                serde_json::from_value::<GisRecord>(serde_json::json!({
                    "attributes": { "StationNumber": format!(" {idx} ") }
                }))
                .unwrap()
            })
            .collect::<Vec<_>>();
        let facilities = from_gis_batch(&records);
        assert_eq!(facilities.len(), 64);
        for (idx, facility) in facilities.iter().enumerate() {
            assert_eq!(facility.unique_id, AttributeValue::from(idx.to_string()));
        }
    }
}
