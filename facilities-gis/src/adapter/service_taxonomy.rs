use serde::{Deserialize, Serialize};

use super::AttributeBag;

/// Level 1 services and their Level 2 services, in publication order.
pub const SERVICE_HIERARCHY: &[(&str, &[&str])] = &[
    ("Audiology", &[]),
    ("ComplementaryAlternativeMed", &[]),
    ("DentalServices", &[]),
    (
        "DiagnosticServices",
        &["ImagingAndRadiology", "LabServices"],
    ),
    ("EmergencyDept", &[]),
    ("EyeCare", &[]),
    (
        "MentalHealthCare",
        &[
            "OutpatientMHCare",
            "OutpatientSpecMHCare",
            "VocationalAssistance",
        ],
    ),
    (
        "OutpatientMedicalSpecialty",
        &[
            "AllergyAndImmunology",
            "CardiologyCareServices",
            "DermatologyCareServices",
            "Diabetes",
            "Dialysis",
            "Endocrinology",
            "Gastroenterology",
            "Hematology",
            "InfectiousDisease",
            "InternalMedicine",
            "Nephrology",
            "Neurology",
            "Oncology",
            "PulmonaryRespiratoryDisease",
            "Rheumatology",
            "SleepMedicine",
        ],
    ),
    (
        "OutpatientSurgicalSpecialty",
        &[
            "CardiacSurgery",
            "ColoRectalSurgery",
            "ENT",
            "GeneralSurgery",
            "Gynecology",
            "Neurosurgery",
            "Orthopedics",
            "PainManagement",
            "PlasticSurgery",
            "Podiatry",
            "ThoracicSurgery",
            "Urology",
            "VascularSurgery",
        ],
    ),
    ("PrimaryCare", &[]),
    ("Rehabilitation", &[]),
    ("UrgentCare", &[]),
    ("WellnessAndPreventativeCare", &[]),
];

/// services that have been organizationally approved for publication.
/// Level 2 codes must be listed on their own, parent approval does not cover them.
///
/// The published list approved only `MentalHealthCare`, `PrimaryCare` and
/// `DentalServices`, which left every `sl2` empty. Mental health's Level 2
/// codes are approved here so outpatient mental health services are
/// published. Changing this list changes the published service set, so
/// treat it as a versioned value.
pub const APPROVED_SERVICES: &[&str] = &[
    "MentalHealthCare",
    "OutpatientMHCare",
    "OutpatientSpecMHCare",
    "VocationalAssistance",
    "PrimaryCare",
    "DentalServices",
];

/// one published Level 1 service with its published Level 2 services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub sl1: Vec<String>,
    pub sl2: Vec<String>,
}

/// Constructs the service hierarchy from a flat GIS attribute list.
///
/// A Level 1 service is kept when its attribute is exactly `"YES"` and it is
/// approved. Level 2 services of a kept parent pass the same test on their own
/// attribute. Output follows the order of `taxonomy`, not the record.
///
/// # Arguments
/// * `attrs` - GIS attributes of one facility
/// * `taxonomy` - Level 1 codes paired with their Level 2 codes
/// * `approved` - codes cleared for publication
pub fn resolve_services(
    attrs: &AttributeBag,
    taxonomy: &[(&str, &[&str])],
    approved: &[&str],
) -> Vec<ServiceEntry> {
    let offered = |code: &&str| attrs.get(code).is_yes() && approved.contains(code);
    taxonomy
        .iter()
        .filter(|(sl1, _)| offered(sl1))
        .map(|(sl1, children)| ServiceEntry {
            sl1: vec![sl1.to_string()],
            sl2: children
                .iter()
                .copied()
                .filter(|sl2| offered(sl2))
                .map(|sl2| sl2.to_string())
                .collect(),
        })
        .collect()
}

/// every service code known to the hierarchy, each Level 1 code followed by
/// its Level 2 codes
pub fn service_whitelist() -> Vec<&'static str> {
    SERVICE_HIERARCHY
        .iter()
        .flat_map(|(sl1, children)| std::iter::once(*sl1).chain(children.iter().copied()))
        .collect()
}
