mod attribute_value;
mod facility;
mod facility_adapter;
mod field_ops;
mod gis_record;
mod keymap;
mod service_taxonomy;

pub use attribute_value::{AttributeBag, AttributeValue};
pub use facility::{Facility, FacilityAddress, FacilityFeedback, FacilityServices};
pub use facility_adapter::{
    from_gis, from_gis_batch, FACILITY_TYPE, SERVICES_DATE_FIELD, VHA_ID_FIELD,
};
pub use field_ops::{compose_phone, compose_zip, epoch_ms_to_iso_date};
pub use gis_record::GisRecord;
pub use keymap::{
    project, KeyMap, ADDR_KEYMAP, FEEDBACK_KEYMAP, HOURS_KEYMAP, PHONE_KEYMAP, TOP_KEYMAP,
};
pub use service_taxonomy::{
    resolve_services, service_whitelist, ServiceEntry, APPROVED_SERVICES, SERVICE_HIERARCHY,
};
