mod app_error;
mod facilities_app;

pub use app_error::FacilitiesAppError;
pub use facilities_app::{FacilitiesApp, FacilitiesOperation};
