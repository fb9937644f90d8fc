use thiserror::Error;

use crate::client::FacilityClientError;

#[derive(Error, Debug)]
pub enum FacilitiesAppError {
    #[error("failure reading records from {path}: {message}")]
    InputError { path: String, message: String },
    #[error("failure calling facility directory: {source}")]
    ClientError {
        #[from]
        source: FacilityClientError,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
