use serde::{Deserialize, Serialize};

use crate::{SubmissionStatusConfig, SubmissionStatusError};

/// status of a form submission as reported by the enrollment system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionStatus {
    pub id: u64,
    pub timestamp: String,
}

/// Request/response boundary to the enrollment system's form submission status
/// operation. Implementors own decoding of the SOAP response and report a body
/// they cannot decode as [`SubmissionStatusError::MalformedResponse`].
pub trait SubmissionStatusService {
    fn check_status(&self, submission_id: u64) -> Result<SubmissionStatus, SubmissionStatusError>;
}

/// checks the status of the well-known health check submission
pub fn health_check(
    service: &dyn SubmissionStatusService,
    config: &SubmissionStatusConfig,
) -> Result<SubmissionStatus, SubmissionStatusError> {
    let id = config.health_check_id.ok_or_else(|| {
        SubmissionStatusError::ConfigurationError(String::from("health_check_id is not set"))
    })?;
    log::debug!("running submission status health check with id {id}");
    service.check_status(id)
}
