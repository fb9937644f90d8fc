mod soap_envelope;
mod submission_status;
mod submission_status_client;
mod submission_status_config;
mod submission_status_error;

pub use soap_envelope::{
    form_submission_status_envelope, ESR_SCHEMA_NAMESPACE, ESR_SERVICE_NAMESPACE,
};
pub use submission_status::{health_check, SubmissionStatus, SubmissionStatusService};
pub use submission_status_client::SubmissionStatusClient;
pub use submission_status_config::SubmissionStatusConfig;
pub use submission_status_error::SubmissionStatusError;
