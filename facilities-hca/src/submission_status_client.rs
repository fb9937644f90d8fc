use reqwest::header::CONTENT_TYPE;

use crate::{form_submission_status_envelope, SubmissionStatusConfig, SubmissionStatusError};

/// Sends form submission status requests to the enrollment system. Returns
/// the raw SOAP response; decoding it belongs to a [`crate::SubmissionStatusService`]
/// implementation.
#[derive(Debug, Clone)]
pub struct SubmissionStatusClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl TryFrom<&SubmissionStatusConfig> for SubmissionStatusClient {
    type Error = SubmissionStatusError;

    fn try_from(value: &SubmissionStatusConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            http: value.build_http_client()?,
            endpoint: value.get_endpoint()?.to_string(),
        })
    }
}

impl SubmissionStatusClient {
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn post_status_request(&self, submission_id: u64) -> Result<String, SubmissionStatusError> {
        let body = form_submission_status_envelope(submission_id);
        log::debug!("POST {} for submission {submission_id}", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", "\"\"")
            .body(body)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionStatusError::UpstreamStatus(status.as_u16()));
        }
        Ok(response.text()?)
    }
}
