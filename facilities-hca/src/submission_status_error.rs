use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmissionStatusError {
    #[error("submission status service is unavailable: {source}")]
    UpstreamUnavailable {
        #[from]
        source: reqwest::Error,
    },
    #[error("submission status service responded with status {0}")]
    UpstreamStatus(u16),
    #[error("malformed submission status response: {0}")]
    MalformedResponse(String),
    #[error("failure loading TLS material: {0}")]
    TlsConfiguration(String),
    #[error("failure reading service configuration: {0}")]
    ConfigurationError(String),
}
