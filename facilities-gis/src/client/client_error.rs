use thiserror::Error;

/// Failures talking to the facility map service. These are kept apart from
/// missing record fields, which the adapter turns into nulls.
#[derive(Error, Debug)]
pub enum FacilityClientError {
    #[error("facility map service is unavailable: {source}")]
    UpstreamUnavailable {
        #[from]
        source: reqwest::Error,
    },
    #[error("facility map service responded with status {code}: {message}")]
    UpstreamStatus { code: u16, message: String },
    #[error("malformed response from facility map service: {0}")]
    MalformedResponse(String),
    #[error("unknown service '{0}', not part of the service hierarchy")]
    UnknownService(String),
    #[error("failure reading client configuration: {0}")]
    ConfigurationError(String),
}
