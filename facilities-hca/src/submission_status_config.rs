use reqwest::{Certificate, Identity};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::SubmissionStatusError;

/// transport settings for the enrollment system submission status endpoint
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct SubmissionStatusConfig {
    pub endpoint: Option<String>,
    /// seconds allowed to establish a connection
    pub open_timeout_secs: u64,
    /// seconds allowed for the whole request
    pub timeout_secs: u64,
    pub health_check_id: Option<u64>,
    /// PEM bundle of trusted root certificates
    pub cert_store: Option<String>,
    /// PEM client certificate. only used together with `ssl_key`.
    pub ssl_cert: Option<String>,
    /// PEM PKCS#8 private key for `ssl_cert`
    pub ssl_key: Option<String>,
}

impl Default for SubmissionStatusConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            open_timeout_secs: 10,
            timeout_secs: 15,
            health_check_id: None,
            cert_store: None,
            ssl_cert: None,
            ssl_key: None,
        }
    }
}

impl SubmissionStatusConfig {
    pub fn get_endpoint(&self) -> Result<&str, SubmissionStatusError> {
        self.endpoint.as_deref().ok_or_else(|| {
            SubmissionStatusError::ConfigurationError(String::from("endpoint is not set"))
        })
    }

    /// builds a verifying HTTP client with the configured timeouts, trust store
    /// and, when both certificate and key are present, a client identity
    pub fn build_http_client(&self) -> Result<reqwest::blocking::Client, SubmissionStatusError> {
        let mut builder = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(self.open_timeout_secs))
            .timeout(Duration::from_secs(self.timeout_secs));

        if let Some(cert_store) = &self.cert_store {
            let pem = read_pem(cert_store)?;
            let certificates = Certificate::from_pem_bundle(&pem).map_err(|e| {
                SubmissionStatusError::TlsConfiguration(format!("invalid cert store {cert_store}: {e}"))
            })?;
            for certificate in certificates {
                builder = builder.add_root_certificate(certificate);
            }
        }

        match (&self.ssl_cert, &self.ssl_key) {
            (Some(cert), Some(key)) => {
                let identity = Identity::from_pkcs8_pem(&read_pem(cert)?, &read_pem(key)?)
                    .map_err(|e| {
                        SubmissionStatusError::TlsConfiguration(format!(
                            "invalid client certificate {cert}: {e}"
                        ))
                    })?;
                builder = builder.identity(identity);
            }
            (None, None) => {}
            _ => log::warn!("ssl_cert and ssl_key must both be set, skipping client certificate"),
        }

        Ok(builder.build()?)
    }
}

fn read_pem(path: &str) -> Result<Vec<u8>, SubmissionStatusError> {
    std::fs::read(path)
        .map_err(|e| SubmissionStatusError::TlsConfiguration(format!("failure reading {path}: {e}")))
}

impl TryFrom<&String> for SubmissionStatusConfig {
    type Error = SubmissionStatusError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let s = std::fs::read_to_string(f).map_err(|e| {
            SubmissionStatusError::ConfigurationError(format!("failure reading {f}: {e}"))
        })?;
        if f.ends_with(".toml") {
            toml::from_str(&s).map_err(|e| {
                SubmissionStatusError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            serde_json::from_str(&s).map_err(|e| {
                SubmissionStatusError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(SubmissionStatusError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
