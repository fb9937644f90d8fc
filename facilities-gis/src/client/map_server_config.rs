use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{FacilityClientError, MapServerClient};
use crate::adapter::VHA_ID_FIELD;

/// environment variable consulted when no map service URL is configured
pub const VHA_MAPSERVER_URL_ENV: &str = "VHA_MAPSERVER_URL";

/// Serializable configuration for the facility map service client.
/// Builds to a [`MapServerClient`]
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct MapServerClientConfig {
    /// layer URL, e.g. `https://host/arcgis/rest/services/VHA_Facilities/MapServer/0`
    pub url: Option<String>,
    pub id_field: String,
    pub out_fields: String,
    pub timeout_secs: u64,
}

impl Default for MapServerClientConfig {
    fn default() -> Self {
        Self {
            url: None,
            id_field: VHA_ID_FIELD.to_string(),
            out_fields: String::from("*"),
            timeout_secs: 30,
        }
    }
}

impl MapServerClientConfig {
    /// configured URL, falling back to the `VHA_MAPSERVER_URL` environment variable
    pub fn resolve_url(&self) -> Result<String, FacilityClientError> {
        match &self.url {
            Some(url) => Ok(url.clone()),
            None => std::env::var(VHA_MAPSERVER_URL_ENV).map_err(|_| {
                FacilityClientError::ConfigurationError(format!(
                    "no map service url configured and {VHA_MAPSERVER_URL_ENV} is not set"
                ))
            }),
        }
    }

    pub fn build(&self) -> Result<MapServerClient, FacilityClientError> {
        let url = self.resolve_url()?;
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()?;
        Ok(MapServerClient::new(
            http,
            url,
            self.id_field.clone(),
            self.out_fields.clone(),
        ))
    }
}

impl TryFrom<&String> for MapServerClientConfig {
    type Error = FacilityClientError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let s = std::fs::read_to_string(f).map_err(|e| {
            FacilityClientError::ConfigurationError(format!("failure reading {f}: {e}"))
        })?;
        if f.ends_with(".toml") {
            toml::from_str(&s).map_err(|e| {
                FacilityClientError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            serde_json::from_str(&s).map_err(|e| {
                FacilityClientError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(FacilityClientError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
