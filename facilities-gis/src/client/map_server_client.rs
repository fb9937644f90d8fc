use super::{
    id_where_clause, parse_query_response, validate_services, where_clause, BoundingBox,
    FacilityClientError, FacilityDirectory,
};
use crate::adapter::GisRecord;

/// Blocking client for an ArcGIS map service layer holding VHA facilities
#[derive(Debug, Clone)]
pub struct MapServerClient {
    http: reqwest::blocking::Client,
    url: String,
    id_field: String,
    out_fields: String,
}

impl MapServerClient {
    pub fn new(
        http: reqwest::blocking::Client,
        url: String,
        id_field: String,
        out_fields: String,
    ) -> Self {
        Self {
            http,
            url,
            id_field,
            out_fields,
        }
    }

    fn query_url(&self) -> String {
        format!("{}/query", self.url.trim_end_matches('/'))
    }

    /// query parameters shared by every request
    fn base_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("outFields", self.out_fields.clone()),
            ("returnGeometry", String::from("false")),
            ("f", String::from("json")),
        ]
    }

    fn bbox_params(
        &self,
        bbox: &BoundingBox,
        services: Option<&[String]>,
    ) -> Vec<(&'static str, String)> {
        let mut params = self.base_params();
        params.push(("geometry", bbox.to_envelope()));
        params.push(("geometryType", String::from("esriGeometryEnvelope")));
        params.push(("inSR", String::from("4326")));
        if let Some(clause) = where_clause(services) {
            params.push(("where", clause));
        }
        params
    }

    fn id_params(&self, id: &str) -> Vec<(&'static str, String)> {
        let mut params = self.base_params();
        params.push(("where", id_where_clause(&self.id_field, id)));
        params
    }

    fn fetch(&self, params: &[(&'static str, String)]) -> Result<Vec<GisRecord>, FacilityClientError> {
        let url = self.query_url();
        log::debug!("GET {url} with {params:?}");
        let response = self.http.get(&url).query(params).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FacilityClientError::UpstreamStatus {
                code: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }
        let body = response.text()?;
        let records = parse_query_response(&body)?;
        log::debug!("received {} records from {url}", records.len());
        Ok(records)
    }
}

impl FacilityDirectory for MapServerClient {
    fn query(
        &self,
        bbox: &BoundingBox,
        services: Option<&[String]>,
    ) -> Result<Vec<GisRecord>, FacilityClientError> {
        if let Some(services) = services {
            validate_services(services)?;
        }
        self.fetch(&self.bbox_params(bbox, services))
    }

    fn find_by(&self, id: &str) -> Result<Option<GisRecord>, FacilityClientError> {
        let mut records = self.fetch(&self.id_params(id))?;
        if records.len() > 1 {
            log::warn!(
                "{} records share {}={id}, using the first",
                records.len(),
                self.id_field
            );
        }
        Ok(if records.is_empty() {
            None
        } else {
            Some(records.swap_remove(0))
        })
    }
}
