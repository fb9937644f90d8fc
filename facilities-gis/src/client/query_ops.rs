use serde::Deserialize;

use super::FacilityClientError;
use crate::adapter::{service_whitelist, GisRecord};

/// Builds a where clause requiring every listed service to be offered, e.g.
/// `MentalHealthCare='YES' AND PrimaryCare='YES'`. No services (None or an
/// empty list) means no clause.
pub fn where_clause(services: Option<&[String]>) -> Option<String> {
    match services {
        Some(services) if !services.is_empty() => Some(
            services
                .iter()
                .map(|s| format!("{s}='YES'"))
                .collect::<Vec<_>>()
                .join(" AND "),
        ),
        _ => None,
    }
}

/// where clause selecting a single facility by its id field. single quotes in
/// the id are doubled.
pub fn id_where_clause(id_field: &str, id: &str) -> String {
    format!("{id_field}='{}'", id.replace('\'', "''"))
}

/// rejects service codes that are not in the service hierarchy. codes are
/// interpolated into the where clause, so only known codes are allowed.
pub fn validate_services(services: &[String]) -> Result<(), FacilityClientError> {
    let whitelist = service_whitelist();
    match services
        .iter()
        .find(|s| !whitelist.contains(&s.as_str()))
    {
        Some(unknown) => Err(FacilityClientError::UnknownService(unknown.clone())),
        None => Ok(()),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MapServerResponse {
    Error { error: MapServerErrorBody },
    Features { features: Vec<GisRecord> },
}

#[derive(Deserialize)]
struct MapServerErrorBody {
    code: Option<u16>,
    message: Option<String>,
    #[serde(default)]
    details: Vec<String>,
}

/// Decodes a map service query response body into its features. The service
/// reports failures inside a 200 response as an `error` object.
pub fn parse_query_response(body: &str) -> Result<Vec<GisRecord>, FacilityClientError> {
    let response: MapServerResponse = serde_json::from_str(body)
        .map_err(|e| FacilityClientError::MalformedResponse(format!("{e}")))?;
    match response {
        MapServerResponse::Features { features } => Ok(features),
        MapServerResponse::Error { error } => {
            let mut message = error.message.unwrap_or_else(|| String::from("unknown error"));
            if !error.details.is_empty() {
                message = format!("{message} ({})", error.details.join("; "));
            }
            Err(FacilityClientError::UpstreamStatus {
                code: error.code.unwrap_or(500),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::AttributeValue;

    #[test]
    fn test_where_clause() {
        let services = vec![String::from("MentalHealthCare"), String::from("PrimaryCare")];
        assert_eq!(
            where_clause(Some(services.as_slice())),
            Some(String::from("MentalHealthCare='YES' AND PrimaryCare='YES'"))
        );
        assert_eq!(
            where_clause(Some(&services[..1])),
            Some(String::from("MentalHealthCare='YES'"))
        );
        assert_eq!(where_clause(Some(&Vec::new()[..])), None);
        assert_eq!(where_clause(None), None);
    }

    #[test]
    fn test_id_where_clause() {
        assert_eq!(id_where_clause("StationNumber", "442"), "StationNumber='442'");
        assert_eq!(
            id_where_clause("StationNumber", "442' OR '1'='1"),
            "StationNumber='442'' OR ''1''=''1'"
        );
    }

    #[test]
    fn test_validate_services() {
        let ok = vec![String::from("DentalServices"), String::from("LabServices")];
        assert!(validate_services(&ok).is_ok());
        let bad = vec![String::from("DentalServices"), String::from("1=1 OR Audiology")];
        match validate_services(&bad) {
            Err(FacilityClientError::UnknownService(s)) => assert_eq!(s, "1=1 OR Audiology"),
            other => panic!("expected UnknownService, found {other:?}"),
        }
    }

    #[test]
    fn test_parse_query_response() {
        let body = serde_json::json!({
            "objectIdFieldName": "OBJECTID",
            "features": [
                { "attributes": { "StationNumber": "442", "Zip": "82001" } },
                { "attributes": { "StationNumber": "554", "Zip": null } }
            ]
        })
        .to_string();
        let records = parse_query_response(&body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("StationNumber"), &AttributeValue::from("554"));
    }

    #[test]
    fn test_parse_query_response_error_object() {
        let body = r#"{"error":{"code":400,"message":"Unable to complete operation.","details":["Invalid query"]}}"#;
        match parse_query_response(body) {
            Err(FacilityClientError::UpstreamStatus { code, message }) => {
                assert_eq!(code, 400);
                assert_eq!(message, "Unable to complete operation. (Invalid query)");
            }
            other => panic!("expected UpstreamStatus, found {other:?}"),
        }
    }

    #[test]
    fn test_parse_query_response_malformed() {
        assert!(matches!(
            parse_query_response("<html>gateway timeout</html>"),
            Err(FacilityClientError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_query_response(r#"{"count": 3}"#),
            Err(FacilityClientError::MalformedResponse(_))
        ));
    }
}
