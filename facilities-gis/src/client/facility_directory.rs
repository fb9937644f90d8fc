use super::{BoundingBox, FacilityClientError};
use crate::adapter::{from_gis, from_gis_batch, Facility, GisRecord};

/// Source of raw facility records. Implementors only fetch; turning records
/// into [`Facility`] values is shared by the provided methods.
pub trait FacilityDirectory {
    /// records within `bbox`, optionally restricted to facilities offering
    /// every one of `services`
    fn query(
        &self,
        bbox: &BoundingBox,
        services: Option<&[String]>,
    ) -> Result<Vec<GisRecord>, FacilityClientError>;

    /// the record with the given station number, if the directory has one
    fn find_by(&self, id: &str) -> Result<Option<GisRecord>, FacilityClientError>;

    fn query_facilities(
        &self,
        bbox: &BoundingBox,
        services: Option<&[String]>,
    ) -> Result<Vec<Facility>, FacilityClientError> {
        let records = self.query(bbox, services)?;
        Ok(from_gis_batch(&records))
    }

    fn find_facility(&self, id: &str) -> Result<Option<Facility>, FacilityClientError> {
        Ok(self.find_by(id)?.as_ref().map(from_gis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::AttributeValue;
    use crate::client::parse_bbox;

    struct InMemoryDirectory {
        records: Vec<GisRecord>,
    }

    impl FacilityDirectory for InMemoryDirectory {
        fn query(
            &self,
            _bbox: &BoundingBox,
            services: Option<&[String]>,
        ) -> Result<Vec<GisRecord>, FacilityClientError> {
            let services = services.unwrap_or_default();
            Ok(self
                .records
                .iter()
                .filter(|r| services.iter().all(|s| r.get(s).is_yes()))
                .cloned()
                .collect())
        }

        fn find_by(&self, id: &str) -> Result<Option<GisRecord>, FacilityClientError> {
            Ok(self
                .records
                .iter()
                .find(|r| r.get("StationNumber") == &AttributeValue::from(id))
                .cloned())
        }
    }

    struct FailingDirectory;

    impl FacilityDirectory for FailingDirectory {
        fn query(
            &self,
            _bbox: &BoundingBox,
            _services: Option<&[String]>,
        ) -> Result<Vec<GisRecord>, FacilityClientError> {
            Err(FacilityClientError::MalformedResponse(String::from("truncated body")))
        }

        fn find_by(&self, _id: &str) -> Result<Option<GisRecord>, FacilityClientError> {
            Err(FacilityClientError::UpstreamStatus {
                code: 503,
                message: String::from("Service Unavailable"),
            })
        }
    }

    fn directory() -> InMemoryDirectory {
        let records = serde_json::from_value(serde_json::json!([
            { "attributes": { "StationNumber": "442", "StationName": " Cheyenne ", "PrimaryCare": "YES" } },
            { "attributes": { "StationNumber": "554", "StationName": "Denver", "PrimaryCare": "NO" } }
        ]))
        .unwrap();
        InMemoryDirectory { records }
    }

    #[test]
    fn test_query_facilities() {
        let bbox = parse_bbox("-110,35,-100,45").unwrap();
        let services = vec![String::from("PrimaryCare")];
        let result = directory()
            .query_facilities(&bbox, Some(services.as_slice()))
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, AttributeValue::from("Cheyenne"));
        assert_eq!(result[0].services.health[0].sl1, vec!["PrimaryCare"]);
    }

    #[test]
    fn test_find_facility() {
        let dir = directory();
        let found = dir.find_facility("554").unwrap().unwrap();
        assert_eq!(found.unique_id, AttributeValue::from("554"));
        assert!(dir.find_facility("000").unwrap().is_none());
    }

    #[test]
    fn test_upstream_failure_propagates() {
        let bbox = parse_bbox("-110,35,-100,45").unwrap();
        assert!(matches!(
            FailingDirectory.query_facilities(&bbox, None),
            Err(FacilityClientError::MalformedResponse(_))
        ));
        assert!(matches!(
            FailingDirectory.find_facility("442"),
            Err(FacilityClientError::UpstreamStatus { code: 503, .. })
        ));
    }
}
