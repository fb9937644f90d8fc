use serde::{Deserialize, Serialize};

use super::{AttributeBag, AttributeValue};

/// A single feature as returned by the facility map service. Only the
/// attribute list is consumed; geometry is carried as Latitude/Longitude
/// attributes in this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GisRecord {
    #[serde(default)]
    pub attributes: AttributeBag,
}

impl GisRecord {
    pub fn new(attributes: AttributeBag) -> Self {
        Self { attributes }
    }

    pub fn get(&self, key: &str) -> &AttributeValue {
        self.attributes.get(key)
    }
}

impl From<AttributeBag> for GisRecord {
    fn from(value: AttributeBag) -> Self {
        Self::new(value)
    }
}
