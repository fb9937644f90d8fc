use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::{collections::HashMap, fmt};

static NULL_VALUE: AttributeValue = AttributeValue::Null;

/// A single value from a GIS attribute list. The map service only emits
/// strings, numbers and nulls for facility layers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Number(Number),
    #[default]
    Null,
}

impl AttributeValue {
    /// copy of this value with surrounding whitespace removed from strings.
    /// numbers and nulls are returned unchanged.
    pub fn trimmed(&self) -> AttributeValue {
        match self {
            AttributeValue::String(s) => AttributeValue::String(s.trim().to_string()),
            other => other.clone(),
        }
    }

    /// null, empty and whitespace-only strings are blank. numbers never are.
    pub fn is_blank(&self) -> bool {
        match self {
            AttributeValue::String(s) => s.trim().is_empty(),
            AttributeValue::Number(_) => false,
            AttributeValue::Null => true,
        }
    }

    /// exact, case-sensitive match against the feed's "YES" flag value
    pub fn is_yes(&self) -> bool {
        matches!(self, AttributeValue::String(s) if s == "YES")
    }

    /// true for a numeric zero, or a string whose trimmed text parses to zero
    pub fn is_zero(&self) -> bool {
        match self {
            AttributeValue::Number(n) => n.as_f64() == Some(0.0),
            AttributeValue::String(s) => s.trim().parse::<f64>().is_ok_and(|v| v == 0.0),
            AttributeValue::Null => false,
        }
    }

    /// reads the value as integer milliseconds. fractional milliseconds are
    /// floored, numeric strings are accepted, anything else is None.
    pub fn as_epoch_millis(&self) -> Option<i64> {
        match self {
            AttributeValue::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|v| v.is_finite())
                    .map(|v| v.floor() as i64)
            }),
            AttributeValue::String(s) => s.trim().parse::<i64>().ok(),
            AttributeValue::Null => None,
        }
    }
}

/// strings print verbatim, numbers in their JSON form and null as the empty string
impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) => write!(f, "{s}"),
            AttributeValue::Number(n) => write!(f, "{n}"),
            AttributeValue::Null => Ok(()),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(Number::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(AttributeValue::Number)
            .unwrap_or(AttributeValue::Null)
    }
}

impl<T> From<Option<T>> for AttributeValue
where
    T: Into<AttributeValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AttributeValue::Null)
    }
}

/// flat attribute list of a single GIS feature, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBag(HashMap<String, AttributeValue>);

impl AttributeBag {
    /// value stored at `key`. absent keys read as null.
    pub fn get(&self, key: &str) -> &AttributeValue {
        self.0.get(key).unwrap_or(&NULL_VALUE)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, AttributeValue>> for AttributeBag {
    fn from(value: HashMap<String, AttributeValue>) -> Self {
        Self(value)
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeBag
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
