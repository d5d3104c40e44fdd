//! Dynamically-typed header and variable values.
//!
//! Custom headers and process variables arrive as loosely-typed maps. Lookups
//! go through [`Variables`], whose typed getters answer "absent" instead of
//! failing, so fallback chains (header -> variable -> default) stay plain
//! `Option` combinators.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

/// One value of a header or variable map.
///
/// Scalars form the closed set the extractor reasons about. Objects and
/// arrays found in process variables are carried as `Nested`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderValue {
    Null,
    Boolean(bool),
    Number(serde_json::Number),
    String(String),
    Nested(serde_json::Value),
}

impl HeaderValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, HeaderValue::Null)
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::String(value.to_owned())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        HeaderValue::String(value)
    }
}

impl From<bool> for HeaderValue {
    fn from(value: bool) -> Self {
        HeaderValue::Boolean(value)
    }
}

impl From<i64> for HeaderValue {
    fn from(value: i64) -> Self {
        HeaderValue::Number(value.into())
    }
}

/// String-keyed map of [`HeaderValue`]s with typed, non-failing getters.
///
/// A key mapped to `null` reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables(BTreeMap<String, HeaderValue>);

impl Variables {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<HeaderValue>,
    ) -> Option<HeaderValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&HeaderValue> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// The value under `key` if it is present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(HeaderValue::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<HeaderValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Process variables of a job: the JSON text as received plus a typed view.
///
/// The received text is what gets persisted, byte for byte. Once a variable
/// is inserted programmatically the text is rendered from the typed view
/// instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    raw: Option<String>,
    variables: Variables,
}

impl Payload {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            variables: serde_json::from_str(raw)?,
            raw: Some(raw.to_owned()),
        })
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<HeaderValue>,
    ) -> Option<HeaderValue> {
        self.raw = None;
        self.variables.insert(key, value)
    }

    /// Serialized snapshot: the received text if untouched.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match &self.raw {
            Some(raw) => Ok(raw.clone()),
            None => self.variables.to_json(),
        }
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Payload::from_json(raw.get()).map_err(D::Error::custom)
    }
}
