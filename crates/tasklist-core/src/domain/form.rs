//! Form-field schema embedded in the `formFields` header.

use serde::Deserialize;
use serde_json::Value;

/// One entry of the embedded form schema.
///
/// Only parsed to validate the raw header; the raw string is what gets
/// persisted. `key` and `type` are kept as raw JSON so that a missing or
/// mistyped value is a validation failure, not a parse failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormField {
    #[serde(default)]
    pub key: Option<Value>,

    #[serde(rename = "type", default)]
    pub field_type: Option<Value>,

    /// Labels, defaults and anything else. Not interpreted.
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, Value>,
}

impl FormField {
    /// Splits a serialized list into its entries without interpreting them.
    pub fn entries(raw: &str) -> Result<Vec<Value>, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn from_entry(entry: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(entry)
    }

    /// Key as text. Non-string keys count as present and print as JSON.
    pub fn key_text(&self) -> Option<String> {
        self.key.as_ref().map(text_of)
    }

    /// Type as text. Non-string types print as JSON, e.g. `5` or `true`.
    pub fn type_text(&self) -> Option<String> {
        self.field_type.as_ref().map(text_of)
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
