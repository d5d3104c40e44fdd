//! Schema configuration for form-field validation.

use serde::{Deserialize, Serialize};

/// Field types accepted in a `formFields` header unless configured otherwise.
pub const DEFAULT_FIELD_TYPES: [&str; 3] = ["string", "number", "boolean"];

/// Closed set of form-field types the validator accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaConfig {
    pub supported_field_types: Vec<String>,
}

impl SchemaConfig {
    pub fn with_field_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supported_field_types: types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn supports(&self, field_type: &str) -> bool {
        self.supported_field_types.iter().any(|t| t == field_type)
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self::with_field_types(DEFAULT_FIELD_TYPES)
    }
}
