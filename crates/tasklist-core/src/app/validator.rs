//! SchemaValidator - checks the form-field list carried in a job header.

use serde_json::Value;

use crate::config::SchemaConfig;
use crate::domain::{FormField, TaskError};

/// Validates a serialized form-field list against a closed set of types.
///
/// Fail-fast: entries are decoded and checked one at a time in list order,
/// and the first offender is reported.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    config: SchemaConfig,
}

impl SchemaValidator {
    pub fn new(config: SchemaConfig) -> Self {
        Self { config }
    }

    pub fn validate(&self, serialized_fields: &str) -> Result<(), TaskError> {
        let entries = FormField::entries(serialized_fields).map_err(TaskError::MalformedSchema)?;
        entries.into_iter().try_for_each(|entry| {
            let field = FormField::from_entry(entry).map_err(TaskError::MalformedSchema)?;
            self.check(&field)
        })
    }

    fn check(&self, field: &FormField) -> Result<(), TaskError> {
        let Some(key) = field.key_text() else {
            return Err(TaskError::MissingFieldKey);
        };

        match &field.field_type {
            Some(Value::String(field_type)) if self.config.supports(field_type) => Ok(()),
            _ => Err(TaskError::UnsupportedFieldType {
                key,
                field_type: field.type_text(),
                supported: self.config.supported_field_types.clone(),
            }),
        }
    }
}
