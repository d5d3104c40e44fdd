//! Errors - failure kinds of user-task handling.

use thiserror::Error;

/// ErrorKind classifies a failure for the dispatch layer.
///
/// - Validation: the job itself is bad; retrying it will fail the same way.
/// - Infrastructure: a collaborator (store, notifier) failed; the job may
///   succeed on a later attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Infrastructure,
}

/// Failure reported by a task sink collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("task store failed: {0}")]
    Store(String),

    #[error("new-task notification failed: {0}")]
    Notify(String),
}

/// Why a job could not be turned into a persisted task.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("form-fields could not be parsed: {0}")]
    MalformedSchema(#[source] serde_json::Error),

    #[error("the 'formFields' header must be a string")]
    FormFieldsNotText,

    #[error("form-field must have a 'key'")]
    MissingFieldKey,

    #[error(
        "type '{}' of form-field '{}' is not supported. Must be one of: {}",
        .field_type.as_deref().unwrap_or("null"),
        .key,
        .supported.join(", ")
    )]
    UnsupportedFieldType {
        key: String,
        field_type: Option<String>,
        supported: Vec<String>,
    },

    #[error("job payload could not be serialized: {0}")]
    PayloadEncoding(#[source] serde_json::Error),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl TaskError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::Sink(_) => ErrorKind::Infrastructure,
            _ => ErrorKind::Validation,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}
