//! Activated job as handed over by the job source.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::{HeaderValue, Payload, Variables};

/// System-assigned job identifier. Integer in practice, but some sources
/// hand out string keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobKey {
    Number(i64),
    Text(String),
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobKey::Number(n) => n.fmt(f),
            JobKey::Text(s) => s.fmt(f),
        }
    }
}

impl From<i64> for JobKey {
    fn from(value: i64) -> Self {
        JobKey::Number(value)
    }
}

impl From<&str> for JobKey {
    fn from(value: &str) -> Self {
        JobKey::Text(value.to_owned())
    }
}

impl From<String> for JobKey {
    fn from(value: String) -> Self {
        JobKey::Text(value)
    }
}

/// A job activated for the user-task worker.
///
/// Read-only input: the extractor never mutates it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivatedJob {
    pub key: JobKey,

    /// Workflow step that produced the job. Fallback display name.
    pub element_id: String,

    #[serde(default)]
    pub custom_headers: Variables,

    /// Process variables visible to the job.
    #[serde(default)]
    pub payload: Payload,
}

impl ActivatedJob {
    pub fn new(key: impl Into<JobKey>, element_id: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            element_id: element_id.into(),
            custom_headers: Variables::new(),
            payload: Payload::default(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<HeaderValue>) -> Self {
        self.custom_headers.insert(name, value);
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<HeaderValue>) -> Self {
        self.payload.insert(name, value);
        self
    }
}
