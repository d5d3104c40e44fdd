//! Task record: the one artifact produced per handled job.

use serde::{Deserialize, Serialize};

use super::job::JobKey;

/// A user task derived from an activated job.
///
/// Built once per handled job and then handed to the task store, which owns
/// it from then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub key: JobKey,

    /// Epoch milliseconds at handling time.
    pub timestamp: i64,

    /// Serialized snapshot of the job's process variables.
    pub payload: String,

    pub name: String,
    pub description: String,

    /// Raw form-field list, persisted exactly as received once validated.
    pub form_fields: Option<String>,

    /// Opaque form reference. Not validated.
    pub task_form: Option<String>,

    pub assignee: Option<String>,
    pub candidate_group: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TaskRecord {
        TaskRecord {
            key: JobKey::Number(1),
            timestamp: 1_704_110_400_000,
            payload: "{}".to_string(),
            name: "Review".to_string(),
            description: String::new(),
            form_fields: None,
            task_form: None,
            assignee: Some("alice".to_string()),
            candidate_group: None,
        }
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["candidateGroup"], serde_json::Value::Null);
        assert_eq!(value["formFields"], serde_json::Value::Null);
        assert_eq!(value["assignee"], "alice");
    }
}
