//! TaskExtractor - derives a task record from an activated job.

use crate::config::SchemaConfig;
use crate::domain::{ActivatedJob, HeaderValue, TaskError, TaskRecord, Variables};
use crate::ports::{Clock, MonotonicClock, SystemClock};

use super::validator::SchemaValidator;

/// Custom header names read by the extractor.
pub mod headers {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const FORM_FIELDS: &str = "formFields";
    pub const TASK_FORM: &str = "taskForm";
    pub const ASSIGNEE: &str = "assignee";
    pub const CANDIDATE_GROUP: &str = "candidateGroup";
}

/// Turns one job into one task record, or fails before anything is persisted.
///
/// Pure: no I/O, no shared mutable state beyond the clock.
#[derive(Debug)]
pub struct TaskExtractor<C = MonotonicClock<SystemClock>> {
    clock: C,
    validator: SchemaValidator,
}

impl TaskExtractor {
    pub fn with_config(config: SchemaConfig) -> Self {
        Self::new(MonotonicClock::default(), SchemaValidator::new(config))
    }
}

impl Default for TaskExtractor {
    fn default() -> Self {
        Self::with_config(SchemaConfig::default())
    }
}

impl<C: Clock> TaskExtractor<C> {
    pub fn new(clock: C, validator: SchemaValidator) -> Self {
        Self { clock, validator }
    }

    pub fn extract(&self, job: &ActivatedJob) -> Result<TaskRecord, TaskError> {
        let timestamp = self.clock.now().timestamp_millis();
        let payload = job.payload.to_json().map_err(TaskError::PayloadEncoding)?;
        let custom = &job.custom_headers;
        let variables = job.payload.variables();

        let form_fields = match custom.get(headers::FORM_FIELDS) {
            None => None,
            Some(HeaderValue::String(raw)) => {
                self.validator.validate(raw)?;
                Some(raw.clone())
            }
            Some(_) => return Err(TaskError::FormFieldsNotText),
        };

        Ok(TaskRecord {
            key: job.key.clone(),
            timestamp,
            payload,
            name: custom
                .get_str(headers::NAME)
                .unwrap_or(job.element_id.as_str())
                .to_owned(),
            description: custom
                .get_str(headers::DESCRIPTION)
                .unwrap_or_default()
                .to_owned(),
            form_fields,
            task_form: custom.get_str(headers::TASK_FORM).map(str::to_owned),
            assignee: header_or_variable(custom, variables, headers::ASSIGNEE),
            candidate_group: header_or_variable(custom, variables, headers::CANDIDATE_GROUP),
        })
    }
}

fn header_or_variable(custom: &Variables, payload: &Variables, name: &str) -> Option<String> {
    custom
        .get_str(name)
        .or_else(|| payload.get_str(name))
        .map(str::to_owned)
}
