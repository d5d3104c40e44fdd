//! InMemoryTaskStore - development / test task store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{JobKey, SinkError, TaskRecord};
use crate::ports::TaskStore;

/// Keeps task records in a map keyed by job key.
///
/// A job delivered twice ends up as one record: the later save replaces the
/// earlier one.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    records: Mutex<HashMap<JobKey, TaskRecord>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &JobKey) -> Option<TaskRecord> {
        self.records.lock().await.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn save(&self, record: TaskRecord) -> Result<(), SinkError> {
        self.records.lock().await.insert(record.key.clone(), record);
        Ok(())
    }
}
