//! TaskStore port - durable home of task records.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{SinkError, TaskRecord};

/// TaskStore persists task records.
///
/// Ownership of the record passes to the store on `save`.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn save(&self, record: TaskRecord) -> Result<(), SinkError>;
}

#[async_trait]
impl<T: TaskStore + ?Sized> TaskStore for Arc<T> {
    async fn save(&self, record: TaskRecord) -> Result<(), SinkError> {
        (**self).save(record).await
    }
}
