//! Notifier port - "a new task is available" signal.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::SinkError;

/// Notifier tells interested parties that a new task now exists.
///
/// Only fired after the record has been saved.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_new_task(&self) -> Result<(), SinkError>;
}

#[async_trait]
impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    async fn notify_new_task(&self) -> Result<(), SinkError> {
        (**self).notify_new_task().await
    }
}
