//! ChannelNotifier - broadcasts "new task" to in-process subscribers.

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::trace;

use crate::domain::SinkError;
use crate::ports::Notifier;

const DEFAULT_CAPACITY: usize = 16;

/// Payload-free "a new task exists" signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewTaskSignal;

/// Fans the signal out over a tokio broadcast channel, e.g. to UI sessions
/// that refresh their task list.
///
/// Nobody listening is not an error.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: broadcast::Sender<NewTaskSignal>,
}

impl ChannelNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NewTaskSignal> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ChannelNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl Notifier for ChannelNotifier {
    async fn notify_new_task(&self) -> Result<(), SinkError> {
        match self.tx.send(NewTaskSignal) {
            Ok(receivers) => trace!(receivers, "new-task signal sent"),
            Err(_) => trace!("new-task signal dropped, no subscribers"),
        }
        Ok(())
    }
}
