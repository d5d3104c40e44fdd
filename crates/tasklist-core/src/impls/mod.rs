//! Impls - port implementations for development, tests and the CLI.
//!
//! Production stores and notification transports live outside this crate
//! and only need to implement the traits in [`crate::ports`].

pub mod channel_notifier;
pub mod inmem_store;

pub use self::channel_notifier::{ChannelNotifier, NewTaskSignal};
pub use self::inmem_store::InMemoryTaskStore;
