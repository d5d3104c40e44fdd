//! tasklist-core
//!
//! Turns activated user-task jobs from a workflow engine into task records.
//!
//! # モジュール構成
//! - **domain**: jobs, task records, form schema, errors
//! - **ports**: TaskStore, Notifier, Clock
//! - **app**: SchemaValidator, TaskExtractor, UserTaskJobHandler
//! - **impls**: InMemoryTaskStore, ChannelNotifier
//! - **config**: SchemaConfig

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{JobHandler, SchemaValidator, TaskExtractor, UserTaskJobHandler};
pub use config::{DEFAULT_FIELD_TYPES, SchemaConfig};
pub use domain::{ActivatedJob, JobKey, SinkError, TaskError, TaskRecord};
