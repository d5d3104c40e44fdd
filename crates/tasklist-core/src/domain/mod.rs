//! Domain model (jobs, task records, form schema, errors).

pub mod errors;
pub mod form;
pub mod job;
pub mod task;
pub mod value;

pub use self::errors::{ErrorKind, SinkError, TaskError};
pub use self::form::FormField;
pub use self::job::{ActivatedJob, JobKey};
pub use self::task::TaskRecord;
pub use self::value::{HeaderValue, Payload, Variables};
