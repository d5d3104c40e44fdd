//! UserTaskJobHandler - extract, persist, notify.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::{ActivatedJob, TaskError, TaskRecord};
use crate::ports::{Clock, MonotonicClock, Notifier, SystemClock, TaskStore};

use super::extractor::TaskExtractor;

/// Handles one activated job.
///
/// The dispatch layer owns job completion and retry; it decides from the
/// returned error what to do with the job.
#[async_trait]
pub trait JobHandler: Send + Sync {
    async fn handle(&self, job: &ActivatedJob) -> Result<TaskRecord, TaskError>;
}

/// Turns user-task jobs into stored task records.
///
/// Sequence per job:
/// 1. extract and validate (no side effects)
/// 2. `TaskStore::save`
/// 3. `Notifier::notify_new_task`, only once the save succeeded
pub struct UserTaskJobHandler<S, N, C = MonotonicClock<SystemClock>> {
    extractor: TaskExtractor<C>,
    store: S,
    notifier: N,
}

impl<S, N> UserTaskJobHandler<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self::with_extractor(TaskExtractor::default(), store, notifier)
    }
}

impl<S, N, C> UserTaskJobHandler<S, N, C> {
    pub fn with_extractor(extractor: TaskExtractor<C>, store: S, notifier: N) -> Self {
        Self {
            extractor,
            store,
            notifier,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

#[async_trait]
impl<S, N, C> JobHandler for UserTaskJobHandler<S, N, C>
where
    S: TaskStore,
    N: Notifier,
    C: Clock,
{
    async fn handle(&self, job: &ActivatedJob) -> Result<TaskRecord, TaskError> {
        let record = self.extractor.extract(job)?;
        debug!(job_key = %record.key, name = %record.name, "extracted user task");

        self.store.save(record.clone()).await?;
        self.notifier.notify_new_task().await?;

        info!(
            job_key = %record.key,
            name = %record.name,
            assignee = record.assignee.as_deref().unwrap_or("-"),
            "user task created"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SinkError;
    use std::sync::{Arc, Mutex};

    /// Shared, ordered log of sink calls.
    type CallLog = Arc<Mutex<Vec<&'static str>>>;

    struct RecordingStore {
        calls: CallLog,
        saved: Mutex<Vec<TaskRecord>>,
        fail: bool,
    }

    impl RecordingStore {
        fn new(calls: &CallLog) -> Self {
            Self {
                calls: Arc::clone(calls),
                saved: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing(calls: &CallLog) -> Self {
            Self {
                fail: true,
                ..Self::new(calls)
            }
        }
    }

    #[async_trait]
    impl TaskStore for RecordingStore {
        async fn save(&self, record: TaskRecord) -> Result<(), SinkError> {
            // yield so a notify racing ahead of the save would show up in the log
            tokio::task::yield_now().await;
            if self.fail {
                self.calls.lock().unwrap().push("save-failed");
                return Err(SinkError::Store("unavailable".into()));
            }
            self.saved.lock().unwrap().push(record);
            self.calls.lock().unwrap().push("save");
            Ok(())
        }
    }

    struct RecordingNotifier {
        calls: CallLog,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify_new_task(&self) -> Result<(), SinkError> {
            self.calls.lock().unwrap().push("notify");
            Ok(())
        }
    }

    fn handler(
        store: RecordingStore,
        calls: &CallLog,
    ) -> UserTaskJobHandler<RecordingStore, RecordingNotifier> {
        UserTaskJobHandler::new(
            store,
            RecordingNotifier {
                calls: Arc::clone(calls),
            },
        )
    }

    #[tokio::test]
    async fn valid_job_is_saved_then_notified() {
        let calls = CallLog::default();
        let handler = handler(RecordingStore::new(&calls), &calls);
        let job = ActivatedJob::new(7, "review")
            .with_header("formFields", r#"[{"key":"ok","type":"boolean"}]"#)
            .with_variable("assignee", "bob");

        let record = handler.handle(&job).await.unwrap();

        assert_eq!(*calls.lock().unwrap(), vec!["save", "notify"]);
        let saved = handler.store().saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0], record);
        assert_eq!(record.assignee.as_deref(), Some("bob"));
    }

    #[tokio::test]
    async fn invalid_schema_never_reaches_the_sinks() {
        let calls = CallLog::default();
        let handler = handler(RecordingStore::new(&calls), &calls);

        for fields in [
            r#"[{"type":"string"}]"#,
            r#"[{"key":"due","type":"date"}]"#,
            "not a list",
        ] {
            let job = ActivatedJob::new(1, "step").with_header("formFields", fields);
            let err = handler.handle(&job).await.unwrap_err();
            assert!(err.is_validation());
        }

        assert!(calls.lock().unwrap().is_empty());
        assert!(handler.store().saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_save_propagates_and_skips_notify() {
        let calls = CallLog::default();
        let handler = handler(RecordingStore::failing(&calls), &calls);

        let err = handler
            .handle(&ActivatedJob::new(1, "step"))
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::Sink(SinkError::Store(_))));
        assert_eq!(*calls.lock().unwrap(), vec!["save-failed"]);
    }

    #[tokio::test]
    async fn failed_notify_propagates() {
        struct BrokenNotifier;

        #[async_trait]
        impl Notifier for BrokenNotifier {
            async fn notify_new_task(&self) -> Result<(), SinkError> {
                Err(SinkError::Notify("socket closed".into()))
            }
        }

        let calls = CallLog::default();
        let handler = UserTaskJobHandler::new(RecordingStore::new(&calls), BrokenNotifier);

        let err = handler
            .handle(&ActivatedJob::new(1, "step"))
            .await
            .unwrap_err();

        assert!(matches!(err, TaskError::Sink(SinkError::Notify(_))));
        assert_eq!(*calls.lock().unwrap(), vec!["save"]);
    }

    #[tokio::test]
    async fn distinct_jobs_can_be_handled_concurrently() {
        let calls = CallLog::default();
        let handler = Arc::new(handler(RecordingStore::new(&calls), &calls));

        let mut joins = Vec::new();
        for key in 0..8_i64 {
            let h = Arc::clone(&handler);
            joins.push(tokio::spawn(async move {
                h.handle(&ActivatedJob::new(key, "step")).await
            }));
        }
        for j in joins {
            j.await.unwrap().unwrap();
        }

        assert_eq!(handler.store().saved.lock().unwrap().len(), 8);
    }
}
