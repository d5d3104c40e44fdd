//! Clock port - time source for task timestamps.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Clock は現在時刻を提供
///
/// テストでは FixedClock に差し替える。
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always answers the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}

/// Wraps a clock so that readings never go backwards, even if the wall clock
/// is stepped back. Resolution is one millisecond.
#[derive(Debug)]
pub struct MonotonicClock<C> {
    inner: C,
    last_ms: AtomicI64,
}

impl<C: Clock> MonotonicClock<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            last_ms: AtomicI64::new(i64::MIN),
        }
    }
}

impl Default for MonotonicClock<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> Clock for MonotonicClock<C> {
    fn now(&self) -> DateTime<Utc> {
        let now = self.inner.now();
        let ms = now.timestamp_millis();
        let prev = self.last_ms.fetch_max(ms, Ordering::AcqRel);
        if prev > ms {
            DateTime::from_timestamp_millis(prev).unwrap_or(now)
        } else {
            now
        }
    }
}
