//! Ports - 抽象化レイヤー
//!
//! The handler only talks to the outside world through these traits. The
//! persistence backend and the notification transport live behind them.

pub mod clock;
pub mod notifier;
pub mod task_store;

pub use self::clock::{Clock, FixedClock, MonotonicClock, SystemClock};
pub use self::notifier::Notifier;
pub use self::task_store::TaskStore;
