//! Sleeping and wall-clock access behind one seam

use std::future::Future;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tokio_util::sync::CancellationToken;

/// Time source used by the countdown loop and the alert emitter
pub trait Clock {
    /// Wait for `duration` to pass
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;

    /// Current local wall-clock time
    fn now(&self) -> NaiveDateTime;
}

/// Real clock backed by the tokio timer and the system time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Sleep on `clock`, waking early if `cancel` fires.
///
/// Returns `false` when the sleep was cut short by cancellation.
pub async fn sleep_unless_cancelled<C: Clock>(
    clock: &C,
    duration: Duration,
    cancel: &CancellationToken,
) -> bool {
    tokio::select! {
        _ = clock.sleep(duration) => true,
        _ = cancel.cancelled() => false,
    }
}
