use crate::TimeSource;
use core::time::Duration;
use portable_atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// A settable clock for tests, simulations and replays.
///
/// Clones share the same underlying counter, so a test can hand one clone to
/// a [`Scheduler`] and keep another to move time forward.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use fuzzytime::{ManualClock, TimeSource};
///
/// let clock = ManualClock::new(1_000);
/// let handle = clock.clone();
///
/// handle.advance(Duration::from_secs(2));
/// assert_eq!(clock.current_millis(), 3_000);
/// ```
///
/// [`Scheduler`]: crate::Scheduler
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    /// Creates a clock frozen at `millis` since the UNIX epoch.
    pub fn new(millis: i64) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(millis)),
        }
    }

    /// Moves the clock to an absolute time.
    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::Release);
    }

    /// Moves the clock forward by `dur`.
    pub fn advance(&self, dur: Duration) {
        self.millis
            .fetch_add(dur.as_millis() as i64, Ordering::AcqRel);
    }
}

impl TimeSource for ManualClock {
    fn current_millis(&self) -> i64 {
        self.millis.load(Ordering::Acquire)
    }
}
