use crate::{RunOutcome, Scheduler, SchedulerAsyncExt, Sink, SleepProvider, Source, TimeSource};

/// Extension trait for driving a [`Scheduler`] on the
/// [`tokio`](https://docs.rs/tokio) async runtime.
///
/// This trait provides a convenience method for using a [`SleepProvider`]
/// backed by the `tokio` runtime, allowing you to call `.run_tokio()`
/// without specifying the sleep strategy manually.
pub trait SchedulerTokioExt {
    /// Returns a future that keeps the scheduler's targets fresh until
    /// `shutdown` completes or no timers remain.
    ///
    /// Internally delegates to [`SchedulerAsyncExt::run`] with
    /// [`TokioSleep`] as the sleep strategy.
    fn run_tokio(&mut self, shutdown: impl Future<Output = ()>) -> impl Future<Output = RunOutcome>;
}

impl<K, H, T> SchedulerTokioExt for Scheduler<K, H, T>
where
    K: PartialEq,
    H: Source<K> + Sink<K>,
    T: TimeSource,
{
    fn run_tokio(&mut self, shutdown: impl Future<Output = ()>) -> impl Future<Output = RunOutcome> {
        <Self as SchedulerAsyncExt>::run::<TokioSleep>(self, shutdown)
    }
}

/// An implementation of [`SleepProvider`] using Tokio's timer.
///
/// This is the default provider for use in async applications built on Tokio.
pub struct TokioSleep;
impl SleepProvider for TokioSleep {
    type Sleep = tokio::time::Sleep;

    fn sleep_for(dur: core::time::Duration) -> Self::Sleep {
        tokio::time::sleep(dur)
    }
}
