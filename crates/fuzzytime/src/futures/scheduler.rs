use crate::{Scheduler, Sink, SleepProvider, Source, TimeSource};
use core::pin::pin;
use futures::future::{Either, select};

/// Why an async scheduler run returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunOutcome {
    /// The shutdown future completed.
    Shutdown,
    /// No timers remain: every chain has ended or automatic refresh is
    /// disabled.
    Idle,
}

/// Extension trait for driving a [`Scheduler`] from an async task.
///
/// The driver ticks the scheduler, sleeps with the given [`SleepProvider`]
/// until the next deadline, and repeats. It holds `&mut Scheduler` for the
/// whole run, so registration and refresh never race; register targets
/// before calling `run`, or between runs.
pub trait SchedulerAsyncExt {
    /// Returns a future that keeps the scheduler's targets fresh until
    /// `shutdown` completes or no timers remain.
    ///
    /// `shutdown` is checked before every sleep, so a shutdown that is
    /// already complete stops the run after at most one tick.
    fn run<S>(&mut self, shutdown: impl Future<Output = ()>) -> impl Future<Output = RunOutcome>
    where
        S: SleepProvider;
}

impl<K, H, T> SchedulerAsyncExt for Scheduler<K, H, T>
where
    K: PartialEq,
    H: Source<K> + Sink<K>,
    T: TimeSource,
{
    fn run<S>(&mut self, shutdown: impl Future<Output = ()>) -> impl Future<Output = RunOutcome>
    where
        S: SleepProvider,
    {
        async move {
            let mut shutdown = pin!(shutdown);
            loop {
                self.tick();
                let Some(wait) = self.time_until_next() else {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("no timers left, stopping");
                    return RunOutcome::Idle;
                };
                if let Either::Left(_) = select(shutdown.as_mut(), pin!(S::sleep_for(wait))).await {
                    return RunOutcome::Shutdown;
                }
            }
        }
    }
}
