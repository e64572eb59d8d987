use crate::{RunOutcome, Scheduler, SchedulerAsyncExt, Sink, SleepProvider, Source, TimeSource};
use pin_project_lite::pin_project;
use smol::Timer;
use std::{
    pin::Pin,
    task::{Context, Poll},
};

/// Extension trait for driving a [`Scheduler`] on the
/// [`smol`](https://docs.rs/smol) async runtime.
///
/// This trait provides a convenience method for using a [`SleepProvider`]
/// backed by the `smol` runtime, allowing you to call `.run_smol()` without
/// needing to specify the sleep strategy manually.
pub trait SchedulerSmolExt {
    /// Returns a future that keeps the scheduler's targets fresh until
    /// `shutdown` completes or no timers remain.
    ///
    /// Internally delegates to [`SchedulerAsyncExt::run`] with [`SmolSleep`]
    /// as the sleep strategy.
    fn run_smol(&mut self, shutdown: impl Future<Output = ()>) -> impl Future<Output = RunOutcome>;
}

impl<K, H, T> SchedulerSmolExt for Scheduler<K, H, T>
where
    K: PartialEq,
    H: Source<K> + Sink<K>,
    T: TimeSource,
{
    fn run_smol(&mut self, shutdown: impl Future<Output = ()>) -> impl Future<Output = RunOutcome> {
        <Self as SchedulerAsyncExt>::run::<SmolSleep>(self, shutdown)
    }
}

/// An implementation of [`SleepProvider`] using Smol's timer.
///
/// This is the default provider for use in async applications built on Smol.
pub struct SmolSleep;
impl SleepProvider for SmolSleep {
    type Sleep = SmolSleepFuture;

    fn sleep_for(dur: std::time::Duration) -> Self::Sleep {
        SmolSleepFuture {
            timer: Timer::after(dur),
        }
    }
}

pin_project! {
    /// Internal future returned by [`SmolSleep::sleep_for`].
    ///
    /// This type wraps a [`smol::Timer`] and implements [`Future`] with `Output
    /// = ()`, discarding the timer's `Instant` result.
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct SmolSleepFuture {
        #[pin]
        timer: Timer,
    }
}

impl Future for SmolSleepFuture {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        self.project().timer.poll(cx).map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryHost, MemoryTarget, Settings, SystemClock, Timestamp};
    use core::time::Duration;

    #[test]
    fn refreshes_until_shutdown_smol() {
        let now = Timestamp::from_millis(SystemClock.current_millis());
        let mut host = MemoryHost::new();
        host.insert("t", MemoryTarget::new(now.to_string()));
        let mut scheduler = Scheduler::new(host, SystemClock);
        scheduler.register(
            ["t"],
            Settings {
                refresh_millis: 10,
                ..Settings::default()
            },
        );

        let outcome = smol::block_on(scheduler.run_smol(async {
            Timer::after(Duration::from_millis(60)).await;
        }));

        assert_eq!(outcome, RunOutcome::Shutdown);
        let target = scheduler.host().get(&"t").unwrap();
        assert!(target.writes >= 2, "only {} writes", target.writes);
        assert_eq!(target.text, "less than a minute ago");
    }
}
