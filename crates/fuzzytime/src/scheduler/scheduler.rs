use core::{ops::ControlFlow, time::Duration};
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    EntryId, Error, Registry, Result, Settings, Sink, Source, SystemClock, Task, TimeSource,
    TimerId, TimerQueue, compute_phrase, crossed_thresholds,
};

/// Keeps a set of display targets rendering their relative timestamps.
///
/// The scheduler owns a [`Registry`] of targets, a host (any
/// [`Source`] + [`Sink`]), a [`TimeSource`] and a cooperative timer queue.
/// Nothing runs in the background: every refresh happens synchronously
/// inside [`register`] or [`tick`], in registry order, and each entry
/// queues its next refresh only after the current one completes. Drive it
/// with [`run_blocking`], the async `run` (feature `futures`), or by calling
/// [`tick`] from your own event loop at [`next_deadline`].
///
/// An entry stops refreshing when its timestamp is unparseable or its
/// source can no longer resolve it. Both cases are skipped silently.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use fuzzytime::{ManualClock, MemoryHost, MemoryTarget, Scheduler, Settings};
///
/// // 2021-06-01T12:00:00Z
/// let clock = ManualClock::new(1_622_548_800_000);
/// let mut host = MemoryHost::new();
/// host.insert("post", MemoryTarget::new("2021-06-01T11:55:00Z"));
///
/// let mut scheduler = Scheduler::new(host, clock.clone());
/// scheduler.register(["post"], Settings::default());
/// assert_eq!(scheduler.host().text(&"post"), Some("5 minutes ago"));
///
/// clock.advance(Duration::from_secs(60));
/// scheduler.tick();
/// assert_eq!(scheduler.host().text(&"post"), Some("6 minutes ago"));
/// ```
///
/// [`register`]: Scheduler::register
/// [`tick`]: Scheduler::tick
/// [`run_blocking`]: Scheduler::run_blocking
/// [`next_deadline`]: Scheduler::next_deadline
#[derive(Debug)]
pub struct Scheduler<K, H, T = SystemClock> {
    registry: Registry<K>,
    host: H,
    clock: T,
    timers: TimerQueue,
    bulk: Option<TimerId>,
}

impl<K, H, T> Scheduler<K, H, T>
where
    K: PartialEq,
    H: Source<K> + Sink<K>,
    T: TimeSource,
{
    /// Creates a scheduler with an empty registry.
    pub fn new(host: H, clock: T) -> Self {
        Self::with_registry(Registry::new(), host, clock)
    }

    /// Creates a scheduler around an existing registry. Entries carried
    /// over have no queued ticks until the next registration or `tick`
    /// that refreshes them.
    pub fn with_registry(mut registry: Registry<K>, host: H, clock: T) -> Self {
        for id in registry.ids() {
            if let Some(entry) = registry.get_mut(id) {
                entry.pending = None;
            }
        }
        Self {
            registry,
            host,
            clock,
            timers: TimerQueue::default(),
            bulk: None,
        }
    }

    pub fn registry(&self) -> &Registry<K> {
        &self.registry
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn clock(&self) -> &T {
        &self.clock
    }

    /// Tears the scheduler down, dropping every queued tick.
    pub fn into_parts(self) -> (Registry<K>, H, T) {
        (self.registry, self.host, self.clock)
    }

    /// Registers `targets` with a snapshot of `settings`.
    ///
    /// Targets already in the registry keep their slot; their settings are
    /// replaced and their cached timestamp is resolved again. After
    /// inserting, every registered entry (not only the new ones) is
    /// refreshed immediately. If `settings.refresh_millis` is non-zero, a
    /// bulk refresh of all entries is queued after that interval, replacing
    /// any bulk refresh an earlier registration queued. From then on each
    /// entry reschedules itself on its own interval. An entry never has
    /// more than one pending tick: a refresh that reschedules an entry
    /// replaces whatever tick it had queued.
    ///
    /// Returns the IDs of the given targets, in order.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
    pub fn register<I>(&mut self, targets: I, settings: Settings) -> Vec<EntryId>
    where
        I: IntoIterator<Item = K>,
    {
        let settings = Arc::new(settings);
        let ids: Vec<EntryId> = targets
            .into_iter()
            .map(|target| self.registry.upsert(target, Arc::clone(&settings)))
            .collect();

        self.refresh_all(false);

        if let Some(interval) = settings.refresh_interval() {
            let due = self.due_after(interval);
            self.bulk = Some(self.timers.schedule(due, Task::RefreshAll));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            registered = ids.len(),
            total = self.registry.len(),
            "registered display targets"
        );
        ids
    }

    /// Removes an entry and invalidates its queued tick.
    pub fn cancel(&mut self, id: EntryId) -> bool {
        self.registry.remove(id).is_some()
    }

    /// Removes the entry for `target`, if registered.
    pub fn unregister(&mut self, target: &K) -> bool {
        match self.registry.get(target).map(|e| e.id()) {
            Some(id) => self.cancel(id),
            None => false,
        }
    }

    /// Runs every task that is due at the clock's current time.
    ///
    /// Returns the number of entries successfully refreshed.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
    pub fn tick(&mut self) -> usize {
        let now = self.clock.current_millis();
        let mut refreshed = 0;

        while let Some((timer, task)) = self.timers.pop_due(now) {
            if !self.is_live(timer, task) {
                #[cfg(feature = "tracing")]
                tracing::trace!(?timer, ?task, "dropping stale timer");
                continue;
            }

            match task {
                Task::RefreshAll => {
                    self.bulk = None;
                    refreshed += self.refresh_all(true);
                }
                Task::Refresh(id) => {
                    if let Some(entry) = self.registry.get_mut(id) {
                        entry.pending = None;
                    }
                    refreshed += usize::from(self.refresh_entry(id, true));
                }
            }
        }

        refreshed
    }

    /// The due time of the next live timer, in milliseconds since the UNIX
    /// epoch, or `None` when nothing is queued.
    pub fn next_deadline(&mut self) -> Option<i64> {
        while let Some((due, timer, task)) = self.timers.peek() {
            if self.is_live(timer, task) {
                return Some(due);
            }
            self.timers.pop();
        }
        None
    }

    /// How long until [`next_deadline`](Self::next_deadline), measured on
    /// the scheduler's clock. Overdue deadlines yield [`Duration::ZERO`].
    pub fn time_until_next(&mut self) -> Option<Duration> {
        let due = self.next_deadline()?;
        let wait = due.saturating_sub(self.clock.current_millis()).max(0);
        Some(Duration::from_millis(wait as u64))
    }

    /// Number of live queued timers: at most one per entry, plus the bulk
    /// refresh if it has not fired yet.
    pub fn pending_ticks(&self) -> usize {
        let entries = self.registry.iter().filter(|e| e.has_pending_tick()).count();
        entries + usize::from(self.bulk.is_some())
    }

    /// Drives the scheduler on the current thread.
    ///
    /// Between ticks, `wait` is called with the time until the next
    /// deadline and is responsible for letting that time pass, e.g. with
    /// `std::thread::sleep`. Returning [`ControlFlow::Break`] stops the loop.
    /// The loop also stops once no timers remain.
    ///
    /// ```
    /// use core::ops::ControlFlow;
    /// use fuzzytime::{ManualClock, MemoryHost, MemoryTarget, Scheduler, Settings};
    ///
    /// let clock = ManualClock::new(0);
    /// let mut host = MemoryHost::new();
    /// host.insert(1, MemoryTarget::new("1970-01-01T00:00:00Z"));
    ///
    /// let mut scheduler = Scheduler::new(host, clock.clone());
    /// scheduler.register([1], Settings::default());
    ///
    /// let mut waits = 0;
    /// scheduler.run_blocking(|dur| {
    ///     clock.advance(dur);
    ///     waits += 1;
    ///     if waits == 3 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    /// });
    /// assert_eq!(scheduler.host().text(&1), Some("2 minutes ago"));
    /// ```
    pub fn run_blocking(&mut self, mut wait: impl FnMut(Duration) -> ControlFlow<()>) {
        loop {
            self.tick();
            let Some(dur) = self.time_until_next() else {
                return;
            };
            if wait(dur).is_break() {
                return;
            }
        }
    }

    fn is_live(&self, timer: TimerId, task: Task) -> bool {
        match task {
            Task::RefreshAll => self.bulk == Some(timer),
            Task::Refresh(id) => self
                .registry
                .get_by_id(id)
                .is_some_and(|e| e.pending == Some(timer)),
        }
    }

    fn due_after(&self, interval: Duration) -> i64 {
        let millis = i64::try_from(interval.as_millis()).unwrap_or(i64::MAX);
        self.clock.current_millis().saturating_add(millis)
    }

    fn refresh_all(&mut self, reschedule: bool) -> usize {
        let mut refreshed = 0;
        for id in self.registry.ids() {
            refreshed += usize::from(self.refresh_entry(id, reschedule));
        }
        refreshed
    }

    /// Refreshes one entry, then queues its next tick if `reschedule` is
    /// set and the refresh succeeded. Errors end the entry's chain.
    fn refresh_entry(&mut self, id: EntryId, reschedule: bool) -> bool {
        match self.try_refresh(id) {
            Ok(()) => {
                if reschedule {
                    self.schedule_entry(id);
                }
                true
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?id, error = %_e, "skipping refresh");
                false
            }
        }
    }

    fn try_refresh(&mut self, id: EntryId) -> Result<()> {
        let Self {
            registry,
            host,
            clock,
            ..
        } = self;
        let entry = registry.get_mut(id).ok_or(Error::UnresolvableSource)?;
        let data = host.read(entry.target()).ok_or(Error::UnresolvableSource)?;
        let timestamp = entry.resolve_timestamp(data, host)?;
        let distance = timestamp.distance_from(&*clock);

        let previous = if entry.settings().fire_thresholds {
            entry.swap_last_distance(distance)
        } else {
            None
        };
        if let Some(last) = previous {
            for threshold in crossed_thresholds(last, distance, &entry.settings().thresholds) {
                #[cfg(feature = "tracing")]
                tracing::trace!(?id, threshold, "threshold crossed");
                host.threshold_crossed(entry.target(), threshold);
            }
        }

        host.set_text(entry.target(), &compute_phrase(distance, entry.settings()));
        Ok(())
    }

    fn schedule_entry(&mut self, id: EntryId) {
        let Some(interval) = self
            .registry
            .get_by_id(id)
            .and_then(|e| e.settings().refresh_interval())
        else {
            return;
        };

        let due = self.due_after(interval);
        let timer = self.timers.schedule(due, Task::Refresh(id));
        if let Some(entry) = self.registry.get_mut(id) {
            entry.pending = Some(timer);
        }
    }
}
