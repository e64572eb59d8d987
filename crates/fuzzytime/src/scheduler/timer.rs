use crate::EntryId;
use core::cmp::Reverse;
use std::collections::BinaryHeap;

/// Handle to one queued timer.
///
/// Timers are never removed from the queue eagerly. Whoever owns the
/// handle decides whether a popped timer is still live by comparing it to
/// the handle it last stored; anything else is stale and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Task {
    /// Refresh every registered entry, each of which then reschedules
    /// itself.
    RefreshAll,
    /// Refresh a single entry.
    Refresh(EntryId),
}

/// A min-heap of tasks keyed by due time (milliseconds since the UNIX
/// epoch). Ties run in scheduling order.
#[derive(Debug, Default)]
pub(crate) struct TimerQueue {
    heap: BinaryHeap<Reverse<(i64, TimerId, Task)>>,
    next_id: u64,
}

impl TimerQueue {
    pub(crate) fn schedule(&mut self, due: i64, task: Task) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.heap.push(Reverse((due, id, task)));
        id
    }

    pub(crate) fn peek(&self) -> Option<(i64, TimerId, Task)> {
        self.heap.peek().map(|Reverse(timer)| *timer)
    }

    pub(crate) fn pop(&mut self) -> Option<(i64, TimerId, Task)> {
        self.heap.pop().map(|Reverse(timer)| timer)
    }

    /// Pops the earliest timer if it is due at `now`.
    pub(crate) fn pop_due(&mut self, now: i64) -> Option<(TimerId, Task)> {
        match self.peek() {
            Some((due, ..)) if due <= now => self.pop().map(|(_, id, task)| (id, task)),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
