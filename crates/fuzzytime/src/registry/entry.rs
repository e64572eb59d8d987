use crate::{Error, Result, Settings, Sink, SourceData, TimerId, Timestamp, parse_timestamp};
use std::sync::Arc;

/// Identifies a [`DisplayEntry`] for the lifetime of its registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub(crate) u64);

#[derive(Clone, Debug, PartialEq, Eq)]
enum CachedTimestamp {
    Unresolved,
    Resolved(Result<Timestamp>),
}

/// One tracked display target and its refresh state.
#[derive(Debug)]
pub struct DisplayEntry<K> {
    id: EntryId,
    target: K,
    settings: Arc<Settings>,
    timestamp: CachedTimestamp,
    last_distance: Option<i64>,
    pub(crate) pending: Option<TimerId>,
}

impl<K> DisplayEntry<K> {
    pub(crate) fn new(id: EntryId, target: K, settings: Arc<Settings>) -> Self {
        Self {
            id,
            target,
            settings,
            timestamp: CachedTimestamp::Unresolved,
            last_distance: None,
            pending: None,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn target(&self) -> &K {
        &self.target
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The cached timestamp, once it has been resolved successfully.
    pub fn timestamp(&self) -> Option<Timestamp> {
        match self.timestamp {
            CachedTimestamp::Resolved(Ok(ts)) => Some(ts),
            _ => None,
        }
    }

    /// Whether the source's timestamp was resolved and found unparseable.
    pub fn is_invalid(&self) -> bool {
        matches!(self.timestamp, CachedTimestamp::Resolved(Err(_)))
    }

    /// The distance computed by the previous refresh. Only tracked when
    /// threshold notifications are enabled.
    pub fn last_distance(&self) -> Option<i64> {
        self.last_distance
    }

    /// Whether a refresh tick is currently queued for this entry.
    pub fn has_pending_tick(&self) -> bool {
        self.pending.is_some()
    }

    /// Replaces the settings snapshot and forgets everything derived from
    /// the previous registration.
    pub(crate) fn reset(&mut self, settings: Arc<Settings>) {
        self.settings = settings;
        self.timestamp = CachedTimestamp::Unresolved;
        self.last_distance = None;
    }

    /// Returns the cached timestamp, parsing it from `data` on first access.
    ///
    /// The first resolution also hands any text the target already shows to
    /// the sink as its fallback label.
    pub(crate) fn resolve_timestamp<S: Sink<K>>(
        &mut self,
        data: SourceData,
        sink: &mut S,
    ) -> Result<Timestamp> {
        if let CachedTimestamp::Resolved(resolved) = &self.timestamp {
            return resolved.clone();
        }

        let resolved = match data.timestamp.as_deref() {
            Some(raw) => parse_timestamp(raw),
            None => Err(Error::parse_failure("")),
        };
        if let Some(label) = data.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            sink.seed_label(&self.target, label);
        }

        self.timestamp = CachedTimestamp::Resolved(resolved.clone());
        resolved
    }

    /// Records `distance` and returns the previous one.
    pub(crate) fn swap_last_distance(&mut self, distance: i64) -> Option<i64> {
        self.last_distance.replace(distance)
    }
}
