/// What a [`Source`] knows about a target at the time it is read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceData {
    /// The raw ISO-8601-like timestamp, usually taken from an attribute.
    pub timestamp: Option<String>,
    /// The text the target currently shows. Read once, when the timestamp
    /// is first resolved, to seed a fallback label.
    pub text: Option<String>,
}

/// Read access to the host's display targets.
///
/// `K` identifies a target. The [`Scheduler`] compares keys with
/// `PartialEq` to keep registration idempotent, so hosts whose targets are
/// shared handles should use a key with identity semantics (an element ID,
/// or a pointer-comparing wrapper).
///
/// [`Scheduler`]: crate::Scheduler
pub trait Source<K> {
    /// Reads the current data for `target`, or `None` if the target no
    /// longer exists. Returning `None` ends the target's refresh chain.
    fn read(&self, target: &K) -> Option<SourceData>;
}

/// Write access to the host's display targets.
pub trait Sink<K> {
    /// Replaces the text shown by `target`.
    fn set_text(&mut self, target: &K, text: &str);

    /// Notifies observers of `target` that a refresh crossed `threshold`
    /// seconds.
    fn threshold_crossed(&mut self, target: &K, threshold: f64);

    /// Stores the text a target showed before it was first rendered, e.g.
    /// as a tooltip. Called at most once per registration.
    fn seed_label(&mut self, _target: &K, _label: &str) {}
}

/// A separate source and sink, paired for a [`Scheduler`].
///
/// [`Scheduler`]: crate::Scheduler
impl<K, S: Source<K>, W> Source<K> for (S, W) {
    fn read(&self, target: &K) -> Option<SourceData> {
        self.0.read(target)
    }
}

impl<K, S, W: Sink<K>> Sink<K> for (S, W) {
    fn set_text(&mut self, target: &K, text: &str) {
        self.1.set_text(target, text);
    }

    fn threshold_crossed(&mut self, target: &K, threshold: f64) {
        self.1.threshold_crossed(target, threshold);
    }

    fn seed_label(&mut self, target: &K, label: &str) {
        self.1.seed_label(target, label);
    }
}
