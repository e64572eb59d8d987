use crate::{Sink, Source, SourceData};
use std::{collections::HashMap, hash::Hash};

/// The state of one target inside a [`MemoryHost`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryTarget {
    pub timestamp: Option<String>,
    pub text: String,
    pub label: Option<String>,
    pub thresholds: Vec<f64>,
    /// Number of `set_text` calls received.
    pub writes: usize,
}

impl MemoryTarget {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: Some(timestamp.into()),
            ..Self::default()
        }
    }

    /// Sets the text shown before the first render.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// An in-memory [`Source`] and [`Sink`].
///
/// Useful for tests and for hosts that render from a model rather than
/// into live UI elements. Removing a target simulates it being detached by
/// the host.
#[derive(Clone, Debug)]
pub struct MemoryHost<K> {
    targets: HashMap<K, MemoryTarget>,
}

impl<K> Default for MemoryHost<K> {
    fn default() -> Self {
        Self {
            targets: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> MemoryHost<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: K, target: MemoryTarget) -> Option<MemoryTarget> {
        self.targets.insert(key, target)
    }

    pub fn remove(&mut self, key: &K) -> Option<MemoryTarget> {
        self.targets.remove(key)
    }

    pub fn get(&self, key: &K) -> Option<&MemoryTarget> {
        self.targets.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut MemoryTarget> {
        self.targets.get_mut(key)
    }

    /// The text currently shown by `key`.
    pub fn text(&self, key: &K) -> Option<&str> {
        self.get(key).map(|t| t.text.as_str())
    }
}

impl<K: Eq + Hash> Source<K> for MemoryHost<K> {
    fn read(&self, target: &K) -> Option<SourceData> {
        self.get(target).map(|t| SourceData {
            timestamp: t.timestamp.clone(),
            text: Some(t.text.clone()),
        })
    }
}

impl<K: Eq + Hash> Sink<K> for MemoryHost<K> {
    fn set_text(&mut self, target: &K, text: &str) {
        if let Some(t) = self.get_mut(target) {
            t.text.clear();
            t.text.push_str(text);
            t.writes += 1;
        }
    }

    fn threshold_crossed(&mut self, target: &K, threshold: f64) {
        if let Some(t) = self.get_mut(target) {
            t.thresholds.push(threshold);
        }
    }

    fn seed_label(&mut self, target: &K, label: &str) {
        if let Some(t) = self.get_mut(target) {
            t.label = Some(label.to_owned());
        }
    }
}
