//! Row expansion state.
//!
//! Expansion is tracked by [`RowKey`] rather than by position, so an
//! expanded row stays expanded when sorting or pagination moves it.

use std::collections::HashSet;

use crate::value::RowKey;

/// Set of expanded rows.
///
/// Any number of rows may be expanded at once.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    expanded: HashSet<RowKey>,
}

impl Expansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the expansion of `key`. Returns the new state.
    pub fn toggle(&mut self, key: &RowKey) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.clone());
            true
        }
    }

    /// Expand `key`. Returns `false` if it already was.
    pub fn expand(&mut self, key: RowKey) -> bool {
        self.expanded.insert(key)
    }

    pub fn is_expanded(&self, key: &RowKey) -> bool {
        self.expanded.contains(key)
    }

    /// All expanded keys (sorted for deterministic ordering).
    pub fn expanded(&self) -> Vec<RowKey> {
        let mut keys: Vec<_> = self.expanded.iter().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Collapse every row. Returns the keys that were expanded.
    pub fn collapse_all(&mut self) -> Vec<RowKey> {
        self.expanded.drain().collect()
    }

    /// Drop keys for which `keep` returns `false`. Returns the removed keys.
    ///
    /// Called after the dataset changes so that only rows still present
    /// remain expanded.
    pub fn retain(&mut self, mut keep: impl FnMut(&RowKey) -> bool) -> Vec<RowKey> {
        let removed: Vec<_> = self.expanded.iter().filter(|k| !keep(k)).cloned().collect();
        for key in &removed {
            self.expanded.remove(key);
        }
        removed
    }
}
