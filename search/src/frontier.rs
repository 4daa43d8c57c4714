//! Open-set index structures over registry records.
//!
//! Two independent orderings over the same arena:
//!
//! - [`OpenFrontier`] orders by `(f, g, id)` and drives the expansion phase.
//! - [`HeuristicView`] orders by `(h, id)` and drives the correction phase.
//!
//! Both store only keys and ids. Each keeps an id → key map next to a
//! `BTreeSet` of keys, so re-inserting a record replaces its old key instead of
//! leaving a stale duplicate behind.

use std::collections::{BTreeSet, HashMap};

use lrta_kernel::cost::Cost;

use crate::node::{AnnotatedRecord, FrontierKey, HeuristicKey, RecordId};

/// Min-priority open set ordered by [`FrontierKey`].
#[derive(Debug, Clone, Default)]
pub struct OpenFrontier {
    ordered: BTreeSet<FrontierKey>,
    keys: HashMap<RecordId, FrontierKey>,
    high_water: usize,
}

impl OpenFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id`, or re-key it if already present.
    ///
    /// The key is read from `record` at call time, so callers update `g`/`h`
    /// first. Returns `true` if the record was not in the frontier before.
    pub fn insert<S>(&mut self, id: RecordId, record: &AnnotatedRecord<S>) -> bool {
        debug_assert!(record.is_f_consistent(), "stale f on frontier insert");
        let key = FrontierKey::of(id, record);
        let previous = self.keys.insert(id, key);
        if let Some(old) = previous {
            self.ordered.remove(&old);
        }
        self.ordered.insert(key);
        self.high_water = self.high_water.max(self.ordered.len());
        previous.is_none()
    }

    /// The minimum key without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<FrontierKey> {
        self.ordered.first().copied()
    }

    /// Remove and return the minimum record.
    pub fn remove_min(&mut self) -> Option<RecordId> {
        let key = self.ordered.pop_first()?;
        self.keys.remove(&key.id);
        Some(key.id)
    }

    /// Remove a specific record. Returns `false` if it was absent.
    pub fn remove(&mut self, id: RecordId) -> bool {
        match self.keys.remove(&id) {
            Some(key) => self.ordered.remove(&key),
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.keys.contains_key(&id)
    }

    /// Smallest `f` in the frontier; `+∞` when empty.
    #[must_use]
    pub fn min_f(&self) -> Cost {
        self.peek_min().map_or(Cost::INFINITY, |k| k.f)
    }

    /// Non-destructive copy of the members in priority order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<RecordId> {
        self.ordered.iter().map(|k| k.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// High-water mark of frontier size since the last [`OpenFrontier::reset`].
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Drop all members but keep the high-water mark.
    pub fn clear(&mut self) {
        self.ordered.clear();
        self.keys.clear();
    }

    /// Drop all members and the high-water mark.
    pub fn reset(&mut self) {
        self.clear();
        self.high_water = 0;
    }
}

/// Min-priority view ordered by [`HeuristicKey`], used by the correction
/// phase.
#[derive(Debug, Clone, Default)]
pub struct HeuristicView {
    ordered: BTreeSet<HeuristicKey>,
    keys: HashMap<RecordId, HeuristicKey>,
}

impl HeuristicView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id`, or re-key it if already present (decrease-key).
    pub fn insert<S>(&mut self, id: RecordId, record: &AnnotatedRecord<S>) -> bool {
        let key = HeuristicKey::of(id, record);
        let previous = self.keys.insert(id, key);
        if let Some(old) = previous {
            self.ordered.remove(&old);
        }
        self.ordered.insert(key);
        previous.is_none()
    }

    /// Remove and return the record with minimum `h`.
    pub fn pop_min(&mut self) -> Option<RecordId> {
        let key = self.ordered.pop_first()?;
        self.keys.remove(&key.id);
        Some(key.id)
    }

    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.keys.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Consume the view, yielding the remaining ids in `h` order.
    #[must_use]
    pub fn into_ids(self) -> Vec<RecordId> {
        self.ordered.into_iter().map(|k| k.id).collect()
    }
}
