//! Expanded (closed) set for the current bounded expansion.
//!
//! `BTreeSet`-based so iteration follows creation order deterministically.

use std::collections::BTreeSet;

use crate::node::RecordId;

/// Records finalized during the current expansion phase.
///
/// The correction phase drains it: each record leaves the set when its
/// heuristic is settled.
#[derive(Debug, Clone, Default)]
pub struct ExpandedSet {
    members: BTreeSet<RecordId>,
}

impl ExpandedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if already present.
    pub fn insert(&mut self, id: RecordId) -> bool {
        self.members.insert(id)
    }

    /// Returns `false` if absent.
    pub fn remove(&mut self, id: RecordId) -> bool {
        self.members.remove(&id)
    }

    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.members.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.members.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}
