//! Annotated-state registry: one record per distinct state per session.
//!
//! Records live in an arena; the frontier, the heuristic view and the expanded
//! set refer to them by [`RecordId`] and never copy record data.

use std::collections::HashMap;
use std::hash::Hash;

use crate::node::{AnnotatedRecord, RecordId};

/// Arena of [`AnnotatedRecord`]s keyed by state identity.
#[derive(Debug, Clone)]
pub struct Registry<S> {
    records: Vec<AnnotatedRecord<S>>,
    index: HashMap<S, RecordId>,
}

impl<S: Clone + Eq + Hash> Registry<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Return the record for `state`, creating a default one on first sight.
    ///
    /// Lookups of equal states always return the same id, so mutations made
    /// through one holder are visible to all.
    pub fn get_or_create(&mut self, state: &S) -> RecordId {
        if let Some(&id) = self.index.get(state) {
            return id;
        }
        let id = RecordId::new(self.records.len());
        self.records.push(AnnotatedRecord::new(state.clone()));
        self.index.insert(state.clone(), id);
        id
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&AnnotatedRecord<S>> {
        self.records.get(id.index())
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut AnnotatedRecord<S>> {
        self.records.get_mut(id.index())
    }

    /// Records in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &AnnotatedRecord<S>)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (RecordId::new(i), r))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.index.clear();
    }
}

impl<S: Clone + Eq + Hash> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}
