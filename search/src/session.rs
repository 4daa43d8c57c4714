//! Per-call planning session: registry, frontier, expanded set and counters.
//!
//! Everything here is reset at the start of every planning call. Learned
//! heuristic values survive only through the heuristic supplier.

use std::collections::HashSet;
use std::hash::Hash;

use crate::closed::ExpandedSet;
use crate::error::{FrontierInvariantStageV1, PlannerError};
use crate::frontier::OpenFrontier;
use crate::node::{AnnotatedRecord, RecordId};
use crate::registry::Registry;

/// Mutable state of one planning call.
#[derive(Debug, Clone)]
pub struct Session<S> {
    pub(crate) registry: Registry<S>,
    pub(crate) frontier: OpenFrontier,
    pub(crate) expanded: ExpandedSet,
    /// Every record expanded this call, in expansion order. Unlike
    /// `expanded`, the correction phase does not drain it.
    pub(crate) expanded_log: Vec<RecordId>,
    expanded_seen: HashSet<RecordId>,
    /// Frontier copy taken between expansion and correction.
    pub(crate) unexpanded_snapshot: Vec<RecordId>,
    pub(crate) start: Option<RecordId>,
    pub(crate) goal: Option<RecordId>,
    pub(crate) expansions: u64,
}

impl<S: Clone + Eq + Hash> Session<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            frontier: OpenFrontier::new(),
            expanded: ExpandedSet::new(),
            expanded_log: Vec::new(),
            expanded_seen: HashSet::new(),
            unexpanded_snapshot: Vec::new(),
            start: None,
            goal: None,
            expansions: 0,
        }
    }

    /// Clear every structure and counter.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.frontier.reset();
        self.expanded.clear();
        self.expanded_log.clear();
        self.expanded_seen.clear();
        self.unexpanded_snapshot.clear();
        self.start = None;
        self.goal = None;
        self.expansions = 0;
    }

    /// Reset, then register the endpoints.
    pub fn begin(&mut self, start: &S, goal: &S) -> (RecordId, RecordId) {
        self.reset();
        let start_id = self.registry.get_or_create(start);
        let goal_id = self.registry.get_or_create(goal);
        self.start = Some(start_id);
        self.goal = Some(goal_id);
        (start_id, goal_id)
    }

    pub(crate) fn log_expanded(&mut self, id: RecordId) {
        if self.expanded_seen.insert(id) {
            self.expanded_log.push(id);
        }
    }

    /// Resolve an id that bookkeeping claims is registered.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::FrontierInvariant`] if the id is unknown.
    pub fn record(&self, id: RecordId) -> Result<&AnnotatedRecord<S>, PlannerError> {
        self.registry.get(id).ok_or(PlannerError::FrontierInvariant {
            stage: FrontierInvariantStageV1::MissingRecord,
        })
    }

    /// The goal record id.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::FrontierInvariant`] before [`Session::begin`].
    pub fn goal_id(&self) -> Result<RecordId, PlannerError> {
        self.goal.ok_or(PlannerError::FrontierInvariant {
            stage: FrontierInvariantStageV1::MissingEndpoint,
        })
    }

    /// The start record id.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::FrontierInvariant`] before [`Session::begin`].
    pub fn start_id(&self) -> Result<RecordId, PlannerError> {
        self.start.ok_or(PlannerError::FrontierInvariant {
            stage: FrontierInvariantStageV1::MissingEndpoint,
        })
    }

    #[must_use]
    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    #[must_use]
    pub fn frontier(&self) -> &OpenFrontier {
        &self.frontier
    }

    #[must_use]
    pub fn expanded(&self) -> &ExpandedSet {
        &self.expanded
    }

    /// Expansion counter of the current call.
    #[must_use]
    pub fn expansions(&self) -> u64 {
        self.expansions
    }

    /// Every registered record satisfies `f == g + h`.
    #[must_use]
    pub fn check_f_invariant(&self) -> bool {
        self.registry.iter().all(|(_, r)| r.is_f_consistent())
    }

    pub(crate) fn states_of(&self, ids: &[RecordId]) -> Vec<S> {
        ids.iter()
            .filter_map(|&id| self.registry.get(id))
            .map(|r| r.state.clone())
            .collect()
    }
}

impl<S: Clone + Eq + Hash> Default for Session<S> {
    fn default() -> Self {
        Self::new()
    }
}
