//! Search domain contract.

use std::fmt::Debug;
use std::hash::Hash;

/// A weighted, possibly dynamic graph the planner searches.
///
/// # Contract
///
/// - Answers must be deterministic for the duration of one planning call.
///   They may change between calls (that is what re-planning is for).
/// - `cost` returns a non-negative value; `f64::INFINITY` marks an edge that
///   cannot be traversed.
/// - `predecessors(s)` must contain every state whose `successors` contain `s`,
///   otherwise the learning phase cannot propagate corrections backwards.
pub trait SearchDomain {
    /// Opaque state identity. The planner clones and hashes it but never
    /// mutates it.
    type State: Clone + Eq + Hash + Debug;

    /// Whether the state is currently untraversable.
    fn is_blocked(&self, state: &Self::State) -> bool;

    /// States reachable from `state` in one step.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;

    /// States that reach `state` in one step.
    fn predecessors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Cost of the edge `from -> to`.
    fn cost(&self, from: &Self::State, to: &Self::State) -> f64;
}
