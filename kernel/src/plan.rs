//! Plan container: the product of a successful planning call.

use crate::domain::SearchDomain;

/// An ordered state sequence from the call's start to its (interim) goal,
/// with the total path cost.
///
/// Plans are produced by the planner and owned by the caller; the planner
/// never reads one back.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan<S> {
    steps: Vec<S>,
    cost: f64,
}

impl<S> Plan<S> {
    /// An empty plan with zero cost.
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            cost: 0.0,
        }
    }

    /// Insert a step before all others.
    pub fn prepend_step(&mut self, state: S) {
        self.steps.insert(0, state);
    }

    /// Overwrite the recorded cost.
    pub fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    /// Steps in start-to-end order.
    #[must_use]
    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    /// Recorded total cost.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of states (edges + 1 for a non-empty plan).
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// First state.
    #[must_use]
    pub fn start(&self) -> Option<&S> {
        self.steps.first()
    }

    /// Last state (the interim goal).
    #[must_use]
    pub fn end(&self) -> Option<&S> {
        self.steps.last()
    }

    /// Sum of edge costs along the steps, re-read from `domain`.
    ///
    /// Differs from [`Plan::cost`] only if the domain changed after planning.
    #[must_use]
    pub fn recomputed_cost<D>(&self, domain: &D) -> f64
    where
        D: SearchDomain<State = S> + ?Sized,
    {
        self.steps
            .windows(2)
            .map(|pair| domain.cost(&pair[0], &pair[1]))
            .sum()
    }
}

impl<S> Default for Plan<S> {
    fn default() -> Self {
        Self::new()
    }
}
