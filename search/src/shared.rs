//! Thread-shareable planner handle.
//!
//! Calls on one planner are serialized by a mutex; a second caller waits for
//! the first call to finish.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lrta_kernel::domain::SearchDomain;
use lrta_kernel::heuristic::DistanceHeuristic;

use crate::error::PlannerError;
use crate::planner::{LssLrtaPlanner, PlanOutcome};

/// Cloneable handle to one [`LssLrtaPlanner`] guarded by a mutex.
pub struct SharedPlanner<D: SearchDomain, H> {
    inner: Arc<Mutex<LssLrtaPlanner<D, H>>>,
}

impl<D: SearchDomain, H> Clone for SharedPlanner<D, H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D, H> SharedPlanner<D, H>
where
    D: SearchDomain,
    H: DistanceHeuristic<D>,
{
    #[must_use]
    pub fn new(planner: LssLrtaPlanner<D, H>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(planner)),
        }
    }

    /// Lock the planner and run one call.
    ///
    /// A panic in an earlier caller does not poison later calls: each call
    /// resets the session before use.
    ///
    /// # Errors
    ///
    /// Same as [`LssLrtaPlanner::find_path`].
    pub fn find_path(
        &self,
        domain: &D,
        start: &D::State,
        goal: &D::State,
    ) -> Result<PlanOutcome<D::State>, PlannerError> {
        self.lock().find_path(domain, start, goal)
    }

    /// Run `f` with exclusive access to the planner.
    pub fn with_planner<R>(&self, f: impl FnOnce(&mut LssLrtaPlanner<D, H>) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, LssLrtaPlanner<D, H>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
