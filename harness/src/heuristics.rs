//! Reference heuristic suppliers.
//!
//! | Supplier | Domain | Learns |
//! |---|---|---|
//! | [`ZeroHeuristic`] | any | no |
//! | [`ManhattanHeuristic`] | 4-connected [`GridWorld`] | no |
//! | [`OctileHeuristic`] | 8-connected [`GridWorld`] | no |
//! | [`LearnedHeuristic`] | any, wraps a base supplier | yes |
//! | [`SharedHeuristic`] | any, wraps a supplier | delegates |

use std::collections::HashMap;
use std::f64::consts::SQRT_2;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lrta_kernel::domain::SearchDomain;
use lrta_kernel::heuristic::DistanceHeuristic;

use crate::worlds::{Cell, GridWorld};

/// Always estimates zero. Discards learned values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<D: SearchDomain + ?Sized> DistanceHeuristic<D> for ZeroHeuristic {
    fn estimate(&self, _domain: &D, _state: &D::State, _goal: &D::State) -> f64 {
        0.0
    }

    fn record_learned_value(&mut self, _domain: &D, _state: &D::State, _goal: &D::State, _value: f64) {}
}

/// `|dx| + |dy|`. Admissible on 4-connected grids only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanHeuristic;

impl DistanceHeuristic<GridWorld> for ManhattanHeuristic {
    fn estimate(&self, _domain: &GridWorld, state: &Cell, goal: &Cell) -> f64 {
        f64::from((goal.x - state.x).abs() + (goal.y - state.y).abs())
    }

    fn record_learned_value(&mut self, _domain: &GridWorld, _state: &Cell, _goal: &Cell, _value: f64) {}
}

/// Octile distance `max + (√2 - 1) · min`. Exact on open 8-connected grids.
#[derive(Debug, Clone, Copy, Default)]
pub struct OctileHeuristic;

impl DistanceHeuristic<GridWorld> for OctileHeuristic {
    fn estimate(&self, _domain: &GridWorld, state: &Cell, goal: &Cell) -> f64 {
        let dx = f64::from((goal.x - state.x).abs());
        let dy = f64::from((goal.y - state.y).abs());
        dx.max(dy) + (SQRT_2 - 1.0) * dx.min(dy)
    }

    fn record_learned_value(&mut self, _domain: &GridWorld, _state: &Cell, _goal: &Cell, _value: f64) {}
}

/// Learning table over a base supplier.
///
/// Learned values are keyed by `(state, goal)` and take precedence over the
/// base estimate. This table is what carries learning from one planning call
/// to the next.
#[derive(Debug, Clone)]
pub struct LearnedHeuristic<S, B> {
    base: B,
    learned: HashMap<(S, S), f64>,
}

impl<S: Eq + Hash, B> LearnedHeuristic<S, B> {
    #[must_use]
    pub fn new(base: B) -> Self {
        Self {
            base,
            learned: HashMap::new(),
        }
    }

    /// The learned value for `state` toward `goal`, if any.
    #[must_use]
    pub fn learned(&self, state: &S, goal: &S) -> Option<f64>
    where
        S: Clone,
    {
        self.learned.get(&(state.clone(), goal.clone())).copied()
    }

    /// Every learned entry as `((state, goal), value)`, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&(S, S), f64)> {
        self.learned.iter().map(|(k, &v)| (k, v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.learned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.learned.is_empty()
    }

    /// Forget everything learned.
    pub fn clear(&mut self) {
        self.learned.clear();
    }

    #[must_use]
    pub fn base(&self) -> &B {
        &self.base
    }
}

impl<D, B> DistanceHeuristic<D> for LearnedHeuristic<D::State, B>
where
    D: SearchDomain + ?Sized,
    B: DistanceHeuristic<D>,
{
    fn estimate(&self, domain: &D, state: &D::State, goal: &D::State) -> f64 {
        match self.learned.get(&(state.clone(), goal.clone())) {
            Some(&value) => value,
            None => self.base.estimate(domain, state, goal),
        }
    }

    fn record_learned_value(&mut self, _domain: &D, state: &D::State, goal: &D::State, value: f64) {
        self.learned.insert((state.clone(), goal.clone()), value);
    }
}

/// Supplier shared by several planners, possibly on different threads.
///
/// Each planner holds a clone; learning recorded by one is visible to all.
#[derive(Debug, Default)]
pub struct SharedHeuristic<H> {
    inner: Arc<Mutex<H>>,
}

impl<H> Clone for SharedHeuristic<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H> SharedHeuristic<H> {
    #[must_use]
    pub fn new(heuristic: H) -> Self {
        Self {
            inner: Arc::new(Mutex::new(heuristic)),
        }
    }

    /// Run `f` with exclusive access to the wrapped supplier.
    pub fn with<R>(&self, f: impl FnOnce(&mut H) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, H> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<D, H> DistanceHeuristic<D> for SharedHeuristic<H>
where
    D: SearchDomain + ?Sized,
    H: DistanceHeuristic<D>,
{
    fn estimate(&self, domain: &D, state: &D::State, goal: &D::State) -> f64 {
        self.lock().estimate(domain, state, goal)
    }

    fn record_learned_value(&mut self, domain: &D, state: &D::State, goal: &D::State, value: f64) {
        self.lock().record_learned_value(domain, state, goal, value);
    }
}
