//! Heuristic supplier contract.

use crate::domain::SearchDomain;

/// Distance-heuristic capability: an estimate plus a learning callback.
///
/// The planner reads estimates while expanding and writes corrected values
/// back through [`DistanceHeuristic::record_learned_value`] after each call.
/// That callback is the only persistence of learning across calls; the
/// planner's own per-state records are discarded at the start of every call.
///
/// # Contract
///
/// - `estimate` returns a non-negative value (`f64::INFINITY` allowed). NaN or
///   negative values are rejected by the planner as an invalid heuristic.
/// - Admissibility is assumed, not verified.
pub trait DistanceHeuristic<D: SearchDomain + ?Sized> {
    /// Estimated remaining cost from `state` to `goal`.
    fn estimate(&self, domain: &D, state: &D::State, goal: &D::State) -> f64;

    /// Persist a corrected estimate for `state` toward `goal`.
    fn record_learned_value(&mut self, domain: &D, state: &D::State, goal: &D::State, value: f64);
}

impl<D, H> DistanceHeuristic<D> for Box<H>
where
    D: SearchDomain + ?Sized,
    H: DistanceHeuristic<D> + ?Sized,
{
    fn estimate(&self, domain: &D, state: &D::State, goal: &D::State) -> f64 {
        (**self).estimate(domain, state, goal)
    }

    fn record_learned_value(&mut self, domain: &D, state: &D::State, goal: &D::State, value: f64) {
        (**self).record_learned_value(domain, state, goal, value);
    }
}
