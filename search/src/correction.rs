//! Heuristic correction phase: Dijkstra-style backward relaxation.
//!
//! After a bounded expansion, every expanded state's `h` is recomputed from
//! the frontier boundary inward: `h(s') = min over successors s of
//! (cost(s', s) + h(s))`. Each improved value is pushed to the heuristic
//! supplier, which is how learning outlives the session.

use log::trace;

use lrta_kernel::cost::Cost;
use lrta_kernel::domain::SearchDomain;
use lrta_kernel::heuristic::DistanceHeuristic;

use crate::error::{FrontierInvariantStageV1, PlannerError};
use crate::expansion::checked_cost;
use crate::frontier::HeuristicView;
use crate::session::Session;

/// Counters produced by one correction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorrectionOutcome {
    /// Records popped from the heuristic view.
    pub popped: usize,
    /// Calls made to `record_learned_value`.
    pub learned_updates: u64,
    /// Expanded records the relaxation never reached (their `h` stays `+∞`).
    pub unsettled: usize,
}

fn missing_record() -> PlannerError {
    PlannerError::FrontierInvariant {
        stage: FrontierInvariantStageV1::MissingRecord,
    }
}

/// Run the relaxation and rebuild the frontier from what remains of the view.
///
/// # Errors
///
/// Propagates invalid edge costs and bookkeeping faults.
pub(crate) fn run_heuristic_correction<D, H>(
    session: &mut Session<D::State>,
    domain: &D,
    heuristic: &mut H,
) -> Result<CorrectionOutcome, PlannerError>
where
    D: SearchDomain,
    H: DistanceHeuristic<D> + ?Sized,
{
    let goal_state = session.record(session.goal_id()?)?.state.clone();
    let mut outcome = CorrectionOutcome::default();

    let mut view = HeuristicView::new();
    for key_id in session.frontier.snapshot() {
        let record = session.registry.get(key_id).ok_or_else(missing_record)?;
        view.insert(key_id, record);
    }

    for id in session.expanded.iter() {
        let record = session.registry.get_mut(id).ok_or_else(missing_record)?;
        record.set_h(Cost::INFINITY);
    }

    while !session.expanded.is_empty() {
        let Some(settled) = view.pop_min() else {
            break;
        };
        outcome.popped += 1;
        session.expanded.remove(settled);

        let (settled_state, settled_h) = {
            let record = session.registry.get(settled).ok_or_else(missing_record)?;
            (record.state.clone(), record.h())
        };

        for pred in domain.predecessors(&settled_state) {
            let edge = checked_cost(domain, &pred, &settled_state)?;
            let candidate_h = settled_h + edge;
            let pred_id = session.registry.get_or_create(&pred);
            if !session.expanded.contains(pred_id) {
                continue;
            }
            let record = session.registry.get_mut(pred_id).ok_or_else(missing_record)?;
            if candidate_h >= record.h() {
                continue;
            }
            record.set_h(candidate_h);
            heuristic.record_learned_value(domain, &pred, &goal_state, candidate_h.value());
            outcome.learned_updates += 1;
            view.insert(pred_id, record);
            trace!("[LssLrta] learned h({pred:?}) = {candidate_h}");
        }
    }

    outcome.unsettled = session.expanded.len();

    session.frontier.clear();
    for id in view.into_ids() {
        let record = session.registry.get(id).ok_or_else(missing_record)?;
        session.frontier.insert(id, record);
    }

    Ok(outcome)
}
