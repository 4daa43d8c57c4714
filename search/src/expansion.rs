//! Bounded expansion phase: A* that stops on budget, goal, or no improvement.

use log::trace;

use lrta_kernel::cost::Cost;
use lrta_kernel::domain::SearchDomain;
use lrta_kernel::heuristic::DistanceHeuristic;

use crate::error::{FrontierInvariantStageV1, PlannerError};
use crate::report::TerminationReasonV1;
use crate::session::Session;

/// Ask the supplier for an estimate and reject values outside the capability.
pub(crate) fn checked_estimate<D, H>(
    heuristic: &H,
    domain: &D,
    state: &D::State,
    goal: &D::State,
) -> Result<Cost, PlannerError>
where
    D: SearchDomain,
    H: DistanceHeuristic<D> + ?Sized,
{
    let value = heuristic.estimate(domain, state, goal);
    if !Cost::is_valid_estimate(value) {
        return Err(PlannerError::InvalidHeuristic {
            value,
            state: format!("{state:?}"),
        });
    }
    Ok(Cost::new(value))
}

/// Ask the domain for an edge cost and reject NaN or negative values.
pub(crate) fn checked_cost<D>(domain: &D, from: &D::State, to: &D::State) -> Result<Cost, PlannerError>
where
    D: SearchDomain,
{
    let value = domain.cost(from, to);
    if !Cost::is_valid_estimate(value) {
        return Err(PlannerError::InvalidEdgeCost {
            value,
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        });
    }
    Ok(Cost::new(value))
}

/// Give the start record `g = 0`, its estimate, and put it on the frontier.
///
/// # Errors
///
/// Propagates [`PlannerError::InvalidHeuristic`] and bookkeeping faults.
pub(crate) fn seed_start<D, H>(
    session: &mut Session<D::State>,
    domain: &D,
    heuristic: &H,
) -> Result<(), PlannerError>
where
    D: SearchDomain,
    H: DistanceHeuristic<D> + ?Sized,
{
    let start = session.start_id()?;
    let goal_state = session.record(session.goal_id()?)?.state.clone();
    let start_state = session.record(start)?.state.clone();
    let h = checked_estimate(heuristic, domain, &start_state, &goal_state)?;

    let Some(record) = session.registry.get_mut(start) else {
        return Err(PlannerError::FrontierInvariant {
            stage: FrontierInvariantStageV1::MissingRecord,
        });
    };
    record.set_g(Cost::ZERO);
    record.set_estimated_h(h);
    session.frontier.insert(start, record);
    Ok(())
}

/// Run the bounded expansion loop.
///
/// Keeps expanding while the goal's best known cost exceeds the smallest `f`
/// on the frontier and fewer than `lookahead` expansions were made. Each
/// iteration counts against the budget, including the one that peeks the
/// goal.
///
/// # Errors
///
/// Propagates collaborator capability violations and bookkeeping faults.
pub(crate) fn run_bounded_expansion<D, H>(
    session: &mut Session<D::State>,
    domain: &D,
    heuristic: &H,
    lookahead: u64,
) -> Result<TerminationReasonV1, PlannerError>
where
    D: SearchDomain,
    H: DistanceHeuristic<D> + ?Sized,
{
    let goal = session.goal_id()?;
    let goal_state = session.record(goal)?.state.clone();

    let termination = loop {
        let goal_g = session.record(goal)?.g();
        let min_f = session.frontier.min_f();
        if session.frontier.is_empty() {
            break TerminationReasonV1::FrontierExhausted;
        }
        if goal_g <= min_f {
            break TerminationReasonV1::NoImprovement;
        }
        if session.expansions >= lookahead {
            break TerminationReasonV1::BudgetExhausted;
        }

        session.expansions += 1;

        let Some(current_key) = session.frontier.peek_min() else {
            return Err(PlannerError::FrontierInvariant {
                stage: FrontierInvariantStageV1::PeekFromNonEmptyFrontier,
            });
        };
        let current = current_key.id;
        if current == goal {
            break TerminationReasonV1::GoalReached;
        }

        session.frontier.remove(current);
        session.expanded.insert(current);
        session.log_expanded(current);

        let (current_state, current_g) = {
            let record = session.record(current)?;
            (record.state.clone(), record.g())
        };
        trace!(
            "[LssLrta] expand #{}: {:?} g={} f={}",
            session.expansions,
            current_state,
            current_g,
            current_key.f
        );

        for successor in domain.successors(&current_state) {
            let edge = checked_cost(domain, &current_state, &successor)?;
            let candidate_g = current_g + edge;
            let succ_id = session.registry.get_or_create(&successor);

            let Some(record) = session.registry.get_mut(succ_id) else {
                return Err(PlannerError::FrontierInvariant {
                    stage: FrontierInvariantStageV1::MissingRecord,
                });
            };
            if candidate_g >= record.g() {
                continue;
            }
            record.set_g(candidate_g);
            record.set_parent(Some(current));
            if !record.is_h_computed() {
                let h = checked_estimate(heuristic, domain, &successor, &goal_state)?;
                record.set_estimated_h(h);
            }
            session.frontier.insert(succ_id, record);
            // Re-opened records leave the closed set.
            session.expanded.remove(succ_id);
        }
    };

    trace!(
        "[LssLrta] expansion stopped: {} after {} expansions",
        termination.as_str(),
        session.expansions
    );
    Ok(termination)
}
