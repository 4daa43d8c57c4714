//! Agent runner: repeated planning and movement until the goal is reached.
//!
//! # Loop
//!
//! ```text
//! at goal? → done
//!   → perturb(world)            (dynamic worlds only)
//!   → planner.find_path(position → goal)
//!   → walk plan steps until the plan ends, a step is blocked, or the move cap
//!   → repeat
//! ```
//!
//! The runner owns no learning state. Everything the agent learns lives in the
//! planner's heuristic supplier, which the caller keeps after the run.

use log::debug;
use serde::{Deserialize, Serialize};

use lrta_kernel::digest::{canonical_hash, canonical_json_bytes, ContentHash, DOMAIN_AGENT_RUN};
use lrta_kernel::domain::SearchDomain;
use lrta_kernel::heuristic::DistanceHeuristic;
use lrta_search::{LssLrtaPlanner, NoPathReason, PlanOutcome};

use crate::error::HarnessError;

const DEFAULT_MAX_MOVES: usize = 10_000;

/// Agent run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfigV1 {
    /// Cap on moves, and on planning calls (a call that yields no move still
    /// counts toward the cap).
    pub max_moves: usize,
    /// Lookahead for every planning call of the run.
    pub lookahead: u64,
}

impl Default for AgentConfigV1 {
    fn default() -> Self {
        Self {
            max_moves: DEFAULT_MAX_MOVES,
            lookahead: 1,
        }
    }
}

impl AgentConfigV1 {
    /// Parse and validate a config document.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for malformed JSON, unknown
    /// fields, or `max_moves == 0`.
    pub fn from_json_str(json: &str) -> Result<Self, HarnessError> {
        let config: Self = serde_json::from_str(json).map_err(|e| HarnessError::InvalidConfig {
            detail: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] when `max_moves == 0`.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.max_moves == 0 {
            return Err(HarnessError::InvalidConfig {
                detail: "max_moves must be positive".into(),
            });
        }
        Ok(())
    }
}

/// Record of one agent run.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRunV1<S> {
    /// Every position the agent occupied, starting with the start state.
    pub trajectory: Vec<S>,
    pub planning_calls: u64,
    /// Sum of expansions over all planning calls.
    pub total_expansions: u64,
    pub reached_goal: bool,
    /// Set when a planning call returned no path and the agent gave up.
    pub stalled: Option<NoPathReason>,
    /// Sum of edge costs actually walked.
    pub travelled_cost: f64,
}

impl<S> AgentRunV1<S> {
    #[must_use]
    pub fn moves(&self) -> usize {
        self.trajectory.len().saturating_sub(1)
    }
}

impl<S: Serialize> AgentRunV1<S> {
    /// # Errors
    ///
    /// Returns [`HarnessError::Encoding`] if a state fails to serialize.
    pub fn to_json_value(&self) -> Result<serde_json::Value, HarnessError> {
        Ok(serde_json::json!({
            "trajectory": serde_json::to_value(&self.trajectory)?,
            "planning_calls": self.planning_calls,
            "total_expansions": self.total_expansions,
            "reached_goal": self.reached_goal,
            "stalled": self.stalled.map(NoPathReason::as_str),
            "travelled_cost": self.travelled_cost,
        }))
    }

    /// Content hash of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Encoding`] if a state fails to serialize.
    pub fn digest(&self) -> Result<ContentHash, HarnessError> {
        Ok(canonical_hash(
            DOMAIN_AGENT_RUN,
            &canonical_json_bytes(&self.to_json_value()?),
        ))
    }
}

/// Run the agent on a static world.
///
/// # Errors
///
/// Propagates [`HarnessError::Planner`] from any planning call and
/// [`HarnessError::InvalidConfig`] from config validation.
pub fn run_agent<D, H>(
    domain: &mut D,
    planner: &mut LssLrtaPlanner<D, H>,
    start: &D::State,
    goal: &D::State,
    config: &AgentConfigV1,
) -> Result<AgentRunV1<D::State>, HarnessError>
where
    D: SearchDomain,
    H: DistanceHeuristic<D>,
{
    run_agent_in(domain, planner, start, goal, config, |_, _, _| {})
}

/// Run the agent, calling `perturb(world, position, call_index)` before every
/// planning call so the world can change under the agent.
///
/// Steps of a plan that became blocked are not walked; the agent re-plans from
/// its current position instead.
///
/// # Errors
///
/// Propagates [`HarnessError::Planner`] from any planning call and
/// [`HarnessError::InvalidConfig`] from config validation.
pub fn run_agent_in<D, H, P>(
    domain: &mut D,
    planner: &mut LssLrtaPlanner<D, H>,
    start: &D::State,
    goal: &D::State,
    config: &AgentConfigV1,
    mut perturb: P,
) -> Result<AgentRunV1<D::State>, HarnessError>
where
    D: SearchDomain,
    H: DistanceHeuristic<D>,
    P: FnMut(&mut D, &D::State, u64),
{
    config.validate()?;

    let mut position = start.clone();
    let mut run = AgentRunV1 {
        trajectory: vec![position.clone()],
        planning_calls: 0,
        total_expansions: 0,
        reached_goal: false,
        stalled: None,
        travelled_cost: 0.0,
    };
    let max_calls = u64::try_from(config.max_moves).unwrap_or(u64::MAX);

    while position != *goal && run.moves() < config.max_moves && run.planning_calls < max_calls {
        perturb(&mut *domain, &position, run.planning_calls);

        let outcome =
            planner.find_path_with_lookahead(domain, &position, goal, config.lookahead)?;
        run.planning_calls += 1;
        run.total_expansions += planner.session().expansions();

        let plan = match outcome {
            PlanOutcome::Found(plan) => plan,
            PlanOutcome::NoPath(reason) => {
                debug!("[Agent] stalled at {position:?}: {}", reason.as_str());
                run.stalled = Some(reason);
                break;
            }
        };

        for next in plan.steps().iter().skip(1) {
            if domain.is_blocked(next) || run.moves() >= config.max_moves {
                break;
            }
            run.travelled_cost += domain.cost(&position, next);
            position = next.clone();
            run.trajectory.push(position.clone());
        }
        debug!(
            "[Agent] call {}: now at {position:?} after {} moves",
            run.planning_calls,
            run.moves()
        );
    }

    run.reached_goal = position == *goal;
    debug!(
        "[Agent] finished: reached_goal={} moves={} calls={} expansions={}",
        run.reached_goal,
        run.moves(),
        run.planning_calls,
        run.total_expansions
    );
    Ok(run)
}
