//! LSS-LRTA* planner: the public planning contract.
//!
//! One call runs three phases over a fresh session:
//!
//! ```text
//! reject degenerate input → seed start
//!   → bounded expansion (A*, ≤ lookahead expansions)
//!   → capture interim goal + frontier snapshot
//!   → heuristic correction (learned values → supplier)
//!   → path extraction (interim goal → start)
//! ```

use std::collections::HashMap;
use std::marker::PhantomData;

use log::debug;

use lrta_kernel::domain::SearchDomain;
use lrta_kernel::heuristic::DistanceHeuristic;
use lrta_kernel::plan::Plan;

use crate::correction::run_heuristic_correction;
use crate::error::PlannerError;
use crate::expansion::{run_bounded_expansion, seed_start};
use crate::path::extract_path;
use crate::policy::PlannerPolicyV1;
use crate::report::{PlanningReportV1, ReportOutcomeV1, TerminationReasonV1};
use crate::session::Session;

/// Why a call produced no plan. These are routine outcomes for an agent
/// mid-navigation, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoPathReason {
    /// Start and goal are the same state.
    StartIsGoal,
    /// The domain reports the start as blocked.
    StartBlocked,
    /// The domain reports the goal as blocked.
    GoalBlocked,
    /// The frontier emptied before an interim goal could be chosen.
    FrontierExhausted,
    /// The interim goal does not link back to the start.
    Unlinked,
}

impl NoPathReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StartIsGoal => "start_is_goal",
            Self::StartBlocked => "start_blocked",
            Self::GoalBlocked => "goal_blocked",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::Unlinked => "unlinked",
        }
    }
}

/// Result of a planning call that did not fault.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome<S> {
    Found(Plan<S>),
    NoPath(NoPathReason),
}

impl<S> PlanOutcome<S> {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[must_use]
    pub fn plan(&self) -> Option<&Plan<S>> {
        match self {
            Self::Found(plan) => Some(plan),
            Self::NoPath(_) => None,
        }
    }

    #[must_use]
    pub fn into_plan(self) -> Option<Plan<S>> {
        match self {
            Self::Found(plan) => Some(plan),
            Self::NoPath(_) => None,
        }
    }

    #[must_use]
    pub fn no_path_reason(&self) -> Option<NoPathReason> {
        match self {
            Self::Found(_) => None,
            Self::NoPath(reason) => Some(*reason),
        }
    }
}

/// Local Search Space, Learning Real-Time A* planner.
///
/// Each call is bounded by the policy's lookahead and returns a partial path
/// to the most promising frontier state. Corrected heuristic values are pushed
/// to the supplier `H`, so later calls (from this or any planner sharing the
/// supplier) search better informed.
///
/// `find_path` takes `&mut self`: calls are mutually exclusive by
/// construction. Use [`crate::shared::SharedPlanner`] to share one planner
/// across threads.
pub struct LssLrtaPlanner<D: SearchDomain, H> {
    policy: PlannerPolicyV1,
    heuristic: H,
    session: Session<D::State>,
    last_report: Option<PlanningReportV1<D::State>>,
    _domain: PhantomData<fn(&D)>,
}

impl<D, H> LssLrtaPlanner<D, H>
where
    D: SearchDomain,
    H: DistanceHeuristic<D>,
{
    #[must_use]
    pub fn new(heuristic: H, lookahead: u64) -> Self {
        Self::with_policy(heuristic, PlannerPolicyV1::with_lookahead(lookahead))
    }

    #[must_use]
    pub fn with_policy(heuristic: H, policy: PlannerPolicyV1) -> Self {
        Self {
            policy,
            heuristic,
            session: Session::new(),
            last_report: None,
            _domain: PhantomData,
        }
    }

    /// Plan from `start` toward `goal` with the configured lookahead.
    ///
    /// Returns [`PlanOutcome::NoPath`] when start equals goal, either endpoint
    /// is blocked, the reachable region is exhausted, or the interim goal does
    /// not link back to the start.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidHeuristic`] or
    /// [`PlannerError::InvalidEdgeCost`] when a collaborator breaks its
    /// contract, and [`PlannerError::FrontierInvariant`] on internal
    /// bookkeeping faults.
    pub fn find_path(
        &mut self,
        domain: &D,
        start: &D::State,
        goal: &D::State,
    ) -> Result<PlanOutcome<D::State>, PlannerError> {
        if let Some(reason) = Self::degenerate(domain, start, goal) {
            debug!("[LssLrta] rejected {start:?} -> {goal:?}: {}", reason.as_str());
            self.session.reset();
            self.last_report = Some(PlanningReportV1::rejected(self.policy, reason));
            return Ok(PlanOutcome::NoPath(reason));
        }

        let (start_id, _goal_id) = self.session.begin(start, goal);
        seed_start(&mut self.session, domain, &self.heuristic)?;

        let termination =
            run_bounded_expansion(&mut self.session, domain, &self.heuristic, self.policy.lookahead)?;

        let Some(interim_key) = self.session.frontier.peek_min() else {
            debug!(
                "[LssLrta] no path {start:?} -> {goal:?}: frontier exhausted after {} expansions",
                self.session.expansions
            );
            self.last_report = Some(self.build_report(
                Some(termination),
                ReportOutcomeV1::NoPath(NoPathReason::FrontierExhausted),
                None,
                0,
                0,
            ));
            return Ok(PlanOutcome::NoPath(NoPathReason::FrontierExhausted));
        };
        let interim = interim_key.id;
        self.session.unexpanded_snapshot = self.session.frontier.snapshot();

        let correction = run_heuristic_correction(&mut self.session, domain, &mut self.heuristic)?;

        let interim_state = self.session.record(interim)?.state.clone();
        let outcome = match extract_path(&self.session.registry, start_id, interim) {
            Some(plan) => PlanOutcome::Found(plan),
            None => PlanOutcome::NoPath(NoPathReason::Unlinked),
        };

        let report_outcome = match &outcome {
            PlanOutcome::Found(plan) => ReportOutcomeV1::Found {
                cost: plan.cost(),
                steps: plan.len(),
            },
            PlanOutcome::NoPath(reason) => ReportOutcomeV1::NoPath(*reason),
        };
        debug!(
            "[LssLrta] {start:?} -> {goal:?}: interim {interim_state:?}, {} expansions ({}), {} learned",
            self.session.expansions,
            termination.as_str(),
            correction.learned_updates
        );
        self.last_report = Some(self.build_report(
            Some(termination),
            report_outcome,
            Some(interim_state),
            correction.learned_updates,
            correction.unsettled,
        ));
        Ok(outcome)
    }

    /// Set the lookahead for this and all later calls, then plan.
    ///
    /// # Errors
    ///
    /// Same as [`LssLrtaPlanner::find_path`].
    pub fn find_path_with_lookahead(
        &mut self,
        domain: &D,
        start: &D::State,
        goal: &D::State,
        lookahead: u64,
    ) -> Result<PlanOutcome<D::State>, PlannerError> {
        self.policy.lookahead = lookahead;
        self.find_path(domain, start, goal)
    }

    /// States expanded during the most recent call, in expansion order.
    #[must_use]
    pub fn expanded_nodes(&self) -> Vec<D::State> {
        self.session.states_of(&self.session.expanded_log)
    }

    /// Frontier states as they stood right after the most recent expansion
    /// phase, in priority order.
    #[must_use]
    pub fn unexpanded_nodes(&self) -> Vec<D::State> {
        self.session.states_of(&self.session.unexpanded_snapshot)
    }

    /// `"F:<f>, G:<g>, H:<h>"` for every state registered in the most recent
    /// call.
    #[must_use]
    pub fn annotations(&self) -> HashMap<D::State, String> {
        self.session
            .registry
            .iter()
            .map(|(_, r)| {
                (
                    r.state.clone(),
                    format!("F:{}, G:{}, H:{}", r.f(), r.g(), r.h()),
                )
            })
            .collect()
    }

    /// Install a new heuristic supplier, returning the previous one.
    pub fn set_heuristics(&mut self, heuristic: H) -> H {
        std::mem::replace(&mut self.heuristic, heuristic)
    }

    #[must_use]
    pub fn heuristics(&self) -> &H {
        &self.heuristic
    }

    #[must_use]
    pub fn lookahead(&self) -> u64 {
        self.policy.lookahead
    }

    #[must_use]
    pub fn policy(&self) -> &PlannerPolicyV1 {
        &self.policy
    }

    /// Session of the most recent call (for inspection in tests and tools).
    #[must_use]
    pub fn session(&self) -> &Session<D::State> {
        &self.session
    }

    #[must_use]
    pub fn last_report(&self) -> Option<&PlanningReportV1<D::State>> {
        self.last_report.as_ref()
    }

    fn degenerate(domain: &D, start: &D::State, goal: &D::State) -> Option<NoPathReason> {
        if start == goal {
            Some(NoPathReason::StartIsGoal)
        } else if domain.is_blocked(start) {
            Some(NoPathReason::StartBlocked)
        } else if domain.is_blocked(goal) {
            Some(NoPathReason::GoalBlocked)
        } else {
            None
        }
    }

    fn build_report(
        &self,
        termination: Option<TerminationReasonV1>,
        outcome: ReportOutcomeV1,
        interim_goal: Option<D::State>,
        learned_updates: u64,
        unsettled: usize,
    ) -> PlanningReportV1<D::State> {
        PlanningReportV1 {
            policy: self.policy,
            expansions: self.session.expansions,
            termination_reason: termination,
            outcome,
            interim_goal,
            expanded: self.expanded_nodes(),
            unexpanded: self.unexpanded_nodes(),
            learned_updates,
            unsettled,
            frontier_high_water: self.session.frontier.high_water(),
            registered_records: self.session.registry.len(),
        }
    }
}
