//! `PlanningReportV1`: per-call audit record of the planner.
//!
//! The report is a derived artifact: it is assembled after the call finishes
//! and never feeds back into planning. Its canonical JSON form is hashed for
//! determinism checks.

use serde::Serialize;
use thiserror::Error;

use lrta_kernel::digest::{canonical_hash, canonical_json_bytes, ContentHash, DOMAIN_PLANNING_REPORT};

use crate::planner::NoPathReason;
use crate::policy::PlannerPolicyV1;

/// Why the bounded expansion loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// The goal record reached the top of the frontier.
    GoalReached,
    /// The lookahead budget was used up.
    BudgetExhausted,
    /// The goal's cost is no larger than any frontier `f`; expanding further
    /// cannot find a cheaper goal path.
    NoImprovement,
    /// No frontier records remain.
    FrontierExhausted,
}

impl TerminationReasonV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::BudgetExhausted => "budget_exhausted",
            Self::NoImprovement => "no_improvement",
            Self::FrontierExhausted => "frontier_exhausted",
        }
    }
}

/// How the call ended, as recorded in the report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcomeV1 {
    Found { cost: f64, steps: usize },
    NoPath(NoPathReason),
}

/// Failure to encode a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("state encoding failed: {0}")]
    StateEncoding(#[from] serde_json::Error),
}

/// Audit record of one planning call.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningReportV1<S> {
    /// Policy in force for the call (after any lookahead override).
    pub policy: PlannerPolicyV1,
    /// Expansion counter at the end of the expansion phase.
    pub expansions: u64,
    /// `None` when the call was rejected before expansion (degenerate input).
    pub termination_reason: Option<TerminationReasonV1>,
    pub outcome: ReportOutcomeV1,
    /// Frontier minimum captured before correction.
    pub interim_goal: Option<S>,
    /// Expanded states in expansion order.
    pub expanded: Vec<S>,
    /// Frontier snapshot between expansion and correction, in priority order.
    pub unexpanded: Vec<S>,
    pub learned_updates: u64,
    pub unsettled: usize,
    pub frontier_high_water: usize,
    pub registered_records: usize,
}

impl<S> PlanningReportV1<S> {
    /// A report for a call rejected before any search.
    #[must_use]
    pub fn rejected(policy: PlannerPolicyV1, reason: NoPathReason) -> Self {
        Self {
            policy,
            expansions: 0,
            termination_reason: None,
            outcome: ReportOutcomeV1::NoPath(reason),
            interim_goal: None,
            expanded: Vec::new(),
            unexpanded: Vec::new(),
            learned_updates: 0,
            unsettled: 0,
            frontier_high_water: 0,
            registered_records: 0,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, ReportOutcomeV1::Found { .. })
    }
}

fn cost_to_json(value: f64) -> serde_json::Value {
    if value.is_finite() {
        serde_json::json!(value)
    } else {
        serde_json::Value::Null
    }
}

impl<S: Serialize> PlanningReportV1<S> {
    /// Convert to a `serde_json::Value`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::StateEncoding`] if a state fails to serialize.
    pub fn to_json_value(&self) -> Result<serde_json::Value, ReportError> {
        let outcome = match &self.outcome {
            ReportOutcomeV1::Found { cost, steps } => serde_json::json!({
                "kind": "found",
                "cost": cost_to_json(*cost),
                "steps": steps,
            }),
            ReportOutcomeV1::NoPath(reason) => serde_json::json!({
                "kind": "no_path",
                "reason": reason.as_str(),
            }),
        };
        Ok(serde_json::json!({
            "policy": self.policy.to_json_value(),
            "expansions": self.expansions,
            "termination_reason": self.termination_reason.map(TerminationReasonV1::as_str),
            "outcome": outcome,
            "interim_goal": serde_json::to_value(&self.interim_goal)?,
            "expanded": serde_json::to_value(&self.expanded)?,
            "unexpanded": serde_json::to_value(&self.unexpanded)?,
            "learned_updates": self.learned_updates,
            "unsettled": self.unsettled,
            "frontier_high_water": self.frontier_high_water,
            "registered_records": self.registered_records,
        }))
    }

    /// Serialize to canonical JSON bytes (sorted keys, compact).
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::StateEncoding`] if a state fails to serialize.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, ReportError> {
        Ok(canonical_json_bytes(&self.to_json_value()?))
    }

    /// Content hash of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::StateEncoding`] if a state fails to serialize.
    pub fn digest(&self) -> Result<ContentHash, ReportError> {
        Ok(canonical_hash(
            DOMAIN_PLANNING_REPORT,
            &self.to_canonical_json_bytes()?,
        ))
    }
}
