//! Typed planner errors.
//!
//! `PlannerError` covers faults only. "No path" is a normal outcome and is
//! expressed as [`crate::planner::PlanOutcome::NoPath`], never as an error.

use thiserror::Error;

/// Where a frontier-bookkeeping invariant was found broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierInvariantStageV1 {
    /// The loop predicate saw a finite minimum but `peek_min` returned nothing.
    PeekFromNonEmptyFrontier,
    /// A frontier or expanded-set id did not resolve to a registry record.
    MissingRecord,
    /// The session's start or goal record was never registered.
    MissingEndpoint,
}

impl std::fmt::Display for FrontierInvariantStageV1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::PeekFromNonEmptyFrontier => "peek from non-empty frontier",
            Self::MissingRecord => "missing registry record",
            Self::MissingEndpoint => "missing session endpoint",
        };
        f.write_str(label)
    }
}

/// Fault raised by a planning call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    /// The heuristic supplier broke the distance-heuristic capability by
    /// returning a NaN or negative estimate.
    #[error("invalid heuristic estimate {value} for {state}")]
    InvalidHeuristic { value: f64, state: String },

    /// The domain returned a NaN or negative edge cost.
    #[error("invalid edge cost {value} for {from} -> {to}")]
    InvalidEdgeCost { value: f64, from: String, to: String },

    /// Internal bookkeeping invariant broken. Indicates a planner bug; the
    /// call is aborted and its session is not used for path extraction.
    #[error("frontier invariant violated: {stage}")]
    FrontierInvariant { stage: FrontierInvariantStageV1 },

    /// A planner policy document could not be parsed.
    #[error("invalid planner policy: {detail}")]
    InvalidPolicy { detail: String },
}
