//! Harness error type.

use thiserror::Error;

use lrta_search::PlannerError;

/// Error raised while building worlds or running an agent.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The planner rejected a collaborator or hit an internal fault.
    #[error(transparent)]
    Planner(#[from] PlannerError),
    /// A grid description could not be parsed.
    #[error("invalid grid: {detail}")]
    InvalidGrid { detail: String },
    /// An agent configuration was rejected.
    #[error("invalid agent config: {detail}")]
    InvalidConfig { detail: String },
    /// A run artifact failed to serialize.
    #[error("encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}
