//! Planner policy: the per-call expansion budget.

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Planner configuration.
///
/// Loadable from JSON (`{"lookahead": 16}`); unknown fields are rejected so a
/// misspelled key cannot silently fall back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerPolicyV1 {
    /// Hard cap on state expansions per planning call.
    pub lookahead: u64,
}

impl PlannerPolicyV1 {
    #[must_use]
    pub fn with_lookahead(lookahead: u64) -> Self {
        Self { lookahead }
    }

    /// Parse a policy document.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidPolicy`] if the document is not valid
    /// JSON, has unknown fields, or is missing `lookahead`.
    pub fn from_json_str(json: &str) -> Result<Self, PlannerError> {
        serde_json::from_str(json).map_err(|e| PlannerError::InvalidPolicy {
            detail: e.to_string(),
        })
    }

    /// Policy echo for reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({ "lookahead": self.lookahead })
    }
}

impl Default for PlannerPolicyV1 {
    fn default() -> Self {
        Self { lookahead: 1 }
    }
}
