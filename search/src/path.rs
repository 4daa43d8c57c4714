//! Path extraction along parent links.

use std::hash::Hash;

use lrta_kernel::plan::Plan;

use crate::node::RecordId;
use crate::registry::Registry;

/// Walk parent links from `interim` back to `start` and build the plan.
///
/// Returns `None` if a link is missing before `start` is reached, or if the
/// walk takes more hops than there are records (a cycle).
#[must_use]
pub fn extract_path<S: Clone + Eq + Hash>(
    registry: &Registry<S>,
    start: RecordId,
    interim: RecordId,
) -> Option<Plan<S>> {
    let interim_record = registry.get(interim)?;
    let start_record = registry.get(start)?;

    let mut plan = Plan::new();
    let mut cursor = interim;
    while cursor != start {
        if plan.len() > registry.len() {
            return None;
        }
        let record = registry.get(cursor)?;
        plan.prepend_step(record.state.clone());
        cursor = record.parent()?;
    }
    plan.prepend_step(start_record.state.clone());
    plan.set_cost(interim_record.g().value());

    Some(plan)
}
