//! Degenerate-input and contract-violation lock tests.
//!
//! Proves:
//! 1. start == goal, blocked start, blocked goal are routine `NoPath` outcomes
//! 2. An unreachable goal exhausts the frontier and yields `NoPath`
//! 3. Lookahead 0 yields the trivial plan `[start]`
//! 4. NaN or negative estimates and edge costs are rejected as errors
//! 5. Boxed suppliers install like any other supplier

use lrta_harness::heuristics::ZeroHeuristic;
use lrta_harness::worlds::GraphWorld;
use lrta_kernel::heuristic::DistanceHeuristic;
use lrta_search::report::TerminationReasonV1;
use lrta_search::{LssLrtaPlanner, NoPathReason, PlanOutcome, PlannerError, PlannerPolicyV1};

// ---------------------------------------------------------------------------
// 1–2. NoPath outcomes
// ---------------------------------------------------------------------------

#[test]
fn start_equal_to_goal_is_no_path() {
    let world = GraphWorld::line(3);
    let mut planner = LssLrtaPlanner::new(ZeroHeuristic, 4);
    let outcome = planner.find_path(&world, &1, &1).unwrap();
    assert_eq!(outcome, PlanOutcome::NoPath(NoPathReason::StartIsGoal));

    let report = planner.last_report().unwrap();
    assert_eq!(report.termination_reason, None);
    assert_eq!(report.expansions, 0);
    assert_eq!(report.to_json_value().unwrap()["outcome"]["reason"], "start_is_goal");
}

#[test]
fn blocked_start_is_no_path() {
    let mut world = GraphWorld::new();
    world.add_undirected_edge(0, 1, 1.0);
    world.block(0);
    let mut planner = LssLrtaPlanner::new(ZeroHeuristic, 4);
    assert_eq!(
        planner.find_path(&world, &0, &1).unwrap(),
        PlanOutcome::NoPath(NoPathReason::StartBlocked)
    );
}

#[test]
fn blocked_goal_is_no_path() {
    let mut world = GraphWorld::line(3);
    world.block(2);
    let mut planner = LssLrtaPlanner::new(ZeroHeuristic, 4);
    assert_eq!(
        planner.find_path(&world, &0, &2).unwrap(),
        PlanOutcome::NoPath(NoPathReason::GoalBlocked)
    );
}

#[test]
fn degenerate_call_clears_previous_session() {
    let world = GraphWorld::line(4);
    let mut planner = LssLrtaPlanner::new(ZeroHeuristic, 4);
    planner.find_path(&world, &0, &3).unwrap();
    assert!(!planner.expanded_nodes().is_empty());

    planner.find_path(&world, &2, &2).unwrap();
    assert!(planner.expanded_nodes().is_empty());
    assert!(planner.unexpanded_nodes().is_empty());
    assert!(planner.annotations().is_empty());
}

#[test]
fn unreachable_goal_exhausts_frontier() {
    let mut world = GraphWorld::line(3);
    world.add_node(7);
    let mut planner = LssLrtaPlanner::new(ZeroHeuristic, 100);
    let outcome = planner.find_path(&world, &0, &7).unwrap();
    assert_eq!(outcome, PlanOutcome::NoPath(NoPathReason::FrontierExhausted));

    let report = planner.last_report().unwrap();
    assert_eq!(report.termination_reason, Some(TerminationReasonV1::FrontierExhausted));
    assert_eq!(report.expansions, 3);
    assert_eq!(planner.expanded_nodes(), vec![0, 1, 2]);
}

// ---------------------------------------------------------------------------
// 3. Lookahead 0
// ---------------------------------------------------------------------------

#[test]
fn zero_lookahead_returns_start_only() {
    let world = GraphWorld::line(3);
    let policy = PlannerPolicyV1::from_json_str(r#"{"lookahead": 0}"#).unwrap();
    let mut planner = LssLrtaPlanner::with_policy(ZeroHeuristic, policy);
    let plan = planner.find_path(&world, &0, &2).unwrap().into_plan().unwrap();
    assert_eq!(plan.steps(), &[0]);
    assert!(plan.cost().abs() < f64::EPSILON);
    assert!(planner.expanded_nodes().is_empty());
    assert_eq!(planner.unexpanded_nodes(), vec![0]);
}

// ---------------------------------------------------------------------------
// 4. Collaborator contract violations
// ---------------------------------------------------------------------------

struct Constant(f64);

impl DistanceHeuristic<GraphWorld> for Constant {
    fn estimate(&self, _domain: &GraphWorld, _state: &u32, _goal: &u32) -> f64 {
        self.0
    }

    fn record_learned_value(&mut self, _domain: &GraphWorld, _state: &u32, _goal: &u32, _value: f64) {}
}

#[test]
fn nan_estimate_is_invalid_heuristic() {
    let world = GraphWorld::line(3);
    let mut planner = LssLrtaPlanner::new(Constant(f64::NAN), 4);
    let err = planner.find_path(&world, &0, &2).unwrap_err();
    assert!(matches!(err, PlannerError::InvalidHeuristic { .. }), "{err}");
}

#[test]
fn negative_estimate_is_invalid_heuristic() {
    let world = GraphWorld::line(3);
    let mut planner = LssLrtaPlanner::new(Constant(-1.0), 4);
    let err = planner.find_path(&world, &0, &2).unwrap_err();
    match err {
        PlannerError::InvalidHeuristic { value, state } => {
            assert!((value + 1.0).abs() < f64::EPSILON);
            assert_eq!(state, "0");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn infinite_estimate_is_accepted() {
    let world = GraphWorld::line(3);
    let mut planner = LssLrtaPlanner::new(Constant(f64::INFINITY), 4);
    assert!(planner.find_path(&world, &0, &2).is_ok());
}

#[test]
fn negative_edge_cost_is_rejected() {
    let mut world = GraphWorld::new();
    world.add_edge(0, 1, -3.0);
    let mut planner = LssLrtaPlanner::new(ZeroHeuristic, 4);
    let err = planner.find_path(&world, &0, &1).unwrap_err();
    assert!(matches!(err, PlannerError::InvalidEdgeCost { .. }), "{err}");
}

#[test]
fn malformed_policy_is_rejected() {
    for doc in ["", "{}", r#"{"lookahead": -1}"#, r#"{"lookahead": 1, "depth": 2}"#] {
        let err = PlannerPolicyV1::from_json_str(doc).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidPolicy { .. }), "{doc:?}");
    }
}

// ---------------------------------------------------------------------------
// 5. Boxed suppliers
// ---------------------------------------------------------------------------

#[test]
fn boxed_supplier_installs_and_swaps() {
    let world = GraphWorld::line(4);
    let boxed: Box<dyn DistanceHeuristic<GraphWorld>> = Box::new(ZeroHeuristic);
    let mut planner = LssLrtaPlanner::new(boxed, 8);
    assert!(planner.find_path(&world, &0, &3).unwrap().is_found());

    let _previous = planner.set_heuristics(Box::new(Constant(f64::NAN)));
    assert!(planner.find_path(&world, &0, &3).is_err());
}
