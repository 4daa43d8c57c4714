//! Line scenario lock tests: one bounded call on `0 - 1 - 2 - 3 - 4`.
//!
//! Proves:
//! 1. Lookahead 2 expands exactly the first two states and stops on budget
//! 2. The interim goal is the frontier minimum; the plan runs start → interim
//! 3. Learned values reach the supplier (`h(0) = 2`, `h(1) = 1`) and steer
//!    the next call
//! 4. Annotations and the report agree with the session

use lrta_harness::heuristics::{LearnedHeuristic, ZeroHeuristic};
use lrta_harness::worlds::GraphWorld;
use lrta_search::report::{ReportOutcomeV1, TerminationReasonV1};
use lrta_search::{LssLrtaPlanner, PlanOutcome};

use lock_tests::init_logging;

type Planner = LssLrtaPlanner<GraphWorld, LearnedHeuristic<u32, ZeroHeuristic>>;

fn planner(lookahead: u64) -> Planner {
    LssLrtaPlanner::new(LearnedHeuristic::new(ZeroHeuristic), lookahead)
}

// ---------------------------------------------------------------------------
// 1–3. Bounded call
// ---------------------------------------------------------------------------

#[test]
fn lookahead_two_plans_to_interim_goal() {
    init_logging();
    let world = GraphWorld::line(5);
    let mut planner = planner(2);

    let outcome = planner.find_path(&world, &0, &4).unwrap();
    let PlanOutcome::Found(plan) = outcome else {
        panic!("expected a plan, got {outcome:?}");
    };
    assert_eq!(plan.steps(), &[0, 1, 2]);
    assert!((plan.cost() - 2.0).abs() < f64::EPSILON);
    assert_eq!(plan.end(), Some(&2));

    assert_eq!(planner.expanded_nodes(), vec![0, 1]);
    assert_eq!(planner.unexpanded_nodes(), vec![2]);
    assert!(planner.session().expansions() <= 2);

    let learned = planner.heuristics();
    assert_eq!(learned.learned(&0, &4), Some(2.0));
    assert_eq!(learned.learned(&1, &4), Some(1.0));
    assert_eq!(learned.learned(&2, &4), None);
}

#[test]
fn plan_cost_matches_walked_edges() {
    let world = GraphWorld::line(5);
    let mut planner = planner(3);
    let plan = planner.find_path(&world, &0, &4).unwrap().into_plan().unwrap();
    assert!((plan.recomputed_cost(&world) - plan.cost()).abs() < 1e-12);
}

#[test]
fn second_call_starts_from_learned_values() {
    let world = GraphWorld::line(5);
    let mut planner = planner(2);
    planner.find_path(&world, &0, &4).unwrap();

    // From 1, going back to 0 now looks worse (h(0) = 2) than going on to 2.
    let plan = planner.find_path(&world, &1, &4).unwrap().into_plan().unwrap();
    assert_eq!(plan.start(), Some(&1));
    assert_eq!(plan.steps().get(1), Some(&2));
}

/// From 2, learned `h(1) = 1` steers expansion toward the goal: the call
/// expands 2 and 3 and settles the goal at `g = 2`, where an uninformed call
/// expands 2 and 1 and never sees the goal. Both 1 and the goal then sit on
/// the frontier at `f = 2`; ties on `f` go to the smaller `g`, so the interim
/// goal is 1 and the plan steps back.
#[test]
fn second_call_from_two_reaches_goal_with_fewer_expansions() {
    init_logging();
    let world = GraphWorld::line(5);

    let mut learned = planner(2);
    learned.find_path(&world, &0, &4).unwrap();
    let plan = learned.find_path(&world, &2, &4).unwrap().into_plan().unwrap();
    assert_eq!(plan.steps(), &[2, 1]);
    assert!((plan.cost() - 1.0).abs() < f64::EPSILON);
    assert_eq!(learned.expanded_nodes(), vec![2, 3]);
    assert_eq!(learned.session().expansions(), 2);
    let report = learned.last_report().unwrap();
    assert_eq!(report.termination_reason, Some(TerminationReasonV1::NoImprovement));
    assert!((goal_g(&learned) - 2.0).abs() < f64::EPSILON);

    let mut fresh = planner(2);
    let plan = fresh.find_path(&world, &2, &4).unwrap().into_plan().unwrap();
    assert_eq!(plan.steps(), &[2, 3]);
    assert_eq!(fresh.expanded_nodes(), vec![2, 1]);
    let report = fresh.last_report().unwrap();
    assert_eq!(report.termination_reason, Some(TerminationReasonV1::BudgetExhausted));
    assert!(goal_g(&fresh).is_infinite());
}

#[test]
fn learned_values_shorten_an_unbounded_second_call() {
    let world = GraphWorld::line(5);

    let mut learned = planner(2);
    learned.find_path(&world, &0, &4).unwrap();
    learned.find_path_with_lookahead(&world, &2, &4, 16).unwrap();
    assert_eq!(learned.session().expansions(), 2);

    let mut fresh = planner(16);
    let plan = fresh.find_path(&world, &2, &4).unwrap().into_plan().unwrap();
    assert_eq!(fresh.session().expansions(), 3);
    assert_eq!(plan.steps(), &[2, 3, 4]);
}

fn goal_g(planner: &Planner) -> f64 {
    let session = planner.session();
    session.record(session.goal_id().unwrap()).unwrap().g().value()
}

// ---------------------------------------------------------------------------
// 4. Annotations and report
// ---------------------------------------------------------------------------

#[test]
fn annotations_use_f_g_h_format() {
    let world = GraphWorld::line(5);
    let mut planner = planner(2);
    planner.find_path(&world, &0, &4).unwrap();

    let annotations = planner.annotations();
    assert_eq!(annotations[&0], "F:2.0, G:0.0, H:2.0");
    assert_eq!(annotations[&1], "F:2.0, G:1.0, H:1.0");
    assert_eq!(annotations[&2], "F:2.0, G:2.0, H:0.0");
    assert_eq!(annotations[&4], "F:Infinity, G:Infinity, H:0.0");
}

#[test]
fn report_records_the_call() {
    let world = GraphWorld::line(5);
    let mut planner = planner(2);
    planner.find_path(&world, &0, &4).unwrap();

    let report = planner.last_report().unwrap();
    assert_eq!(report.policy.lookahead, 2);
    assert_eq!(report.expansions, 2);
    assert_eq!(report.termination_reason, Some(TerminationReasonV1::BudgetExhausted));
    assert_eq!(report.interim_goal, Some(2));
    assert_eq!(report.expanded, vec![0, 1]);
    assert_eq!(report.unexpanded, vec![2]);
    assert_eq!(report.learned_updates, 2);
    assert_eq!(report.unsettled, 0);
    assert!(matches!(report.outcome, ReportOutcomeV1::Found { steps: 3, .. }));

    let json = report.to_json_value().unwrap();
    assert_eq!(json["termination_reason"], "budget_exhausted");
    assert_eq!(json["outcome"]["kind"], "found");
    assert_eq!(json["policy"]["lookahead"], 2);
}

#[test]
fn goal_within_budget_is_reached_exactly() {
    let world = GraphWorld::line(5);
    let mut planner = planner(16);
    let plan = planner.find_path(&world, &0, &4).unwrap().into_plan().unwrap();
    assert_eq!(plan.steps(), &[0, 1, 2, 3, 4]);
    assert!((plan.cost() - 4.0).abs() < f64::EPSILON);

    let report = planner.last_report().unwrap();
    assert_eq!(report.interim_goal, Some(4));
    assert!(matches!(
        report.termination_reason,
        Some(TerminationReasonV1::GoalReached | TerminationReasonV1::NoImprovement)
    ));
}
