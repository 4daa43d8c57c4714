//! Optimality lock tests: with a budget covering the whole domain the planner
//! degenerates to A* and must return shortest paths.
//!
//! Reference costs come from Floyd–Warshall over the same graph. With a zero
//! heuristic the plan reaches the goal; with an informed one it ends on the
//! frontier minimum, whose `f` equals the optimum.

use proptest::prelude::*;

use lrta_harness::heuristics::{ManhattanHeuristic, OctileHeuristic, ZeroHeuristic};
use lrta_harness::worlds::{Cell, Connectivity, GraphWorld, GridWorld};
use lrta_kernel::heuristic::DistanceHeuristic;
use lrta_kernel::plan::Plan;
use lrta_search::path::extract_path;
use lrta_search::{LssLrtaPlanner, NoPathReason, PlanOutcome};

use lock_tests::{floyd_warshall, AllPairs};

const EPS: f64 = 1e-9;

/// Directed graph on `0..n` from `(from, to, weight)` triples. Weights are
/// small integers so every path sum is exact in `f64`.
fn build_graph(n: u32, edges: &[(u32, u32, u8)]) -> GraphWorld {
    let mut world = GraphWorld::new();
    for node in 0..n {
        world.add_node(node);
    }
    for &(from, to, weight) in edges {
        if from != to {
            world.add_edge(from % n, to % n, f64::from(weight));
        }
    }
    world
}

fn graph_strategy() -> impl Strategy<Value = (u32, Vec<(u32, u32, u8)>)> {
    (2u32..9).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 1u8..10);
        (Just(n), prop::collection::vec(edge, 0..24))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn full_budget_matches_floyd_warshall((n, edges) in graph_strategy()) {
        let world = build_graph(n, &edges);
        let states: Vec<u32> = world.nodes().collect();
        let truth = floyd_warshall(&world, &states);
        let (start, goal) = (0, n - 1);

        let lookahead = u64::from(n) + 1;
        let mut planner = LssLrtaPlanner::new(ZeroHeuristic, lookahead);
        let outcome = planner.find_path(&world, &start, &goal).unwrap();
        let expected = truth.distance(&start, &goal);

        if expected.is_finite() {
            let plan = outcome.into_plan().expect("reachable goal must produce a plan");
            prop_assert!((plan.cost() - expected).abs() < EPS, "cost {} vs {}", plan.cost(), expected);
            prop_assert!((plan.recomputed_cost(&world) - plan.cost()).abs() < EPS);
            prop_assert_eq!(plan.start(), Some(&start));
        } else {
            prop_assert_eq!(outcome, PlanOutcome::NoPath(NoPathReason::FrontierExhausted));
        }
        prop_assert!(planner.session().expansions() <= lookahead);
        prop_assert!(planner.session().check_f_invariant());
    }

    #[test]
    fn expansions_never_exceed_lookahead(
        (n, edges) in graph_strategy(),
        lookahead in 0u64..6,
    ) {
        let world = build_graph(n, &edges);
        let mut planner = LssLrtaPlanner::new(ZeroHeuristic, lookahead);
        let outcome = planner.find_path(&world, &0, &(n - 1)).unwrap();
        prop_assert!(planner.session().expansions() <= lookahead);
        if let Some(plan) = outcome.plan() {
            prop_assert_eq!(plan.start(), Some(&0));
            prop_assert!((plan.recomputed_cost(&world) - plan.cost()).abs() < EPS);
        }
    }
}

// ---------------------------------------------------------------------------
// Grids with informed heuristics
// ---------------------------------------------------------------------------

const MAZE: [&str; 6] = [
    "S....#....",
    ".###.#.##.",
    ".#...#..#.",
    ".#.####.#.",
    ".#......#G",
    "...####...",
];

#[test]
fn manhattan_on_four_connected_maze_is_optimal() {
    let parsed = GridWorld::from_rows(&MAZE, Connectivity::Four).unwrap();
    let (start, goal) = (parsed.start.unwrap(), parsed.goal.unwrap());
    let states: Vec<Cell> = parsed.world.open_cells().collect();
    let truth = floyd_warshall(&parsed.world, &states);

    let mut planner = LssLrtaPlanner::new(ManhattanHeuristic, 1_000);
    let plan = planner.find_path(&parsed.world, &start, &goal).unwrap().into_plan().unwrap();
    assert_full_budget_plan(&planner, &parsed.world, &plan, &truth, (start, goal), EPS);
}

#[test]
fn octile_on_eight_connected_maze_is_optimal() {
    let parsed = GridWorld::from_rows(&MAZE, Connectivity::Eight).unwrap();
    let (start, goal) = (parsed.start.unwrap(), parsed.goal.unwrap());
    let states: Vec<Cell> = parsed.world.open_cells().collect();
    let truth = floyd_warshall(&parsed.world, &states);

    let mut planner = LssLrtaPlanner::new(OctileHeuristic, 1_000);
    let plan = planner.find_path(&parsed.world, &start, &goal).unwrap().into_plan().unwrap();
    assert_full_budget_plan(&planner, &parsed.world, &plan, &truth, (start, goal), 1e-6);
}

/// On an open grid Manhattan is exact, every cell in the start-goal box has
/// `f = 6`, and the `g`-ascending tie-break leaves the unexpanded neighbour of
/// the goal as the frontier minimum. The plan stops one step short.
#[test]
fn open_grid_plan_stops_on_frontier_minimum_before_goal() {
    let world = GridWorld::open(5, 3, Connectivity::Four);
    let states: Vec<Cell> = world.open_cells().collect();
    let truth = floyd_warshall(&world, &states);
    let (start, goal) = (Cell::new(0, 0), Cell::new(4, 2));

    let mut planner = LssLrtaPlanner::new(ManhattanHeuristic, 1_000);
    let plan = planner.find_path(&world, &start, &goal).unwrap().into_plan().unwrap();
    assert_full_budget_plan(&planner, &world, &plan, &truth, (start, goal), EPS);

    let end = *plan.end().unwrap();
    assert_eq!(end, Cell::new(3, 2));
    assert!((plan.cost() - 5.0).abs() < EPS);
    assert!((ManhattanHeuristic.estimate(&world, &end, &goal) - 1.0).abs() < EPS);

    // Exact heuristic: the plan is a prefix of an optimal path to the goal.
    let optimum = truth.distance(&start, &goal);
    assert!((optimum - 6.0).abs() < EPS);
    assert!((plan.cost() + truth.distance(&end, &goal) - optimum).abs() < EPS);
}

/// Full-budget guarantees for a consistent heuristic:
/// - the goal's `g` and its parent chain cost the Floyd–Warshall optimum
/// - the plan ends on the frontier minimum, so `cost + h(end)` is the optimum
/// - the plan is a shortest path to its own end
fn assert_full_budget_plan<H>(
    planner: &LssLrtaPlanner<GridWorld, H>,
    world: &GridWorld,
    plan: &Plan<Cell>,
    truth: &AllPairs<Cell>,
    (start, goal): (Cell, Cell),
    tolerance: f64,
) where
    H: DistanceHeuristic<GridWorld>,
{
    let optimum = truth.distance(&start, &goal);
    let session = planner.session();
    let goal_id = session.goal_id().unwrap();
    assert!((session.record(goal_id).unwrap().g().value() - optimum).abs() < tolerance);

    let chain = extract_path(session.registry(), session.start_id().unwrap(), goal_id).unwrap();
    assert_eq!(chain.start(), Some(&start));
    assert_eq!(chain.end(), Some(&goal));
    assert!((chain.cost() - optimum).abs() < tolerance);
    assert!((chain.recomputed_cost(world) - optimum).abs() < tolerance);

    let end = plan.end().unwrap();
    assert_eq!(plan.start(), Some(&start));
    let h_end = planner.heuristics().estimate(world, end, &goal);
    assert!(
        (plan.cost() + h_end - optimum).abs() < tolerance,
        "cost {} + h {} vs optimum {}",
        plan.cost(),
        h_end,
        optimum
    );
    assert!((plan.cost() - truth.distance(&start, end)).abs() < tolerance);
    assert!((plan.recomputed_cost(world) - plan.cost()).abs() < tolerance);
}
