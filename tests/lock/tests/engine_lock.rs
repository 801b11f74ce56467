//! Engine lock tests: exhaustion reporting, zero-length paths, visit
//! counting, and cross-run determinism observed at the artifact level.

use drover_harness::report::{report_bytes, SolutionReportV1};
use drover_harness::runner::run_sheep_pen;
use drover_search::search::BestFirstSearch;
use lock_tests::{pen_state, stock_settings, StuckWorld};

#[test]
fn stuck_world_reports_exhaustion() {
    let mut engine = BestFirstSearch::new(StuckWorld { goal: 9 });
    assert!(engine.search(0).is_none());
    assert_eq!(
        engine.nodes_visited(),
        1,
        "only the start state is reachable"
    );
    assert_eq!(engine.stats().explored_count, 1);
    assert_eq!(engine.stats().nodes_generated, 0);
}

#[test]
fn stuck_world_goal_at_start_still_solves() {
    let mut engine = BestFirstSearch::new(StuckWorld { goal: 9 });
    let path = engine.search(9).expect("start satisfies the goal");
    assert!(path.is_empty());
    assert_eq!(path.total_cost, 0);
    assert_eq!(engine.nodes_visited(), 1);
}

#[test]
fn exhausted_pen_world_visits_each_reachable_state_once() {
    // With all-or-nothing group moves, only {(0,0), (2,0), (0,2), (2,2)}
    // are reachable; (1,0) is a valid state but no move produces it.
    let settings = stock_settings(2, 2);
    let start = pen_state(0, 0, &settings);
    let goal = pen_state(1, 0, &settings);
    let run = run_sheep_pen("unreachable", settings, start, goal).unwrap();

    assert!(run.solution.is_none());
    assert_eq!(run.stats.nodes_visited, 4);
    assert_eq!(run.stats.explored_count, 4);
}

#[test]
fn search_determinism_inproc_n10() {
    let run = || {
        let settings = stock_settings(9, 15);
        let start = pen_state(0, 0, &settings);
        let goal = pen_state(0, 12, &settings);
        run_sheep_pen("basic", settings, start, goal).unwrap()
    };

    let first = run();
    let first_bytes = report_bytes(&SolutionReportV1::from_run(&first)).unwrap();

    for _ in 1..10 {
        let other = run();
        assert_eq!(other.stats, first.stats, "run counters differ across runs");
        let other_bytes = report_bytes(&SolutionReportV1::from_run(&other)).unwrap();
        assert_eq!(first_bytes, other_bytes, "report bytes differ across runs");
    }
}
