//! Scenario runner: wires a world to the engine and captures the result.

use drover_search::path::SolutionPath;
use drover_search::search::{BestFirstSearch, SearchStats};

use crate::contract::WorldError;
use crate::worlds::sheep_pen::{PenSettings, PenState, SheepMove, SheepPenWorld};

/// One completed engine run with its identifying labels and counters.
#[derive(Debug, Clone)]
pub struct ScenarioRun {
    /// World identifier (`"sheep_pen"`).
    pub world_id: &'static str,
    /// Scenario label, e.g. `"basic"`.
    pub scenario: String,
    /// The state the search started from.
    pub start: PenState,
    /// The found path, or `None` when the state space was exhausted.
    pub solution: Option<SolutionPath<PenState, SheepMove>>,
    /// Engine counters for this run.
    pub stats: SearchStats,
}

/// Build a sheep-pen world and search it from `start`.
///
/// # Errors
///
/// Propagates [`WorldError`] from world construction unchanged; the run
/// itself cannot fail (an exhausted space is a `None` solution, not an
/// error).
pub fn run_sheep_pen(
    scenario: &str,
    settings: PenSettings,
    start: PenState,
    goal: PenState,
) -> Result<ScenarioRun, WorldError> {
    let world = SheepPenWorld::new(settings, goal)?;
    let world_id = world.world_id();
    let mut engine = BestFirstSearch::new(world);
    let solution = engine.search(start);
    Ok(ScenarioRun {
        world_id,
        scenario: scenario.to_string(),
        start,
        solution,
        stats: *engine.stats(),
    })
}

/// Run the stock scenarios in a fixed order.
///
/// These mirror the classic problem set: the general and basic herding
/// problems, an oversized-pen instance with no reachable goal, a
/// start-equals-goal instance, emptying both pens, and moving a full
/// pen A into pen B.
///
/// # Errors
///
/// Propagates [`WorldError`] from any scenario's construction.
pub fn stock_scenarios() -> Result<Vec<ScenarioRun>, WorldError> {
    let mut runs = Vec::new();

    let settings = PenSettings::new(10, 7, 60, 30, 5)?;
    runs.push(run_sheep_pen(
        "general",
        settings.clone(),
        PenState::new(0, 0, &settings)?,
        PenState::new(0, 5, &settings)?,
    )?);

    let settings = PenSettings::new(9, 15, 60, 30, 5)?;
    runs.push(run_sheep_pen(
        "basic",
        settings.clone(),
        PenState::new(0, 0, &settings)?,
        PenState::new(0, 12, &settings)?,
    )?);

    // Group moves always fill or drain completely, so (50, 50) is
    // unreachable from empty pens: this scenario reports no solution.
    let settings = PenSettings::new(100, 100, 60, 30, 5)?;
    runs.push(run_sheep_pen(
        "extreme_large_pens",
        settings.clone(),
        PenState::new(0, 0, &settings)?,
        PenState::new(50, 50, &settings)?,
    )?);

    let settings = PenSettings::new(10, 10, 60, 30, 5)?;
    runs.push(run_sheep_pen(
        "no_movement_needed",
        settings.clone(),
        PenState::new(3, 7, &settings)?,
        PenState::new(3, 7, &settings)?,
    )?);

    let settings = PenSettings::new(5, 5, 60, 30, 5)?;
    runs.push(run_sheep_pen(
        "full_to_empty",
        settings.clone(),
        PenState::new(5, 5, &settings)?,
        PenState::new(0, 0, &settings)?,
    )?);

    let settings = PenSettings::new(10, 15, 60, 30, 5)?;
    runs.push(run_sheep_pen(
        "all_from_a_to_b",
        settings.clone(),
        PenState::new(10, 0, &settings)?,
        PenState::new(0, 10, &settings)?,
    )?);

    Ok(runs)
}
