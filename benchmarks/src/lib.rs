//! Shared helpers for the drover benchmark suite.

#![forbid(unsafe_code)]

use drover_harness::worlds::sheep_pen::{PenSettings, PenState, SheepPenWorld};

/// Prepared inputs for a sheep-pen search benchmark.
pub struct PenProblem {
    /// The world to search.
    pub world: SheepPenWorld,
    /// The start state.
    pub start: PenState,
}

/// The classic basic problem: caps (9, 15), rates (60, 30, 5),
/// (0, 0) → (0, 12).
///
/// # Panics
///
/// Panics if the fixture settings are rejected. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn basic_problem() -> PenProblem {
    let settings = PenSettings::new(9, 15, 60, 30, 5).expect("stock settings are valid");
    let start = PenState::new(0, 0, &settings).expect("start fits the pens");
    let goal = PenState::new(0, 12, &settings).expect("goal fits the pens");
    let world = SheepPenWorld::new(settings, goal).expect("goal matches settings");
    PenProblem { world, start }
}

/// The basic problem scaled by six for macro timing: caps (54, 90),
/// same rates, (0, 0) → (0, 72).
///
/// # Panics
///
/// Panics if the fixture settings are rejected.
#[must_use]
pub fn large_problem() -> PenProblem {
    let settings = PenSettings::new(54, 90, 60, 30, 5).expect("stock settings are valid");
    let start = PenState::new(0, 0, &settings).expect("start fits the pens");
    let goal = PenState::new(0, 72, &settings).expect("goal fits the pens");
    let world = SheepPenWorld::new(settings, goal).expect("goal matches settings");
    PenProblem { world, start }
}
