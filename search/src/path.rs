//! Solution path: the only artifact that outlives a search run.
//!
//! Steps are copied out of the arena into a flat list during
//! reconstruction, so the returned path does not retain the search tree.

/// One step of a solution: the action taken and the state it led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep<S, A> {
    /// The action taken from the previous state.
    pub action: A,
    /// The state reached by taking `action`.
    pub state: S,
}

/// A reconstructed minimum-cost path from a start state to a goal state.
///
/// Invariant: `total_cost` equals the sum of the step action costs and
/// equals the `g_cost` of the goal node that produced it. The first step
/// corresponds to the action taken from `start`; an empty step list means
/// the start state already satisfied the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionPath<S, A> {
    /// The state the search started from.
    pub start: S,
    /// Ordered (action, state) steps from `start` to the goal.
    pub steps: Vec<PathStep<S, A>>,
    /// Sum of the step action costs.
    pub total_cost: i64,
}

impl<S, A> SolutionPath<S, A> {
    /// Number of steps (actions taken).
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the start state already satisfied the goal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The final state of the path (`start` if no steps were taken).
    #[must_use]
    pub fn final_state(&self) -> &S {
        self.steps.last().map_or(&self.start, |step| &step.state)
    }
}
