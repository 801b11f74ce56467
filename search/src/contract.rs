//! Search space contract traits.

use std::fmt;
use std::hash::Hash;

/// An action a domain can take, carrying its non-negative cost.
///
/// Costs are integers in a single domain-chosen unit shared with the
/// heuristic. A negative cost voids the engine's optimality guarantees;
/// domains must reject it at construction time — the engine does not
/// defend against it.
pub trait SearchAction {
    /// The cost of taking this action. Must be `>= 0`.
    fn cost(&self) -> i64;
}

/// The capability contract a domain must satisfy to be searched.
///
/// # Contract
///
/// - `State` equality and hashing must agree: equal states hash equal.
///   Two states are interchangeable for search purposes iff equal.
/// - `successors` must be finite, deterministic (same state → same
///   actions in the same order), and must not mutate the input state.
/// - `heuristic` must be `>= 0` and share the cost unit of `Action`.
///   If it never overestimates the true remaining cost (admissible),
///   the first goal popped is minimum-cost.
pub trait SearchSpace {
    /// Immutable domain state. Equality + hash define state identity.
    type State: Clone + Eq + Hash + fmt::Debug;

    /// Domain action with a non-negative cost.
    type Action: SearchAction + Clone + fmt::Debug;

    /// Enumerate all actions applicable in `state`, paired with the
    /// state each one leads to.
    fn successors(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    /// Test whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimated remaining cost from `state` to any goal.
    ///
    /// Defaults to `0`, which degrades the engine to uniform-cost
    /// search (always admissible).
    fn heuristic(&self, state: &Self::State) -> i64 {
        let _ = state;
        0
    }
}
