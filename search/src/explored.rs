//! Explored (closed) set: states already expanded.
//!
//! Keyed by state identity (equality + hash). States are marked only when
//! a node is popped and accepted for expansion, never on push — standard
//! A* graph search. The set is never iterated, so `HashSet` order cannot
//! leak into expansion order.

use std::collections::HashSet;
use std::hash::Hash;

/// Record of states already expanded during one search run.
#[derive(Debug)]
pub struct ExploredSet<S> {
    states: HashSet<S>,
}

impl<S: Eq + Hash> ExploredSet<S> {
    /// Create a new empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Whether `state` has already been expanded.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Mark `state` as expanded. Returns `false` if it was already marked.
    pub fn mark(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    /// Number of distinct states expanded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no state has been expanded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Eq + Hash> Default for ExploredSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
