//! Search entry point and expansion loop.
//!
//! Standard A* graph search with lazy deletion: the frontier may hold
//! several entries for one state; the first accepted pop marks the state
//! explored and every later pop of it is discarded. With an admissible
//! heuristic the first goal popped is minimum-cost; with a consistent
//! heuristic no state ever needs re-expansion, which is exactly the
//! policy implemented here (successors of explored states are skipped
//! without comparing costs).

use crate::contract::{SearchAction, SearchSpace};
use crate::explored::ExploredSet;
use crate::frontier::BestFirstFrontier;
use crate::node::{NodeId, SearchNode};
use crate::path::{PathStep, SolutionPath};

/// Run counters for one search call, readable after (or for the final
/// values, instead of) a returned path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Pops that survived the stale-duplicate check: the root, every
    /// expanded state, and the goal. For an exhausted space this equals
    /// the number of distinct reachable states.
    pub nodes_visited: u64,
    /// Child nodes pushed onto the frontier.
    pub nodes_generated: u64,
    /// Stale frontier entries discarded at pop time (lazy deletion).
    pub duplicates_discarded: u64,
    /// High-water mark of frontier size.
    pub frontier_high_water: u64,
    /// Distinct states marked explored.
    pub explored_count: u64,
}

/// Best-first (A*) search engine over a domain's [`SearchSpace`].
///
/// Single-threaded and synchronous: `search` runs to completion or
/// exhaustion within one call, constructing fresh frontier and explored
/// structures each time. The engine imposes no budget; a caller wanting
/// bounded search wraps the call, it is not a core guarantee.
#[derive(Debug)]
pub struct BestFirstSearch<P: SearchSpace> {
    space: P,
    stats: SearchStats,
}

impl<P: SearchSpace> BestFirstSearch<P> {
    /// Create an engine for the given domain.
    #[must_use]
    pub fn new(space: P) -> Self {
        Self {
            space,
            stats: SearchStats::default(),
        }
    }

    /// The domain this engine searches.
    #[must_use]
    pub fn space(&self) -> &P {
        &self.space
    }

    /// Counters from the most recent `search` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Accepted frontier pops in the most recent `search` call.
    #[must_use]
    pub fn nodes_visited(&self) -> u64 {
        self.stats.nodes_visited
    }

    /// Search for a minimum-cost path from `start` to any goal state.
    ///
    /// Returns `None` when the frontier is exhausted without reaching a
    /// goal — a normal outcome, not a failure. A cyclic or infinite
    /// successor graph with inexhaustible distinct states will not
    /// terminate; termination is only guaranteed for finite reachable
    /// state sets.
    pub fn search(&mut self, start: P::State) -> Option<SolutionPath<P::State, P::Action>> {
        self.stats = SearchStats::default();

        let mut arena: Vec<SearchNode<P::State, P::Action>> = Vec::new();
        let mut frontier = BestFirstFrontier::new();
        let mut explored: ExploredSet<P::State> = ExploredSet::new();
        let mut next_insertion_order: u64 = 0;

        let root_h = self.space.heuristic(&start);
        let root = SearchNode {
            node_id: 0,
            parent_id: None,
            state: start,
            producing_action: None,
            depth: 0,
            g_cost: 0,
            h_cost: root_h,
            insertion_order: next_insertion_order,
        };
        next_insertion_order += 1;
        frontier.push(root.frontier_key(), root.node_id);
        arena.push(root);

        let result = loop {
            let Some(node_id) = frontier.pop() else {
                // Frontier exhausted: no goal is reachable.
                break None;
            };

            if explored.contains(&arena[node_id].state) {
                // Stale duplicate left behind by lazy deletion.
                self.stats.duplicates_discarded += 1;
                continue;
            }
            self.stats.nodes_visited += 1;

            if self.space.is_goal(&arena[node_id].state) {
                break Some(reconstruct_path(&arena, node_id));
            }

            explored.mark(arena[node_id].state.clone());

            let (current_state, g_cost, depth) = {
                let node = &arena[node_id];
                (node.state.clone(), node.g_cost, node.depth)
            };
            for (action, child_state) in self.space.successors(&current_state) {
                if explored.contains(&child_state) {
                    continue;
                }
                let step_cost = action.cost();
                let child_h = self.space.heuristic(&child_state);
                let child = SearchNode {
                    node_id: arena.len(),
                    parent_id: Some(node_id),
                    state: child_state,
                    producing_action: Some(action),
                    depth: depth + 1,
                    g_cost: g_cost + step_cost,
                    h_cost: child_h,
                    insertion_order: next_insertion_order,
                };
                next_insertion_order += 1;
                frontier.push(child.frontier_key(), child.node_id);
                arena.push(child);
                self.stats.nodes_generated += 1;
            }
        };

        self.stats.frontier_high_water = frontier.high_water();
        self.stats.explored_count = explored.len() as u64;
        result
    }
}

/// Reconstruct the path from the root to `goal_id` by walking parent
/// links, O(depth).
///
/// Steps are reversed before being returned so the first element is the
/// action taken from the start state. The summed step cost must equal the
/// goal node's `g_cost`; a mismatch is an engine defect, not a domain
/// error.
#[must_use]
pub fn reconstruct_path<S, A>(arena: &[SearchNode<S, A>], goal_id: NodeId) -> SolutionPath<S, A>
where
    S: Clone,
    A: SearchAction + Clone,
{
    let mut steps = Vec::with_capacity(arena[goal_id].depth as usize);
    let mut total_cost: i64 = 0;

    let mut cursor = &arena[goal_id];
    while let (Some(parent_id), Some(action)) = (cursor.parent_id, cursor.producing_action.as_ref())
    {
        total_cost += action.cost();
        steps.push(PathStep {
            action: action.clone(),
            state: cursor.state.clone(),
        });
        cursor = &arena[parent_id];
    }
    steps.reverse();

    debug_assert_eq!(
        total_cost, arena[goal_id].g_cost,
        "reconstructed path cost must equal the goal node's g_cost"
    );

    SolutionPath {
        start: cursor.state.clone(),
        steps,
        total_cost,
    }
}
