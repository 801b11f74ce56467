//! Arena search node and frontier ordering key.

/// Index of a node in the engine's arena.
///
/// Nodes are owned by the arena for the duration of one search run; a
/// node's parent is an index lookup, never an owning edge, so the parent
/// chain can be walked after the frontier is drained.
pub type NodeId = usize;

/// An immutable node in the search tree.
///
/// Invariants: `g_cost` equals the sum of action costs along the parent
/// chain from the root; `depth` equals the chain length.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Arena index of this node.
    pub node_id: NodeId,
    /// Arena index of the parent (`None` for the root).
    pub parent_id: Option<NodeId>,
    /// Full immutable state at this node.
    pub state: S,
    /// The action that produced this node from its parent (`None` for
    /// the root).
    pub producing_action: Option<A>,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Accumulated path cost from the root.
    pub g_cost: i64,
    /// Heuristic estimate at this node's state, captured at creation.
    pub h_cost: i64,
    /// Global push counter for deterministic FIFO tie-breaking.
    pub insertion_order: u64,
}

impl<S, A> SearchNode<S, A> {
    /// Compute `f = g + h`, the frontier ordering key.
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.g_cost.saturating_add(self.h_cost)
    }

    /// The frontier key for this node.
    #[must_use]
    pub fn frontier_key(&self) -> FrontierKey {
        FrontierKey {
            f_cost: self.f_cost(),
            insertion_order: self.insertion_order,
        }
    }
}

/// The frontier ordering key: `(f_cost, insertion_order)`.
///
/// Lower `f_cost` first; ties broken by older `insertion_order`
/// (earlier-pushed nodes dequeue first), making expansion order
/// reproducible regardless of the underlying heap implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: i64,
    pub insertion_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.insertion_order.cmp(&other.insertion_order))
    }
}
