//! Best-first frontier: a min-f priority structure over arena node ids.
//!
//! `BinaryHeap` is a max-heap, so entries wrap their key in `Reverse` to
//! get min-heap behavior (lowest `f_cost` first). There is no in-place
//! priority decrease: a cheaper path to a state is a second push, and the
//! stale entry is discarded at pop time by the engine's explored-set
//! check (lazy deletion).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, NodeId};

/// A frontier entry: ordering key plus the arena index it selects.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node_id: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-f frontier over arena node ids.
#[derive(Debug)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    high_water: u64,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            high_water: 0,
        }
    }

    /// Push a node id with its ordering key.
    pub fn push(&mut self, key: FrontierKey, node_id: NodeId) {
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node_id,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the entry with the lowest `f_cost` (FIFO among equal f).
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.node_id)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size, for diagnostics.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for BestFirstFrontier {
    fn default() -> Self {
        Self::new()
    }
}
