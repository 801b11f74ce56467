//! Drover Search: a deterministic best-first (A*) engine over an implicit,
//! lazily generated state space.
//!
//! Domains plug in by implementing [`contract::SearchSpace`]: state equality
//! and hashing, successor enumeration with per-action costs, a goal test,
//! and an optional heuristic. The engine guarantees minimum-cost solutions
//! when the heuristic never overestimates, and fully deterministic runs
//! (fixed FIFO tie-break among equal-f nodes).
//!
//! # Crate dependency graph
//!
//! ```text
//! drover_search  ←  drover_harness
//! (engine)          (worlds, runner, reports)
//! ```
//!
//! # Key types
//!
//! - [`contract::SearchSpace`] — the capability contract a domain implements
//! - [`node::SearchNode`] — arena node with deterministic frontier ordering
//! - [`frontier::BestFirstFrontier`] — min-f priority frontier, lazy deletion
//! - [`explored::ExploredSet`] — closed set keyed by state identity
//! - [`path::SolutionPath`] — the reconstructed minimum-cost path
//! - [`search::BestFirstSearch`] — the engine loop and run counters

#![forbid(unsafe_code)]

pub mod contract;
pub mod explored;
pub mod frontier;
pub mod node;
pub mod path;
pub mod search;
