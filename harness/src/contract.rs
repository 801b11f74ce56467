//! Domain validation errors.
//!
//! All three variants are raised at construction time by the domain and
//! propagate unchanged to the caller: the engine treats states, actions,
//! and settings as opaque and never retries or recovers them.

/// Typed failure for domain-level validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// Problem settings violate their declared invariants (e.g. a pen
    /// capacity of zero).
    InvalidSettings { detail: String },
    /// An action cost is negative. Negative edge weights void the
    /// engine's optimality guarantees, so they are rejected up front.
    InvalidCost { detail: String },
    /// A state violates its declared invariants (e.g. more sheep in a
    /// pen than its capacity).
    InvalidState { detail: String },
}

impl std::fmt::Display for WorldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSettings { detail } => write!(f, "invalid settings: {detail}"),
            Self::InvalidCost { detail } => write!(f, "invalid cost: {detail}"),
            Self::InvalidState { detail } => write!(f, "invalid state: {detail}"),
        }
    }
}

impl std::error::Error for WorldError {}
