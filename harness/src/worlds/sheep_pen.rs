//! Sheep-pen world: a shepherd moves sheep between an unbounded field and
//! two capacity-limited pens.
//!
//! Moves always transfer the maximum possible group: filling a pen tops
//! it up to capacity from the field, emptying returns every sheep to the
//! field, and a pen-to-pen transfer moves `min(source count, free
//! capacity)`. Each move costs a per-sheep rate times the group size.
//!
//! The heuristic is the misplaced-sheep count times the cheapest
//! per-sheep rate — a lower bound on the remaining cost, so the engine's
//! optimality guarantee applies.

use std::fmt;

use drover_search::contract::{SearchAction, SearchSpace};

use crate::contract::WorldError;

/// Pen capacities and per-sheep movement rates.
///
/// Immutable once constructed; each world instance holds its own copy,
/// so independent problem instances cannot interfere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenSettings {
    a_max: u32,
    b_max: u32,
    cost_field_to_pen: i64,
    cost_pen_to_pen: i64,
    cost_pen_to_field: i64,
}

impl PenSettings {
    /// Validate and construct settings.
    ///
    /// # Errors
    ///
    /// [`WorldError::InvalidSettings`] if either capacity is zero;
    /// [`WorldError::InvalidCost`] if any per-sheep rate is negative.
    pub fn new(
        a_max: u32,
        b_max: u32,
        cost_field_to_pen: i64,
        cost_pen_to_pen: i64,
        cost_pen_to_field: i64,
    ) -> Result<Self, WorldError> {
        if a_max == 0 {
            return Err(WorldError::InvalidSettings {
                detail: "pen A capacity must be > 0".into(),
            });
        }
        if b_max == 0 {
            return Err(WorldError::InvalidSettings {
                detail: "pen B capacity must be > 0".into(),
            });
        }
        for (name, cost) in [
            ("field_to_pen", cost_field_to_pen),
            ("pen_to_pen", cost_pen_to_pen),
            ("pen_to_field", cost_pen_to_field),
        ] {
            if cost < 0 {
                return Err(WorldError::InvalidCost {
                    detail: format!("per-sheep cost {name} must be >= 0, got {cost}"),
                });
            }
        }
        Ok(Self {
            a_max,
            b_max,
            cost_field_to_pen,
            cost_pen_to_pen,
            cost_pen_to_field,
        })
    }

    /// Capacity of pen A.
    #[must_use]
    pub fn a_max(&self) -> u32 {
        self.a_max
    }

    /// Capacity of pen B.
    #[must_use]
    pub fn b_max(&self) -> u32 {
        self.b_max
    }

    /// The cheapest per-sheep rate across all move kinds.
    #[must_use]
    pub fn min_cost_per_sheep(&self) -> i64 {
        self.cost_field_to_pen
            .min(self.cost_pen_to_pen)
            .min(self.cost_pen_to_field)
    }
}

/// How many sheep are in each pen. The field is implicit and unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PenState {
    a: u32,
    b: u32,
}

impl PenState {
    /// Validate a state against the pen capacities.
    ///
    /// # Errors
    ///
    /// [`WorldError::InvalidState`] if either count exceeds its capacity.
    pub fn new(a: u32, b: u32, settings: &PenSettings) -> Result<Self, WorldError> {
        if a > settings.a_max {
            return Err(WorldError::InvalidState {
                detail: format!("pen A count {a} exceeds capacity {}", settings.a_max),
            });
        }
        if b > settings.b_max {
            return Err(WorldError::InvalidState {
                detail: format!("pen B count {b} exceeds capacity {}", settings.b_max),
            });
        }
        Ok(Self { a, b })
    }

    /// Sheep in pen A.
    #[must_use]
    pub fn pen_a(self) -> u32 {
        self.a
    }

    /// Sheep in pen B.
    #[must_use]
    pub fn pen_b(self) -> u32 {
        self.b
    }
}

impl fmt::Display for PenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pen A: {} | Pen B: {}", self.a, self.b)
    }
}

/// The six move shapes a shepherd can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    FieldToPenA,
    FieldToPenB,
    PenAToField,
    PenBToField,
    PenAToPenB,
    PenBToPenA,
}

impl MoveKind {
    /// Human-readable description of the move.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::FieldToPenA => "Moving sheep from the field to Pen A",
            Self::FieldToPenB => "Moving sheep from the field to Pen B",
            Self::PenAToField => "Moving sheep from Pen A to the field",
            Self::PenBToField => "Moving sheep from Pen B to the field",
            Self::PenAToPenB => "Moving sheep from Pen A to Pen B",
            Self::PenBToPenA => "Moving sheep from Pen B to Pen A",
        }
    }
}

/// One shepherd move: a kind, the group size it moves, and its total cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheepMove {
    kind: MoveKind,
    moved: u32,
    cost: i64,
}

impl SheepMove {
    fn new(kind: MoveKind, moved: u32, per_sheep_cost: i64) -> Self {
        Self {
            kind,
            moved,
            cost: i64::from(moved) * per_sheep_cost,
        }
    }

    /// The move shape.
    #[must_use]
    pub fn kind(self) -> MoveKind {
        self.kind
    }

    /// Number of sheep this move transfers.
    #[must_use]
    pub fn moved(self) -> u32 {
        self.moved
    }
}

impl SearchAction for SheepMove {
    fn cost(&self) -> i64 {
        self.cost
    }
}

impl fmt::Display for SheepMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. Cost: {}", self.kind.description(), self.cost)
    }
}

/// The two-pen herding domain: settings plus a goal state.
#[derive(Debug, Clone)]
pub struct SheepPenWorld {
    settings: PenSettings,
    goal: PenState,
}

impl SheepPenWorld {
    /// Construct a world, revalidating the goal against these settings.
    ///
    /// # Errors
    ///
    /// [`WorldError::InvalidState`] if the goal does not fit the pens.
    pub fn new(settings: PenSettings, goal: PenState) -> Result<Self, WorldError> {
        let goal = PenState::new(goal.a, goal.b, &settings)?;
        Ok(Self { settings, goal })
    }

    /// Unique world identifier.
    #[must_use]
    pub fn world_id(&self) -> &'static str {
        "sheep_pen"
    }

    /// The settings this world was built with.
    #[must_use]
    pub fn settings(&self) -> &PenSettings {
        &self.settings
    }

    /// The goal state.
    #[must_use]
    pub fn goal(&self) -> PenState {
        self.goal
    }
}

impl SearchSpace for SheepPenWorld {
    type State = PenState;
    type Action = SheepMove;

    fn successors(&self, state: &PenState) -> Vec<(SheepMove, PenState)> {
        let s = &self.settings;
        let mut moves = Vec::with_capacity(6);

        // Fill pen A to capacity from the field.
        if state.a < s.a_max {
            let moved = s.a_max - state.a;
            moves.push((
                SheepMove::new(MoveKind::FieldToPenA, moved, s.cost_field_to_pen),
                PenState {
                    a: s.a_max,
                    b: state.b,
                },
            ));
        }

        // Fill pen B to capacity from the field.
        if state.b < s.b_max {
            let moved = s.b_max - state.b;
            moves.push((
                SheepMove::new(MoveKind::FieldToPenB, moved, s.cost_field_to_pen),
                PenState {
                    a: state.a,
                    b: s.b_max,
                },
            ));
        }

        // Empty pen A back to the field.
        if state.a > 0 {
            moves.push((
                SheepMove::new(MoveKind::PenAToField, state.a, s.cost_pen_to_field),
                PenState { a: 0, b: state.b },
            ));
        }

        // Empty pen B back to the field.
        if state.b > 0 {
            moves.push((
                SheepMove::new(MoveKind::PenBToField, state.b, s.cost_pen_to_field),
                PenState { a: state.a, b: 0 },
            ));
        }

        // Transfer from pen A to pen B, as many as fit.
        if state.a > 0 && state.b < s.b_max {
            let moved = state.a.min(s.b_max - state.b);
            moves.push((
                SheepMove::new(MoveKind::PenAToPenB, moved, s.cost_pen_to_pen),
                PenState {
                    a: state.a - moved,
                    b: state.b + moved,
                },
            ));
        }

        // Transfer from pen B to pen A, as many as fit.
        if state.b > 0 && state.a < s.a_max {
            let moved = state.b.min(s.a_max - state.a);
            moves.push((
                SheepMove::new(MoveKind::PenBToPenA, moved, s.cost_pen_to_pen),
                PenState {
                    a: state.a + moved,
                    b: state.b - moved,
                },
            ));
        }

        moves
    }

    fn is_goal(&self, state: &PenState) -> bool {
        *state == self.goal
    }

    fn heuristic(&self, state: &PenState) -> i64 {
        let misplaced =
            i64::from(state.a.abs_diff(self.goal.a)) + i64::from(state.b.abs_diff(self.goal.b));
        misplaced * self.settings.min_cost_per_sheep()
    }
}
