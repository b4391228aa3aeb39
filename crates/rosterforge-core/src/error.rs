//! Error types for RosterForge

use thiserror::Error;

use crate::nurse::NurseId;
use crate::shift::{ShiftId, SkillId};

/// Consistency errors raised while building or mutating the roster model.
///
/// These signal a data-loading or programming defect. Constraint violations
/// found while evaluating a roster are never reported through this type:
/// they are recorded as costs and flags in the evaluation reports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Position preprocessing was requested on a scenario that already has positions.
    #[error("positions were already built for this scenario ({count} positions)")]
    PositionsAlreadyBuilt { count: usize },

    /// A nurse's skill-set matches none of the discovered positions.
    #[error("nurse {nurse} ({name}) matches no position")]
    NurseWithoutPosition { nurse: NurseId, name: String },

    /// The initial-state vector does not hold one state per nurse.
    #[error("expected {expected} initial states, found {found}")]
    InitialStateCount { expected: usize, found: usize },

    /// A day index falls outside the planning horizon.
    #[error("day {day} is outside the horizon [{first_day}, {first_day} + {nb_days})")]
    DayOutsideHorizon {
        day: usize,
        first_day: usize,
        nb_days: usize,
    },

    /// A shift id does not exist in the shift graph.
    #[error("unknown shift {shift} (scenario has {nb_shifts} shifts)")]
    UnknownShift { shift: ShiftId, nb_shifts: usize },

    /// A skill id does not exist in the scenario.
    #[error("unknown skill {skill} (scenario has {nb_skills} skills)")]
    UnknownSkill { skill: SkillId, nb_skills: usize },

    /// A nurse references a contract that does not exist.
    #[error("nurse {nurse} references unknown contract {contract}")]
    UnknownContract { nurse: NurseId, contract: usize },

    /// Two pieces of data disagree on a dimension.
    #[error("{what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Any other inconsistency in the scenario data.
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
}

/// Result type alias for RosterForge operations
pub type Result<T> = std::result::Result<T, RosterError>;
