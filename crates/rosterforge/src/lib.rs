//! RosterForge - Nurse Roster Evaluation in Rust
//!
//! Builds a scenario once, then scores candidate rosters against contracts,
//! preferences and demand.
//!
//! # Example
//!
//! ```rust
//! use rosterforge::prelude::*;
//!
//! let score = RosterScore::from_penalties(1, 130);
//! assert_eq!(score.to_string(), "-1hard/-130soft");
//! assert!(!score.is_feasible());
//! ```

// Domain model
pub use rosterforge_core::{
    calendar, Assignment, Component, Contract, Demand, Grid3, Nurse, NurseId, NurseState,
    Position, PositionBuilder, PositionId, Positions, Preferences, Result, Roster, RosterError,
    Scenario, ScenarioBuilder, ShiftGraph, ShiftId, SkillId, WishedOff, REST,
};

// Score types
pub use rosterforge_core::RosterScore;

// Configuration
pub use rosterforge_config::{ConfigError, EvaluationConfig, RosterConfig, Weights};

// Evaluation
pub use rosterforge_scoring::{
    Constraint, ConstraintChecker, CostBreakdown, Evaluation, Indictments, LiveNurse,
    NurseReport, RosterSolution, SolutionEvaluator, StaffingBounds,
};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        Contract, Demand, Nurse, NurseState, Preferences, RosterConfig, RosterScore,
        RosterSolution, Scenario, ShiftGraph, Weights, REST,
    };
}
