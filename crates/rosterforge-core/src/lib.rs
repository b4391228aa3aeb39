//! RosterForge Core - domain model for nurse rostering
//!
//! This crate provides the static and temporal building blocks:
//! - Shift types and the forbidden-succession graph
//! - Contracts, nurses and the [`Scenario`] that owns them
//! - Per-day nurse states and their propagation
//! - Rosters, demand grids and shift-off preferences
//! - Positions: skill-set dominance, ranks and connected components
//! - The [`RosterScore`] used to compare rosters

pub mod calendar;
pub mod contract;
pub mod demand;
pub mod error;
pub mod grid;
pub mod nurse;
pub mod position;
pub mod preferences;
pub mod roster;
pub mod scenario;
pub mod score;
pub mod shift;
pub mod state;

pub use contract::Contract;
pub use demand::Demand;
pub use error::{Result, RosterError};
pub use grid::Grid3;
pub use nurse::{ContractId, Nurse, NurseId};
pub use position::{
    Component, ComponentId, Dominance, Position, PositionBuilder, PositionId, Positions,
};
pub use preferences::{Preferences, WishedOff};
pub use roster::{Assignment, Roster};
pub use scenario::{Scenario, ScenarioBuilder};
pub use score::RosterScore;
pub use shift::{is_working, ShiftGraph, ShiftId, SkillId, REST};
pub use state::{propagate, NurseState};
