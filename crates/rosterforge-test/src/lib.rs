//! Shared test fixtures for RosterForge crates.
//!
//! This crate only depends on `rosterforge-core`, so `rosterforge-scoring`
//! can take it as a dev-dependency.
//!
//! - [`day_shift`] - one working shift, one skill, one nurse
//! - [`ward`] - three shifts with forbidden successions and a mixed staff
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! rosterforge-test = { workspace = true }
//! ```

pub mod day_shift;
pub mod ward;

use rosterforge_core::{Contract, NurseState, ShiftId};

/// History of a nurse that worked `days` consecutive days of `shift`.
pub fn worked_history(shift: ShiftId, days: u32) -> NurseState {
    NurseState::after_work(shift, days, days, days, 0)
}

/// History of a nurse that rested `days` consecutive days.
pub fn rested_history(days: u32) -> NurseState {
    NurseState::after_rest(days, 0, 0)
}

/// Contract with every bound relaxed except consecutive days off.
pub fn rest_contract(min_off: u32, max_off: u32) -> Contract {
    Contract::unbounded("Rest").with_cons_days_off(min_off, max_off)
}
