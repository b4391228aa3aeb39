//! Smallest useful scenario: rest plus a single "Day" shift.

use rosterforge_core::{Contract, Demand, Nurse, Scenario, ShiftGraph, ShiftId, SkillId};

pub const DAY: ShiftId = 1;
pub const NURSE: SkillId = 0;

/// Shift graph with "Day" repeated between 2 and 4 times in a row.
pub fn shifts() -> ShiftGraph {
    let mut shifts = ShiftGraph::new();
    shifts.add_shift("Day", 2, 4);
    shifts
}

/// One nurse (id 0, "Ann") with the single skill, under `contract`.
pub fn scenario(contract: Contract) -> Scenario {
    staffed_scenario(contract, 1)
}

/// `nb_nurses` identical nurses under `contract`.
pub fn staffed_scenario(contract: Contract, nb_nurses: usize) -> Scenario {
    let nurses = (0..nb_nurses).map(|id| Nurse::new(id, format!("N{}", id), [NURSE], 0));
    match Scenario::builder("day-shift")
        .skill("Nurse")
        .shifts(shifts())
        .contract(contract)
        .nurses(nurses)
        .build()
    {
        Ok(scenario) => scenario,
        Err(e) => panic!("day-shift fixture is invalid: {}", e),
    }
}

/// All-zero demand starting on day 0.
pub fn empty_demand(nb_days: usize) -> Demand {
    Demand::new("empty", 0, nb_days, 2, 1)
}
