mod evaluator;
mod live;
mod staffing;

use rosterforge_config::Weights;
use rosterforge_core::{
    propagate, Assignment, NurseState, Preferences, Roster, Scenario, ShiftId, REST,
};

use crate::checker::{ConstraintChecker, NurseInput};
use crate::report::NurseReport;

/// Roster from day 0 where every working day uses skill 0.
fn roster(shifts: &[ShiftId]) -> Roster {
    Roster::from_assignments(
        0,
        shifts
            .iter()
            .map(|&s| if s == REST { Assignment::REST } else { Assignment::work(s, 0) })
            .collect(),
    )
}

/// Checks nurse 0 of `scenario` with default weights.
fn check_first(
    scenario: &Scenario,
    initial: NurseState,
    roster: &Roster,
    preferences: Option<&Preferences>,
) -> NurseReport {
    let weights = Weights::default();
    let nurse = &scenario.nurses()[0];
    let states = propagate(initial, roster.first_day(), &roster.shifts());
    let input = NurseInput {
        nurse,
        contract: scenario.contract_of(0).unwrap(),
        roster,
        states: &states,
        wishes: preferences.and_then(|p| p.nurse_wishes(0)),
    };
    ConstraintChecker::new(scenario.shifts(), &weights)
        .report(&input)
        .unwrap()
}
