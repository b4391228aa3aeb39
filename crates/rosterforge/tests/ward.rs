//! End-to-end evaluation of the ward fixture through the facade.

use rosterforge::prelude::*;
use rosterforge::Constraint;
use rosterforge_test::ward::{self, EARLY, HEAD_NURSE, LATE, NURSE};

fn solution<'a>(
    scenario: &'a Scenario,
    demand: &'a Demand,
    preferences: &'a Preferences,
) -> RosterSolution<'a> {
    let initial = vec![NurseState::default(); scenario.nb_nurses()];
    RosterSolution::new(scenario, demand, preferences, &initial, RosterConfig::default()).unwrap()
}

#[test]
fn test_all_rest_misses_every_minimum() {
    let scenario = ward::scenario();
    let demand = ward::demand();
    let preferences = Preferences::new(scenario.nb_nurses());
    let mut solution = solution(&scenario, &demand, &preferences);

    let evaluation = solution.evaluate().unwrap();
    assert_eq!(evaluation.min_cover_violations, 14);
    assert!(!evaluation.is_feasible());
    assert_eq!(evaluation.score.hard(), -14);
}

#[test]
fn test_covering_minimums_is_feasible() {
    let scenario = ward::scenario();
    let demand = ward::demand();
    let preferences = Preferences::new(scenario.nb_nurses());
    let mut solution = solution(&scenario, &demand, &preferences);

    for day in 0..7 {
        solution.assign(0, day, EARLY, HEAD_NURSE).unwrap();
        solution.assign(1, day, LATE, NURSE).unwrap();
    }

    let breakdown = solution.breakdown().unwrap();
    assert_eq!(breakdown.hard_violations(), 0);
    assert_eq!(breakdown.get(Constraint::MinimumCoverage), 0);
    // One nurse short of the optimum on every Late shift.
    assert_eq!(breakdown.get(Constraint::OptimalCoverage), 7 * 30);
    assert!(breakdown.score.is_feasible());

    let log = solution.to_log_string().unwrap();
    assert!(log.starts_with("Complete shift schedule"));
    assert!(log.contains("Alice"));
}

#[test]
fn test_final_states_chain_into_next_week() {
    let scenario = ward::scenario();
    let demand = ward::demand();
    let preferences = Preferences::new(scenario.nb_nurses());
    let mut solution = solution(&scenario, &demand, &preferences);

    solution.assign(1, 6, LATE, NURSE).unwrap();
    solution.evaluate().unwrap();
    let states = solution.final_states();

    assert_eq!(states.len(), 4);
    assert_eq!(states[1].shift, LATE);
    assert_eq!(states[1].cons_days_worked, 1);
    assert_eq!(states[0].cons_days_off, 7);
}
