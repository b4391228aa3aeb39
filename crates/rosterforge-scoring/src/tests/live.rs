use rosterforge_config::Weights;
use rosterforge_core::{Assignment, Contract, NurseState, Preferences, RosterError, REST};
use rosterforge_test::day_shift::{self, DAY};
use rosterforge_test::rested_history;

use crate::live::LiveNurse;

fn contract() -> Contract {
    Contract::unbounded("c")
        .with_cons_days_work(2, 3)
        .with_cons_days_off(2, 4)
}

#[test]
fn test_assignment_updates_following_states() {
    let scenario = day_shift::scenario(contract());
    let preferences = Preferences::new(1);
    let mut nurse =
        LiveNurse::new(&scenario, 0, 0, 7, NurseState::default(), &preferences).unwrap();
    assert_eq!(nurse.states().len(), 8);
    assert_eq!(nurse.final_state().cons_days_off, 7);

    nurse.set_assignment(2, DAY, 0).unwrap();
    nurse.set_assignment(3, DAY, 0).unwrap();
    assert_eq!(nurse.state_before(4).unwrap().cons_shifts, 2);
    assert_eq!(nurse.final_state().total_days_worked, 2);
    assert_eq!(nurse.final_state().cons_days_off, 3);

    nurse.set_rest(2).unwrap();
    let state = nurse.state_before(4).unwrap();
    assert_eq!(state.cons_shifts, 1);
    assert_eq!(state.cons_days_worked, 1);
    assert_eq!(nurse.final_state().total_days_worked, 1);
}

#[test]
fn test_horizon_and_shift_checks() {
    let scenario = day_shift::scenario(contract());
    let preferences = Preferences::new(1);
    let mut nurse =
        LiveNurse::new(&scenario, 0, 7, 7, NurseState::default(), &preferences).unwrap();

    assert!(nurse.state_before(14).is_ok());
    assert_eq!(
        nurse.state_before(15).unwrap_err(),
        RosterError::DayOutsideHorizon {
            day: 15,
            first_day: 7,
            nb_days: 7
        }
    );
    assert!(nurse.state_before(6).is_err());
    assert!(nurse.set_assignment(3, DAY, 0).is_err());
    assert!(matches!(
        nurse.set_assignment(8, 5, 0),
        Err(RosterError::UnknownShift { shift: 5, .. })
    ));
    assert!(nurse.set_roster(vec![]).is_err());
}

#[test]
fn test_initial_state_on_unknown_shift_is_rejected() {
    let scenario = day_shift::scenario(contract());
    let preferences = Preferences::new(1);
    let history = NurseState::after_work(7, 1, 1, 1, 0);

    let err = LiveNurse::new(&scenario, 0, 0, 7, history, &preferences).unwrap_err();
    assert_eq!(
        err,
        RosterError::UnknownShift {
            shift: 7,
            nb_shifts: 2
        }
    );
}

#[test]
fn test_unknown_skill_is_rejected() {
    let scenario = day_shift::scenario(contract());
    let preferences = Preferences::new(1);
    let mut nurse =
        LiveNurse::new(&scenario, 0, 0, 7, NurseState::default(), &preferences).unwrap();

    assert_eq!(
        nurse.set_assignment(1, DAY, 3).unwrap_err(),
        RosterError::UnknownSkill {
            skill: 3,
            nb_skills: 1
        }
    );
    assert_eq!(nurse.roster().shift(1).unwrap(), REST);

    // The skill of a rest day does not matter.
    nurse.set_assignment(1, REST, 3).unwrap();

    let mut days = vec![Assignment::REST; 7];
    days[4] = Assignment::work(DAY, 2);
    assert!(matches!(
        nurse.set_roster(days),
        Err(RosterError::UnknownSkill { skill: 2, .. })
    ));
}

#[test]
fn test_unknown_nurse_index() {
    let scenario = day_shift::scenario(contract());
    let preferences = Preferences::new(1);
    assert!(LiveNurse::new(&scenario, 3, 0, 7, NurseState::default(), &preferences).is_err());
}

#[test]
fn test_max_days_reached_before_shift_minimum() {
    let scenario = day_shift::scenario(contract());
    let preferences = Preferences::new(1);
    // Three days worked, but only one on the current shift.
    let initial = NurseState::after_work(DAY, 1, 3, 3, 0);
    let nurse = LiveNurse::new(&scenario, 0, 0, 7, initial, &preferences).unwrap();

    let rest_wins = Weights::default();
    assert!(nurse.needs_rest(0, &rest_wins).unwrap());
    assert!(!nurse.needs_work(0, &rest_wins).unwrap());

    let shift_wins = Weights {
        cons_shifts: 50,
        ..Weights::default()
    };
    assert!(!nurse.needs_rest(0, &shift_wins).unwrap());
    assert!(nurse.needs_work(0, &shift_wins).unwrap());
    assert!(!nurse.is_free_to_choose(0, &shift_wins).unwrap());
}

#[test]
fn test_resting_nurse_policy() {
    let scenario = day_shift::scenario(contract());
    let preferences = Preferences::new(1);
    let weights = Weights::default();

    let short_rest = LiveNurse::new(&scenario, 0, 0, 7, rested_history(1), &preferences).unwrap();
    assert!(short_rest.needs_rest(0, &weights).unwrap());
    assert!(!short_rest.needs_work(0, &weights).unwrap());

    let rested = LiveNurse::new(&scenario, 0, 0, 7, rested_history(2), &preferences).unwrap();
    assert!(rested.is_free_to_choose(0, &weights).unwrap());
}

#[test]
fn test_short_stint_needs_work() {
    let scenario = day_shift::scenario(contract());
    let preferences = Preferences::new(1);
    let weights = Weights::default();
    let initial = NurseState::after_work(DAY, 1, 1, 1, 0);
    let mut nurse = LiveNurse::new(&scenario, 0, 0, 7, initial, &preferences).unwrap();

    assert!(nurse.needs_work(0, &weights).unwrap());
    assert!(!nurse.needs_rest(0, &weights).unwrap());

    nurse.set_assignment(0, DAY, 0).unwrap();
    // Two days on the same shift, under the maximum of three days.
    assert!(nurse.is_free_to_choose(1, &weights).unwrap());
    nurse.set_assignment(1, DAY, 0).unwrap();
    assert!(nurse.needs_rest(2, &weights).unwrap());
    assert_eq!(nurse.state_before(2).unwrap().shift, DAY);
    assert_eq!(nurse.state_before(3).unwrap().shift, REST);
}

#[test]
fn test_wishes_off() {
    let scenario = day_shift::scenario(contract());
    let mut preferences = Preferences::new(1);
    preferences.wish_day_off(0, 4);
    let nurse = LiveNurse::new(&scenario, 0, 0, 7, NurseState::default(), &preferences).unwrap();

    assert!(nurse.wishes_off(4, DAY));
    assert!(!nurse.wishes_off(4, REST));
    assert!(!nurse.wishes_off(5, DAY));
}
