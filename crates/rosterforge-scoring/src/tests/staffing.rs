use rosterforge_config::RosterConfig;
use rosterforge_core::{Contract, NurseState, Preferences};
use rosterforge_test::{rested_history, ward, worked_history};

use crate::solution::RosterSolution;
use crate::staffing::WorkDayBounds;

fn contract() -> Contract {
    Contract::unbounded("c")
        .with_cons_days_work(3, 5)
        .with_cons_days_off(2, 3)
}

#[test]
fn test_bounds_after_rest() {
    let bounds = WorkDayBounds::compute(&contract(), &rested_history(2), 7);
    assert_eq!(bounds, WorkDayBounds { min: 3, max: 5 });
}

#[test]
fn test_bounds_after_work() {
    // Two days into a stint: three more days at most, one more at least.
    let bounds = WorkDayBounds::compute(&contract(), &worked_history(1, 2), 7);
    assert_eq!(bounds, WorkDayBounds { min: 4, max: 5 });
}

#[test]
fn test_unbounded_contract() {
    let bounds = WorkDayBounds::compute(&Contract::unbounded("c"), &NurseState::default(), 7);
    assert_eq!(bounds, WorkDayBounds { min: 0, max: 7 });
}

#[test]
fn test_bounds_never_exceed_horizon() {
    let long_work = worked_history(1, 0);
    let bounds = WorkDayBounds::compute(&contract(), &long_work, 2);
    assert!(bounds.max <= 2);
    assert!(bounds.min <= bounds.max);
}

#[test]
fn test_staffing_per_skill() {
    let scenario = ward::scenario();
    let demand = ward::demand();
    let preferences = Preferences::new(4);
    let solution = RosterSolution::new(
        &scenario,
        &demand,
        &preferences,
        &[NurseState::default(); 4],
        RosterConfig::default(),
    )
    .unwrap();

    let maxima: Vec<u32> = solution.nurses().iter().map(|n| n.max_work_days()).collect();
    assert_eq!(maxima, vec![5, 5, 4, 4]);

    let staffing = solution.staffing();
    assert_eq!(staffing.max_total_staff, 28);
    assert_eq!(staffing.max_total_staff_no_penalty, 18);
    assert_eq!(staffing.max_staff_per_skill, vec![7, 21, 7]);
    assert_eq!(staffing.max_staff_per_skill_no_penalty, vec![5, 14, 4]);
}
