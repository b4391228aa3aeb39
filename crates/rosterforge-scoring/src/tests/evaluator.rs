use proptest::prelude::*;
use rosterforge_config::{RosterConfig, Weights};
use rosterforge_core::{Assignment, Contract, Demand, NurseState, Preferences, RosterError, REST};
use rosterforge_test::day_shift::{self, DAY, NURSE};
use rosterforge_test::ward;

use crate::evaluator::SolutionEvaluator;
use crate::solution::RosterSolution;

fn ward_solution<'a>(
    scenario: &'a rosterforge_core::Scenario,
    demand: &'a Demand,
    preferences: &'a Preferences,
    config: RosterConfig,
) -> RosterSolution<'a> {
    RosterSolution::new(
        scenario,
        demand,
        preferences,
        &[NurseState::default(); 4],
        config,
    )
    .unwrap()
}

fn fill_ward(solution: &mut RosterSolution<'_>) {
    for day in 0..7 {
        solution.assign(0, day, ward::EARLY, ward::HEAD_NURSE).unwrap();
    }
    for day in [0, 1, 2, 5, 6] {
        solution.assign(1, day, ward::LATE, ward::NURSE).unwrap();
    }
    for day in [3, 4] {
        solution.assign(2, day, ward::LATE, ward::NURSE).unwrap();
    }
    solution.assign(3, 2, ward::NIGHT, ward::CARETAKER).unwrap();
}

#[test]
fn test_optimal_and_minimum_coverage_shortfall() {
    let scenario = day_shift::scenario(Contract::unbounded("c"));
    let mut demand = Demand::new("one-day", 0, 1, 2, 1);
    demand.set(0, DAY, NURSE, 2, 2).unwrap();
    let preferences = Preferences::new(1);
    let mut solution = RosterSolution::new(
        &scenario,
        &demand,
        &preferences,
        &[NurseState::default()],
        RosterConfig::default(),
    )
    .unwrap();
    solution.assign(0, 0, DAY, NURSE).unwrap();

    let evaluation = solution.evaluate().unwrap();

    assert_eq!(evaluation.coverage[(0, DAY, NURSE)], 1);
    assert_eq!(evaluation.nurse_cost, 0);
    assert_eq!(evaluation.opt_cover_cost, 30);
    assert_eq!(evaluation.total_cost, 30);
    assert_eq!(evaluation.min_cover_violations, 1);
    assert!(!evaluation.is_feasible());
    assert_eq!(evaluation.score.to_string(), "-1hard/-30soft");
}

#[test]
fn test_optimal_shortfall_without_minimum_is_feasible() {
    let scenario = day_shift::scenario(Contract::unbounded("c"));
    let mut demand = Demand::new("one-day", 0, 1, 2, 1);
    demand.set(0, DAY, NURSE, 1, 2).unwrap();
    let preferences = Preferences::new(1);
    let mut solution = RosterSolution::new(
        &scenario,
        &demand,
        &preferences,
        &[NurseState::default()],
        RosterConfig::default(),
    )
    .unwrap();
    solution.assign(0, 0, DAY, NURSE).unwrap();

    let evaluation = solution.evaluate().unwrap();
    assert!(evaluation.is_feasible());
    assert_eq!(evaluation.total_cost, 30);
}

#[test]
fn test_evaluate_is_idempotent() {
    let scenario = ward::scenario();
    let demand = ward::demand();
    let preferences = Preferences::new(4);
    let mut solution = ward_solution(&scenario, &demand, &preferences, RosterConfig::default());
    fill_ward(&mut solution);

    let first = solution.evaluate().unwrap();
    let reports: Vec<_> = solution.nurses().iter().map(|n| n.report().clone()).collect();
    let second = solution.evaluate().unwrap();
    let again: Vec<_> = solution.nurses().iter().map(|n| n.report().clone()).collect();

    assert_eq!(first, second);
    assert_eq!(reports, again);
}

#[test]
fn test_parallel_matches_serial() {
    let scenario = ward::scenario();
    let demand = ward::demand();
    let preferences = Preferences::new(4);
    let mut solution = ward_solution(&scenario, &demand, &preferences, RosterConfig::default());
    fill_ward(&mut solution);

    let mut serial = solution.nurses().to_vec();
    let mut parallel = solution.nurses().to_vec();
    let evaluator = SolutionEvaluator::new(scenario.shifts(), &demand, Weights::default());

    let a = evaluator.evaluate(&mut serial).unwrap();
    let b = evaluator
        .clone()
        .with_parallel(true)
        .evaluate(&mut parallel)
        .unwrap();

    assert_eq!(a, b);
    for (s, p) in serial.iter().zip(&parallel) {
        assert_eq!(s.report(), p.report());
    }
}

#[test]
fn test_cost_sums_nurse_reports() {
    let scenario = ward::scenario();
    let demand = ward::demand();
    let preferences = Preferences::new(4);
    let mut solution = ward_solution(&scenario, &demand, &preferences, RosterConfig::default());
    fill_ward(&mut solution);

    let evaluation = solution.evaluate().unwrap();
    let nurse_cost: i64 = solution.nurses().iter().map(|n| n.report().total_cost()).sum();

    assert_eq!(evaluation.nurse_cost, nurse_cost);
    assert_eq!(evaluation.total_cost, nurse_cost + evaluation.opt_cover_cost);
    // Every Late cell is staffed once against an optimum of two.
    assert_eq!(evaluation.opt_cover_cost, 7 * 30);
    assert_eq!(evaluation.min_cover_violations, 0);
    assert_eq!(evaluation.skill_violations, 0);
    assert_eq!(evaluation.score.cost(), evaluation.total_cost);
}

#[test]
fn test_final_states_chain_into_next_week() {
    let scenario = ward::scenario();
    let demand = ward::demand();
    let preferences = Preferences::new(4);
    let mut solution = ward_solution(&scenario, &demand, &preferences, RosterConfig::default());
    fill_ward(&mut solution);

    let evaluation = solution.evaluate().unwrap();
    assert_eq!(evaluation.final_states, solution.final_states());
    assert_eq!(evaluation.final_states[0].cons_days_worked, 7);
    assert_eq!(evaluation.final_states[0].total_weekends_worked, 1);

    let next_demand = Demand::new("next", 7, 7, 4, 3);
    let next = RosterSolution::new(
        &scenario,
        &next_demand,
        &preferences,
        &evaluation.final_states,
        RosterConfig::default(),
    )
    .unwrap();
    let carried = next.nurse(0).unwrap().state_before(7).unwrap();
    assert_eq!(*carried, evaluation.final_states[0]);
}

#[test]
fn test_setup_errors() {
    let scenario = ward::scenario();
    let demand = ward::demand();
    let preferences = Preferences::new(4);

    let err = RosterSolution::new(
        &scenario,
        &demand,
        &preferences,
        &[NurseState::default(); 3],
        RosterConfig::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        RosterError::InitialStateCount {
            expected: 4,
            found: 3
        }
    );

    let narrow = Demand::new("narrow", 0, 7, 4, 2);
    assert!(matches!(
        RosterSolution::new(
            &scenario,
            &narrow,
            &preferences,
            &[NurseState::default(); 4],
            RosterConfig::default(),
        ),
        Err(RosterError::DimensionMismatch { what: "demand skills", .. })
    ));

    let negative = RosterConfig::default().with_weights(Weights::uniform(-1));
    assert!(matches!(
        RosterSolution::new(
            &scenario,
            &demand,
            &preferences,
            &[NurseState::default(); 4],
            negative,
        ),
        Err(RosterError::InvalidScenario(_))
    ));
}

#[test]
fn test_roster_horizon_mismatch() {
    let scenario = ward::scenario();
    let demand = ward::demand();
    let other = Demand::new("other", 7, 7, 4, 3);
    let preferences = Preferences::new(4);
    let solution = ward_solution(&scenario, &demand, &preferences, RosterConfig::default());

    let mut nurses = solution.nurses().to_vec();
    let evaluator = SolutionEvaluator::new(scenario.shifts(), &other, Weights::default());
    assert!(evaluator.evaluate(&mut nurses).is_err());
}

fn bump(weights: Weights, which: usize, delta: i64) -> Weights {
    let mut w = weights;
    match which {
        0 => w.cons_days_work += delta,
        1 => w.cons_days_off += delta,
        2 => w.cons_shifts += delta,
        3 => w.preferences += delta,
        4 => w.complete_weekend += delta,
        5 => w.total_shifts += delta,
        6 => w.total_weekends += delta,
        _ => w.optimal_demand += delta,
    }
    w
}

fn weights() -> impl Strategy<Value = Weights> {
    prop::array::uniform8(0i64..50).prop_map(|w| Weights {
        cons_days_work: w[0],
        cons_days_off: w[1],
        cons_shifts: w[2],
        preferences: w[3],
        complete_weekend: w[4],
        total_shifts: w[5],
        total_weekends: w[6],
        optimal_demand: w[7],
    })
}

fn rosters() -> impl Strategy<Value = Vec<Vec<Assignment>>> {
    let day = (0usize..4, 0usize..3).prop_map(|(shift, skill)| {
        if shift == REST {
            Assignment::REST
        } else {
            Assignment::work(shift, skill)
        }
    });
    prop::collection::vec(prop::collection::vec(day, 7), 4)
}

fn total_cost(rosters: &[Vec<Assignment>], weights: Weights, preferences: &Preferences) -> i64 {
    let scenario = ward::scenario();
    let demand = ward::demand();
    let config = RosterConfig::default().with_weights(weights);
    let mut solution = ward_solution(&scenario, &demand, preferences, config);
    for (index, roster) in rosters.iter().enumerate() {
        solution.set_roster(index, roster.clone()).unwrap();
    }
    solution.evaluate().unwrap().total_cost
}

proptest! {
    #[test]
    fn prop_raising_a_weight_never_lowers_cost(
        rosters in rosters(),
        base in weights(),
        which in 0usize..8,
        delta in 1i64..40,
    ) {
        let mut preferences = Preferences::new(4);
        preferences.wish_day_off(1, 5);
        preferences.wish_shift_off(2, 3, ward::LATE);

        let before = total_cost(&rosters, base, &preferences);
        let after = total_cost(&rosters, bump(base, which, delta), &preferences);
        prop_assert!(after >= before);
    }
}
