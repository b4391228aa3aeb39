//! A small ward: three shifts, three skills, four nurses on two contracts.
//!
//! | id | name  | skills             | contract |
//! |----|-------|--------------------|----------|
//! | 0  | Alice | HeadNurse, Nurse   | FullTime |
//! | 1  | Bruno | Nurse              | FullTime |
//! | 2  | Chloe | Nurse              | PartTime |
//! | 3  | Dario | Caretaker          | PartTime |

use rosterforge_core::{Contract, Demand, Nurse, Scenario, ShiftGraph, ShiftId, SkillId};

pub const EARLY: ShiftId = 1;
pub const LATE: ShiftId = 2;
pub const NIGHT: ShiftId = 3;

pub const HEAD_NURSE: SkillId = 0;
pub const NURSE: SkillId = 1;
pub const CARETAKER: SkillId = 2;

pub fn shifts() -> ShiftGraph {
    let mut shifts = ShiftGraph::new();
    shifts.add_shift("Early", 2, 5);
    shifts.add_shift("Late", 2, 4);
    shifts.add_shift("Night", 3, 5);
    for (last, next) in [(LATE, EARLY), (NIGHT, EARLY), (NIGHT, LATE)] {
        if let Err(e) = shifts.forbid(last, next) {
            panic!("ward fixture is invalid: {}", e);
        }
    }
    shifts
}

pub fn full_time() -> Contract {
    Contract {
        name: "FullTime".to_string(),
        min_total_shifts: 3,
        max_total_shifts: 5,
        min_cons_days_work: 3,
        max_cons_days_work: 5,
        min_cons_days_off: 2,
        max_cons_days_off: 3,
        max_total_weekends: 2,
        complete_weekends: true,
    }
}

pub fn part_time() -> Contract {
    Contract {
        name: "PartTime".to_string(),
        min_total_shifts: 2,
        max_total_shifts: 4,
        min_cons_days_work: 2,
        max_cons_days_work: 4,
        min_cons_days_off: 2,
        max_cons_days_off: 4,
        max_total_weekends: 1,
        complete_weekends: false,
    }
}

pub fn scenario() -> Scenario {
    match Scenario::builder("ward")
        .nb_weeks(4)
        .skill("HeadNurse")
        .skill("Nurse")
        .skill("Caretaker")
        .shifts(shifts())
        .contract(full_time())
        .contract(part_time())
        .nurse(Nurse::new(0, "Alice", [HEAD_NURSE, NURSE], 0))
        .nurse(Nurse::new(1, "Bruno", [NURSE], 0))
        .nurse(Nurse::new(2, "Chloe", [NURSE], 1))
        .nurse(Nurse::new(3, "Dario", [CARETAKER], 1))
        .build()
    {
        Ok(scenario) => scenario,
        Err(e) => panic!("ward fixture is invalid: {}", e),
    }
}

/// One week from day 0: a head nurse on Early and a nurse on Late every day.
pub fn demand() -> Demand {
    let mut demand = Demand::new("ward-week", 0, 7, 4, 3);
    for day in 0..7 {
        let cells = [(EARLY, HEAD_NURSE, 1, 1), (LATE, NURSE, 1, 2)];
        for (shift, skill, min, opt) in cells {
            if let Err(e) = demand.set(day, shift, skill, min, opt) {
                panic!("ward demand fixture is invalid: {}", e);
            }
        }
    }
    demand
}
