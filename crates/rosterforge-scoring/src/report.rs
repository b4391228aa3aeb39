//! Per-nurse violation and cost report.

use crate::analysis::Constraint;

/// Hard-violation flags and soft costs of one nurse over the horizon.
///
/// Every vector holds one entry per day offset. The report is rebuilt from
/// scratch each time the nurse is checked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NurseReport {
    /// Assigned skill not held.
    pub viol_skill: Vec<bool>,
    /// Shift is a forbidden successor of the previous day's shift.
    pub viol_succ: Vec<bool>,
    pub cost_cons_days: Vec<i64>,
    pub cost_cons_days_off: Vec<i64>,
    pub cost_cons_shifts: Vec<i64>,
    pub cost_pref: Vec<i64>,
    /// Charged on Sundays only.
    pub cost_weekend: Vec<i64>,
    pub cost_total_days: i64,
    pub cost_total_weekends: i64,
}

impl NurseReport {
    pub fn new(nb_days: usize) -> Self {
        let mut report = Self::default();
        report.reset(nb_days);
        report
    }

    /// Clears every entry and resizes to `nb_days`.
    pub fn reset(&mut self, nb_days: usize) {
        for flags in [&mut self.viol_skill, &mut self.viol_succ] {
            flags.clear();
            flags.resize(nb_days, false);
        }
        for costs in [
            &mut self.cost_cons_days,
            &mut self.cost_cons_days_off,
            &mut self.cost_cons_shifts,
            &mut self.cost_pref,
            &mut self.cost_weekend,
        ] {
            costs.clear();
            costs.resize(nb_days, 0);
        }
        self.cost_total_days = 0;
        self.cost_total_weekends = 0;
    }

    pub fn nb_days(&self) -> usize {
        self.viol_skill.len()
    }

    /// Soft cost charged on one day offset.
    pub fn day_cost(&self, offset: usize) -> i64 {
        self.cost_cons_days[offset]
            + self.cost_cons_days_off[offset]
            + self.cost_cons_shifts[offset]
            + self.cost_pref[offset]
            + self.cost_weekend[offset]
    }

    /// All soft costs, per-day and horizon-level.
    pub fn total_cost(&self) -> i64 {
        (0..self.nb_days()).map(|d| self.day_cost(d)).sum::<i64>()
            + self.cost_total_days
            + self.cost_total_weekends
    }

    pub fn skill_violations(&self) -> u64 {
        self.viol_skill.iter().filter(|v| **v).count() as u64
    }

    pub fn succession_violations(&self) -> u64 {
        self.viol_succ.iter().filter(|v| **v).count() as u64
    }

    pub fn hard_violations(&self) -> u64 {
        self.skill_violations() + self.succession_violations()
    }

    /// Contribution of this nurse to one constraint.
    ///
    /// Hard constraints return a violation count; coverage constraints,
    /// which are not per nurse, return 0.
    pub fn value_of(&self, constraint: Constraint) -> i64 {
        let sum = |v: &[i64]| v.iter().sum::<i64>();
        match constraint {
            Constraint::RequiredSkill => self.skill_violations() as i64,
            Constraint::ForbiddenSuccession => self.succession_violations() as i64,
            Constraint::TotalAssignments => self.cost_total_days,
            Constraint::ConsecutiveDaysWorked => sum(&self.cost_cons_days),
            Constraint::ConsecutiveDaysOff => sum(&self.cost_cons_days_off),
            Constraint::ConsecutiveShifts => sum(&self.cost_cons_shifts),
            Constraint::Preferences => sum(&self.cost_pref),
            Constraint::TotalWeekends => self.cost_total_weekends,
            Constraint::CompleteWeekends => sum(&self.cost_weekend),
            Constraint::MinimumCoverage | Constraint::OptimalCoverage => 0,
        }
    }
}
