//! Day-by-day constraint checking of one nurse.

use std::collections::BTreeMap;

use rosterforge_config::Weights;
use rosterforge_core::calendar::is_sunday;
use rosterforge_core::{
    Contract, Nurse, NurseState, Result, Roster, RosterError, ShiftGraph, WishedOff, REST,
};
use tracing::trace;

use crate::report::NurseReport;

/// Everything the checker reads about one nurse.
#[derive(Debug, Clone, Copy)]
pub struct NurseInput<'a> {
    pub nurse: &'a Nurse,
    pub contract: &'a Contract,
    pub roster: &'a Roster,
    /// `roster.nb_days() + 1` states; entry 0 is the carried-over history.
    pub states: &'a [NurseState],
    /// Wishes keyed by absolute day.
    pub wishes: Option<&'a BTreeMap<usize, WishedOff>>,
}

/// Turns a nurse's roster and state sequence into a [`NurseReport`].
///
/// The checker only borrows shared read-only data, so one instance can be
/// used from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintChecker<'a> {
    shifts: &'a ShiftGraph,
    weights: &'a Weights,
}

impl<'a> ConstraintChecker<'a> {
    pub fn new(shifts: &'a ShiftGraph, weights: &'a Weights) -> Self {
        Self { shifts, weights }
    }

    pub fn weights(&self) -> &Weights {
        self.weights
    }

    /// Builds a fresh report.
    pub fn report(&self, input: &NurseInput<'_>) -> Result<NurseReport> {
        let mut report = NurseReport::default();
        self.check(input, &mut report)?;
        Ok(report)
    }

    /// Rebuilds `report` from scratch.
    ///
    /// Fails only when the state sequence does not match the roster length.
    /// Constraint violations are recorded in the report, never returned.
    pub fn check(&self, input: &NurseInput<'_>, report: &mut NurseReport) -> Result<()> {
        let nb_days = input.roster.nb_days();
        if input.states.len() != nb_days + 1 {
            return Err(RosterError::DimensionMismatch {
                what: "nurse states",
                expected: nb_days + 1,
                found: input.states.len(),
            });
        }
        report.reset(nb_days);

        for (offset, assignment) in input.roster.assignments().iter().enumerate() {
            let prev = &input.states[offset];
            report.viol_skill[offset] =
                assignment.shift != REST && !input.nurse.has_skill(assignment.skill);
            report.viol_succ[offset] = self
                .shifts
                .is_forbidden_successor(assignment.shift, prev.shift);
        }

        for offset in 0..nb_days {
            self.check_day(input, offset, report);
        }

        let last = &input.states[nb_days];
        let contract = input.contract;
        let w = self.weights;
        let missing = contract.min_total_shifts.saturating_sub(last.total_days_worked);
        let extra = last.total_days_worked.saturating_sub(contract.max_total_shifts);
        report.cost_total_days = w.total_shifts * (i64::from(missing) + i64::from(extra));
        let extra_weekends = last
            .total_weekends_worked
            .saturating_sub(contract.max_total_weekends);
        report.cost_total_weekends = w.total_weekends * i64::from(extra_weekends);

        Ok(())
    }

    fn check_day(&self, input: &NurseInput<'_>, offset: usize, report: &mut NurseReport) {
        let w = self.weights;
        let contract = input.contract;
        let day = input.roster.first_day() + offset;
        let prev = &input.states[offset];
        let cur = &input.states[offset + 1];
        let (shift, prev_shift) = (cur.shift, prev.shift);

        if shift != REST {
            if prev_shift == REST {
                let missing = contract.min_cons_days_off.saturating_sub(prev.cons_days_off);
                report.cost_cons_days_off[offset] += w.cons_days_off * i64::from(missing);
            }
            if cur.cons_days_worked > contract.max_cons_days_work {
                report.cost_cons_days[offset] += w.cons_days_work;
            }
        } else {
            if prev_shift != REST {
                let missing = contract.min_cons_days_work.saturating_sub(prev.cons_days_worked);
                report.cost_cons_days[offset] += w.cons_days_work * i64::from(missing);
            }
            if cur.cons_days_off > contract.max_cons_days_off {
                report.cost_cons_days_off[offset] += w.cons_days_off;
            }
        }

        // A same-shift streak that just ended is charged on the day it ended.
        if shift != prev_shift && prev_shift != REST {
            let missing = self.shifts.min_cons(prev_shift).saturating_sub(prev.cons_shifts);
            if missing > 0 {
                report.cost_cons_shifts[offset] += w.cons_shifts * i64::from(missing);
                trace!(
                    event = "consecutive_shift_shortfall",
                    nurse = input.nurse.id as u64,
                    day = day as u64,
                    amount = u64::from(missing),
                );
            }
        }
        if shift != REST && cur.cons_shifts > self.shifts.max_cons(shift) {
            report.cost_cons_shifts[offset] += w.cons_shifts;
            trace!(
                event = "consecutive_shift_excess",
                nurse = input.nurse.id as u64,
                day = day as u64,
                amount = u64::from(cur.cons_shifts - self.shifts.max_cons(shift)),
            );
        }

        let wished_off = input
            .wishes
            .and_then(|wishes| wishes.get(&day))
            .is_some_and(|wish| wish.contains(shift));
        if wished_off {
            report.cost_pref[offset] = w.preferences;
        }

        if is_sunday(day)
            && contract.complete_weekends
            && (shift != REST) != (prev_shift != REST)
        {
            report.cost_weekend[offset] = w.complete_weekend;
        }
    }
}
