//! Live nurse: a static nurse record plus its evolving roster and states.

use std::collections::BTreeMap;

use rosterforge_config::Weights;
use rosterforge_core::{
    propagate, Assignment, Contract, Nurse, NurseState, PositionId, Preferences, Result, Roster,
    RosterError, Scenario, ShiftGraph, ShiftId, SkillId, WishedOff, REST,
};

use crate::checker::{ConstraintChecker, NurseInput};
use crate::report::NurseReport;
use crate::staffing::WorkDayBounds;

/// A nurse being rostered.
///
/// Borrows the nurse, its contract, the shift graph and its wishes from the
/// scenario; owns its roster, its state sequence and its latest report.
/// The state sequence always matches the roster: every mutation goes through
/// a method that re-propagates the affected suffix.
#[derive(Debug, Clone)]
pub struct LiveNurse<'a> {
    index: usize,
    nurse: &'a Nurse,
    contract: &'a Contract,
    shifts: &'a ShiftGraph,
    nb_skills: usize,
    wishes: Option<&'a BTreeMap<usize, WishedOff>>,
    position: PositionId,
    roster: Roster,
    states: Vec<NurseState>,
    report: NurseReport,
    bounds: WorkDayBounds,
}

impl<'a> LiveNurse<'a> {
    /// Creates the live record of the nurse at `index` in the scenario,
    /// resting every day of `[first_day, first_day + nb_days)`.
    pub fn new(
        scenario: &'a Scenario,
        index: usize,
        first_day: usize,
        nb_days: usize,
        initial: NurseState,
        preferences: &'a Preferences,
    ) -> Result<Self> {
        let nurse = scenario
            .nurses()
            .get(index)
            .ok_or(RosterError::DimensionMismatch {
                what: "nurse index",
                expected: scenario.nb_nurses(),
                found: index,
            })?;
        let contract = scenario
            .contract(nurse.contract)
            .ok_or(RosterError::UnknownContract {
                nurse: nurse.id,
                contract: nurse.contract,
            })?;
        let position = scenario.positions().position_of(index).ok_or_else(|| {
            RosterError::NurseWithoutPosition {
                nurse: nurse.id,
                name: nurse.name.clone(),
            }
        })?;
        if initial.shift >= scenario.nb_shifts() {
            return Err(RosterError::UnknownShift {
                shift: initial.shift,
                nb_shifts: scenario.nb_shifts(),
            });
        }

        let roster = Roster::new(first_day, nb_days);
        let states = propagate(initial, first_day, &roster.shifts());

        Ok(Self {
            index,
            nurse,
            contract,
            shifts: scenario.shifts(),
            nb_skills: scenario.nb_skills(),
            wishes: preferences.nurse_wishes(index),
            position,
            roster,
            states,
            report: NurseReport::new(nb_days),
            bounds: WorkDayBounds::compute(contract, &initial, nb_days),
        })
    }

    /// Index in the scenario's nurse list.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn nurse(&self) -> &'a Nurse {
        self.nurse
    }

    pub fn id(&self) -> usize {
        self.nurse.id
    }

    pub fn name(&self) -> &str {
        &self.nurse.name
    }

    pub fn contract(&self) -> &'a Contract {
        self.contract
    }

    pub fn position(&self) -> PositionId {
        self.position
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn states(&self) -> &[NurseState] {
        &self.states
    }

    pub fn report(&self) -> &NurseReport {
        &self.report
    }

    pub fn min_work_days(&self) -> u32 {
        self.bounds.min
    }

    pub fn max_work_days(&self) -> u32 {
        self.bounds.max
    }

    pub fn work_day_bounds(&self) -> WorkDayBounds {
        self.bounds
    }

    /// Assigns `shift` with `skill` on absolute `day` and updates the states
    /// from that day on. The skill of a rest day is ignored.
    pub fn set_assignment(&mut self, day: usize, shift: ShiftId, skill: SkillId) -> Result<()> {
        self.check_assignment(shift, skill)?;
        self.roster.set(day, shift, skill)?;
        let offset = self.roster.offset(day)?;
        self.refresh_from(offset);
        Ok(())
    }

    pub fn set_rest(&mut self, day: usize) -> Result<()> {
        self.set_assignment(day, REST, 0)
    }

    /// Replaces the whole roster; it must cover the same horizon.
    pub fn set_roster(&mut self, assignments: Vec<Assignment>) -> Result<()> {
        if assignments.len() != self.roster.nb_days() {
            return Err(RosterError::DimensionMismatch {
                what: "roster days",
                expected: self.roster.nb_days(),
                found: assignments.len(),
            });
        }
        for a in &assignments {
            self.check_assignment(a.shift, a.skill)?;
        }
        self.roster = Roster::from_assignments(self.roster.first_day(), assignments);
        self.build_states();
        Ok(())
    }

    fn check_assignment(&self, shift: ShiftId, skill: SkillId) -> Result<()> {
        if shift >= self.shifts.len() {
            return Err(RosterError::UnknownShift {
                shift,
                nb_shifts: self.shifts.len(),
            });
        }
        if shift != REST && skill >= self.nb_skills {
            return Err(RosterError::UnknownSkill {
                skill,
                nb_skills: self.nb_skills,
            });
        }
        Ok(())
    }

    /// Recomputes every state from the initial one.
    pub fn build_states(&mut self) {
        self.refresh_from(0);
    }

    fn refresh_from(&mut self, offset: usize) {
        let first_day = self.roster.first_day();
        for (d, a) in self.roster.assignments().iter().enumerate().skip(offset) {
            self.states[d + 1] = self.states[d].advance(a.shift, first_day + d);
        }
    }

    /// State at the start of absolute `day`, that is at the end of `day - 1`.
    ///
    /// `day` may be one past the horizon, which yields the final state.
    pub fn state_before(&self, day: usize) -> Result<&NurseState> {
        let first_day = self.roster.first_day();
        day.checked_sub(first_day)
            .and_then(|offset| self.states.get(offset))
            .ok_or(RosterError::DayOutsideHorizon {
                day,
                first_day,
                nb_days: self.roster.nb_days(),
            })
    }

    /// State at the end of the horizon; the next week's initial state.
    pub fn final_state(&self) -> NurseState {
        self.states[self.roster.nb_days()]
    }

    pub fn wishes_off(&self, day: usize, shift: ShiftId) -> bool {
        self.wishes
            .and_then(|w| w.get(&day))
            .is_some_and(|wish| wish.contains(shift))
    }

    /// True if working on `day` would break a consecutive-day maximum, or if
    /// the nurse is resting and has not rested long enough yet.
    ///
    /// When the same-shift minimum can only be reached by exceeding the
    /// consecutive-days maximum, the costlier of the two weights decides.
    pub fn needs_rest(&self, day: usize, weights: &Weights) -> Result<bool> {
        let state = self.state_before(day)?;
        if state.shift != REST && state.cons_days_worked >= self.contract.max_cons_days_work {
            if state.cons_shifts < self.shifts.min_cons(state.shift) {
                return Ok(weights.cons_shifts <= weights.cons_days_work);
            }
            return Ok(true);
        }
        Ok(state.shift == REST && state.cons_days_off < self.contract.min_cons_days_off)
    }

    /// True if resting on `day` would cut a work stint or a same-shift
    /// streak below its minimum.
    pub fn needs_work(&self, day: usize, weights: &Weights) -> Result<bool> {
        let state = self.state_before(day)?;
        if state.shift == REST {
            return Ok(false);
        }
        if state.cons_days_worked < self.contract.min_cons_days_work {
            return Ok(true);
        }
        if state.cons_shifts < self.shifts.min_cons(state.shift) {
            if state.cons_days_worked >= self.contract.max_cons_days_work {
                return Ok(weights.cons_shifts > weights.cons_days_work);
            }
            return Ok(true);
        }
        Ok(false)
    }

    pub fn is_free_to_choose(&self, day: usize, weights: &Weights) -> Result<bool> {
        Ok(!self.needs_work(day, weights)? && !self.needs_rest(day, weights)?)
    }

    /// Rebuilds the report against the current roster.
    pub fn check(&mut self, checker: &ConstraintChecker<'_>) -> Result<()> {
        let input = NurseInput {
            nurse: self.nurse,
            contract: self.contract,
            roster: &self.roster,
            states: &self.states,
            wishes: self.wishes,
        };
        checker.check(&input, &mut self.report)
    }
}
