//! A roster under construction for one scenario and demand.

use rosterforge_config::RosterConfig;
use rosterforge_core::{
    Assignment, Demand, NurseState, Preferences, Result, RosterError, Scenario, ShiftId, SkillId,
};

use crate::analysis::{CostBreakdown, Indictments};
use crate::display;
use crate::evaluator::{Evaluation, SolutionEvaluator};
use crate::live::LiveNurse;
use crate::staffing::StaffingBounds;

/// Live nurses of a scenario together with the demand they must cover.
///
/// This is the surface an optimizer drives: it assigns shifts, then asks for
/// the cost of the current rosters.
///
/// ```
/// use rosterforge_config::RosterConfig;
/// use rosterforge_core::{Contract, Demand, Nurse, NurseState, Preferences, Scenario, ShiftGraph};
/// use rosterforge_scoring::RosterSolution;
///
/// let mut shifts = ShiftGraph::new();
/// let day = shifts.add_shift("Day", 1, 7);
/// let scenario = Scenario::builder("tiny")
///     .skill("Nurse")
///     .shifts(shifts)
///     .contract(Contract::unbounded("Any"))
///     .nurse(Nurse::new(0, "Ann", [0], 0))
///     .build()
///     .unwrap();
///
/// let mut demand = Demand::new("tiny", 0, 2, 2, 1);
/// demand.set(0, day, 0, 1, 2).unwrap();
/// let preferences = Preferences::new(1);
/// let config = RosterConfig::default();
///
/// let mut solution = RosterSolution::new(
///     &scenario, &demand, &preferences, &[NurseState::default()], config,
/// ).unwrap();
/// solution.assign(0, 0, day, 0).unwrap();
///
/// let evaluation = solution.evaluate().unwrap();
/// assert!(evaluation.is_feasible());
/// assert_eq!(evaluation.opt_cover_cost, 30);
/// ```
#[derive(Debug, Clone)]
pub struct RosterSolution<'a> {
    scenario: &'a Scenario,
    demand: &'a Demand,
    config: RosterConfig,
    nurses: Vec<LiveNurse<'a>>,
    staffing: StaffingBounds,
}

impl<'a> RosterSolution<'a> {
    /// Creates an all-rest solution over the demand's horizon.
    ///
    /// `initial_states` holds one history state per scenario nurse.
    pub fn new(
        scenario: &'a Scenario,
        demand: &'a Demand,
        preferences: &'a Preferences,
        initial_states: &[NurseState],
        config: RosterConfig,
    ) -> Result<Self> {
        scenario.check_initial_states(initial_states.len())?;
        if demand.nb_shifts() != scenario.nb_shifts() {
            return Err(RosterError::DimensionMismatch {
                what: "demand shifts",
                expected: scenario.nb_shifts(),
                found: demand.nb_shifts(),
            });
        }
        if demand.nb_skills() != scenario.nb_skills() {
            return Err(RosterError::DimensionMismatch {
                what: "demand skills",
                expected: scenario.nb_skills(),
                found: demand.nb_skills(),
            });
        }
        config
            .validate()
            .map_err(|e| RosterError::InvalidScenario(e.to_string()))?;

        let nurses = initial_states
            .iter()
            .enumerate()
            .map(|(index, initial)| {
                LiveNurse::new(
                    scenario,
                    index,
                    demand.first_day(),
                    demand.nb_days(),
                    *initial,
                    preferences,
                )
            })
            .collect::<Result<Vec<_>>>()?;
        let staffing = StaffingBounds::compute(&nurses, scenario.nb_skills(), demand.nb_days());

        Ok(Self {
            scenario,
            demand,
            config,
            nurses,
            staffing,
        })
    }

    pub fn scenario(&self) -> &'a Scenario {
        self.scenario
    }

    pub fn demand(&self) -> &'a Demand {
        self.demand
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn nurses(&self) -> &[LiveNurse<'a>] {
        &self.nurses
    }

    pub fn nurse(&self, index: usize) -> Option<&LiveNurse<'a>> {
        self.nurses.get(index)
    }

    pub fn nurse_mut(&mut self, index: usize) -> Option<&mut LiveNurse<'a>> {
        self.nurses.get_mut(index)
    }

    pub fn staffing(&self) -> &StaffingBounds {
        &self.staffing
    }

    fn live(&mut self, index: usize) -> Result<&mut LiveNurse<'a>> {
        let count = self.nurses.len();
        self.nurses
            .get_mut(index)
            .ok_or(RosterError::DimensionMismatch {
                what: "nurse index",
                expected: count,
                found: index,
            })
    }

    /// Assigns `shift` with `skill` to nurse `index` on absolute `day`.
    pub fn assign(&mut self, index: usize, day: usize, shift: ShiftId, skill: SkillId) -> Result<()> {
        self.live(index)?.set_assignment(day, shift, skill)
    }

    pub fn assign_rest(&mut self, index: usize, day: usize) -> Result<()> {
        self.live(index)?.set_rest(day)
    }

    /// Replaces the roster of nurse `index`.
    pub fn set_roster(&mut self, index: usize, assignments: Vec<Assignment>) -> Result<()> {
        self.live(index)?.set_roster(assignments)
    }

    /// Current assignment of nurse `index` on absolute `day`.
    pub fn assignment(&self, index: usize, day: usize) -> Result<Assignment> {
        self.nurses
            .get(index)
            .ok_or(RosterError::DimensionMismatch {
                what: "nurse index",
                expected: self.nurses.len(),
                found: index,
            })?
            .roster()
            .get(day)
    }

    pub fn evaluator(&self) -> SolutionEvaluator<'a> {
        SolutionEvaluator::from_config(self.scenario.shifts(), self.demand, &self.config)
    }

    /// Checks every nurse and returns the cost of the current rosters.
    pub fn evaluate(&mut self) -> Result<Evaluation> {
        let evaluator = self.evaluator();
        evaluator.evaluate(&mut self.nurses)
    }

    /// Evaluates and returns the per-constraint totals.
    pub fn breakdown(&mut self) -> Result<CostBreakdown> {
        let evaluation = self.evaluate()?;
        Ok(CostBreakdown::new(&self.nurses, &evaluation))
    }

    /// Evaluates and ranks nurses by their own cost.
    pub fn indictments(&mut self) -> Result<Indictments> {
        self.evaluate()?;
        Ok(Indictments::new(&self.nurses))
    }

    /// End-of-horizon states, usable as the next week's initial states.
    pub fn final_states(&self) -> Vec<NurseState> {
        self.nurses.iter().map(LiveNurse::final_state).collect()
    }

    /// Schedule grid followed by the constraint breakdown.
    pub fn to_log_string(&mut self) -> Result<String> {
        let breakdown = self.breakdown()?;
        Ok(display::log_string(self.scenario, &self.nurses, &breakdown))
    }
}
