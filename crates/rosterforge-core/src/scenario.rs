//! Static scenario data and its one-time position preprocessing.

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::calendar::DAYS_PER_WEEK;
use crate::contract::Contract;
use crate::error::{Result, RosterError};
use crate::nurse::{ContractId, Nurse};
use crate::position::{Component, PositionBuilder, Positions};
use crate::shift::{ShiftGraph, ShiftId, SkillId};

/// Everything about a rostering problem that does not change while solving.
///
/// The scenario owns its shifts, contracts and nurses. Positions are derived
/// from the nurse population exactly once, when the scenario is built.
///
/// ```
/// use rosterforge_core::{Contract, Nurse, Scenario, ShiftGraph};
///
/// let mut shifts = ShiftGraph::new();
/// shifts.add_shift("Day", 2, 4);
///
/// let scenario = Scenario::builder("ward")
///     .skill("Nurse")
///     .skill("HeadNurse")
///     .shifts(shifts)
///     .contract(Contract::unbounded("FullTime"))
///     .nurse(Nurse::new(0, "Ann", [0, 1], 0))
///     .nurse(Nurse::new(1, "Bob", [0], 0))
///     .build()
///     .unwrap();
///
/// assert_eq!(scenario.nb_nurses(), 2);
/// assert_eq!(scenario.positions().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Scenario {
    name: String,
    nb_weeks: usize,
    this_week: usize,
    skill_names: Vec<String>,
    shifts: ShiftGraph,
    contracts: Vec<Contract>,
    nurses: Vec<Nurse>,
    positions: Positions,
    preprocessed: bool,
}

/// Collects scenario data before validation.
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder {
    name: String,
    nb_weeks: usize,
    this_week: usize,
    skill_names: Vec<String>,
    shifts: ShiftGraph,
    contracts: Vec<Contract>,
    nurses: Vec<Nurse>,
}

impl ScenarioBuilder {
    pub fn nb_weeks(mut self, nb_weeks: usize) -> Self {
        self.nb_weeks = nb_weeks;
        self
    }

    /// Index of the week being planned, counted from the first week.
    pub fn this_week(mut self, week: usize) -> Self {
        self.this_week = week;
        self
    }

    pub fn skill(mut self, name: impl Into<String>) -> Self {
        self.skill_names.push(name.into());
        self
    }

    pub fn shifts(mut self, shifts: ShiftGraph) -> Self {
        self.shifts = shifts;
        self
    }

    pub fn contract(mut self, contract: Contract) -> Self {
        self.contracts.push(contract);
        self
    }

    pub fn nurse(mut self, nurse: Nurse) -> Self {
        self.nurses.push(nurse);
        self
    }

    pub fn nurses(mut self, nurses: impl IntoIterator<Item = Nurse>) -> Self {
        self.nurses.extend(nurses);
        self
    }

    /// Validates the data and builds the positions.
    pub fn build(self) -> Result<Scenario> {
        let mut scenario = Scenario {
            name: self.name,
            nb_weeks: self.nb_weeks.max(1),
            this_week: self.this_week,
            skill_names: self.skill_names,
            shifts: self.shifts,
            contracts: self.contracts,
            nurses: self.nurses,
            positions: Positions::default(),
            preprocessed: false,
        };
        scenario.validate()?;
        scenario.preprocess_nurses()?;
        Ok(scenario)
    }
}

impl Scenario {
    pub fn builder(name: impl Into<String>) -> ScenarioBuilder {
        ScenarioBuilder {
            name: name.into(),
            nb_weeks: 1,
            ..ScenarioBuilder::default()
        }
    }

    fn validate(&self) -> Result<()> {
        let nb_skills = self.skill_names.len();
        let mut ids = BTreeSet::new();
        for nurse in &self.nurses {
            if !ids.insert(nurse.id) {
                return Err(RosterError::InvalidScenario(format!(
                    "nurse id {} is used twice",
                    nurse.id
                )));
            }
            if nurse.contract >= self.contracts.len() {
                return Err(RosterError::UnknownContract {
                    nurse: nurse.id,
                    contract: nurse.contract,
                });
            }
            if let Some(&skill) = nurse.skills().iter().find(|s| **s >= nb_skills) {
                return Err(RosterError::UnknownSkill { skill, nb_skills });
            }
            if nurse.skills().is_empty() {
                return Err(RosterError::InvalidScenario(format!(
                    "nurse {} ({}) has no skill",
                    nurse.id, nurse.name
                )));
            }
        }
        Ok(())
    }

    /// Derives positions, dominance, ranks and components from the nurses.
    ///
    /// Runs once per scenario; a second call is a consistency error.
    pub fn preprocess_nurses(&mut self) -> Result<()> {
        if self.preprocessed {
            return Err(RosterError::PositionsAlreadyBuilt {
                count: self.positions.len(),
            });
        }
        self.positions = PositionBuilder::new(&self.nurses).build()?;
        self.preprocessed = true;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nb_weeks(&self) -> usize {
        self.nb_weeks
    }

    pub fn this_week(&self) -> usize {
        self.this_week
    }

    /// Absolute index of the first day of the planned week.
    pub fn first_day(&self) -> usize {
        self.this_week * DAYS_PER_WEEK
    }

    pub fn nb_skills(&self) -> usize {
        self.skill_names.len()
    }

    pub fn skill_name(&self, skill: SkillId) -> &str {
        &self.skill_names[skill]
    }

    pub fn skill_names(&self) -> &[String] {
        &self.skill_names
    }

    pub fn shifts(&self) -> &ShiftGraph {
        &self.shifts
    }

    /// Number of shifts, rest included.
    pub fn nb_shifts(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_forbidden_successor(&self, next: ShiftId, last: ShiftId) -> bool {
        self.shifts.is_forbidden_successor(next, last)
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn contract(&self, id: ContractId) -> Option<&Contract> {
        self.contracts.get(id)
    }

    /// Contract of the nurse at `nurse_index`.
    pub fn contract_of(&self, nurse_index: usize) -> Option<&Contract> {
        self.nurses
            .get(nurse_index)
            .and_then(|n| self.contracts.get(n.contract))
    }

    pub fn nurses(&self) -> &[Nurse] {
        &self.nurses
    }

    pub fn nb_nurses(&self) -> usize {
        self.nurses.len()
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    /// Fails unless `found` matches the number of nurses.
    pub fn check_initial_states(&self, found: usize) -> Result<()> {
        if found == self.nurses.len() {
            Ok(())
        } else {
            Err(RosterError::InitialStateCount {
                expected: self.nurses.len(),
                found,
            })
        }
    }

    /// Scenario restricted to the nurses at the given indices.
    ///
    /// Nurse ids are preserved; positions are rebuilt for the subset.
    pub fn subset(&self, nurse_indices: &[usize]) -> Result<Scenario> {
        let nurses = nurse_indices
            .iter()
            .map(|&i| {
                self.nurses.get(i).cloned().ok_or(RosterError::DimensionMismatch {
                    what: "nurse index",
                    expected: self.nurses.len(),
                    found: i,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            event = "sub_scenario",
            scenario = %self.name,
            nurse_count = nurses.len() as u64,
        );

        let mut sub = Scenario {
            name: self.name.clone(),
            nb_weeks: self.nb_weeks,
            this_week: self.this_week,
            skill_names: self.skill_names.clone(),
            shifts: self.shifts.clone(),
            contracts: self.contracts.clone(),
            nurses,
            positions: Positions::default(),
            preprocessed: false,
        };
        sub.preprocess_nurses()?;
        Ok(sub)
    }

    /// Scenario holding only the nurses of one connected component.
    pub fn component_scenario(&self, component: &Component) -> Result<Scenario> {
        self.subset(&component.nurses)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scenario {}", self.name)?;
        writeln!(f, "  weeks: {} (planning week {})", self.nb_weeks, self.this_week)?;
        writeln!(f, "  skills: {}", self.skill_names.join(", "))?;
        writeln!(f, "  shifts:")?;
        for shift in self.shifts.working_shifts() {
            let forbidden: Vec<&str> = self
                .shifts
                .forbidden_successors(shift)
                .iter()
                .map(|s| self.shifts.name(*s))
                .collect();
            writeln!(
                f,
                "    {} ({}, {}) forbids [{}]",
                self.shifts.name(shift),
                self.shifts.min_cons(shift),
                self.shifts.max_cons(shift),
                forbidden.join(", ")
            )?;
        }
        writeln!(f, "  contracts:")?;
        for contract in &self.contracts {
            writeln!(f, "    {}", contract)?;
        }
        writeln!(f, "  nurses:")?;
        for nurse in &self.nurses {
            writeln!(f, "    {}", nurse)?;
        }
        writeln!(
            f,
            "  positions: {} in {} components",
            self.positions.len(),
            self.positions.components().len()
        )?;
        for position in self.positions.iter() {
            writeln!(f, "    {}", position)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> ShiftGraph {
        let mut g = ShiftGraph::new();
        let early = g.add_shift("Early", 1, 5);
        let late = g.add_shift("Late", 2, 4);
        g.forbid(late, early).unwrap();
        g
    }

    fn builder() -> ScenarioBuilder {
        Scenario::builder("ward")
            .nb_weeks(4)
            .this_week(1)
            .skill("Nurse")
            .skill("HeadNurse")
            .skill("Caretaker")
            .shifts(graph())
            .contract(Contract::unbounded("FullTime"))
            .contract(Contract::unbounded("PartTime"))
    }

    #[test]
    fn test_build_preprocesses_once() {
        let mut scenario = builder()
            .nurse(Nurse::new(10, "Ann", [0, 1], 0))
            .nurse(Nurse::new(11, "Bob", [0], 1))
            .nurse(Nurse::new(12, "Cid", [2], 1))
            .build()
            .unwrap();

        assert_eq!(scenario.positions().len(), 3);
        assert_eq!(scenario.positions().components().len(), 2);
        assert_eq!(scenario.first_day(), 7);
        assert_eq!(scenario.contract_of(1).unwrap().name, "PartTime");

        let err = scenario.preprocess_nurses().unwrap_err();
        assert_eq!(err, RosterError::PositionsAlreadyBuilt { count: 3 });
    }

    #[test]
    fn test_validation_errors() {
        let err = builder()
            .nurse(Nurse::new(0, "Ann", [0], 5))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RosterError::UnknownContract {
                nurse: 0,
                contract: 5
            }
        );

        let err = builder()
            .nurse(Nurse::new(0, "Ann", [7], 0))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RosterError::UnknownSkill {
                skill: 7,
                nb_skills: 3
            }
        );

        let err = builder()
            .nurse(Nurse::new(0, "Ann", [0], 0))
            .nurse(Nurse::new(0, "Bob", [1], 0))
            .build()
            .unwrap_err();
        assert!(matches!(err, RosterError::InvalidScenario(_)));
    }

    #[test]
    fn test_forbidden_successor_passthrough() {
        let scenario = builder().build().unwrap();
        assert!(scenario.is_forbidden_successor(1, 2));
        assert!(!scenario.is_forbidden_successor(2, 1));
        assert!(!scenario.is_forbidden_successor(1, 0));
    }

    #[test]
    fn test_initial_state_count() {
        let scenario = builder()
            .nurse(Nurse::new(0, "Ann", [0], 0))
            .build()
            .unwrap();
        assert!(scenario.check_initial_states(1).is_ok());
        assert_eq!(
            scenario.check_initial_states(3).unwrap_err(),
            RosterError::InitialStateCount {
                expected: 1,
                found: 3
            }
        );
    }

    #[test]
    fn test_component_scenario_keeps_ids() {
        let scenario = builder()
            .nurse(Nurse::new(10, "Ann", [0, 1], 0))
            .nurse(Nurse::new(11, "Cid", [2], 1))
            .nurse(Nurse::new(12, "Bob", [0], 1))
            .build()
            .unwrap();

        let component = scenario
            .positions()
            .components()
            .iter()
            .find(|c| c.nurses.contains(&0))
            .unwrap();
        let sub = scenario.component_scenario(component).unwrap();

        let ids: Vec<usize> = sub.nurses().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![10, 12]);
        assert_eq!(sub.positions().len(), 2);
        assert_eq!(sub.positions().components().len(), 1);
        assert!(scenario.subset(&[9]).is_err());
    }

    #[test]
    fn test_display_lists_shifts_and_positions() {
        let scenario = builder()
            .nurse(Nurse::new(0, "Ann", [0, 1], 0))
            .build()
            .unwrap();
        let text = scenario.to_string();
        assert!(text.contains("scenario ward"));
        assert!(text.contains("Late (2, 4) forbids [Early]"));
        assert!(text.contains("positions: 1 in 1 components"));
    }
}
