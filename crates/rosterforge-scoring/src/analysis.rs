//! Per-constraint breakdown and per-nurse indictments.

use std::fmt;

use rosterforge_core::{NurseId, RosterScore};

use crate::evaluator::Evaluation;
use crate::live::LiveNurse;

/// The constraints a roster is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Constraint {
    MinimumCoverage,
    RequiredSkill,
    ForbiddenSuccession,
    TotalAssignments,
    ConsecutiveDaysWorked,
    ConsecutiveDaysOff,
    ConsecutiveShifts,
    Preferences,
    TotalWeekends,
    CompleteWeekends,
    OptimalCoverage,
}

impl Constraint {
    /// Report order: hard constraints first.
    pub const ALL: [Constraint; 11] = [
        Constraint::MinimumCoverage,
        Constraint::RequiredSkill,
        Constraint::ForbiddenSuccession,
        Constraint::TotalAssignments,
        Constraint::ConsecutiveDaysWorked,
        Constraint::ConsecutiveDaysOff,
        Constraint::ConsecutiveShifts,
        Constraint::Preferences,
        Constraint::TotalWeekends,
        Constraint::CompleteWeekends,
        Constraint::OptimalCoverage,
    ];

    pub fn is_hard(self) -> bool {
        matches!(
            self,
            Constraint::MinimumCoverage
                | Constraint::RequiredSkill
                | Constraint::ForbiddenSuccession
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Constraint::MinimumCoverage => "Minimal coverage constraints",
            Constraint::RequiredSkill => "Required skill constraints",
            Constraint::ForbiddenSuccession => "Illegal shift type succession constraints",
            Constraint::TotalAssignments => "Total assignment constraints",
            Constraint::ConsecutiveDaysWorked => "Consecutive working days constraints",
            Constraint::ConsecutiveDaysOff => "Consecutive days off constraints",
            Constraint::ConsecutiveShifts => "Consecutive shifts constraints",
            Constraint::Preferences => "Preferences",
            Constraint::TotalWeekends => "Max working weekend",
            Constraint::CompleteWeekends => "Complete weekends",
            Constraint::OptimalCoverage => "Optimal coverage constraints",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Total of one constraint over the whole roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintAnalysis {
    pub constraint: Constraint,
    /// Violation count for hard constraints, weighted cost for soft ones.
    pub value: i64,
}

impl ConstraintAnalysis {
    pub fn is_hard(&self) -> bool {
        self.constraint.is_hard()
    }
}

/// Whole-roster breakdown, one entry per constraint in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostBreakdown {
    pub score: RosterScore,
    pub analyses: Vec<ConstraintAnalysis>,
}

impl CostBreakdown {
    /// Sums the nurses' reports and the coverage figures of `evaluation`.
    pub fn new(nurses: &[LiveNurse<'_>], evaluation: &Evaluation) -> Self {
        let analyses = Constraint::ALL
            .iter()
            .map(|&constraint| {
                let value = match constraint {
                    Constraint::MinimumCoverage => evaluation.min_cover_violations as i64,
                    Constraint::OptimalCoverage => evaluation.opt_cover_cost,
                    other => nurses.iter().map(|n| n.report().value_of(other)).sum(),
                };
                ConstraintAnalysis { constraint, value }
            })
            .collect();
        Self {
            score: evaluation.score,
            analyses,
        }
    }

    pub fn get(&self, constraint: Constraint) -> i64 {
        self.analyses
            .iter()
            .find(|a| a.constraint == constraint)
            .map_or(0, |a| a.value)
    }

    pub fn hard(&self) -> impl Iterator<Item = &ConstraintAnalysis> {
        self.analyses.iter().filter(|a| a.is_hard())
    }

    pub fn soft(&self) -> impl Iterator<Item = &ConstraintAnalysis> {
        self.analyses.iter().filter(|a| !a.is_hard())
    }

    /// Constraints with a non-zero total.
    pub fn non_zero(&self) -> Vec<&ConstraintAnalysis> {
        self.analyses.iter().filter(|a| a.value != 0).collect()
    }

    pub fn total_cost(&self) -> i64 {
        self.soft().map(|a| a.value).sum()
    }

    pub fn hard_violations(&self) -> u64 {
        self.hard().map(|a| a.value.unsigned_abs()).sum()
    }
}

impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hard constraints violations")?;
        writeln!(f, "---------------------------")?;
        for a in self.hard() {
            writeln!(f, "{}: {}", a.constraint, a.value)?;
        }
        writeln!(f)?;
        writeln!(f, "Cost per constraint type")?;
        writeln!(f, "------------------------")?;
        for a in self.soft() {
            writeln!(f, "{}: {}", a.constraint, a.value)?;
        }
        writeln!(f)?;
        writeln!(f, "---------------------------")?;
        writeln!(f)?;
        writeln!(f, "Total cost: {}", self.total_cost())?;
        writeln!(f, "Score: {}", self.score)
    }
}

/// How much one nurse contributes to the roster's cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NurseIndictment {
    pub nurse_index: usize,
    pub nurse: NurseId,
    pub name: String,
    pub cost: i64,
    pub hard_violations: u64,
    /// Non-zero per-nurse constraints, in report order.
    pub constraints: Vec<ConstraintAnalysis>,
}

impl NurseIndictment {
    pub fn new(nurse: &LiveNurse<'_>) -> Self {
        let report = nurse.report();
        let constraints = Constraint::ALL
            .iter()
            .map(|&constraint| ConstraintAnalysis {
                constraint,
                value: report.value_of(constraint),
            })
            .filter(|a| a.value != 0)
            .collect();
        Self {
            nurse_index: nurse.index(),
            nurse: nurse.id(),
            name: nurse.name().to_string(),
            cost: report.total_cost(),
            hard_violations: report.hard_violations(),
            constraints,
        }
    }

    pub fn score(&self) -> RosterScore {
        RosterScore::from_penalties(self.hard_violations, self.cost)
    }
}

/// Indictments of every nurse, worst first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Indictments {
    entries: Vec<NurseIndictment>,
}

impl Indictments {
    pub fn new(nurses: &[LiveNurse<'_>]) -> Self {
        let mut entries: Vec<NurseIndictment> = nurses.iter().map(NurseIndictment::new).collect();
        entries.sort_by(|a, b| a.score().cmp(&b.score()).then(a.nurse.cmp(&b.nurse)));
        Self { entries }
    }

    /// All nurses, worst score first, ties by nurse id.
    pub fn worst(&self) -> &[NurseIndictment] {
        &self.entries
    }

    /// Nurses with at least one violation or cost.
    pub fn indicted(&self) -> impl Iterator<Item = &NurseIndictment> {
        self.entries
            .iter()
            .filter(|e| e.cost != 0 || e.hard_violations != 0)
    }

    pub fn get(&self, nurse: NurseId) -> Option<&NurseIndictment> {
        self.entries.iter().find(|e| e.nurse == nurse)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
