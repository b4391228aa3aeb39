//! Whole-roster evaluation: nurse reports plus demand coverage.

use std::time::Instant;

use rayon::prelude::*;
use rosterforge_config::{RosterConfig, Weights};
use rosterforge_core::{Demand, Grid3, NurseState, Result, RosterError, RosterScore, ShiftGraph, REST};
use tracing::{debug, info};

use crate::checker::ConstraintChecker;
use crate::live::LiveNurse;

/// Result of one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub score: RosterScore,
    /// Nurse costs plus optimal coverage cost.
    pub total_cost: i64,
    /// Sum of the nurses' own soft costs.
    pub nurse_cost: i64,
    /// Weighted shortfall below the optimal demand.
    pub opt_cover_cost: i64,
    /// Missing nurses below the minimum demand.
    pub min_cover_violations: u64,
    pub skill_violations: u64,
    pub succession_violations: u64,
    /// Nurses assigned per (day offset, shift, skill).
    pub coverage: Grid3<u32>,
    /// End-of-horizon state of every nurse, in nurse order.
    pub final_states: Vec<NurseState>,
}

impl Evaluation {
    pub fn hard_violations(&self) -> u64 {
        self.min_cover_violations + self.skill_violations + self.succession_violations
    }

    pub fn is_feasible(&self) -> bool {
        self.hard_violations() == 0
    }
}

/// Checks every nurse and adds the coverage cost.
///
/// Per-nurse checks only touch their own report, so they may run on the
/// rayon pool. Coverage is always accumulated afterwards on one thread.
#[derive(Debug, Clone)]
pub struct SolutionEvaluator<'a> {
    shifts: &'a ShiftGraph,
    demand: &'a Demand,
    weights: Weights,
    parallel: bool,
}

impl<'a> SolutionEvaluator<'a> {
    pub fn new(shifts: &'a ShiftGraph, demand: &'a Demand, weights: Weights) -> Self {
        Self {
            shifts,
            demand,
            weights,
            parallel: false,
        }
    }

    pub fn from_config(shifts: &'a ShiftGraph, demand: &'a Demand, config: &RosterConfig) -> Self {
        Self::new(shifts, demand, config.weights).with_parallel(config.evaluation.parallel)
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn demand(&self) -> &Demand {
        self.demand
    }

    /// Rebuilds every nurse's report and returns the aggregated result.
    ///
    /// Calling it twice on unchanged rosters gives identical results.
    /// Fails only if a roster does not cover the demand's horizon.
    pub fn evaluate(&self, nurses: &mut [LiveNurse<'_>]) -> Result<Evaluation> {
        let started = Instant::now();
        let nb_days = self.demand.nb_days();
        debug!(
            event = "evaluate_start",
            nurse_count = nurses.len() as u64,
            nb_days = nb_days as u64,
            parallel = self.parallel,
        );

        for nurse in nurses.iter() {
            let roster = nurse.roster();
            if roster.first_day() != self.demand.first_day() || roster.nb_days() != nb_days {
                return Err(RosterError::DimensionMismatch {
                    what: "roster horizon",
                    expected: nb_days,
                    found: roster.nb_days(),
                });
            }
        }
        if self.demand.nb_shifts() != self.shifts.len() {
            return Err(RosterError::DimensionMismatch {
                what: "demand shifts",
                expected: self.shifts.len(),
                found: self.demand.nb_shifts(),
            });
        }

        let checker = ConstraintChecker::new(self.shifts, &self.weights);
        if self.parallel {
            nurses.par_iter_mut().try_for_each(|n| n.check(&checker))?;
        } else {
            nurses.iter_mut().try_for_each(|n| n.check(&checker))?;
        }

        let mut coverage = Grid3::new(nb_days, self.demand.nb_shifts(), self.demand.nb_skills(), 0u32);
        let (mut nurse_cost, mut skill_violations, mut succession_violations) = (0i64, 0u64, 0u64);
        for nurse in nurses.iter() {
            let report = nurse.report();
            nurse_cost += report.total_cost();
            skill_violations += report.skill_violations();
            succession_violations += report.succession_violations();
            for (offset, a) in nurse.roster().assignments().iter().enumerate() {
                if a.shift != REST {
                    if let Some(count) = coverage.get_mut(offset, a.shift, a.skill) {
                        *count += 1;
                    }
                }
            }
        }

        let (mut min_cover_violations, mut opt_shortfall) = (0u64, 0u64);
        for ((day, shift, skill), &covered) in coverage.iter() {
            if shift == REST {
                continue;
            }
            let min = self.demand.min_grid()[(day, shift, skill)];
            let opt = self.demand.opt_grid()[(day, shift, skill)];
            min_cover_violations += u64::from(min.saturating_sub(covered));
            opt_shortfall += u64::from(opt.saturating_sub(covered));
        }
        let opt_cover_cost = self.weights.optimal_demand * opt_shortfall as i64;
        let total_cost = nurse_cost + opt_cover_cost;
        let hard = min_cover_violations + skill_violations + succession_violations;
        let score = RosterScore::from_penalties(hard, total_cost);

        info!(
            event = "evaluate_end",
            nurse_count = nurses.len() as u64,
            nb_days = nb_days as u64,
            total_cost = total_cost,
            hard_violations = hard,
            feasible = hard == 0,
            duration_ms = started.elapsed().as_millis() as u64,
        );

        Ok(Evaluation {
            score,
            total_cost,
            nurse_cost,
            opt_cover_cost,
            min_cover_violations,
            skill_violations,
            succession_violations,
            coverage,
            final_states: nurses.iter().map(LiveNurse::final_state).collect(),
        })
    }
}
