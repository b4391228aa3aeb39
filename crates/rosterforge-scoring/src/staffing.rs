//! Upper and lower bounds on how much each nurse can work without penalty.

use rosterforge_core::{Contract, NurseState, REST};
use tracing::debug;

use crate::live::LiveNurse;

/// Days a nurse can work over the horizon without consecutive-day costs.
///
/// Complete weekends and preferences are ignored, so these are estimates
/// rather than exact bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkDayBounds {
    pub min: u32,
    pub max: u32,
}

impl WorkDayBounds {
    /// Bounds for a nurse starting from `initial` under `contract`.
    ///
    /// The history is finished first: a working nurse keeps working up to the
    /// stint bound, a resting nurse keeps resting. The rest of the horizon is
    /// filled with as many maximal (or minimal) work stints as fit.
    pub fn compute(contract: &Contract, initial: &NurseState, nb_days: usize) -> Self {
        let nb_days = nb_days as u64;
        let max_work = u64::from(contract.max_cons_days_work);
        let min_work = u64::from(contract.min_cons_days_work);
        let min_off = u64::from(contract.min_cons_days_off);
        let max_off = u64::from(contract.max_cons_days_off);

        let (mut max, mut min, days_max, days_min) = if initial.shift != REST {
            let worked = u64::from(initial.cons_days_worked);
            let max = max_work.saturating_sub(worked).min(nb_days);
            let min = min_work.saturating_sub(worked).min(nb_days);
            (
                max,
                min,
                nb_days.saturating_sub(max).saturating_sub(min_off),
                nb_days.saturating_sub(min).saturating_sub(max_off),
            )
        } else {
            let off = u64::from(initial.cons_days_off);
            (
                0,
                0,
                nb_days.saturating_sub(min_off.saturating_sub(off)),
                nb_days.saturating_sub(max_off.saturating_sub(off)),
            )
        };

        max += fill_with_stints(days_max, max_work, min_off);
        min += fill_with_stints(days_min, min_work, max_off);

        let max = max.min(nb_days);
        let min = min.min(max);
        Self {
            min: u32::try_from(min).unwrap_or(u32::MAX),
            max: u32::try_from(max).unwrap_or(u32::MAX),
        }
    }
}

// Working days in `days` covered by repeated (work, rest) stints.
fn fill_with_stints(days: u64, work: u64, rest: u64) -> u64 {
    let stint = work.saturating_add(rest);
    if stint == 0 {
        return days;
    }
    (days / stint).saturating_mul(work) + (days % stint).min(work)
}

/// Scenario-wide staffing capacity, with and without penalties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StaffingBounds {
    /// Nurse-days available if everyone works every day.
    pub max_total_staff: u64,
    /// Nurse-days available without consecutive-day costs.
    pub max_total_staff_no_penalty: u64,
    /// Per skill; a nurse counts once for each skill it holds.
    pub max_staff_per_skill: Vec<u64>,
    pub max_staff_per_skill_no_penalty: Vec<u64>,
}

impl StaffingBounds {
    pub fn compute(nurses: &[LiveNurse<'_>], nb_skills: usize, nb_days: usize) -> Self {
        let mut bounds = Self {
            max_total_staff: 0,
            max_total_staff_no_penalty: 0,
            max_staff_per_skill: vec![0; nb_skills],
            max_staff_per_skill_no_penalty: vec![0; nb_skills],
        };
        let nb_days = nb_days as u64;

        for nurse in nurses {
            let max = u64::from(nurse.max_work_days());
            bounds.max_total_staff += nb_days;
            bounds.max_total_staff_no_penalty += max;
            for &skill in nurse.nurse().skills() {
                if skill < nb_skills {
                    bounds.max_staff_per_skill[skill] += nb_days;
                    bounds.max_staff_per_skill_no_penalty[skill] += max;
                }
            }
        }

        for (skill, bound) in bounds.max_staff_per_skill_no_penalty.iter().enumerate() {
            debug!(
                event = "staffing_bounds",
                skill = skill as u64,
                max_staff = bounds.max_staff_per_skill[skill],
                max_staff_no_penalty = *bound,
            );
        }
        bounds
    }
}
