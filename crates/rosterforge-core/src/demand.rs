//! Staffing demand over a horizon.

use crate::error::{Result, RosterError};
use crate::grid::Grid3;
use crate::shift::{ShiftId, SkillId};

/// Minimum and optimal staffing targets per `(day, shift, skill)`.
///
/// Grids are indexed by day offset from `first_day`. The rest shift row is
/// present but always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Demand {
    pub name: String,
    first_day: usize,
    min: Grid3<u32>,
    opt: Grid3<u32>,
}

impl Demand {
    /// Creates an all-zero demand.
    pub fn new(
        name: impl Into<String>,
        first_day: usize,
        nb_days: usize,
        nb_shifts: usize,
        nb_skills: usize,
    ) -> Self {
        Self {
            name: name.into(),
            first_day,
            min: Grid3::new(nb_days, nb_shifts, nb_skills, 0),
            opt: Grid3::new(nb_days, nb_shifts, nb_skills, 0),
        }
    }

    /// Creates a demand from prebuilt grids, which must share dimensions.
    pub fn from_grids(
        name: impl Into<String>,
        first_day: usize,
        min: Grid3<u32>,
        opt: Grid3<u32>,
    ) -> Result<Self> {
        let (a, b) = (min.dims(), opt.dims());
        if a != b {
            let (what, expected, found) = if a.0 != b.0 {
                ("demand days", a.0, b.0)
            } else if a.1 != b.1 {
                ("demand shifts", a.1, b.1)
            } else {
                ("demand skills", a.2, b.2)
            };
            return Err(RosterError::DimensionMismatch {
                what,
                expected,
                found,
            });
        }
        Ok(Self {
            name: name.into(),
            first_day,
            min,
            opt,
        })
    }

    pub fn first_day(&self) -> usize {
        self.first_day
    }

    pub fn nb_days(&self) -> usize {
        self.min.nb_days()
    }

    pub fn nb_shifts(&self) -> usize {
        self.min.nb_shifts()
    }

    pub fn nb_skills(&self) -> usize {
        self.min.nb_skills()
    }

    /// Minimum staffing grid, indexed by day offset.
    pub fn min_grid(&self) -> &Grid3<u32> {
        &self.min
    }

    /// Optimal staffing grid, indexed by day offset.
    pub fn opt_grid(&self) -> &Grid3<u32> {
        &self.opt
    }

    /// Sets both targets for an absolute `day`.
    pub fn set(
        &mut self,
        day: usize,
        shift: ShiftId,
        skill: SkillId,
        min: u32,
        opt: u32,
    ) -> Result<()> {
        let nb_days = self.nb_days();
        let offset = day
            .checked_sub(self.first_day)
            .filter(|o| *o < nb_days)
            .ok_or(RosterError::DayOutsideHorizon {
                day,
                first_day: self.first_day,
                nb_days,
            })?;
        if shift == 0 || shift >= self.nb_shifts() {
            return Err(RosterError::UnknownShift {
                shift,
                nb_shifts: self.nb_shifts(),
            });
        }
        if skill >= self.nb_skills() {
            return Err(RosterError::UnknownSkill {
                skill,
                nb_skills: self.nb_skills(),
            });
        }
        self.min[(offset, shift, skill)] = min;
        self.opt[(offset, shift, skill)] = opt;
        Ok(())
    }

    /// Total minimum demand over all cells.
    pub fn total_min(&self) -> u64 {
        self.min.iter().map(|(_, v)| u64::from(*v)).sum()
    }

    /// Total optimal demand over all cells.
    pub fn total_opt(&self) -> u64 {
        self.opt.iter().map(|(_, v)| u64::from(*v)).sum()
    }

    /// Optimal demand summed over days and shifts for one skill.
    pub fn opt_for_skill(&self, skill: SkillId) -> u64 {
        self.opt
            .iter()
            .filter(|((_, _, sk), _)| *sk == skill)
            .map(|(_, v)| u64::from(*v))
            .sum()
    }
}
