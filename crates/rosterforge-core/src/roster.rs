//! A nurse's day-indexed assignments.

use crate::error::{Result, RosterError};
use crate::shift::{ShiftId, SkillId, REST};

/// One day of a roster: the shift worked and the skill it is worked with.
///
/// The skill is meaningless on rest days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub shift: ShiftId,
    pub skill: SkillId,
}

impl Assignment {
    pub const REST: Assignment = Assignment {
        shift: REST,
        skill: 0,
    };

    pub const fn work(shift: ShiftId, skill: SkillId) -> Self {
        Self { shift, skill }
    }

    #[inline]
    pub const fn is_rest(&self) -> bool {
        self.shift == REST
    }
}

/// Fixed-length sequence of assignments covering the horizon
/// `[first_day, first_day + nb_days)`.
///
/// Public accessors take absolute day indices.
///
/// ```
/// use rosterforge_core::Roster;
///
/// let mut roster = Roster::new(7, 7);
/// roster.set(9, 2, 1).unwrap();
/// assert_eq!(roster.shift(9).unwrap(), 2);
/// assert_eq!(roster.shift(8).unwrap(), 0);
/// assert!(roster.set(14, 1, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    first_day: usize,
    days: Vec<Assignment>,
}

impl Roster {
    /// Creates a roster with every day set to rest.
    pub fn new(first_day: usize, nb_days: usize) -> Self {
        Self {
            first_day,
            days: vec![Assignment::REST; nb_days],
        }
    }

    /// Creates a roster from explicit assignments starting at `first_day`.
    pub fn from_assignments(first_day: usize, days: Vec<Assignment>) -> Self {
        Self { first_day, days }
    }

    pub fn first_day(&self) -> usize {
        self.first_day
    }

    pub fn nb_days(&self) -> usize {
        self.days.len()
    }

    /// Returns the day offset from the horizon start.
    pub fn offset(&self, day: usize) -> Result<usize> {
        day.checked_sub(self.first_day)
            .filter(|o| *o < self.days.len())
            .ok_or(RosterError::DayOutsideHorizon {
                day,
                first_day: self.first_day,
                nb_days: self.days.len(),
            })
    }

    pub fn get(&self, day: usize) -> Result<Assignment> {
        Ok(self.days[self.offset(day)?])
    }

    pub fn shift(&self, day: usize) -> Result<ShiftId> {
        self.get(day).map(|a| a.shift)
    }

    pub fn skill(&self, day: usize) -> Result<SkillId> {
        self.get(day).map(|a| a.skill)
    }

    /// Assigns `shift` worked with `skill` on `day`.
    pub fn set(&mut self, day: usize, shift: ShiftId, skill: SkillId) -> Result<()> {
        let offset = self.offset(day)?;
        self.days[offset] = Assignment { shift, skill };
        Ok(())
    }

    pub fn set_rest(&mut self, day: usize) -> Result<()> {
        self.set(day, REST, 0)
    }

    /// Resets every day to rest.
    pub fn clear(&mut self) {
        self.days.fill(Assignment::REST);
    }

    /// Assignments ordered by day offset.
    pub fn assignments(&self) -> &[Assignment] {
        &self.days
    }

    /// Shifts ordered by day offset.
    pub fn shifts(&self) -> Vec<ShiftId> {
        self.days.iter().map(|a| a.shift).collect()
    }

    /// Number of days with a working shift.
    pub fn nb_worked_days(&self) -> usize {
        self.days.iter().filter(|a| !a.is_rest()).count()
    }
}
