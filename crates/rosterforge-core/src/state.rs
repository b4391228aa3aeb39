//! Per-nurse, per-day temporal counters.

use crate::calendar;
use crate::shift::{ShiftId, REST};

/// Snapshot of a nurse's running counters at the end of a day.
///
/// A nurse's state sequence starts from a carried-over history state and
/// grows one entry per day through [`NurseState::advance`]; there is no other
/// way to produce a successor state.
///
/// # Example
///
/// ```
/// use rosterforge_core::NurseState;
///
/// let monday = NurseState::default().advance(1, 0);
/// let tuesday = monday.advance(1, 1);
/// assert_eq!(tuesday.cons_shifts, 2);
/// assert_eq!(tuesday.cons_days_worked, 2);
///
/// let wednesday = tuesday.advance(0, 2);
/// assert_eq!(wednesday.cons_days_off, 1);
/// assert_eq!(wednesday.cons_days_worked, 0);
/// assert_eq!(wednesday.total_days_worked, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NurseState {
    /// Shift worked this day, [`REST`] when resting.
    pub shift: ShiftId,
    /// Consecutive days on the same shift type; 0 while resting.
    pub cons_shifts: u32,
    pub cons_days_worked: u32,
    pub cons_days_off: u32,
    pub total_days_worked: u32,
    /// Weekends with both Saturday and Sunday worked.
    pub total_weekends_worked: u32,
}

impl NurseState {
    /// History state of a nurse whose last day was a working `shift`.
    pub fn after_work(
        shift: ShiftId,
        cons_shifts: u32,
        cons_days_worked: u32,
        total_days_worked: u32,
        total_weekends_worked: u32,
    ) -> Self {
        Self {
            shift,
            cons_shifts,
            cons_days_worked,
            cons_days_off: 0,
            total_days_worked,
            total_weekends_worked,
        }
    }

    /// History state of a nurse whose last day was a rest.
    pub fn after_rest(cons_days_off: u32, total_days_worked: u32, total_weekends_worked: u32) -> Self {
        Self {
            shift: REST,
            cons_shifts: 0,
            cons_days_worked: 0,
            cons_days_off,
            total_days_worked,
            total_weekends_worked,
        }
    }

    #[inline]
    pub fn is_working(&self) -> bool {
        self.shift != REST
    }

    /// Returns the state at the end of `day` given the shift worked that day.
    ///
    /// `self` must be the state at the end of the previous day.
    #[must_use]
    pub fn advance(&self, shift: ShiftId, day: usize) -> NurseState {
        if shift == REST {
            return NurseState {
                shift: REST,
                cons_shifts: 0,
                cons_days_worked: 0,
                cons_days_off: self.cons_days_off + 1,
                total_days_worked: self.total_days_worked,
                total_weekends_worked: self.total_weekends_worked,
            };
        }

        let cons_days_worked = if self.shift == REST {
            1
        } else {
            self.cons_days_worked + 1
        };
        let cons_shifts = if shift == self.shift {
            self.cons_shifts + 1
        } else {
            1
        };
        let weekend = u32::from(calendar::is_sunday(day) && self.shift != REST);

        NurseState {
            shift,
            cons_shifts,
            cons_days_worked,
            cons_days_off: 0,
            total_days_worked: self.total_days_worked + 1,
            total_weekends_worked: self.total_weekends_worked + weekend,
        }
    }
}

/// Builds the full state sequence for a horizon.
///
/// The result has `shifts.len() + 1` entries; entry 0 is `initial`, entry
/// `d + 1` is the state at the end of day `first_day + d`.
pub fn propagate(initial: NurseState, first_day: usize, shifts: &[ShiftId]) -> Vec<NurseState> {
    let mut states = Vec::with_capacity(shifts.len() + 1);
    states.push(initial);
    let mut current = initial;
    for (offset, &shift) in shifts.iter().enumerate() {
        current = current.advance(shift, first_day + offset);
        states.push(current);
    }
    states
}
