//! Shift-off requests.

use std::collections::{BTreeMap, BTreeSet};

use crate::nurse::NurseId;
use crate::shift::{ShiftId, REST};

/// What a nurse wishes off on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WishedOff {
    /// The nurse wants no working shift at all that day.
    pub whole_day: bool,
    pub shifts: BTreeSet<ShiftId>,
}

impl WishedOff {
    /// Returns true if working `shift` goes against this wish. Rest never does.
    pub fn contains(&self, shift: ShiftId) -> bool {
        shift != REST && (self.whole_day || self.shifts.contains(&shift))
    }

    pub fn is_empty(&self) -> bool {
        !self.whole_day && self.shifts.is_empty()
    }
}

/// Per-nurse map from absolute day to wished-off shifts.
///
/// Nurses are addressed by their index in the scenario's nurse list.
///
/// ```
/// use rosterforge_core::Preferences;
///
/// let mut prefs = Preferences::new(2);
/// prefs.wish_shift_off(0, 3, 1);
/// prefs.wish_day_off(1, 4);
///
/// assert!(prefs.wishes_off(0, 3, 1));
/// assert!(!prefs.wishes_off(0, 3, 2));
/// assert!(prefs.wishes_off(1, 4, 2));
/// assert!(!prefs.wishes_off(1, 4, 0));
/// assert_eq!(prefs.nb_requests(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preferences {
    wishes: Vec<BTreeMap<usize, WishedOff>>,
}

impl Preferences {
    /// Creates empty preferences for `nb_nurses` nurses.
    pub fn new(nb_nurses: usize) -> Self {
        Self {
            wishes: vec![BTreeMap::new(); nb_nurses],
        }
    }

    pub fn nb_nurses(&self) -> usize {
        self.wishes.len()
    }

    fn entry(&mut self, nurse: NurseId, day: usize) -> &mut WishedOff {
        if nurse >= self.wishes.len() {
            self.wishes.resize_with(nurse + 1, BTreeMap::new);
        }
        self.wishes[nurse].entry(day).or_default()
    }

    /// Records that `nurse` wishes `shift` off on `day`.
    pub fn wish_shift_off(&mut self, nurse: NurseId, day: usize, shift: ShiftId) {
        self.entry(nurse, day).shifts.insert(shift);
    }

    /// Records that `nurse` wishes no shift at all on `day`.
    pub fn wish_day_off(&mut self, nurse: NurseId, day: usize) {
        self.entry(nurse, day).whole_day = true;
    }

    /// All wishes of one nurse, keyed by day.
    pub fn nurse_wishes(&self, nurse: NurseId) -> Option<&BTreeMap<usize, WishedOff>> {
        self.wishes.get(nurse)
    }

    /// Returns true if `nurse` wishes `shift` off on `day`.
    pub fn wishes_off(&self, nurse: NurseId, day: usize, shift: ShiftId) -> bool {
        self.wishes
            .get(nurse)
            .and_then(|m| m.get(&day))
            .is_some_and(|w| w.contains(shift))
    }

    /// Number of (nurse, day) entries holding at least one wish.
    pub fn nb_requests(&self) -> usize {
        self.wishes
            .iter()
            .flat_map(|m| m.values())
            .filter(|w| !w.is_empty())
            .count()
    }

    /// Keeps only the given nurses, in the given order.
    pub fn subset(&self, nurses: &[NurseId]) -> Preferences {
        Preferences {
            wishes: nurses
                .iter()
                .map(|n| self.wishes.get(*n).cloned().unwrap_or_default())
                .collect(),
        }
    }
}
