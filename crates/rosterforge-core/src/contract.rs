//! Work contracts shared by groups of nurses.

use std::fmt;

/// Static per-contract bounds.
///
/// A contract is owned by the scenario and referenced by index from every
/// nurse that works under it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contract {
    pub name: String,
    /// Minimum total days worked over the horizon.
    pub min_total_shifts: u32,
    /// Maximum total days worked over the horizon.
    pub max_total_shifts: u32,
    pub min_cons_days_work: u32,
    pub max_cons_days_work: u32,
    pub min_cons_days_off: u32,
    pub max_cons_days_off: u32,
    pub max_total_weekends: u32,
    /// Whether Saturday and Sunday must be both worked or both off.
    pub complete_weekends: bool,
}

impl Contract {
    /// Creates a contract with no effective bounds.
    pub fn unbounded(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_total_shifts: 0,
            max_total_shifts: u32::MAX,
            min_cons_days_work: 0,
            max_cons_days_work: u32::MAX,
            min_cons_days_off: 0,
            max_cons_days_off: u32::MAX,
            max_total_weekends: u32::MAX,
            complete_weekends: false,
        }
    }

    pub fn with_total_shifts(mut self, min: u32, max: u32) -> Self {
        self.min_total_shifts = min;
        self.max_total_shifts = max;
        self
    }

    pub fn with_cons_days_work(mut self, min: u32, max: u32) -> Self {
        self.min_cons_days_work = min;
        self.max_cons_days_work = max;
        self
    }

    pub fn with_cons_days_off(mut self, min: u32, max: u32) -> Self {
        self.min_cons_days_off = min;
        self.max_cons_days_off = max;
        self
    }

    pub fn with_max_total_weekends(mut self, max: u32) -> Self {
        self.max_total_weekends = max;
        self
    }

    pub fn with_complete_weekends(mut self, complete: bool) -> Self {
        self.complete_weekends = complete;
        self
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: total ({},{}) work ({},{}) off ({},{}) weekends {} complete {}",
            self.name,
            self.min_total_shifts,
            self.max_total_shifts,
            self.min_cons_days_work,
            self.max_cons_days_work,
            self.min_cons_days_off,
            self.max_cons_days_off,
            self.max_total_weekends,
            self.complete_weekends
        )
    }
}
