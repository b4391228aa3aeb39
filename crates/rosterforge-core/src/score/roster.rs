//! RosterScore - hard violations and weighted soft cost.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Two-level score of a roster.
///
/// The hard level is minus the number of hard violations (missing skill,
/// forbidden succession, minimum coverage shortfall). The soft level is minus
/// the weighted cost. A roster with fewer hard violations always wins.
///
/// ```
/// use rosterforge_core::RosterScore;
///
/// let clean = RosterScore::from_penalties(0, 300);
/// let broken = RosterScore::from_penalties(1, 0);
/// assert!(clean > broken);
/// assert!(clean.is_feasible());
/// assert_eq!(clean.to_string(), "0hard/-300soft");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterScore {
    hard: i64,
    soft: i64,
}

impl RosterScore {
    pub const ZERO: RosterScore = RosterScore { hard: 0, soft: 0 };

    #[inline]
    pub const fn of(hard: i64, soft: i64) -> Self {
        RosterScore { hard, soft }
    }

    /// Builds a score from a violation count and a non-negative cost.
    pub fn from_penalties(hard_violations: u64, cost: i64) -> Self {
        let hard = i64::try_from(hard_violations).unwrap_or(i64::MAX);
        RosterScore::of(-hard, -cost)
    }

    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }

    /// Number of hard violations.
    pub fn hard_violations(&self) -> u64 {
        self.hard.unsigned_abs()
    }

    /// Weighted soft cost, as a positive number.
    pub fn cost(&self) -> i64 {
        -self.soft
    }

    /// True when no hard constraint is violated.
    #[inline]
    pub const fn is_feasible(&self) -> bool {
        self.hard >= 0
    }
}

impl Ord for RosterScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.hard.cmp(&other.hard) {
            Ordering::Equal => self.soft.cmp(&other.soft),
            other => other,
        }
    }
}

impl PartialOrd for RosterScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for RosterScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        RosterScore::of(self.hard + other.hard, self.soft + other.soft)
    }
}

impl Sub for RosterScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        RosterScore::of(self.hard - other.hard, self.soft - other.soft)
    }
}

impl Neg for RosterScore {
    type Output = Self;

    fn neg(self) -> Self {
        RosterScore::of(-self.hard, -self.soft)
    }
}

impl fmt::Debug for RosterScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RosterScore({}, {})", self.hard, self.soft)
    }
}

impl fmt::Display for RosterScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hard/{}soft", self.hard, self.soft)
    }
}
