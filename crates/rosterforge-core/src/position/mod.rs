//! Positions: the distinct skill-sets present in the nurse population.
//!
//! Positions live in a single arena ([`Positions`]) and refer to each other
//! by [`PositionId`]. The dominance relation, ranks and connected components
//! are computed once by [`PositionBuilder`].

mod builder;


use std::collections::BTreeSet;
use std::fmt;

use crate::shift::SkillId;

pub use builder::{Component, PositionBuilder, Positions};

/// Index of a position in the arena.
pub type PositionId = usize;

/// Index of a connected component of positions.
pub type ComponentId = usize;

/// Result of comparing two skill-sets by inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dominance {
    /// Strict superset.
    Dominates,
    /// Strict subset.
    DominatedBy,
    /// Equal sets or neither includes the other.
    Incomparable,
}

impl Dominance {
    /// `+1`, `-1` or `0`.
    pub fn sign(self) -> i8 {
        match self {
            Dominance::Dominates => 1,
            Dominance::DominatedBy => -1,
            Dominance::Incomparable => 0,
        }
    }
}

/// A distinct skill-set shared by one or more nurses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    id: PositionId,
    skills: Vec<SkillId>,
    above: BTreeSet<PositionId>,
    below: BTreeSet<PositionId>,
    rank: u32,
    component: Option<ComponentId>,
}

impl Position {
    /// Creates an unlinked position. Skills are sorted and deduplicated.
    pub fn new(id: PositionId, skills: impl IntoIterator<Item = SkillId>) -> Self {
        let mut skills: Vec<SkillId> = skills.into_iter().collect();
        skills.sort_unstable();
        skills.dedup();
        Self {
            id,
            skills,
            above: BTreeSet::new(),
            below: BTreeSet::new(),
            rank: 0,
            component: None,
        }
    }

    pub fn id(&self) -> PositionId {
        self.id
    }

    pub fn skills(&self) -> &[SkillId] {
        &self.skills
    }

    pub fn nb_skills(&self) -> usize {
        self.skills.len()
    }

    pub fn has_skill(&self, skill: SkillId) -> bool {
        self.skills.binary_search(&skill).is_ok()
    }

    /// Returns true if `skills` (sorted) is exactly this position's skill-set.
    pub fn matches(&self, skills: &[SkillId]) -> bool {
        self.skills.len() == skills.len() && self.skills.iter().zip(skills).all(|(a, b)| a == b)
    }

    /// Compares skill-sets by strict inclusion.
    ///
    /// ```
    /// use rosterforge_core::position::{Dominance, Position};
    ///
    /// let ab = Position::new(0, [0, 1]);
    /// let a = Position::new(1, [0]);
    /// let c = Position::new(2, [2]);
    /// assert_eq!(ab.compare(&a), Dominance::Dominates);
    /// assert_eq!(a.compare(&ab), Dominance::DominatedBy);
    /// assert_eq!(a.compare(&c), Dominance::Incomparable);
    /// ```
    pub fn compare(&self, other: &Position) -> Dominance {
        use std::cmp::Ordering::*;
        match self.skills.len().cmp(&other.skills.len()) {
            Greater if other.skills.iter().all(|s| self.has_skill(*s)) => Dominance::Dominates,
            Less if self.skills.iter().all(|s| other.has_skill(*s)) => Dominance::DominatedBy,
            _ => Dominance::Incomparable,
        }
    }

    /// Returns true if the two skill-sets intersect.
    pub fn share_skill(&self, other: &Position) -> bool {
        self.skills.iter().any(|s| other.has_skill(*s))
    }

    /// Positions that strictly dominate this one.
    pub fn above(&self) -> &BTreeSet<PositionId> {
        &self.above
    }

    /// Positions this one strictly dominates.
    pub fn below(&self) -> &BTreeSet<PositionId> {
        &self.below
    }

    /// Length of the longest chain of strictly dominated positions beneath
    /// this one; 0 when it dominates no position.
    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn component(&self) -> Option<ComponentId> {
        self.component
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position {} rank {} skills {:?} above {:?} below {:?}",
            self.id, self.rank, self.skills, self.above, self.below
        )
    }
}
