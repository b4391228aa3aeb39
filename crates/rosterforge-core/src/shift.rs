//! Shift types and the shift-succession graph.

use crate::error::{Result, RosterError};

/// Index of a shift type. Shift `0` is rest.
pub type ShiftId = usize;

/// Index of a skill.
pub type SkillId = usize;

/// The rest "shift".
pub const REST: ShiftId = 0;

/// Display name of the rest shift.
pub const REST_NAME: &str = "None";

/// Returns true if the shift is a working shift.
#[inline]
pub const fn is_working(shift: ShiftId) -> bool {
    shift != REST
}

/// Static shift data: names, consecutive-repeat bounds and forbidden successions.
///
/// Index 0 is always the rest shift. It carries no consecutive bounds and
/// never acts as a forbidden predecessor.
///
/// # Example
///
/// ```
/// use rosterforge_core::ShiftGraph;
///
/// let mut graph = ShiftGraph::new();
/// let early = graph.add_shift("Early", 2, 5);
/// let late = graph.add_shift("Late", 2, 4);
/// graph.forbid(late, early).unwrap();
///
/// assert!(graph.is_forbidden_successor(early, late));
/// assert!(!graph.is_forbidden_successor(late, early));
/// assert!(!graph.is_forbidden_successor(early, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShiftGraph {
    names: Vec<String>,
    min_cons: Vec<u32>,
    max_cons: Vec<u32>,
    forbidden: Vec<Vec<ShiftId>>,
}

impl Default for ShiftGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftGraph {
    /// Creates a graph holding only the rest shift.
    pub fn new() -> Self {
        Self {
            names: vec![REST_NAME.to_string()],
            min_cons: vec![0],
            max_cons: vec![0],
            forbidden: vec![Vec::new()],
        }
    }

    /// Adds a working shift and returns its id.
    pub fn add_shift(&mut self, name: impl Into<String>, min_cons: u32, max_cons: u32) -> ShiftId {
        self.names.push(name.into());
        self.min_cons.push(min_cons);
        self.max_cons.push(max_cons);
        self.forbidden.push(Vec::new());
        self.names.len() - 1
    }

    /// Registers `next` as a forbidden successor of `last`.
    pub fn forbid(&mut self, last: ShiftId, next: ShiftId) -> Result<()> {
        self.check(last)?;
        self.check(next)?;
        if last == REST {
            return Err(RosterError::InvalidScenario(
                "rest cannot have forbidden successors".to_string(),
            ));
        }
        if !self.forbidden[last].contains(&next) {
            self.forbidden[last].push(next);
        }
        Ok(())
    }

    fn check(&self, shift: ShiftId) -> Result<()> {
        if shift < self.names.len() {
            Ok(())
        } else {
            Err(RosterError::UnknownShift {
                shift,
                nb_shifts: self.names.len(),
            })
        }
    }

    /// Number of shifts, rest included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true when only the rest shift exists.
    pub fn is_empty(&self) -> bool {
        self.names.len() <= 1
    }

    /// Iterates over the working shift ids.
    pub fn working_shifts(&self) -> impl Iterator<Item = ShiftId> {
        1..self.names.len()
    }

    pub fn name(&self, shift: ShiftId) -> &str {
        &self.names[shift]
    }

    pub fn shift_by_name(&self, name: &str) -> Option<ShiftId> {
        self.names.iter().position(|n| n == name)
    }

    /// Minimum consecutive repeats of a shift.
    pub fn min_cons(&self, shift: ShiftId) -> u32 {
        self.min_cons[shift]
    }

    /// Maximum consecutive repeats of a shift.
    pub fn max_cons(&self, shift: ShiftId) -> u32 {
        self.max_cons[shift]
    }

    pub fn forbidden_successors(&self, shift: ShiftId) -> &[ShiftId] {
        &self.forbidden[shift]
    }

    /// Returns true if `next` may not immediately follow `last`.
    pub fn is_forbidden_successor(&self, next: ShiftId, last: ShiftId) -> bool {
        if last == REST {
            return false;
        }
        self.forbidden
            .get(last)
            .is_some_and(|succ| succ.contains(&next))
    }
}
